use std::fmt;

use crate::math::{Point3, Vector3};

use super::Assembly;

/// A boundary condition at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Support {
    pub tag: String,
    pub point: Point3,
    /// Restrained degrees of freedom: translations x, y, z then rotations x, y, z.
    pub fixed: [bool; 6],
}

impl Support {
    /// A support restraining all translations and leaving rotations free.
    #[must_use]
    pub fn pinned(tag: impl Into<String>, point: Point3) -> Self {
        Self {
            tag: tag.into(),
            point,
            fixed: [true, true, true, false, false, false],
        }
    }

    /// A support restraining every degree of freedom.
    #[must_use]
    pub fn fixed(tag: impl Into<String>, point: Point3) -> Self {
        Self {
            tag: tag.into(),
            point,
            fixed: [true; 6],
        }
    }
}

/// An action applied to the structure, in kN.
#[derive(Debug, Clone, PartialEq)]
pub enum Load {
    /// Force and moment at a point.
    Point {
        tag: String,
        load_case: u32,
        point: Point3,
        force: Vector3,
        moment: Vector3,
    },
    /// Self-weight acting along `direction`.
    Gravity {
        tag: String,
        load_case: u32,
        direction: Vector3,
    },
}

impl Load {
    /// Gravity pointing down the z axis.
    #[must_use]
    pub fn gravity(tag: impl Into<String>, load_case: u32) -> Self {
        Self::Gravity {
            tag: tag.into(),
            load_case,
            direction: Vector3::new(0.0, 0.0, -1.0),
        }
    }

    #[must_use]
    pub fn load_case(&self) -> u32 {
        match self {
            Self::Point { load_case, .. } | Self::Gravity { load_case, .. } => *load_case,
        }
    }
}

/// An assembly bundled with the supports and loads for structural analysis.
///
/// Supports and loads play no part in node construction.
#[derive(Debug, Clone, Default)]
pub struct StructuralAssembly {
    assembly: Assembly,
    supports: Vec<Support>,
    loads: Vec<Load>,
}

impl StructuralAssembly {
    #[must_use]
    pub fn new(assembly: Assembly) -> Self {
        Self {
            assembly,
            supports: Vec::new(),
            loads: Vec::new(),
        }
    }

    /// Adds a support unless an equal one is present; returns the support count.
    pub fn add_support(&mut self, support: Support) -> usize {
        if !self.supports.contains(&support) {
            self.supports.push(support);
        }
        self.supports.len()
    }

    /// Adds a load unless an equal one is present; returns the load count.
    pub fn add_load(&mut self, load: Load) -> usize {
        if !self.loads.contains(&load) {
            self.loads.push(load);
        }
        self.loads.len()
    }

    #[must_use]
    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    pub fn assembly_mut(&mut self) -> &mut Assembly {
        &mut self.assembly
    }

    #[must_use]
    pub fn supports(&self) -> &[Support] {
        &self.supports
    }

    #[must_use]
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Valid when the wrapped assembly is.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.assembly.is_valid()
    }
}

impl fmt::Display for StructuralAssembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<StructuralAssembly>")?;
        writeln!(f, " Supports: {}", self.supports.len())?;
        write!(f, " Loads: {}", self.loads.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::model::{Element, ElementStore};

    #[test]
    fn supports_and_loads_are_deduplicated() {
        let mut s = StructuralAssembly::default();
        let base = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(s.add_support(Support::pinned("base", base)), 1);
        assert_eq!(s.add_support(Support::pinned("base", base)), 1);
        assert_eq!(s.add_support(Support::fixed("base", base)), 2);

        assert_eq!(s.add_load(Load::gravity("self", 0)), 1);
        assert_eq!(s.add_load(Load::gravity("self", 0)), 1);
        assert_eq!(s.add_load(Load::gravity("self", 1)), 2);
        assert_eq!(s.loads()[1].load_case(), 1);
    }

    #[test]
    fn validity_follows_wrapped_assembly() {
        let mut store = ElementStore::new();
        let id = store.add_element(Element::new(
            Segment::new(Point3::origin(), Point3::new(0.0, 0.0, 3.0)).unwrap(),
        ));

        let mut s = StructuralAssembly::new(Assembly::new());
        assert!(!s.is_valid());
        s.assembly_mut().add_element(&store, id).unwrap();
        assert!(s.is_valid());
        assert_eq!(s.assembly().element_count(), 1);
    }

    #[test]
    fn display_summarises_counts() {
        let mut s = StructuralAssembly::default();
        s.add_load(Load::Point {
            tag: "snow".into(),
            load_case: 2,
            point: Point3::new(1.0, 0.0, 3.0),
            force: Vector3::new(0.0, 0.0, -5.0),
            moment: Vector3::zeros(),
        });
        let text = s.to_string();
        assert!(text.contains("Supports: 0"));
        assert!(text.contains("Loads: 1"));
    }
}
