mod cross_section;
mod material;

pub use cross_section::{CrossSection, RectangularSection};
pub use material::{DensityProperties, MaterialProperty, StiffnessProperties, StrengthProperties};

use crate::model::SectionAssignment;

/// Distinct tags, cross-sections and materials referenced by an assembly.
///
/// Entries are kept in first-seen order and compared by value. Each section
/// remembers the material it was last assigned with.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tags: Vec<String>,
    cross_sections: Vec<CrossSection>,
    materials: Vec<MaterialProperty>,
    /// Parallel to `cross_sections`; index into `materials`.
    section_materials: Vec<Option<usize>>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag if unseen and returns its index.
    pub fn add_tag(&mut self, tag: &str) -> usize {
        if let Some(i) = self.tags.iter().position(|t| t == tag) {
            return i;
        }
        self.tags.push(tag.to_owned());
        self.tags.len() - 1
    }

    /// Adds a cross-section if unseen and returns its index.
    pub fn add_cross_section(&mut self, section: &CrossSection) -> usize {
        if let Some(i) = self.cross_sections.iter().position(|s| s == section) {
            return i;
        }
        self.cross_sections.push(section.clone());
        self.section_materials.push(None);
        self.cross_sections.len() - 1
    }

    /// Adds a material if unseen and returns its index.
    pub fn add_material(&mut self, material: &MaterialProperty) -> usize {
        if let Some(i) = self.materials.iter().position(|m| m == material) {
            return i;
        }
        self.materials.push(material.clone());
        self.materials.len() - 1
    }

    /// Records both halves of an assignment and links the section to the material.
    ///
    /// A section reused with a different material is relinked to the newer one.
    pub fn add_assignment(&mut self, assignment: &SectionAssignment) {
        let section = self.add_cross_section(&assignment.cross_section);
        let material = self.add_material(&assignment.material);
        self.section_materials[section] = Some(material);
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn cross_sections(&self) -> &[CrossSection] {
        &self.cross_sections
    }

    #[must_use]
    pub fn materials(&self) -> &[MaterialProperty] {
        &self.materials
    }

    /// Material last assigned together with `section`.
    #[must_use]
    pub fn material_for(&self, section: &CrossSection) -> Option<&MaterialProperty> {
        let i = self.cross_sections.iter().position(|s| s == section)?;
        self.section_materials[i].map(|m| &self.materials[m])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn section(name: &str) -> CrossSection {
        RectangularSection::new(name, 200.0, 100.0).unwrap().into()
    }

    fn material(class: &str) -> MaterialProperty {
        MaterialProperty {
            class: class.to_owned(),
            ..MaterialProperty::default()
        }
    }

    #[test]
    fn tags_are_distinct_in_first_seen_order() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.add_tag("beam"), 0);
        assert_eq!(catalog.add_tag("column"), 1);
        assert_eq!(catalog.add_tag("beam"), 0);
        assert_eq!(catalog.tags(), ["beam", "column"]);
    }

    #[test]
    fn assignment_links_section_to_material() {
        let mut catalog = Catalog::new();
        catalog.add_assignment(&SectionAssignment::new(section("a"), material("GL24")));
        catalog.add_assignment(&SectionAssignment::new(section("b"), material("GL24")));

        assert_eq!(catalog.cross_sections().len(), 2);
        assert_eq!(catalog.materials().len(), 1);
        assert_eq!(catalog.material_for(&section("b")).unwrap().class, "GL24");
    }

    #[test]
    fn reused_section_takes_last_material() {
        let mut catalog = Catalog::new();
        catalog.add_assignment(&SectionAssignment::new(section("a"), material("GL24")));
        catalog.add_assignment(&SectionAssignment::new(section("a"), material("GL30")));

        assert_eq!(catalog.cross_sections().len(), 1);
        assert_eq!(catalog.materials().len(), 2);
        assert_eq!(catalog.material_for(&section("a")).unwrap().class, "GL30");
    }

    #[test]
    fn unlinked_section_has_no_material() {
        let mut catalog = Catalog::new();
        catalog.add_cross_section(&section("a"));
        assert!(catalog.material_for(&section("a")).is_none());
        assert!(catalog.material_for(&section("zz")).is_none());
    }
}
