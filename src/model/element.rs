use crate::catalog::{CrossSection, MaterialProperty};
use crate::geometry::{Curve, MemberCurve};
use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for an element in the element store.
    pub struct ElementId;
}

/// Tag given to elements that were never labelled.
pub const UNTAGGED: &str = "N/A";

/// A cross-section and the material it is made of, attached to an element.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionAssignment {
    pub cross_section: CrossSection,
    pub material: MaterialProperty,
}

impl SectionAssignment {
    #[must_use]
    pub fn new(cross_section: CrossSection, material: MaterialProperty) -> Self {
        Self {
            cross_section,
            material,
        }
    }
}

/// A one-dimensional structural member.
///
/// Elements with `intersects_with_others` set take part in mid-span
/// intersection search. Elements without it only connect to others at
/// their own end points.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub curve: MemberCurve,
    pub tag: String,
    pub intersects_with_others: bool,
    pub assignments: Vec<SectionAssignment>,
}

impl Element {
    /// Creates an untagged, intersecting element with no section assignments.
    #[must_use]
    pub fn new(curve: impl Into<MemberCurve>) -> Self {
        Self {
            curve: curve.into(),
            tag: UNTAGGED.to_owned(),
            intersects_with_others: true,
            assignments: Vec::new(),
        }
    }

    /// Sets the grouping tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets whether the element takes part in mid-span intersection search.
    #[must_use]
    pub fn with_intersection(mut self, intersects_with_others: bool) -> Self {
        self.intersects_with_others = intersects_with_others;
        self
    }

    /// Appends a section assignment.
    #[must_use]
    pub fn with_assignment(mut self, assignment: SectionAssignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    #[must_use]
    pub fn point_at_start(&self) -> Point3 {
        self.curve.start_point()
    }

    #[must_use]
    pub fn point_at_end(&self) -> Point3 {
        self.curve.end_point()
    }
}
