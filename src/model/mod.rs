pub mod element;
pub mod node;

pub use element::{Element, ElementId, SectionAssignment, UNTAGGED};
pub use node::{Node, NodeId};

use crate::error::AssemblyError;
use slotmap::SlotMap;

/// Central arena that owns all structural elements.
///
/// Elements are referenced by typed IDs (generational indices), so
/// assemblies can share elements without owning or copying them.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: SlotMap<ElementId, Element>,
}

impl ElementStore {
    /// Creates a new, empty element store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element and returns its ID.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        self.elements.insert(element)
    }

    /// Returns a reference to the element, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not in the store.
    pub fn element(&self, id: ElementId) -> Result<&Element, AssemblyError> {
        self.elements.get(id).ok_or(AssemblyError::ElementNotFound)
    }

    /// Returns a mutable reference to the element, or an error if not found.
    ///
    /// Changing the curve of an element already added to an assembly leaves
    /// that assembly's nodes stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not in the store.
    pub fn element_mut(&mut self, id: ElementId) -> Result<&mut Element, AssemblyError> {
        self.elements
            .get_mut(id)
            .ok_or(AssemblyError::ElementNotFound)
    }

    /// Returns `true` if the store holds an element with this ID.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of elements in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over all elements and their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::math::Point3;

    fn beam() -> Element {
        Element::new(Segment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0)).unwrap())
    }

    #[test]
    fn new_element_defaults() {
        let e = beam();
        assert_eq!(e.tag, UNTAGGED);
        assert!(e.intersects_with_others);
        assert!(e.assignments.is_empty());
        assert_eq!(e.point_at_end(), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn add_and_lookup_element() {
        let mut store = ElementStore::new();
        assert!(store.is_empty());
        let id = store.add_element(beam().with_tag("purlin"));
        assert_eq!(store.len(), 1);
        assert!(store.contains(id));
        assert_eq!(store.element(id).unwrap().tag, "purlin");

        store.element_mut(id).unwrap().intersects_with_others = false;
        assert!(!store.element(id).unwrap().intersects_with_others);
    }

    #[test]
    fn missing_element_is_an_error() {
        let mut other = ElementStore::new();
        let foreign = other.add_element(beam());
        let store = ElementStore::new();
        assert!(matches!(
            store.element(foreign),
            Err(AssemblyError::ElementNotFound)
        ));
    }
}
