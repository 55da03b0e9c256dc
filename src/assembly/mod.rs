mod detail;
mod registry;
mod settings;
mod structural;

pub use detail::Detail;
pub use registry::NodeRegistry;
pub use settings::{AssemblySettings, NodeMatching};
pub use structural::{Load, StructuralAssembly, Support};

use std::fmt;

use slotmap::SecondaryMap;
use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::geometry::Curve;
use crate::math::Point3;
use crate::model::{ElementId, ElementStore, Node, NodeId};

/// Connectivity graph of a set of structural elements.
///
/// Elements live in an [`ElementStore`] and are added by ID. Each addition
/// registers the element's end points as nodes and searches for contacts
/// with every earlier element that takes part in intersection search.
/// Once all elements are in, [`derive_details`](Self::derive_details)
/// lists the elements meeting at each node.
///
/// Cloning an assembly copies its nodes, incidence lists and catalog; the
/// clone evolves independently. Element data stays in the store.
#[derive(Debug, Clone)]
pub struct Assembly {
    settings: AssemblySettings,
    registry: NodeRegistry,
    /// Element IDs in insertion order.
    elements: Vec<ElementId>,
    /// Node indices on each element, parallel to `elements`.
    incidence: Vec<Vec<NodeId>>,
    slots: SecondaryMap<ElementId, usize>,
    catalog: Catalog,
    details: Vec<Detail>,
}

impl Default for Assembly {
    fn default() -> Self {
        Self::from_valid_settings(AssemblySettings::default())
    }
}

impl Assembly {
    /// Creates an empty assembly with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty assembly with the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not positive and finite.
    pub fn with_settings(settings: AssemblySettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::from_valid_settings(settings))
    }

    fn from_valid_settings(settings: AssemblySettings) -> Self {
        Self {
            settings,
            registry: NodeRegistry::new(settings),
            elements: Vec::new(),
            incidence: Vec::new(),
            slots: SecondaryMap::new(),
            catalog: Catalog::new(),
            details: Vec::new(),
        }
    }

    /// Adds an element and returns the number of elements in the assembly.
    ///
    /// Adding an element that is already present changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if `id`, or an element added earlier, is missing
    /// from `store`.
    pub fn add_element(&mut self, store: &ElementStore, id: ElementId) -> Result<usize> {
        if self.slots.contains_key(id) {
            return Ok(self.elements.len());
        }
        let element = store.element(id)?;

        let slot = self.elements.len();
        self.elements.push(id);
        self.incidence.push(Vec::new());
        self.slots.insert(id, slot);

        let start = element.point_at_start();
        let end = element.point_at_end();
        self.register(slot, start);
        self.register(slot, end);

        self.catalog.add_tag(&element.tag);
        for assignment in &element.assignments {
            self.catalog.add_assignment(assignment);
        }

        let tolerance = self.settings.tolerance;
        let mut contacts = 0usize;
        for other_slot in 0..slot {
            let other = store.element(self.elements[other_slot])?;
            if !other.intersects_with_others {
                continue;
            }
            let events = other.curve.intersect(&element.curve, tolerance);
            if events.is_empty() {
                continue;
            }
            trace!(
                element = ?id,
                other = ?self.elements[other_slot],
                events = events.len(),
                "curve contact"
            );

            for event in events {
                if element.intersects_with_others {
                    for point in event.points() {
                        self.register(slot, point);
                        self.register(other_slot, point);
                        contacts += 1;
                    }
                } else if self.registry.points_match(&event.point_a, &start)
                    || self.registry.points_match(&event.point_a, &end)
                {
                    // Endpoint-only members connect where they end on another member.
                    // Only the first point of an event is tested: a collinear member
                    // running past the host's start overlaps from that start, so its
                    // own landing end (`point_a2`) is not registered on the host.
                    self.register(other_slot, event.point_a);
                    contacts += 1;
                }
            }
        }

        debug!(
            element = ?id,
            tag = %element.tag,
            nodes = self.incidence[slot].len(),
            contacts,
            total_nodes = self.registry.len(),
            "element added"
        );
        Ok(self.elements.len())
    }

    fn register(&mut self, slot: usize, point: Point3) -> NodeId {
        self.registry.register_on(&mut self.incidence[slot], point)
    }

    /// Lists the elements meeting at each node, one detail per node.
    ///
    /// Rebuilt from scratch on every call.
    #[must_use]
    pub fn derive_details(&self) -> Vec<Detail> {
        let details =
            detail::derive_details(self.registry.nodes(), &self.elements, &self.incidence);
        debug!(details = details.len(), "details derived");
        details
    }

    /// Derives the details and keeps them on the assembly, replacing any
    /// previously generated set.
    pub fn generate_details(&mut self) -> &[Detail] {
        self.details = self.derive_details();
        &self.details
    }

    /// Details from the last call to [`generate_details`](Self::generate_details).
    #[must_use]
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Sorted curve parameters of the distinct nodes on an element.
    ///
    /// Each node is projected onto the element's curve. A parameter within
    /// tolerance of the closest already accepted one is dropped. An element
    /// not in the assembly yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is in the assembly but missing from `store`.
    pub fn node_parameters_on(&self, store: &ElementStore, id: ElementId) -> Result<Vec<f64>> {
        let Some(&slot) = self.slots.get(id) else {
            return Ok(Vec::new());
        };
        let curve = &store.element(id)?.curve;
        let tolerance = self.settings.tolerance;

        let mut params: Vec<f64> = Vec::with_capacity(self.incidence[slot].len());
        for node in &self.incidence[slot] {
            let point = self.registry.nodes()[node.index()].point;
            let t = curve.closest_parameter(&point);
            let closest = params
                .iter()
                .copied()
                .min_by(|a, b| (a - t).abs().total_cmp(&(b - t).abs()));
            match closest {
                Some(c) if (c - t).abs() <= tolerance => {}
                _ => params.push(t),
            }
        }
        params.sort_by(f64::total_cmp);
        Ok(params)
    }

    /// Node indices on an element in registration order, or `None` if the
    /// element is not in the assembly.
    #[must_use]
    pub fn node_ids_on(&self, id: ElementId) -> Option<&[NodeId]> {
        self.slots.get(id).map(|&slot| self.incidence[slot].as_slice())
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.slots.contains_key(id)
    }

    /// Element IDs in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        self.registry.nodes()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.registry.node(id)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &AssemblySettings {
        &self.settings
    }

    /// An assembly is valid once it holds at least one element.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.elements.is_empty()
    }
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<Assembly>")?;
        writeln!(f, " Elements: {}", self.elements.len())?;
        writeln!(f, " Nodes: {}", self.registry.len())?;
        writeln!(f, " CrossSections: {}", self.catalog.cross_sections().len())?;
        write!(f, " Material Properties: {}", self.catalog.materials().len())
    }
}
