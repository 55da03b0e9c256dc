use crate::math::Point3;
use crate::model::{ElementId, Node, NodeId};

/// A node together with every element that meets there.
///
/// Details are the input to joint design. They are a snapshot: adding
/// elements to the assembly afterwards does not update them.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub node: NodeId,
    pub point: Point3,
    /// Incident elements in assembly insertion order.
    pub elements: Vec<ElementId>,
}

impl Detail {
    /// Number of elements meeting at the node.
    #[must_use]
    pub fn valence(&self) -> usize {
        self.elements.len()
    }

    /// A node touched by a single element.
    #[must_use]
    pub fn is_free_end(&self) -> bool {
        self.elements.len() == 1
    }
}

/// Builds one detail per node by inverting the incidence lists.
///
/// `elements` and `incidence` are parallel, in insertion order.
pub(crate) fn derive_details(
    nodes: &[Node],
    elements: &[ElementId],
    incidence: &[Vec<NodeId>],
) -> Vec<Detail> {
    let mut incident: Vec<Vec<ElementId>> = vec![Vec::new(); nodes.len()];
    for (element, node_ids) in elements.iter().zip(incidence) {
        for node in node_ids {
            incident[node.index()].push(*element);
        }
    }

    nodes
        .iter()
        .zip(incident)
        .enumerate()
        .map(|(i, (node, elements))| Detail {
            node: NodeId(i),
            point: node.point,
            elements,
        })
        .collect()
}
