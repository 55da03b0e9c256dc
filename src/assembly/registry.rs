use tracing::trace;

use crate::math::Point3;
use crate::model::{Node, NodeId};

use super::settings::AssemblySettings;

/// Maps spatial points to stable node indices.
///
/// Nodes are append-only: a point is looked up by a linear scan and the
/// first matching node wins; otherwise a new node is pushed and its index
/// becomes permanent.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    settings: AssemblySettings,
}

impl NodeRegistry {
    #[must_use]
    pub fn new(settings: AssemblySettings) -> Self {
        Self {
            nodes: Vec::new(),
            settings,
        }
    }

    /// Returns the node matching `point`, if any.
    #[must_use]
    pub fn find(&self, point: &Point3) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| self.settings.points_match(&n.point, point))
            .map(NodeId)
    }

    /// Returns the node matching `point`, inserting a new one if none exists.
    pub fn find_or_insert(&mut self, point: Point3) -> NodeId {
        if let Some(id) = self.find(&point) {
            return id;
        }
        self.nodes.push(Node::new(point));
        let id = NodeId(self.nodes.len() - 1);
        trace!(node = %id, x = point.x, y = point.y, z = point.z, "new node");
        id
    }

    /// Looks up or inserts the node at `point` and appends it to `incidence`
    /// unless already present there.
    pub fn register_on(&mut self, incidence: &mut Vec<NodeId>, point: Point3) -> NodeId {
        let id = self.find_or_insert(point);
        if !incidence.contains(&id) {
            incidence.push(id);
        }
        id
    }

    /// Returns `true` if `a` and `b` would resolve to the same node.
    #[must_use]
    pub fn points_match(&self, a: &Point3, b: &Point3) -> bool {
        self.settings.points_match(a, b)
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::assembly::settings::NodeMatching;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn repeated_point_reuses_index() {
        let mut reg = NodeRegistry::new(AssemblySettings::default());
        let a = reg.find_or_insert(p(0.0, 0.0, 0.0));
        let b = reg.find_or_insert(p(1.0, 0.0, 0.0));
        let again = reg.find_or_insert(p(0.0, 0.0, 0.0));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(again, a);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn near_point_merges_within_tolerance() {
        let mut reg = NodeRegistry::new(AssemblySettings::default().with_tolerance(1e-3));
        let a = reg.find_or_insert(p(2.0, 2.0, 2.0));
        let b = reg.find_or_insert(p(2.0004, 2.0, 2.0));
        let c = reg.find_or_insert(p(2.01, 2.0, 2.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(reg.node(a).unwrap().point, p(2.0, 2.0, 2.0));
    }

    #[test]
    fn exact_mode_keeps_near_points_apart() {
        let settings = AssemblySettings::default().with_node_matching(NodeMatching::Exact);
        let mut reg = NodeRegistry::new(settings);
        let a = reg.find_or_insert(p(2.0, 2.0, 2.0));
        let b = reg.find_or_insert(p(2.0004, 2.0, 2.0));
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn register_on_is_idempotent_per_list() {
        let mut reg = NodeRegistry::new(AssemblySettings::default());
        let mut first = Vec::new();
        let mut second = Vec::new();
        let shared = reg.register_on(&mut first, p(0.0, 0.0, 0.0));
        reg.register_on(&mut first, p(0.0, 0.0, 0.0));
        reg.register_on(&mut second, p(3.0, 0.0, 0.0));
        reg.register_on(&mut second, p(0.0, 0.0, 0.0));

        assert_eq!(first, vec![shared]);
        assert_eq!(second.len(), 2);
        assert_eq!(second[1], shared);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn find_does_not_insert() {
        let reg = NodeRegistry::new(AssemblySettings::default());
        assert!(reg.find(&p(0.0, 0.0, 0.0)).is_none());
        assert!(reg.is_empty());
    }
}
