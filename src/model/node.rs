use std::fmt;

use crate::math::Point3;

/// Permanent index of a node within one assembly.
///
/// Indices are handed out in insertion order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the position of the node in the assembly's node sequence.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// A deduplicated point shared by one or more elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// The 3D position of the node.
    pub point: Point3,
}

impl Node {
    /// Creates a new node at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}
