use crate::error::AssemblyError;
use crate::math::{Point3, MODEL_TOLERANCE};

/// How the node registry decides that two points are the same node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeMatching {
    /// Points within the assembly tolerance (Euclidean distance) share a node.
    #[default]
    Tolerance,
    /// Only bit-identical coordinates share a node.
    Exact,
}

/// Configuration of an [`Assembly`](super::Assembly).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblySettings {
    /// Distance below which curves are considered in contact, and below
    /// which two node parameters on one element are merged.
    pub tolerance: f64,
    pub node_matching: NodeMatching,
}

impl Default for AssemblySettings {
    fn default() -> Self {
        Self {
            tolerance: MODEL_TOLERANCE,
            node_matching: NodeMatching::Tolerance,
        }
    }
}

impl AssemblySettings {
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_node_matching(mut self, node_matching: NodeMatching) -> Self {
        self.node_matching = node_matching;
        self
    }

    /// Checks that the tolerance is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not positive and finite.
    pub fn validate(&self) -> Result<(), AssemblyError> {
        if self.tolerance.is_finite() && self.tolerance > 0.0 {
            Ok(())
        } else {
            Err(AssemblyError::InvalidTolerance(self.tolerance))
        }
    }

    /// Returns `true` if `a` and `b` denote the same node.
    #[must_use]
    pub fn points_match(&self, a: &Point3, b: &Point3) -> bool {
        match self.node_matching {
            NodeMatching::Tolerance => (a - b).norm() <= self.tolerance,
            #[allow(clippy::float_cmp)]
            NodeMatching::Exact => a == b,
        }
    }
}
