pub mod assembly;
pub mod catalog;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;

pub use assembly::{Assembly, AssemblySettings, Detail, NodeMatching, StructuralAssembly};
pub use error::{JoineryError, Result};
pub use model::{Element, ElementId, ElementStore, NodeId};
