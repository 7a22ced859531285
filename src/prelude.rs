pub use crate::error::GraphError;
pub use crate::graph::{Graph, GraphMut, TownGraph};
pub use crate::labels::{PathLabel, PathLabels};
pub use crate::loader::LoadError;
pub use crate::manager::TownGraphManager;
pub use crate::road::Road;
pub use crate::route::{PathStep, Route};
pub use crate::town::Town;
