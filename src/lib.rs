//! An undirected, weighted graph of towns connected by named roads, with
//! label-based shortest-path queries and a name-keyed management facade.

pub mod error;
pub mod graph;
pub mod labels;
pub mod loader;
pub mod manager;
pub mod prelude;
pub mod road;
pub mod route;
pub mod town;
pub mod tracing_support;

mod util;

#[cfg(test)]
mod graph_test_support;

pub use error::GraphError;
pub use graph::{Graph, GraphMut, TownGraph};
pub use manager::TownGraphManager;
pub use road::Road;
pub use town::Town;
