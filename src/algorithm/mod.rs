pub mod dijkstra;
pub mod traits;

pub use traits::{Path, ShortestPathAlgorithm, ShortestPathTree};
