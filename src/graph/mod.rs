pub mod generators;
pub mod ids;
pub mod store;
pub mod traits;

pub use ids::{EdgeId, IdAllocator, VertexId};
pub use store::GraphStore;
pub use traits::{Connection, Cost, Graph, MutableGraph};
