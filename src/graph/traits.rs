use std::fmt::Debug;
use num_traits::{PrimInt, Unsigned};

use crate::graph::ids::{EdgeId, VertexId};
use crate::Result;

/// Bound for edge costs: unsigned primitive integers, so costs are never negative
pub trait Cost: PrimInt + Unsigned + Debug + Send + Sync {}

impl<T> Cost for T where T: PrimInt + Unsigned + Debug + Send + Sync {}

/// One entry of a vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection<C> {
    /// Destination vertex
    pub to: VertexId,
    /// Id of the edge itself
    pub edge: EdgeId,
    /// Cost of traversing the edge
    pub cost: C,
}

/// Trait representing a weighted directed graph keyed by opaque ids
pub trait Graph<C>: Debug
where
    C: Cost,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns the outgoing edges of a vertex in insertion order.
    /// Unknown vertices have no outgoing edges.
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = Connection<C>> + '_>;
}

/// Trait for append-only graph construction
pub trait MutableGraph<C>: Graph<C>
where
    C: Cost,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> VertexId;

    /// Adds a directed edge between existing vertices and returns its ID
    fn add_edge(&mut self, from: VertexId, to: VertexId, cost: C) -> Result<EdgeId>;
}
