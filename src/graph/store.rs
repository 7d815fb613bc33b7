use log::trace;
use std::collections::HashMap;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{Path, ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::ids::{EdgeId, IdAllocator, VertexId};
use crate::graph::traits::{Connection, Cost, Graph, MutableGraph};
use crate::{Error, Result};

/// An append-only directed graph addressed by opaque ids.
///
/// Vertices and edges draw their ids from one counter, so an [`EdgeId`] and a
/// [`VertexId`] never share a raw value. Outgoing edges are kept per source
/// vertex in the order they were added.
#[derive(Debug, Clone)]
pub struct GraphStore<C: Cost = u64> {
    /// Shared vertex/edge id counter
    ids: IdAllocator,

    /// Outgoing edges for each vertex: vertex_id -> [(target, edge_id, cost)]
    adjacency: HashMap<VertexId, Vec<Connection<C>>>,

    /// Vertices in the order they were added
    vertex_order: Vec<VertexId>,

    edge_count: usize,
}

impl GraphStore {
    /// Creates a new empty store with `u64` costs
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new store with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        GraphStore {
            ids: IdAllocator::new(),
            adjacency: HashMap::with_capacity(vertices),
            vertex_order: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }
}

impl<C: Cost> Default for GraphStore<C> {
    fn default() -> Self {
        GraphStore {
            ids: IdAllocator::new(),
            adjacency: HashMap::new(),
            vertex_order: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<C: Cost> GraphStore<C> {
    /// Iterates over all vertices in the order they were added
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_order.iter().copied()
    }

    /// Finds the lowest-cost path from `source` to `target`.
    ///
    /// Fails with [`Error::NoPathFound`] when `target` cannot be reached,
    /// including when either id is not part of this store.
    pub fn shortest_path(&self, source: VertexId, target: VertexId) -> Result<Path<C>> {
        <Dijkstra as ShortestPathAlgorithm<C, Self>>::shortest_path(&Dijkstra::new(), self, source, target)
    }

    /// Settles every vertex reachable from `source`
    pub fn shortest_path_tree(&self, source: VertexId) -> Result<ShortestPathTree<C>> {
        <Dijkstra as ShortestPathAlgorithm<C, Self>>::shortest_path_tree(&Dijkstra::new(), self, source)
    }
}

impl<C: Cost> Graph<C> for GraphStore<C> {
    fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = Connection<C>> + '_> {
        if let Some(edges) = self.adjacency.get(&vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<C: Cost> MutableGraph<C> for GraphStore<C> {
    fn add_vertex(&mut self) -> VertexId {
        let id = self.ids.next_vertex();
        self.adjacency.insert(id, Vec::new());
        self.vertex_order.push(id);
        trace!("added vertex {}", id);
        id
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, cost: C) -> Result<EdgeId> {
        // Both endpoints are checked before an id is drawn, so a failed call consumes nothing
        if !self.has_vertex(from) {
            return Err(Error::UnknownVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::UnknownVertex(to));
        }

        let edge = self.ids.next_edge();
        self.adjacency
            .entry(from)
            .or_default()
            .push(Connection { to, edge, cost });
        self.edge_count += 1;
        trace!("added edge {} from {} to {} with cost {:?}", edge, from, to, cost);
        Ok(edge)
    }
}
