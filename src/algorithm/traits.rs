use std::collections::{HashMap, HashSet};

use crate::graph::{Cost, EdgeId, Graph, VertexId};
use crate::{Error, Result};

/// A path found by a shortest path query, in traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<C> {
    /// Vertices from source to target, both included
    pub vertices: Vec<VertexId>,

    /// Edges taken, `edges[i]` leads from `vertices[i]` to `vertices[i + 1]`
    pub edges: Vec<EdgeId>,

    /// Sum of the costs of `edges`
    pub cost: C,
}

impl<C> Path<C> {
    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True for the zero-length path from a vertex to itself
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Splits the path into its vertex and edge sequences
    pub fn into_parts(self) -> (Vec<VertexId>, Vec<EdgeId>) {
        (self.vertices, self.edges)
    }
}

/// Settled distances and predecessor links from a single source
#[derive(Debug, Clone)]
pub struct ShortestPathTree<C> {
    source: VertexId,

    /// Final distance of every settled vertex
    distances: HashMap<VertexId, C>,

    /// Predecessor vertex and the edge used to reach each settled vertex but the source
    parents: HashMap<VertexId, (VertexId, EdgeId)>,

    /// Reachable vertices whose distance does not fit in `C`
    unrepresentable: HashSet<VertexId>,
}

impl<C: Cost> ShortestPathTree<C> {
    pub(crate) fn new(
        source: VertexId,
        distances: HashMap<VertexId, C>,
        parents: HashMap<VertexId, (VertexId, EdgeId)>,
        unrepresentable: HashSet<VertexId>,
    ) -> Self {
        ShortestPathTree {
            source,
            distances,
            parents,
            unrepresentable,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest distance from the source, `None` if the vertex was not reached
    pub fn distance(&self, vertex: VertexId) -> Option<C> {
        self.distances.get(&vertex).copied()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distances.contains_key(&vertex)
    }

    /// Number of settled vertices, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    /// Rebuilds the path to `target` by walking predecessor links back to the source
    pub fn path_to(&self, target: VertexId) -> Result<Path<C>> {
        let cost = match self.distances.get(&target) {
            Some(&cost) => cost,
            None if self.unrepresentable.contains(&target) => {
                return Err(Error::CostOverflow {
                    from: self.source,
                    to: target,
                })
            }
            None => {
                return Err(Error::NoPathFound {
                    from: self.source,
                    to: target,
                })
            }
        };

        let mut vertices = vec![target];
        let mut edges = Vec::new();
        let mut current = target;

        // Build path in reverse order
        while current != self.source {
            let (previous, edge) = self.parents.get(&current).copied().ok_or(Error::NoPathFound {
                from: self.source,
                to: target,
            })?;
            edges.push(edge);
            vertices.push(previous);
            current = previous;
        }

        vertices.reverse();
        edges.reverse();

        Ok(Path {
            vertices,
            edges,
            cost,
        })
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<C, G>
where
    C: Cost,
    G: Graph<C>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex to every reachable vertex
    fn shortest_path_tree(&self, graph: &G, source: VertexId) -> Result<ShortestPathTree<C>>;

    /// Get the lowest-cost path from source to target
    fn shortest_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<Path<C>> {
        if !graph.has_vertex(source) || !graph.has_vertex(target) {
            return Err(Error::NoPathFound {
                from: source,
                to: target,
            });
        }
        self.shortest_path_tree(graph, source)?.path_to(target)
    }
}
