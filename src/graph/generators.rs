use rand::Rng;

use crate::graph::{GraphStore, MutableGraph, VertexId};
use crate::Result;

/// A generated store together with its vertex ids in creation order
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    pub store: GraphStore,
    pub vertices: Vec<VertexId>,
}

impl GeneratedGraph {
    /// Id of the `index`-th generated vertex
    pub fn vertex(&self, index: usize) -> VertexId {
        self.vertices[index]
    }
}

/// Generates a random directed graph with about `edge_factor * n` edges.
/// Costs are drawn uniformly from `1..=max_cost`; self-loops are skipped.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_cost: u64,
) -> Result<GeneratedGraph> {
    let mut store = GraphStore::with_capacity(n);
    let vertices: Vec<VertexId> = (0..n).map(|_| store.add_vertex()).collect();

    if n < 2 {
        return Ok(GeneratedGraph { store, vertices });
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let cost = rng.gen_range(1..=max_cost.max(1));
            store.add_edge(vertices[u], vertices[v], cost)?;
        }
    }

    Ok(GeneratedGraph { store, vertices })
}

/// Generates a `width` x `height` grid where every cell links to its four
/// neighbours in both directions with cost 1.
/// Cell `(x, y)` is vertex index `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> Result<GeneratedGraph> {
    let mut store = GraphStore::with_capacity(width * height);
    let vertices: Vec<VertexId> = (0..width * height).map(|_| store.add_vertex()).collect();

    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = vertices[index(x, y)];
            if x + 1 < width {
                let right = vertices[index(x + 1, y)];
                store.add_edge(current, right, 1)?;
                store.add_edge(right, current, 1)?;
            }
            if y + 1 < height {
                let below = vertices[index(x, y + 1)];
                store.add_edge(current, below, 1)?;
                store.add_edge(below, current, 1)?;
            }
        }
    }

    Ok(GeneratedGraph { store, vertices })
}
