use log::debug;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::algorithm::{Path, ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::MinQueue;
use crate::graph::{Connection, Cost, EdgeId, Graph, VertexId};
use crate::{Error, Result};

/// Dijkstra's algorithm with a lazy-deletion priority queue.
///
/// An improved distance pushes a new queue entry instead of updating the old
/// one; entries for already settled vertices are skipped when popped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the search from `source`, stopping once `target` is settled.
    /// With no target every reachable vertex is settled.
    fn search<C, G>(&self, graph: &G, source: VertexId, target: Option<VertexId>) -> ShortestPathTree<C>
    where
        C: Cost,
        G: Graph<C>,
    {
        let mut settled: HashMap<VertexId, C> = HashMap::new();
        let mut tentative: HashMap<VertexId, C> = HashMap::new();
        let mut parents: HashMap<VertexId, (VertexId, EdgeId)> = HashMap::new();
        let mut queue = MinQueue::new();
        let mut overflowed = false;

        tentative.insert(source, C::zero());
        queue.push(source, C::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry for a vertex settled through a cheaper entry
            if settled.contains_key(&u) {
                continue;
            }
            settled.insert(u, dist_u);

            if target == Some(u) {
                break;
            }

            for Connection { to, edge, cost } in graph.outgoing_edges(u) {
                if settled.contains_key(&to) {
                    continue;
                }

                let new_dist = match dist_u.checked_add(&cost) {
                    Some(new_dist) => new_dist,
                    None => {
                        overflowed = true;
                        continue;
                    }
                };

                let should_update = match tentative.get(&to) {
                    None => true,
                    Some(&current_dist) => new_dist < current_dist,
                };

                if should_update {
                    tentative.insert(to, new_dist);
                    parents.insert(to, (u, edge));
                    queue.push(to, new_dist);
                }
            }
        }

        debug!(
            "dijkstra from {} settled {} vertices with {} queue pushes",
            source,
            settled.len(),
            queue.pushed()
        );

        let target_settled = target.map_or(false, |t| settled.contains_key(&t));
        let unrepresentable = if overflowed && !target_settled {
            reachable_from::<C, G>(graph, source)
                .into_iter()
                .filter(|v| !settled.contains_key(v))
                .collect()
        } else {
            HashSet::new()
        };

        parents.retain(|v, _| settled.contains_key(v));
        ShortestPathTree::new(source, settled, parents, unrepresentable)
    }
}

/// Every vertex reachable from `source`, ignoring costs
fn reachable_from<C, G>(graph: &G, source: VertexId) -> HashSet<VertexId>
where
    C: Cost,
    G: Graph<C>,
{
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for connection in graph.outgoing_edges(u) {
            if visited.insert(connection.to) {
                queue.push_back(connection.to);
            }
        }
    }

    visited
}

impl<C, G> ShortestPathAlgorithm<C, G> for Dijkstra
where
    C: Cost,
    G: Graph<C>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path_tree(&self, graph: &G, source: VertexId) -> Result<ShortestPathTree<C>> {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source));
        }
        Ok(self.search::<C, G>(graph, source, None))
    }

    fn shortest_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<Path<C>> {
        if !graph.has_vertex(source) || !graph.has_vertex(target) {
            return Err(Error::NoPathFound {
                from: source,
                to: target,
            });
        }
        self.search::<C, G>(graph, source, Some(target))
            .path_to(target)
    }
}
