use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use shortest_path::graph::generators::generate_random;
use shortest_path::graph::{EdgeId, Graph, GraphStore, MutableGraph, VertexId};
use shortest_path::{Dijkstra, Error, Path, ShortestPathAlgorithm};

/// Six connected vertices plus a disconnected pair that only link to each other
struct ComplexGraph {
    store: GraphStore,
    v1: VertexId,
    v2: VertexId,
    v3: VertexId,
    v4: VertexId,
    v5: VertexId,
    v6: VertexId,
    v7: VertexId,
    v8: VertexId,
    e12: EdgeId,
    e13: EdgeId,
    e23: EdgeId,
    e36: EdgeId,
    e45: EdgeId,
    e56: EdgeId,
    e64: EdgeId,
    e78: EdgeId,
}

impl ComplexGraph {
    fn new() -> Self {
        let mut store = GraphStore::new();
        let v1 = store.add_vertex();
        let v2 = store.add_vertex();
        let v3 = store.add_vertex();
        let v4 = store.add_vertex();
        let v5 = store.add_vertex();
        let v6 = store.add_vertex();
        let v7 = store.add_vertex();
        let v8 = store.add_vertex();

        let e12 = store.add_edge(v1, v2, 1).unwrap();
        let e13 = store.add_edge(v1, v3, 1).unwrap();
        let e23 = store.add_edge(v2, v3, 1).unwrap();
        store.add_edge(v2, v4, 10).unwrap();
        store.add_edge(v3, v4, 5).unwrap();
        let e36 = store.add_edge(v3, v6, 3).unwrap();
        let e45 = store.add_edge(v4, v5, 2).unwrap();
        let e56 = store.add_edge(v5, v6, 11).unwrap();
        let e64 = store.add_edge(v6, v4, 1).unwrap();
        let e78 = store.add_edge(v7, v8, 1).unwrap();
        store.add_edge(v8, v7, 1).unwrap();

        ComplexGraph {
            store,
            v1,
            v2,
            v3,
            v4,
            v5,
            v6,
            v7,
            v8,
            e12,
            e13,
            e23,
            e36,
            e45,
            e56,
            e64,
            e78,
        }
    }
}

// Checks that every edge on the path exists in the store, connects the listed vertices, and sums to the cost
fn assert_path_is_consistent(store: &GraphStore, path: &Path<u64>) {
    assert_eq!(path.vertices.len(), path.edges.len() + 1);
    let mut total = 0;
    for (i, edge) in path.edges.iter().enumerate() {
        let connection = store
            .outgoing_edges(path.vertices[i])
            .find(|c| c.edge == *edge)
            .expect("Path should only use existing edges");
        assert_eq!(connection.to, path.vertices[i + 1]);
        total += connection.cost;
    }
    assert_eq!(total, path.cost, "Path cost should be the sum of its edge costs");
}

#[test]
fn test_shortest_path_with_oneself() {
    let mut store = GraphStore::new();
    let v = store.add_vertex();

    let path = store.shortest_path(v, v).unwrap();
    assert_eq!(path.vertices, vec![v]);
    assert!(path.edges.is_empty());
    assert_eq!(path.cost, 0);
    assert!(path.is_empty());
}

#[test]
fn test_shortest_path_through_shared_reference() {
    let mut store = GraphStore::new();
    let v = store.add_vertex();

    let shared: &GraphStore = &store;
    let (vertices, edges) = shared.shortest_path(v, v).unwrap().into_parts();
    assert_eq!(vertices.len(), 1);
    assert_eq!(edges.len(), 0);
}

#[test]
fn test_two_vertices_one_edge() {
    let mut store = GraphStore::new();
    let v1 = store.add_vertex();
    let v2 = store.add_vertex();
    let e1 = store.add_edge(v1, v2, 1).unwrap();

    let path = store.shortest_path(v1, v2).unwrap();
    assert_eq!(path.vertices, vec![v1, v2]);
    assert_eq!(path.edges, vec![e1]);
    assert_eq!(path.len(), 1);
}

#[test]
fn test_parallel_edges_pick_the_cheapest() {
    let mut store = GraphStore::new();
    let v1 = store.add_vertex();
    let v2 = store.add_vertex();
    store.add_edge(v1, v2, 3).unwrap();
    let e2 = store.add_edge(v1, v2, 1).unwrap();
    store.add_edge(v1, v2, 2).unwrap();

    let path = store.shortest_path(v1, v2).unwrap();
    assert_eq!(path.vertices, vec![v1, v2]);
    assert_eq!(path.edges, vec![e2]);
    assert_eq!(path.cost, 1);
}

#[test]
fn test_equal_cost_parallel_edges_pick_the_first_added() {
    let mut store = GraphStore::new();
    let v1 = store.add_vertex();
    let v2 = store.add_vertex();
    let first = store.add_edge(v1, v2, 2).unwrap();
    store.add_edge(v1, v2, 2).unwrap();

    assert_eq!(store.shortest_path(v1, v2).unwrap().edges, vec![first]);
}

#[test]
fn test_equal_cost_routes_follow_discovery_order() {
    let mut store = GraphStore::new();
    let a = store.add_vertex();
    let b = store.add_vertex();
    let c = store.add_vertex();
    let d = store.add_vertex();
    let ab = store.add_edge(a, b, 1).unwrap();
    store.add_edge(a, c, 1).unwrap();
    let bd = store.add_edge(b, d, 1).unwrap();
    store.add_edge(c, d, 1).unwrap();

    let path = store.shortest_path(a, d).unwrap();
    assert_eq!(path.vertices, vec![a, b, d]);
    assert_eq!(path.edges, vec![ab, bd]);
}

#[test]
fn test_zero_cost_edges() {
    let mut store = GraphStore::new();
    let a = store.add_vertex();
    let b = store.add_vertex();
    let c = store.add_vertex();
    let ab = store.add_edge(a, b, 0).unwrap();
    store.add_edge(b, a, 0).unwrap();
    let bc = store.add_edge(b, c, 0).unwrap();
    store.add_edge(a, c, 1).unwrap();

    let path = store.shortest_path(a, c).unwrap();
    assert_eq!(path.edges, vec![ab, bc]);
    assert_eq!(path.cost, 0);
}

#[test]
fn test_adjacent_pairs() {
    let g = ComplexGraph::new();

    let cases = [
        (g.v1, g.v2, vec![g.v1, g.v2], vec![g.e12]),
        (g.v1, g.v3, vec![g.v1, g.v3], vec![g.e13]),
        (g.v2, g.v3, vec![g.v2, g.v3], vec![g.e23]),
        (g.v2, g.v4, vec![g.v2, g.v3, g.v6, g.v4], vec![g.e23, g.e36, g.e64]),
        (g.v3, g.v4, vec![g.v3, g.v6, g.v4], vec![g.e36, g.e64]),
        (g.v3, g.v6, vec![g.v3, g.v6], vec![g.e36]),
        (g.v4, g.v5, vec![g.v4, g.v5], vec![g.e45]),
        (g.v5, g.v6, vec![g.v5, g.v6], vec![g.e56]),
        (g.v6, g.v4, vec![g.v6, g.v4], vec![g.e64]),
        (g.v7, g.v8, vec![g.v7, g.v8], vec![g.e78]),
    ];

    for (source, target, expected_vertices, expected_edges) in cases {
        let path = g.store.shortest_path(source, target).unwrap();
        assert_eq!(path.vertices, expected_vertices, "vertices from {} to {}", source, target);
        assert_eq!(path.edges, expected_edges, "edges from {} to {}", source, target);
        assert_path_is_consistent(&g.store, &path);
    }
}

#[test]
fn test_path_with_multiple_rewrites() {
    let g = ComplexGraph::new();

    let path = g.store.shortest_path(g.v1, g.v5).unwrap();
    assert_eq!(path.vertices, vec![g.v1, g.v3, g.v6, g.v4, g.v5]);
    assert_eq!(path.edges, vec![g.e13, g.e36, g.e64, g.e45]);
    assert_eq!(path.cost, 7);
}

#[test]
fn test_path_between_vertices_in_a_loop() {
    let g = ComplexGraph::new();

    let path = g.store.shortest_path(g.v4, g.v6).unwrap();
    assert_eq!(path.vertices, vec![g.v4, g.v5, g.v6]);
    assert_eq!(path.edges, vec![g.e45, g.e56]);
    assert_eq!(path.cost, 13);
}

#[test]
fn test_disconnected_segments_have_no_path_either_way() {
    let g = ComplexGraph::new();

    assert_eq!(
        g.store.shortest_path(g.v1, g.v8),
        Err(Error::NoPathFound { from: g.v1, to: g.v8 })
    );
    assert_eq!(
        g.store.shortest_path(g.v8, g.v1),
        Err(Error::NoPathFound { from: g.v8, to: g.v1 })
    );
}

#[test]
fn test_no_path_against_edge_direction() {
    let g = ComplexGraph::new();

    assert!(matches!(
        g.store.shortest_path(g.v5, g.v1),
        Err(Error::NoPathFound { .. })
    ));
}

#[test]
fn test_unknown_vertices_have_no_path() {
    let g = ComplexGraph::new();
    let unknown = VertexId::new(10_000).unwrap();

    assert!(matches!(g.store.shortest_path(g.v1, unknown), Err(Error::NoPathFound { .. })));
    assert!(matches!(g.store.shortest_path(unknown, g.v1), Err(Error::NoPathFound { .. })));
    assert!(matches!(g.store.shortest_path(unknown, unknown), Err(Error::NoPathFound { .. })));
}

#[test]
fn test_store_stays_usable_after_failed_query() {
    let mut g = ComplexGraph::new();
    assert!(g.store.shortest_path(g.v5, g.v1).is_err());

    let e51 = g.store.add_edge(g.v5, g.v1, 4).unwrap();
    let path = g.store.shortest_path(g.v5, g.v1).unwrap();
    assert_eq!(path.edges, vec![e51]);
}

#[test]
fn test_repeated_queries_are_identical() {
    let g = ComplexGraph::new();

    let first = g.store.shortest_path(g.v1, g.v5);
    let second = g.store.shortest_path(g.v1, g.v5);
    assert_eq!(first, second);
}

#[test]
fn test_results_survive_later_mutation() {
    let mut g = ComplexGraph::new();
    let before = g.store.shortest_path(g.v1, g.v5).unwrap();
    let snapshot = before.clone();

    let shortcut = g.store.add_edge(g.v1, g.v5, 1).unwrap();
    g.store.add_vertex();

    assert_eq!(before, snapshot, "Returned paths must not alias the store");
    let after = g.store.shortest_path(g.v1, g.v5).unwrap();
    assert_eq!(after.vertices, vec![g.v1, g.v5]);
    assert_eq!(after.edges, vec![shortcut]);
}

#[test]
fn test_shortest_path_tree_distances() {
    let g = ComplexGraph::new();
    let tree = g.store.shortest_path_tree(g.v1).unwrap();

    assert_eq!(tree.source(), g.v1);
    assert_eq!(tree.distance(g.v1), Some(0));
    assert_eq!(tree.distance(g.v2), Some(1));
    assert_eq!(tree.distance(g.v3), Some(1));
    assert_eq!(tree.distance(g.v6), Some(4));
    assert_eq!(tree.distance(g.v4), Some(5));
    assert_eq!(tree.distance(g.v5), Some(7));
    assert!(!tree.is_reachable(g.v7));
    assert!(!tree.is_reachable(g.v8));
    assert_eq!(tree.reached_count(), 6);

    assert_eq!(tree.path_to(g.v5), g.store.shortest_path(g.v1, g.v5));
    assert_eq!(tree.path_to(g.v8), Err(Error::NoPathFound { from: g.v1, to: g.v8 }));
}

#[test]
fn test_shortest_path_tree_from_unknown_source() {
    let store = GraphStore::new();
    let unknown = VertexId::new(1).unwrap();

    assert_eq!(store.shortest_path_tree(unknown).unwrap_err(), Error::UnknownVertex(unknown));
}

#[test]
fn test_algorithm_trait_on_store() {
    let g = ComplexGraph::new();
    let dijkstra = Dijkstra::new();

    let name = <Dijkstra as ShortestPathAlgorithm<u64, GraphStore>>::name(&dijkstra);
    assert_eq!(name, "Dijkstra");

    let path = <Dijkstra as ShortestPathAlgorithm<u64, GraphStore>>::shortest_path(
        &dijkstra, &g.store, g.v2, g.v4,
    )
    .unwrap();
    assert_eq!(path.cost, 5);
}

#[test]
fn test_overflowing_route_is_reported() {
    let mut store: GraphStore<u8> = GraphStore::default();
    let a = store.add_vertex();
    let b = store.add_vertex();
    let c = store.add_vertex();
    let d = store.add_vertex();
    store.add_edge(a, b, 200).unwrap();
    store.add_edge(b, c, 100).unwrap();

    assert_eq!(store.shortest_path(a, c), Err(Error::CostOverflow { from: a, to: c }));
    // d is simply unreachable, the overflow elsewhere does not change that
    assert_eq!(store.shortest_path(a, d), Err(Error::NoPathFound { from: a, to: d }));
}

#[test]
fn test_representable_route_wins_over_overflowing_one() {
    let mut store: GraphStore<u8> = GraphStore::default();
    let a = store.add_vertex();
    let b = store.add_vertex();
    let c = store.add_vertex();
    store.add_edge(a, b, 200).unwrap();
    store.add_edge(b, c, 100).unwrap();
    let direct = store.add_edge(a, c, 255).unwrap();

    let path = store.shortest_path(a, c).unwrap();
    assert_eq!(path.edges, vec![direct]);
    assert_eq!(path.cost, 255);
}

#[test]
fn test_random_graphs_agree_with_tree() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate_random(&mut rng, 200, 3.0, 50).unwrap();

    for &source in graph.vertices.iter().take(10) {
        let tree = graph.store.shortest_path_tree(source).unwrap();
        for &target in &graph.vertices {
            let result = graph.store.shortest_path(source, target);
            match tree.distance(target) {
                Some(distance) => {
                    let path = result.unwrap();
                    assert_eq!(path.cost, distance);
                    assert_eq!(path.vertices.first(), Some(&source));
                    assert_eq!(path.vertices.last(), Some(&target));
                    assert_path_is_consistent(&graph.store, &path);
                }
                None => assert!(matches!(result, Err(Error::NoPathFound { .. }))),
            }
        }
    }
}

#[test]
fn test_concurrent_readers_see_the_same_paths() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = generate_random(&mut rng, 500, 4.0, 20).unwrap();
    let pairs: Vec<(VertexId, VertexId)> = graph
        .vertices
        .iter()
        .zip(graph.vertices.iter().rev())
        .map(|(&s, &t)| (s, t))
        .collect();

    let sequential: Vec<_> = pairs
        .iter()
        .map(|&(s, t)| graph.store.shortest_path(s, t))
        .collect();
    let parallel: Vec<_> = pairs
        .par_iter()
        .map(|&(s, t)| graph.store.shortest_path(s, t))
        .collect();

    assert_eq!(sequential, parallel);
}
