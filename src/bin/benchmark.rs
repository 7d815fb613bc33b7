use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use shortest_path::graph::generators::{generate_random, GeneratedGraph};
use shortest_path::{Error, Graph, VertexId};
use std::time::{Duration, Instant};

/// Outcome counts for a batch of queries
#[derive(Debug, Default, Clone, Copy)]
struct QueryStats {
    found: usize,
    unreachable: usize,
}

impl QueryStats {
    fn record(&mut self, result: &shortest_path::Result<shortest_path::Path<u64>>) {
        match result {
            Ok(_) => self.found += 1,
            Err(Error::NoPathFound { .. }) => self.unreachable += 1,
            Err(e) => panic!("unexpected query failure: {}", e),
        }
    }
}

fn random_pairs(rng: &mut StdRng, graph: &GeneratedGraph, count: usize) -> Vec<(VertexId, VertexId)> {
    let n = graph.vertices.len();
    (0..count)
        .map(|_| (graph.vertex(rng.gen_range(0..n)), graph.vertex(rng.gen_range(0..n))))
        .collect()
}

// Run every query on the current thread
fn run_sequential(graph: &GeneratedGraph, pairs: &[(VertexId, VertexId)]) -> (Duration, QueryStats) {
    let start = Instant::now();
    let mut stats = QueryStats::default();
    for &(source, target) in pairs {
        stats.record(&graph.store.shortest_path(source, target));
    }
    (start.elapsed(), stats)
}

// Queries only read the store, so they can share it across rayon workers
fn run_parallel(graph: &GeneratedGraph, pairs: &[(VertexId, VertexId)]) -> (Duration, QueryStats) {
    let start = Instant::now();
    let results: Vec<_> = pairs
        .par_iter()
        .map(|&(source, target)| graph.store.shortest_path(source, target))
        .collect();
    let duration = start.elapsed();

    let mut stats = QueryStats::default();
    for result in &results {
        stats.record(result);
    }
    (duration, stats)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let queries = 200;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: sequential vs parallel shortest path queries");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("Queries per graph: {}", queries);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(&mut rng, size, edge_factor, 100)?;
        println!(
            "Graph has {} vertices and {} edges",
            graph.store.vertex_count(),
            graph.store.edge_count()
        );

        let pairs = random_pairs(&mut rng, &graph, queries);

        let (sequential_time, sequential_stats) = run_sequential(&graph, &pairs);
        let (parallel_time, parallel_stats) = run_parallel(&graph, &pairs);
        assert_eq!(sequential_stats.found, parallel_stats.found);

        println!(
            "  - {} paths found, {} unreachable",
            sequential_stats.found, sequential_stats.unreachable
        );
        println!("  - sequential: {:?}, parallel: {:?}", sequential_time, parallel_time);

        results.push((size, sequential_time, parallel_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Sequential (ms)", "Parallel (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, sequential_time, parallel_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            sequential_time.as_millis(),
            parallel_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
