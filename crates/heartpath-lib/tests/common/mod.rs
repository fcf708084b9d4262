//! Common test utilities and fixture helpers.
//!
//! This module provides shared fixture graphs, a seeded random graph
//! generator, and a slow reference solver the engine is checked against.

use heartpath_lib::{CostPolicy, Distance, Graph, VertexId, DEFAULT_COST};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Path graph `0 - 1 - ... - (len - 1)` with default-cost edges.
#[allow(dead_code)]
pub fn line_graph(len: usize) -> Graph {
    let mut graph = Graph::new(len);
    for vertex in 1..len {
        graph
            .add_edge(vertex - 1, vertex, DEFAULT_COST)
            .expect("line edge in range");
    }
    graph
}

/// Random multigraph (self-loops and parallel edges allowed) for seed `seed`.
#[allow(dead_code)]
pub fn random_graph(seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_vertices = rng.random_range(1..=12);
    let num_edges = rng.random_range(0..=num_vertices * 2);

    let mut graph = Graph::new(num_vertices);
    for _ in 0..num_edges {
        let start = rng.random_range(0..num_vertices);
        let end = rng.random_range(0..num_vertices);
        graph
            .add_edge(start, end, DEFAULT_COST)
            .expect("random edge in range");
    }
    graph
}

/// Random pair of vertices of `graph`, derived from `seed`.
#[allow(dead_code)]
pub fn random_pair(graph: &Graph, seed: u64) -> (VertexId, VertexId) {
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    let n = graph.num_vertices();
    (rng.random_range(0..n), rng.random_range(0..n))
}

/// Reference distances by repeated relaxation of every edge in both
/// directions until nothing changes. Quadratic, but obviously correct.
#[allow(dead_code)]
pub fn reference_distances(
    graph: &Graph,
    start: VertexId,
    policy: CostPolicy<'_>,
) -> Vec<Distance> {
    let mut distances = vec![Distance::UNREACHABLE; graph.num_vertices()];
    distances[start] = Distance::ZERO;

    let mut changed = true;
    while changed {
        changed = false;
        for edge in graph.edges() {
            for (from, to) in [(edge.start, edge.end), (edge.end, edge.start)] {
                let candidate = distances[from].saturating_add(policy.entry_cost(to));
                if candidate < distances[to] {
                    distances[to] = candidate;
                    changed = true;
                }
            }
        }
    }
    distances
}
