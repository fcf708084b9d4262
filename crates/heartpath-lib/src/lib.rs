//! heartpath library entry points.
//!
//! This crate builds undirected dungeon graphs, runs an indexed-heap Dijkstra
//! over them under a per-variant entry-cost policy, and searches for the best
//! single shortcut to open. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!
//! Nothing in this crate performs I/O; problem descriptions are parsed from
//! strings the caller has already read.

#![deny(warnings)]

pub mod cost;
pub mod error;
pub mod graph;
pub mod input;
pub mod path;
pub mod queue;
pub mod shortcut;
pub mod solver;

pub use cost::{CostPolicy, FreeRooms, FREE_ROOM_COST};
pub use error::{Error, Result};
pub use graph::{build_graph, release_graph, Cost, Edge, Graph, VertexId, DEFAULT_COST};
pub use input::{parse_problem, ParsedProblem};
pub use path::{distances_from, shortest_path, Distance};
pub use queue::{IndexedMinQueue, QueueKey};
pub use shortcut::{best_with_shortcuts, Shortcut};
pub use solver::{
    select_solver, solve, solve_parts, Problem, ProblemPart, Solution, Solver, Variant,
};
