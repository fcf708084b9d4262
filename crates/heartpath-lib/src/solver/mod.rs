//! Problem variants and the entry points that solve them.
//!
//! This module provides:
//! - [`ProblemPart`] - The three supported variants (A, B, C)
//! - [`Variant`] - Variant-specific data (shortcut list, free rooms)
//! - [`Problem`] - A fully described dungeon problem
//! - [`Solution`] - Hearts lost on the cheapest path
//! - [`solve`] - Main entry point for solving a problem against a graph
//!
//! # Strategy Pattern
//!
//! Each variant is handled by its own [`Solver`] implementation, selected by
//! [`select_solver`]. Variant A runs one search with uniform costs, variant B
//! wraps the search in the shortcut loop, and variant C swaps in the free-room
//! cost policy.
//!
//! # Example
//!
//! ```
//! use heartpath_lib::{build_graph, solve, Problem, Variant};
//!
//! let mut graph = build_graph(3);
//! graph.add_edge(0, 1, 1)?;
//! graph.add_edge(1, 2, 1)?;
//!
//! let problem = Problem::new(3, 0, 2, Variant::Baseline);
//! let solution = solve(&mut graph, &problem)?;
//! assert_eq!(solution.hearts_lost.value(), Some(2));
//! # Ok::<(), heartpath_lib::Error>(())
//! ```

mod strategy;

pub use strategy::{select_solver, BaselineSolver, FreeRoomSolver, ShortcutSolver, Solver};

use std::fmt;

use serde::Serialize;

use crate::cost::FreeRooms;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::path::Distance;
use crate::shortcut::Shortcut;

/// Supported problem variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProblemPart {
    /// Plain shortest path with uniform entry cost.
    #[default]
    A,
    /// Best path when exactly one shortcut may be opened.
    B,
    /// Entering a heart room is free.
    C,
}

impl fmt::Display for ProblemPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ProblemPart::A => "a",
            ProblemPart::B => "b",
            ProblemPart::C => "c",
        };
        f.write_str(value)
    }
}

/// Data that only some variants need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    Baseline,
    Shortcuts(Vec<Shortcut>),
    FreeRooms(FreeRooms),
}

impl Variant {
    pub fn part(&self) -> ProblemPart {
        match self {
            Variant::Baseline => ProblemPart::A,
            Variant::Shortcuts(_) => ProblemPart::B,
            Variant::FreeRooms(_) => ProblemPart::C,
        }
    }
}

/// A dungeon problem: which rooms to travel between and under which variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub num_rooms: usize,
    pub start_room: VertexId,
    pub boss_room: VertexId,
    pub variant: Variant,
}

impl Problem {
    pub fn new(
        num_rooms: usize,
        start_room: VertexId,
        boss_room: VertexId,
        variant: Variant,
    ) -> Self {
        Self {
            num_rooms,
            start_room,
            boss_room,
            variant,
        }
    }

    /// Check every room the problem mentions against `graph`.
    pub fn validate(&self, graph: &Graph) -> Result<()> {
        if self.num_rooms != graph.num_vertices() {
            return Err(Error::RoomCountMismatch {
                expected: self.num_rooms,
                actual: graph.num_vertices(),
            });
        }

        graph.check_vertex(self.start_room)?;
        graph.check_vertex(self.boss_room)?;

        match &self.variant {
            Variant::Baseline => {}
            Variant::Shortcuts(shortcuts) => {
                for shortcut in shortcuts {
                    graph.check_vertex(shortcut.start)?;
                    graph.check_vertex(shortcut.end)?;
                }
            }
            Variant::FreeRooms(rooms) => {
                for room in rooms.iter() {
                    graph.check_vertex(room)?;
                }
            }
        }

        Ok(())
    }
}

/// Outcome of solving a [`Problem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub part: ProblemPart,
    /// Hearts lost on the cheapest path; unreachable when the boss room
    /// cannot be reached.
    pub hearts_lost: Distance,
}

/// Solve `problem` against `graph`.
///
/// The graph is borrowed mutably only so variant B can install its scratch
/// edge; it is returned with its original edge list.
pub fn solve(graph: &mut Graph, problem: &Problem) -> Result<Solution> {
    problem.validate(graph)?;

    let solver = select_solver(&problem.variant);
    let hearts_lost = solver.solve(graph, problem.start_room, problem.boss_room)?;

    tracing::debug!(part = %solver.part(), %hearts_lost, "problem solved");

    Ok(Solution {
        part: solver.part(),
        hearts_lost,
    })
}

/// Flat form of [`solve`] taking already-parsed integers.
///
/// `shortcuts` is only consulted for part B and `free_rooms` only for part C;
/// other parts ignore them.
pub fn solve_parts(
    graph: &mut Graph,
    part: ProblemPart,
    num_rooms: usize,
    start_room: VertexId,
    boss_room: VertexId,
    shortcuts: &[(VertexId, VertexId)],
    free_rooms: &[VertexId],
) -> Result<Solution> {
    let variant = match part {
        ProblemPart::A => Variant::Baseline,
        ProblemPart::B => {
            Variant::Shortcuts(shortcuts.iter().copied().map(Shortcut::from).collect())
        }
        ProblemPart::C => Variant::FreeRooms(free_rooms.iter().copied().collect()),
    };

    solve(graph, &Problem::new(num_rooms, start_room, boss_room, variant))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph
    }

    #[test]
    fn variant_reports_its_part() {
        assert_eq!(Variant::Baseline.part(), ProblemPart::A);
        assert_eq!(Variant::Shortcuts(Vec::new()).part(), ProblemPart::B);
        assert_eq!(Variant::FreeRooms(FreeRooms::new()).part(), ProblemPart::C);
    }

    #[test]
    fn room_count_must_match_graph() {
        let mut graph = line_graph();
        let problem = Problem::new(4, 0, 2, Variant::Baseline);

        let error = solve(&mut graph, &problem).expect_err("mismatch");
        assert_eq!(
            error,
            Error::RoomCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn out_of_range_free_room_is_rejected() {
        let mut graph = line_graph();
        let rooms: FreeRooms = [5].into_iter().collect();
        let problem = Problem::new(3, 0, 2, Variant::FreeRooms(rooms));

        assert!(matches!(
            solve(&mut graph, &problem),
            Err(Error::InvalidVertex { vertex: 5, .. })
        ));
    }

    #[test]
    fn solve_parts_ignores_lists_for_other_parts() {
        let mut graph = line_graph();
        let solution = solve_parts(&mut graph, ProblemPart::A, 3, 0, 2, &[(0, 2)], &[1]).unwrap();

        assert_eq!(solution.part, ProblemPart::A);
        assert_eq!(solution.hearts_lost, Distance::new(2));
    }

    #[test]
    fn solution_serializes_part_and_cost() {
        let solution = Solution {
            part: ProblemPart::C,
            hearts_lost: Distance::new(1),
        };
        assert_eq!(
            serde_json::to_string(&solution).unwrap(),
            r#"{"part":"c","hearts_lost":1}"#
        );
    }
}
