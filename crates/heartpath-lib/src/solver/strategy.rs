//! Per-variant solving strategies.
//!
//! This module provides the `Solver` trait and one implementation per problem
//! variant. New variants plug in here without touching [`super::solve`].

use crate::cost::{CostPolicy, FreeRooms};
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::path::{shortest_path, Distance};
use crate::shortcut::{best_with_shortcuts, Shortcut};

use super::{ProblemPart, Variant};

/// Trait for variant solving strategies.
pub trait Solver {
    /// The variant this solver handles.
    fn part(&self) -> ProblemPart;

    /// Compute the cheapest cost from `start` to `target`.
    ///
    /// Takes the graph mutably so strategies that try extra edges can install
    /// them; implementations must leave the edge list as they found it.
    fn solve(&self, graph: &mut Graph, start: VertexId, target: VertexId) -> Result<Distance>;
}

/// Single search with uniform entry costs.
#[derive(Debug, Clone, Default)]
pub struct BaselineSolver;

impl Solver for BaselineSolver {
    fn part(&self) -> ProblemPart {
        ProblemPart::A
    }

    fn solve(&self, graph: &mut Graph, start: VertexId, target: VertexId) -> Result<Distance> {
        shortest_path(graph, start, target, CostPolicy::Uniform)
    }
}

/// Tries each shortcut in turn and keeps the cheapest result.
#[derive(Debug, Clone)]
pub struct ShortcutSolver<'a> {
    shortcuts: &'a [Shortcut],
}

impl<'a> ShortcutSolver<'a> {
    pub fn new(shortcuts: &'a [Shortcut]) -> Self {
        Self { shortcuts }
    }
}

impl Solver for ShortcutSolver<'_> {
    fn part(&self) -> ProblemPart {
        ProblemPart::B
    }

    fn solve(&self, graph: &mut Graph, start: VertexId, target: VertexId) -> Result<Distance> {
        best_with_shortcuts(graph, start, target, self.shortcuts)
    }
}

/// Single search where entering a free room costs nothing.
#[derive(Debug, Clone)]
pub struct FreeRoomSolver<'a> {
    rooms: &'a FreeRooms,
}

impl<'a> FreeRoomSolver<'a> {
    pub fn new(rooms: &'a FreeRooms) -> Self {
        Self { rooms }
    }
}

impl Solver for FreeRoomSolver<'_> {
    fn part(&self) -> ProblemPart {
        ProblemPart::C
    }

    fn solve(&self, graph: &mut Graph, start: VertexId, target: VertexId) -> Result<Distance> {
        shortest_path(graph, start, target, CostPolicy::FreeRooms(self.rooms))
    }
}

/// Select the solver for a given variant.
pub fn select_solver(variant: &Variant) -> Box<dyn Solver + '_> {
    match variant {
        Variant::Baseline => Box::new(BaselineSolver),
        Variant::Shortcuts(shortcuts) => Box::new(ShortcutSolver::new(shortcuts)),
        Variant::FreeRooms(rooms) => Box::new(FreeRoomSolver::new(rooms)),
    }
}
