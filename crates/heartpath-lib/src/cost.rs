use std::collections::HashSet;

use crate::graph::{Cost, VertexId, DEFAULT_COST};

/// Cost of entering a room that holds a heart.
pub const FREE_ROOM_COST: Cost = 0;

/// Set of vertices whose entry cost is waived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeRooms(HashSet<VertexId>);

impl FreeRooms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.0.contains(&vertex)
    }

    pub fn insert(&mut self, vertex: VertexId) -> bool {
        self.0.insert(vertex)
    }

    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<VertexId> for FreeRooms {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-traversal cost rule, chosen once per run from the problem variant.
///
/// The cost depends only on the vertex being entered, never on the edge used
/// to reach it.
#[derive(Debug, Clone, Copy)]
pub enum CostPolicy<'a> {
    /// Every traversal costs [`DEFAULT_COST`].
    Uniform,
    /// Entering a free room costs [`FREE_ROOM_COST`]; anything else costs
    /// [`DEFAULT_COST`].
    FreeRooms(&'a FreeRooms),
}

impl CostPolicy<'_> {
    /// Cost of moving into `destination`.
    pub fn entry_cost(&self, destination: VertexId) -> Cost {
        match self {
            CostPolicy::Uniform => DEFAULT_COST,
            CostPolicy::FreeRooms(rooms) if rooms.contains(destination) => FREE_ROOM_COST,
            CostPolicy::FreeRooms(_) => DEFAULT_COST,
        }
    }
}
