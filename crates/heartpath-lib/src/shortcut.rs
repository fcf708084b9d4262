use serde::Serialize;

use crate::cost::CostPolicy;
use crate::error::Result;
use crate::graph::{Graph, VertexId, DEFAULT_COST};
use crate::path::{shortest_path, shortest_path_with, Distance};

/// Candidate extra connection that may be opened with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub start: VertexId,
    pub end: VertexId,
}

impl Shortcut {
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self { start, end }
    }
}

impl From<(VertexId, VertexId)> for Shortcut {
    fn from((start, end): (VertexId, VertexId)) -> Self {
        Self::new(start, end)
    }
}

/// Best path cost achievable by opening exactly one of `shortcuts`.
///
/// Each candidate is installed as the graph's scratch edge with
/// [`DEFAULT_COST`] and evaluated independently; only the best cost carries
/// over between trials. The scratch edge is removed again before returning,
/// so `graph` comes back with its original edge list even on error.
///
/// With no candidates this is the plain shortest path.
pub fn best_with_shortcuts(
    graph: &mut Graph,
    start: VertexId,
    target: VertexId,
    shortcuts: &[Shortcut],
) -> Result<Distance> {
    if shortcuts.is_empty() {
        tracing::debug!("no shortcuts supplied; using plain shortest path");
        return shortest_path(graph, start, target, CostPolicy::Uniform);
    }

    // The table covers the regular edges only; the scratch edge is passed to
    // every run separately.
    graph.clear_scratch_edge();
    graph.check_vertex(start)?;
    graph.check_vertex(target)?;
    let incidence = graph.incidence()?;

    let result = try_each_shortcut(graph, &incidence, start, target, shortcuts);
    graph.clear_scratch_edge();
    result
}

fn try_each_shortcut(
    graph: &mut Graph,
    incidence: &[Vec<usize>],
    start: VertexId,
    target: VertexId,
    shortcuts: &[Shortcut],
) -> Result<Distance> {
    let mut best = Distance::UNREACHABLE;
    let mut best_index = None;

    for (index, shortcut) in shortcuts.iter().enumerate() {
        graph.set_scratch_edge(shortcut.start, shortcut.end, DEFAULT_COST)?;
        let scratch = graph.scratch_slot();
        let cost =
            shortest_path_with(graph, incidence, scratch, start, target, CostPolicy::Uniform)?;
        tracing::trace!(index, start = shortcut.start, end = shortcut.end, %cost, "shortcut trial");

        if cost < best {
            best = cost;
            best_index = Some(index);
        }
    }

    tracing::debug!(
        candidates = shortcuts.len(),
        best_index = ?best_index,
        %best,
        "shortcut search finished"
    );

    Ok(best)
}
