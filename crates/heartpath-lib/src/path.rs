use std::fmt;

use serde::{Serialize, Serializer};

use crate::cost::CostPolicy;
use crate::error::{Error, Result};
use crate::graph::{per_vertex, Cost, Graph, VertexId};
use crate::queue::IndexedMinQueue;

/// Path cost, with a maximum-valued sentinel for "no path".
///
/// Addition saturates, so the sentinel plus any finite cost stays the
/// sentinel. Use [`Distance::value`] to get at the number; it returns `None`
/// for an unreachable target instead of a huge integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const UNREACHABLE: Distance = Distance(u64::MAX);

    pub fn new(cost: Cost) -> Self {
        Distance(cost)
    }

    /// The finite cost, or `None` for the unreachable sentinel.
    pub fn value(self) -> Option<Cost> {
        if self.is_unreachable() {
            None
        } else {
            Some(self.0)
        }
    }

    pub fn is_unreachable(self) -> bool {
        self == Self::UNREACHABLE
    }

    /// Raw integer including the sentinel (`u64::MAX`).
    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, cost: Cost) -> Self {
        Distance(self.0.saturating_add(cost))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(cost) => write!(f, "{cost}"),
            None => f.write_str("unreachable"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Cost of the cheapest path from `start` to `target` under `policy`.
///
/// Returns [`Distance::UNREACHABLE`] when no path exists. The search stops as
/// soon as `target` is settled; distances are final at that point.
pub fn shortest_path(
    graph: &Graph,
    start: VertexId,
    target: VertexId,
    policy: CostPolicy<'_>,
) -> Result<Distance> {
    graph.check_vertex(start)?;
    graph.check_vertex(target)?;

    let incidence = graph.incidence()?;
    shortest_path_with(graph, &incidence, None, start, target, policy)
}

/// [`shortest_path`] over a prebuilt incidence table.
///
/// `extra_edge` names one edge slot that `incidence` does not list; the
/// shortcut search passes its scratch edge here so the table is built once
/// for all trials. Endpoints must already be validated.
pub(crate) fn shortest_path_with(
    graph: &Graph,
    incidence: &[Vec<usize>],
    extra_edge: Option<usize>,
    start: VertexId,
    target: VertexId,
    policy: CostPolicy<'_>,
) -> Result<Distance> {
    let distances = run_dijkstra(graph, incidence, extra_edge, start, Some(target), policy)?;
    let cost = distances[target];

    tracing::debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        start,
        target,
        %cost,
        "shortest path computed"
    );

    Ok(cost)
}

/// Settled distance from `start` to every vertex, without early exit.
pub fn distances_from(
    graph: &Graph,
    start: VertexId,
    policy: CostPolicy<'_>,
) -> Result<Vec<Distance>> {
    graph.check_vertex(start)?;
    let incidence = graph.incidence()?;
    run_dijkstra(graph, &incidence, None, start, None, policy)
}

fn run_dijkstra(
    graph: &Graph,
    incidence: &[Vec<usize>],
    extra_edge: Option<usize>,
    start: VertexId,
    stop_at: Option<VertexId>,
    policy: CostPolicy<'_>,
) -> Result<Vec<Distance>> {
    let num_vertices = graph.num_vertices();
    let edges = graph.edges();

    let mut distances = per_vertex(num_vertices, Distance::UNREACHABLE, "distance table")?;
    distances[start] = Distance::ZERO;

    let mut queue =
        IndexedMinQueue::try_with_capacity(num_vertices).map_err(|_| Error::ResourceExhausted {
            what: "priority queue",
            count: num_vertices,
        })?;
    for (vertex, &distance) in distances.iter().enumerate() {
        queue.insert(vertex, distance);
    }

    while let Some((current, current_distance)) = queue.extract_min() {
        if stop_at == Some(current) {
            break;
        }
        // Everything still queued is unreachable as well.
        if current_distance.is_unreachable() {
            break;
        }

        for &slot in incidence[current].iter().chain(extra_edge.iter()) {
            let Some(next) = edges[slot].other_end(current) else {
                continue;
            };
            if !queue.contains(next) {
                continue;
            }

            let candidate = current_distance.saturating_add(policy.entry_cost(next));
            if candidate < distances[next] {
                distances[next] = candidate;
                queue.decrease_priority(next, candidate);
            }
        }
    }

    Ok(distances)
}
