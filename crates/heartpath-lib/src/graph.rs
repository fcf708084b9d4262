use crate::error::{Error, Result};

/// Zero-based vertex (room) identifier.
pub type VertexId = usize;

/// Non-negative edge cost and path distance unit.
pub type Cost = u64;

/// Cost of a regular connection and of every shortcut.
pub const DEFAULT_COST: Cost = 1;

/// Undirected weighted edge. Identity is the slot it occupies in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: VertexId,
    pub end: VertexId,
    pub cost: Cost,
}

impl Edge {
    pub fn new(start: VertexId, end: VertexId, cost: Cost) -> Self {
        Self { start, end, cost }
    }

    /// The endpoint opposite `vertex`, or `None` if the edge does not touch it.
    pub fn other_end(&self, vertex: VertexId) -> Option<VertexId> {
        if self.start == vertex {
            Some(self.end)
        } else if self.end == vertex {
            Some(self.start)
        } else {
            None
        }
    }
}

/// Vertex count plus an unordered, growable list of undirected edges.
///
/// Vertices are implicit: they exist as ids in `[0, num_vertices)`. At most
/// one extra "scratch" edge can be installed on top of the regular edges; the
/// shortcut search uses it to try candidates without growing the list on
/// every trial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    edges: Vec<Edge>,
    scratch: Option<usize>,
}

impl Graph {
    /// Create a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::new(),
            scratch: None,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of edges, including the scratch edge when installed.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Fail with [`Error::InvalidVertex`] unless `vertex` belongs to the graph.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.num_vertices {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }

    /// Append an edge and return the slot it was stored in.
    pub fn add_edge(&mut self, start: VertexId, end: VertexId, cost: Cost) -> Result<usize> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;
        self.edges.push(Edge::new(start, end, cost));
        Ok(self.edges.len() - 1)
    }

    /// Deep copy that shares no edge storage with `self`.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Overwrite the edge stored in slot `index`.
    pub fn set_edge(
        &mut self,
        index: usize,
        start: VertexId,
        end: VertexId,
        cost: Cost,
    ) -> Result<()> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;
        let num_edges = self.edges.len();
        let edge = self
            .edges
            .get_mut(index)
            .ok_or(Error::EdgeIndexOutOfRange { index, num_edges })?;
        *edge = Edge::new(start, end, cost);
        Ok(())
    }

    /// Install the scratch edge, reusing its slot when one is already present.
    pub fn set_scratch_edge(&mut self, start: VertexId, end: VertexId, cost: Cost) -> Result<()> {
        match self.scratch {
            Some(index) => self.set_edge(index, start, end, cost),
            None => {
                let index = self.add_edge(start, end, cost)?;
                self.scratch = Some(index);
                Ok(())
            }
        }
    }

    /// Remove the scratch edge, if any, and return it.
    pub fn clear_scratch_edge(&mut self) -> Option<Edge> {
        let index = self.scratch.take()?;
        Some(self.edges.remove(index))
    }

    pub fn scratch_edge(&self) -> Option<&Edge> {
        self.scratch.and_then(|index| self.edges.get(index))
    }

    pub(crate) fn scratch_slot(&self) -> Option<usize> {
        self.scratch
    }

    /// Slots of the edges touching each vertex, indexed by vertex id.
    ///
    /// A self-loop is listed once for its vertex. Fails with
    /// [`Error::ResourceExhausted`] when the outer table cannot be allocated.
    pub fn incidence(&self) -> Result<Vec<Vec<usize>>> {
        let mut incident = per_vertex(self.num_vertices, Vec::new(), "incidence table")?;
        for (index, edge) in self.edges.iter().enumerate() {
            incident[edge.start].push(index);
            if edge.end != edge.start {
                incident[edge.end].push(index);
            }
        }
        Ok(incident)
    }
}

/// A vector of `count` copies of `value`, reporting allocation failure as
/// [`Error::ResourceExhausted`] instead of aborting.
pub(crate) fn per_vertex<T: Clone>(count: usize, value: T, what: &'static str) -> Result<Vec<T>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(count)
        .map_err(|_| Error::ResourceExhausted { what, count })?;
    items.resize(count, value);
    Ok(items)
}

/// Create an empty graph with `num_vertices` vertices.
pub fn build_graph(num_vertices: usize) -> Graph {
    Graph::new(num_vertices)
}

/// Release a graph and all of its edge storage.
pub fn release_graph(graph: Graph) {
    drop(graph);
}
