use thiserror::Error;

use crate::graph::VertexId;

/// Convenient result alias for the heartpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is a precondition the caller could have checked before the
/// call. The library never clamps or repairs bad input, since a shortest-path
/// run over a broken graph would still produce a plausible-looking number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A vertex (edge endpoint, start, boss or free room) lies outside
    /// `[0, num_vertices)`.
    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    InvalidVertex {
        vertex: VertexId,
        num_vertices: usize,
    },

    /// An edge slot index does not refer to an existing edge.
    #[error("edge index {index} is out of range for a graph with {num_edges} edges")]
    EdgeIndexOutOfRange { index: usize, num_edges: usize },

    /// The problem describes a different number of rooms than the graph holds.
    #[error("problem declares {expected} rooms but the graph has {actual} vertices")]
    RoomCountMismatch { expected: usize, actual: usize },

    /// Raised when a token in a problem description is not a non-negative integer.
    #[error("invalid token '{token}': {message}")]
    Parse { token: String, message: String },

    /// Raised when a problem description ends before all values were read.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: String },

    /// Per-vertex working storage for a search could not be allocated.
    #[error("cannot allocate {what} for {count} vertices")]
    ResourceExhausted { what: &'static str, count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_vertex_message_names_range() {
        let error = Error::InvalidVertex {
            vertex: 7,
            num_vertices: 3,
        };
        assert_eq!(
            error.to_string(),
            "vertex 7 is out of range for a graph with 3 vertices"
        );
    }

    #[test]
    fn eof_message_names_expected_value() {
        let error = Error::UnexpectedEof {
            expected: "boss room".to_string(),
        };
        assert!(error.to_string().contains("boss room"));
    }

    #[test]
    fn resource_message_names_storage() {
        let error = Error::ResourceExhausted {
            what: "distance table",
            count: 12,
        };
        assert_eq!(
            error.to_string(),
            "cannot allocate distance table for 12 vertices"
        );
    }
}
