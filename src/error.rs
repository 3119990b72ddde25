//! The crate's single error type.

use core::fmt;

/// Direction of cursor movement, reported when an iterator runs out of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the end of the snapshot.
    Forward,
    /// Towards the start of the snapshot.
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

/// Structural failure raised by graph mutation, lookup, or iteration.
///
/// Vertex values are rendered with `Debug` when the error is built, so the type does
/// not carry the graph's generic parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The named vertex is not in the graph.
    #[error("vertex {vertex} does not exist")]
    VertexNotFound {
        /// `Debug` rendering of the missing value.
        vertex: String,
    },
    /// A vertex with this value is already registered.
    #[error("vertex {vertex} already exists")]
    DuplicateVertex {
        /// `Debug` rendering of the duplicated value.
        vertex: String,
    },
    /// An edge between the two vertices already exists (in either orientation).
    #[error("edge {from} -- {to} already exists")]
    DuplicateEdge {
        /// First endpoint.
        from: String,
        /// Second endpoint.
        to: String,
    },
    /// No edge connects the two vertices.
    #[error("edge {from} -- {to} does not exist")]
    EdgeNotFound {
        /// First endpoint.
        from: String,
        /// Second endpoint.
        to: String,
    },
    /// Both endpoints of the requested edge are the same vertex.
    #[error("self-loop on vertex {vertex} is not supported")]
    SelfLoop {
        /// `Debug` rendering of the vertex.
        vertex: String,
    },
    /// The edge weight is NaN.
    #[error("edge weight {weight} is not a number")]
    InvalidWeight {
        /// Rendering of the rejected weight.
        weight: String,
    },
    /// The iterator has no element left in the requested direction.
    #[error("iterator exhausted moving {direction}")]
    Exhausted {
        /// Direction of the failed move.
        direction: Direction,
    },
    /// `current()` was called before the cursor yielded anything.
    #[error("iterator has no current element")]
    NoCurrent,
    /// Internal adjacency structure failed validation.
    #[error("graph invariant violated: {0}")]
    InvariantViolated(String),
}

impl GraphError {
    pub(crate) fn vertex_not_found(vertex: &impl fmt::Debug) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn duplicate_vertex(vertex: &impl fmt::Debug) -> Self {
        GraphError::DuplicateVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn duplicate_edge(from: &impl fmt::Debug, to: &impl fmt::Debug) -> Self {
        GraphError::DuplicateEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn edge_not_found(from: &impl fmt::Debug, to: &impl fmt::Debug) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn self_loop(vertex: &impl fmt::Debug) -> Self {
        GraphError::SelfLoop {
            vertex: format!("{vertex:?}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_values() {
        let err = GraphError::vertex_not_found(&"a");
        assert_eq!(err.to_string(), "vertex \"a\" does not exist");

        let err = GraphError::duplicate_edge(&1, &2);
        assert_eq!(err.to_string(), "edge 1 -- 2 already exists");

        let err = GraphError::Exhausted {
            direction: Direction::Backward,
        };
        assert_eq!(err.to_string(), "iterator exhausted moving backward");
    }
}
