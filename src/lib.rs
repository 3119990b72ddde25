//! # `twin_graph` - Half-Edge Adjacency-List Graphs
//!
//! An undirected, weighted graph built on a twin-linked adjacency list: each vertex owns
//! a singly linked list of half-edges, and every undirected edge is a pair of half-edges
//! (one per endpoint) that refer to each other as twins.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **No unsafe code**: nodes live in slot arenas and link to each other through integer
//!   handles, so a removed half-edge can never be reached through a stale twin or `next`.
//! - **Snapshot iteration**: iterators copy what they traverse when created, so they are
//!   never invalidated by later mutation of the graph.
//!
//! ### Structural Invariants
//! - Every stored edge is exactly two half-edges with `twin.twin == self`.
//! - Adjacency lists are null-terminated and contain only their owner's half-edges.
//! - Vertex indices increase monotonically and are never reused.
//! - Failed mutations leave the graph unchanged.
//!
//! Debug builds re-validate these after every mutation; [`Graph::check_invariants`] runs
//! the same checks on demand.
//!
//! ## Architecture
//!
//! 1. **Nodes** ([`Vertex`], [`EdgeView`]): read-facing snapshots of vertex and edge data.
//! 2. **Arena** (`arena::Pool`): free-list slot storage for vertices and half-edges.
//! 3. **Graph** ([`Graph`]): the facade; mutation, traversal factories, structural
//!    equality, and deep copy.
//! 4. **Iterators** ([`iter`]): forward, reverse, bidirectional, and read-only cursors
//!    over snapshots, unified by [`SnapshotIterator`] and the closed [`AnyIter`] union.
//!
//! ## Cargo features
//!
//! - `tracing`: emit a `trace`-level event (target `twin_graph`) for every mutation.
//! - `serde`: derive `Serialize`/`Deserialize` on [`VertexId`], [`Vertex`], [`EdgeView`].
//!
//! ## Example
//!
//! ```rust
//! use twin_graph::{Graph, Retreat, SnapshotIterator};
//!
//! let mut g: Graph<&str> = Graph::new();
//! g.extend(["a", "b", "c"]);
//! g.add_edge(&"a", &"b", 1.0).unwrap();
//! g.add_edge(&"b", &"c", 2.0).unwrap();
//!
//! let mut cursor = g.vertices_bidirectional();
//! assert!(cursor.retreat().is_err());
//! cursor.advance().unwrap();
//! assert_eq!(*cursor.current().unwrap().value(), "a");
//!
//! g.remove_vertex(&"b").unwrap();
//! assert_eq!(g.edge_count(), 0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![forbid(unsafe_code)]

mod arena;
pub mod error;
pub mod graph;
pub mod iter;
mod trace;

pub use error::{Direction, GraphError, Result};
pub use graph::{EdgeView, Graph, Vertex, VertexId, VertexValue, Weight};
pub use iter::{
    AnyIter, BidirectionalIter, ForwardIter, IterKind, ReadOnly, Retreat, ReverseIter,
    SnapshotIterator,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // `VertexId` is a transparent index.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<u64>());

    // Edge views carry no hidden handle into the graph.
    assert!(mem::size_of::<EdgeView<u32, f64>>() <= 16);
};
