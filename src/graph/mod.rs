//! Undirected graph on a half-edge adjacency list.
//!
//! Each vertex owns a singly linked list of half-edges; every undirected edge is a pair
//! of half-edges, one in each endpoint's list, linked to each other as twins. Nodes are
//! stored in slot arenas and addressed by integer handles, so twin and `next` links can
//! never dangle into freed memory.
//!
//! [`Graph`] is the only entry point. It owns the store and delegates mutation to
//! `GraphOperations`, traversal to `IteratorsProvider`, and comparison/copy to
//! `GraphComparator`.
//!
//! # Example
//!
//! ```rust
//! use twin_graph::{Graph, SnapshotIterator};
//!
//! let mut g: Graph<u32> = Graph::new();
//! for v in 1..=3 {
//!     g.add_vertex(v).unwrap();
//! }
//! g.add_edge(&1, &2, 1.5).unwrap();
//! g.add_edge(&2, &3, 2.0).unwrap();
//!
//! assert!(g.has_edge(&2, &1));
//! assert_eq!(g.edges().size(), 2);
//!
//! let copy = g.deep_copy();
//! assert_eq!(copy, g);
//! ```

mod comparator;
mod edge_view;
mod invariants;
mod node;
mod operations;
mod provider;
mod store;

use core::fmt;

pub use edge_view::EdgeView;
pub use node::{Vertex, VertexId, VertexValue, Weight};

use crate::error::{GraphError, Result};
use crate::iter::{AnyIter, BidirectionalIter, ForwardIter, IterKind, ReadOnly, ReverseIter};
use comparator::GraphComparator;
use operations::GraphOperations;
use provider::IteratorsProvider;
use store::Store;

/// An undirected, weighted graph with unique vertex values.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Registry insert + arena slot |
/// | `remove_vertex` | \(O(\sum \deg(n))\) | Unlinks each twin from its neighbor's list |
/// | `add_edge` | \(O(\deg(u))\) | Duplicate scan, then head insertion |
/// | `remove_edge` | \(O(\deg(u) + \deg(v))\) | Linear scan of both lists |
/// | `has_edge` | \(O(\deg(u))\) | Linear scan |
/// | `vertices` / `edges` | \(O(V + E)\) | Snapshot copy |
pub struct Graph<T, W = f64> {
    store: Store<T, W>,
}

impl<T: VertexValue, W: Weight> Graph<T, W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            store: Store::default(),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices and `edges` edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            store: Store::with_capacity(vertices, edges),
        }
    }

    /// Builds a graph from `(u, v, weight)` triples, adding endpoints on first sight.
    ///
    /// # Errors
    /// Fails on the first duplicate edge, self-loop, or NaN weight.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, T, W)>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            for value in [&u, &v] {
                if !graph.has_vertex(value) {
                    graph.add_vertex(value.clone())?;
                }
            }
            graph.add_edge(&u, &v, weight)?;
        }
        Ok(graph)
    }

    // ----- mutation -----

    /// Adds a vertex and returns its newly assigned index.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`](crate::GraphError::DuplicateVertex) if `value` is
    /// already present.
    pub fn add_vertex(&mut self, value: T) -> Result<VertexId> {
        let id = GraphOperations::add_vertex(&mut self.store, value)?;
        invariants::debug_validate(&self.store);
        Ok(id)
    }

    /// Removes a vertex and all incident edges, returning its value and former degree.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if absent.
    pub fn remove_vertex(&mut self, value: &T) -> Result<(T, usize)> {
        let removed = GraphOperations::remove_vertex(&mut self.store, value)?;
        invariants::debug_validate(&self.store);
        Ok(removed)
    }

    /// Adds the undirected edge `u -- v`.
    ///
    /// # Errors
    /// - [`VertexNotFound`](crate::GraphError::VertexNotFound) if either endpoint is absent
    /// - [`DuplicateEdge`](crate::GraphError::DuplicateEdge) if `u -- v` or `v -- u` exists
    /// - [`SelfLoop`](crate::GraphError::SelfLoop) if `u == v`
    /// - [`InvalidWeight`](crate::GraphError::InvalidWeight) if `weight` is NaN
    pub fn add_edge(&mut self, u: &T, v: &T, weight: W) -> Result<()> {
        GraphOperations::add_edge(&mut self.store, u, v, weight)?;
        invariants::debug_validate(&self.store);
        Ok(())
    }

    /// Removes the edge `u -- v` and returns its weight.
    ///
    /// # Errors
    /// - [`VertexNotFound`](crate::GraphError::VertexNotFound) if `u` is absent
    /// - [`EdgeNotFound`](crate::GraphError::EdgeNotFound) if no edge joins them
    pub fn remove_edge(&mut self, u: &T, v: &T) -> Result<W> {
        let weight = GraphOperations::remove_edge(&mut self.store, u, v)?;
        invariants::debug_validate(&self.store);
        Ok(weight)
    }

    /// Removes every vertex and edge.
    ///
    /// Vertex indices are not recycled: the next vertex added continues the sequence.
    pub fn clear(&mut self) {
        GraphOperations::clear(&mut self.store);
    }

    // ----- queries -----

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.store.registry.len()
    }

    /// Number of undirected edges (half-edge pairs).
    pub fn edge_count(&self) -> usize {
        self.store.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.store.registry.is_empty()
    }

    /// Returns `true` if `value` is a vertex.
    pub fn has_vertex(&self, value: &T) -> bool {
        self.store.registry.contains_key(value)
    }

    /// Returns `true` if `u -- v` is an edge. Symmetric in `u` and `v`.
    pub fn has_edge(&self, u: &T, v: &T) -> bool {
        match (self.store.registry.get(u), self.store.registry.get(v)) {
            (Some(&u_slot), Some(&v_slot)) => self.store.find_half_edge(u_slot, v_slot).is_some(),
            _ => false,
        }
    }

    /// Returns the index assigned to `value`, if present.
    pub fn vertex_index(&self, value: &T) -> Option<VertexId> {
        let slot = *self.store.registry.get(value)?;
        self.store.vertex(slot).map(|node| node.vertex.id())
    }

    /// Number of edges incident to `value`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if absent.
    pub fn degree(&self, value: &T) -> Result<usize> {
        let slot = self.store.slot_of(value)?;
        Ok(self.store.adjacency(slot).count())
    }

    /// Weight of the edge `u -- v`.
    ///
    /// # Errors
    /// [`VertexNotFound`](crate::GraphError::VertexNotFound) if `u` is absent, otherwise
    /// [`EdgeNotFound`](crate::GraphError::EdgeNotFound) if there is no such edge.
    pub fn edge_weight(&self, u: &T, v: &T) -> Result<W> {
        let u_slot = self.store.slot_of(u)?;
        self.store
            .registry
            .get(v)
            .and_then(|&v_slot| self.store.find_half_edge(u_slot, v_slot))
            .and_then(|slot| self.store.half_edge(slot))
            .map(|edge| edge.weight)
            .ok_or_else(|| GraphError::edge_not_found(u, v))
    }

    // ----- traversal -----

    /// Vertices in insertion order.
    pub fn vertices(&self) -> ForwardIter<Vertex<T>> {
        ForwardIter::new(IteratorsProvider::vertex_data(&self.store))
    }

    /// Vertices from the most recently inserted to the oldest.
    pub fn vertices_rev(&self) -> ReverseIter<Vertex<T>> {
        ReverseIter::new(IteratorsProvider::vertex_data(&self.store))
    }

    /// Vertices under a cursor that can move both ways.
    pub fn vertices_bidirectional(&self) -> BidirectionalIter<Vertex<T>> {
        BidirectionalIter::new(IteratorsProvider::vertex_data(&self.store))
    }

    /// Vertices in insertion order, without mutable access to the snapshot.
    pub fn vertices_read_only(&self) -> ReadOnly<ForwardIter<Vertex<T>>> {
        ReadOnly::new(self.vertices())
    }

    /// Vertices in the traversal variant named by `kind`.
    pub fn vertices_with(&self, kind: IterKind) -> AnyIter<Vertex<T>> {
        IteratorsProvider::vertices(&self.store, kind)
    }

    /// Each undirected edge exactly once, oriented from the endpoint with the lower vertex
    /// index to the higher one.
    pub fn edges(&self) -> ForwardIter<EdgeView<T, W>> {
        ForwardIter::new(IteratorsProvider::edge_data(&self.store))
    }

    /// Logical edges in the traversal variant named by `kind`.
    pub fn edges_with(&self, kind: IterKind) -> AnyIter<EdgeView<T, W>> {
        IteratorsProvider::edges(&self.store, kind)
    }

    /// Logical edges without mutable access to the snapshot.
    pub fn edges_read_only(&self) -> ReadOnly<ForwardIter<EdgeView<T, W>>> {
        ReadOnly::new(self.edges())
    }

    /// Neighbor values of `value`, most recently linked first.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if absent.
    pub fn adjacent_vertices(&self, value: &T) -> Result<ForwardIter<T>> {
        let neighbors = IteratorsProvider::neighbor_data(&self.store, value)?;
        Ok(ForwardIter::new(
            neighbors
                .into_iter()
                .map(|(neighbor, _)| neighbor)
                .collect(),
        ))
    }

    /// Neighbor values of `value` in the traversal variant named by `kind`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if absent.
    pub fn adjacent_vertices_with(&self, value: &T, kind: IterKind) -> Result<AnyIter<T>> {
        IteratorsProvider::adjacent_vertices(&self.store, value, kind)
    }

    /// `(neighbor, weight)` pairs of `value`, most recently linked first.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if absent.
    pub fn neighbors(&self, value: &T) -> Result<ForwardIter<(T, W)>> {
        IteratorsProvider::neighbor_data(&self.store, value).map(ForwardIter::new)
    }

    /// Edges touching `value`, each oriented away from it.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if absent.
    pub fn incident_edges(&self, value: &T) -> Result<ForwardIter<EdgeView<T, W>>> {
        IteratorsProvider::incident_data(&self.store, value).map(ForwardIter::new)
    }

    // ----- comparison -----

    /// Returns an independent copy sharing no vertex or half-edge storage with `self`.
    pub fn deep_copy(&self) -> Self {
        Self {
            store: GraphComparator::deep_copy(&self.store),
        }
    }

    /// Validates twin symmetry, list termination, and counts.
    ///
    /// # Errors
    /// [`GraphError::InvariantViolated`](crate::GraphError::InvariantViolated) describing
    /// the first inconsistency found.
    pub fn check_invariants(&self) -> Result<()> {
        invariants::validate(&self.store)
    }
}

impl<T: VertexValue, W: Weight> Default for Graph<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: VertexValue, W: Weight> Clone for Graph<T, W> {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<T: VertexValue, W: Weight> PartialEq for Graph<T, W> {
    fn eq(&self, other: &Self) -> bool {
        GraphComparator::equals(&self.store, &other.store)
    }
}

impl<T: VertexValue, W: Weight> Eq for Graph<T, W> {}

/// Adds each value as a vertex; values already present are skipped.
impl<T: VertexValue, W: Weight> Extend<T> for Graph<T, W> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if !self.has_vertex(&value) {
                GraphOperations::insert_vertex(&mut self.store, value);
            }
        }
        invariants::debug_validate(&self.store);
    }
}

impl<T: VertexValue, W: Weight> fmt::Debug for Graph<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &IteratorsProvider::vertex_data(&self.store))
            .field("edges", &IteratorsProvider::edge_data(&self.store))
            .finish()
    }
}

/// One header line, then one line per vertex listing its neighbors and weights:
///
/// ```text
/// Graph(vertices: 2, edges: 1)
///   1#0: 2 (1.5)
///   2#1: 1 (1.5)
/// ```
impl<T: VertexValue, W: Weight> fmt::Display for Graph<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph(vertices: {}, edges: {})",
            self.vertex_count(),
            self.edge_count()
        )?;
        for vertex in IteratorsProvider::vertex_data(&self.store) {
            write!(f, "  {vertex}:")?;
            let neighbors =
                IteratorsProvider::neighbor_data(&self.store, vertex.value()).unwrap_or_default();
            for (i, (neighbor, weight)) in neighbors.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{neighbor:?} ({weight})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::SnapshotIterator;

    fn five_cycle() -> Graph<u32> {
        Graph::from_edges([
            (1, 2, 1.5),
            (2, 3, 2.0),
            (3, 4, 1.0),
            (4, 5, 1.5),
            (5, 1, 0.5),
        ])
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let g = five_cycle();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 5);
        assert!(!g.is_empty());
        assert_eq!(g.check_invariants(), Ok(()));
    }

    #[test]
    fn test_edge_dedup_uses_lower_index_first() {
        let g = five_cycle();
        let edges = g.edges().into_data();
        assert_eq!(edges.len(), 5);
        for edge in &edges {
            let from = g.vertex_index(edge.from()).unwrap();
            let to = g.vertex_index(edge.to()).unwrap();
            assert!(from < to, "{edge} is not canonical");
        }
    }

    #[test]
    fn test_failed_mutation_is_atomic() {
        let mut g = five_cycle();
        let before = g.deep_copy();

        assert!(g.add_edge(&1, &3, f64::NAN).is_err());
        assert!(g.add_edge(&1, &2, 9.0).is_err());
        assert!(g.remove_edge(&1, &3).is_err());
        assert!(g.remove_vertex(&42).is_err());
        assert!(g.add_vertex(3).is_err());

        assert_eq!(g, before);
    }

    #[test]
    fn test_edge_weight_and_degree() {
        let g = five_cycle();
        assert_eq!(g.edge_weight(&5, &1), Ok(0.5));
        assert_eq!(g.edge_weight(&1, &5), Ok(0.5));
        assert!(matches!(
            g.edge_weight(&1, &3),
            Err(GraphError::EdgeNotFound { .. })
        ));
        assert!(matches!(
            g.edge_weight(&9, &3),
            Err(GraphError::VertexNotFound { .. })
        ));
        assert_eq!(g.degree(&3), Ok(2));
    }

    #[test]
    fn test_display() {
        let mut g: Graph<&str> = Graph::new();
        g.add_vertex("a").unwrap();
        g.add_vertex("b").unwrap();
        g.add_vertex("c").unwrap();
        g.add_edge(&"a", &"b", 1.5).unwrap();

        let text = g.to_string();
        assert_eq!(
            text,
            "Graph(vertices: 3, edges: 1)\n  \"a\"#0: \"b\" (1.5)\n  \"b\"#1: \"a\" (1.5)\n  \"c\"#2:\n"
        );
    }

    #[test]
    fn test_extend_skips_existing() {
        let mut g: Graph<char, f32> = Graph::with_capacity(4, 4);
        g.extend(['a', 'b']);
        g.extend(['b', 'c']);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.vertex_index(&'c').map(VertexId::index), Some(2));
        assert_eq!(g.check_invariants(), Ok(()));

        g.remove_vertex(&'a').unwrap();
        g.extend(['a']);
        assert_eq!(g.vertex_index(&'a').map(VertexId::index), Some(3));
    }
}
