//! Storage shared by the graph's components.
//!
//! The registry maps each vertex value to its arena slot in insertion order. Vertices and
//! half-edges live in separate [`Pool`]s; every adjacency list is a singly linked list of
//! half-edge slots rooted at [`VertexNode::first_edge`].

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::node::{HalfEdge, HalfEdgeSlot, VertexNode, VertexSlot, VertexValue, Weight};
use crate::arena::Pool;
use crate::error::{GraphError, Result};

pub(crate) type Registry<T> = IndexMap<T, VertexSlot, FxBuildHasher>;

pub(crate) struct Store<T, W> {
    pub(crate) registry: Registry<T>,
    pub(crate) vertices: Pool<VertexNode<T>>,
    pub(crate) half_edges: Pool<HalfEdge<W>>,
    /// Next vertex index to hand out. Never decreases.
    pub(crate) next_id: u64,
    pub(crate) edge_count: usize,
}

impl<T, W> Store<T, W> {
    pub(crate) fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            registry: IndexMap::with_capacity_and_hasher(vertices, FxBuildHasher),
            vertices: Pool::with_capacity(vertices),
            half_edges: Pool::with_capacity(edges * 2),
            next_id: 0,
            edge_count: 0,
        }
    }

    #[inline]
    pub(crate) fn vertex(&self, slot: VertexSlot) -> Option<&VertexNode<T>> {
        self.vertices.get(slot.get())
    }

    #[inline]
    pub(crate) fn vertex_mut(&mut self, slot: VertexSlot) -> Option<&mut VertexNode<T>> {
        self.vertices.get_mut(slot.get())
    }

    #[inline]
    pub(crate) fn half_edge(&self, slot: HalfEdgeSlot) -> Option<&HalfEdge<W>> {
        self.half_edges.get(slot.get())
    }

    #[inline]
    pub(crate) fn half_edge_mut(&mut self, slot: HalfEdgeSlot) -> Option<&mut HalfEdge<W>> {
        self.half_edges.get_mut(slot.get())
    }

    /// Walks the adjacency list of `owner`, head first.
    pub(crate) fn adjacency(&self, owner: VertexSlot) -> Adjacency<'_, T, W> {
        let curr = self.vertex(owner).and_then(|node| node.first_edge);
        Adjacency { store: self, curr }
    }

    /// Finds the half-edge `owner -> neighbor` by linear scan of `owner`'s list.
    pub(crate) fn find_half_edge(
        &self,
        owner: VertexSlot,
        neighbor: VertexSlot,
    ) -> Option<HalfEdgeSlot> {
        self.adjacency(owner)
            .find(|(_, edge)| edge.neighbor == neighbor)
            .map(|(slot, _)| slot)
    }
}

impl<T: VertexValue, W: Weight> Store<T, W> {
    /// Resolves a value to its slot.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the value is not registered.
    pub(crate) fn slot_of(&self, value: &T) -> Result<VertexSlot> {
        self.registry
            .get(value)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(value))
    }
}

impl<T, W> Default for Store<T, W> {
    fn default() -> Self {
        Self::with_capacity(0, 0)
    }
}

/// Iterator over one vertex's half-edges, yielding `(slot, &half_edge)`.
pub(crate) struct Adjacency<'a, T, W> {
    store: &'a Store<T, W>,
    curr: Option<HalfEdgeSlot>,
}

impl<'a, T, W> Iterator for Adjacency<'a, T, W> {
    type Item = (HalfEdgeSlot, &'a HalfEdge<W>);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.curr?;
        let edge = self.store.half_edge(slot)?;
        self.curr = edge.next;
        Some((slot, edge))
    }
}
