//! Vertex and half-edge node types.
//!
//! Nodes live in [`Pool`](crate::arena::Pool) arenas and refer to each other through
//! slot handles ([`VertexSlot`], [`HalfEdgeSlot`]). Handles never leave the crate; callers
//! only see [`Vertex`] snapshots carrying the value and its stable [`VertexId`].

use core::fmt;
use core::hash::Hash;

use num_traits::Float;

/// Values that can label a vertex.
///
/// Values key the vertex registry, so they must be hashable; `Debug` is used to render
/// them into error messages and diagnostics.
pub trait VertexValue: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> VertexValue for T {}

/// Edge weight type. Implemented for every floating point type (`f32`, `f64`).
pub trait Weight: Float + fmt::Debug + fmt::Display {}

impl<F: Float + fmt::Debug + fmt::Display> Weight for F {}

/// Canonical hashing key of a weight.
///
/// `-0.0` and `0.0` compare equal, so they must also hash equal.
#[inline]
pub(crate) fn weight_key<W: Weight>(weight: W) -> (u64, i16, i8) {
    let weight = if weight == W::zero() {
        W::zero()
    } else {
        weight
    };
    weight.integer_decode()
}

/// Stable identifying index of a vertex.
///
/// Assigned from a monotonically increasing counter at insertion and never reused, even
/// after the vertex is removed or the graph is cleared.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(u64);

impl VertexId {
    #[inline(always)]
    pub(crate) fn new(index: u64) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[inline(always)]
    pub fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena handle of a vertex node.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct VertexSlot(usize);

impl VertexSlot {
    #[inline(always)]
    pub(crate) fn new(idx: usize) -> Self {
        Self(idx)
    }

    #[inline(always)]
    pub(crate) fn get(self) -> usize {
        self.0
    }
}

/// Arena handle of a half-edge.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct HalfEdgeSlot(usize);

impl HalfEdgeSlot {
    #[inline(always)]
    pub(crate) fn new(idx: usize) -> Self {
        Self(idx)
    }

    #[inline(always)]
    pub(crate) fn get(self) -> usize {
        self.0
    }
}

/// A vertex: the caller's value plus its stable index.
///
/// Equality and hashing use both fields, so two live vertices never compare equal and a
/// vertex re-added with the same value is distinguishable from its removed predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex<T> {
    value: T,
    id: VertexId,
}

impl<T> Vertex<T> {
    pub(crate) fn new(value: T, id: VertexId) -> Self {
        Self { value, id }
    }

    /// The caller-supplied value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The stable index assigned at insertion.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Consumes the vertex, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.value, self.id)
    }
}

/// Arena entry of a vertex: its public data and the head of its adjacency list.
#[derive(Debug, Clone)]
pub(crate) struct VertexNode<T> {
    pub(crate) vertex: Vertex<T>,
    /// Most recently inserted incident half-edge.
    pub(crate) first_edge: Option<HalfEdgeSlot>,
}

impl<T> VertexNode<T> {
    pub(crate) fn new(value: T, id: VertexId) -> Self {
        Self {
            vertex: Vertex::new(value, id),
            first_edge: None,
        }
    }
}

/// One directed half of an undirected edge, owned by `owner`.
///
/// `next` threads the owner's adjacency list; `twin` is the mirror half-edge owned by
/// `neighbor`. Both links are non-owning handles into the half-edge arena.
#[derive(Debug, Clone)]
pub(crate) struct HalfEdge<W> {
    pub(crate) owner: VertexSlot,
    pub(crate) neighbor: VertexSlot,
    pub(crate) weight: W,
    pub(crate) next: Option<HalfEdgeSlot>,
    pub(crate) twin: Option<HalfEdgeSlot>,
}
