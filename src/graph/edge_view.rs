//! Orientation-independent edge projection.

use core::fmt;
use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use super::node::{weight_key, VertexValue, Weight};
use crate::error::{GraphError, Result};

/// A read-only view of one undirected edge: `(from, to, weight)`.
///
/// The view owns copies of the endpoint values and never refers back into the graph.
/// Equality and hashing ignore orientation, so `(u, v, w) == (v, u, w)`. The weight is
/// never NaN, which keeps `==` reflexive.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "EdgeParts<T, W>",
        bound(deserialize = "T: serde::Deserialize<'de>, W: Weight + serde::Deserialize<'de>")
    )
)]
pub struct EdgeView<T, W = f64> {
    from: T,
    to: T,
    weight: W,
}

impl<T, W: Weight> EdgeView<T, W> {
    /// Creates a view of the edge `from -- to`.
    ///
    /// # Errors
    /// [`GraphError::InvalidWeight`] if `weight` is NaN.
    pub fn new(from: T, to: T, weight: W) -> Result<Self> {
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight {
                weight: weight.to_string(),
            });
        }
        Ok(Self::from_stored(from, to, weight))
    }

    /// Wraps a weight read back from the store, where NaN was rejected on insertion.
    pub(crate) fn from_stored(from: T, to: T, weight: W) -> Self {
        Self { from, to, weight }
    }
}

impl<T, W: Copy> EdgeView<T, W> {

    /// The endpoint this view was emitted from.
    pub fn from(&self) -> &T {
        &self.from
    }

    /// The opposite endpoint.
    pub fn to(&self) -> &T {
        &self.to
    }

    /// The edge weight.
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Returns the same edge seen from the other endpoint.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// Returns `true` if `value` is one of the endpoints.
    pub fn touches(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.from == *value || self.to == *value
    }

    /// Destructures the view into `(from, to, weight)`.
    pub fn into_parts(self) -> (T, T, W) {
        (self.from, self.to, self.weight)
    }
}

impl<T: VertexValue, W: Weight> PartialEq for EdgeView<T, W> {
    fn eq(&self, other: &Self) -> bool {
        let same_endpoints = (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from);
        same_endpoints && self.weight == other.weight
    }
}

impl<T: VertexValue, W: Weight> Eq for EdgeView<T, W> {}

impl<T: VertexValue, W: Weight> Hash for EdgeView<T, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Endpoints are combined commutatively so both orientations hash alike.
        let endpoint = |value: &T| {
            let mut hasher = FxHasher::default();
            value.hash(&mut hasher);
            hasher.finish()
        };
        let a = endpoint(&self.from);
        let b = endpoint(&self.to);
        (a ^ b).hash(state);
        a.wrapping_add(b).hash(state);
        weight_key(self.weight).hash(state);
    }
}

impl<T: fmt::Debug, W: fmt::Display> fmt::Display for EdgeView<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -- {:?} ({})", self.from, self.to, self.weight)
    }
}

/// Unvalidated wire form of an [`EdgeView`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EdgeParts<T, W> {
    from: T,
    to: T,
    weight: W,
}

#[cfg(feature = "serde")]
impl<T, W: Weight> TryFrom<EdgeParts<T, W>> for EdgeView<T, W> {
    type Error = GraphError;

    fn try_from(parts: EdgeParts<T, W>) -> Result<Self> {
        Self::new(parts.from, parts.to, parts.weight)
    }
}
