//! Snapshot factories for vertices, logical edges, and neighbor lists.
//!
//! Each factory copies what it traverses into a fresh `Vec` and hands it to an iterator
//! variant; no iterator keeps a handle into the store.

use super::edge_view::EdgeView;
use super::node::{Vertex, VertexSlot, VertexValue, Weight};
use super::store::Store;
use crate::error::Result;
use crate::iter::{AnyIter, IterKind};

/// Builds iterator snapshots over a [`Store`].
pub(crate) struct IteratorsProvider;

impl IteratorsProvider {
    /// Vertices in insertion order.
    pub(crate) fn vertex_data<T: Clone, W>(store: &Store<T, W>) -> Vec<Vertex<T>> {
        store
            .registry
            .values()
            .filter_map(|&slot| store.vertex(slot))
            .map(|node| node.vertex.clone())
            .collect()
    }

    /// Logical edges, each undirected edge exactly once.
    ///
    /// A half-edge is emitted only from the endpoint with the lower vertex index, and the
    /// view is oriented `lower -> higher`. Vertices are visited in insertion order and each
    /// adjacency list head first.
    pub(crate) fn edge_data<T: Clone, W: Weight>(store: &Store<T, W>) -> Vec<EdgeView<T, W>> {
        let mut out = Vec::with_capacity(store.edge_count);
        for &slot in store.registry.values() {
            let Some(owner) = store.vertex(slot) else {
                continue;
            };
            for (_, edge) in store.adjacency(slot) {
                let Some(neighbor) = store.vertex(edge.neighbor) else {
                    continue;
                };
                if owner.vertex.id() < neighbor.vertex.id() {
                    out.push(EdgeView::from_stored(
                        owner.vertex.value().clone(),
                        neighbor.vertex.value().clone(),
                        edge.weight,
                    ));
                }
            }
        }
        out
    }

    /// Neighbor values and weights of `value`, most recently linked first.
    pub(crate) fn neighbor_data<T: VertexValue, W: Weight>(
        store: &Store<T, W>,
        value: &T,
    ) -> Result<Vec<(T, W)>> {
        let slot = store.slot_of(value)?;
        Ok(Self::walk(store, slot, |neighbor, weight| {
            (neighbor.value().clone(), weight)
        }))
    }

    /// Every edge touching `value`, oriented away from it.
    pub(crate) fn incident_data<T: VertexValue, W: Weight>(
        store: &Store<T, W>,
        value: &T,
    ) -> Result<Vec<EdgeView<T, W>>> {
        let slot = store.slot_of(value)?;
        Ok(Self::walk(store, slot, |neighbor, weight| {
            EdgeView::from_stored(value.clone(), neighbor.value().clone(), weight)
        }))
    }

    pub(crate) fn vertices<T: Clone, W>(store: &Store<T, W>, kind: IterKind) -> AnyIter<Vertex<T>> {
        AnyIter::new(kind, Self::vertex_data(store))
    }

    pub(crate) fn edges<T: Clone, W: Weight>(
        store: &Store<T, W>,
        kind: IterKind,
    ) -> AnyIter<EdgeView<T, W>> {
        AnyIter::new(kind, Self::edge_data(store))
    }

    pub(crate) fn adjacent_vertices<T: VertexValue, W: Weight>(
        store: &Store<T, W>,
        value: &T,
        kind: IterKind,
    ) -> Result<AnyIter<T>> {
        let slot = store.slot_of(value)?;
        let values = Self::walk(store, slot, |neighbor, _| neighbor.value().clone());
        Ok(AnyIter::new(kind, values))
    }

    fn walk<T, W: Weight, R>(
        store: &Store<T, W>,
        slot: VertexSlot,
        mut f: impl FnMut(&Vertex<T>, W) -> R,
    ) -> Vec<R> {
        store
            .adjacency(slot)
            .filter_map(|(_, edge)| {
                store
                    .vertex(edge.neighbor)
                    .map(|neighbor| f(&neighbor.vertex, edge.weight))
            })
            .collect()
    }
}
