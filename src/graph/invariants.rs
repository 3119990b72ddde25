//! Structural validation of the half-edge store.
//!
//! `validate` checks, in order:
//! 1. registry and vertex arena agree (same count, every slot live, values match);
//! 2. every adjacency list is null-terminated within the arena size (no cycles);
//! 3. every half-edge is owned by the list it sits in, has a live twin, and
//!    `twin.twin == self` with mirrored endpoints and equal weight;
//! 4. half-edge count is exactly twice the edge count, with no orphaned half-edges;
//! 5. no vertex has two half-edges to the same neighbor, and vertex indices are below
//!    the index counter;
//! 6. both arenas' free lists account for every unoccupied slot.

use rustc_hash::FxHashSet;

use super::node::{VertexSlot, VertexValue, Weight};
use super::store::Store;
use crate::error::{GraphError, Result};

fn violation(message: String) -> GraphError {
    GraphError::InvariantViolated(message)
}

pub(crate) fn validate<T: VertexValue, W: Weight>(store: &Store<T, W>) -> Result<()> {
    if store.registry.len() != store.vertices.len() {
        return Err(violation(format!(
            "registry has {} vertices but arena holds {}",
            store.registry.len(),
            store.vertices.len()
        )));
    }

    let mut ids = FxHashSet::default();
    let mut listed = 0usize;
    for (value, &slot) in &store.registry {
        let node = store
            .vertex(slot)
            .ok_or_else(|| violation(format!("vertex {value:?} points to a free slot")))?;
        if node.vertex.value() != value {
            return Err(violation(format!(
                "registry key {value:?} maps to vertex {:?}",
                node.vertex.value()
            )));
        }
        if node.vertex.id().index() >= store.next_id || !ids.insert(node.vertex.id()) {
            return Err(violation(format!(
                "vertex {value:?} has invalid index {}",
                node.vertex.id()
            )));
        }
        listed += validate_list(store, slot, value)?;
    }

    for (name, len, free, slots) in [
        (
            "vertex",
            store.vertices.len(),
            store.vertices.free_len(),
            store.vertices.slot_len(),
        ),
        (
            "half-edge",
            store.half_edges.len(),
            store.half_edges.free_len(),
            store.half_edges.slot_len(),
        ),
    ] {
        if len.checked_add(free) != Some(slots) {
            return Err(violation(format!("{name} arena free list is corrupt")));
        }
    }

    if listed != store.half_edges.len() || listed != store.edge_count * 2 {
        return Err(violation(format!(
            "{listed} listed half-edges, {} allocated, {} edges counted",
            store.half_edges.len(),
            store.edge_count
        )));
    }
    Ok(())
}

/// Validates one adjacency list and returns its length.
fn validate_list<T: VertexValue, W: Weight>(
    store: &Store<T, W>,
    owner: VertexSlot,
    value: &T,
) -> Result<usize> {
    let bound = store.half_edges.len();
    let mut neighbors = FxHashSet::default();
    let mut len = 0usize;
    let mut curr = store.vertex(owner).and_then(|node| node.first_edge);

    while let Some(slot) = curr {
        len += 1;
        if len > bound {
            return Err(violation(format!("adjacency list of {value:?} is cyclic")));
        }
        let edge = store
            .half_edge(slot)
            .ok_or_else(|| violation(format!("list of {value:?} links a free half-edge")))?;
        if edge.owner != owner {
            return Err(violation(format!(
                "list of {value:?} holds a foreign half-edge"
            )));
        }
        if edge.neighbor == owner {
            return Err(violation(format!("self-loop on {value:?}")));
        }
        if !neighbors.insert(edge.neighbor) {
            return Err(violation(format!("parallel half-edges on {value:?}")));
        }

        let twin_edge = edge
            .twin
            .and_then(|t| store.half_edge(t))
            .ok_or_else(|| violation(format!("half-edge of {value:?} has no live twin")))?;
        if twin_edge.twin != Some(slot)
            || twin_edge.owner != edge.neighbor
            || twin_edge.neighbor != owner
            || twin_edge.weight != edge.weight
        {
            return Err(violation(format!(
                "half-edge of {value:?} has a mismatched twin"
            )));
        }

        curr = edge.next;
    }
    Ok(len)
}

/// Debug-asserts that the store is consistent. Compiled out of release builds.
#[inline(always)]
pub(crate) fn debug_validate<T: VertexValue, W: Weight>(store: &Store<T, W>) {
    #[cfg(debug_assertions)]
    {
        let result = validate(store);
        debug_assert!(result.is_ok(), "{result:?}");
    }
    #[cfg(not(debug_assertions))]
    let _ = store;
}
