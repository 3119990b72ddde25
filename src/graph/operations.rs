//! Structural mutation of the half-edge adjacency lists.
//!
//! Every operation validates all of its preconditions before touching the store, so a
//! failing call leaves the graph exactly as it was.
//!
//! # Performance
//! - `add_vertex`: O(1) amortized
//! - `add_edge`: O(deg(u)) duplicate check, O(1) head insertion
//! - `remove_edge`: O(deg(u) + deg(v)) (scan both lists)
//! - `remove_vertex`: O(sum of neighbor degrees)
//! - `clear`: O(V + E)

use super::node::{HalfEdge, HalfEdgeSlot, VertexId, VertexNode, VertexSlot, VertexValue, Weight};
use super::store::Store;
use crate::error::{GraphError, Result};
use crate::trace::graph_event;

/// Mutating operations over a [`Store`].
pub(crate) struct GraphOperations;

impl GraphOperations {
    /// Registers `value` under the next vertex index.
    pub(crate) fn add_vertex<T: VertexValue, W: Weight>(
        store: &mut Store<T, W>,
        value: T,
    ) -> Result<VertexId> {
        if store.registry.contains_key(&value) {
            return Err(GraphError::duplicate_vertex(&value));
        }
        Ok(Self::insert_vertex(store, value))
    }

    /// Registers a value known to be absent.
    pub(crate) fn insert_vertex<T: VertexValue, W>(
        store: &mut Store<T, W>,
        value: T,
    ) -> VertexId {
        let id = VertexId::new(store.next_id);
        store.next_id += 1;

        let slot = VertexSlot::new(store.vertices.alloc(VertexNode::new(value.clone(), id)));
        store.registry.insert(value, slot);

        graph_event!(vertex = id.index(), "vertex added");
        id
    }

    /// Links a twin pair `u -- v` at the head of both adjacency lists.
    pub(crate) fn add_edge<T: VertexValue, W: Weight>(
        store: &mut Store<T, W>,
        u: &T,
        v: &T,
        weight: W,
    ) -> Result<()> {
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight {
                weight: weight.to_string(),
            });
        }
        let u_slot = store.slot_of(u)?;
        let v_slot = store.slot_of(v)?;
        if u_slot == v_slot {
            return Err(GraphError::self_loop(u));
        }
        if store.find_half_edge(u_slot, v_slot).is_some() {
            return Err(GraphError::duplicate_edge(u, v));
        }

        let u_head = store.vertex(u_slot).and_then(|node| node.first_edge);
        let v_head = store.vertex(v_slot).and_then(|node| node.first_edge);

        let forward = HalfEdgeSlot::new(store.half_edges.alloc(HalfEdge {
            owner: u_slot,
            neighbor: v_slot,
            weight,
            next: u_head,
            twin: None,
        }));
        let backward = HalfEdgeSlot::new(store.half_edges.alloc(HalfEdge {
            owner: v_slot,
            neighbor: u_slot,
            weight,
            next: v_head,
            twin: Some(forward),
        }));
        if let Some(edge) = store.half_edge_mut(forward) {
            edge.twin = Some(backward);
        }

        // Update heads
        if let Some(node) = store.vertex_mut(u_slot) {
            node.first_edge = Some(forward);
        }
        if let Some(node) = store.vertex_mut(v_slot) {
            node.first_edge = Some(backward);
        }
        store.edge_count += 1;

        graph_event!(edges = store.edge_count, "edge added");
        Ok(())
    }

    /// Unlinks and frees the twin pair `u -- v`, returning its weight.
    pub(crate) fn remove_edge<T: VertexValue, W: Weight>(
        store: &mut Store<T, W>,
        u: &T,
        v: &T,
    ) -> Result<W> {
        let u_slot = store.slot_of(u)?;
        let found = store
            .registry
            .get(v)
            .and_then(|&v_slot| store.find_half_edge(u_slot, v_slot));
        let Some(forward) = found else {
            return Err(GraphError::edge_not_found(u, v));
        };

        let (v_slot, twin) = match store.half_edge(forward) {
            Some(edge) => (edge.neighbor, edge.twin),
            None => return Err(GraphError::edge_not_found(u, v)),
        };

        Self::unlink(store, u_slot, forward);
        if let Some(twin) = twin {
            Self::unlink(store, v_slot, twin);
            store.half_edges.take(twin.get());
        }
        let weight = store.half_edges.take(forward.get()).map(|edge| edge.weight);
        store.edge_count -= 1;

        graph_event!(edges = store.edge_count, "edge removed");
        weight.ok_or_else(|| GraphError::edge_not_found(u, v))
    }

    /// Removes `value` and every incident edge, returning the value and its degree.
    pub(crate) fn remove_vertex<T: VertexValue, W: Weight>(
        store: &mut Store<T, W>,
        value: &T,
    ) -> Result<(T, usize)> {
        let slot = store.slot_of(value)?;

        let mut degree = 0;
        let mut curr = store.vertex(slot).and_then(|node| node.first_edge);
        while let Some(edge_slot) = curr {
            let Some(edge) = store.half_edges.take(edge_slot.get()) else {
                break;
            };
            curr = edge.next;
            degree += 1;

            // The twin lives in the neighbor's list; the neighbor stays.
            if let Some(twin) = edge.twin {
                Self::unlink(store, edge.neighbor, twin);
                store.half_edges.take(twin.get());
            }
        }

        store.registry.shift_remove(value);
        let node = store.vertices.take(slot.get());
        store.edge_count -= degree;

        graph_event!(degree, vertices = store.registry.len(), "vertex removed");
        node.map(|node| (node.vertex.into_value(), degree))
            .ok_or_else(|| GraphError::vertex_not_found(value))
    }

    /// Drops every vertex and edge. Vertex indices keep counting from where they were.
    pub(crate) fn clear<T, W>(store: &mut Store<T, W>) {
        store.registry.clear();
        store.vertices.clear();
        store.half_edges.clear();
        store.edge_count = 0;

        graph_event!("graph cleared");
    }

    /// Unlinks `target` from the adjacency list of `owner`, patching `next` around it.
    ///
    /// Returns `false` if `target` is not in the list. The half-edge itself is not freed.
    fn unlink<T, W>(store: &mut Store<T, W>, owner: VertexSlot, target: HalfEdgeSlot) -> bool {
        let mut prev: Option<HalfEdgeSlot> = None;
        let mut curr = store.vertex(owner).and_then(|node| node.first_edge);

        while let Some(curr_slot) = curr {
            let next = match store.half_edge(curr_slot) {
                Some(edge) => edge.next,
                None => return false,
            };

            if curr_slot == target {
                match prev {
                    Some(p) => {
                        if let Some(edge) = store.half_edge_mut(p) {
                            edge.next = next;
                        }
                    }
                    None => {
                        if let Some(node) = store.vertex_mut(owner) {
                            node.first_edge = next;
                        }
                    }
                }
                return true;
            }

            prev = Some(curr_slot);
            curr = next;
        }
        false
    }
}
