//! Structural equality and isomorphism-preserving deep copy.

use rustc_hash::FxHashSet;

use super::node::{HalfEdge, HalfEdgeSlot, VertexNode, VertexSlot, VertexValue, Weight};
use super::provider::IteratorsProvider;
use super::store::Store;
use crate::trace::graph_event;

pub(crate) struct GraphComparator;

impl GraphComparator {
    /// Two stores are equal iff they hold the same vertices (value and index) and the same
    /// logical edges (endpoints in either orientation, and weight).
    pub(crate) fn equals<T: VertexValue, W: Weight>(a: &Store<T, W>, b: &Store<T, W>) -> bool {
        if a.registry.len() != b.registry.len() || a.edge_count != b.edge_count {
            return false;
        }

        let same_vertices = a.registry.iter().all(|(value, &a_slot)| {
            let a_id = a.vertex(a_slot).map(|node| node.vertex.id());
            let b_id = b
                .registry
                .get(value)
                .and_then(|&b_slot| b.vertex(b_slot))
                .map(|node| node.vertex.id());
            a_id.is_some() && a_id == b_id
        });
        if !same_vertices {
            return false;
        }

        let a_edges: FxHashSet<_> = IteratorsProvider::edge_data(a).into_iter().collect();
        let b_edges = IteratorsProvider::edge_data(b);
        a_edges.len() == b_edges.len() && b_edges.iter().all(|edge| a_edges.contains(edge))
    }

    /// Rebuilds `source` into freshly allocated arenas.
    ///
    /// Vertices are copied first (registry order), then every half-edge (adjacency list
    /// order), and finally `next`/`twin`/`first_edge` links are remapped onto the new
    /// slots. The copy compacts both arenas, so slot numbers may differ from the source
    /// while values, indices, weights, and list order do not.
    pub(crate) fn deep_copy<T: VertexValue, W: Weight>(source: &Store<T, W>) -> Store<T, W> {
        let mut copy = Store::with_capacity(source.registry.len(), source.edge_count);
        copy.next_id = source.next_id;
        copy.edge_count = source.edge_count;

        // 1. Vertices
        let mut vertex_map: Vec<Option<VertexSlot>> = vec![None; source.vertices.slot_len()];
        for (value, &old_slot) in &source.registry {
            let Some(old) = source.vertex(old_slot) else {
                continue;
            };
            let new_slot = VertexSlot::new(
                copy.vertices
                    .alloc(VertexNode::new(value.clone(), old.vertex.id())),
            );
            vertex_map[old_slot.get()] = Some(new_slot);
            copy.registry.insert(value.clone(), new_slot);
        }

        // 2. Half-edges, unlinked
        let mut edge_map: Vec<Option<HalfEdgeSlot>> = vec![None; source.half_edges.slot_len()];
        for &old_owner in source.registry.values() {
            for (old_slot, edge) in source.adjacency(old_owner) {
                let (Some(owner), Some(neighbor)) = (
                    vertex_map[edge.owner.get()],
                    vertex_map[edge.neighbor.get()],
                ) else {
                    continue;
                };
                let new_slot = HalfEdgeSlot::new(copy.half_edges.alloc(HalfEdge {
                    owner,
                    neighbor,
                    weight: edge.weight,
                    next: None,
                    twin: None,
                }));
                edge_map[old_slot.get()] = Some(new_slot);
            }
        }

        // 3. Relink
        let remap = |slot: Option<HalfEdgeSlot>| slot.and_then(|s| edge_map[s.get()]);
        for (old_idx, old) in source.half_edges.iter() {
            let Some(new_slot) = edge_map[old_idx] else {
                continue;
            };
            if let Some(edge) = copy.half_edge_mut(new_slot) {
                edge.next = remap(old.next);
                edge.twin = remap(old.twin);
            }
        }
        for &old_slot in source.registry.values() {
            let (Some(old), Some(new_slot)) = (source.vertex(old_slot), vertex_map[old_slot.get()])
            else {
                continue;
            };
            let head = remap(old.first_edge);
            if let Some(node) = copy.vertex_mut(new_slot) {
                node.first_edge = head;
            }
        }

        graph_event!(
            vertices = copy.registry.len(),
            edges = copy.edge_count,
            "graph deep-copied"
        );
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::operations::GraphOperations;

    fn triangle() -> Store<&'static str, f64> {
        let mut store = Store::default();
        for v in ["a", "b", "c"] {
            GraphOperations::add_vertex(&mut store, v).unwrap();
        }
        GraphOperations::add_edge(&mut store, &"a", &"b", 1.0).unwrap();
        GraphOperations::add_edge(&mut store, &"b", &"c", 2.0).unwrap();
        GraphOperations::add_edge(&mut store, &"c", &"a", 3.0).unwrap();
        store
    }

    #[test]
    fn test_copy_is_equal_and_compacted() {
        let mut source = triangle();
        GraphOperations::add_vertex(&mut source, "d").unwrap();
        GraphOperations::add_edge(&mut source, &"d", &"a", 4.0).unwrap();
        GraphOperations::remove_vertex(&mut source, &"b").unwrap();

        let copy = GraphComparator::deep_copy(&source);
        assert!(GraphComparator::equals(&source, &copy));
        assert_eq!(copy.half_edges.slot_len(), copy.half_edges.len());
        assert_eq!(copy.next_id, source.next_id);
    }

    #[test]
    fn test_copy_preserves_list_order() {
        let source = triangle();
        let copy = GraphComparator::deep_copy(&source);

        let order = |store: &Store<&'static str, f64>| {
            let slot = store.slot_of(&"a").unwrap();
            store
                .adjacency(slot)
                .map(|(_, e)| *store.vertex(e.neighbor).unwrap().vertex.value())
                .collect::<Vec<_>>()
        };
        assert_eq!(order(&source), order(&copy));
    }

    #[test]
    fn test_equality_checks_weights_and_indices() {
        let a = triangle();
        let mut b = triangle();
        assert!(GraphComparator::equals(&a, &b));

        GraphOperations::remove_edge(&mut b, &"a", &"b").unwrap();
        GraphOperations::add_edge(&mut b, &"b", &"a", 9.0).unwrap();
        assert!(!GraphComparator::equals(&a, &b));

        // Same values, different indices.
        let mut c = triangle();
        GraphOperations::remove_vertex(&mut c, &"c").unwrap();
        GraphOperations::add_vertex(&mut c, "c").unwrap();
        GraphOperations::add_edge(&mut c, &"b", &"c", 2.0).unwrap();
        GraphOperations::add_edge(&mut c, &"c", &"a", 3.0).unwrap();
        assert!(!GraphComparator::equals(&a, &c));
    }
}
