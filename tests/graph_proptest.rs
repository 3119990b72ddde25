use petgraph::graphmap::UnGraphMap;
use proptest::prelude::*;
use twin_graph::{Graph, SnapshotIterator};

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge(u8, u8, u16),
    RemoveEdge(u8, u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    let vertex = 0u8..12;
    prop_oneof![
        3 => vertex.clone().prop_map(Operation::AddVertex),
        1 => vertex.clone().prop_map(Operation::RemoveVertex),
        5 => (vertex.clone(), vertex.clone(), 0u16..50)
            .prop_map(|(u, v, w)| Operation::AddEdge(u, v, w)),
        2 => (vertex.clone(), vertex).prop_map(|(u, v)| Operation::RemoveEdge(u, v)),
    ]
}

fn apply(graph: &mut Graph<u8>, oracle: &mut UnGraphMap<u8, u16>, op: &Operation) {
    match *op {
        Operation::AddVertex(v) => {
            let expected = !oracle.contains_node(v);
            assert_eq!(graph.add_vertex(v).is_ok(), expected, "add_vertex({v})");
            if expected {
                oracle.add_node(v);
            }
        }
        Operation::RemoveVertex(v) => {
            if oracle.contains_node(v) {
                let degree = oracle.neighbors(v).count();
                assert_eq!(graph.remove_vertex(&v), Ok((v, degree)));
                oracle.remove_node(v);
            } else {
                assert!(graph.remove_vertex(&v).is_err());
            }
        }
        Operation::AddEdge(u, v, w) => {
            let expected = oracle.contains_node(u)
                && oracle.contains_node(v)
                && u != v
                && !oracle.contains_edge(u, v);
            let result = graph.add_edge(&u, &v, f64::from(w));
            assert_eq!(result.is_ok(), expected, "add_edge({u}, {v}): {result:?}");
            if expected {
                oracle.add_edge(u, v, w);
            }
        }
        Operation::RemoveEdge(u, v) => match oracle.remove_edge(u, v) {
            Some(w) => assert_eq!(graph.remove_edge(&u, &v), Ok(f64::from(w))),
            None => assert!(graph.remove_edge(&u, &v).is_err()),
        },
    }
}

fn assert_matches_oracle(graph: &Graph<u8>, oracle: &UnGraphMap<u8, u16>) {
    assert_eq!(graph.vertex_count(), oracle.node_count());
    assert_eq!(graph.edge_count(), oracle.edge_count());
    assert_eq!(graph.check_invariants(), Ok(()));

    let edges = graph.edges();
    assert_eq!(edges.size(), oracle.edge_count());
    for edge in edges {
        let expected = oracle.edge_weight(*edge.from(), *edge.to()).copied();
        assert_eq!(expected.map(f64::from), Some(edge.weight()), "{edge}");
    }

    for v in oracle.nodes() {
        let mut ours: Vec<_> = graph.adjacent_vertices(&v).unwrap().collect();
        let mut theirs: Vec<_> = oracle.neighbors(v).collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        assert_eq!(ours, theirs, "neighbors of {v}");
        for &n in &theirs {
            assert!(graph.has_edge(&v, &n) && graph.has_edge(&n, &v));
        }
    }
}

proptest! {
    #[test]
    fn test_graph_matches_petgraph(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut graph = Graph::new();
        let mut oracle = UnGraphMap::new();

        for op in &ops {
            apply(&mut graph, &mut oracle, op);
        }
        assert_matches_oracle(&graph, &oracle);
    }

    #[test]
    fn test_deep_copy_is_isolated(
        ops in proptest::collection::vec(operation(), 1..80),
        extra in proptest::collection::vec(operation(), 1..40),
    ) {
        let mut graph = Graph::new();
        let mut oracle = UnGraphMap::new();
        for op in &ops {
            apply(&mut graph, &mut oracle, op);
        }

        let mut copy = graph.deep_copy();
        prop_assert_eq!(&copy, &graph);
        prop_assert_eq!(copy.check_invariants(), Ok(()));

        let mut copy_oracle = oracle.clone();
        for op in &extra {
            apply(&mut copy, &mut copy_oracle, op);
        }

        // The source never observes the copy's mutations.
        assert_matches_oracle(&graph, &oracle);
        assert_matches_oracle(&copy, &copy_oracle);
    }
}
