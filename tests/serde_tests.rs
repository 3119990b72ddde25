#![cfg(feature = "serde")]

use twin_graph::{EdgeView, Graph, SnapshotIterator, Vertex};

#[test]
fn test_edge_views_serialize_as_plain_data() {
    let edge = ("a".to_string(), "b".to_string(), 2.5);
    let g: Graph<String> = Graph::from_edges([edge]).unwrap();
    let edges = g.edges().into_data();

    let json = serde_json::to_string(&edges).unwrap();
    assert_eq!(json, r#"[{"from":"a","to":"b","weight":2.5}]"#);

    let back: Vec<EdgeView<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, edges);
}

#[test]
fn test_vertices_carry_their_index() {
    let mut g: Graph<u8> = Graph::new();
    g.extend([7, 9]);
    g.remove_vertex(&7).unwrap();

    let vertices = g.vertices().data();
    let json = serde_json::to_value(&vertices).unwrap();
    assert_eq!(json, serde_json::json!([{ "value": 9, "id": 1 }]));

    let back: Vec<Vertex<u8>> = serde_json::from_value(json).unwrap();
    assert_eq!(back, vertices);
}
