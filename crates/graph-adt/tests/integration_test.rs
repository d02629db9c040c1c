use graph_adt::{
    ConnectedComponents, CycleDetection, Dijkstra, DirectedWeightedGraph, Graph, GraphError,
    Traversal, UndirectedGraph,
    input::edgelist::{EdgeList, PairList},
};

const DIRECTED: &str = "# src dst weight\n\
    0 1 10\n\
    4 0 12\n\
    1 4 15\n\
    4 3 3\n\
    3 1 5\n\
    2 1 23\n\
    3 2 7\n";

const UNDIRECTED: &str = "A E\nA C\nB E\nC E\nC D\nC B\nB D\nE D\nB H\nQ G\nF G\n";

fn directed() -> DirectedWeightedGraph {
    DirectedWeightedGraph::from(EdgeList::try_from(DIRECTED).unwrap())
}

fn undirected() -> UndirectedGraph<String> {
    UndirectedGraph::from(PairList::<String>::try_from(UNDIRECTED).unwrap())
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn directed_from_text() {
    let graph = directed();

    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(graph.vertices(), vec![0, 1, 2, 3, 4]);
    assert_eq!(graph.dijkstra(0), vec![0.0, 10.0, 35.0, 28.0, 25.0]);
}

#[test]
fn directed_mutation_round_trip() {
    let mut graph = DirectedWeightedGraph::new();
    for _ in 0..3 {
        graph.add_vertex();
    }

    graph.add_edge(0, 2, 4);
    assert!(graph.edges().contains(&(0, 2, 4)));

    graph.add_edge(0, 2, 4);
    assert_eq!(graph.edges(), vec![(0, 2, 4)]);

    graph.remove_edge(0, 2);
    assert!(graph.edges().is_empty());
}

#[test]
fn directed_path_with_unknown_vertex() {
    let graph = directed();

    assert_eq!(graph.is_valid_path(&[]), Ok(true));
    assert_eq!(graph.is_valid_path(&[7]), Ok(false));
    assert_eq!(
        graph.is_valid_path(&[0, 7]),
        Err(GraphError::InvalidVertex(7))
    );
    assert_eq!(
        GraphError::InvalidVertex(7).to_string(),
        "vertex: 7 not found in graph"
    );
}

#[test]
fn traversals_visit_each_vertex_once() {
    let graph = directed();

    for start in graph.vertices() {
        for visited in [graph.dfs(&start, None), graph.bfs(&start, None)] {
            let mut sorted = visited.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), visited.len());
        }
    }
}

#[test]
fn undirected_from_text() {
    let graph = undirected();

    assert_eq!(
        graph.vertices(),
        labels(&["A", "E", "C", "B", "D", "H", "Q", "G", "F"])
    );
    assert_eq!(graph.edge_count(), 11);
    assert_eq!(graph.count_connected_components(), 2);
    assert!(graph.has_cycle());
    assert_eq!(
        graph.bfs(&"A".to_string(), None),
        labels(&["A", "C", "E", "B", "D", "H"])
    );
}

#[test]
fn undirected_remove_vertex() {
    let mut graph: UndirectedGraph<&str> =
        [("A", "B"), ("A", "C"), ("B", "C")].into_iter().collect();

    graph.remove_vertex(&"A");

    assert_eq!(graph.edges(), vec![("B", "C")]);
    assert_eq!(graph.vertices(), vec!["B", "C"]);
    assert!(!graph.has_cycle());
}

#[test]
fn undirected_remove_missing_edge() {
    let mut graph = undirected();

    let error = graph
        .remove_edge(&"A".to_string(), &"Q".to_string())
        .unwrap_err();

    assert_eq!(error.to_string(), "no edge between 'A' and 'Q'");
    assert_eq!(graph.remove_edge(&"X".to_string(), &"A".to_string()), Ok(()));
}

#[test]
fn serde_round_trip() {
    let directed = directed();
    let json = serde_json::to_string(&directed).unwrap();
    assert_eq!(
        serde_json::from_str::<DirectedWeightedGraph>(&json).unwrap(),
        directed
    );

    let undirected = undirected();
    let json = serde_json::to_string(&undirected).unwrap();
    let restored: UndirectedGraph<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, undirected);
    assert_eq!(restored.to_string(), undirected.to_string());

    let result = directed.shortest_paths(4);
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(serde_json::from_str::<graph_adt::DijkstraResult>(&json).unwrap(), result);
}

fn malformed<T: serde::de::DeserializeOwned>(json: &str) -> String {
    match serde_json::from_str::<T>(json) {
        Ok(_) => panic!("accepted {json}"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn deserialize_rejects_short_matrix() {
    let err = malformed::<DirectedWeightedGraph>(r#"{"matrix":{"side":3,"weights":[]}}"#);

    assert!(err.contains("3x3 matrix needs 9 weights, found 0"), "{err}");
}

#[test]
fn deserialize_rejects_matrix_self_loop() {
    let err = malformed::<DirectedWeightedGraph>(r#"{"matrix":{"side":2,"weights":[5,0,0,0]}}"#);

    assert!(err.contains("self-loop on vertex 0"), "{err}");
}

#[test]
fn deserialize_rejects_one_sided_edge() {
    let err = malformed::<UndirectedGraph<String>>(
        r#"{"order":["A","B"],"adjacency":{"A":["B"],"B":[]}}"#,
    );

    assert!(err.contains("edge A -> B has no reverse edge"), "{err}");
}

#[test]
fn deserialize_rejects_unlisted_vertex() {
    for json in [
        r#"{"order":["A"],"adjacency":{}}"#,
        r#"{"order":["A","A"],"adjacency":{"A":[],"B":[]}}"#,
    ] {
        let err = malformed::<UndirectedGraph<String>>(json);
        assert!(err.contains("vertex order does not match"), "{err}");
    }
}

#[test]
fn deserialize_rejects_undirected_self_loop_and_duplicates() {
    let err = malformed::<UndirectedGraph<String>>(r#"{"order":["A"],"adjacency":{"A":["A"]}}"#);
    assert!(err.contains("self-loop on vertex A"), "{err}");

    let err = malformed::<UndirectedGraph<String>>(
        r#"{"order":["A","B"],"adjacency":{"A":["B","B"],"B":["A"]}}"#,
    );
    assert!(err.contains("duplicate edge between A and B"), "{err}");
}
