use grampus::adt::Stack;
use grampus::{Error, UndirectedGraph};

#[test]
fn edges_are_symmetric() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");
    g.add_vertex("B");

    assert!(g.add_edge_with_weight(&"A", &"B", 10.0));
    assert!(g.has_edge(&"A", &"B"));
    assert!(g.has_edge(&"B", &"A"));
}

#[test]
fn an_existing_connection_cannot_be_re_added_from_either_side() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");
    g.add_vertex("B");
    g.add_edge_with_weight(&"A", &"B", 10.0);

    assert!(!g.add_edge_with_weight(&"A", &"B", 10.0));
    assert!(!g.add_edge_with_weight(&"B", &"A", 10.0));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn edge_count_reports_logical_connections() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");
    g.add_vertex("B");
    g.add_vertex("C");
    g.add_edge_with_weight(&"A", &"B", 1.0);
    g.add_edge_with_weight(&"B", &"C", 2.0);

    // Two connections, four directed edges underneath.
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn removing_an_endpoint_drops_its_connections() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");
    g.add_vertex("B");
    g.add_vertex("C");
    g.add_edge(&"A", &"B");
    g.add_edge(&"B", &"C");

    assert!(g.remove_vertex(&"B"));
    assert_eq!(g.edge_count(), 0);
    assert!(!g.has_edge(&"A", &"B"));
    assert!(!g.has_edge(&"C", &"B"));
}

#[test]
fn self_loops_are_rejected_without_leaving_half_an_edge() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");

    // The reverse insert would duplicate the forward one; the rollback must
    // leave the graph unchanged rather than half-connected.
    assert!(!g.add_edge(&"A", &"A"));
    assert_eq!(g.edge_count(), 0);
    assert!(!g.has_edge(&"A", &"A"));
}

#[test]
fn traversals_cross_edges_in_both_directions() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");
    g.add_vertex("B");
    g.add_vertex("C");
    g.add_edge_with_weight(&"B", &"A", 10.0);
    g.add_edge_with_weight(&"B", &"C", 5.0);

    let bfs: Vec<&str> = g.breadth_first_traversal(&"A").into_iter().collect();
    assert_eq!(bfs, vec!["A", "B", "C"]);

    let dfs: Vec<&str> = g.depth_first_traversal(&"C").into_iter().collect();
    assert_eq!(dfs, vec!["C", "B", "A"]);
}

#[test]
fn shortest_path_works_against_the_edge_insertion_direction() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");
    g.add_vertex("B");
    g.add_vertex("C");
    g.add_edge_with_weight(&"A", &"B", 1.0);
    g.add_edge_with_weight(&"B", &"C", 1.0);

    let mut path = Stack::new();
    assert_eq!(g.shortest_path(&"C", &"A", &mut path), Ok(2));
    assert_eq!(path.pop(), Ok("C"));
    assert_eq!(path.pop(), Ok("B"));
    assert_eq!(path.pop(), Ok("A"));
}

#[test]
fn cheapest_path_sums_weights_symmetrically() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");
    g.add_vertex("B");
    g.add_vertex("C");
    g.add_edge_with_weight(&"A", &"B", 1.0);
    g.add_edge_with_weight(&"B", &"C", 2.0);

    let mut path = Stack::new();
    assert_eq!(g.cheapest_path(&"C", &"A", &mut path), Ok(3.0));
}

#[test]
fn topological_order_is_always_a_domain_error() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");

    let err = g.topological_order().unwrap_err();
    assert_eq!(err, Error::TopologicalOrderUndefined);
    assert_eq!(
        err.to_string(),
        "Topological sort is not allowed in an undirected graph."
    );

    // Holds for the empty graph too.
    let empty: UndirectedGraph<&str> = UndirectedGraph::new();
    assert!(empty.topological_order().is_err());
}

#[test]
fn clear_resets_counts() {
    let mut g = UndirectedGraph::new();
    g.add_vertex("A");
    g.add_vertex("B");
    g.add_edge(&"A", &"B");

    g.clear();
    assert!(g.is_empty());
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
}
