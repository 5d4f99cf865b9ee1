//! Comprehensive test suite for spantree-core.
//!
//! Exercises the public query surface end to end against the in-memory
//! store; engine internals are covered by the colocated module tests.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::prelude::*;

fn options_for(graph: &MemoryGraph, source: &str) -> QueryOptions {
    QueryOptions::new(graph.vertex_id(source).unwrap())
}

/// The weighted triangle from the reference scenario:
/// A->B w=2, A->C w=1, C->B w=2.
fn triangle() -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    graph.add_weighted_edge("A", "B", "road", &[("w", 2.0)]);
    graph.add_weighted_edge("A", "C", "road", &[("w", 1.0)]);
    graph.add_weighted_edge("C", "B", "road", &[("w", 2.0)]);
    graph
}

fn names(graph: &MemoryGraph, path: &[VertexId]) -> Vec<String> {
    path.iter()
        .map(|v| graph.vertex_name(*v).unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_triangle_to_all() {
    let graph = triangle();
    let mut options = options_for(&graph, "A");
    options.weight_property = Some("w".to_string());

    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    assert_eq!(paths.len(), 2);

    let b = graph.vertex_id("B").unwrap();
    let c = graph.vertex_id("C").unwrap();
    assert_eq!(paths.weight(c), Some(1.0));
    assert_eq!(names(&graph, &paths.path(c).unwrap()), vec!["A", "C"]);
    // B settles via the direct edge, not the heavier detour through C.
    assert_eq!(paths.weight(b), Some(2.0));
    assert_eq!(names(&graph, &paths.path(b).unwrap()), vec!["A", "B"]);
}

#[test]
fn test_triangle_to_one() {
    let graph = triangle();
    let mut options = options_for(&graph, "A");
    options.weight_property = Some("w".to_string());

    let b = graph.vertex_id("B").unwrap();
    let found = weighted_shortest_path(&graph, &options, b)
        .unwrap()
        .unwrap();
    assert_eq!(found.weight, 2.0);
    assert_eq!(names(&graph, &found.path), vec!["A", "B"]);
}

#[test]
fn test_unweighted_matches_bfs_hop_counts() {
    let edges = [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("D", "E"),
        ("C", "F"),
        ("F", "G"),
        ("G", "E"),
        ("E", "A"), // cycle back to the source
    ];
    let mut graph = MemoryGraph::new();
    for (from, to) in edges {
        graph.add_edge(from, to, "road");
    }

    // Reference BFS over the same edge list.
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for (from, to) in edges {
        adjacency.entry(from).or_default().push(to);
    }
    let mut hops: HashMap<&str, f64> = HashMap::new();
    let mut queue = VecDeque::from([("A", 0.0)]);
    hops.insert("A", 0.0);
    while let Some((at, depth)) = queue.pop_front() {
        for next in adjacency.get(at).into_iter().flatten() {
            if !hops.contains_key(next) {
                hops.insert(next, depth + 1.0);
                queue.push_back((next, depth + 1.0));
            }
        }
    }

    let options = options_for(&graph, "A");
    let paths = single_source_shortest_paths(&graph, &options).unwrap();

    assert_eq!(paths.len(), hops.len() - 1); // every vertex except A
    for (name, expected) in &hops {
        if *name == "A" {
            continue;
        }
        let vertex = graph.vertex_id(name).unwrap();
        assert_eq!(paths.weight(vertex), Some(*expected), "vertex {}", name);
    }
}

#[test]
fn test_source_never_a_result_key() {
    let mut graph = MemoryGraph::new();
    graph.add_edge("A", "B", "road");
    graph.add_edge("B", "A", "road");
    graph.add_edge("A", "A", "road"); // self-loop

    let options = options_for(&graph, "A");
    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    let a = graph.vertex_id("A").unwrap();
    assert!(!paths.contains(a));
    assert_eq!(paths.len(), 1);
    // The source still shows up in the touched-vertex view, via paths.
    assert!(paths.vertices().contains(&a));
}

#[test]
fn test_path_validity() {
    let mut graph = MemoryGraph::new();
    graph.add_edge("A", "B", "road");
    graph.add_edge("B", "C", "road");
    graph.add_edge("C", "D", "road");
    graph.add_edge("A", "D", "road"); // shortcut

    let options = options_for(&graph, "A");
    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    let a = graph.vertex_id("A").unwrap();

    for (vertex, weighted) in paths.iter() {
        // Starts at the source, ends at the entry's vertex.
        assert_eq!(weighted.path.first(), Some(&a));
        assert_eq!(weighted.path.last(), Some(&vertex));
        // Visits each vertex at most once.
        let distinct: HashSet<_> = weighted.path.iter().collect();
        assert_eq!(distinct.len(), weighted.path.len());
        // Unweighted: weight equals the edge count of the path.
        assert_eq!(weighted.weight, (weighted.path.len() - 1) as f64);
    }
    // The shortcut wins over the three-hop chain.
    let d = graph.vertex_id("D").unwrap();
    assert_eq!(paths.weight(d), Some(1.0));
}

#[test]
fn test_limit_respected() {
    let mut graph = MemoryGraph::new();
    for i in 0..10 {
        graph.add_edge("A", &format!("n{}", i), "road");
    }

    for limit in [0, 3, 10, 25] {
        let mut options = options_for(&graph, "A");
        options.limit = Some(limit);
        let paths = single_source_shortest_paths(&graph, &options).unwrap();
        assert!(paths.len() as u64 <= limit);
        assert_eq!(paths.len() as u64, limit.min(10));
    }
}

#[test]
fn test_limit_truncation_is_deterministic() {
    let mut graph = MemoryGraph::new();
    for name in ["B", "C", "D", "E"] {
        graph.add_edge("A", name, "road");
    }
    let mut options = options_for(&graph, "A");
    options.limit = Some(2);

    let first = single_source_shortest_paths(&graph, &options).unwrap();
    let second = single_source_shortest_paths(&graph, &options).unwrap();
    let keys = |paths: &ShortestPaths| -> Vec<VertexId> {
        paths.iter().map(|(vertex, _)| vertex).collect()
    };
    assert_eq!(keys(&first), keys(&second));
    // Lowest vertex ids survive the cutoff.
    assert!(first.contains(graph.vertex_id("B").unwrap()));
    assert!(first.contains(graph.vertex_id("C").unwrap()));
}

#[test]
fn test_supernode_contributes_no_paths() {
    let mut graph = MemoryGraph::new();
    graph.add_edge("A", "hub", "road");
    for i in 0..6 {
        graph.add_edge("hub", &format!("n{}", i), "road");
    }
    graph.add_edge("A", "B", "road");

    let mut options = options_for(&graph, "A");
    options.degree = Some(4);
    options.skip_degree = 6; // hub has exactly 6 edges: supernode

    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    // hub itself settles, but nothing beyond it does.
    assert!(paths.contains(graph.vertex_id("hub").unwrap()));
    assert!(paths.contains(graph.vertex_id("B").unwrap()));
    for i in 0..6 {
        let vertex = graph.vertex_id(&format!("n{}", i)).unwrap();
        assert!(!paths.contains(vertex), "n{} must not be reachable", i);
    }
}

#[test]
fn test_capacity_exceeded_fails_whole_query() {
    let mut graph = MemoryGraph::new();
    for i in 0..20 {
        graph.add_edge(&format!("v{}", i), &format!("v{}", i + 1), "road");
    }
    let mut options = options_for(&graph, "v0");
    options.degree = Some(2);
    options.capacity = Some(4);

    let result = single_source_shortest_paths(&graph, &options);
    assert!(matches!(
        result,
        Err(SpantreeError::CapacityExceeded { capacity: 4, .. })
    ));
}

#[test]
fn test_direction_in_and_both() {
    let mut graph = MemoryGraph::new();
    graph.add_edge("up", "X", "road");
    graph.add_edge("X", "down", "road");

    let up = graph.vertex_id("up").unwrap();
    let down = graph.vertex_id("down").unwrap();

    let mut options = options_for(&graph, "X");
    options.direction = Direction::In;
    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    assert!(paths.contains(up));
    assert!(!paths.contains(down));

    options.direction = Direction::Both;
    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    assert!(paths.contains(up));
    assert!(paths.contains(down));
}

#[test]
fn test_label_filter_restricts_traversal() {
    let mut graph = MemoryGraph::new();
    graph.add_edge("A", "B", "road");
    graph.add_edge("A", "C", "rail");

    let mut options = options_for(&graph, "A");
    options.label = Some("road".to_string());
    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    assert!(paths.contains(graph.vertex_id("B").unwrap()));
    assert!(!paths.contains(graph.vertex_id("C").unwrap()));
}

#[test]
fn test_missing_weight_property_costs_one_hop() {
    let mut graph = MemoryGraph::new();
    graph.add_weighted_edge("A", "B", "road", &[("w", 0.25)]);
    graph.add_edge("B", "C", "road"); // no "w" on this edge

    let mut options = options_for(&graph, "A");
    options.weight_property = Some("w".to_string());
    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    assert_eq!(paths.weight(graph.vertex_id("C").unwrap()), Some(1.25));
}

#[test]
fn test_parallel_edges_take_the_lighter() {
    let mut graph = MemoryGraph::new();
    graph.add_weighted_edge("A", "B", "road", &[("w", 9.0)]);
    graph.add_weighted_edge("A", "B", "road", &[("w", 2.0)]);

    let mut options = options_for(&graph, "A");
    options.weight_property = Some("w".to_string());
    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    assert_eq!(paths.weight(graph.vertex_id("B").unwrap()), Some(2.0));
}

#[test]
fn test_vertices_union_covers_all_touched() {
    let mut graph = MemoryGraph::new();
    graph.add_edge("A", "B", "road");
    graph.add_edge("B", "C", "road");

    let options = options_for(&graph, "A");
    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    let expected: HashSet<VertexId> = ["A", "B", "C"]
        .iter()
        .map(|name| graph.vertex_id(name).unwrap())
        .collect();
    assert_eq!(paths.vertices(), expected);
}

#[test]
fn test_graph_spec_end_to_end() {
    let json = r#"{
        "edges": [
            {"from": "A", "to": "B", "label": "road", "properties": {"w": 2.0}},
            {"from": "A", "to": "C", "label": "road", "properties": {"w": 1.0}},
            {"from": "C", "to": "B", "label": "road", "properties": {"w": 2.0}}
        ]
    }"#;
    let spec: GraphSpec = serde_json::from_str(json).unwrap();
    let graph = MemoryGraph::from_spec(spec);

    let paths = PathQuery::new(graph.vertex_id("A").unwrap())
        .label("road")
        .weight_property("w")
        .run(&graph)
        .unwrap();
    let report = build_report("A", &paths, |v| {
        graph.vertex_name(v).unwrap_or_default().to_string()
    });
    assert_eq!(report.entries[0].vertex, "C");
    assert_eq!(report.entries[1].vertex, "B");
    assert_eq!(report.entries[1].path, vec!["A", "B"]);
}

#[test]
fn test_skip_degree_below_threshold_keeps_sampling() {
    // hub has 5 edges, threshold is 6: not a supernode, and the degree
    // cap of 4 still applies to its contribution.
    let mut graph = MemoryGraph::new();
    graph.add_edge("A", "hub", "road");
    for i in 0..5 {
        graph.add_edge("hub", &format!("n{}", i), "road");
    }

    let mut options = options_for(&graph, "A");
    options.degree = Some(4);
    options.skip_degree = 6;

    let paths = single_source_shortest_paths(&graph, &options).unwrap();
    let beyond_hub = (0..5)
        .filter(|i| paths.contains(graph.vertex_id(&format!("n{}", i)).unwrap()))
        .count();
    assert_eq!(beyond_hub, 4);
}
