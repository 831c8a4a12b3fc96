//! Tests for strongly connected components.

use std::collections::HashSet;

use super::scc::{strongly_connected_component, strongly_connected_components};
use crate::graph::DiGraph;

/// Build the component fixture: 1↔4, 1↔5, 5↔6, 1→6, 6→1, plus 2→4 and
/// 3→2 feeding into the cycle. {1,4,5,6} is one component; 2 and 3 reach
/// it but nothing reaches back, so each is a singleton.
fn build_component_graph() -> DiGraph {
    let mut graph = DiGraph::new();
    for key in 1..=6 {
        graph.add_vertex(key, None);
    }
    graph.add_edge(1, 4, 10.0);
    graph.add_edge(4, 1, 10.0);
    graph.add_edge(1, 5, 10.0);
    graph.add_edge(5, 1, 10.0);
    graph.add_edge(2, 4, 10.0);
    graph.add_edge(3, 2, 10.0);
    graph.add_edge(1, 6, 10.0);
    graph.add_edge(6, 5, 10.0);
    graph.add_edge(5, 6, 10.0);
    graph.add_edge(6, 1, 10.0);
    graph
}

fn as_set(keys: &[u64]) -> HashSet<u64> {
    keys.iter().copied().collect()
}

// ── Single component ───────────────────────────────────────────────

#[test]
fn test_component_of_cycle_member() {
    let graph = build_component_graph();
    let component = strongly_connected_component(&graph, 1);
    assert_eq!(as_set(&component), HashSet::from([1, 4, 5, 6]));
}

#[test]
fn test_component_starts_with_query_key() {
    let graph = build_component_graph();
    let component = strongly_connected_component(&graph, 4);
    assert_eq!(component[0], 4);
    assert_eq!(as_set(&component), HashSet::from([1, 4, 5, 6]));
}

#[test]
fn test_singleton_component() {
    let graph = build_component_graph();
    // 2 reaches the cycle but nothing reaches back.
    assert_eq!(strongly_connected_component(&graph, 2), vec![2]);
    assert_eq!(strongly_connected_component(&graph, 3), vec![3]);
}

#[test]
fn test_component_of_absent_vertex() {
    let graph = build_component_graph();
    assert!(strongly_connected_component(&graph, 10).is_empty());
}

#[test]
fn test_isolated_vertex_is_singleton() {
    let mut graph = DiGraph::new();
    graph.add_vertex(1, None);
    assert_eq!(strongly_connected_component(&graph, 1), vec![1]);
}

// ── Partition ──────────────────────────────────────────────────────

#[test]
fn test_partition_into_three_components() {
    let graph = build_component_graph();
    let components = strongly_connected_components(&graph);
    assert_eq!(components.len(), 3);

    // Pairwise disjoint and covering all of 1..=6.
    let mut seen = HashSet::new();
    for component in &components {
        for &key in component {
            assert!(seen.insert(key));
        }
    }
    assert_eq!(seen, (1..=6).collect());
}

#[test]
fn test_partition_follows_insertion_order() {
    let graph = build_component_graph();
    let components = strongly_connected_components(&graph);
    assert_eq!(as_set(&components[0]), HashSet::from([1, 4, 5, 6]));
    assert_eq!(components[0][0], 1);
    assert_eq!(components[1], vec![2]);
    assert_eq!(components[2], vec![3]);
}

#[test]
fn test_partition_of_edgeless_graph() {
    let mut graph = DiGraph::new();
    for key in 0..4 {
        graph.add_vertex(key, None);
    }
    let components = strongly_connected_components(&graph);
    assert_eq!(components.len(), 4);
    assert!(components.iter().all(|c| c.len() == 1));
}

#[test]
fn test_partition_of_empty_graph() {
    let graph = DiGraph::new();
    assert!(strongly_connected_components(&graph).is_empty());
}

#[test]
fn test_two_disjoint_cycles() {
    let mut graph = DiGraph::new();
    for key in 1..=6 {
        graph.add_vertex(key, None);
    }
    graph.add_edge(1, 4, 10.0);
    graph.add_edge(4, 1, 10.0);
    graph.add_edge(1, 5, 10.0);
    graph.add_edge(5, 1, 10.0);
    graph.add_edge(2, 3, 10.0);
    graph.add_edge(3, 2, 10.0);
    graph.add_edge(4, 6, 10.0);
    graph.add_edge(6, 5, 10.0);
    graph.add_edge(5, 6, 10.0);
    graph.add_edge(6, 4, 10.0);

    // 1↔4, 1↔5 and the 4→6→5→1 / 6→4 cycle merge into one component.
    let components = strongly_connected_components(&graph);
    assert_eq!(components.len(), 2);
    assert_eq!(as_set(&components[0]), HashSet::from([1, 4, 5, 6]));
    assert_eq!(as_set(&components[1]), HashSet::from([2, 3]));
}

// ── Store integrity ────────────────────────────────────────────────

#[test]
fn test_queries_leave_adjacency_untouched() {
    let graph = build_component_graph();
    let before: Vec<(u64, Vec<u64>, Vec<u64>)> = graph
        .vertices()
        .map(|v| {
            (
                v.key(),
                v.outgoing().keys().copied().collect(),
                v.incoming().keys().copied().collect(),
            )
        })
        .collect();
    let revision = graph.revision();

    let _ = strongly_connected_component(&graph, 1);
    let _ = strongly_connected_components(&graph);

    let after: Vec<(u64, Vec<u64>, Vec<u64>)> = graph
        .vertices()
        .map(|v| {
            (
                v.key(),
                v.outgoing().keys().copied().collect(),
                v.incoming().keys().copied().collect(),
            )
        })
        .collect();
    assert_eq!(before, after);
    assert_eq!(graph.revision(), revision);
}
