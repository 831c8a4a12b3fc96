//! Strongly connected components via forward/backward reachability.
//!
//! Kosaraju-style: the component containing `v` is the intersection of the
//! set reachable from `v` along outgoing edges and the set reaching `v`
//! along incoming edges. Because the store indexes both edge directions,
//! the backward pass walks the incoming maps directly — the graph is never
//! transposed or otherwise mutated.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::graph::DiGraph;

/// Returns the strongly connected component containing `key`, or an empty
/// vector if the vertex is absent.
///
/// Members appear in backward-traversal visit order, starting with `key`
/// itself. A vertex with no mutually reachable neighbor is its own
/// singleton component.
#[must_use]
pub fn strongly_connected_component(graph: &DiGraph, key: u64) -> Vec<u64> {
    if !graph.has_vertex(key) {
        return Vec::new();
    }
    let forward = forward_reach(graph, key);
    reverse_reach(graph, key, &forward)
}

/// Partitions all vertices into strongly connected components.
///
/// Vertices are visited in insertion order; each key already assigned to an
/// emitted component is skipped, so every vertex belongs to exactly one
/// component in the result.
#[must_use]
pub fn strongly_connected_components(graph: &DiGraph) -> Vec<Vec<u64>> {
    let mut assigned: FxHashSet<u64> = FxHashSet::default();
    let mut components = Vec::new();
    for key in graph.vertex_keys() {
        if assigned.contains(&key) {
            continue;
        }
        let component = strongly_connected_component(graph, key);
        assigned.extend(component.iter().copied());
        components.push(component);
    }
    components
}

/// Breadth-first sweep along outgoing edges; returns every reached key
/// including the start.
fn forward_reach(graph: &DiGraph, start: u64) -> FxHashSet<u64> {
    let mut visited: FxHashSet<u64> = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        let Some(outgoing) = graph.out_edges(current) else {
            continue;
        };
        for &target in outgoing.keys() {
            if visited.insert(target) {
                queue.push_back(target);
            }
        }
    }
    visited
}

/// Breadth-first sweep along incoming edges. Traverses everything reachable
/// backward from `start` but collects only keys inside `restrict`.
fn reverse_reach(graph: &DiGraph, start: u64, restrict: &FxHashSet<u64>) -> Vec<u64> {
    let mut members = vec![start];
    let mut visited: FxHashSet<u64> = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        let Some(incoming) = graph.in_edges(current) else {
            continue;
        };
        for &source in incoming.keys() {
            if visited.insert(source) {
                queue.push_back(source);
                if restrict.contains(&source) {
                    members.push(source);
                }
            }
        }
    }
    members
}
