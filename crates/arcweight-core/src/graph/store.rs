//! Mutable directed weighted graph store.
//!
//! Keeps every vertex's incoming and outgoing adjacency maps in lock-step:
//! for each edge `(u→v, w)`, `u.outgoing[v] == w` and `v.incoming[u] == w`
//! at all times. Mutations report success through their return value — a
//! rejected operation (duplicate vertex, dangling edge, self-loop) is a
//! no-op, never an error.

use std::fmt;

use indexmap::IndexMap;

use super::types::{Position, Vertex};
use crate::position::PositionProvider;

/// In-memory directed weighted graph with bidirectional adjacency indexing.
///
/// Provides O(1) access to vertices by key and O(degree) access to the
/// incoming/outgoing edges of any vertex. Vertices iterate in insertion
/// order, which makes traversal and serialization output deterministic.
///
/// Every successful structural mutation (vertex add/remove, edge
/// add/update/remove) strictly increases the [`revision`](Self::revision)
/// counter; rejected calls leave it untouched.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    /// All vertices indexed by key, in insertion order.
    vertices: IndexMap<u64, Vertex>,
    /// Number of directed edges currently present.
    edge_count: usize,
    /// Monotonic modification counter.
    revision: u64,
}

impl DiGraph {
    /// Sentinel weight returned by [`edge_weight`](Self::edge_weight) for a
    /// missing edge.
    pub const NO_EDGE: f64 = -1.0;

    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated vertex capacity.
    #[must_use]
    pub fn with_capacity(expected_vertices: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(expected_vertices),
            edge_count: 0,
            revision: 0,
        }
    }

    // ── Vertex operations ──────────────────────────────────────────────

    /// Adds a vertex with the given key and optional position.
    ///
    /// Returns `false` without touching the graph if the key is already
    /// present.
    pub fn add_vertex(&mut self, key: u64, position: Option<Position>) -> bool {
        if self.vertices.contains_key(&key) {
            return false;
        }
        let mut vertex = Vertex::new(key);
        if let Some(position) = position {
            vertex = vertex.with_position(position);
        }
        self.vertices.insert(key, vertex);
        self.revision += 1;
        true
    }

    /// Removes a vertex and every edge incident to it (cascade delete).
    ///
    /// The edge count drops once per incident edge; the revision counter
    /// increases exactly once regardless of how many edges were dropped.
    /// Returns `false` if the key is absent.
    pub fn remove_vertex(&mut self, key: u64) -> bool {
        let Some(vertex) = self.vertices.shift_remove(&key) else {
            return false;
        };
        for &src in vertex.incoming().keys() {
            if let Some(v) = self.vertices.get_mut(&src) {
                v.unlink_out(key);
            }
        }
        for &dst in vertex.outgoing().keys() {
            if let Some(v) = self.vertices.get_mut(&dst) {
                v.unlink_in(key);
            }
        }
        self.edge_count -= vertex.in_degree() + vertex.out_degree();
        self.revision += 1;
        true
    }

    /// Returns true if a vertex with the given key exists.
    #[must_use]
    pub fn has_vertex(&self, key: u64) -> bool {
        self.vertices.contains_key(&key)
    }

    /// Gets a vertex by key.
    #[must_use]
    pub fn vertex(&self, key: u64) -> Option<&Vertex> {
        self.vertices.get(&key)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Iterates over all vertex keys in insertion order.
    pub fn vertex_keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.vertices.keys().copied()
    }

    // ── Edge operations ────────────────────────────────────────────────

    /// Adds a directed edge `src → dst` with the given weight.
    ///
    /// Rejected (returns `false`) when either endpoint is missing, when
    /// `src == dst` (self-loops are forbidden), or when the edge already
    /// exists. Presence alone blocks the call even if the stored weight
    /// differs — weight changes go through [`update_edge`](Self::update_edge)
    /// or remove-then-add.
    pub fn add_edge(&mut self, src: u64, dst: u64, weight: f64) -> bool {
        if src == dst || !self.has_vertex(src) || !self.has_vertex(dst) || self.has_edge(src, dst)
        {
            return false;
        }
        if let Some(v) = self.vertices.get_mut(&src) {
            v.link_out(dst, weight);
        }
        if let Some(v) = self.vertices.get_mut(&dst) {
            v.link_in(src, weight);
        }
        self.edge_count += 1;
        self.revision += 1;
        true
    }

    /// Replaces the weight of an existing edge `src → dst`.
    ///
    /// Returns `false` if the edge does not exist. Both adjacency maps are
    /// updated together, and the revision counter increases on success.
    pub fn update_edge(&mut self, src: u64, dst: u64, weight: f64) -> bool {
        if !self.has_edge(src, dst) {
            return false;
        }
        if let Some(v) = self.vertices.get_mut(&src) {
            v.link_out(dst, weight);
        }
        if let Some(v) = self.vertices.get_mut(&dst) {
            v.link_in(src, weight);
        }
        self.revision += 1;
        true
    }

    /// Removes the directed edge `src → dst`.
    ///
    /// Returns `false` if the edge does not exist.
    pub fn remove_edge(&mut self, src: u64, dst: u64) -> bool {
        if !self.has_edge(src, dst) {
            return false;
        }
        if let Some(v) = self.vertices.get_mut(&src) {
            v.unlink_out(dst);
        }
        if let Some(v) = self.vertices.get_mut(&dst) {
            v.unlink_in(src);
        }
        self.edge_count -= 1;
        self.revision += 1;
        true
    }

    /// Returns true if the directed edge `src → dst` exists.
    #[must_use]
    pub fn has_edge(&self, src: u64, dst: u64) -> bool {
        self.vertices
            .get(&src)
            .is_some_and(|v| v.outgoing().contains_key(&dst))
    }

    /// Returns the weight of the edge `src → dst`, or [`Self::NO_EDGE`]
    /// when the edge is absent.
    #[must_use]
    pub fn edge_weight(&self, src: u64, dst: u64) -> f64 {
        self.vertices
            .get(&src)
            .and_then(|v| v.outgoing().get(&dst))
            .copied()
            .unwrap_or(Self::NO_EDGE)
    }

    /// Returns the number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Read view over the edges terminating at a vertex
    /// (source key → weight). `None` if the vertex is absent.
    #[must_use]
    pub fn in_edges(&self, key: u64) -> Option<&IndexMap<u64, f64>> {
        self.vertices.get(&key).map(Vertex::incoming)
    }

    /// Read view over the edges originating at a vertex
    /// (destination key → weight). `None` if the vertex is absent.
    #[must_use]
    pub fn out_edges(&self, key: u64) -> Option<&IndexMap<u64, f64>> {
        self.vertices.get(&key).map(Vertex::outgoing)
    }

    /// Returns the out-degree of a vertex, 0 if absent.
    #[must_use]
    pub fn out_degree(&self, key: u64) -> usize {
        self.vertices.get(&key).map_or(0, Vertex::out_degree)
    }

    /// Returns the in-degree of a vertex, 0 if absent.
    #[must_use]
    pub fn in_degree(&self, key: u64) -> usize {
        self.vertices.get(&key).map_or(0, Vertex::in_degree)
    }

    // ── Bookkeeping ────────────────────────────────────────────────────

    /// Returns the current revision of this graph. Every successful
    /// structural mutation strictly increases it; no-ops leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all vertices and edges. Counts as a single structural
    /// mutation when the graph was non-empty.
    pub fn clear(&mut self) {
        if self.vertices.is_empty() {
            return;
        }
        self.vertices.clear();
        self.edge_count = 0;
        self.revision += 1;
    }

    // ── Positions ──────────────────────────────────────────────────────

    /// Returns the cached position of a vertex, if any.
    #[must_use]
    pub fn position(&self, key: u64) -> Option<Position> {
        self.vertices.get(&key)?.position()
    }

    /// Returns the position of a vertex, synthesizing and caching one via
    /// the provider when none has been set. `None` if the vertex is absent.
    ///
    /// Not a structural mutation: the revision counter is unchanged.
    pub fn position_or_assign<P>(&mut self, key: u64, provider: &mut P) -> Option<Position>
    where
        P: PositionProvider + ?Sized,
    {
        let vertex = self.vertices.get_mut(&key)?;
        if let Some(position) = vertex.position() {
            return Some(position);
        }
        let position = provider.position_for(key);
        vertex.set_position(position);
        Some(position)
    }
}

/// Weak structural equality: vertex key-sets match and each vertex pair is
/// equal under [`Vertex`]'s adjacency-key-set comparison. Edge weights,
/// positions and the revision counter are not compared.
impl PartialEq for DiGraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .all(|(key, vertex)| other.vertices.get(key).is_some_and(|o| vertex == o))
    }
}

impl fmt::Display for DiGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph: |V| = {}, |E| = {}",
            self.vertices.len(),
            self.edge_count
        )
    }
}
