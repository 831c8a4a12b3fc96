//! Graph entity types: vertices and their coordinates.
//!
//! A [`Vertex`] owns both sides of its adjacency (incoming and outgoing
//! weight maps). The maps are kept in lock-step by [`DiGraph`](super::DiGraph)
//! and are never mutated independently.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::Error;

/// A point in 3D space attached to a vertex for display purposes.
///
/// The wire form is a string of three comma-separated coordinates
/// (`"32.5,35.2,0"`), which [`FromStr`] and [`fmt::Display`] round-trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Position {
    /// Creates a position from its three coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coords = s.split(',').map(|c| c.trim().parse::<f64>());
        match (coords.next(), coords.next(), coords.next(), coords.next()) {
            (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok(Self { x, y, z }),
            _ => Err(Error::Position(s.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// A vertex in a directed weighted graph.
///
/// Identified solely by its integer key. Carries an optional cached
/// [`Position`] and both adjacency maps: `incoming` (source key → weight for
/// every edge terminating here) and `outgoing` (destination key → weight for
/// every edge originating here).
///
/// # Example
///
/// ```rust
/// use arcweight_core::{DiGraph, Position};
///
/// let mut graph = DiGraph::new();
/// graph.add_vertex(1, Some(Position::new(32.5, 35.2, 0.0)));
/// graph.add_vertex(2, None);
/// graph.add_edge(1, 2, 4.0);
///
/// let vertex = graph.vertex(1).unwrap();
/// assert_eq!(vertex.key(), 1);
/// assert_eq!(vertex.outgoing().get(&2), Some(&4.0));
/// ```
#[derive(Debug, Clone)]
pub struct Vertex {
    key: u64,
    position: Option<Position>,
    incoming: IndexMap<u64, f64>,
    outgoing: IndexMap<u64, f64>,
}

impl Vertex {
    /// Creates a new isolated vertex with the given key.
    #[must_use]
    pub fn new(key: u64) -> Self {
        Self {
            key,
            position: None,
            incoming: IndexMap::new(),
            outgoing: IndexMap::new(),
        }
    }

    /// Attaches a position to this vertex (builder pattern).
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Returns the vertex key.
    #[must_use]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Returns the cached position, if one has been set or synthesized.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the incoming adjacency map (source key → edge weight).
    #[must_use]
    pub fn incoming(&self) -> &IndexMap<u64, f64> {
        &self.incoming
    }

    /// Returns the outgoing adjacency map (destination key → edge weight).
    #[must_use]
    pub fn outgoing(&self) -> &IndexMap<u64, f64> {
        &self.outgoing
    }

    /// Returns the number of edges terminating at this vertex.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Returns the number of edges originating at this vertex.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub(crate) fn link_out(&mut self, dst: u64, weight: f64) {
        self.outgoing.insert(dst, weight);
    }

    pub(crate) fn link_in(&mut self, src: u64, weight: f64) {
        self.incoming.insert(src, weight);
    }

    pub(crate) fn unlink_out(&mut self, dst: u64) {
        self.outgoing.shift_remove(&dst);
    }

    pub(crate) fn unlink_in(&mut self, src: u64) {
        self.incoming.shift_remove(&src);
    }
}

/// Weak structural equality: two vertices are equal when their incoming and
/// outgoing key-sets match. Weights and positions are deliberately not
/// compared — this is the contract round-trip tests rely on, since the
/// minimal persistence schema does not carry positions.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        same_key_set(&self.incoming, &other.incoming)
            && same_key_set(&self.outgoing, &other.outgoing)
    }
}

fn same_key_set(a: &IndexMap<u64, f64>, b: &IndexMap<u64, f64>) -> bool {
    a.len() == b.len() && a.keys().all(|k| b.contains_key(k))
}
