//! # Arcweight Core
//!
//! Directed weighted graph engine written in Rust.
//!
//! Arcweight stores a mutable directed graph with bidirectional adjacency
//! indexing and runs shortest-path and strongly-connected-component queries
//! over it without touching the store.
//!
//! ## Features
//!
//! - **Mutable graph store**: O(1) vertex/edge lookup, cascade deletes, a
//!   monotonic revision counter for change tracking
//! - **Shortest paths**: single-source Dijkstra with a lazy-deletion
//!   priority queue
//! - **SCC decomposition**: Kosaraju-style components without graph
//!   transposition
//! - **JSON persistence**: a compact `Nodes`/`Edges` document format that
//!   round-trips the graph structure
//!
//! ## Quick Start
//!
//! ```rust
//! use arcweight_core::{algo, persist, DiGraph};
//!
//! fn main() -> arcweight_core::Result<()> {
//!     let mut graph = DiGraph::new();
//!     for key in 0..3 {
//!         graph.add_vertex(key, None);
//!     }
//!     graph.add_edge(0, 1, 1.5);
//!     graph.add_edge(1, 2, 2.0);
//!
//!     let route = algo::shortest_path(&graph, 0, 2);
//!     assert_eq!(route.cost, 3.5);
//!     assert_eq!(route.path, vec![0, 1, 2]);
//!
//!     let document = persist::to_json_string(&graph)?;
//!     let restored = persist::from_json_str(&document)?;
//!     assert_eq!(graph, restored);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod algo;
pub mod error;
pub mod graph;
pub mod persist;
pub mod position;
#[cfg(test)]
mod position_tests;

pub use error::{Error, Result};
pub use graph::{DiGraph, Position, Vertex};
pub use position::{PositionProvider, RandomPositions};
