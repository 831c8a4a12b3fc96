//! Directed weighted graph storage.
//!
//! Provides the mutable [`DiGraph`] store and its entity types. The store
//! owns all structural state; traversal algorithms in [`crate::algo`]
//! operate over shared references and keep their scratch state externally.
//!
//! # Example
//!
//! ```rust
//! use arcweight_core::DiGraph;
//!
//! let mut graph = DiGraph::new();
//! graph.add_vertex(1, None);
//! graph.add_vertex(2, None);
//! assert!(graph.add_edge(1, 2, 0.5));
//! assert!(!graph.add_edge(1, 2, 7.0)); // presence blocks re-add
//!
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.edge_weight(1, 2), 0.5);
//! ```

mod store;
mod types;


pub use store::DiGraph;
pub use types::{Position, Vertex};
