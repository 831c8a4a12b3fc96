//! JSON persistence for graph documents.
//!
//! # On-Disk Format
//!
//! ```json
//! {
//!   "Nodes": [ { "id": 7, "pos": "32.5,35.2,0" } ],
//!   "Edges": [ { "src": 7, "dest": 9, "w": 1.5 } ]
//! }
//! ```
//!
//! `pos` is optional on load and never emitted on save — the minimal schema
//! carries ids and edges only, which is exactly what the store's weak
//! structural equality compares. Unknown fields are ignored. Edges naming a
//! vertex the document does not define are dropped, not errored.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{DiGraph, Position};

#[derive(Serialize, Deserialize)]
struct GraphDoc {
    #[serde(rename = "Nodes")]
    nodes: Vec<NodeRecord>,
    #[serde(rename = "Edges")]
    edges: Vec<EdgeRecord>,
}

#[derive(Serialize, Deserialize)]
struct NodeRecord {
    id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pos: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct EdgeRecord {
    src: u64,
    dest: u64,
    w: f64,
}

/// Loads a graph from a JSON file.
///
/// On any failure (missing file, malformed JSON, malformed position
/// string) no graph is constructed — a caller holding a previous store
/// keeps it and replaces it only by assigning the `Ok` value.
pub fn load_json(path: impl AsRef<Path>) -> Result<DiGraph> {
    let file = File::open(path)?;
    let doc: GraphDoc = serde_json::from_reader(BufReader::new(file))?;
    build(doc)
}

/// Parses a graph from an in-memory JSON document.
pub fn from_json_str(data: &str) -> Result<DiGraph> {
    let doc: GraphDoc = serde_json::from_str(data)?;
    build(doc)
}

/// Saves a graph to a JSON file. Never mutates the store.
pub fn save_json(graph: &DiGraph, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &document(graph))?;
    writer.flush()?;
    Ok(())
}

/// Serializes a graph to an in-memory JSON document.
pub fn to_json_string(graph: &DiGraph) -> Result<String> {
    Ok(serde_json::to_string(&document(graph))?)
}

fn build(doc: GraphDoc) -> Result<DiGraph> {
    let mut graph = DiGraph::with_capacity(doc.nodes.len());
    for node in doc.nodes {
        let position = node.pos.as_deref().map(Position::from_str).transpose()?;
        graph.add_vertex(node.id, position);
    }
    for edge in doc.edges {
        if !graph.add_edge(edge.src, edge.dest, edge.w) {
            tracing::warn!(
                src = edge.src,
                dest = edge.dest,
                "dropping edge rejected by the store"
            );
        }
    }
    Ok(graph)
}

fn document(graph: &DiGraph) -> GraphDoc {
    GraphDoc {
        nodes: graph
            .vertices()
            .map(|v| NodeRecord {
                id: v.key(),
                pos: None,
            })
            .collect(),
        edges: graph
            .vertices()
            .flat_map(|v| {
                v.outgoing().iter().map(move |(&dest, &w)| EdgeRecord {
                    src: v.key(),
                    dest,
                    w,
                })
            })
            .collect(),
    }
}
