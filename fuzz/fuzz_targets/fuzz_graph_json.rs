//! Fuzz target for the graph JSON loader.
//!
//! This target feeds arbitrary input to the document codec to find:
//! - Panics on malformed input
//! - Round-trips that change the graph structure
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_json
//! ```

#![no_main]

use arcweight_core::persist;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (UTF-8 validation)
    if let Ok(input) = std::str::from_utf8(data) {
        // The codec should never panic on any input
        if let Ok(graph) = persist::from_json_str(input) {
            // When an accepted document re-serializes cleanly (non-finite
            // weights do not), the round-trip must preserve the structure
            if let Ok(document) = persist::to_json_string(&graph) {
                if let Ok(restored) = persist::from_json_str(&document) {
                    assert_eq!(graph, restored);
                }
            }
        }
    }
});
