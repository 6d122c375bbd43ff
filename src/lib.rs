//! GEXF Timeline
//!
//! Reads GEXF graph-exchange documents into an in-memory graph model and
//! reconstructs the snapshots of dynamic graphs.
//!
//! # Architecture
//!
//! Data flows one way:
//! - `gexf::accessor`: element queries over the parsed XML tree
//! - `gexf::builder`: typed node, edge and attribute records
//! - `gexf::assembler`: the `Graph` aggregate
//! - `timeline`: canonical timeline and per-instant membership, on demand
//!
//! ## Example Usage
//!
//! ```rust
//! use gexf_timeline::gexf;
//!
//! let document = r#"
//! <gexf version="1.2">
//!   <graph mode="dynamic" timeformat="double">
//!     <nodes>
//!       <node id="a" label="A">
//!         <spells><spell start="0" end="2"/><spell start="4" end="6"/></spells>
//!       </node>
//!       <node id="b" label="B" start="1" end="5"/>
//!     </nodes>
//!     <edges>
//!       <edge id="e" source="a" target="b" start="1" end="5"/>
//!     </edges>
//!   </graph>
//! </gexf>"#;
//!
//! let graph = gexf::parse(document).unwrap();
//! let snapshots = graph.snapshots().unwrap();
//!
//! assert_eq!(snapshots.timeline.as_slice(), &[0.0, 1.0, 2.0, 4.0, 5.0, 6.0]);
//! assert_eq!(snapshots.at(0.0).unwrap().node_ids(&graph), vec!["a"]);
//! assert_eq!(snapshots.at(5.0).unwrap().edge_ids(&graph), vec!["e"]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod gexf;
pub mod graph;
pub mod timeline;

// Re-export main types for convenience
pub use gexf::{parse, parse_file, parse_with_config, GexfError, GexfResult, ParseConfig};
pub use graph::{
    Attribute, AttributeClass, AttributeValue, Edge, Graph, GraphMode, Interval, Lifetime, Node,
    Presence, PropertyValue, TimeBound,
};
pub use timeline::{compute_snapshots, Snapshot, Snapshots, Timeline, TimelineError, TimelineResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
