//! Graph data model
//!
//! This module implements the model assembled from a GEXF document:
//! - Graph aggregate with metadata, mode and attribute schema
//! - Nodes and edges in document order, with optional styling
//! - Static/dynamic presence as a tagged variant per entity
//! - Typed views of attribute values

pub mod attribute;
pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod time;
pub mod types;
pub mod viz;

// Re-export main types
pub use attribute::{Attribute, AttributeClass, AttributeMode, AttributeType, AttributeValue};
pub use edge::{Edge, MISSING_SOURCE, MISSING_TARGET};
pub use node::{Node, MISSING_ID, MISSING_LABEL};
pub use property::PropertyValue;
pub use store::{DynamicMeta, Graph, GraphMode, Meta};
pub use time::{BoundSource, Interval, Lifetime, Presence, TimeBound};
pub use types::{parse_instant, EdgeDirection, IdType, TimeFormat};
pub use viz::{Color, Position};
