//! The assembled graph
//!
//! `Graph` owns its attribute schema, nodes and edges. Snapshots are
//! computed lazily and cached; callers that edit `mode`, `nodes` or `edges`
//! after the first `snapshots()` call must call `invalidate_snapshots()`.

use super::attribute::{Attribute, AttributeClass, AttributeValue};
use super::edge::Edge;
use super::node::Node;
use super::property::PropertyValue;
use super::time::TimeBound;
use super::types::{EdgeDirection, IdType, TimeFormat};
use crate::timeline::{compute_snapshots, Snapshots, TimelineResult};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use tracing::debug;

/// Document metadata from the `meta` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub creator: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub last_modified: Option<String>,
}

/// Graph-level settings that only exist on dynamic graphs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicMeta {
    pub time_format: TimeFormat,
    pub start: Option<TimeBound>,
    pub end: Option<TimeBound>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum GraphMode {
    #[default]
    Static,
    Dynamic(DynamicMeta),
}

impl GraphMode {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, GraphMode::Dynamic(_))
    }

    pub fn dynamic(&self) -> Option<&DynamicMeta> {
        match self {
            GraphMode::Static => None,
            GraphMode::Dynamic(meta) => Some(meta),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GraphMode::Static => "static",
            GraphMode::Dynamic(_) => "dynamic",
        }
    }
}

/// Aggregate root produced by one parse call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    /// `version` of the root `gexf` element
    pub version: Option<String>,
    pub mode: GraphMode,
    pub default_edge_type: EdgeDirection,
    pub id_type: IdType,
    pub meta: Meta,
    /// Flattened node and edge declarations. Order is not significant.
    pub attributes: Vec<Attribute>,
    /// Nodes in document order
    pub nodes: Vec<Node>,
    /// Edges in document order
    pub edges: Vec<Edge>,

    #[serde(skip)]
    snapshot_cache: OnceCell<Snapshots>,
}

impl Graph {
    pub fn new(mode: GraphMode) -> Self {
        Graph {
            mode,
            ..Default::default()
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// First node with this id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First edge with this id
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Edges whose source or target is `node_id`. The node itself need not exist.
    pub fn edges_of<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.touches(node_id))
    }

    /// Schema entry for `id` within `class`
    pub fn attribute(&self, class: &AttributeClass, id: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| &a.class == class && a.id == id)
    }

    pub fn attributes_of<'a>(&'a self, class: &'a AttributeClass) -> impl Iterator<Item = &'a Attribute> + 'a {
        self.attributes.iter().filter(move |a| &a.class == class)
    }

    /// Typed value of attribute `id` within `values`, converted using the
    /// schema declared for `class`. Undeclared attributes are read as strings.
    pub fn typed_value(
        &self,
        class: &AttributeClass,
        values: &[AttributeValue],
        id: &str,
    ) -> Option<PropertyValue> {
        let value = values.iter().find(|v| v.attribute == id)?;
        let attr_type = self
            .attribute(class, id)
            .map(|a| a.attr_type.clone())
            .unwrap_or_default();
        Some(PropertyValue::from_raw(&value.value, &attr_type))
    }

    /// Timeline and snapshots, computed on first request and cached.
    ///
    /// Fails with `TimelineError::Unsupported` without touching the cache
    /// when the graph is static or its time format is not `double`.
    pub fn snapshots(&self) -> TimelineResult<&Snapshots> {
        if let Some(cached) = self.snapshot_cache.get() {
            return Ok(cached);
        }
        let computed = compute_snapshots(self)?;
        debug!("Caching {} snapshots", computed.len());
        Ok(self.snapshot_cache.get_or_init(|| computed))
    }

    /// True once `snapshots` has succeeded
    pub fn has_cached_snapshots(&self) -> bool {
        self.snapshot_cache.get().is_some()
    }

    /// Drop cached snapshots so the next `snapshots()` call recomputes them
    pub fn invalidate_snapshots(&mut self) {
        if self.snapshot_cache.take().is_some() {
            debug!("Snapshot cache invalidated");
        }
    }
}
