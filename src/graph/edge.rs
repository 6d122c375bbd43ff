//! Edge record
//!
//! `source` and `target` are node ids. They are not checked against the
//! node collection, so an edge may point at a node that does not exist.

use super::attribute::{find_value, AttributeValue};
use super::time::{Lifetime, Presence};
use super::types::EdgeDirection;
use super::viz::Color;
use serde::{Deserialize, Serialize};

pub const MISSING_SOURCE: &str = "missing-source";
pub const MISSING_TARGET: &str = "missing-target";

/// An edge of the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,

    /// Source node id
    pub source: String,

    /// Target node id
    pub target: String,

    /// Per-edge override of the graph's default directedness
    pub direction: Option<EdgeDirection>,
    pub label: Option<String>,
    pub weight: Option<f64>,

    pub color: Option<Color>,
    /// `viz:thickness` (or `viz:size` in older documents)
    pub thickness: Option<f64>,
    pub shape: Option<String>,

    pub attributes: Option<Vec<AttributeValue>>,

    pub presence: Presence,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            direction: None,
            label: None,
            weight: None,
            color: None,
            thickness: None,
            shape: None,
            attributes: None,
            presence: Presence::Static,
        }
    }

    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.presence = Presence::Dynamic(lifetime);
        self
    }

    pub fn with_attributes(mut self, values: Vec<AttributeValue>) -> Self {
        self.attributes = Some(values);
        self
    }

    pub fn attribute_value(&self, attribute: &str) -> Option<&AttributeValue> {
        self.attributes
            .as_deref()
            .and_then(|values| find_value(values, attribute))
    }

    pub fn lifetime(&self) -> Option<&Lifetime> {
        self.presence.lifetime()
    }

    /// Check if this edge touches a node, in either direction
    pub fn touches(&self, node: &str) -> bool {
        self.source == node || self.target == node
    }

    /// Effective directedness given the graph default
    pub fn direction_or<'a>(&'a self, default: &'a EdgeDirection) -> &'a EdgeDirection {
        self.direction.as_ref().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("e1", "a", "b");
        assert_eq!(edge.source, "a");
        assert_eq!(edge.target, "b");
        assert!(edge.weight.is_none());
        assert!(edge.label.is_none());
        assert!(edge.touches("a"));
        assert!(edge.touches("b"));
        assert!(!edge.touches("c"));
    }

    #[test]
    fn test_direction_override() {
        let mut edge = Edge::new("e1", "a", "b");
        assert_eq!(edge.direction_or(&EdgeDirection::Undirected), &EdgeDirection::Undirected);
        edge.direction = Some(EdgeDirection::Directed);
        assert_eq!(edge.direction_or(&EdgeDirection::Undirected), &EdgeDirection::Directed);
    }
}
