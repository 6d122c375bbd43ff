//! Node record
//!
//! A node carries its identity, optional styling, optional attribute
//! values and, on dynamic graphs, its lifetime.

use super::attribute::{find_value, AttributeValue};
use super::time::{Lifetime, Presence};
use super::viz::{Color, Position};
use serde::{Deserialize, Serialize};

pub const MISSING_ID: &str = "missing-id";
pub const MISSING_LABEL: &str = "missing-label";

/// A node of the graph
///
/// Optional fields stay `None` unless the document supplied them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,

    /// `viz:color`
    pub color: Option<Color>,
    /// `viz:position`
    pub position: Option<Position>,
    /// `viz:size`
    pub size: Option<f64>,
    /// `viz:shape`
    pub shape: Option<String>,

    /// Present when the node had an `attvalues` block
    pub attributes: Option<Vec<AttributeValue>>,

    pub presence: Presence,
}

impl Node {
    /// Create a static node with no optional fields
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
            color: None,
            position: None,
            size: None,
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

    /// Value for a declared attribute id, if the node carries one
    pub fn attribute_value(&self, attribute: &str) -> Option<&AttributeValue> {
        self.attributes
            .as_deref()
            .and_then(|values| find_value(values, attribute))
    }

    pub fn lifetime(&self) -> Option<&Lifetime> {
        self.presence.lifetime()
    }
}
