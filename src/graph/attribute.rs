//! Attribute schema and per-entity attribute values

use super::time::{Interval, TimeBound};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity class an attribute declaration belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeClass {
    Node,
    Edge,
    Other(String),
}

impl AttributeClass {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "node" => AttributeClass::Node,
            "edge" => AttributeClass::Edge,
            other => AttributeClass::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AttributeClass::Node => "node",
            AttributeClass::Edge => "edge",
            AttributeClass::Other(s) => s,
        }
    }
}

impl fmt::Display for AttributeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttributeMode {
    #[default]
    Static,
    Dynamic,
}

impl AttributeMode {
    pub fn parse(raw: &str) -> Self {
        if raw == "dynamic" {
            AttributeMode::Dynamic
        } else {
            AttributeMode::Static
        }
    }
}

/// Declared value type of an attribute. Metadata only; values are not
/// validated against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttributeType {
    #[default]
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    ListString,
    AnyUri,
    Other(String),
}

impl AttributeType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "string" => AttributeType::String,
            "integer" => AttributeType::Integer,
            "long" => AttributeType::Long,
            "float" => AttributeType::Float,
            "double" => AttributeType::Double,
            "boolean" => AttributeType::Boolean,
            "liststring" => AttributeType::ListString,
            "anyURI" => AttributeType::AnyUri,
            other => AttributeType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AttributeType::String => "string",
            AttributeType::Integer => "integer",
            AttributeType::Long => "long",
            AttributeType::Float => "float",
            AttributeType::Double => "double",
            AttributeType::Boolean => "boolean",
            AttributeType::ListString => "liststring",
            AttributeType::AnyUri => "anyURI",
            AttributeType::Other(s) => s,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schema entry from an `attributes` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub class: AttributeClass,
    pub mode: AttributeMode,
    pub id: String,
    pub title: String,
    pub attr_type: AttributeType,
}

impl Attribute {
    pub fn new(
        class: AttributeClass,
        mode: AttributeMode,
        id: impl Into<String>,
        title: impl Into<String>,
        attr_type: AttributeType,
    ) -> Self {
        Attribute {
            class,
            mode,
            id: id.into(),
            title: title.into(),
            attr_type,
        }
    }
}

/// Value carried by a node or edge for one declared attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Id of the declared attribute (`for`)
    pub attribute: String,
    pub value: String,
    /// Validity window, present only on dynamic graphs
    pub lifetime: Option<Interval>,
}

impl AttributeValue {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        AttributeValue {
            attribute: attribute.into(),
            value: value.into(),
            lifetime: None,
        }
    }

    pub fn with_lifetime(mut self, lifetime: Interval) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    pub fn bounds(&self) -> impl Iterator<Item = &TimeBound> {
        self.lifetime
            .iter()
            .flat_map(|i| i.start.iter().chain(i.end.iter()))
    }
}

/// Look up the first value for `attribute` in a value list
pub fn find_value<'a>(values: &'a [AttributeValue], attribute: &str) -> Option<&'a AttributeValue> {
    values.iter().find(|v| v.attribute == attribute)
}
