//! Typed view of attribute values
//!
//! Attribute values are stored as document text. `PropertyValue` converts
//! them according to the declared attribute type when a caller asks.

use super::attribute::AttributeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Property value type supporting the GEXF attribute data types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<String>),
}

impl PropertyValue {
    /// Convert raw text according to `attr_type`.
    ///
    /// Text that does not fit the declared type falls back to
    /// `PropertyValue::String`.
    pub fn from_raw(raw: &str, attr_type: &AttributeType) -> Self {
        let text = raw.trim();
        match attr_type {
            AttributeType::Integer | AttributeType::Long => text
                .parse::<i64>()
                .map(PropertyValue::Integer)
                .unwrap_or_else(|_| PropertyValue::String(raw.to_string())),
            AttributeType::Float | AttributeType::Double => text
                .parse::<f64>()
                .map(PropertyValue::Float)
                .unwrap_or_else(|_| PropertyValue::String(raw.to_string())),
            AttributeType::Boolean => match text {
                "true" | "1" => PropertyValue::Boolean(true),
                "false" | "0" => PropertyValue::Boolean(false),
                _ => PropertyValue::String(raw.to_string()),
            },
            AttributeType::ListString => PropertyValue::List(
                text.split('|')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => PropertyValue::String(raw.to_string()),
        }
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::List(_) => "List",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_conversion() {
        assert_eq!(
            PropertyValue::from_raw("42", &AttributeType::Integer).as_integer(),
            Some(42)
        );
        assert_eq!(
            PropertyValue::from_raw("0.5", &AttributeType::Double).as_float(),
            Some(0.5)
        );
        assert_eq!(
            PropertyValue::from_raw("true", &AttributeType::Boolean).as_boolean(),
            Some(true)
        );
        assert_eq!(
            PropertyValue::from_raw("a|b| c", &AttributeType::ListString).as_list(),
            Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
        );
    }

    #[test]
    fn test_malformed_falls_back_to_string() {
        let v = PropertyValue::from_raw("forty", &AttributeType::Integer);
        assert_eq!(v.as_string(), Some("forty"));
        assert_eq!(v.type_name(), "String");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PropertyValue::Integer(3)), "3");
        assert_eq!(format!("{}", PropertyValue::String("x".into())), "\"x\"");
        assert_eq!(
            format!("{}", PropertyValue::List(vec!["a".into(), "b".into()])),
            "[a, b]"
        );
    }
}
