//! Core type definitions for the graph model
//!
//! Small enumerations copied out of the document's attributes. Unknown
//! spellings are kept in an `Other` variant so nothing the document said
//! is lost.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directedness of an edge, or the graph-wide default
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EdgeDirection {
    Directed,
    #[default]
    Undirected,
    Mutual,
    Other(String),
}

impl EdgeDirection {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "directed" => EdgeDirection::Directed,
            "undirected" => EdgeDirection::Undirected,
            "mutual" => EdgeDirection::Mutual,
            other => EdgeDirection::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EdgeDirection::Directed => "directed",
            EdgeDirection::Undirected => "undirected",
            EdgeDirection::Mutual => "mutual",
            EdgeDirection::Other(s) => s,
        }
    }
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Id type hint declared on the graph element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IdType {
    #[default]
    String,
    Integer,
    Other(String),
}

impl IdType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "string" => IdType::String,
            "integer" => IdType::Integer,
            other => IdType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            IdType::String => "string",
            IdType::Integer => "integer",
            IdType::Other(s) => s,
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Encoding of instants on a dynamic graph
///
/// Only `Double` supports snapshot computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeFormat {
    #[default]
    Double,
    Integer,
    Date,
    DateTime,
    Other(String),
}

impl TimeFormat {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "double" => TimeFormat::Double,
            "integer" => TimeFormat::Integer,
            "date" => TimeFormat::Date,
            "dateTime" | "datetime" => TimeFormat::DateTime,
            other => TimeFormat::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TimeFormat::Double => "double",
            TimeFormat::Integer => "integer",
            TimeFormat::Date => "date",
            TimeFormat::DateTime => "dateTime",
            TimeFormat::Other(s) => s,
        }
    }

    pub fn is_numeric_double(&self) -> bool {
        matches!(self, TimeFormat::Double)
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coerce instant text to a float. Returns `None` for anything that is not
/// a number, including a literal "NaN".
pub fn parse_instant(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => Some(v),
        _ => None,
    }
}

/// Lenient float parse used for styling and weights: malformed text becomes NaN.
pub fn parse_float_lenient(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
