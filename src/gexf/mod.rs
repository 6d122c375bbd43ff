//! GEXF document reading
//!
//! Parses a GEXF document into a [`Graph`]. Only a document that cannot be
//! read or is not well-formed XML is an error; missing optional fields
//! resolve to defaults and malformed numbers never abort the parse.

pub mod accessor;
pub mod assembler;
pub mod builder;

pub use accessor::ElementAccess;
pub use assembler::assemble;

use crate::graph::Graph;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while obtaining or reading a document
#[derive(Error, Debug)]
pub enum GexfError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Document is {size} bytes, limit is {limit}")]
    DocumentTooLarge { size: usize, limit: usize },
}

pub type GexfResult<T> = Result<T, GexfError>;

/// Parser configuration
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Read `viz:*` styling elements
    pub include_viz: bool,
    /// Reject documents larger than this many bytes
    pub max_document_bytes: Option<usize>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            include_viz: true,
            max_document_bytes: None,
        }
    }
}

/// Parse a GEXF document with the default configuration
pub fn parse(document: &str) -> GexfResult<Graph> {
    parse_with_config(document, &ParseConfig::default())
}

pub fn parse_with_config(document: &str, config: &ParseConfig) -> GexfResult<Graph> {
    if let Some(limit) = config.max_document_bytes {
        if document.len() > limit {
            return Err(GexfError::DocumentTooLarge {
                size: document.len(),
                limit,
            });
        }
    }
    let doc = roxmltree::Document::parse(document)?;
    Ok(assemble(doc.root_element(), config))
}

/// Read and parse a GEXF file
pub fn parse_file(path: impl AsRef<Path>, config: &ParseConfig) -> GexfResult<Graph> {
    let path = path.as_ref();
    debug!("Reading GEXF document from {:?}", path);
    let document = std::fs::read_to_string(path)?;
    parse_with_config(&document, config)
}
