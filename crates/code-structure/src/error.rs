use thiserror::Error;

/// Result type for structure extraction
pub type Result<T> = std::result::Result<T, StructureError>;

/// Errors raised while preparing a document for extraction.
///
/// Extraction itself never fails: declarations that cannot be bound are
/// skipped, so these only cover loading and parsing the source.
#[derive(Error, Debug)]
pub enum StructureError {
    /// Failed to parse the source code
    #[error("Parse error: {0}")]
    ParseError(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Tree-sitter error
    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),
}

impl StructureError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a tree-sitter error
    pub fn tree_sitter(msg: impl Into<String>) -> Self {
        Self::TreeSitterError(msg.into())
    }
}
