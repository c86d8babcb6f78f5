use crate::error::Result;
use crate::types::GraphElement;
use std::fmt;

/// Immutable, ordered snapshot of a builder's elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    elements: Vec<GraphElement>,
}

impl Graph {
    pub(crate) const fn new(elements: Vec<GraphElement>) -> Self {
        Self { elements }
    }

    #[must_use]
    pub fn elements(&self) -> &[GraphElement] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Render every element, in order, as one JSON array
    pub fn serialize(&self) -> Result<String> {
        let json = serde_json::to_string(&self.elements)?;
        log::debug!("Serialized {} graph elements", self.elements.len());
        Ok(json)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.serialize().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use crate::{DocumentUri, GraphBuilder};

    #[test]
    fn test_serialize_empty_graph() {
        let graph = GraphBuilder::new().build();
        assert_eq!(graph.serialize().unwrap(), "[]");
    }

    #[test]
    fn test_serialize_is_valid_json_array() {
        let mut builder = GraphBuilder::new();
        builder.add_document(DocumentUri::from_file_path("/p/A.cs").unwrap());
        builder.add_document(DocumentUri::from_file_path("/p/B.cs").unwrap());
        let graph = builder.build();

        let text = graph.serialize().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["id"], 2);
        assert_eq!(items[1]["uri"], "file:///p/B.cs");
        assert_eq!(graph.to_string(), text);
    }
}
