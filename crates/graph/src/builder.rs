use crate::graph::Graph;
use crate::types::{DocumentVertex, ElementId, GraphElement};
use crate::uri::DocumentUri;

/// Accumulates graph elements and hands out their ids.
///
/// Ids start at 1 and grow with every append; a builder is single-writer.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    elements: Vec<GraphElement>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document vertex and return it
    pub fn add_document(&mut self, uri: DocumentUri) -> DocumentVertex {
        let vertex = DocumentVertex::new(self.next_id(), uri);
        log::trace!("Added document vertex {} for {}", vertex.id(), vertex.uri());
        self.elements.push(vertex.clone().into());
        vertex
    }

    /// Number of elements appended so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn build(self) -> Graph {
        Graph::new(self.elements)
    }

    fn next_id(&self) -> ElementId {
        self.elements.len() as ElementId + 1
    }
}
