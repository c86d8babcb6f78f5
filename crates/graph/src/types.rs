use crate::uri::DocumentUri;
use serde::Serialize;

/// Graph element identifier, assigned at append time starting from 1
pub type ElementId = u64;

/// Discriminator written as the `type` of every element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Vertex,
}

/// Semantic subtype of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexLabel {
    /// Document vertices are labelled `project`
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Csharp,
}

/// One source document in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVertex {
    id: ElementId,
    #[serde(rename = "type")]
    element_type: ElementType,
    label: VertexLabel,
    uri: DocumentUri,
    language_id: LanguageId,
}

impl DocumentVertex {
    pub(crate) const fn new(id: ElementId, uri: DocumentUri) -> Self {
        Self {
            id,
            element_type: ElementType::Vertex,
            label: VertexLabel::Project,
            uri,
            language_id: LanguageId::Csharp,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub const fn label(&self) -> VertexLabel {
        self.label
    }

    #[must_use]
    pub const fn uri(&self) -> &DocumentUri {
        &self.uri
    }

    #[must_use]
    pub const fn language_id(&self) -> LanguageId {
        self.language_id
    }
}

/// Any element the graph can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GraphElement {
    Document(DocumentVertex),
}

impl From<DocumentVertex> for GraphElement {
    fn from(vertex: DocumentVertex) -> Self {
        Self::Document(vertex)
    }
}
