//! # LSIF Graph
//!
//! Vertex model and builder for the code-intelligence graph.
//!
//! ## Architecture
//!
//! ```text
//! Document paths
//!     │
//!     ├──> DocumentUri (absolute file:// reference)
//!     │
//!     ├──> GraphBuilder
//!     │      ├─ Assign ids (1, 2, 3, ...)
//!     │      └─ Append vertices in insertion order
//!     │
//!     └──> Graph
//!            └─ serialize() → JSON array of elements
//! ```

mod builder;
mod error;
mod graph;
mod types;
mod uri;

pub use builder::GraphBuilder;
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use types::{DocumentVertex, ElementId, ElementType, GraphElement, LanguageId, VertexLabel};
pub use uri::DocumentUri;
