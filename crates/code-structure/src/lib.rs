//! # LSIF Code Structure
//!
//! Reduces C# source files to a tree of structural elements: namespaces,
//! types and their members, each tagged with a kind, display names, source
//! ranges and a few symbol properties.
//!
//! ## Architecture
//!
//! ```text
//! Source Code
//!     │
//!     ├──> Tree-sitter Parsing → CSharpDocument
//!     │
//!     ├──> SyntaxTree: classify declarations
//!     │    (type, namespace, method, property, field, ...)
//!     │
//!     ├──> SemanticModel: bind declarations to symbols
//!     │    (accessibility, static, display strings)
//!     │
//!     └──> StructureExtractor
//!          ├─> Drop declarations that fail to bind
//!          ├─> One element per field declarator
//!          └─> Emit CodeElement[] with ranges and properties
//! ```
//!
//! The extractor only talks to the [`SyntaxTree`], [`SemanticModel`] and
//! [`SourceText`] traits; [`CSharpDocument`] implements all three seams for
//! real C# code.
//!
//! ## Example
//!
//! ```rust
//! use lsif_code_structure::{CSharpDocument, StructureExtractor};
//!
//! let document = CSharpDocument::parse("namespace N { public class C { int x, y; } }").unwrap();
//! let elements = StructureExtractor::default().extract(&document, &document, document.text());
//!
//! let class = &elements[0].children().unwrap()[0];
//! assert_eq!(class.display_name(), "N.C");
//! assert_eq!(class.children().unwrap().len(), 2);
//! ```

mod config;
mod csharp;
mod element;
mod error;
mod extractor;
mod kinds;
mod position;
mod syntax;
mod text;

pub use config::{DisplayFormat, ExtractorConfig, ParameterStyle, Qualification};
pub use csharp::{CSharpDocument, CSharpSymbol};
pub use element::{CodeElement, CodeElementBuilder, PropertyValue};
pub use error::{Result, StructureError};
pub use extractor::StructureExtractor;
pub use kinds::{
    Accessibility, ElementKind, FieldKind, MethodKind, PropertyName, RangeName, SymbolCategory,
    TypeKind,
};
pub use position::{Point, Range};
pub use syntax::{
    ContainerSyntax, DeclarationSyntax, DeclaredSymbol, FieldSyntax, MethodForm, MethodSyntax,
    PropertyForm, PropertySyntax, SemanticModel, SyntaxNode, SyntaxTree, VariableSyntax,
};
pub use text::{LineIndex, SourceText, TextSpan};
