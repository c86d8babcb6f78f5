//! Seams between the extractor and a source-analysis engine.

use crate::config::DisplayFormat;
use crate::kinds::{Accessibility, SymbolCategory};
use crate::text::TextSpan;

/// Common parts of a single-symbol declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationSyntax<N> {
    /// Handle used to look up the declared symbol
    pub node: N,
    /// Span of all attribute lists, if any
    pub attributes: Option<TextSpan>,
    /// Span of the whole declaration
    pub span: TextSpan,
    /// Span of the identifying token
    pub identifier: Option<TextSpan>,
}

/// Declaration that owns member declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSyntax<N> {
    pub declaration: DeclarationSyntax<N>,
    /// Member nodes in source order
    pub members: Vec<N>,
}

/// Shape of a method-like declaration and the token that names it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodForm {
    Method { identifier: Option<TextSpan> },
    Constructor { identifier: Option<TextSpan> },
    Destructor { identifier: Option<TextSpan> },
    Operator { operator_token: Option<TextSpan> },
    ConversionOperator { target_type: Option<TextSpan> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSyntax<N> {
    pub node: N,
    pub attributes: Option<TextSpan>,
    pub span: TextSpan,
    pub form: MethodForm,
}

/// Shape of a property-like declaration and the token that names it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyForm {
    Property { identifier: Option<TextSpan> },
    Event { identifier: Option<TextSpan> },
    Indexer { this_keyword: Option<TextSpan> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySyntax<N> {
    pub node: N,
    pub attributes: Option<TextSpan>,
    pub span: TextSpan,
    pub form: PropertyForm,
}

/// One declarator in a field statement (`x` in `int x, y;`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSyntax<N> {
    pub node: N,
    pub span: TextSpan,
    pub identifier: Option<TextSpan>,
}

/// Field-like statement that may declare several symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSyntax<N> {
    pub attributes: Option<TextSpan>,
    /// Span of the whole statement, shared by every declarator
    pub span: TextSpan,
    pub variables: Vec<VariableSyntax<N>>,
}

/// Closed set of node categories the extractor understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode<N> {
    Type(ContainerSyntax<N>),
    Delegate(DeclarationSyntax<N>),
    Enum(ContainerSyntax<N>),
    Namespace(ContainerSyntax<N>),
    Method(MethodSyntax<N>),
    Property(PropertySyntax<N>),
    Field(FieldSyntax<N>),
    EnumMember(DeclarationSyntax<N>),
    /// Anything else; produces no element
    Other,
}

/// Parsed document as seen by the extractor
pub trait SyntaxTree {
    type Node<'t>: Copy
    where
        Self: 't;

    /// Top-level declarations in source order
    fn root_members(&self) -> Vec<Self::Node<'_>>;

    /// Classify a node into one of the supported categories
    fn classify<'t>(&'t self, node: Self::Node<'t>) -> SyntaxNode<Self::Node<'t>>;
}

/// Symbol binding for declaration nodes
pub trait SemanticModel<N> {
    type Symbol: DeclaredSymbol;

    /// Symbol introduced by a declaration node, `None` when it cannot be bound
    fn declared_symbol(&self, node: N) -> Option<Self::Symbol>;
}

/// Bound semantic entity (namespace, type, member)
pub trait DeclaredSymbol {
    fn category(&self) -> SymbolCategory;

    fn declared_accessibility(&self) -> Accessibility;

    fn is_static(&self) -> bool;

    fn to_display_string(&self, format: &DisplayFormat) -> String;
}
