//! Closed vocabularies for element kinds, accessibility, range and property names.

use serde::{Deserialize, Serialize};

/// Sub-category of a named type symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
}

/// Sub-category of a method symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Ordinary,
    Constructor,
    StaticConstructor,
    Destructor,
    UserDefinedOperator,
    Conversion,
}

/// Sub-category of a field symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Field,
    Constant,
    EnumMember,
}

/// Semantic category reported for a declared symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    Namespace,
    NamedType(TypeKind),
    Method(MethodKind),
    Field(FieldKind),
    Property { indexer: bool },
    Event,
    Other,
}

/// Accessibility as declared on a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessibility {
    Public,
    Internal,
    Private,
    Protected,
    ProtectedOrInternal,
    ProtectedAndInternal,
    NotApplicable,
}

impl Accessibility {
    /// Canonical tag, or `None` when no accessibility applies
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::Public => Some("public"),
            Self::Internal => Some("internal"),
            Self::Private => Some("private"),
            Self::Protected => Some("protected"),
            Self::ProtectedOrInternal => Some("protected internal"),
            Self::ProtectedAndInternal => Some("private protected"),
            Self::NotApplicable => None,
        }
    }
}

/// Kind tag attached to every code element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    // types
    Class,
    Delegate,
    Enum,
    Interface,
    Struct,

    // members
    Constant,
    Constructor,
    Destructor,
    EnumMember,
    Event,
    Field,
    Indexer,
    Method,
    Operator,
    Property,

    // other
    Namespace,
    #[default]
    Unknown,
}

impl ElementKind {
    /// Map a symbol category onto its kind tag
    #[must_use]
    pub const fn from_category(category: SymbolCategory) -> Self {
        match category {
            SymbolCategory::Namespace => Self::Namespace,
            SymbolCategory::NamedType(kind) => match kind {
                TypeKind::Class => Self::Class,
                TypeKind::Interface => Self::Interface,
                TypeKind::Struct => Self::Struct,
                TypeKind::Enum => Self::Enum,
                TypeKind::Delegate => Self::Delegate,
            },
            SymbolCategory::Method(kind) => match kind {
                MethodKind::Ordinary => Self::Method,
                MethodKind::Constructor | MethodKind::StaticConstructor => Self::Constructor,
                MethodKind::Destructor => Self::Destructor,
                MethodKind::UserDefinedOperator | MethodKind::Conversion => Self::Operator,
            },
            SymbolCategory::Field(kind) => match kind {
                FieldKind::Field => Self::Field,
                FieldKind::Constant => Self::Constant,
                FieldKind::EnumMember => Self::EnumMember,
            },
            SymbolCategory::Property { indexer: true } => Self::Indexer,
            SymbolCategory::Property { indexer: false } => Self::Property,
            SymbolCategory::Event => Self::Event,
            SymbolCategory::Other => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Delegate => "delegate",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::Constant => "constant",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::EnumMember => "enummember",
            Self::Event => "event",
            Self::Field => "field",
            Self::Indexer => "indexer",
            Self::Method => "method",
            Self::Operator => "operator",
            Self::Property => "property",
            Self::Namespace => "namespace",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the ranges an element may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeName {
    Attributes,
    Full,
    Name,
}

impl RangeName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Full => "full",
            Self::Name => "name",
        }
    }
}

/// Names of the properties an element may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyName {
    Accessibility,
    Static,
}

impl PropertyName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accessibility => "accessibility",
            Self::Static => "static",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ACCESSIBILITIES: [Accessibility; 7] = [
        Accessibility::Public,
        Accessibility::Internal,
        Accessibility::Private,
        Accessibility::Protected,
        Accessibility::ProtectedOrInternal,
        Accessibility::ProtectedAndInternal,
        Accessibility::NotApplicable,
    ];

    #[test]
    fn test_accessibility_tags_are_distinct() {
        let tags: Vec<_> = ACCESSIBILITIES.iter().filter_map(|a| a.tag()).collect();
        assert_eq!(tags.len(), 6);
        let unique: HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), 6);
        assert_eq!(Accessibility::NotApplicable.tag(), None);
        assert_eq!(
            Accessibility::ProtectedOrInternal.tag(),
            Some("protected internal")
        );
        assert_eq!(
            Accessibility::ProtectedAndInternal.tag(),
            Some("private protected")
        );
    }

    #[test]
    fn test_type_kinds_map_without_overlap() {
        let kinds = [
            TypeKind::Class,
            TypeKind::Interface,
            TypeKind::Struct,
            TypeKind::Enum,
            TypeKind::Delegate,
        ];
        let tags: HashSet<_> = kinds
            .iter()
            .map(|k| ElementKind::from_category(SymbolCategory::NamedType(*k)).as_str())
            .collect();
        assert_eq!(tags.len(), kinds.len());
        assert!(!tags.contains("unknown"));
    }

    #[test]
    fn test_method_kinds() {
        let tag = |k| ElementKind::from_category(SymbolCategory::Method(k));
        assert_eq!(tag(MethodKind::Ordinary), ElementKind::Method);
        assert_eq!(tag(MethodKind::Constructor), ElementKind::Constructor);
        assert_eq!(tag(MethodKind::StaticConstructor), ElementKind::Constructor);
        assert_eq!(tag(MethodKind::Destructor), ElementKind::Destructor);
        assert_eq!(tag(MethodKind::UserDefinedOperator), ElementKind::Operator);
        assert_eq!(tag(MethodKind::Conversion), ElementKind::Operator);
    }

    #[test]
    fn test_member_kinds() {
        let tag = ElementKind::from_category;
        assert_eq!(tag(SymbolCategory::Field(FieldKind::Field)), ElementKind::Field);
        assert_eq!(
            tag(SymbolCategory::Field(FieldKind::Constant)),
            ElementKind::Constant
        );
        assert_eq!(
            tag(SymbolCategory::Field(FieldKind::EnumMember)).as_str(),
            "enummember"
        );
        assert_eq!(
            tag(SymbolCategory::Property { indexer: true }),
            ElementKind::Indexer
        );
        assert_eq!(
            tag(SymbolCategory::Property { indexer: false }),
            ElementKind::Property
        );
        assert_eq!(tag(SymbolCategory::Event), ElementKind::Event);
        assert_eq!(tag(SymbolCategory::Namespace), ElementKind::Namespace);
        assert_eq!(tag(SymbolCategory::Other), ElementKind::Unknown);
    }

    #[test]
    fn test_serialized_tags_match_as_str() {
        for kind in [ElementKind::EnumMember, ElementKind::Class, ElementKind::Unknown] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        assert_eq!(serde_json::to_string(&RangeName::Full).unwrap(), "\"full\"");
        assert_eq!(
            serde_json::to_string(&PropertyName::Accessibility).unwrap(),
            "\"accessibility\""
        );
    }
}
