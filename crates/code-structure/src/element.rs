use crate::kinds::{ElementKind, PropertyName, RangeName};
use crate::position::Range;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar value stored under a property name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Text(String),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One structural unit of a document (namespace, type, member)
///
/// Collections that were never populated stay `None` and are omitted when
/// serialized, so "no children" is distinguishable from "never had any".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeElement {
    kind: ElementKind,
    name: String,
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<CodeElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ranges: Option<BTreeMap<RangeName, Range>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<BTreeMap<PropertyName, PropertyValue>>,
}

impl CodeElement {
    #[must_use]
    pub fn builder() -> CodeElementBuilder {
        CodeElementBuilder::default()
    }

    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn children(&self) -> Option<&[CodeElement]> {
        self.children.as_deref()
    }

    #[must_use]
    pub const fn ranges(&self) -> Option<&BTreeMap<RangeName, Range>> {
        self.ranges.as_ref()
    }

    #[must_use]
    pub const fn properties(&self) -> Option<&BTreeMap<PropertyName, PropertyValue>> {
        self.properties.as_ref()
    }

    #[must_use]
    pub fn range(&self, name: RangeName) -> Option<Range> {
        self.ranges.as_ref()?.get(&name).copied()
    }

    #[must_use]
    pub fn property(&self, name: PropertyName) -> Option<&PropertyValue> {
        self.properties.as_ref()?.get(&name)
    }

    /// Count this element and all of its descendants
    #[must_use]
    pub fn total_count(&self) -> usize {
        1 + self
            .children()
            .unwrap_or_default()
            .iter()
            .map(Self::total_count)
            .sum::<usize>()
    }
}

impl std::fmt::Display for CodeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

/// Accumulates one element before it is frozen by [`CodeElementBuilder::build`]
#[derive(Debug, Default)]
pub struct CodeElementBuilder {
    kind: ElementKind,
    name: String,
    display_name: String,
    children: Option<Vec<CodeElement>>,
    ranges: Option<BTreeMap<RangeName, Range>>,
    properties: Option<BTreeMap<PropertyName, PropertyValue>>,
}

impl CodeElementBuilder {
    pub fn set_kind(&mut self, kind: ElementKind) -> &mut Self {
        self.kind = kind;
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) -> &mut Self {
        self.display_name = display_name.into();
        self
    }

    pub fn add_child(&mut self, element: CodeElement) -> &mut Self {
        self.children.get_or_insert_with(Vec::new).push(element);
        self
    }

    /// Attach a named range.
    ///
    /// # Panics
    ///
    /// If a range with the same name was already added.
    pub fn add_range(&mut self, name: RangeName, range: Range) -> &mut Self {
        let previous = self
            .ranges
            .get_or_insert_with(BTreeMap::new)
            .insert(name, range);
        assert!(previous.is_none(), "range `{}` added twice", name.as_str());
        self
    }

    /// Attach a named property.
    ///
    /// # Panics
    ///
    /// If a property with the same name was already added.
    pub fn add_property(&mut self, name: PropertyName, value: impl Into<PropertyValue>) -> &mut Self {
        let previous = self
            .properties
            .get_or_insert_with(BTreeMap::new)
            .insert(name, value.into());
        assert!(previous.is_none(), "property `{}` added twice", name.as_str());
        self
    }

    #[must_use]
    pub fn build(self) -> CodeElement {
        CodeElement {
            kind: self.kind,
            name: self.name,
            display_name: self.display_name,
            children: self.children,
            ranges: self.ranges,
            properties: self.properties,
        }
    }
}
