//! Tree-sitter node helpers and the syntax-category dispatch for C#.

use crate::syntax::{
    ContainerSyntax, DeclarationSyntax, FieldSyntax, MethodForm, MethodSyntax, PropertyForm,
    PropertySyntax, SyntaxNode, VariableSyntax,
};
use crate::text::TextSpan;
use tree_sitter::Node;

pub(crate) const TYPE_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "struct_declaration",
    "interface_declaration",
    "record_declaration",
    "record_struct_declaration",
];

pub(crate) const NAMESPACE_DECLARATIONS: &[&str] =
    &["namespace_declaration", "file_scoped_namespace_declaration"];

pub(crate) fn is_type_declaration(kind: &str) -> bool {
    TYPE_DECLARATIONS.contains(&kind) || kind == "enum_declaration"
}

pub(crate) fn is_namespace_declaration(kind: &str) -> bool {
    NAMESPACE_DECLARATIONS.contains(&kind)
}

pub(crate) fn span(node: Node) -> TextSpan {
    TextSpan::new(node.start_byte(), node.end_byte())
}

pub(crate) fn children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

pub(crate) fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

pub(crate) fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    children(node).into_iter().find(|child| child.kind() == kind)
}

/// Identifying name of a declaration, skipping nodes the parser invented
pub(crate) fn name_node(node: Node) -> Option<Node> {
    node.child_by_field_name("name")
        .or_else(|| child_of_kind(node, "identifier"))
        .filter(|name| !name.is_missing() && !name.is_error())
}

/// Covering span of every attribute list directly on a declaration
pub(crate) fn attributes_span(node: Node) -> Option<TextSpan> {
    children(node)
        .into_iter()
        .filter(|child| child.kind() == "attribute_list")
        .map(span)
        .reduce(TextSpan::cover)
}

/// Child right after the `operator` keyword (skipping `checked`)
pub(crate) fn after_operator_keyword(node: Node) -> Option<Node> {
    let mut seen_keyword = false;
    for child in children(node) {
        if seen_keyword && child.kind() != "checked" {
            return Some(child);
        }
        if child.kind() == "operator" {
            seen_keyword = true;
        }
    }
    None
}

pub(crate) fn operator_token(node: Node) -> Option<Node> {
    node.child_by_field_name("operator")
        .or_else(|| after_operator_keyword(node))
        .filter(|token| !token.is_missing())
}

pub(crate) fn conversion_type(node: Node) -> Option<Node> {
    node.child_by_field_name("type")
        .or_else(|| after_operator_keyword(node))
        .filter(|ty| !ty.is_missing())
}

pub(crate) fn this_keyword(node: Node) -> Option<Node> {
    child_of_kind(node, "this").filter(|keyword| !keyword.is_missing())
}

fn body(node: Node) -> Option<Node> {
    node.child_by_field_name("body").or_else(|| {
        children(node).into_iter().find(|child| {
            matches!(
                child.kind(),
                "declaration_list" | "enum_member_declaration_list"
            )
        })
    })
}

fn body_members(node: Node) -> Vec<Node> {
    body(node).map(named_children).unwrap_or_default()
}

/// Members of a file-scoped namespace.
///
/// Depending on the grammar revision the declarations are either children of
/// the namespace node or its following siblings in the compilation unit.
fn file_scoped_members(node: Node) -> Vec<Node> {
    let mut members = named_children(node);
    let mut next = node.next_named_sibling();
    while let Some(sibling) = next {
        members.push(sibling);
        next = sibling.next_named_sibling();
    }
    members
}

/// Declarations a compilation unit exposes at the top level
pub(crate) fn root_members(root: Node) -> Vec<Node> {
    let mut members = Vec::new();
    for child in named_children(root) {
        members.push(child);
        if child.kind() == "file_scoped_namespace_declaration" {
            // everything after it belongs to the namespace
            break;
        }
    }
    members
}

fn declaration(node: Node) -> DeclarationSyntax<Node> {
    DeclarationSyntax {
        node,
        attributes: attributes_span(node),
        span: span(node),
        identifier: name_node(node).map(span),
    }
}

fn field(node: Node) -> FieldSyntax<Node> {
    let variables = child_of_kind(node, "variable_declaration")
        .map(named_children)
        .unwrap_or_default()
        .into_iter()
        .filter(|child| child.kind() == "variable_declarator")
        .map(|declarator| VariableSyntax {
            node: declarator,
            span: span(declarator),
            identifier: name_node(declarator).map(span),
        })
        .collect();

    FieldSyntax {
        attributes: attributes_span(node),
        span: span(node),
        variables,
    }
}

fn method(node: Node, form: MethodForm) -> MethodSyntax<Node> {
    MethodSyntax {
        node,
        attributes: attributes_span(node),
        span: span(node),
        form,
    }
}

fn property(node: Node, form: PropertyForm) -> PropertySyntax<Node> {
    PropertySyntax {
        node,
        attributes: attributes_span(node),
        span: span(node),
        form,
    }
}

/// Map a tree-sitter node onto the extractor's closed set of categories
pub(crate) fn classify(node: Node) -> SyntaxNode<Node> {
    let identifier = || name_node(node).map(span);

    match node.kind() {
        kind if TYPE_DECLARATIONS.contains(&kind) => SyntaxNode::Type(ContainerSyntax {
            declaration: declaration(node),
            members: body_members(node),
        }),
        "enum_declaration" => SyntaxNode::Enum(ContainerSyntax {
            declaration: declaration(node),
            members: body_members(node),
        }),
        "delegate_declaration" => SyntaxNode::Delegate(declaration(node)),
        "namespace_declaration" => SyntaxNode::Namespace(ContainerSyntax {
            declaration: declaration(node),
            members: body_members(node),
        }),
        "file_scoped_namespace_declaration" => SyntaxNode::Namespace(ContainerSyntax {
            declaration: declaration(node),
            members: file_scoped_members(node),
        }),
        "method_declaration" => SyntaxNode::Method(method(
            node,
            MethodForm::Method {
                identifier: identifier(),
            },
        )),
        "constructor_declaration" => SyntaxNode::Method(method(
            node,
            MethodForm::Constructor {
                identifier: identifier(),
            },
        )),
        "destructor_declaration" => SyntaxNode::Method(method(
            node,
            MethodForm::Destructor {
                identifier: identifier(),
            },
        )),
        "operator_declaration" => SyntaxNode::Method(method(
            node,
            MethodForm::Operator {
                operator_token: operator_token(node).map(span),
            },
        )),
        "conversion_operator_declaration" => SyntaxNode::Method(method(
            node,
            MethodForm::ConversionOperator {
                target_type: conversion_type(node).map(span),
            },
        )),
        "property_declaration" => SyntaxNode::Property(property(
            node,
            PropertyForm::Property {
                identifier: identifier(),
            },
        )),
        "event_declaration" => SyntaxNode::Property(property(
            node,
            PropertyForm::Event {
                identifier: identifier(),
            },
        )),
        "indexer_declaration" => SyntaxNode::Property(property(
            node,
            PropertyForm::Indexer {
                this_keyword: this_keyword(node).map(span),
            },
        )),
        "field_declaration" | "event_field_declaration" => SyntaxNode::Field(field(node)),
        "enum_member_declaration" => SyntaxNode::EnumMember(declaration(node)),
        _ => SyntaxNode::Other,
    }
}
