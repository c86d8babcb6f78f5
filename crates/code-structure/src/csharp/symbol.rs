//! Syntax-directed binding of C# declarations to symbols.

use super::nodes::{
    self, child_of_kind, children, conversion_type, is_namespace_declaration, is_type_declaration,
    name_node, named_children, operator_token,
};
use crate::config::{DisplayFormat, ParameterStyle, Qualification};
use crate::kinds::{Accessibility, FieldKind, MethodKind, SymbolCategory, TypeKind};
use crate::syntax::DeclaredSymbol;
use tree_sitter::Node;

/// Generic parameter as written on a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
struct TypeParameter {
    variance: Option<String>,
    name: String,
}

/// One segment of a qualified name (`Outer<T>` in `N.Outer<T>.Inner`)
#[derive(Debug, Clone, PartialEq, Eq)]
struct NamePart {
    name: String,
    type_parameters: Vec<TypeParameter>,
}

impl NamePart {
    fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Parameter {
    modifiers: Vec<String>,
    ty: Option<String>,
    name: Option<String>,
    default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SymbolName {
    Named(NamePart),
    Constructor { type_name: String },
    Destructor { type_name: String },
    Operator { token: String },
    Conversion { direction: String, target: String },
    Indexer,
}

/// Symbol bound from C# declaration syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSharpSymbol {
    category: SymbolCategory,
    accessibility: Accessibility,
    is_static: bool,
    containers: Vec<NamePart>,
    name: SymbolName,
    parameters: Option<Vec<Parameter>>,
}

impl DeclaredSymbol for CSharpSymbol {
    fn category(&self) -> SymbolCategory {
        self.category
    }

    fn declared_accessibility(&self) -> Accessibility {
        self.accessibility
    }

    fn is_static(&self) -> bool {
        self.is_static
    }

    fn to_display_string(&self, format: &DisplayFormat) -> String {
        let mut out = String::new();

        if format.qualification == Qualification::NameAndContainers {
            for container in &self.containers {
                render_part(&mut out, container, format);
                out.push('.');
            }
        }

        let parameters = format.parameters.zip(self.parameters.as_deref());

        match &self.name {
            SymbolName::Named(part) => render_part(&mut out, part, format),
            SymbolName::Constructor { type_name } => out.push_str(type_name),
            SymbolName::Destructor { type_name } => {
                out.push('~');
                out.push_str(type_name);
            }
            SymbolName::Operator { token } => {
                out.push_str("operator ");
                out.push_str(token);
            }
            SymbolName::Conversion { direction, target } => {
                out.push_str(direction);
                out.push_str(" operator ");
                out.push_str(target);
            }
            SymbolName::Indexer => {
                out.push_str("this[");
                if let Some((style, parameters)) = parameters {
                    render_parameters(&mut out, parameters, style);
                }
                out.push(']');
                return out;
            }
        }

        if let Some((style, parameters)) = parameters {
            out.push('(');
            render_parameters(&mut out, parameters, style);
            out.push(')');
        }

        out
    }
}

fn render_part(out: &mut String, part: &NamePart, format: &DisplayFormat) {
    out.push_str(&part.name);

    if !format.type_parameters || part.type_parameters.is_empty() {
        return;
    }

    out.push('<');
    for (i, parameter) in part.type_parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if format.variance {
            if let Some(variance) = &parameter.variance {
                out.push_str(variance);
                out.push(' ');
            }
        }
        out.push_str(&parameter.name);
    }
    out.push('>');
}

fn render_parameters(out: &mut String, parameters: &[Parameter], style: ParameterStyle) {
    let rendered: Vec<String> = parameters
        .iter()
        .map(|parameter| {
            let mut words: Vec<&str> = Vec::new();
            if style.modifiers {
                words.extend(parameter.modifiers.iter().map(String::as_str));
            }
            if style.types {
                words.extend(parameter.ty.as_deref());
            }
            if style.names {
                words.extend(parameter.name.as_deref());
            }

            let mut text = words.join(" ");
            if style.default_values {
                if let Some(default_value) = &parameter.default_value {
                    text.push_str(" = ");
                    text.push_str(default_value);
                }
            }
            text
        })
        .collect();

    out.push_str(&rendered.join(", "));
}

/// Reads declaration syntax out of one document's source
pub(crate) struct Binder<'s> {
    source: &'s str,
}

impl<'s> Binder<'s> {
    pub(crate) const fn new(source: &'s str) -> Self {
        Self { source }
    }

    fn text(&self, node: Node) -> &'s str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// Whitespace-collapsed source text of a node
    fn normalized(&self, node: Node) -> String {
        self.text(node).split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Bind the symbol a declaration node introduces
    pub(crate) fn bind(&self, node: Node) -> Option<CSharpSymbol> {
        let kind = node.kind();

        if is_namespace_declaration(kind) {
            return self.bind_namespace(node);
        }

        if is_type_declaration(kind) || kind == "delegate_declaration" {
            return self.bind_type(node);
        }

        match kind {
            "method_declaration" => {
                let name = name_node(node)?;
                Some(self.member(
                    node,
                    SymbolCategory::Method(MethodKind::Ordinary),
                    SymbolName::Named(NamePart {
                        name: self.text(name).to_string(),
                        type_parameters: self.type_parameters(node),
                    }),
                    Some(self.parameters(node)),
                ))
            }
            "constructor_declaration" => {
                let name = name_node(node)?;
                let is_static = self.modifiers(node).contains(&"static");
                let category = if is_static {
                    MethodKind::StaticConstructor
                } else {
                    MethodKind::Constructor
                };
                let mut symbol = self.member(
                    node,
                    SymbolCategory::Method(category),
                    SymbolName::Constructor {
                        type_name: self.text(name).to_string(),
                    },
                    Some(self.parameters(node)),
                );
                if is_static {
                    symbol.accessibility = Accessibility::Private;
                }
                Some(symbol)
            }
            "destructor_declaration" => {
                let name = name_node(node)?;
                let mut symbol = self.member(
                    node,
                    SymbolCategory::Method(MethodKind::Destructor),
                    SymbolName::Destructor {
                        type_name: self.text(name).to_string(),
                    },
                    Some(self.parameters(node)),
                );
                symbol.accessibility = Accessibility::Protected;
                Some(symbol)
            }
            "operator_declaration" => {
                let token = operator_token(node)?;
                let mut symbol = self.member(
                    node,
                    SymbolCategory::Method(MethodKind::UserDefinedOperator),
                    SymbolName::Operator {
                        token: self.text(token).to_string(),
                    },
                    Some(self.parameters(node)),
                );
                symbol.is_static = true;
                Some(symbol)
            }
            "conversion_operator_declaration" => {
                let target = conversion_type(node)?;
                let direction = children(node)
                    .into_iter()
                    .find(|child| matches!(child.kind(), "implicit" | "explicit"))
                    .map_or("implicit", |child| child.kind());
                let mut symbol = self.member(
                    node,
                    SymbolCategory::Method(MethodKind::Conversion),
                    SymbolName::Conversion {
                        direction: direction.to_string(),
                        target: self.normalized(target),
                    },
                    Some(self.parameters(node)),
                );
                symbol.is_static = true;
                Some(symbol)
            }
            "property_declaration" | "event_declaration" => {
                let name = name_node(node)?;
                let category = if kind == "event_declaration" {
                    SymbolCategory::Event
                } else {
                    SymbolCategory::Property { indexer: false }
                };
                Some(self.member(
                    node,
                    category,
                    SymbolName::Named(NamePart::plain(self.text(name))),
                    None,
                ))
            }
            "indexer_declaration" => {
                nodes::this_keyword(node)?;
                Some(self.member(
                    node,
                    SymbolCategory::Property { indexer: true },
                    SymbolName::Indexer,
                    Some(self.parameters(node)),
                ))
            }
            "variable_declarator" => self.bind_variable(node),
            "enum_member_declaration" => {
                let name = name_node(node)?;
                let mut symbol = self.member(
                    node,
                    SymbolCategory::Field(FieldKind::EnumMember),
                    SymbolName::Named(NamePart::plain(self.text(name))),
                    None,
                );
                symbol.accessibility = Accessibility::Public;
                symbol.is_static = true;
                Some(symbol)
            }
            _ => None,
        }
    }

    fn bind_namespace(&self, node: Node) -> Option<CSharpSymbol> {
        let name = name_node(node)?;

        // `namespace A.B` declares `B` inside `A`
        let mut containers = self.containers(node);
        let mut segments: Vec<&str> = self.text(name).split('.').map(str::trim).collect();
        let last = segments.pop().unwrap_or_default();
        containers.extend(segments.into_iter().map(NamePart::plain));

        Some(CSharpSymbol {
            category: SymbolCategory::Namespace,
            accessibility: Accessibility::NotApplicable,
            is_static: false,
            containers,
            name: SymbolName::Named(NamePart::plain(last)),
            parameters: None,
        })
    }

    fn bind_type(&self, node: Node) -> Option<CSharpSymbol> {
        let name = name_node(node)?;

        let type_kind = match node.kind() {
            "class_declaration" => TypeKind::Class,
            "struct_declaration" | "record_struct_declaration" => TypeKind::Struct,
            "interface_declaration" => TypeKind::Interface,
            "enum_declaration" => TypeKind::Enum,
            "delegate_declaration" => TypeKind::Delegate,
            _ if child_of_kind(node, "struct").is_some() => TypeKind::Struct,
            _ => TypeKind::Class,
        };

        let modifiers = self.modifiers(node);
        let default_accessibility = match enclosing_type(node).map(|parent| parent.kind()) {
            Some("interface_declaration") => Accessibility::Public,
            Some(_) => Accessibility::Private,
            None => Accessibility::Internal,
        };

        Some(CSharpSymbol {
            category: SymbolCategory::NamedType(type_kind),
            accessibility: accessibility_from(&modifiers).unwrap_or(default_accessibility),
            is_static: modifiers.contains(&"static"),
            containers: self.containers(node),
            name: SymbolName::Named(NamePart {
                name: self.text(name).to_string(),
                type_parameters: self.type_parameters(node),
            }),
            parameters: None,
        })
    }

    fn bind_variable(&self, declarator: Node) -> Option<CSharpSymbol> {
        let name = name_node(declarator)?;
        let statement = declarator
            .parent()
            .filter(|parent| parent.kind() == "variable_declaration")
            .and_then(|declaration| declaration.parent())?;

        let modifiers = self.modifiers(statement);
        let is_const = modifiers.contains(&"const");
        let category = match statement.kind() {
            "event_field_declaration" => SymbolCategory::Event,
            "field_declaration" if is_const => SymbolCategory::Field(FieldKind::Constant),
            "field_declaration" => SymbolCategory::Field(FieldKind::Field),
            _ => return None,
        };

        Some(CSharpSymbol {
            category,
            accessibility: accessibility_from(&modifiers)
                .unwrap_or_else(|| default_member_accessibility(statement)),
            is_static: is_const || modifiers.contains(&"static"),
            containers: self.containers(statement),
            name: SymbolName::Named(NamePart::plain(self.text(name))),
            parameters: None,
        })
    }

    /// Symbol for a member declared directly on `node`
    fn member(
        &self,
        node: Node,
        category: SymbolCategory,
        name: SymbolName,
        parameters: Option<Vec<Parameter>>,
    ) -> CSharpSymbol {
        let modifiers = self.modifiers(node);
        let accessibility = if child_of_kind(node, "explicit_interface_specifier").is_some() {
            Accessibility::Private
        } else {
            accessibility_from(&modifiers).unwrap_or_else(|| default_member_accessibility(node))
        };

        CSharpSymbol {
            category,
            accessibility,
            is_static: modifiers.contains(&"static"),
            containers: self.containers(node),
            name,
            parameters,
        }
    }

    fn modifiers(&self, node: Node) -> Vec<&'s str> {
        children(node)
            .into_iter()
            .filter(|child| child.kind() == "modifier")
            .map(|child| self.text(child).trim())
            .collect()
    }

    fn type_parameters(&self, node: Node) -> Vec<TypeParameter> {
        let Some(list) = node
            .child_by_field_name("type_parameters")
            .or_else(|| child_of_kind(node, "type_parameter_list"))
        else {
            return Vec::new();
        };

        named_children(list)
            .into_iter()
            .filter(|child| child.kind() == "type_parameter")
            .filter_map(|parameter| {
                let name = name_node(parameter)?;
                let variance = children(parameter)
                    .into_iter()
                    .find(|child| matches!(child.kind(), "in" | "out"))
                    .map(|child| child.kind().to_string());
                Some(TypeParameter {
                    variance,
                    name: self.text(name).to_string(),
                })
            })
            .collect()
    }

    fn parameters(&self, node: Node) -> Vec<Parameter> {
        let Some(list) = node.child_by_field_name("parameters").or_else(|| {
            children(node).into_iter().find(|child| {
                matches!(child.kind(), "parameter_list" | "bracketed_parameter_list")
            })
        }) else {
            return Vec::new();
        };

        let mut parameters = Vec::new();
        let mut items = children(list).into_iter();
        while let Some(child) = items.next() {
            match child.kind() {
                "parameter" | "parameter_array" => parameters.push(self.parameter(child)),
                // `params T[] name` is not wrapped in a node of its own
                "params" => {
                    let mut rest = items.by_ref().filter(|item| item.is_named());
                    let ty = rest.next().map(|item| self.normalized(item));
                    let name = rest.next().map(|item| self.text(item).to_string());
                    parameters.push(Parameter {
                        modifiers: vec!["params".to_string()],
                        ty,
                        name,
                        default_value: None,
                    });
                }
                _ => {}
            }
        }
        parameters
    }

    fn parameter(&self, node: Node) -> Parameter {
        let name_field = node.child_by_field_name("name");
        let type_field = node.child_by_field_name("type");

        let mut parameter = Parameter {
            modifiers: Vec::new(),
            ty: None,
            name: None,
            default_value: None,
        };
        let mut after_equals = false;

        for child in children(node) {
            if Some(child) == name_field {
                parameter.name = Some(self.text(child).to_string());
                continue;
            }
            if Some(child) == type_field {
                parameter.ty = Some(self.normalized(child));
                continue;
            }

            match child.kind() {
                "attribute_list" => {}
                "=" => after_equals = true,
                "equals_value_clause" => {
                    parameter.default_value = child.named_child(0).map(|v| self.normalized(v));
                }
                "modifier" | "this" | "ref" | "out" | "in" | "params" | "scoped" | "readonly"
                    if !after_equals =>
                {
                    parameter.modifiers.push(self.text(child).trim().to_string());
                }
                _ if after_equals && child.is_named() => {
                    parameter.default_value = Some(self.normalized(child));
                }
                "identifier" if name_field.is_none() && parameter.ty.is_some() => {
                    parameter.name = Some(self.text(child).to_string());
                }
                _ if child.is_named() && type_field.is_none() && parameter.ty.is_none() => {
                    parameter.ty = Some(self.normalized(child));
                }
                _ => {}
            }
        }

        parameter
    }

    /// Enclosing namespaces and types, outermost first
    fn containers(&self, node: Node) -> Vec<NamePart> {
        let mut containers = Vec::new();
        let mut topmost = node;
        let mut current = node.parent();

        while let Some(ancestor) = current {
            let kind = ancestor.kind();
            if is_type_declaration(kind) {
                if let Some(name) = name_node(ancestor) {
                    containers.push(NamePart {
                        name: self.text(name).to_string(),
                        type_parameters: self.type_parameters(ancestor),
                    });
                }
            } else if is_namespace_declaration(kind) {
                if let Some(name) = name_node(ancestor) {
                    let segments: Vec<_> = self.text(name).split('.').map(str::trim).collect();
                    containers.extend(segments.into_iter().rev().map(NamePart::plain));
                }
            }

            if ancestor.parent().is_some() {
                topmost = ancestor;
            }
            current = ancestor.parent();
        }

        // A file-scoped namespace may precede the declaration as a sibling
        if topmost.kind() != "file_scoped_namespace_declaration" {
            let mut previous = topmost.prev_named_sibling();
            while let Some(sibling) = previous {
                if sibling.kind() == "file_scoped_namespace_declaration" {
                    if let Some(name) = name_node(sibling) {
                        let segments: Vec<_> =
                            self.text(name).split('.').map(str::trim).collect();
                        containers.extend(segments.into_iter().rev().map(NamePart::plain));
                    }
                    break;
                }
                previous = sibling.prev_named_sibling();
            }
        }

        containers.reverse();
        containers
    }
}

/// Closest enclosing type declaration, stopping at namespaces
fn enclosing_type(node: Node) -> Option<Node> {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        let kind = ancestor.kind();
        if is_type_declaration(kind) {
            return Some(ancestor);
        }
        if is_namespace_declaration(kind) {
            return None;
        }
        current = ancestor.parent();
    }
    None
}

fn default_member_accessibility(node: Node) -> Accessibility {
    match enclosing_type(node).map(|parent| parent.kind()) {
        Some("interface_declaration" | "enum_declaration") => Accessibility::Public,
        _ => Accessibility::Private,
    }
}

fn accessibility_from(modifiers: &[&str]) -> Option<Accessibility> {
    let has = |modifier: &str| modifiers.iter().any(|m| *m == modifier);

    if has("public") {
        Some(Accessibility::Public)
    } else if has("protected") && has("internal") {
        Some(Accessibility::ProtectedOrInternal)
    } else if has("private") && has("protected") {
        Some(Accessibility::ProtectedAndInternal)
    } else if has("protected") {
        Some(Accessibility::Protected)
    } else if has("internal") {
        Some(Accessibility::Internal)
    } else if has("private") {
        Some(Accessibility::Private)
    } else {
        None
    }
}
