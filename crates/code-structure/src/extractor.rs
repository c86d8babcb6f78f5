use crate::config::{DisplayFormat, ExtractorConfig};
use crate::element::{CodeElement, CodeElementBuilder};
use crate::kinds::{ElementKind, PropertyName, RangeName};
use crate::syntax::{
    ContainerSyntax, DeclarationSyntax, DeclaredSymbol, FieldSyntax, MethodForm, MethodSyntax,
    PropertyForm, PropertySyntax, SemanticModel, SyntaxNode, SyntaxTree,
};
use crate::text::{SourceText, TextSpan};

/// Reduces a document's declarations into a tree of [`CodeElement`]s
#[derive(Debug, Clone, Default)]
pub struct StructureExtractor {
    config: ExtractorConfig,
}

impl StructureExtractor {
    #[must_use]
    pub const fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build the element trees for one document, in declaration order.
    ///
    /// Declarations whose symbol cannot be resolved are dropped along with
    /// their members; the rest of the document is still extracted.
    pub fn extract<'t, T, M, X>(&self, tree: &'t T, model: &M, text: &X) -> Vec<CodeElement>
    where
        T: SyntaxTree + 't,
        M: SemanticModel<T::Node<'t>>,
        X: SourceText + ?Sized,
    {
        let walk = Walk {
            config: &self.config,
            tree,
            model,
            text,
        };

        let mut elements = Vec::new();
        for node in tree.root_members() {
            walk.create_elements(node, &mut elements);
        }

        log::debug!(
            "Extracted {} top-level elements ({} total)",
            elements.len(),
            elements.iter().map(CodeElement::total_count).sum::<usize>()
        );

        elements
    }
}

/// State shared by one recursive walk over a document
struct Walk<'a, 't, T, M, X: ?Sized>
where
    T: SyntaxTree + 't,
{
    config: &'a ExtractorConfig,
    tree: &'t T,
    model: &'a M,
    text: &'a X,
}

impl<'a, 't, T, M, X> Walk<'a, 't, T, M, X>
where
    T: SyntaxTree + 't,
    M: SemanticModel<T::Node<'t>>,
    X: SourceText + ?Sized,
{
    fn create_elements(&self, node: T::Node<'t>, out: &mut Vec<CodeElement>) {
        match self.tree.classify(node) {
            SyntaxNode::Type(syntax) | SyntaxNode::Enum(syntax) => {
                out.extend(self.type_element(syntax));
            }
            SyntaxNode::Delegate(syntax) => out.extend(self.delegate_element(syntax)),
            SyntaxNode::Namespace(syntax) => out.extend(self.namespace_element(syntax)),
            SyntaxNode::Method(syntax) => out.extend(self.method_element(syntax)),
            SyntaxNode::Property(syntax) => out.extend(self.property_element(syntax)),
            SyntaxNode::Field(syntax) => self.field_elements(syntax, out),
            SyntaxNode::EnumMember(syntax) => out.extend(self.enum_member_element(syntax)),
            SyntaxNode::Other => {}
        }
    }

    fn type_element(&self, syntax: ContainerSyntax<T::Node<'t>>) -> Option<CodeElement> {
        let declaration = syntax.declaration;
        let symbol = self.resolve(declaration.node)?;

        let mut builder = self.type_builder(&symbol);
        self.add_ranges(
            &mut builder,
            declaration.attributes,
            Some(declaration.span),
            declaration.identifier,
        );
        add_symbol_properties(&mut builder, &symbol);
        self.add_members(&mut builder, syntax.members);

        Some(builder.build())
    }

    fn delegate_element(&self, syntax: DeclarationSyntax<T::Node<'t>>) -> Option<CodeElement> {
        let symbol = self.resolve(syntax.node)?;

        let mut builder = self.type_builder(&symbol);
        self.add_ranges(
            &mut builder,
            syntax.attributes,
            Some(syntax.span),
            syntax.identifier,
        );
        add_symbol_properties(&mut builder, &symbol);

        Some(builder.build())
    }

    fn namespace_element(&self, syntax: ContainerSyntax<T::Node<'t>>) -> Option<CodeElement> {
        let declaration = syntax.declaration;
        let symbol = self.resolve(declaration.node)?;

        // Namespaces carry neither attributes nor accessibility/static
        let mut builder = self.type_builder(&symbol);
        self.add_ranges(
            &mut builder,
            None,
            Some(declaration.span),
            declaration.identifier,
        );
        self.add_members(&mut builder, syntax.members);

        Some(builder.build())
    }

    fn method_element(&self, syntax: MethodSyntax<T::Node<'t>>) -> Option<CodeElement> {
        let symbol = self.resolve(syntax.node)?;

        let mut builder = self.member_builder(&symbol);
        self.add_ranges(
            &mut builder,
            syntax.attributes,
            Some(syntax.span),
            method_name_span(syntax.form),
        );
        add_symbol_properties(&mut builder, &symbol);

        Some(builder.build())
    }

    fn property_element(&self, syntax: PropertySyntax<T::Node<'t>>) -> Option<CodeElement> {
        let symbol = self.resolve(syntax.node)?;

        let mut builder = self.member_builder(&symbol);
        self.add_ranges(
            &mut builder,
            syntax.attributes,
            Some(syntax.span),
            property_name_span(syntax.form),
        );
        add_symbol_properties(&mut builder, &symbol);

        Some(builder.build())
    }

    /// One sibling element per declarator; all share the statement's spans
    fn field_elements(&self, syntax: FieldSyntax<T::Node<'t>>, out: &mut Vec<CodeElement>) {
        for variable in syntax.variables {
            let Some(symbol) = self.resolve(variable.node) else {
                continue;
            };

            let mut builder = self.member_builder(&symbol);
            self.add_ranges(
                &mut builder,
                syntax.attributes,
                Some(syntax.span),
                variable.identifier,
            );
            add_symbol_properties(&mut builder, &symbol);

            out.push(builder.build());
        }
    }

    fn enum_member_element(&self, syntax: DeclarationSyntax<T::Node<'t>>) -> Option<CodeElement> {
        let symbol = self.resolve(syntax.node)?;

        let mut builder = self.member_builder(&symbol);
        self.add_ranges(
            &mut builder,
            syntax.attributes,
            Some(syntax.span),
            syntax.identifier,
        );
        add_symbol_properties(&mut builder, &symbol);

        Some(builder.build())
    }

    fn resolve(&self, node: T::Node<'t>) -> Option<M::Symbol> {
        let symbol = self.model.declared_symbol(node);
        if symbol.is_none() {
            log::debug!("Skipping declaration without a bound symbol");
        }
        symbol
    }

    fn add_members(&self, builder: &mut CodeElementBuilder, members: Vec<T::Node<'t>>) {
        let mut children = Vec::new();
        for member in members {
            self.create_elements(member, &mut children);
        }
        for child in children {
            builder.add_child(child);
        }
    }

    fn type_builder(&self, symbol: &M::Symbol) -> CodeElementBuilder {
        named_builder(
            symbol,
            &self.config.short_type_format,
            &self.config.type_format,
        )
    }

    fn member_builder(&self, symbol: &M::Symbol) -> CodeElementBuilder {
        named_builder(
            symbol,
            &self.config.short_member_format,
            &self.config.member_format,
        )
    }

    fn add_ranges(
        &self,
        builder: &mut CodeElementBuilder,
        attributes: Option<TextSpan>,
        full: Option<TextSpan>,
        name: Option<TextSpan>,
    ) {
        let spans = [
            (RangeName::Attributes, attributes),
            (RangeName::Full, full),
            (RangeName::Name, name),
        ];

        for (range_name, span) in spans {
            if let Some(span) = span.filter(|span| !span.is_empty()) {
                builder.add_range(range_name, self.text.range_from_span(span));
            }
        }
    }
}

fn named_builder<S: DeclaredSymbol>(
    symbol: &S,
    short_format: &DisplayFormat,
    full_format: &DisplayFormat,
) -> CodeElementBuilder {
    let mut builder = CodeElement::builder();
    builder
        .set_kind(ElementKind::from_category(symbol.category()))
        .set_name(symbol.to_display_string(short_format))
        .set_display_name(symbol.to_display_string(full_format));
    builder
}

fn add_symbol_properties<S: DeclaredSymbol>(builder: &mut CodeElementBuilder, symbol: &S) {
    if let Some(accessibility) = symbol.declared_accessibility().tag() {
        builder.add_property(PropertyName::Accessibility, accessibility);
    }

    builder.add_property(PropertyName::Static, symbol.is_static());
}

const fn method_name_span(form: MethodForm) -> Option<TextSpan> {
    match form {
        MethodForm::Method { identifier }
        | MethodForm::Constructor { identifier }
        | MethodForm::Destructor { identifier } => identifier,
        MethodForm::Operator { operator_token } => operator_token,
        MethodForm::ConversionOperator { target_type } => target_type,
    }
}

const fn property_name_span(form: PropertyForm) -> Option<TextSpan> {
    match form {
        PropertyForm::Property { identifier } | PropertyForm::Event { identifier } => identifier,
        PropertyForm::Indexer { this_keyword } => this_keyword,
    }
}
