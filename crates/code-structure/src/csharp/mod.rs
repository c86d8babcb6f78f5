//! C# analysis engine backed by tree-sitter.
//!
//! Declarations are classified straight from the concrete syntax tree and
//! bound to symbols by reading their modifiers and enclosing scopes. There is
//! no compilation: a declaration only fails to bind when the parser could not
//! recover its name.

mod nodes;
mod symbol;

pub use symbol::CSharpSymbol;

use crate::error::{Result, StructureError};
use crate::syntax::{SemanticModel, SyntaxNode, SyntaxTree};
use crate::text::LineIndex;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Parsed C# source file
pub struct CSharpDocument {
    text: LineIndex,
    tree: Tree,
}

impl CSharpDocument {
    /// Parse C# source text
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let text = LineIndex::new(source);

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .map_err(|e| StructureError::tree_sitter(format!("Failed to set language: {e}")))?;

        let tree = parser
            .parse(text.as_str(), None)
            .ok_or_else(|| StructureError::parse("Failed to parse source code"))?;

        if tree.root_node().has_error() {
            log::debug!("Source parsed with syntax errors");
        }

        Ok(Self { text, tree })
    }

    /// Read and parse a C# file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        log::trace!("Parsing {}", path.display());
        Self::parse(source)
    }

    /// Document text with line information
    #[must_use]
    pub const fn text(&self) -> &LineIndex {
        &self.text
    }

    /// Whether the parser had to recover from syntax errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

impl std::fmt::Debug for CSharpDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CSharpDocument")
            .field("lines", &self.text.line_count())
            .field("has_errors", &self.has_errors())
            .finish()
    }
}

impl SyntaxTree for CSharpDocument {
    type Node<'t> = Node<'t>;

    fn root_members(&self) -> Vec<Node<'_>> {
        nodes::root_members(self.tree.root_node())
    }

    fn classify<'t>(&'t self, node: Node<'t>) -> SyntaxNode<Node<'t>> {
        nodes::classify(node)
    }
}

impl<'t> SemanticModel<Node<'t>> for CSharpDocument {
    type Symbol = CSharpSymbol;

    fn declared_symbol(&self, node: Node<'t>) -> Option<CSharpSymbol> {
        symbol::Binder::new(self.text.as_str()).bind(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;
    use crate::element::{CodeElement, PropertyValue};
    use crate::extractor::StructureExtractor;
    use crate::kinds::{ElementKind, PropertyName, RangeName};
    use crate::position::{Point, Range};
    use pretty_assertions::assert_eq;

    fn extract(source: &str) -> Vec<CodeElement> {
        let document = CSharpDocument::parse(source).unwrap();
        StructureExtractor::default().extract(&document, &document, document.text())
    }

    fn names(elements: &[CodeElement]) -> Vec<&str> {
        elements.iter().map(CodeElement::name).collect()
    }

    fn range(start: (usize, usize), end: (usize, usize)) -> Range {
        Range::new(Point::new(start.0, start.1), Point::new(end.0, end.1))
    }

    #[test]
    fn test_namespace_class_and_fields() {
        let elements = extract("namespace N { public class C { private int x, y; } }");
        assert_eq!(elements.len(), 1);

        let namespace = &elements[0];
        assert_eq!(namespace.kind(), ElementKind::Namespace);
        assert_eq!(namespace.name(), "N");
        assert_eq!(namespace.properties(), None);
        assert_eq!(namespace.range(RangeName::Full), Some(range((0, 0), (0, 52))));
        assert_eq!(namespace.range(RangeName::Name), Some(range((0, 10), (0, 11))));
        assert_eq!(namespace.range(RangeName::Attributes), None);

        let class = &namespace.children().unwrap()[0];
        assert_eq!(class.kind(), ElementKind::Class);
        assert_eq!(class.name(), "C");
        assert_eq!(class.display_name(), "N.C");
        assert_eq!(
            class.property(PropertyName::Accessibility),
            Some(&PropertyValue::from("public"))
        );
        assert_eq!(
            class.property(PropertyName::Static),
            Some(&PropertyValue::Bool(false))
        );

        let fields = class.children().unwrap();
        assert_eq!(names(fields), vec!["x", "y"]);
        for field in fields {
            assert_eq!(field.kind(), ElementKind::Field);
            assert_eq!(field.range(RangeName::Full), Some(range((0, 31), (0, 48))));
            assert_eq!(
                field.property(PropertyName::Accessibility),
                Some(&PropertyValue::from("private"))
            );
            assert_eq!(
                field.property(PropertyName::Static),
                Some(&PropertyValue::Bool(false))
            );
        }
        assert_eq!(fields[0].range(RangeName::Name), Some(range((0, 43), (0, 44))));
        assert_eq!(fields[1].range(RangeName::Name), Some(range((0, 46), (0, 47))));
    }

    #[test]
    fn test_members_and_display_names() {
        let source = r#"
namespace Shapes.Geometry
{
    [Serializable]
    public struct Vector<T>
    {
        public const int Dimensions = 2;
        static Vector() { }
        public Vector(T x, T y) { }
        public T Length { get; }
        public T this[int index] => default;
        public static Vector<T> operator +(Vector<T> a, Vector<T> b) => a;
        public static implicit operator string(Vector<T> v) => "";
        public void Scale(ref T factor, int times = 1) { }
        public event System.EventHandler Changed;
    }
}
"#;
        let elements = extract(source);
        let namespace = &elements[0];
        assert_eq!(namespace.name(), "Geometry");
        assert_eq!(namespace.display_name(), "Shapes.Geometry");

        let vector = &namespace.children().unwrap()[0];
        assert_eq!(vector.kind(), ElementKind::Struct);
        assert_eq!(vector.name(), "Vector<T>");
        assert_eq!(vector.display_name(), "Shapes.Geometry.Vector<T>");
        assert!(vector.range(RangeName::Attributes).is_some());

        let members = vector.children().unwrap();
        let summary: Vec<(ElementKind, &str)> = members
            .iter()
            .map(|member| (member.kind(), member.display_name()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (ElementKind::Constant, "Dimensions"),
                (ElementKind::Constructor, "Vector()"),
                (ElementKind::Constructor, "Vector(T x, T y)"),
                (ElementKind::Property, "Length"),
                (ElementKind::Indexer, "this[int index]"),
                (ElementKind::Operator, "operator +(Vector<T> a, Vector<T> b)"),
                (ElementKind::Operator, "implicit operator string(Vector<T> v)"),
                (ElementKind::Method, "Scale(ref T factor, int times = 1)"),
                (ElementKind::Event, "Changed"),
            ]
        );

        // constants and operators are static, the static constructor is private
        assert_eq!(
            members[0].property(PropertyName::Static),
            Some(&PropertyValue::Bool(true))
        );
        assert_eq!(
            members[1].property(PropertyName::Accessibility),
            Some(&PropertyValue::from("private"))
        );
        assert_eq!(
            members[5].property(PropertyName::Static),
            Some(&PropertyValue::Bool(true))
        );
        assert_eq!(members[4].name(), "this[]");
    }

    #[test]
    fn test_params_array_parameter() {
        let source = r"
static class Extensions
{
    public static void M(this string s, params int[] xs) { }
    public static void Log([NotNull] string format, params object?[] args) { }
}
";
        let elements = extract(source);
        let display: Vec<&str> = elements[0]
            .children()
            .unwrap()
            .iter()
            .map(CodeElement::display_name)
            .collect();
        assert_eq!(
            display,
            vec![
                "M(this string s, params int[] xs)",
                "Log(string format, params object?[] args)",
            ]
        );
    }

    #[test]
    fn test_default_accessibility() {
        let source = r"
class Outer
{
    class Nested { }
    void Run() { }
    ~Outer() { }
}
interface IShape
{
    void Draw();
}
enum Color { Red, Green }
";
        let elements = extract(source);
        let accessibility = |element: &CodeElement| element.property(PropertyName::Accessibility).cloned();

        let outer = &elements[0];
        assert_eq!(accessibility(outer), Some(PropertyValue::from("internal")));
        let outer_members = outer.children().unwrap();
        assert_eq!(accessibility(&outer_members[0]), Some(PropertyValue::from("private")));
        assert_eq!(accessibility(&outer_members[1]), Some(PropertyValue::from("private")));
        assert_eq!(outer_members[2].kind(), ElementKind::Destructor);
        assert_eq!(outer_members[2].name(), "~Outer");
        assert_eq!(accessibility(&outer_members[2]), Some(PropertyValue::from("protected")));

        let draw = &elements[1].children().unwrap()[0];
        assert_eq!(accessibility(draw), Some(PropertyValue::from("public")));

        let color = &elements[2];
        assert_eq!(color.kind(), ElementKind::Enum);
        let red = &color.children().unwrap()[0];
        assert_eq!(red.kind(), ElementKind::EnumMember);
        assert_eq!(red.display_name(), "Red");
        assert_eq!(accessibility(red), Some(PropertyValue::from("public")));
        assert_eq!(red.property(PropertyName::Static), Some(&PropertyValue::Bool(true)));
    }

    #[test]
    fn test_file_scoped_namespace() {
        let source = "namespace App.Core;\n\npublic delegate void Handler<in T>(T value);\npublic class Service { }\n";
        let elements = extract(source);
        assert_eq!(elements.len(), 1);

        let namespace = &elements[0];
        assert_eq!(namespace.display_name(), "App.Core");

        let children = namespace.children().unwrap();
        assert_eq!(names(children), vec!["Handler<T>", "Service"]);
        assert_eq!(children[0].kind(), ElementKind::Delegate);
        assert_eq!(children[0].display_name(), "App.Core.Handler<in T>");
        assert_eq!(children[1].display_name(), "App.Core.Service");
    }

    #[test]
    fn test_names_only_config() {
        let document = CSharpDocument::parse("namespace N { class C { void M(int a) { } } }").unwrap();
        let extractor = StructureExtractor::new(ExtractorConfig::names_only());
        let elements = extractor.extract(&document, &document, document.text());

        let class = &elements[0].children().unwrap()[0];
        assert_eq!(class.display_name(), "C");
        assert_eq!(class.children().unwrap()[0].display_name(), "M");
    }

    #[test]
    fn test_unnamed_declaration_is_dropped() {
        let document = CSharpDocument::parse("class { int x; }\nclass Kept { }").unwrap();
        assert!(document.has_errors());

        let elements =
            StructureExtractor::default().extract(&document, &document, document.text());
        assert!(names(&elements).contains(&"Kept"));
        assert!(elements.iter().all(|element| !element.name().is_empty()));
    }

    #[test]
    fn test_grammar_loads() {
        let document = CSharpDocument::parse("class A { }").unwrap();
        assert!(!document.has_errors());
        assert_eq!(document.root_members().len(), 1);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract("").is_empty());
        assert!(extract("using System;\n").is_empty());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Program.cs");
        std::fs::write(&path, "class Program { static void Main() { } }").unwrap();

        let document = CSharpDocument::from_file(&path).unwrap();
        assert!(!document.has_errors());
        assert_eq!(document.root_members().len(), 1);

        let missing = CSharpDocument::from_file(dir.path().join("Missing.cs"));
        assert!(matches!(missing, Err(StructureError::IoError(_))));
    }
}
