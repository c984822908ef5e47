//! Markup tree parser.
//!
//! Walks storage-format markup depth-first and produces the ordered
//! element tree of a [`Document`]. Macro tags are handed to a
//! [`MacroRegistry`]; everything else is dispatched on its tag class.
//!
//! # Example
//!
//! ```
//! use wikidoc::parser::Parser;
//!
//! let parser = Parser::new();
//! let doc = parser.parse("<h1>Intro</h1><p>Hello</p>", "Page").unwrap();
//! assert_eq!(doc.headings().len(), 1);
//! assert_eq!(doc.paragraphs()[0].text(), Some("Hello"));
//! ```

mod blocks;
mod context;
mod engine;
mod inline;
mod lists;
mod tables;
mod tags;

use roxmltree::Node;
use tracing::{debug, warn};

pub use context::{Mode, ParseContext};
pub use engine::ParseEngine;
pub use tags::TagClass;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::{create_macro_registry, MacroRegistry};
use crate::model::Document;
use crate::xml::{
    check_nesting, element_children, get_tag_name, strip_prolog, tokenize, wrap_markup,
};

/// Parser for storage-format markup.
pub struct Parser {
    registry: MacroRegistry,
    options: ParseOptions,
}

impl Parser {
    /// Create a parser with the default macro registry and options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: create_macro_registry(),
            options: ParseOptions::default(),
        }
    }

    /// Use a custom macro registry.
    #[must_use]
    pub fn with_registry(mut self, registry: MacroRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Use custom parse options.
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Get a reference to the macro registry.
    #[must_use]
    pub fn registry(&self) -> &MacroRegistry {
        &self.registry
    }

    /// Parse markup into a document.
    ///
    /// # Arguments
    /// * `markup` - Storage-format markup, a fragment or a full `<html>` page
    /// * `title` - Document title
    ///
    /// # Returns
    /// The parsed document. Blank markup, or an `<html>` page without a
    /// `<body>`, yields an empty document.
    ///
    /// # Errors
    /// Returns `Tokenize` if the markup is not well-formed and
    /// `DepthExceeded` if it nests deeper than the configured limit. Tag
    /// nesting is checked before tokenizing, so an `<html>` page spends
    /// two levels of the limit on its `<html>` and `<body>` tags.
    pub fn parse(&self, markup: &str, title: impl Into<String>) -> Result<Document> {
        let title = title.into();
        let markup = strip_prolog(markup);

        if markup.trim().is_empty() {
            warn!(title = %title, "Markup is empty, returning empty document");
            return Ok(Document::new(title, Vec::new()));
        }

        check_nesting(markup, self.options.max_depth)?;
        let wrapped = wrap_markup(markup);
        let tree = tokenize(&wrapped)?;

        let Some(content_root) = content_root(tree.root_element()) else {
            warn!(title = %title, "Markup has no body, returning empty document");
            return Ok(Document::new(title, Vec::new()));
        };

        let engine = ParseEngine::new(&self.registry, self.options);
        let elements = engine.parse_children(content_root, ParseContext::root())?;

        debug!(title = %title, elements = elements.len(), "Parsed document");
        Ok(Document::new(title, elements))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse markup with the default parser.
///
/// # Errors
/// See [`Parser::parse`].
pub fn parse(markup: &str, title: impl Into<String>) -> Result<Document> {
    Parser::new().parse(markup, title)
}

/// The node whose children are the page content.
///
/// For a full `<html>` page this is `<body>`; `None` if it has none.
fn content_root<'a, 'input>(root: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    let mut children = element_children(root);
    let (Some(only), None) = (children.next(), children.next()) else {
        return Some(root);
    };

    let is_page = get_tag_name(only).eq_ignore_ascii_case("html")
        && root
            .children()
            .filter(|child| child.is_text())
            .all(|child| child.text().unwrap_or_default().trim().is_empty());
    if !is_page {
        return Some(root);
    }

    element_children(only).find(|child| get_tag_name(*child).eq_ignore_ascii_case("body"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseOptions;
    use crate::error::ParseError;
    use crate::macros::{MacroHandler, MacroNode, RecurseFn};
    use crate::model::{Element, ElementKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fragment() {
        let doc = parse("<h1>Intro</h1><p>Hello</p>", "Page").unwrap();
        assert_eq!(doc.title(), "Page");
        assert_eq!(
            doc.elements(),
            &[
                Element::heading(1, "Intro"),
                Element::leaf(ElementKind::Paragraph, "Hello"),
            ]
        );
    }

    #[test]
    fn test_parse_blank_markup() {
        let doc = parse("  \n ", "Empty").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.title(), "Empty");
    }

    #[test]
    fn test_parse_html_page() {
        let doc = parse(
            "<?xml version=\"1.0\"?>\n<html><head><title>x</title></head><body><p>In body</p></body></html>",
            "Page",
        )
        .unwrap();
        assert_eq!(doc.elements().len(), 1);
        assert_eq!(doc.elements()[0].text(), Some("In body"));
    }

    #[test]
    fn test_parse_html_without_body() {
        let doc = parse("<html><head><title>x</title></head></html>", "Page").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_untokenizable_markup() {
        let result = parse("<p>unterminated", "Broken");
        assert!(matches!(result, Err(ParseError::Tokenize(_))));
    }

    #[test]
    fn test_parse_depth_limit() {
        let markup = format!("{}deep{}", "<ul><li>".repeat(20), "</li></ul>".repeat(20));
        let parser = Parser::new().with_options(ParseOptions::default().with_max_depth(8));
        let result = parser.parse(&markup, "Deep");
        assert!(matches!(result, Err(ParseError::DepthExceeded { limit: 8 })));
    }

    #[test]
    fn test_parse_nesting_below_limit() {
        let markup = format!("{}<h2>Deep</h2>{}", "<div>".repeat(50), "</div>".repeat(50));
        let doc = parse(&markup, "Deep").unwrap();
        assert_eq!(doc.headings().len(), 1);
        assert_eq!(doc.sections()[0].title, "Deep");
    }

    #[test]
    fn test_parse_rejects_runaway_nesting_before_tokenizing() {
        let markup = "<div>".repeat(10_000);
        let result = parse(&markup, "Runaway");
        assert!(matches!(
            result,
            Err(ParseError::DepthExceeded { limit }) if limit == crate::config::DEFAULT_MAX_DEPTH
        ));
    }

    struct ShoutHandler;

    impl MacroHandler for ShoutHandler {
        fn name(&self) -> &str {
            "info"
        }

        fn handle<'a, 'input>(
            &self,
            node: &MacroNode<'a, 'input>,
            _recurse: &RecurseFn<'a, 'input>,
        ) -> Result<Element> {
            Ok(Element::leaf(ElementKind::Macro, node.name.to_uppercase()))
        }
    }

    #[test]
    fn test_parse_with_custom_registry() {
        let mut registry = MacroRegistry::new();
        registry.register(ShoutHandler);
        let parser = Parser::new().with_registry(registry);
        assert_eq!(parser.registry().handler_names(), vec!["info"]);

        let doc = parser
            .parse(r#"<ac:structured-macro ac:name="info"/>"#, "Page")
            .unwrap();
        assert_eq!(doc.macros()[0].text(), Some("INFO"));
    }
}
