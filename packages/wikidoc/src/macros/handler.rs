//! Macro handler trait and the macro node view handlers work on.

use roxmltree::Node;

use super::types::MacroInfo;
use crate::error::{ParseError, Result};
use crate::model::{Attributes, Content, Element, ElementKind};
use crate::xml::{
    ac_attribute, collect_text, element_children, find_ac_child, is_ac_element, source_attributes,
};

/// Function type for parsing the children of a macro body node.
pub type RecurseFn<'a, 'input> = dyn Fn(Node<'a, 'input>) -> Result<Vec<Element>> + 'a;

/// A macro tag, with its name, parameters and body pulled out.
#[derive(Debug, Clone)]
pub struct MacroNode<'a, 'input> {
    /// Macro name from `ac:name`.
    pub name: String,

    /// Parameters from `ac:parameter` children, sorted by name. A repeated
    /// name keeps its last value.
    ///
    /// An `ac:default-parameter` is stored under the empty key.
    pub params: Attributes,

    /// Attributes of the macro tag itself (`ac:schema-version`, ...).
    pub source_attributes: Attributes,

    /// `ac:rich-text-body`, if present.
    pub rich_body: Option<Node<'a, 'input>>,

    /// Text of `ac:plain-text-body`, if present, unnormalized.
    pub plain_body: Option<String>,
}

impl<'a, 'input> MacroNode<'a, 'input> {
    /// Read a macro tag.
    ///
    /// # Errors
    /// Returns `ParseError::MissingMacroName` if the tag has no `ac:name`.
    pub fn from_node(node: Node<'a, 'input>) -> Result<Self> {
        let name = ac_attribute(node, "name")
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ParseError::MissingMacroName)?
            .to_string();

        let mut params = Attributes::new();
        for child in element_children(node) {
            if is_ac_element(child, "parameter") {
                let key = ac_attribute(child, "name").unwrap_or_default();
                params.insert(key.to_string(), parameter_value(child));
            } else if is_ac_element(child, "default-parameter") {
                params.insert(String::new(), parameter_value(child));
            }
        }

        Ok(Self {
            name,
            params,
            source_attributes: source_attributes(node),
            rich_body: find_ac_child(node, "rich-text-body"),
            plain_body: find_ac_child(node, "plain-text-body").map(collect_text),
        })
    }

    /// Get a non-blank parameter value, trimmed.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Get a parameter as an owned string.
    #[must_use]
    pub fn param_string(&self, key: &str) -> Option<String> {
        self.param(key).map(str::to_string)
    }

    /// Interpret a parameter as a boolean flag.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.param(key)
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

/// Value of an `ac:parameter`.
///
/// Parameters usually hold text; some hold a resource identifier
/// (`<ri:user ri:userkey="..."/>`), whose first attribute is used instead.
fn parameter_value(node: Node<'_, '_>) -> String {
    let text = collect_text(node).trim().to_string();
    if !text.is_empty() {
        return text;
    }
    element_children(node)
        .next()
        .and_then(|child| child.attributes().next())
        .map(|attr| attr.value().to_string())
        .unwrap_or_default()
}

/// Trait for macro handlers.
///
/// The registry asks each handler in registration order whether it
/// matches a macro name; the first match handles the macro.
pub trait MacroHandler: Send + Sync {
    /// Name of the handler, normally the macro name it handles.
    fn name(&self) -> &str;

    /// Check if this handler processes macros of the given name.
    fn matches(&self, macro_name: &str) -> bool {
        macro_name.eq_ignore_ascii_case(self.name())
    }

    /// Convert the macro into an element.
    ///
    /// # Arguments
    /// * `node` - The macro to process
    /// * `recurse` - Function parsing the children of a body node
    fn handle<'a, 'input>(
        &self,
        node: &MacroNode<'a, 'input>,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<Element>;
}

/// Parse a macro body: the rich-text body's children, or the plain-text body.
pub fn body_content<'a, 'input>(
    node: &MacroNode<'a, 'input>,
    recurse: &RecurseFn<'a, 'input>,
) -> Result<Content> {
    match node.rich_body {
        Some(body) => Ok(Content::Children(recurse(body)?)),
        None => Ok(Content::Text(node.plain_body.clone().unwrap_or_default())),
    }
}

/// Assemble the element for a handled macro.
///
/// Attribute precedence: `name`, then attributes derived from `info`,
/// then raw parameters, then the macro tag's own attributes.
#[must_use]
pub fn build_macro_element(
    kind: ElementKind,
    content: Content,
    node: &MacroNode<'_, '_>,
    info: MacroInfo,
) -> Element {
    let mut element = match content {
        Content::Text(text) => Element::leaf(kind, text),
        Content::Children(children) => Element::container(kind, children),
    }
    .with_attribute("name", node.name.clone());

    for (key, value) in info.derived_attributes() {
        if !element.attributes().contains_key(key) {
            element = element.with_attribute(key, value);
        }
    }

    element
        .with_source_attributes(node.params.clone())
        .with_source_attributes(node.source_attributes.clone())
        .with_macro_info(info)
}
