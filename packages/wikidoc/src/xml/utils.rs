//! XML utility functions for navigating storage-format node trees.

use roxmltree::Node;

use crate::config::{AC_NAMESPACE, RI_NAMESPACE};
use crate::model::Attributes;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wikidoc::xml::get_tag_name;
///
/// let xml = r#"<root><p>text</p></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let p = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(p), "p");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Map a namespace URI back to the prefix storage format writes.
fn prefix_for(namespace: Option<&str>) -> Option<&'static str> {
    match namespace {
        Some(AC_NAMESPACE) => Some("ac"),
        Some(RI_NAMESPACE) => Some("ri"),
        _ => None,
    }
}

/// Get the tag name as written in storage format (e.g. `ac:link`, `p`).
pub fn qualified_name(node: Node<'_, '_>) -> String {
    let name = get_tag_name(node);
    match prefix_for(node.tag_name().namespace()) {
        Some(prefix) => format!("{prefix}:{name}"),
        None => name.to_string(),
    }
}

/// Check if a node is the `ac:` element with the given local name.
pub fn is_ac_element(node: Node<'_, '_>, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(AC_NAMESPACE)
        && get_tag_name(node) == local_name
}

/// Get an `ac:`-prefixed attribute value.
pub fn ac_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute((AC_NAMESPACE, name))
}

/// Get an `ri:`-prefixed attribute value.
pub fn ri_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute((RI_NAMESPACE, name))
}

/// Find the first `ac:` child element with the given local name.
pub fn find_ac_child<'a, 'input>(
    node: Node<'a, 'input>,
    local_name: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_ac_element(*child, local_name))
}

/// Find the first `ri:` child element (a resource identifier).
pub fn find_ri_child<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().namespace() == Some(RI_NAMESPACE))
}

/// Get all element children of a node.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Check if a node has at least one element child.
pub fn has_element_children(node: Node<'_, '_>) -> bool {
    element_children(node).next().is_some()
}

/// Concatenate all descendant text of a node in document order.
///
/// Walks descendants iteratively, so arbitrarily deep markup cannot
/// overflow the stack here.
pub fn collect_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Collapse every run of whitespace into a single space.
///
/// Leading and trailing whitespace is collapsed but kept, so inline text
/// runs still join with a space.
///
/// # Examples
/// ```
/// use wikidoc::xml::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a \n\t b "), " a b ");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.chars() {
        if c.is_whitespace() && c != '\u{a0}' {
            if !in_space {
                result.push(' ');
                in_space = true;
            }
        } else {
            result.push(c);
            in_space = false;
        }
    }

    result
}

/// Copy a node's attributes, keyed the way storage format writes them.
pub fn source_attributes(node: Node<'_, '_>) -> Attributes {
    node.attributes()
        .map(|attr| {
            let key = match prefix_for(attr.namespace()) {
                Some(prefix) => format!("{prefix}:{}", attr.name()),
                None => attr.name().to_string(),
            };
            (key, attr.value().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{tokenize, wrap_markup};
    use roxmltree::Document;

    fn parse(wrapped: &str) -> Document<'_> {
        tokenize(wrapped).unwrap()
    }

    #[test]
    fn test_qualified_name() {
        let wrapped = wrap_markup(r#"<p/><ac:link/><ri:page/>"#);
        let doc = parse(&wrapped);
        let names: Vec<_> = element_children(doc.root_element())
            .map(qualified_name)
            .collect();
        assert_eq!(names, vec!["p", "ac:link", "ri:page"]);
    }

    #[test]
    fn test_ac_and_ri_attributes() {
        let wrapped =
            wrap_markup(r#"<ac:link ac:anchor="top"><ri:page ri:content-title="Home"/></ac:link>"#);
        let doc = parse(&wrapped);
        let link = doc.root_element().first_element_child().unwrap();

        assert_eq!(ac_attribute(link, "anchor"), Some("top"));
        let page = find_ri_child(link).unwrap();
        assert_eq!(ri_attribute(page, "content-title"), Some("Home"));
    }

    #[test]
    fn test_find_ac_child() {
        let wrapped = wrap_markup(
            r#"<ac:structured-macro ac:name="code"><ac:plain-text-body>x</ac:plain-text-body></ac:structured-macro>"#,
        );
        let doc = parse(&wrapped);
        let node = doc.root_element().first_element_child().unwrap();

        assert!(find_ac_child(node, "plain-text-body").is_some());
        assert!(find_ac_child(node, "rich-text-body").is_none());
    }

    #[test]
    fn test_collect_text() {
        let doc = Document::parse("<p>Hello <b>big <i>wide</i></b> world</p>").unwrap();
        assert_eq!(collect_text(doc.root_element()), "Hello big wide world");
    }

    #[test]
    fn test_has_element_children() {
        let doc = Document::parse("<root><a>text</a><b><c/></b></root>").unwrap();
        let root = doc.root_element();
        let a = root.first_element_child().unwrap();

        assert!(has_element_children(root));
        assert!(!has_element_children(a));
    }

    #[test]
    fn test_normalize_whitespace_keeps_nbsp() {
        assert_eq!(normalize_whitespace("a\u{a0} b"), "a\u{a0} b");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_source_attributes_prefixes_namespaced_keys() {
        let wrapped = wrap_markup(r#"<ac:image ac:width="200" class="x"/>"#);
        let doc = parse(&wrapped);
        let image = doc.root_element().first_element_child().unwrap();

        let attrs = source_attributes(image);
        assert_eq!(attrs.get("ac:width").map(String::as_str), Some("200"));
        assert_eq!(attrs.get("class").map(String::as_str), Some("x"));
    }
}
