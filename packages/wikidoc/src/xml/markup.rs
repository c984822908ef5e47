//! Wrapping raw storage-format markup into a well-formed XML document.

use roxmltree::{Document, ParsingOptions};

use crate::config::{AC_NAMESPACE, RI_NAMESPACE};
use crate::error::{ParseError, Result};

/// Tag name of the synthetic root element the markup is wrapped in.
pub const ROOT_TAG: &str = "wikidoc-root";

/// HTML named entities that storage format uses but XML does not predefine.
const HTML_ENTITIES: &[(&str, u32)] = &[
    ("nbsp", 160),
    ("iexcl", 161),
    ("cent", 162),
    ("pound", 163),
    ("yen", 165),
    ("sect", 167),
    ("copy", 169),
    ("laquo", 171),
    ("reg", 174),
    ("deg", 176),
    ("plusmn", 177),
    ("para", 182),
    ("middot", 183),
    ("raquo", 187),
    ("frac12", 189),
    ("times", 215),
    ("divide", 247),
    ("ndash", 8211),
    ("mdash", 8212),
    ("lsquo", 8216),
    ("rsquo", 8217),
    ("sbquo", 8218),
    ("ldquo", 8220),
    ("rdquo", 8221),
    ("bdquo", 8222),
    ("dagger", 8224),
    ("bull", 8226),
    ("hellip", 8230),
    ("prime", 8242),
    ("euro", 8364),
    ("trade", 8482),
    ("larr", 8592),
    ("uarr", 8593),
    ("rarr", 8594),
    ("darr", 8595),
    ("harr", 8596),
    ("rArr", 8658),
    ("hArr", 8660),
    ("minus", 8722),
    ("le", 8804),
    ("ge", 8805),
    ("ne", 8800),
    ("zwj", 8205),
    ("zwnj", 8204),
    ("shy", 173),
];

/// Wrap markup in a root element that binds the `ac:` and `ri:` prefixes.
///
/// The prefix is written on a single line so row numbers in tokenizer
/// errors still match the caller's markup.
///
/// # Examples
/// ```
/// use wikidoc::xml::wrap_markup;
///
/// let wrapped = wrap_markup("<p>a&nbsp;b</p>");
/// let doc = wikidoc::xml::tokenize(&wrapped).unwrap();
/// assert_eq!(doc.root_element().first_element_child().unwrap().text(), Some("a\u{a0}b"));
/// ```
#[must_use]
pub fn wrap_markup(markup: &str) -> String {
    let mut wrapped = String::with_capacity(markup.len() + 2048);

    wrapped.push_str("<!DOCTYPE ");
    wrapped.push_str(ROOT_TAG);
    wrapped.push_str(" [");
    for (name, code_point) in HTML_ENTITIES {
        wrapped.push_str(&format!("<!ENTITY {name} \"&#{code_point};\">"));
    }
    wrapped.push_str("]>");

    wrapped.push_str(&format!(
        "<{ROOT_TAG} xmlns:ac=\"{AC_NAMESPACE}\" xmlns:ri=\"{RI_NAMESPACE}\">"
    ));
    wrapped.push_str(markup);
    wrapped.push_str(&format!("</{ROOT_TAG}>"));

    wrapped
}

/// Strip a leading XML declaration and doctype from page markup.
///
/// Exported pages sometimes carry them; inside the wrapping root they
/// would not tokenize.
///
/// # Examples
/// ```
/// use wikidoc::xml::strip_prolog;
///
/// assert_eq!(strip_prolog("<?xml version=\"1.0\"?>\n<!DOCTYPE html><p/>"), "<p/>");
/// ```
#[must_use]
pub fn strip_prolog(markup: &str) -> &str {
    let mut rest = markup.trim_start();
    loop {
        let prolog_end = if rest.starts_with("<?xml") {
            rest.find("?>").map(|end| end + 2)
        } else if rest
            .get(..9)
            .is_some_and(|head| head.eq_ignore_ascii_case("<!DOCTYPE"))
        {
            rest.find('>').map(|end| end + 1)
        } else {
            None
        };
        match prolog_end {
            Some(end) => rest = rest[end..].trim_start(),
            None => return rest,
        }
    }
}

/// Reject markup whose elements nest deeper than `limit`.
///
/// Runs over raw tags without building a tree, so pathological nesting
/// fails here instead of inside the recursive tokenizer and walker.
/// Comments, CDATA sections, processing instructions and declarations
/// are skipped; `>` inside quoted attribute values does not end a tag.
///
/// # Errors
/// Returns `ParseError::DepthExceeded` once an open tag goes past `limit`.
///
/// # Examples
/// ```
/// use wikidoc::xml::check_nesting;
///
/// assert!(check_nesting("<div><p>a<br/></p></div>", 2).is_ok());
/// assert!(check_nesting("<div><p>a</p></div>", 1).is_err());
/// ```
pub fn check_nesting(markup: &str, limit: usize) -> Result<()> {
    let bytes = markup.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'<') {
        let start = pos + offset;
        let rest = &markup[start..];

        pos = if rest.starts_with("<!--") {
            skip_past(markup, start, "-->")
        } else if rest.starts_with("<![CDATA[") {
            skip_past(markup, start, "]]>")
        } else if rest.starts_with("<?") {
            skip_past(markup, start, "?>")
        } else if rest.starts_with("<!") {
            skip_past(markup, start, ">")
        } else if rest.starts_with("</") {
            depth = depth.saturating_sub(1);
            tag_end(bytes, start + 2)
        } else {
            let end = tag_end(bytes, start + 1);
            if !bytes[..end].ends_with(b"/>") {
                depth += 1;
                if depth > limit {
                    return Err(ParseError::DepthExceeded { limit });
                }
            }
            end
        };
    }

    Ok(())
}

/// Position just after the next `pattern` at or after `start`.
fn skip_past(markup: &str, start: usize, pattern: &str) -> usize {
    markup[start..]
        .find(pattern)
        .map_or(markup.len(), |found| start + found + pattern.len())
}

/// Position just after the `>` closing the tag whose body starts at `from`.
fn tag_end(bytes: &[u8], from: usize) -> usize {
    let mut quote = None;
    for (index, &byte) in bytes.iter().enumerate().skip(from) {
        match (quote, byte) {
            (None, b'"' | b'\'') => quote = Some(byte),
            (Some(open), _) if open == byte => quote = None,
            (None, b'>') => return index + 1,
            _ => {}
        }
    }
    bytes.len()
}

/// Tokenize markup produced by [`wrap_markup`].
///
/// # Errors
/// Returns `ParseError::Tokenize` if the markup is not well-formed.
pub fn tokenize(wrapped: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(wrapped, options)?)
}
