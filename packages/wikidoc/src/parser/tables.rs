//! Tables: rows and cells, header or data.

use roxmltree::Node;
use tracing::debug;

use super::blocks::flat_text;
use super::context::ParseContext;
use super::engine::ParseEngine;
use crate::error::{ParseError, Result};
use crate::model::{Element, ElementKind};
use crate::xml::{element_children, get_tag_name, has_element_children, source_attributes};

/// Cell attributes that must hold a positive integer.
const SPAN_ATTRIBUTES: &[&str] = &["colspan", "rowspan"];

/// A row found while walking a table, with whether it is a header row.
struct RowNode<'a, 'input> {
    node: Node<'a, 'input>,
    in_head: bool,
}

/// `table`: rows from the table itself and from `thead`/`tbody`/`tfoot`,
/// in document order.
pub(super) fn table(
    engine: &ParseEngine<'_>,
    node: Node<'_, '_>,
    ctx: ParseContext,
) -> Result<Option<Element>> {
    let mut rows = Vec::new();
    let mut caption = None;

    for row in row_nodes(node, &mut caption) {
        let parsed = parse_row(engine, &row, ctx.descend());
        if let Some(element) = engine.isolate(row.node, parsed)? {
            rows.push(element);
        }
    }

    if rows.is_empty() {
        debug!("Dropping table without rows");
        return Ok(None);
    }

    let mut element = Element::container(ElementKind::Table, rows);
    if let Some(caption) = caption {
        element = element.with_attribute("caption", caption);
    }
    Ok(Some(element.with_source_attributes(source_attributes(node))))
}

fn row_nodes<'a, 'input>(
    table: Node<'a, 'input>,
    caption: &mut Option<String>,
) -> Vec<RowNode<'a, 'input>> {
    let mut rows = Vec::new();

    for child in element_children(table) {
        match get_tag_name(child) {
            "tr" => rows.push(RowNode {
                node: child,
                in_head: false,
            }),
            section @ ("thead" | "tbody" | "tfoot") => {
                rows.extend(
                    element_children(child)
                        .filter(|row| get_tag_name(*row) == "tr")
                        .map(|row| RowNode {
                            node: row,
                            in_head: section == "thead",
                        }),
                );
            }
            "caption" => {
                let text = flat_text(child);
                if !text.is_empty() {
                    *caption = Some(text);
                }
            }
            other => debug!(tag = other, "Ignoring table child"),
        }
    }

    rows
}

/// A row is a header row if it sits in `thead` or all of its cells are `th`.
fn parse_row(
    engine: &ParseEngine<'_>,
    row: &RowNode<'_, '_>,
    ctx: ParseContext,
) -> Result<Option<Element>> {
    let cell_nodes: Vec<_> = element_children(row.node)
        .filter(|cell| matches!(get_tag_name(*cell), "td" | "th"))
        .collect();
    if cell_nodes.is_empty() {
        return Ok(None);
    }

    let is_header = row.in_head || cell_nodes.iter().all(|cell| get_tag_name(*cell) == "th");

    let mut cells = Vec::with_capacity(cell_nodes.len());
    for cell in cell_nodes {
        let parsed = parse_cell(engine, cell, ctx.descend()).map(Some);
        if let Some(element) = engine.isolate(cell, parsed)? {
            cells.push(element);
        }
    }

    let mut element = Element::container(ElementKind::TableRow, cells);
    if is_header {
        element = element.with_attribute("isHeader", "true");
    }
    Ok(Some(element.with_source_attributes(source_attributes(row.node))))
}

/// `td`/`th`. Cells are never dropped, so column positions survive.
fn parse_cell(engine: &ParseEngine<'_>, node: Node<'_, '_>, ctx: ParseContext) -> Result<Element> {
    let tag = get_tag_name(node);
    for attribute in SPAN_ATTRIBUTES {
        if let Some(value) = node.attribute(*attribute) {
            validate_span(tag, attribute, value)?;
        }
    }

    let children = if has_element_children(node) {
        engine.parse_children(node, ctx.block())?
    } else {
        Vec::new()
    };

    let element = if children.is_empty() {
        Element::leaf(ElementKind::TableCell, flat_text(node))
    } else {
        Element::container(ElementKind::TableCell, children)
    };

    let cell_type = if tag == "th" { "header" } else { "data" };
    Ok(element
        .with_attribute("cellType", cell_type)
        .with_source_attributes(source_attributes(node)))
}

fn validate_span(tag: &str, attribute: &str, value: &str) -> Result<()> {
    match value.trim().parse::<u32>() {
        Ok(span) if span > 0 => Ok(()),
        _ => Err(ParseError::InvalidAttribute {
            tag: tag.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }),
    }
}
