//! Filtering elements by kind.

use super::scope::Scope;
use crate::model::{Element, ElementKind};

/// All elements of the given kinds, in document order.
///
/// Descends into every container whether or not it matched, so nested
/// matches are found too.
///
/// # Examples
/// ```
/// use wikidoc::extract::find_by_kind;
/// use wikidoc::model::{Element, ElementKind};
///
/// let elements = vec![Element::container(
///     ElementKind::List,
///     vec![Element::leaf(ElementKind::ListItem, "a")],
/// )];
/// let found = find_by_kind(elements.as_slice(), &[ElementKind::ListItem]);
/// assert_eq!(found.len(), 1);
/// ```
#[must_use]
pub fn find_by_kind<'s, S: Scope + ?Sized>(
    scope: &'s S,
    kinds: &[ElementKind],
) -> Vec<&'s Element> {
    walk(scope)
        .into_iter()
        .filter(|element| kinds.contains(&element.kind()))
        .collect()
}

/// Every element of a scope in pre-order.
pub(crate) fn walk<S: Scope + ?Sized>(scope: &S) -> Vec<&Element> {
    walk_from(scope.roots())
}

/// Every element under the given roots in pre-order.
pub(crate) fn walk_from(roots: Vec<&Element>) -> Vec<&Element> {
    let mut result = Vec::new();
    let mut stack: Vec<&Element> = roots.into_iter().rev().collect();

    while let Some(element) = stack.pop() {
        result.push(element);
        stack.extend(element.children().iter().rev());
    }

    result
}
