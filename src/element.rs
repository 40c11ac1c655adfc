//! Tag-name lookups over the element tree. Matching uses local names only,
//! so namespaced (GPX 1.0/1.1) and namespace-free documents behave the same.

use roxmltree::Node;

/// First descendant element named `tag`, in document order. `parent` itself
/// is never a candidate.
pub(crate) fn first_descendant<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    parent
        .descendants()
        .skip(1)
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

/// All descendant elements named `tag`, in document order, excluding
/// `parent` itself.
pub(crate) fn descendants_named<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &str,
) -> Vec<Node<'a, 'input>> {
    parent
        .descendants()
        .skip(1)
        .filter(|n| n.is_element() && n.tag_name().name() == tag)
        .collect()
}

/// An element's own text content; empty when it has none.
pub(crate) fn element_text(node: Node) -> String {
    node.text().unwrap_or_default().to_string()
}

/// Text content of the first descendant element named `tag`. A match without
/// text yields an empty string; only a missing element is absent.
pub(crate) fn text_of(parent: Node, tag: &str) -> Option<String> {
    first_descendant(parent, tag).map(element_text)
}

/// Resolve `tag` under `parent`, preferring a direct child when the name is
/// ambiguous.
///
/// Two-phase lookup: a single descendant match wins outright; with several
/// matches (say, a nested <link> inside <author> next to the metadata's own
/// <link>) the immediate children are scanned and the first direct child
/// wins, falling back to the first descendant when no direct child matches.
pub(crate) fn direct_child<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    let matches = descendants_named(parent, tag);
    let first = *matches.first()?;
    if matches.len() == 1 {
        return Some(first);
    }
    parent
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
        .or(Some(first))
}
