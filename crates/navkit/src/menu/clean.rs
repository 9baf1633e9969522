//! Removal of hidden entries and redundant markers.

use tracing::debug;

use crate::item::Node;

use super::style::Collapse;

/// Drop invisible entries, then collapse markers.
///
/// Visibility is resolved first so that dividers around a hidden item still
/// merge. Afterwards no divider is first, no marker is last, and no two
/// markers of a collapsed kind are adjacent.
pub fn clean(nodes: Vec<Node>, collapse: Collapse) -> Vec<Node> {
    let before = nodes.len();
    let visible: Vec<Node> = nodes.into_iter().filter(Node::is_visible).collect();

    let cleaned = match collapse {
        Collapse::Dividers => collapse_dividers(visible),
        Collapse::Markers => collapse_markers(visible),
    };

    if cleaned.len() != before {
        debug!(before, after = cleaned.len(), "cleaned menu entries");
    }
    cleaned
}

fn collapse_dividers(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if matches!(node, Node::Divider) && matches!(out.last(), None | Some(Node::Divider)) {
            continue;
        }
        out.push(node);
    }
    if matches!(out.last(), Some(Node::Divider)) {
        out.pop();
    }
    out
}

/// A run of markers keeps only its last one; a header with nothing after it
/// is dropped along with any dividers in between.
fn collapse_markers(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    let mut iter = nodes.into_iter().peekable();

    while let Some(node) = iter.next() {
        let next_is_marker = iter.peek().is_some_and(Node::is_marker);
        if node.is_marker() && next_is_marker {
            continue;
        }
        if matches!(node, Node::Divider) && out.is_empty() {
            continue;
        }
        if node.is_marker() && iter.peek().is_none() {
            continue;
        }
        out.push(node);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemOptions;

    fn link(label: &str) -> Node {
        Node::Link(ItemOptions::new().label(label))
    }

    fn hidden() -> Node {
        Node::Link(ItemOptions::new().visible(false))
    }

    fn header(title: &str) -> Node {
        Node::Header(title.to_string())
    }

    #[test]
    fn dividers_merge_around_hidden_items() {
        let nodes = vec![
            Node::Divider,
            link("foo"),
            Node::Divider,
            hidden(),
            Node::Divider,
            Node::Divider,
            link("baz"),
        ];
        assert_eq!(
            clean(nodes, Collapse::Dividers),
            vec![link("foo"), Node::Divider, link("baz")]
        );
    }

    #[test]
    fn trailing_divider_removed() {
        let nodes = vec![link("a"), Node::Divider, hidden(), Node::Divider];
        assert_eq!(clean(nodes, Collapse::Dividers), vec![link("a")]);
    }

    #[test]
    fn only_markers_clean_to_nothing() {
        let nodes = vec![Node::Divider, hidden(), Node::Divider];
        assert!(clean(nodes.clone(), Collapse::Dividers).is_empty());
        assert!(clean(nodes, Collapse::Markers).is_empty());
    }

    #[test]
    fn marker_runs_keep_the_last_marker() {
        let nodes = vec![
            header("Header1"),
            Node::Divider,
            header("Header 2"),
            link("foo"),
            Node::Divider,
            hidden(),
            Node::Divider,
            Node::Divider,
            link("baz"),
            Node::Divider,
        ];
        assert_eq!(
            clean(nodes, Collapse::Markers),
            vec![header("Header 2"), link("foo"), Node::Divider, link("baz")]
        );
    }

    #[test]
    fn trailing_header_dropped_with_dividers() {
        let nodes = vec![link("foo"), header("Orphan"), Node::Divider, Node::Divider];
        assert_eq!(clean(nodes, Collapse::Markers), vec![link("foo")]);
    }

    #[test]
    fn leading_header_is_kept() {
        let nodes = vec![header("Account"), link("profile")];
        assert_eq!(
            clean(nodes.clone(), Collapse::Markers),
            nodes
        );
    }
}
