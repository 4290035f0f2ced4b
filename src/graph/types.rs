//! Display-graph type definitions
//!
//! Both types serialize straight into the shape the render engine expects
//! (`id`/`label`/`title` for nodes, `from`/`to`/`label`/`title` for edges).

use serde::Serialize;

/// A node in the display graph.
///
/// `index` is a stable identity assigned in first-seen order; rewrites that
/// remove other nodes never renumber it. `full_term` keeps the unredacted
/// source string and seeds the tooltip for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNode {
    /// Stable node index, assigned in first-seen term order
    #[serde(rename = "id")]
    pub index: usize,
    /// Unredacted string form of the source term
    #[serde(skip)]
    pub full_term: String,
    /// Normalized display label
    pub label: String,
    /// Hover text; starts as `full_term`, rewrites may append properties
    #[serde(rename = "title")]
    pub tooltip: String,
}

impl DisplayNode {
    /// Create a new node; the tooltip defaults to the full term
    pub fn new(index: usize, full_term: impl Into<String>, label: impl Into<String>) -> Self {
        let full_term = full_term.into();
        let tooltip = full_term.clone();
        Self {
            index,
            full_term,
            label: label.into(),
            tooltip,
        }
    }

    /// Append a `key = value` property line to the tooltip
    pub fn push_property(&mut self, key: &str, value: &str) {
        self.tooltip.push('\n');
        self.tooltip.push_str(key);
        self.tooltip.push_str(" = ");
        self.tooltip.push_str(value);
    }
}

/// A directed edge in the display graph.
///
/// Multigraph semantics: several edges may share the same endpoints and
/// label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEdge {
    /// Source node index
    #[serde(rename = "from")]
    pub source: usize,
    /// Target node index
    #[serde(rename = "to")]
    pub target: usize,
    /// Normalized predicate label
    pub label: String,
    /// Hover text: the unredacted predicate string
    #[serde(rename = "title")]
    pub tooltip: String,
}

impl DisplayEdge {
    /// Create a new edge
    pub fn new(
        source: usize,
        target: usize,
        label: impl Into<String>,
        tooltip: impl Into<String>,
    ) -> Self {
        Self {
            source,
            target,
            label: label.into(),
            tooltip: tooltip.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_tooltip_defaults_to_full_term() {
        let node = DisplayNode::new(0, "http://example.org/alice", "ex:alice");
        assert_eq!(node.tooltip, "http://example.org/alice");
    }

    #[test]
    fn test_node_serializes_to_render_shape() {
        let node = DisplayNode::new(3, "http://example.org/alice", "ex:alice");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"label":"ex:alice","title":"http://example.org/alice"}"#
        );
    }

    #[test]
    fn test_edge_serializes_to_render_shape() {
        let edge = DisplayEdge::new(0, 1, "ex:knows", "http://example.org/knows");
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(
            json,
            r#"{"from":0,"to":1,"label":"ex:knows","title":"http://example.org/knows"}"#
        );
    }

    #[test]
    fn test_push_property_appends_lines() {
        let mut node = DisplayNode::new(0, "http://example.org/alice", "ex:alice");
        node.push_property("ex:name", "L(1) Alice");
        node.push_property("ex:age", "L(1) 30");

        assert_eq!(
            node.tooltip,
            "http://example.org/alice\nex:name = L(1) Alice\nex:age = L(1) 30"
        );
    }
}
