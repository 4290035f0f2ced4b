//! Structural graph rewrites
//!
//! Two independent rewrites over the built display graph, each strictly
//! two-phase (collect, then apply) so the edge list is never mutated while
//! it is being scanned:
//!
//! - **propertize** folds matching edges into `key = value` tooltip lines on
//!   the source node and drops the target node;
//! - **label override** copies a matching target node's label onto its
//!   source node and drops the target node.
//!
//! Rules with no matching edges are silent no-ops, and re-applying a rewrite
//! after its trigger edges are consumed changes nothing.

use super::store::DisplayGraph;
use std::collections::HashSet;
use tracing::debug;

/// Fold edges whose label contains any rule substring into properties of the
/// source node.
///
/// Every matching edge records one `<edge label> = <target label>` tooltip
/// line on its source node (multiple matches accumulate); every target of a
/// matching edge is removed together with all its incident edges.
pub fn propertize(graph: &mut DisplayGraph, rules: &[String]) {
    if rules.is_empty() {
        return;
    }

    // Phase 1: collect property entries and removal candidates.
    let mut entries: Vec<(usize, String, String)> = Vec::new();
    let mut removed: HashSet<usize> = HashSet::new();
    for edge in graph.edges() {
        for rule in rules {
            if !edge.label.contains(rule.as_str()) {
                continue;
            }
            if let Some(target) = graph.node(edge.target) {
                entries.push((edge.source, edge.label.clone(), target.label.clone()));
                removed.insert(edge.target);
            }
        }
    }

    // Phase 2: append tooltip lines, then drop folded nodes and their edges.
    debug!(
        entries = entries.len(),
        removed = removed.len(),
        "propertize rewrite"
    );
    for (source, key, value) in entries {
        if let Some(node) = graph.node_mut(source) {
            node.push_property(&key, &value);
        }
    }
    graph.remove_nodes(&removed);
}

/// Copy the label of each matching edge's target node onto its source node,
/// then remove the targets.
///
/// Rules apply in list order, edges in insertion order; each match
/// overwrites the source label, so the last copy wins. Copies materialize
/// immediately during the walk while removals wait for phase 2, so a node
/// already marked for removal still serves as a label source for later
/// rules.
pub fn apply_label_overrides(graph: &mut DisplayGraph, rules: &[String]) {
    if rules.is_empty() {
        return;
    }

    // Phase 1: copy labels in rule/iteration order, mark targets.
    let mut removed: HashSet<usize> = HashSet::new();
    for rule in rules {
        let matches: Vec<(usize, usize)> = graph
            .edges()
            .iter()
            .filter(|e| e.label.contains(rule.as_str()))
            .map(|e| (e.source, e.target))
            .collect();
        for (source, target) in matches {
            let Some(label) = graph.node(target).map(|n| n.label.clone()) else {
                continue;
            };
            if let Some(node) = graph.node_mut(source) {
                node.label = label;
                removed.insert(target);
            }
        }
    }

    // Phase 2: drop the override sources' targets and their edges.
    debug!(removed = removed.len(), "label override rewrite");
    graph.remove_nodes(&removed);
}
