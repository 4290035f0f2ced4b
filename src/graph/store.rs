//! Display-graph construction and storage
//!
//! Consumes the filtered triple sequence in order, interning subjects and
//! objects by raw term identity so each distinct term gets exactly one node
//! with a stable first-seen index. Edges are appended without deduplication.

use super::filter::is_filtered;
use super::types::{DisplayEdge, DisplayNode};
use crate::label::{normalize, LabelContext, PrefixTable};
use crate::rdf::{RdfTerm, Triple};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// The node/edge model handed to the rewriter and then to the renderer
#[derive(Debug, Clone, Default)]
pub struct DisplayGraph {
    nodes: Vec<DisplayNode>,
    edges: Vec<DisplayEdge>,
    /// Raw term → node index; interning map for first-seen identity
    seen: HashMap<RdfTerm, usize>,
}

impl DisplayGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a display graph from a triple sequence.
    ///
    /// Triples matching a filter substring are skipped whole. An empty
    /// sequence yields an empty graph.
    pub fn from_triples(
        triples: &[Triple],
        filters: &[String],
        prefixes: &PrefixTable,
        ctx: &mut LabelContext,
    ) -> Self {
        let mut graph = Self::new();

        for triple in triples {
            if is_filtered(filters, triple) {
                continue;
            }

            let source = graph.intern(RdfTerm::from(triple.subject.clone()), prefixes, ctx);
            let target = graph.intern(RdfTerm::from(triple.object.clone()), prefixes, ctx);

            let term = RdfTerm::NamedNode(triple.predicate.as_named_node().clone());
            let label = normalize(&term, prefixes, ctx);
            graph.edges.push(DisplayEdge::new(
                source,
                target,
                label,
                triple.predicate.lexical_form(),
            ));
        }

        info!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "built display graph"
        );
        graph
    }

    /// Node index for a term, normalizing and appending a new node on first
    /// encounter
    fn intern(&mut self, term: RdfTerm, prefixes: &PrefixTable, ctx: &mut LabelContext) -> usize {
        if let Some(&index) = self.seen.get(&term) {
            return index;
        }
        let index = self.nodes.len();
        let full_term = term.lexical_form().to_string();
        let label = normalize(&term, prefixes, ctx);
        self.nodes.push(DisplayNode::new(index, full_term, label));
        self.seen.insert(term, index);
        index
    }

    /// All nodes, in index order (survivors keep their indices after
    /// removals)
    pub fn nodes(&self) -> &[DisplayNode] {
        &self.nodes
    }

    /// All edges, in insertion order
    pub fn edges(&self) -> &[DisplayEdge] {
        &self.edges
    }

    /// Node count
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edge count
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by its stable index
    pub fn node(&self, index: usize) -> Option<&DisplayNode> {
        self.nodes.iter().find(|n| n.index == index)
    }

    /// Mutable lookup by stable index
    pub fn node_mut(&mut self, index: usize) -> Option<&mut DisplayNode> {
        self.nodes.iter_mut().find(|n| n.index == index)
    }

    /// Remove the given nodes and every edge incident to any of them.
    /// Surviving nodes keep their indices.
    pub fn remove_nodes(&mut self, removed: &HashSet<usize>) {
        if removed.is_empty() {
            return;
        }
        self.nodes.retain(|n| !removed.contains(&n.index));
        self.edges
            .retain(|e| !removed.contains(&e.source) && !removed.contains(&e.target));
    }
}
