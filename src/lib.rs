//! rdfvis
//!
//! Renders an RDF triple graph as an interactive HTML network with
//! human-readable labels. The core is the label normalization and
//! structural rewrite pipeline:
//!
//! - namespace IRIs collapse to short prefixes (document-declared bindings
//!   plus configured overrides);
//! - repeated literal values get ordered `L(<n>)` counters;
//! - hash-like path segments (UUIDs and friends) are redacted to indexed
//!   `hash(<i>)` placeholders, recoverable from the printed listing;
//! - configured edges fold into node tooltip properties (propertize) or
//!   override their source node's label.
//!
//! # Example
//!
//! ```rust
//! use rdfvis::graph::DisplayGraph;
//! use rdfvis::label::{LabelContext, PrefixTable};
//! use rdfvis::rdf::{GraphDocument, RdfFormat};
//!
//! let doc = GraphDocument::parse(
//!     "@prefix ex: <http://example.org/> . ex:alice ex:knows ex:bob .",
//!     RdfFormat::Turtle,
//! )
//! .unwrap();
//!
//! let mut prefixes = PrefixTable::new();
//! for (name, iri) in &doc.namespaces {
//!     prefixes.declare(iri.clone(), name.clone());
//! }
//!
//! let mut ctx = LabelContext::new();
//! let graph = DisplayGraph::from_triples(&doc.triples, &[], &prefixes, &mut ctx);
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.nodes()[0].label, "ex:alice");
//! ```

pub mod config;
pub mod graph;
pub mod label;
pub mod rdf;
pub mod render;

// Re-export main types for convenience
pub use config::{Config, ConfigError, ConfigResult};
pub use graph::{
    apply_label_overrides, is_filtered, propertize, DisplayEdge, DisplayGraph, DisplayNode,
};
pub use label::{is_hash, normalize, LabelContext, PrefixTable};
pub use rdf::{
    BlankNode, GraphDocument, Literal, NamedNode, ParseError, ParseResult, RdfFormat, RdfObject,
    RdfPredicate, RdfSubject, RdfTerm, Triple,
};
pub use render::{render_html, write_artifact, RenderError, RenderResult, RenderSettings};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
