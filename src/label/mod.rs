//! Label normalization
//!
//! Turns raw RDF terms into stable, human-readable display labels:
//! repeated literals get ordered `L(<n>)` counters, namespace IRIs collapse
//! to short prefixes, and hash-like path segments are redacted to indexed
//! `hash(<i>)` placeholders that can be looked up later.

pub mod prefix;

pub use prefix::PrefixTable;

use crate::rdf::RdfTerm;
use std::collections::HashMap;
use tracing::debug;

/// Cheap UUID/hash check for an IRI path segment.
///
/// Matches Java-style UUIDs and similar opaque identifiers: longer than 20
/// characters, at least 3 dashes, no uppercase letters. Intentionally
/// over-inclusive; it does not validate dash positions or the alphabet.
pub fn is_hash(segment: &str) -> bool {
    segment.chars().count() > 20
        && segment.chars().filter(|c| *c == '-').count() >= 3
        && segment.to_lowercase() == segment
}

/// Mutable state owned by the label normalizer: the hash index table and the
/// literal occurrence counters.
///
/// Owned by a single pipeline run and passed by reference; concurrent use
/// would corrupt index assignment order.
#[derive(Debug, Default)]
pub struct LabelContext {
    hashes: Vec<String>,
    literal_counts: HashMap<String, u64>,
}

impl LabelContext {
    /// Create a fresh context with empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// All hash-like segments seen so far, in first-seen order. The position
    /// of a segment is its redaction index.
    pub fn hashes(&self) -> &[String] {
        &self.hashes
    }

    /// Index of a hash-like segment, appending it on first encounter
    fn hash_index(&mut self, segment: &str) -> usize {
        match self.hashes.iter().position(|h| h == segment) {
            Some(i) => i,
            None => {
                self.hashes.push(segment.to_string());
                debug!(index = self.hashes.len() - 1, segment, "new hash segment");
                self.hashes.len() - 1
            }
        }
    }

    /// Bump and return the occurrence count for a literal's lexical form
    /// (first occurrence = 1)
    fn literal_count(&mut self, lexical: &str) -> u64 {
        let count = self.literal_counts.entry(lexical.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}

/// Normalize a term into its display label.
///
/// Applied in order: literal occurrence counter, prefix substitution, hash
/// redaction. `ctx` is mutated: literal counters advance and newly seen
/// hash-like segments are appended to the hash table.
pub fn normalize(term: &RdfTerm, prefixes: &PrefixTable, ctx: &mut LabelContext) -> String {
    let mut label = term.lexical_form().to_string();

    if term.is_literal() {
        let count = ctx.literal_count(&label);
        label = format!("L({}) {}", count, label);
    }

    label = prefixes.apply(&label);

    let segments: Vec<String> = label
        .split('/')
        .filter(|s| is_hash(s))
        .map(str::to_string)
        .collect();
    for segment in segments {
        let index = ctx.hash_index(&segment);
        label = label.replace(&segment, &format!("hash({})", index));
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Literal, NamedNode};

    fn iri(s: &str) -> RdfTerm {
        RdfTerm::NamedNode(NamedNode::new(s).unwrap())
    }

    fn lit(s: &str) -> RdfTerm {
        RdfTerm::Literal(Literal::new_simple_literal(s))
    }

    #[test]
    fn test_is_hash_uuid() {
        assert!(is_hash("a1b2c3d4-e5f6-7890-abcd-ef1234567890"));
    }

    #[test]
    fn test_is_hash_rejects_uppercase() {
        assert!(!is_hash("A1B2C3D4-E5F6-7890-ABCD"));
    }

    #[test]
    fn test_is_hash_rejects_short() {
        assert!(!is_hash("short-id"));
    }

    #[test]
    fn test_is_hash_rejects_too_few_dashes() {
        assert!(!is_hash("abababababababababab"));
    }

    #[test]
    fn test_literal_counter_orders_repeats() {
        let prefixes = PrefixTable::new();
        let mut ctx = LabelContext::new();

        assert_eq!(normalize(&lit("Alice"), &prefixes, &mut ctx), "L(1) Alice");
        assert_eq!(normalize(&lit("Alice"), &prefixes, &mut ctx), "L(2) Alice");
        assert_eq!(normalize(&lit("Bob"), &prefixes, &mut ctx), "L(1) Bob");
        assert_eq!(normalize(&lit("Alice"), &prefixes, &mut ctx), "L(3) Alice");
    }

    #[test]
    fn test_prefix_substitution() {
        let mut prefixes = PrefixTable::new();
        prefixes.insert("http://example.org/", "ex");
        let mut ctx = LabelContext::new();

        assert_eq!(
            normalize(&iri("http://example.org/alice"), &prefixes, &mut ctx),
            "ex:alice"
        );
    }

    #[test]
    fn test_hash_redaction_assigns_first_seen_indices() {
        let prefixes = PrefixTable::new();
        let mut ctx = LabelContext::new();

        let first = "a1b2c3d4-e5f6-7890-abcd-ef1234567890";
        let second = "99999999-8888-7777-6666-555555555555";

        let label = normalize(
            &iri(&format!("http://example.org/thing/{}", first)),
            &prefixes,
            &mut ctx,
        );
        assert_eq!(label, "http://example.org/thing/hash(0)");

        let label = normalize(
            &iri(&format!("http://example.org/thing/{}", second)),
            &prefixes,
            &mut ctx,
        );
        assert_eq!(label, "http://example.org/thing/hash(1)");

        // Re-encountering the first segment reuses index 0
        let label = normalize(
            &iri(&format!("http://example.org/other/{}", first)),
            &prefixes,
            &mut ctx,
        );
        assert_eq!(label, "http://example.org/other/hash(0)");

        assert_eq!(ctx.hashes().len(), 2);
        assert_eq!(ctx.hashes()[0], first);
    }

    #[test]
    fn test_bare_hash_like_literal_survives_detector() {
        let prefixes = PrefixTable::new();
        let mut ctx = LabelContext::new();

        // The counter prefix makes the single segment start with an
        // uppercase L, so the detector rejects it and the value stays
        // readable in full.
        let label = normalize(
            &lit("a1b2c3d4-e5f6-7890-abcd-ef1234567890"),
            &prefixes,
            &mut ctx,
        );
        assert_eq!(label, "L(1) a1b2c3d4-e5f6-7890-abcd-ef1234567890");
        assert!(ctx.hashes().is_empty());
    }

    #[test]
    fn test_path_literal_gets_hash_redaction() {
        let prefixes = PrefixTable::new();
        let mut ctx = LabelContext::new();

        let label = normalize(
            &lit("resources/a1b2c3d4-e5f6-7890-abcd-ef1234567890"),
            &prefixes,
            &mut ctx,
        );
        assert_eq!(label, "L(1) resources/hash(0)");
    }

    #[test]
    fn test_plain_term_passes_through() {
        let prefixes = PrefixTable::new();
        let mut ctx = LabelContext::new();

        assert_eq!(
            normalize(&iri("http://other.org/x"), &prefixes, &mut ctx),
            "http://other.org/x"
        );
        assert!(ctx.hashes().is_empty());
    }
}
