//! Namespace prefix table for display labels
//!
//! Maps namespace IRIs to short names. User-configured entries are inserted
//! first; bindings declared by the source document are added afterwards and
//! only when the IRI is not already present, so configuration always wins.

use indexmap::IndexMap;

/// IRI → short-name table used for label substitution
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    /// IRI → short name, in insertion order
    entries: IndexMap<String, String>,
}

impl PrefixTable {
    /// Create an empty prefix table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a configured entry, replacing any existing short name for the
    /// IRI
    pub fn insert(&mut self, iri: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(iri.into(), name.into());
    }

    /// Add a binding declared by the source document. Skipped when the IRI
    /// is already present, so configured entries are never clobbered.
    pub fn declare(&mut self, iri: impl Into<String>, name: impl Into<String>) {
        self.entries.entry(iri.into()).or_insert_with(|| name.into());
    }

    /// Get the short name for a namespace IRI
    pub fn get(&self, iri: &str) -> Option<&str> {
        self.entries.get(iri).map(|s| s.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every occurrence of every known namespace IRI in `label` with
    /// `<short>:`.
    ///
    /// Longer IRIs are substituted first, so a namespace nested inside
    /// another (`.../ns/` vs `.../ns/sub/`) resolves to the more specific
    /// entry regardless of insertion order.
    pub fn apply(&self, label: &str) -> String {
        let mut pairs: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(iri, name)| (iri.as_str(), name.as_str()))
            .collect();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut out = label.to_string();
        for (iri, name) in pairs {
            if out.contains(iri) {
                out = out.replace(iri, &format!("{}:", name));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_entry_wins_over_declared() {
        let mut table = PrefixTable::new();
        table.insert("http://example.org/", "mine");
        table.declare("http://example.org/", "ex");

        assert_eq!(table.get("http://example.org/"), Some("mine"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_declared_entry_fills_gap() {
        let mut table = PrefixTable::new();
        table.declare("http://xmlns.com/foaf/0.1/", "foaf");

        assert_eq!(table.get("http://xmlns.com/foaf/0.1/"), Some("foaf"));
    }

    #[test]
    fn test_apply_replaces_every_occurrence() {
        let mut table = PrefixTable::new();
        table.insert("http://example.org/", "ex");

        let label = table.apply("http://example.org/a -> http://example.org/b");
        assert_eq!(label, "ex:a -> ex:b");
    }

    #[test]
    fn test_apply_longest_iri_first() {
        let mut table = PrefixTable::new();
        table.insert("http://example.org/", "ex");
        table.insert("http://example.org/vocab/", "voc");

        // The nested namespace must win even though it was inserted second
        let label = table.apply("http://example.org/vocab/name");
        assert_eq!(label, "voc:name");
    }

    #[test]
    fn test_apply_without_match_is_identity() {
        let table = PrefixTable::new();
        assert_eq!(table.apply("http://other.org/x"), "http://other.org/x");
    }
}
