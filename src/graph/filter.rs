//! Triple filtering
//!
//! Drops whole triples whose raw string form matches any configured
//! substring, before any label normalization happens.

use crate::rdf::Triple;

/// Check whether a triple matches any filter substring.
///
/// The filter is evaluated against the pipe-joined raw term strings
/// (`"<s>|<p>|<o>"`); a match drops the entire triple.
pub fn is_filtered(filters: &[String], triple: &Triple) -> bool {
    if filters.is_empty() {
        return false;
    }
    let joined = format!(
        "{}|{}|{}",
        triple.subject.lexical_form(),
        triple.predicate.lexical_form(),
        triple.object.lexical_form()
    );
    filters.iter().any(|f| joined.contains(f.as_str()))
}
