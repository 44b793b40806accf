//! Persona query bias: steering recall before dispatch.
//!
//! Appends a persona's leading bias keywords to the raw query so that
//! every provider sees a query already tilted toward the persona's
//! domain of interest. Deterministic — no randomness, no I/O.

use crate::persona::PersonaProfile;

/// How many bias keywords are appended to the query.
const BIAS_KEYWORD_COUNT: usize = 2;

/// Append the persona's first bias keywords to `query`, space-separated.
///
/// If the profile has fewer than [`BIAS_KEYWORD_COUNT`] keywords configured,
/// whatever exists is used; with none, the query is returned unchanged.
/// An empty or whitespace-only query yields the bias keywords alone, so
/// providers never see a leading separator.
pub fn inject_bias(query: &str, profile: &PersonaProfile) -> String {
    let bias: Vec<&str> = profile
        .bias_keywords
        .iter()
        .take(BIAS_KEYWORD_COUNT)
        .map(String::as_str)
        .collect();

    if bias.is_empty() {
        return query.to_string();
    }
    if query.trim().is_empty() {
        return bias.join(" ");
    }

    format!("{query} {}", bias.join(" "))
}
