//! Result fusion: merging settled provider outcomes into one list.
//!
//! Walks outcomes in planned (provider-priority) order, flattens the
//! fulfilled ones, and deduplicates by URL identity with first-occurrence
//! priority — on a duplicate URL, the earlier-planned provider's entry
//! survives. Rejected outcomes contribute nothing; fusion does not report
//! which providers failed.

use std::collections::HashSet;

use crate::types::{ProviderOutcome, SearchResult};

use super::dedup_key::dedup_key;

/// Fuse provider outcomes into a single deduplicated result list.
///
/// At most `cap` unique results are collected; callers that rank afterwards
/// should pass `usize::MAX` here and cap after ranking, otherwise the cap
/// would be applied in pre-ranking order.
///
/// Results with an empty or whitespace-only URL are never deduplicated
/// against one another; each is kept as unique.
pub fn fuse(outcomes: Vec<ProviderOutcome>, cap: usize) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut fused: Vec<SearchResult> = Vec::new();

    for outcome in outcomes {
        let Ok(results) = outcome.outcome else {
            continue;
        };
        for result in results {
            if fused.len() >= cap {
                return fused;
            }
            if result.url.trim().is_empty() {
                fused.push(result);
                continue;
            }
            let key = dedup_key(&result.url);
            if seen.insert(key) {
                fused.push(result);
            }
        }
    }

    fused
}
