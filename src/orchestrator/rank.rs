//! Persona-weighted ranking of fused results.
//!
//! Scoring formula:
//!
//! ```text
//! adjusted = relevance_score + keyword_boost + source_boost
//! keyword_boost = 0.1 × (boost keywords found in title + " " + snippet)
//! source_boost  = persona's affinity for the result source (0 if none)
//! ```
//!
//! Boosts are strictly additive and never negative, so the adjusted score
//! is always >= the provider-supplied base. Scores are plain floats with
//! no normalisation; values above 1.0 are expected after boosting.

use crate::persona::PersonaProfile;
use crate::types::SearchResult;

/// Boost per matched ranking keyword.
pub const KEYWORD_BOOST: f64 = 0.1;

/// Keyword boost for a single result: [`KEYWORD_BOOST`] for each of the
/// persona's boost keywords found as a case-insensitive substring anywhere
/// in `title + " " + snippet`. One boost per keyword, regardless of how
/// often it occurs.
pub fn keyword_boost(result: &SearchResult, profile: &PersonaProfile) -> f64 {
    let haystack = format!("{} {}", result.title, result.snippet).to_lowercase();
    let matches = profile
        .boost_keywords
        .iter()
        .filter(|kw| haystack.contains(&kw.to_lowercase()))
        .count();
    matches as f64 * KEYWORD_BOOST
}

/// Rank results for a persona: apply boosts, sort descending by adjusted
/// score (stable — ties keep their pre-ranking relative order), and
/// truncate to `cap`.
///
/// The `relevance_score` field of each returned result holds the adjusted
/// score.
pub fn rank(
    mut results: Vec<SearchResult>,
    profile: &PersonaProfile,
    cap: usize,
) -> Vec<SearchResult> {
    for result in &mut results {
        result.relevance_score +=
            keyword_boost(result, profile) + profile.source_boost(&result.source);
    }

    // Vec::sort_by is stable, which is what breaks ties by original order.
    results.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(cap);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const TOLERANCE: f64 = 1e-9;

    fn profile(boost_keywords: &[&str], preferred: &[(&str, f64)]) -> PersonaProfile {
        PersonaProfile {
            bias_keywords: vec![],
            boost_keywords: boost_keywords.iter().map(|w| (*w).to_string()).collect(),
            preferred_sources: preferred
                .iter()
                .map(|(s, b)| ((*s).to_string(), *b))
                .collect(),
        }
    }

    fn make_result(url: &str, source: &str, title: &str, snippet: &str, score: f64) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            url: url.to_string(),
            snippet: snippet.to_string(),
            source: source.to_string(),
            relevance_score: score,
            timestamp: None,
        }
    }

    #[test]
    fn keyword_boost_counts_each_keyword_once() {
        let profile = profile(&["pricing", "feedback"], &[]);
        let result = make_result(
            "https://a.com",
            "brave",
            "Pricing pricing pricing",
            "customer feedback thread",
            0.5,
        );
        // Two distinct keywords match; repeats of "pricing" do not stack.
        assert!((keyword_boost(&result, &profile) - 0.2).abs() < TOLERANCE);
    }

    #[test]
    fn keyword_boost_is_case_insensitive() {
        let profile = profile(&["Enterprise"], &[]);
        let result = make_result("https://a.com", "exa", "ENTERPRISE sales", "", 0.5);
        assert!((keyword_boost(&result, &profile) - KEYWORD_BOOST).abs() < TOLERANCE);
    }

    #[test]
    fn keyword_spanning_title_snippet_gap_matches() {
        // Haystack is title + " " + snippet, so a keyword can match across
        // the joining space.
        let profile = profile(&["alpha beta"], &[]);
        let result = make_result("https://a.com", "exa", "word alpha", "beta word", 0.5);
        assert!((keyword_boost(&result, &profile) - KEYWORD_BOOST).abs() < TOLERANCE);
    }

    #[test]
    fn source_affinity_applied_from_profile_map() {
        let profile = profile(&[], &[("apollo", 0.2)]);
        let results = vec![make_result("https://a.com", "apollo", "t", "s", 0.6)];
        let ranked = rank(results, &profile, 20);
        assert!((ranked[0].relevance_score - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn boost_arithmetic_matches_formula() {
        // base 0.6 + source 0.2 + one keyword match 0.1 = 0.9
        let profile = profile(&["enterprise"], &[("apollo", 0.2)]);
        let results = vec![make_result(
            "https://a.com",
            "apollo",
            "Enterprise data",
            "snippet",
            0.6,
        )];
        let ranked = rank(results, &profile, 20);
        assert!((ranked[0].relevance_score - 0.9).abs() < TOLERANCE);
    }

    #[test]
    fn adjusted_score_never_below_base() {
        let profile = profile(&["nomatch"], &[("othersource", 0.2)]);
        let results = vec![
            make_result("https://a.com", "brave", "t", "s", 0.7),
            make_result("https://b.com", "exa", "t", "s", 0.0),
        ];
        let ranked = rank(results, &profile, 20);
        assert!((ranked[0].relevance_score - 0.7).abs() < TOLERANCE);
        assert!(ranked[1].relevance_score.abs() < TOLERANCE);
    }

    #[test]
    fn scores_may_exceed_one() {
        let profile = profile(&["a", "b", "c"], &[("brave", 0.2)]);
        let results = vec![make_result("https://a.com", "brave", "a b c", "", 0.9)];
        let ranked = rank(results, &profile, 20);
        // 0.9 + 3 × 0.1 + 0.2 = 1.4 — no clamping.
        assert!((ranked[0].relevance_score - 1.4).abs() < TOLERANCE);
    }

    #[test]
    fn sorted_descending_by_adjusted_score() {
        let profile = profile(&["boost"], &[]);
        let results = vec![
            make_result("https://low.com", "brave", "plain", "plain", 0.5),
            make_result("https://high.com", "exa", "boost here", "plain", 0.5),
        ];
        let ranked = rank(results, &profile, 20);
        assert_eq!(ranked[0].url, "https://high.com");
        assert_eq!(ranked[1].url, "https://low.com");
    }

    #[test]
    fn ties_keep_original_relative_order() {
        let profile = profile(&[], &[]);
        let results = vec![
            make_result("https://first.com", "brave", "t", "s", 0.5),
            make_result("https://second.com", "exa", "t", "s", 0.5),
            make_result("https://third.com", "tavily", "t", "s", 0.5),
        ];
        let ranked = rank(results, &profile, 20);
        assert_eq!(ranked[0].url, "https://first.com");
        assert_eq!(ranked[1].url, "https://second.com");
        assert_eq!(ranked[2].url, "https://third.com");
    }

    #[test]
    fn truncates_to_cap_after_sorting() {
        let profile = profile(&[], &[]);
        let results: Vec<SearchResult> = (0..30)
            .map(|i| {
                make_result(
                    &format!("https://p{i}.com"),
                    "brave",
                    "t",
                    "s",
                    i as f64 * 0.01,
                )
            })
            .collect();
        let ranked = rank(results, &profile, 20);
        assert_eq!(ranked.len(), 20);
        // Highest-scored entry survives truncation.
        assert_eq!(ranked[0].url, "https://p29.com");
    }

    #[test]
    fn empty_input_returns_empty() {
        let profile = profile(&["x"], &[("brave", 0.2)]);
        assert!(rank(vec![], &profile, 20).is_empty());
    }
}
