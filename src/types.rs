//! Core types for federated search: results, providers, depth tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ProviderError, SearchError};

/// A single search result returned by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// The URL of the result. Identity for deduplication.
    pub url: String,
    /// A text snippet summarising the page content.
    pub snippet: String,
    /// Which backend produced this result (lowercase wire name, e.g. `"brave"`).
    pub source: String,
    /// Provider-supplied base relevance estimate, `>= 0.0`. Persona ranking
    /// only ever adds to this value; after ranking it holds the adjusted
    /// score, which may exceed 1.0.
    pub relevance_score: f64,
    /// Optional publication timestamp, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Search backends the orchestrator can fan out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Brave Search — baseline web provider, queried in every tier.
    Brave,
    /// Perplexity — research-answer API, good general recall.
    Perplexity,
    /// Exa — semantic web search.
    Exa,
    /// Tavily — research-oriented aggregator, deep tiers only.
    Tavily,
    /// Apollo — people/business search, deep tiers only.
    Apollo,
}

impl Provider {
    /// Returns the lowercase wire name of this provider, matching the
    /// `source` field adapters stamp on their results.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brave => "brave",
            Self::Perplexity => "perplexity",
            Self::Exa => "exa",
            Self::Tavily => "tavily",
            Self::Apollo => "apollo",
        }
    }

    /// Returns all provider variants.
    pub fn all() -> &'static [Provider] {
        &[
            Self::Brave,
            Self::Perplexity,
            Self::Exa,
            Self::Tavily,
            Self::Apollo,
        ]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Depth tier controlling how many providers and query variants a search
/// consults. Tiers are strict supersets: every provider queried under
/// [`SearchMode::Normal`] is also queried under [`SearchMode::Deep`], and so
/// on, with [`SearchMode::SuperDeep`] adding widened query variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Baseline web provider plus two general-purpose providers.
    Normal,
    /// Normal's set plus two specialised providers.
    Deep,
    /// Deep's set plus repeat baseline invocations with widening suffixes.
    SuperDeep,
}

impl SearchMode {
    /// Returns the wire name of this mode (`normal`, `deep`, `super_deep`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Deep => "deep",
            Self::SuperDeep => "super_deep",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "deep" => Ok(Self::Deep),
            "super_deep" => Ok(Self::SuperDeep),
            other => Err(SearchError::UnknownMode(other.to_string())),
        }
    }
}

/// A single planned provider call: which backend to hit and with what query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInvocation {
    /// The backend to invoke.
    pub provider: Provider,
    /// The (biased, possibly suffix-widened) query to send.
    pub query: String,
}

/// The settled outcome of one provider invocation. Transient — lives only
/// for the duration of a single `search` call, never persisted.
///
/// Failures are values here, not side effects: a rejected call carries its
/// [`ProviderError`] so tests can assert on it directly.
#[derive(Debug)]
pub struct ProviderOutcome {
    /// The invocation that produced this outcome.
    pub invocation: ProviderInvocation,
    /// The provider's results, or the error that rejected the call.
    pub outcome: Result<Vec<SearchResult>, ProviderError>,
}

impl ProviderOutcome {
    /// Returns `true` if the provider call settled successfully.
    pub fn is_fulfilled(&self) -> bool {
        self.outcome.is_ok()
    }
}
