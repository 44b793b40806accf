//! Personas and their relevance profiles.
//!
//! A [`Persona`] names one of the fixed conversational identities the
//! application ships; its [`PersonaProfile`] carries the keywords and
//! source affinities that steer recall (query bias) and ranking (boosts).
//! Profiles are injected, read-only data — the core never loads them from
//! disk or network. [`builtin_profiles`] provides the shipped table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::types::Provider;

/// Boost applied when a result's source appears in a persona's
/// preferred-source map (builtin profiles).
pub const SOURCE_AFFINITY: f64 = 0.2;

/// The fixed set of personas a search can be weighted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Business-research persona, leans toward company and market data.
    Sophia,
    /// Customer-voice persona, leans toward pricing and feedback signals.
    Karen,
    /// Creative persona, leans toward design and inspiration material.
    Cherry,
}

impl Persona {
    /// Returns the lowercase wire name of this persona.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sophia => "sophia",
            Self::Karen => "karen",
            Self::Cherry => "cherry",
        }
    }

    /// Returns all persona variants.
    pub fn all() -> &'static [Persona] {
        &[Self::Sophia, Self::Karen, Self::Cherry]
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Persona {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sophia" => Ok(Self::Sophia),
            "karen" => Ok(Self::Karen),
            "cherry" => Ok(Self::Cherry),
            other => Err(SearchError::UnknownPersona(other.to_string())),
        }
    }
}

/// Relevance profile for a single persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaProfile {
    /// Keywords appended to the raw query before dispatch (first two used).
    pub bias_keywords: Vec<String>,
    /// Keywords that earn a ranking boost when found in a result's
    /// title or snippet.
    pub boost_keywords: Vec<String>,
    /// Source affinity map: result `source` → additive boost.
    pub preferred_sources: HashMap<String, f64>,
}

impl PersonaProfile {
    /// Returns the additive boost for a result source, `0.0` if the
    /// source carries no affinity for this persona.
    pub fn source_boost(&self, source: &str) -> f64 {
        self.preferred_sources.get(source).copied().unwrap_or(0.0)
    }
}

/// The shipped persona profile table.
///
/// Applications may pass their own table to the orchestrator; this one
/// matches the personas the rest of the product ships with.
pub fn builtin_profiles() -> HashMap<Persona, PersonaProfile> {
    let mut profiles = HashMap::new();

    profiles.insert(
        Persona::Sophia,
        PersonaProfile {
            bias_keywords: keywords(&["business", "strategy"]),
            boost_keywords: keywords(&["market", "growth", "enterprise", "leadership"]),
            preferred_sources: affinities(&[Provider::Apollo, Provider::Exa]),
        },
    );
    profiles.insert(
        Persona::Karen,
        PersonaProfile {
            bias_keywords: keywords(&["customer", "experience"]),
            boost_keywords: keywords(&["pricing", "feedback", "review", "support"]),
            preferred_sources: affinities(&[Provider::Perplexity, Provider::Brave]),
        },
    );
    profiles.insert(
        Persona::Cherry,
        PersonaProfile {
            bias_keywords: keywords(&["creative", "design"]),
            boost_keywords: keywords(&["art", "design", "inspiration", "aesthetic"]),
            preferred_sources: affinities(&[Provider::Brave, Provider::Tavily]),
        },
    );

    profiles
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn affinities(providers: &[Provider]) -> HashMap<String, f64> {
    providers
        .iter()
        .map(|p| (p.name().to_string(), SOURCE_AFFINITY))
        .collect()
}
