//! The public search pipeline: bias → plan → fan-out → fuse → rank.
//!
//! [`SearchOrchestrator`] owns nothing global — adapters and persona
//! profiles are injected at construction and the caller's composition root
//! owns their lifecycle. Each `search` call is an independent, stateless
//! computation: no retries, no memoization, nothing surviving the returned
//! list.

use std::collections::HashMap;

use crate::adapter::AdapterMap;
use crate::bias::inject_bias;
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::executor::execute;
use crate::persona::{builtin_profiles, Persona, PersonaProfile};
use crate::plan::plan;
use crate::types::{SearchMode, SearchResult};

use super::fuse::fuse;
use super::rank::rank;

/// Multi-provider search orchestrator with persona-weighted ranking.
pub struct SearchOrchestrator {
    adapters: AdapterMap,
    profiles: HashMap<Persona, PersonaProfile>,
    config: SearchConfig,
}

impl SearchOrchestrator {
    /// Create an orchestrator with explicit adapters, persona profiles,
    /// and configuration.
    pub fn new(
        adapters: AdapterMap,
        profiles: HashMap<Persona, PersonaProfile>,
        config: SearchConfig,
    ) -> Self {
        Self {
            adapters,
            profiles,
            config,
        }
    }

    /// Create an orchestrator using the shipped persona profile table.
    pub fn with_builtin_profiles(adapters: AdapterMap, config: SearchConfig) -> Self {
        Self::new(adapters, builtin_profiles(), config)
    }

    /// Run a federated search for `query`, weighted for `persona`, at
    /// depth `mode`.
    ///
    /// # Pipeline
    ///
    /// 1. Validate configuration and resolve the persona profile
    /// 2. Append the persona's bias keywords to the query
    /// 3. Plan the ordered provider invocation list for the tier
    /// 4. Fan out concurrently; wait for every call to settle
    /// 5. Fuse fulfilled outcomes in planned order, dedup by URL identity
    /// 6. Apply persona boosts, sort, truncate to `max_results`
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for invalid configuration and
    /// [`SearchError::UnknownPersona`] when the persona has no profile in
    /// the injected table. Provider failures never surface here: if every
    /// provider fails, the result is `Ok` with an empty list.
    pub async fn search(
        &self,
        query: &str,
        persona: Persona,
        mode: SearchMode,
    ) -> Result<Vec<SearchResult>> {
        self.config.validate()?;
        let profile = self
            .profiles
            .get(&persona)
            .ok_or_else(|| SearchError::UnknownPersona(persona.to_string()))?;

        let biased = inject_bias(query, profile);
        tracing::trace!(%persona, %mode, query = %biased, "dispatching federated search");

        let invocations = plan(mode, &biased);
        let outcomes = execute(invocations, &self.adapters, &self.config).await;

        let fulfilled = outcomes.iter().filter(|o| o.is_fulfilled()).count();
        tracing::debug!(
            fulfilled,
            total = outcomes.len(),
            "provider fan-out settled"
        );

        // Fuse uncapped; the cap belongs after ranking so boosted results
        // are not cut in pre-ranking order.
        let fused = fuse(outcomes, usize::MAX);
        Ok(rank(fused, profile, self.config.max_results))
    }
}
