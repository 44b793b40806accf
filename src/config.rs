//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the result cap, per-provider timeout, fan-out
//! concurrency, and how many results each adapter is asked for. The core
//! performs no file or environment I/O; callers own where these values
//! come from.

use crate::error::SearchError;

/// Configuration for a federated search operation.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of results to return after fusion and ranking.
    pub max_results: usize,
    /// Per-provider call timeout in seconds. A call that does not settle
    /// within this window is treated as rejected; the batch continues.
    pub provider_timeout_secs: u64,
    /// Upper bound on provider calls in flight at once.
    pub max_concurrency: usize,
    /// How many results each adapter is asked to return per call.
    pub provider_result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 20,
            provider_timeout_secs: 5,
            max_concurrency: 8,
            provider_result_limit: 10,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `provider_timeout_secs` must be greater than 0
    /// - `max_concurrency` must be greater than 0
    /// - `provider_result_limit` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.provider_timeout_secs == 0 {
            return Err(SearchError::Config(
                "provider_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.max_concurrency == 0 {
            return Err(SearchError::Config(
                "max_concurrency must be greater than 0".into(),
            ));
        }
        if self.provider_result_limit == 0 {
            return Err(SearchError::Config(
                "provider_result_limit must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
