//! Error types for the persona-search crate.
//!
//! Two tiers: [`ProviderError`] describes a single backend call failing and
//! travels as a value inside a `ProviderOutcome` — it never surfaces to the
//! caller of `search`. [`SearchError`] covers caller-programming errors
//! (bad configuration, unknown persona or mode) that fail fast instead of
//! being retried.

use crate::types::Provider;

/// A failure from a single provider call.
///
/// Recovered locally during fan-out: a rejected call contributes an empty
/// result set to fusion and is logged at warn level, nothing more.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// Network-level failure reaching the backend.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend responded but its payload could not be parsed.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The call did not settle within the configured timeout.
    #[error("provider timed out after {0}s")]
    Timeout(u64),

    /// No adapter was registered for the planned provider.
    #[error("no adapter configured for provider: {0}")]
    NotConfigured(Provider),
}

/// Errors surfaced to callers of `search`.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The requested persona has no profile in the injected table.
    #[error("unknown persona: {0}")]
    UnknownPersona(String),

    /// The requested mode string did not name a depth tier.
    #[error("unknown mode: {0}")]
    UnknownMode(String),
}

/// Convenience type alias for persona-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
