//! # persona-search
//!
//! Persona-weighted federated web search: fan a query out to several
//! independent search backends concurrently, tolerate partial provider
//! failure, deduplicate the merged results by URL identity, and re-rank
//! with persona-specific relevance boosts.
//!
//! ## Design
//!
//! - Providers are external: callers inject a map of [`ProviderAdapter`]
//!   implementations; this crate never builds HTTP clients or handles keys
//! - Depth tiers (`normal`, `deep`, `super_deep`) are strict supersets,
//!   trading latency for recall
//! - Fan-out runs through a bounded worker pool with join semantics —
//!   every call settles, failures become values, nothing aborts the batch
//! - Fusion walks outcomes in planned provider order, so output is
//!   deterministic regardless of which backend answers first
//! - Ranking adds persona keyword and source-affinity boosts to the
//!   provider-supplied base score; boosts are additive, never negative
//!
//! ## Security
//!
//! - No credentials pass through this crate
//! - No network listeners — this is a library, not a server
//! - Search queries are logged only at trace level
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> persona_search::Result<()> {
//! use persona_search::{AdapterMap, Persona, SearchConfig, SearchMode, SearchOrchestrator};
//!
//! let adapters = AdapterMap::new(); // populated by the composition root
//! let orchestrator = SearchOrchestrator::with_builtin_profiles(adapters, SearchConfig::default());
//!
//! let results = orchestrator
//!     .search("pricing feedback", Persona::Karen, SearchMode::Normal)
//!     .await?;
//! for result in &results {
//!     println!("{}: {}", result.title, result.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod bias;
pub mod config;
pub mod error;
pub mod executor;
pub mod orchestrator;
pub mod persona;
pub mod plan;
pub mod types;

pub use adapter::{AdapterMap, ProviderAdapter};
pub use config::SearchConfig;
pub use error::{ProviderError, Result, SearchError};
pub use orchestrator::SearchOrchestrator;
pub use persona::{builtin_profiles, Persona, PersonaProfile};
pub use types::{Provider, ProviderInvocation, ProviderOutcome, SearchMode, SearchResult};
