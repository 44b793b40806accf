//! Trait definition for pluggable provider backends.
//!
//! Each external search backend (Brave, Perplexity, Exa, Tavily, Apollo)
//! implements [`ProviderAdapter`] outside this crate — credentials, HTTP
//! clients, and payload parsing are the adapter's business. The core only
//! ever sees the trait, injected as a map at construction time.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{Provider, SearchResult};

/// A pluggable search provider backend.
///
/// Implementors perform one backend call per `search` invocation and stamp
/// each returned result's `source` field with their provider wire name.
/// Transport and parse failures must be returned as [`ProviderError`]
/// values — the executor treats any error as a rejected outcome and the
/// batch continues. Implementations must be `Send + Sync` so calls can run
/// concurrently.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Perform a search and return at most `limit` parsed results.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the backend cannot be reached or its
    /// payload cannot be parsed. Errors never abort the surrounding batch.
    async fn search(&self, query: &str, limit: usize)
        -> Result<Vec<SearchResult>, ProviderError>;
}

/// The injected provider registry: one adapter per configured backend.
///
/// Ownership lives with the caller's composition root; the orchestrator
/// only holds shared references. A planned provider missing from the map
/// settles as a rejected outcome, not a panic.
pub type AdapterMap = HashMap<Provider, Arc<dyn ProviderAdapter>>;

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAdapter {
        results: Vec<SearchResult>,
    }

    impl MockAdapter {
        fn failing() -> Self {
            Self { results: vec![] }
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockAdapter {
        async fn search(
            &self,
            _query: &str,
            limit: usize,
        ) -> Result<Vec<SearchResult>, ProviderError> {
            if self.results.is_empty() {
                return Err(ProviderError::Transport("mock adapter failure".into()));
            }
            Ok(self.results.iter().take(limit).cloned().collect())
        }
    }

    fn make_result(url: &str) -> SearchResult {
        SearchResult {
            title: "Test".into(),
            url: url.to_string(),
            snippet: "A test result".into(),
            source: "brave".into(),
            relevance_score: 0.5,
            timestamp: None,
        }
    }

    #[test]
    fn adapter_map_holds_trait_objects() {
        let mut adapters: AdapterMap = HashMap::new();
        adapters.insert(
            Provider::Brave,
            Arc::new(MockAdapter {
                results: vec![make_result("https://a.com")],
            }),
        );
        assert!(adapters.contains_key(&Provider::Brave));
        assert!(!adapters.contains_key(&Provider::Apollo));
    }

    #[tokio::test]
    async fn mock_adapter_respects_limit() {
        let adapter = MockAdapter {
            results: vec![
                make_result("https://a.com"),
                make_result("https://b.com"),
                make_result("https://c.com"),
            ],
        };
        let results = adapter.search("q", 2).await.expect("should succeed");
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn mock_adapter_returns_errors_as_values() {
        let adapter = MockAdapter::failing();
        let result = adapter.search("q", 10).await;
        assert!(matches!(result, Err(ProviderError::Transport(_))));
    }
}
