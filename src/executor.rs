//! Concurrent fan-out with join semantics over a bounded worker pool.
//!
//! Every planned invocation runs against its adapter with an individual
//! timeout; the executor waits for all of them to settle and returns
//! tagged outcomes in **planned order**, independent of completion order.
//! No single provider failure aborts the batch — timeout, adapter error,
//! and a missing adapter all become rejected outcomes.

use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::adapter::AdapterMap;
use crate::config::SearchConfig;
use crate::error::ProviderError;
use crate::types::{ProviderInvocation, ProviderOutcome};

/// Execute all invocations concurrently and wait for every one to settle.
///
/// Concurrency is bounded by `config.max_concurrency`; each call is
/// wrapped in a `config.provider_timeout_secs` timeout. The returned
/// outcomes are ordered exactly as `invocations` was, which is what makes
/// downstream fusion deterministic regardless of network timing.
pub async fn execute(
    invocations: Vec<ProviderInvocation>,
    adapters: &AdapterMap,
    config: &SearchConfig,
) -> Vec<ProviderOutcome> {
    let timeout = Duration::from_secs(config.provider_timeout_secs);
    let timeout_secs = config.provider_timeout_secs;
    let limit = config.provider_result_limit;

    let outcomes: Vec<ProviderOutcome> = stream::iter(invocations.into_iter().map(|invocation| {
        let adapter = adapters.get(&invocation.provider).cloned();
        async move {
            let outcome = match adapter {
                None => Err(ProviderError::NotConfigured(invocation.provider)),
                Some(adapter) => {
                    match tokio::time::timeout(timeout, adapter.search(&invocation.query, limit))
                        .await
                    {
                        Ok(result) => result,
                        Err(_) => Err(ProviderError::Timeout(timeout_secs)),
                    }
                }
            };
            ProviderOutcome {
                invocation,
                outcome,
            }
        }
    }))
    .buffered(config.max_concurrency)
    .collect()
    .await;

    for outcome in &outcomes {
        match &outcome.outcome {
            Ok(results) => {
                tracing::debug!(
                    provider = %outcome.invocation.provider,
                    count = results.len(),
                    "provider returned results"
                );
            }
            Err(err) => {
                tracing::warn!(
                    provider = %outcome.invocation.provider,
                    error = %err,
                    "provider call rejected"
                );
            }
        }
    }

    outcomes
}
