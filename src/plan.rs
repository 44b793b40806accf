//! Depth-tier planning: which providers to invoke, with which queries.
//!
//! Each [`SearchMode`] maps to an ordered invocation list. The order is
//! load-bearing twice over: it is the concurrency-independent order fusion
//! walks outcomes in, and it is the deduplication priority — on duplicate
//! URLs the earlier-planned provider's entry wins. Tiers are strict
//! supersets of one another; `SuperDeep` additionally re-queries the
//! baseline web provider with widening suffixes to improve recall.

use crate::types::{Provider, ProviderInvocation, SearchMode};

/// Query suffixes for the extra baseline invocations under
/// [`SearchMode::SuperDeep`].
const WIDENING_SUFFIXES: &[&str] = &[" research", " analysis"];

/// Providers consulted in every tier, in dedup-priority order.
const NORMAL_PROVIDERS: &[Provider] = &[Provider::Brave, Provider::Perplexity, Provider::Exa];

/// Specialised providers added by `Deep` and above.
const DEEP_EXTRA_PROVIDERS: &[Provider] = &[Provider::Tavily, Provider::Apollo];

/// Plan the ordered list of provider invocations for a depth tier.
///
/// - `Normal`: baseline web provider plus two general-purpose providers
///   (3 invocations).
/// - `Deep`: `Normal`'s set plus two specialised providers (5 invocations).
/// - `SuperDeep`: `Deep`'s set plus repeat baseline invocations with
///   [`WIDENING_SUFFIXES`] appended (7 invocations).
pub fn plan(mode: SearchMode, biased_query: &str) -> Vec<ProviderInvocation> {
    let mut invocations: Vec<ProviderInvocation> = NORMAL_PROVIDERS
        .iter()
        .map(|p| invoke(*p, biased_query.to_string()))
        .collect();

    if matches!(mode, SearchMode::Deep | SearchMode::SuperDeep) {
        invocations.extend(
            DEEP_EXTRA_PROVIDERS
                .iter()
                .map(|p| invoke(*p, biased_query.to_string())),
        );
    }

    if matches!(mode, SearchMode::SuperDeep) {
        invocations.extend(
            WIDENING_SUFFIXES
                .iter()
                .map(|suffix| invoke(Provider::Brave, format!("{biased_query}{suffix}"))),
        );
    }

    invocations
}

fn invoke(provider: Provider, query: String) -> ProviderInvocation {
    ProviderInvocation { provider, query }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn providers_of(invocations: &[ProviderInvocation]) -> HashSet<Provider> {
        invocations.iter().map(|i| i.provider).collect()
    }

    #[test]
    fn normal_plans_three_invocations() {
        let plan = plan(SearchMode::Normal, "q");
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].provider, Provider::Brave);
    }

    #[test]
    fn deep_plans_five_invocations() {
        let plan = plan(SearchMode::Deep, "q");
        assert_eq!(plan.len(), 5);
    }

    #[test]
    fn super_deep_plans_seven_invocations() {
        let plan = plan(SearchMode::SuperDeep, "q");
        assert_eq!(plan.len(), 7);
    }

    #[test]
    fn tiers_are_monotonic_supersets() {
        let normal = providers_of(&plan(SearchMode::Normal, "q"));
        let deep = providers_of(&plan(SearchMode::Deep, "q"));
        let super_deep = providers_of(&plan(SearchMode::SuperDeep, "q"));

        assert!(normal.is_subset(&deep));
        assert!(deep.is_subset(&super_deep));
    }

    #[test]
    fn deep_prefix_matches_normal_plan() {
        // The first invocations of a deeper tier are exactly the shallower plan.
        let normal = plan(SearchMode::Normal, "q");
        let deep = plan(SearchMode::Deep, "q");
        assert_eq!(&deep[..normal.len()], &normal[..]);

        let super_deep = plan(SearchMode::SuperDeep, "q");
        assert_eq!(&super_deep[..deep.len()], &deep[..]);
    }

    #[test]
    fn all_plain_invocations_carry_the_biased_query() {
        let plan = plan(SearchMode::Deep, "acme business strategy");
        for invocation in &plan {
            assert_eq!(invocation.query, "acme business strategy");
        }
    }

    #[test]
    fn super_deep_widens_with_suffixed_baseline_queries() {
        let plan = plan(SearchMode::SuperDeep, "acme");
        let widened: Vec<&ProviderInvocation> = plan[5..].iter().collect();
        assert_eq!(widened.len(), 2);
        for invocation in &widened {
            assert_eq!(invocation.provider, Provider::Brave);
        }
        assert_eq!(widened[0].query, "acme research");
        assert_eq!(widened[1].query, "acme analysis");
    }

    #[test]
    fn planning_is_deterministic() {
        let a = plan(SearchMode::SuperDeep, "same query");
        let b = plan(SearchMode::SuperDeep, "same query");
        assert_eq!(a, b);
    }
}
