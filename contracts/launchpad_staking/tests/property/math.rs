#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Properties of the pure reward and scoring functions.

use launchpad_staking::config::{default_score_config, SECONDS_PER_YEAR};
use launchpad_staking::rewards::accrued;
use launchpad_staking::scoring::launchpad_tier;
use proptest::prelude::*;
use soroban_sdk::Env;

proptest! {
    /// Accrual never decreases as time moves forward.
    #[test]
    fn prop_reward_monotonic(
        principal in 1i128..1_000_000_000_000_000_000,
        apr_bps in 0u32..=100_000,
        t1 in 0u64..(10 * SECONDS_PER_YEAR),
        dt in 0u64..SECONDS_PER_YEAR,
    ) {
        let early = accrued(principal, apr_bps, t1).unwrap();
        let late = accrued(principal, apr_bps, t1 + dt).unwrap();
        prop_assert!(late >= early);
        prop_assert!(early >= 0);
    }

    /// A larger principal never earns less over the same period.
    #[test]
    fn prop_reward_monotonic_in_principal(
        principal in 1i128..1_000_000_000_000,
        extra in 0i128..1_000_000_000_000,
        apr_bps in 0u32..=100_000,
        elapsed in 0u64..(5 * SECONDS_PER_YEAR),
    ) {
        let small = accrued(principal, apr_bps, elapsed).unwrap();
        let large = accrued(principal + extra, apr_bps, elapsed).unwrap();
        prop_assert!(large >= small);
    }

    /// Nothing accrues with zero elapsed time.
    #[test]
    fn prop_zero_elapsed_zero_reward(principal in 1i128..i128::MAX, apr_bps in 0u32..=100_000) {
        prop_assert_eq!(accrued(principal, apr_bps, 0), Ok(0));
    }

    /// Launchpad tier is non-decreasing in score.
    #[test]
    fn prop_launchpad_tier_monotonic(a in any::<u128>(), b in any::<u128>()) {
        let env = Env::default();
        let cfg = default_score_config(&env);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(launchpad_tier(lo, &cfg) <= launchpad_tier(hi, &cfg));
        prop_assert!(launchpad_tier(hi, &cfg) <= cfg.thresholds.len());
    }
}
