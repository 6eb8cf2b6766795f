//! Tunable tables and their defaults.
//!
//! Both tables live in instance storage and are written once at
//! initialisation. Admin setters replace individual entries; every reward,
//! cooldown and score computation reads the current table, so changes apply
//! to existing stakes from the next query on.

use soroban_sdk::{contracttype, vec, Env, Vec};

use crate::errors::ContractError;

pub const DAY: u64 = 86_400;
pub const SECONDS_PER_YEAR: u64 = 365 * DAY;

/// Denominator for `apr_bps` (10_000 bps = 100 %).
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Upper bound accepted for a lock profile's APR (1000 %).
pub const MAX_APR_BPS: u32 = 100_000;

/// Number of lock tiers; valid tier indices are `0..LOCK_TIER_COUNT`.
pub const LOCK_TIER_COUNT: u32 = 5;

/// Per-lock-tier parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockProfile {
    /// Nominal lock length in seconds. Informative only; unlocking may be
    /// initiated at any time.
    pub lock_duration: u64,
    /// Seconds that must pass after `initiate_unlock` before `withdraw`.
    pub cooldown: u64,
    /// Annualised reward rate in basis points.
    pub apr_bps: u32,
}

impl LockProfile {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.apr_bps > MAX_APR_BPS {
            return Err(ContractError::InvalidConfig);
        }
        Ok(())
    }
}

/// Scoring weights and launchpad-tier boundaries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScoreConfig {
    /// Global multiplier applied to every stake score.
    pub base_score_value: u64,
    /// Score weight per lock tier, indexed by `lock_tier`.
    pub tier_scores: Vec<u64>,
    /// Strictly ascending scores at which launchpad tiers 1, 2, ... begin.
    pub thresholds: Vec<u128>,
    /// Allocation multiplier per launchpad tier (`thresholds.len() + 1` entries).
    pub multipliers: Vec<u32>,
}

impl ScoreConfig {
    /// Weight for `lock_tier`, or `InvalidTierIndex` when out of range.
    pub fn tier_score(&self, lock_tier: u32) -> Result<u64, ContractError> {
        self.tier_scores
            .get(lock_tier)
            .ok_or(ContractError::InvalidTierIndex)
    }

    /// Multiplier for a launchpad tier; tiers past the table earn nothing.
    pub fn multiplier(&self, launchpad_tier: u32) -> u32 {
        self.multipliers.get(launchpad_tier).unwrap_or(0)
    }
}

/// Checks a launchpad tier table before it is stored.
pub fn validate_launchpad_tiers(
    thresholds: &Vec<u128>,
    multipliers: &Vec<u32>,
) -> Result<(), ContractError> {
    if multipliers.len() != thresholds.len().saturating_add(1) {
        return Err(ContractError::InvalidConfig);
    }
    let mut previous: Option<u128> = None;
    for threshold in thresholds.iter() {
        if let Some(prev) = previous {
            if threshold <= prev {
                return Err(ContractError::InvalidConfig);
            }
        }
        previous = Some(threshold);
    }
    Ok(())
}

pub fn default_lock_profiles(env: &Env) -> Vec<LockProfile> {
    vec![
        env,
        LockProfile {
            lock_duration: 30 * DAY,
            cooldown: DAY,
            apr_bps: 500,
        },
        LockProfile {
            lock_duration: 60 * DAY,
            cooldown: 2 * DAY,
            apr_bps: 1_000,
        },
        LockProfile {
            lock_duration: 90 * DAY,
            cooldown: 3 * DAY,
            apr_bps: 1_500,
        },
        LockProfile {
            lock_duration: 180 * DAY,
            cooldown: 5 * DAY,
            apr_bps: 2_500,
        },
        LockProfile {
            lock_duration: 365 * DAY,
            cooldown: 7 * DAY,
            apr_bps: 4_000,
        },
    ]
}

pub fn default_score_config(env: &Env) -> ScoreConfig {
    ScoreConfig {
        base_score_value: 1,
        tier_scores: vec![env, 1u64, 2, 3, 5, 8],
        thresholds: vec![env, 1_000u128, 10_000, 50_000, 250_000],
        multipliers: vec![env, 0u32, 1, 2, 4, 8],
    }
}
