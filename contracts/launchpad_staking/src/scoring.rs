//! Launchpad scoring.
//!
//! A stake scores `principal × tier_scores[lock_tier] × base_score_value`.
//! An owner's score is the sum over every stake they ever created, withdrawn
//! ones included. Scores map to launchpad tiers by counting how many of the
//! ascending thresholds they reach.

use soroban_sdk::{contracttype, Env, Vec};

use crate::config::ScoreConfig;
use crate::errors::ContractError;
use crate::registry::Stake;

/// Per-stake launchpad classification, in owner-index order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchpadTiers {
    pub tiers: Vec<u32>,
    pub multipliers: Vec<u32>,
}

pub fn stake_score(stake: &Stake, cfg: &ScoreConfig) -> Result<u128, ContractError> {
    let weight = cfg.tier_score(stake.lock_tier)?;
    let principal = u128::try_from(stake.principal).map_err(|_| ContractError::InvalidAmount)?;
    principal
        .checked_mul(u128::from(weight))
        .and_then(|s| s.checked_mul(u128::from(cfg.base_score_value)))
        .ok_or(ContractError::Overflow)
}

pub fn total_score(stakes: &Vec<Stake>, cfg: &ScoreConfig) -> Result<u128, ContractError> {
    let mut total: u128 = 0;
    for stake in stakes.iter() {
        total = total
            .checked_add(stake_score(&stake, cfg)?)
            .ok_or(ContractError::Overflow)?;
    }
    Ok(total)
}

/// Number of thresholds `score` reaches; tier 0 means no launchpad access.
pub fn launchpad_tier(score: u128, cfg: &ScoreConfig) -> u32 {
    let mut tier = 0u32;
    for threshold in cfg.thresholds.iter() {
        if score < threshold {
            break;
        }
        tier += 1;
    }
    tier
}

pub fn launchpad_tiers(
    env: &Env,
    stakes: &Vec<Stake>,
    cfg: &ScoreConfig,
) -> Result<LaunchpadTiers, ContractError> {
    let mut tiers = Vec::new(env);
    let mut multipliers = Vec::new(env);
    for stake in stakes.iter() {
        let tier = launchpad_tier(stake_score(&stake, cfg)?, cfg);
        tiers.push_back(tier);
        multipliers.push_back(cfg.multiplier(tier));
    }
    Ok(LaunchpadTiers { tiers, multipliers })
}
