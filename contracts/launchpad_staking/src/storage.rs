use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::config::{self, LockProfile, ScoreConfig};
use crate::errors::ContractError;

pub(crate) const TTL_THRESHOLD: u32 = 5_184_000;
pub(crate) const TTL_EXTEND_TO: u32 = 10_368_000;

/// Storage layout.
///
/// Configuration and the pool live in instance storage; stakes and owner
/// indexes are persistent entries whose TTL is extended whenever they are
/// touched.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Token,
    Pool,
    ScoreConfig,
    LockProfiles,
    NextStakeId,
    Stake(u64),
    OwnerStakes(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

/// The staked token. Absent until the pool is initialised.
pub fn token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::PoolNotOpen)
}

pub fn score_config(env: &Env) -> ScoreConfig {
    env.storage()
        .instance()
        .get(&DataKey::ScoreConfig)
        .unwrap_or_else(|| config::default_score_config(env))
}

pub fn set_score_config(env: &Env, cfg: &ScoreConfig) {
    env.storage().instance().set(&DataKey::ScoreConfig, cfg);
}

pub fn lock_profiles(env: &Env) -> Vec<LockProfile> {
    env.storage()
        .instance()
        .get(&DataKey::LockProfiles)
        .unwrap_or_else(|| config::default_lock_profiles(env))
}

pub fn set_lock_profiles(env: &Env, profiles: &Vec<LockProfile>) {
    env.storage().instance().set(&DataKey::LockProfiles, profiles);
}

/// Profile for `lock_tier`, or `InvalidTierIndex` when out of range.
pub fn lock_profile(env: &Env, lock_tier: u32) -> Result<LockProfile, ContractError> {
    lock_profiles(env)
        .get(lock_tier)
        .ok_or(ContractError::InvalidTierIndex)
}
