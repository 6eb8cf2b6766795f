#![allow(deprecated)] // events().publish migration tracked separately

use common::AdminRole;
use soroban_sdk::{symbol_short, Address, Env, Vec};

use crate::config::LockProfile;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is opened.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
    pub funded_amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub stake_id: u64,
    pub owner: Address,
    pub amount: i128,
    pub lock_tier: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnlockInitiatedEvent {
    pub stake_id: u64,
    pub owner: Address,
    pub withdrawable_at: u64,
    pub timestamp: u64,
}

/// Fired when a stake is paid out; `reward` is included in `amount`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub stake_id: u64,
    pub owner: Address,
    pub amount: i128,
    pub reward: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RestakedEvent {
    pub stake_id: u64,
    pub owner: Address,
    pub reward: i128,
    pub new_principal: i128,
    pub new_tier: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolFundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub funded_amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolStatusEvent {
    pub caller: Address,
    pub is_open: bool,
    pub timestamp: u64,
}

/// Fired for every scoring-table change. `tier` is `None` for the base value.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScoreSetEvent {
    pub tier: Option<u32>,
    pub value: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchpadTiersSetEvent {
    pub thresholds: Vec<u128>,
    pub multipliers: Vec<u32>,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockProfileSetEvent {
    pub tier: u32,
    pub profile: LockProfile,
    pub timestamp: u64,
}

/// `role` carries the granted role's rank; `None` on revocation.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub caller: Address,
    pub target: Address,
    pub role: Option<u32>,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, token: Address, funded_amount: i128) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            token,
            funded_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposited(env: &Env, stake_id: u64, owner: Address, amount: i128, lock_tier: u32) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), owner.clone()),
        DepositedEvent {
            stake_id,
            owner,
            amount,
            lock_tier,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unlock_initiated(env: &Env, stake_id: u64, owner: Address, withdrawable_at: u64) {
    env.events().publish(
        (symbol_short!("UNLOCK"), owner.clone()),
        UnlockInitiatedEvent {
            stake_id,
            owner,
            withdrawable_at,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, stake_id: u64, owner: Address, amount: i128, reward: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), owner.clone()),
        WithdrawnEvent {
            stake_id,
            owner,
            amount,
            reward,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_restaked(
    env: &Env,
    stake_id: u64,
    owner: Address,
    reward: i128,
    new_principal: i128,
    new_tier: u32,
) {
    env.events().publish(
        (symbol_short!("RESTAKED"), owner.clone()),
        RestakedEvent {
            stake_id,
            owner,
            reward,
            new_principal,
            new_tier,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_funded(env: &Env, funder: Address, amount: i128, funded_amount: i128) {
    env.events().publish(
        (symbol_short!("FUNDED"), funder.clone()),
        PoolFundedEvent {
            funder,
            amount,
            funded_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_status(env: &Env, caller: Address, is_open: bool) {
    env.events().publish(
        (symbol_short!("POOL_OPEN"),),
        PoolStatusEvent {
            caller,
            is_open,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_base_score_set(env: &Env, value: u64) {
    env.events().publish(
        (symbol_short!("BASE_SCR"),),
        ScoreSetEvent {
            tier: None,
            value,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tier_score_set(env: &Env, tier: u32, value: u64) {
    env.events().publish(
        (symbol_short!("TIER_SCR"),),
        ScoreSetEvent {
            tier: Some(tier),
            value,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_launchpad_tiers_set(env: &Env, thresholds: Vec<u128>, multipliers: Vec<u32>) {
    env.events().publish(
        (symbol_short!("LP_TIERS"),),
        LaunchpadTiersSetEvent {
            thresholds,
            multipliers,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_lock_profile_set(env: &Env, tier: u32, profile: LockProfile) {
    env.events().publish(
        (symbol_short!("LOCK_PROF"),),
        LockProfileSetEvent {
            tier,
            profile,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_changed(env: &Env, caller: Address, target: Address, role: Option<AdminRole>) {
    let topic = if role.is_some() {
        symbol_short!("ROLE_SET")
    } else {
        symbol_short!("ROLE_DEL")
    };
    env.events().publish(
        (topic, target.clone()),
        RoleChangedEvent {
            caller,
            target,
            role: role.map(|r| r.rank()),
            timestamp: env.ledger().timestamp(),
        },
    );
}
