//! Stake records and the per-owner index.
//!
//! Stakes are stored densely under a registry-wide monotonic id; each owner
//! additionally has an ordered list of every id they created. Withdrawn
//! stakes stay in both places so historical scores remain computable.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::ContractError;
use crate::storage::{self, DataKey};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum StakeStatus {
    Active = 0,
    Unlocking = 1,
    Withdrawn = 2,
}

impl StakeStatus {
    /// The only status reachable from `self` through [`Stake::transition`].
    pub fn next(&self) -> Option<StakeStatus> {
        match self {
            StakeStatus::Active => Some(StakeStatus::Unlocking),
            StakeStatus::Unlocking => Some(StakeStatus::Withdrawn),
            StakeStatus::Withdrawn => None,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stake {
    pub id: u64,
    pub owner: Address,
    pub principal: i128,
    /// Creation time, reset by every restake.
    pub deposited_at: u64,
    pub lock_tier: u32,
    pub unlock_initiated_at: Option<u64>,
    pub status: StakeStatus,
}

impl Stake {
    /// Moves the stake one step forward.
    ///
    /// Anything other than `Active → Unlocking` or `Unlocking → Withdrawn`
    /// fails with `InvalidTransition` and leaves the stake untouched.
    pub fn transition(&mut self, to: StakeStatus) -> Result<(), ContractError> {
        if self.status.next() != Some(to) {
            return Err(ContractError::InvalidTransition);
        }
        self.status = to;
        Ok(())
    }

    pub fn ensure_owner(&self, caller: &Address) -> Result<(), ContractError> {
        if self.owner != *caller {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Folds `reward` into the principal and re-opens the position under
    /// `new_tier`, keeping its id.
    ///
    /// This is the one path that returns a stake to `Active`; a withdrawn
    /// stake cannot be restaked.
    pub fn restake(&mut self, reward: i128, new_tier: u32, now: u64) -> Result<(), ContractError> {
        if self.status == StakeStatus::Withdrawn {
            return Err(ContractError::InvalidTransition);
        }
        if reward <= 0 {
            return Err(ContractError::NothingToRestake);
        }
        self.principal = self
            .principal
            .checked_add(reward)
            .ok_or(ContractError::Overflow)?;
        self.deposited_at = now;
        self.lock_tier = new_tier;
        self.unlock_initiated_at = None;
        self.status = StakeStatus::Active;
        Ok(())
    }
}

fn next_stake_id(env: &Env) -> Result<u64, ContractError> {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextStakeId)
        .unwrap_or(0);
    let next = id.checked_add(1).ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&DataKey::NextStakeId, &next);
    Ok(id)
}

/// Number of stakes ever created.
pub fn stake_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextStakeId)
        .unwrap_or(0)
}

/// Allocates an id, stores a fresh `Active` stake and indexes it under `owner`.
pub fn create_stake(
    env: &Env,
    owner: &Address,
    principal: i128,
    lock_tier: u32,
    now: u64,
) -> Result<Stake, ContractError> {
    if principal <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let stake = Stake {
        id: next_stake_id(env)?,
        owner: owner.clone(),
        principal,
        deposited_at: now,
        lock_tier,
        unlock_initiated_at: None,
        status: StakeStatus::Active,
    };
    save_stake(env, &stake);

    let mut ids = stake_ids_by_owner(env, owner);
    ids.push_back(stake.id);
    let index_key = DataKey::OwnerStakes(owner.clone());
    env.storage().persistent().set(&index_key, &ids);
    storage::extend_persistent(env, &index_key);

    Ok(stake)
}

pub fn get_stake(env: &Env, id: u64) -> Result<Stake, ContractError> {
    let key = DataKey::Stake(id);
    let stake: Stake = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::StakeNotFound)?;
    storage::extend_persistent(env, &key);
    Ok(stake)
}

pub fn save_stake(env: &Env, stake: &Stake) {
    let key = DataKey::Stake(stake.id);
    env.storage().persistent().set(&key, stake);
    storage::extend_persistent(env, &key);
}

/// Every id `owner` has created, oldest first. Empty for unknown owners.
pub fn stake_ids_by_owner(env: &Env, owner: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerStakes(owner.clone()))
        .unwrap_or(Vec::new(env))
}

/// Loads every stake `owner` has created, oldest first.
pub fn stakes_by_owner(env: &Env, owner: &Address) -> Result<Vec<Stake>, ContractError> {
    let mut stakes = Vec::new(env);
    for id in stake_ids_by_owner(env, owner).iter() {
        stakes.push_back(get_stake(env, id)?);
    }
    Ok(stakes)
}
