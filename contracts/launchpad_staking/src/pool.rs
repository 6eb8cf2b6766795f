//! Reward pool: the funded balance that rewards are paid from, and the switch
//! that gates token-moving operations.

use soroban_sdk::{contracttype, Env};

use crate::errors::ContractError;
use crate::storage::DataKey;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPool {
    pub is_open: bool,
    /// Reward tokens held in custody and not yet paid out.
    pub funded_amount: i128,
}

impl RewardPool {
    pub fn opened(amount: i128) -> Result<Self, ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        Ok(Self {
            is_open: true,
            funded_amount: amount,
        })
    }

    pub fn require_open(&self) -> Result<(), ContractError> {
        if !self.is_open {
            return Err(ContractError::PoolNotOpen);
        }
        Ok(())
    }

    pub fn credit(&mut self, amount: i128) -> Result<(), ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        self.funded_amount = self
            .funded_amount
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        Ok(())
    }

    /// Takes `reward` out of the funded balance. A zero reward is a no-op.
    pub fn debit(&mut self, reward: i128) -> Result<(), ContractError> {
        if reward > self.funded_amount {
            return Err(ContractError::InsufficientRewardPool);
        }
        self.funded_amount -= reward;
        Ok(())
    }

    /// Takes up to `reward` out of the funded balance and returns what was
    /// taken.
    pub fn pay_out(&mut self, reward: i128) -> i128 {
        let paid = reward.clamp(0, self.funded_amount.max(0));
        self.funded_amount -= paid;
        paid
    }
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Pool)
}

pub fn load(env: &Env) -> Option<RewardPool> {
    env.storage().instance().get(&DataKey::Pool)
}

/// Loads the pool, treating an uninitialised contract as a closed pool.
pub fn load_or_closed(env: &Env) -> RewardPool {
    load(env).unwrap_or(RewardPool {
        is_open: false,
        funded_amount: 0,
    })
}

pub fn save(env: &Env, pool: &RewardPool) {
    env.storage().instance().set(&DataKey::Pool, pool);
}
