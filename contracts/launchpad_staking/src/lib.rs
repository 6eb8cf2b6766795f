#![no_std]

pub mod config;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod pool;
pub mod registry;
pub mod rewards;
pub mod scoring;
pub mod storage;
pub mod unlock;

use common::roles::{self, AdminRole};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub use config::{LockProfile, ScoreConfig};
pub use errors::ContractError;
pub use pool::RewardPool;
pub use registry::{Stake, StakeStatus};
pub use scoring::LaunchpadTiers;

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct LaunchpadStaking;

#[contractimpl]
impl LaunchpadStaking {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Open the reward pool.
    ///
    /// * `admin`  – funds the pool and becomes the `Super` admin.
    /// * `token`  – SEP-41 token that is staked and paid out as reward.
    /// * `amount` – initial reward funding pulled from `admin`.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        if pool::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        let reward_pool = RewardPool::opened(amount)?;
        ledger::pull(&env, &token, &admin, amount);

        storage::set_token(&env, &token);
        pool::save(&env, &reward_pool);
        storage::set_score_config(&env, &config::default_score_config(&env));
        storage::set_lock_profiles(&env, &config::default_lock_profiles(&env));
        storage::extend_instance(&env);

        roles::bootstrap_super(&env, &admin);

        events::publish_initialized(&env, admin, token, amount);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` tokens under `lock_tier` and return the new stake id.
    pub fn deposit(
        env: Env,
        caller: Address,
        amount: i128,
        lock_tier: u32,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        pool::load_or_closed(&env).require_open()?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        storage::lock_profile(&env, lock_tier)?;

        let token = storage::token(&env)?;
        ledger::pull(&env, &token, &caller, amount);

        let now = env.ledger().timestamp();
        let stake = registry::create_stake(&env, &caller, amount, lock_tier, now)?;
        storage::extend_instance(&env);

        events::publish_deposited(&env, stake.id, caller, amount, lock_tier);

        Ok(stake.id)
    }

    /// Start the cooldown on an active stake. Allowed at any time after
    /// deposit; the stake keeps accruing rewards while unlocking.
    pub fn initiate_unlock(env: Env, caller: Address, id: u64) -> Result<(), ContractError> {
        caller.require_auth();

        let mut stake = registry::get_stake(&env, id)?;
        stake.ensure_owner(&caller)?;
        let profile = storage::lock_profile(&env, stake.lock_tier)?;

        let now = env.ledger().timestamp();
        unlock::initiate_unlock(&mut stake, now)?;
        registry::save_stake(&env, &stake);

        let withdrawable_at = unlock::withdrawable_at(&stake, &profile).unwrap_or(now);
        events::publish_unlock_initiated(&env, id, caller, withdrawable_at);

        Ok(())
    }

    /// Pay out principal plus accrued reward once the cooldown has elapsed.
    /// The reward is capped at what the pool still holds; the principal is
    /// always returned. Returns the amount transferred.
    pub fn withdraw(env: Env, caller: Address, id: u64) -> Result<i128, ContractError> {
        caller.require_auth();

        let mut reward_pool = pool::load_or_closed(&env);
        reward_pool.require_open()?;

        let mut stake = registry::get_stake(&env, id)?;
        stake.ensure_owner(&caller)?;
        let profile = storage::lock_profile(&env, stake.lock_tier)?;

        let now = env.ledger().timestamp();
        let reward = rewards::calculate_reward(&stake, &profile, now)?;
        unlock::withdraw(&mut stake, &profile, now)?;

        let reward = reward_pool.pay_out(reward);
        let payout = stake
            .principal
            .checked_add(reward)
            .ok_or(ContractError::Overflow)?;

        // Effects before the transfer.
        registry::save_stake(&env, &stake);
        pool::save(&env, &reward_pool);
        storage::extend_instance(&env);

        let token = storage::token(&env)?;
        ledger::push(&env, &token, &caller, payout);

        events::publish_withdrawn(&env, id, caller, payout, reward);

        Ok(payout)
    }

    /// Fold the accrued reward into the stake and re-lock it under `new_tier`.
    ///
    /// The stake keeps its id, becomes `Active` again and restarts accrual
    /// from now. Fails with `NothingToRestake` while no reward has accrued.
    pub fn restake(
        env: Env,
        caller: Address,
        id: u64,
        new_tier: u32,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut stake = registry::get_stake(&env, id)?;
        stake.ensure_owner(&caller)?;
        storage::lock_profile(&env, new_tier)?;
        let profile = storage::lock_profile(&env, stake.lock_tier)?;

        let now = env.ledger().timestamp();
        let reward = rewards::calculate_reward(&stake, &profile, now)?;
        stake.restake(reward, new_tier, now)?;

        let mut reward_pool = pool::load(&env).ok_or(ContractError::PoolNotOpen)?;
        reward_pool.debit(reward)?;

        registry::save_stake(&env, &stake);
        pool::save(&env, &reward_pool);
        storage::extend_instance(&env);

        events::publish_restaked(&env, id, caller, reward, stake.principal, new_tier);

        Ok(())
    }

    // ── Reward pool ─────────────────────────────────────────────────────────

    /// Add reward funding. Anyone may top up an initialised pool.
    pub fn fund_pool(env: Env, funder: Address, amount: i128) -> Result<(), ContractError> {
        funder.require_auth();

        let mut reward_pool = pool::load(&env).ok_or(ContractError::PoolNotOpen)?;
        reward_pool.credit(amount)?;

        let token = storage::token(&env)?;
        ledger::pull(&env, &token, &funder, amount);
        pool::save(&env, &reward_pool);

        events::publish_pool_funded(&env, funder, amount, reward_pool.funded_amount);

        Ok(())
    }

    /// Pause or resume deposits and withdrawals. Requires `Operator`.
    pub fn set_pool_open(env: Env, caller: Address, open: bool) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_role(&env, &caller, AdminRole::Operator)?;

        let mut reward_pool = pool::load(&env).ok_or(ContractError::PoolNotOpen)?;
        reward_pool.is_open = open;
        pool::save(&env, &reward_pool);

        events::publish_pool_status(&env, caller, open);

        Ok(())
    }

    pub fn is_open(env: Env) -> bool {
        pool::load_or_closed(&env).is_open
    }

    pub fn get_pool(env: Env) -> RewardPool {
        pool::load_or_closed(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        storage::token(&env)
    }

    /// Tokens held by the contract: live principal plus unpaid reward funding.
    pub fn get_custody_balance(env: Env) -> Result<i128, ContractError> {
        let token = storage::token(&env)?;
        Ok(ledger::custody_balance(&env, &token))
    }

    // ── Stake queries ───────────────────────────────────────────────────────

    pub fn get_stake(env: Env, id: u64) -> Result<Stake, ContractError> {
        registry::get_stake(&env, id)
    }

    /// Ids of every stake `owner` created, in creation order.
    pub fn get_stake_ids_by_owner(env: Env, owner: Address) -> Vec<u64> {
        registry::stake_ids_by_owner(&env, &owner)
    }

    pub fn get_stake_count(env: Env) -> u64 {
        registry::stake_count(&env)
    }

    /// Reward accrued on stake `id` at the current ledger time. Read-only.
    pub fn calculate_reward(env: Env, id: u64) -> Result<i128, ContractError> {
        let stake = registry::get_stake(&env, id)?;
        let profile = storage::lock_profile(&env, stake.lock_tier)?;
        rewards::calculate_reward(&stake, &profile, env.ledger().timestamp())
    }

    pub fn is_withdrawable(env: Env, id: u64) -> Result<bool, ContractError> {
        let stake = registry::get_stake(&env, id)?;
        let profile = storage::lock_profile(&env, stake.lock_tier)?;
        Ok(unlock::is_withdrawable(
            &stake,
            &profile,
            env.ledger().timestamp(),
        ))
    }

    /// When stake `id` may be withdrawn; `None` unless it is unlocking.
    pub fn get_withdrawable_at(env: Env, id: u64) -> Result<Option<u64>, ContractError> {
        let stake = registry::get_stake(&env, id)?;
        let profile = storage::lock_profile(&env, stake.lock_tier)?;
        Ok(unlock::withdrawable_at(&stake, &profile))
    }

    // ── Launchpad scoring ───────────────────────────────────────────────────

    /// Sum of the scores of every stake `owner` ever created.
    pub fn get_total_score(env: Env, owner: Address) -> Result<u128, ContractError> {
        let stakes = registry::stakes_by_owner(&env, &owner)?;
        scoring::total_score(&stakes, &storage::score_config(&env))
    }

    pub fn get_tier_by_owner(env: Env, owner: Address) -> Result<u32, ContractError> {
        let cfg = storage::score_config(&env);
        let stakes = registry::stakes_by_owner(&env, &owner)?;
        let score = scoring::total_score(&stakes, &cfg)?;
        Ok(scoring::launchpad_tier(score, &cfg))
    }

    /// Launchpad tier earned by a single stake on its own.
    pub fn calculate_launchpad_tier(env: Env, id: u64) -> Result<u32, ContractError> {
        let cfg = storage::score_config(&env);
        let stake = registry::get_stake(&env, id)?;
        let score = scoring::stake_score(&stake, &cfg)?;
        Ok(scoring::launchpad_tier(score, &cfg))
    }

    pub fn get_launchpad_tiers_by_owner(
        env: Env,
        owner: Address,
    ) -> Result<LaunchpadTiers, ContractError> {
        let stakes = registry::stakes_by_owner(&env, &owner)?;
        scoring::launchpad_tiers(&env, &stakes, &storage::score_config(&env))
    }

    pub fn get_score_config(env: Env) -> ScoreConfig {
        storage::score_config(&env)
    }

    pub fn get_lock_profile(env: Env, tier: u32) -> Result<LockProfile, ContractError> {
        storage::lock_profile(&env, tier)
    }

    // ── Configuration (requires `Config`) ───────────────────────────────────

    pub fn set_base_score_value(env: Env, caller: Address, value: u64) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_role(&env, &caller, AdminRole::Config)?;

        let mut cfg = storage::score_config(&env);
        cfg.base_score_value = value;
        storage::set_score_config(&env, &cfg);

        events::publish_base_score_set(&env, value);

        Ok(())
    }

    pub fn set_tier_score(
        env: Env,
        caller: Address,
        tier: u32,
        value: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_role(&env, &caller, AdminRole::Config)?;

        let mut cfg = storage::score_config(&env);
        if tier >= cfg.tier_scores.len() {
            return Err(ContractError::InvalidTierIndex);
        }
        cfg.tier_scores.set(tier, value);
        storage::set_score_config(&env, &cfg);

        events::publish_tier_score_set(&env, tier, value);

        Ok(())
    }

    /// Replace the launchpad tier table.
    ///
    /// `thresholds` must be strictly ascending and `multipliers` must hold
    /// one entry per resulting tier, tier 0 included.
    pub fn set_launchpad_tiers(
        env: Env,
        caller: Address,
        thresholds: Vec<u128>,
        multipliers: Vec<u32>,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_role(&env, &caller, AdminRole::Config)?;
        config::validate_launchpad_tiers(&thresholds, &multipliers)?;

        let mut cfg = storage::score_config(&env);
        cfg.thresholds = thresholds.clone();
        cfg.multipliers = multipliers.clone();
        storage::set_score_config(&env, &cfg);

        events::publish_launchpad_tiers_set(&env, thresholds, multipliers);

        Ok(())
    }

    /// Replace the lock profile of `tier`. Existing stakes on that tier use
    /// the new cooldown and rate from the next call on.
    pub fn set_lock_profile(
        env: Env,
        caller: Address,
        tier: u32,
        profile: LockProfile,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_role(&env, &caller, AdminRole::Config)?;
        profile.validate()?;

        let mut profiles = storage::lock_profiles(&env);
        if tier >= profiles.len() {
            return Err(ContractError::InvalidTierIndex);
        }
        profiles.set(tier, profile.clone());
        storage::set_lock_profiles(&env, &profiles);

        events::publish_lock_profile_set(&env, tier, profile);

        Ok(())
    }

    // ── Admin roles ─────────────────────────────────────────────────────────

    /// Only a `Super` admin may grant roles.
    pub fn grant_role(
        env: Env,
        caller: Address,
        target: Address,
        role: AdminRole,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        if !roles::grant(&env, &caller, &target, role) {
            return Err(ContractError::Unauthorized);
        }
        events::publish_role_changed(&env, caller, target, Some(role));
        Ok(())
    }

    /// Only a `Super` admin may revoke roles, and never its own.
    pub fn revoke_role(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        caller.require_auth();
        if !roles::revoke(&env, &caller, &target) {
            return Err(ContractError::Unauthorized);
        }
        events::publish_role_changed(&env, caller, target, None);
        Ok(())
    }

    pub fn get_role(env: Env, who: Address) -> Option<AdminRole> {
        roles::get_role(&env, &who)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        roles::bootstrap_admin(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_role(env: &Env, caller: &Address, required: AdminRole) -> Result<(), ContractError> {
        if !roles::has_role(env, caller, required) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_roles;
