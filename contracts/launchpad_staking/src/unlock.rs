//! Unlock / withdraw timing.
//!
//! Pure functions over a stake, its lock profile and the current ledger time.
//! Unlocking may start at any moment; withdrawal opens once the profile's
//! cooldown has elapsed since the unlock began.

use crate::config::LockProfile;
use crate::errors::ContractError;
use crate::registry::{Stake, StakeStatus};

/// Starts the cooldown for an `Active` stake.
pub fn initiate_unlock(stake: &mut Stake, now: u64) -> Result<(), ContractError> {
    stake.transition(StakeStatus::Unlocking)?;
    stake.unlock_initiated_at = Some(now);
    Ok(())
}

/// Timestamp at which the stake becomes withdrawable, if it is unlocking.
pub fn withdrawable_at(stake: &Stake, profile: &LockProfile) -> Option<u64> {
    match (stake.status, stake.unlock_initiated_at) {
        (StakeStatus::Unlocking, Some(started)) => Some(started.saturating_add(profile.cooldown)),
        _ => None,
    }
}

pub fn is_withdrawable(stake: &Stake, profile: &LockProfile, now: u64) -> bool {
    withdrawable_at(stake, profile).is_some_and(|at| now >= at)
}

/// Marks the stake `Withdrawn` once its cooldown has elapsed.
pub fn withdraw(stake: &mut Stake, profile: &LockProfile, now: u64) -> Result<(), ContractError> {
    match stake.status {
        StakeStatus::Active => Err(ContractError::StillLocked),
        StakeStatus::Withdrawn => Err(ContractError::InvalidTransition),
        StakeStatus::Unlocking => {
            if !is_withdrawable(stake, profile, now) {
                return Err(ContractError::StillLocked);
            }
            stake.transition(StakeStatus::Withdrawn)
        }
    }
}
