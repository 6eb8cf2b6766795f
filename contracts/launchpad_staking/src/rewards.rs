use crate::config::{LockProfile, BPS_DENOMINATOR, SECONDS_PER_YEAR};
use crate::errors::ContractError;
use crate::registry::{Stake, StakeStatus};

// ── Core reward engine ──────────────────────────────────────────────────────

/// Simple-interest accrual for a single position.
///
/// ```text
/// reward = principal × apr_bps × elapsed / (BPS_DENOMINATOR × SECONDS_PER_YEAR)
/// ```
///
/// Integer arithmetic throughout; the division floors, so the result is
/// non-decreasing in `elapsed`. Any overflow of the numerator is reported as
/// `Overflow` rather than clamped.
///
/// # Arguments
/// * `principal` – staked amount in the token's smallest unit
/// * `apr_bps`   – annualised rate of the stake's lock tier
/// * `elapsed`   – seconds since the stake was deposited or last restaked
pub fn accrued(principal: i128, apr_bps: u32, elapsed: u64) -> Result<i128, ContractError> {
    if principal <= 0 || apr_bps == 0 || elapsed == 0 {
        return Ok(0);
    }

    let numerator = principal
        .checked_mul(i128::from(apr_bps))
        .and_then(|n| n.checked_mul(i128::from(elapsed)))
        .ok_or(ContractError::Overflow)?;

    Ok(numerator / (BPS_DENOMINATOR * i128::from(SECONDS_PER_YEAR)))
}

/// Reward currently owed on `stake` at ledger time `now`.
///
/// Accrual runs from `deposited_at` and keeps going while the stake is
/// unlocking. A withdrawn stake has already been paid and owes nothing.
pub fn calculate_reward(
    stake: &Stake,
    profile: &LockProfile,
    now: u64,
) -> Result<i128, ContractError> {
    if stake.status == StakeStatus::Withdrawn {
        return Ok(0);
    }
    let elapsed = now.saturating_sub(stake.deposited_at);
    accrued(stake.principal, profile.apr_bps, elapsed)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
