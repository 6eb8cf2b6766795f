use soroban_sdk::contracterror;

/// Errors returned by every staking entry point.
///
/// A failed invocation is rolled back by the host, so each of these leaves
/// contract state exactly as it was before the call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    /// `initialize` was already called successfully.
    AlreadyInitialized = 1,
    /// A token amount was zero or negative.
    InvalidAmount = 2,
    /// The pool is not initialised or has been paused.
    PoolNotOpen = 3,
    StakeNotFound = 4,
    /// The caller is not the stake owner or lacks the required admin role.
    Unauthorized = 5,
    /// The stake status has already moved past the requested step.
    InvalidTransition = 6,
    /// Withdrawal attempted before the unlock cooldown elapsed.
    StillLocked = 7,
    NothingToRestake = 8,
    /// Lock tier outside the configured profile table.
    InvalidTierIndex = 9,
    /// Checked arithmetic overflowed while computing a reward or score.
    Overflow = 10,
    /// The reward pool cannot cover the reward being paid out.
    InsufficientRewardPool = 11,
    /// A configuration table failed validation.
    InvalidConfig = 12,
}
