//! Custody transfers against the staked token.
//!
//! The token is any SEP-41 contract; the staking contract only ever pulls
//! from a caller into its own balance or pays out of that balance. A failed
//! transfer traps and rolls back the whole invocation.

use soroban_sdk::{token, Address, Env};

/// Moves `amount` from `from` into contract custody.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) {
    token::TokenClient::new(env, token).transfer(from, &env.current_contract_address(), &amount);
}

/// Pays `amount` out of contract custody to `to`.
pub fn push(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::TokenClient::new(env, token).transfer(&env.current_contract_address(), to, &amount);
}

/// Tokens currently held by the contract (staked principal plus reward funding).
pub fn custody_balance(env: &Env, token: &Address) -> i128 {
    token::TokenClient::new(env, token).balance(&env.current_contract_address())
}
