//! Admin roles for the staking contracts.
//!
//! Each address holds at most one role, kept in persistent storage. The
//! address that initialised the contract is also remembered in instance
//! storage so it can be reported without scanning roles.

use soroban_sdk::{contracttype, Address, Env};

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum RoleKey {
    Role(Address),
    Super,
}

/// Admin permission levels, lowest first.
///
/// - `Operator` – may pause and resume token-moving operations.
/// - `Config`   – may change scoring tables and lock profiles.
/// - `Super`    – everything above, plus granting and revoking roles.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AdminRole {
    Operator = 1,
    Config = 2,
    Super = 3,
}

impl AdminRole {
    pub fn rank(&self) -> u32 {
        *self as u32
    }

    /// Returns true if this role grants at least the permissions of `required`.
    pub fn covers(&self, required: AdminRole) -> bool {
        self.rank() >= required.rank()
    }
}

fn bump(env: &Env, key: &RoleKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn write(env: &Env, who: &Address, role: Option<AdminRole>) {
    let key = RoleKey::Role(who.clone());
    match role {
        Some(role) => {
            env.storage().persistent().set(&key, &role);
            bump(env, &key);
        }
        None => env.storage().persistent().remove(&key),
    }
}

pub fn get_role(env: &Env, who: &Address) -> Option<AdminRole> {
    let key = RoleKey::Role(who.clone());
    let role: Option<AdminRole> = env.storage().persistent().get(&key);
    if role.is_some() {
        bump(env, &key);
    }
    role
}

pub fn has_role(env: &Env, who: &Address, required: AdminRole) -> bool {
    get_role(env, who).is_some_and(|role| role.covers(required))
}

/// Records `admin` as the initialiser and makes it `Super`.
pub fn bootstrap_super(env: &Env, admin: &Address) {
    env.storage().instance().set(&RoleKey::Super, admin);
    write(env, admin, Some(AdminRole::Super));
}

pub fn bootstrap_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RoleKey::Super)
}

/// Grants `role` to `target`, replacing whatever it held. `false` means
/// `caller` is not `Super` and nothing was written.
pub fn grant(env: &Env, caller: &Address, target: &Address, role: AdminRole) -> bool {
    if !has_role(env, caller, AdminRole::Super) {
        return false;
    }
    write(env, target, Some(role));
    true
}

/// Clears `target`'s role. Self-revocation is refused.
pub fn revoke(env: &Env, caller: &Address, target: &Address) -> bool {
    if caller == target || !has_role(env, caller, AdminRole::Super) {
        return false;
    }
    write(env, target, None);
    true
}
