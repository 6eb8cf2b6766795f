extern crate std;

use common::AdminRole;
use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Env};

use crate::{ContractError, LaunchpadStaking, LaunchpadStakingClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, LaunchpadStakingClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(LaunchpadStaking, ());
    let client = LaunchpadStakingClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    StellarAssetClient::new(&env, &token).mint(&admin, &1_000_000);
    client.initialize(&admin, &token, &1_000_000);

    (env, client, admin)
}

fn assert_unauthorized<T, C>(result: Result<T, Result<ContractError, C>>) {
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

// ── Bootstrap ────────────────────────────────────────────────────────────────

#[test]
fn test_initializer_is_super_admin() {
    let (_env, client, admin) = setup();
    assert_eq!(client.get_role(&admin), Some(AdminRole::Super));
    assert_eq!(client.get_admin(), Some(admin));
}

#[test]
fn test_stranger_has_no_role() {
    let (env, client, _admin) = setup();
    assert_eq!(client.get_role(&Address::generate(&env)), None);
}

// ── Granting ─────────────────────────────────────────────────────────────────

#[test]
fn test_config_admin_can_change_scores() {
    let (env, client, admin) = setup();
    let config_admin = Address::generate(&env);

    client.grant_role(&admin, &config_admin, &AdminRole::Config);
    assert_eq!(client.get_role(&config_admin), Some(AdminRole::Config));

    client.set_tier_score(&config_admin, &2, &11);
    client.set_base_score_value(&config_admin, &4);
    let cfg = client.get_score_config();
    assert_eq!(cfg.tier_scores.get(2), Some(11));
    assert_eq!(cfg.base_score_value, 4);

    // Config also covers operator duties.
    client.set_pool_open(&config_admin, &false);
    assert!(!client.is_open());
}

#[test]
fn test_operator_can_pause_but_not_configure() {
    let (env, client, admin) = setup();
    let operator = Address::generate(&env);
    client.grant_role(&admin, &operator, &AdminRole::Operator);

    client.set_pool_open(&operator, &false);
    assert!(!client.is_open());
    client.set_pool_open(&operator, &true);
    assert!(client.is_open());

    assert_unauthorized(client.try_set_tier_score(&operator, &0, &3));
    assert_unauthorized(client.try_set_base_score_value(&operator, &3));
}

#[test]
fn test_only_super_admin_grants() {
    let (env, client, admin) = setup();
    let config_admin = Address::generate(&env);
    let target = Address::generate(&env);
    client.grant_role(&admin, &config_admin, &AdminRole::Config);

    assert_unauthorized(client.try_grant_role(&config_admin, &target, &AdminRole::Operator));
    assert_eq!(client.get_role(&target), None);
}

#[test]
fn test_super_admin_can_appoint_another_super() {
    let (env, client, admin) = setup();
    let second = Address::generate(&env);
    let target = Address::generate(&env);

    client.grant_role(&admin, &second, &AdminRole::Super);
    client.grant_role(&second, &target, &AdminRole::Operator);
    assert_eq!(client.get_role(&target), Some(AdminRole::Operator));
}

// ── Revoking ─────────────────────────────────────────────────────────────────

#[test]
fn test_revoked_admin_loses_access() {
    let (env, client, admin) = setup();
    let config_admin = Address::generate(&env);
    client.grant_role(&admin, &config_admin, &AdminRole::Config);

    client.revoke_role(&admin, &config_admin);

    assert_eq!(client.get_role(&config_admin), None);
    assert_unauthorized(client.try_set_base_score_value(&config_admin, &9));
}

#[test]
fn test_super_admin_cannot_revoke_itself() {
    let (_env, client, admin) = setup();
    assert_unauthorized(client.try_revoke_role(&admin, &admin));
    assert_eq!(client.get_role(&admin), Some(AdminRole::Super));
}

#[test]
fn test_non_super_cannot_revoke() {
    let (env, client, admin) = setup();
    let operator = Address::generate(&env);
    client.grant_role(&admin, &operator, &AdminRole::Operator);

    assert_unauthorized(client.try_revoke_role(&operator, &admin));
    assert_eq!(client.get_role(&admin), Some(AdminRole::Super));
}
