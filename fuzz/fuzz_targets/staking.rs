#![no_main]

use arbitrary::Arbitrary;
use launchpad_staking::{LaunchpadStaking, LaunchpadStakingClient, StakeStatus};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { user: u8, amount: u64, tier: u8 },
    Unlock { user: u8, id: u8 },
    Withdraw { user: u8, id: u8 },
    Restake { user: u8, id: u8, tier: u8 },
    Advance { seconds: u32 },
    SetTierScore { tier: u8, value: u64 },
    SetBaseScore { value: u64 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let sac = StellarAssetClient::new(&env, &token);
    let contract_id = env.register(LaunchpadStaking, ());
    let client = LaunchpadStakingClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    sac.mint(&admin, &1_000_000_000i128);
    client.initialize(&admin, &token, &1_000_000_000i128);

    let users: Vec<Address> = (0..4)
        .map(|_| {
            let user = Address::generate(&env);
            sac.mint(&user, &i128::from(u64::MAX));
            user
        })
        .collect();

    let mut now = 0u64;
    for action in actions {
        match action {
            FuzzAction::Deposit { user, amount, tier } => {
                let caller = &users[usize::from(user) % users.len()];
                let _ = client.try_deposit(caller, &i128::from(amount), &u32::from(tier));
            }
            FuzzAction::Unlock { user, id } => {
                let caller = &users[usize::from(user) % users.len()];
                let _ = client.try_initiate_unlock(caller, &u64::from(id));
            }
            FuzzAction::Withdraw { user, id } => {
                let caller = &users[usize::from(user) % users.len()];
                let _ = client.try_withdraw(caller, &u64::from(id));
            }
            FuzzAction::Restake { user, id, tier } => {
                let caller = &users[usize::from(user) % users.len()];
                let _ = client.try_restake(caller, &u64::from(id), &u32::from(tier));
            }
            FuzzAction::Advance { seconds } => {
                now = now.saturating_add(u64::from(seconds));
                env.ledger().set_timestamp(now);
            }
            FuzzAction::SetTierScore { tier, value } => {
                let _ = client.try_set_tier_score(&admin, &u32::from(tier), &value);
            }
            FuzzAction::SetBaseScore { value } => {
                let _ = client.try_set_base_score_value(&admin, &value);
            }
        }

        // Queries may report Overflow but must never trap.
        for user in &users {
            let _ = client.try_get_total_score(user);
            let _ = client.try_get_launchpad_tiers_by_owner(user);
        }

        let live: i128 = (0..client.get_stake_count())
            .map(|id| client.get_stake(&id))
            .filter(|s| s.status != StakeStatus::Withdrawn)
            .map(|s| s.principal)
            .sum();
        assert_eq!(
            client.get_custody_balance(),
            live + client.get_pool().funded_amount,
            "custody must equal live principal plus reward funding"
        );
    }
});
