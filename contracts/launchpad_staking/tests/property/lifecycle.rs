#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Random operation sequences against a live contract.
//!
//! Invariants checked after every step:
//! - a stake's status never moves backwards, except `Unlocking → Active`
//!   through a successful restake; `Withdrawn` is final
//! - owner indexes are strictly ascending and cover every id exactly once
//! - custody balance equals live principal plus unpaid reward funding

use launchpad_staking::{LaunchpadStaking, LaunchpadStakingClient, StakeStatus};
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};

const USERS: usize = 3;
const DAY: u64 = 86_400;

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    Deposit {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
        #[proptest(strategy = "1i128..5_000_000")]
        amount: i128,
        #[proptest(strategy = "0u32..6")]
        tier: u32,
    },
    Unlock {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
        #[proptest(strategy = "0u64..12")]
        id: u64,
    },
    Withdraw {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
        #[proptest(strategy = "0u64..12")]
        id: u64,
    },
    Restake {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
        #[proptest(strategy = "0u64..12")]
        id: u64,
        #[proptest(strategy = "0u32..5")]
        tier: u32,
    },
    Advance {
        #[proptest(strategy = "0u64..(10 * DAY)")]
        seconds: u64,
    },
}

struct Harness {
    env: Env,
    client: LaunchpadStakingClient<'static>,
    users: std::vec::Vec<Address>,
    now: u64,
}

impl Harness {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let token = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let contract_id = env.register(LaunchpadStaking, ());
        let client = LaunchpadStakingClient::new(&env, &contract_id);
        let sac = StellarAssetClient::new(&env, &token);

        let admin = Address::generate(&env);
        sac.mint(&admin, &100_000_000);
        client.initialize(&admin, &token, &100_000_000);

        let users = (0..USERS)
            .map(|_| {
                let user = Address::generate(&env);
                sac.mint(&user, &1_000_000_000);
                user
            })
            .collect();

        Self {
            env,
            client,
            users,
            now: 0,
        }
    }

    fn apply(&mut self, op: &Op) -> bool {
        match *op {
            Op::Deposit { user, amount, tier } => self
                .client
                .try_deposit(&self.users[user], &amount, &tier)
                .is_ok(),
            Op::Unlock { user, id } => self
                .client
                .try_initiate_unlock(&self.users[user], &id)
                .is_ok(),
            Op::Withdraw { user, id } => self.client.try_withdraw(&self.users[user], &id).is_ok(),
            Op::Restake { user, id, tier } => self
                .client
                .try_restake(&self.users[user], &id, &tier)
                .is_ok(),
            Op::Advance { seconds } => {
                self.now += seconds;
                self.env.ledger().set_timestamp(self.now);
                true
            }
        }
    }

    fn statuses(&self) -> std::vec::Vec<StakeStatus> {
        (0..self.client.get_stake_count())
            .map(|id| self.client.get_stake(&id).status)
            .collect()
    }
}

fn rank(status: StakeStatus) -> u8 {
    match status {
        StakeStatus::Active => 0,
        StakeStatus::Unlocking => 1,
        StakeStatus::Withdrawn => 2,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_lifecycle_invariants(ops in proptest::collection::vec(any::<Op>(), 1..40)) {
        let mut h = Harness::new();
        let mut before = h.statuses();

        for op in &ops {
            let succeeded = h.apply(op);
            let after = h.statuses();

            for (id, old) in before.iter().enumerate() {
                let new = after[id];
                let restaked = succeeded
                    && matches!(op, Op::Restake { id: target, .. } if *target == id as u64);
                if restaked {
                    prop_assert_eq!(new, StakeStatus::Active);
                    prop_assert_ne!(*old, StakeStatus::Withdrawn);
                } else {
                    prop_assert!(rank(new) >= rank(*old), "stake {} went {:?} -> {:?}", id, old, new);
                }
            }

            // Owner indexes partition the id space in creation order.
            let mut seen = std::vec::Vec::new();
            for user in &h.users {
                let ids = h.client.get_stake_ids_by_owner(user);
                let mut last: Option<u64> = None;
                for id in ids.iter() {
                    if let Some(prev) = last {
                        prop_assert!(id > prev);
                    }
                    prop_assert_eq!(h.client.get_stake(&id).owner, user.clone());
                    last = Some(id);
                    seen.push(id);
                }
            }
            seen.sort_unstable();
            let expected: std::vec::Vec<u64> = (0..h.client.get_stake_count()).collect();
            prop_assert_eq!(seen, expected);

            // Tokens held = live principal + unpaid rewards.
            let live: i128 = (0..h.client.get_stake_count())
                .map(|id| h.client.get_stake(&id))
                .filter(|s| s.status != StakeStatus::Withdrawn)
                .map(|s| s.principal)
                .sum();
            prop_assert_eq!(
                h.client.get_custody_balance(),
                live + h.client.get_pool().funded_amount
            );

            before = after;
        }
    }

    /// `set_tier_score` is visible in the very next score query.
    #[test]
    fn prop_tier_score_applies_immediately(
        amount in 1i128..1_000_000,
        tier in 0u32..5,
        weight in 0u64..1_000,
    ) {
        let h = Harness::new();
        let user = h.users[0].clone();
        h.client.deposit(&user, &amount, &tier);

        let admin = h.client.get_admin().unwrap();
        h.client.set_tier_score(&admin, &tier, &weight);

        prop_assert_eq!(
            h.client.get_total_score(&user),
            (amount as u128) * (weight as u128)
        );
    }
}
