// Test utilities for the reward distributor client

#![allow(dead_code)]

use litesvm::LiteSVM;
use reward_distributor_client::{RewardDistributor, RewardDistributorKind};
use solana_sdk::{account::Account, pubkey::Pubkey};
use staking_common::AnchorAccount;

pub const REWARD_DISTRIBUTOR_PROGRAM_ID: Pubkey = reward_distributor_client::ID;

/// Write an Anchor account straight into the SVM, owned by `owner`
pub fn plant_account<T: AnchorAccount>(svm: &mut LiteSVM, address: Pubkey, owner: Pubkey, value: &T) {
    let data = value.to_account_data().expect("Account should encode");
    let lamports = svm.minimum_balance_for_rent_exemption(data.len());
    svm.set_account(
        address,
        Account {
            lamports,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        },
    )
    .expect("Setting account should succeed");
}

pub fn sample_distributor(stake_pool: Pubkey, reward_mint: Pubkey, kind: RewardDistributorKind) -> RewardDistributor {
    RewardDistributor {
        bump: 255,
        stake_pool,
        kind: kind as u8,
        authority: Pubkey::new_unique(),
        reward_mint,
        reward_amount: 1,
        reward_duration_seconds: 1,
        rewards_issued: 0,
        max_supply: Some(100),
        default_multiplier: 1,
        multiplier_decimals: 0,
        max_reward_seconds_received: None,
    }
}
