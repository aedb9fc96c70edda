use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use staking_common::AnchorAccount;

/// Reward bookkeeping for one stake entry under one distributor.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RewardEntry {
    pub bump: u8,
    pub stake_entry: Pubkey,
    pub reward_distributor: Pubkey,
    pub reward_seconds_received: u128,
    /// Scaled by the distributor's `multiplier_decimals`.
    pub multiplier: u64,
}

impl AnchorAccount for RewardEntry {
    const NAME: &'static str = "RewardEntry";
}
