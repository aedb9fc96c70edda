use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use staking_common::AnchorAccount;

/// Allows `mint` into a pool that sets `requires_authorization`.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct StakeAuthorizationRecord {
    pub bump: u8,
    pub pool: Pubkey,
    pub mint: Pubkey,
}

impl AnchorAccount for StakeAuthorizationRecord {
    const NAME: &'static str = "StakeAuthorizationRecord";
}
