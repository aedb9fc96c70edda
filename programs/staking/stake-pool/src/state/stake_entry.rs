use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use staking_common::AnchorAccount;

/// Per-(pool, original mint) stake record. Fungible mints get one per staker.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct StakeEntry {
    pub bump: u8,
    pub pool: Pubkey,
    pub amount: u64,
    pub original_mint: Pubkey,
    pub original_mint_claimed: bool,
    /// `Pubkey::default()` while nothing is staked.
    pub last_staker: Pubkey,
    pub last_staked_at: i64,
    pub total_stake_seconds: u128,
    pub stake_mint_claimed: bool,
    pub kind: u8,
    /// Receipt mint created by `init_stake_mint`.
    pub stake_mint: Option<Pubkey>,
    pub cooldown_start_seconds: Option<i64>,
    pub last_updated_at: Option<i64>,
}

impl AnchorAccount for StakeEntry {
    const NAME: &'static str = "StakeEntry";
}

impl StakeEntry {
    pub fn is_staked(&self) -> bool {
        self.last_staker != Pubkey::default()
    }

    /// A receipt (stake mint or original mint) is out with the staker and
    /// has to come back before unstaking.
    pub fn receipt_claimed(&self) -> bool {
        self.stake_mint_claimed || self.original_mint_claimed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StakeEntryKind {
    Permissionless = 0,
    Permissioned = 1,
}

impl TryFrom<u8> for StakeEntryKind {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Permissionless),
            1 => Ok(Self::Permissioned),
            other => Err(other),
        }
    }
}

/// What the staker receives in exchange for the staked tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReceiptType {
    /// The original mint, locked in a token manager.
    Original = 1,
    /// The entry's stake mint.
    Receipt = 2,
    None = 3,
}
