use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{
    build_instruction, token::find_ata, Result, StakingError, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

use crate::state::RewardDistributorKind;

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct InitRewardDistributorIx {
    pub reward_amount: u64,
    pub reward_duration_seconds: u128,
    pub kind: u8,
    /// Tokens moved into the treasury up front (Treasury kind).
    pub supply: Option<u64>,
    pub max_supply: Option<u64>,
    pub default_multiplier: Option<u64>,
    pub multiplier_decimals: Option<u8>,
    pub max_reward_seconds_received: Option<u128>,
}

pub struct InitRewardDistributorAccounts {
    pub reward_distributor: Pubkey,
    pub stake_pool: Pubkey,
    pub reward_mint: Pubkey,
    pub authority: Pubkey,
    pub payer: Pubkey,
}

impl InitRewardDistributorAccounts {
    pub fn to_account_metas(&self, kind: RewardDistributorKind) -> Vec<AccountMeta> {
        let mut metas = vec![
            AccountMeta::new(self.reward_distributor, false),
            AccountMeta::new_readonly(self.stake_pool, false),
            AccountMeta::new(self.reward_mint, false),
            AccountMeta::new(self.authority, true),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ];
        if kind == RewardDistributorKind::Treasury {
            metas.push(AccountMeta::new(
                find_ata(&self.reward_mint, &self.reward_distributor),
                false,
            ));
            metas.push(AccountMeta::new(
                find_ata(&self.reward_mint, &self.authority),
                false,
            ));
        }
        metas
    }
}

/// Creates the pool's distributor. The account list follows `ix.kind`. For a
/// Treasury distributor the distributor's reward-mint ATA must exist before
/// this runs.
pub fn init_reward_distributor(
    program_id: &Pubkey,
    accounts: &InitRewardDistributorAccounts,
    ix: &InitRewardDistributorIx,
) -> Result<Instruction> {
    let kind = RewardDistributorKind::try_from(ix.kind).map_err(|kind| {
        StakingError::UnknownDistributorKind {
            address: accounts.reward_distributor,
            kind,
        }
    })?;

    build_instruction(
        program_id,
        "init_reward_distributor",
        ix,
        accounts.to_account_metas(kind),
    )
}
