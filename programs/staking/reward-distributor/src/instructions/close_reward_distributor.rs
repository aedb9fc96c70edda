use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction_without_args, token::find_ata, TOKEN_PROGRAM_ID};

use crate::state::RewardDistributorKind;

pub struct CloseRewardDistributorAccounts {
    pub reward_distributor: Pubkey,
    pub stake_pool: Pubkey,
    pub reward_mint: Pubkey,
    /// Distributor authority; receives the rent and any treasury balance.
    pub signer: Pubkey,
}

/// Closes the distributor. Mint distributors hand mint authority back,
/// Treasury distributors drain their token account to the signer.
pub fn close_reward_distributor(
    program_id: &Pubkey,
    accounts: &CloseRewardDistributorAccounts,
    kind: RewardDistributorKind,
) -> Instruction {
    let mut metas = vec![
        AccountMeta::new(accounts.reward_distributor, false),
        AccountMeta::new_readonly(accounts.stake_pool, false),
        AccountMeta::new(accounts.reward_mint, false),
        AccountMeta::new(accounts.signer, true),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ];
    if kind == RewardDistributorKind::Treasury {
        metas.push(AccountMeta::new(
            find_ata(&accounts.reward_mint, &accounts.reward_distributor),
            false,
        ));
        metas.push(AccountMeta::new(
            find_ata(&accounts.reward_mint, &accounts.signer),
            false,
        ));
    }

    build_instruction_without_args(program_id, "close_reward_distributor", metas)
}
