use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{
    build_instruction_without_args, token::find_ata, RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID,
    TOKEN_PROGRAM_ID,
};

use crate::{pda::find_reward_entry_id, state::RewardDistributorKind};

pub struct ClaimRewardsAccounts {
    pub reward_distributor: Pubkey,
    pub stake_entry: Pubkey,
    pub stake_pool: Pubkey,
    pub reward_mint: Pubkey,
    pub user: Pubkey,
}

impl ClaimRewardsAccounts {
    pub fn to_account_metas(&self, program_id: &Pubkey, kind: RewardDistributorKind) -> Vec<AccountMeta> {
        let (reward_entry, _) = find_reward_entry_id(program_id, &self.reward_distributor, &self.stake_entry);
        let user_reward_mint_token_account = find_ata(&self.reward_mint, &self.user);

        let mut metas = vec![
            AccountMeta::new(reward_entry, false),
            AccountMeta::new(self.reward_distributor, false),
            AccountMeta::new_readonly(self.stake_entry, false),
            AccountMeta::new_readonly(self.stake_pool, false),
            AccountMeta::new(self.reward_mint, false),
            AccountMeta::new(user_reward_mint_token_account, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
        ];
        if kind == RewardDistributorKind::Treasury {
            metas.push(AccountMeta::new(
                find_ata(&self.reward_mint, &self.reward_distributor),
                false,
            ));
        }
        metas
    }
}

/// Pays out rewards accrued by the stake entry into the user's reward ATA.
pub fn claim_rewards(
    program_id: &Pubkey,
    accounts: &ClaimRewardsAccounts,
    kind: RewardDistributorKind,
) -> Instruction {
    build_instruction_without_args(
        program_id,
        "claim_rewards",
        accounts.to_account_metas(program_id, kind),
    )
}
