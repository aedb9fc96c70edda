use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction, Result, SYSTEM_PROGRAM_ID};

pub struct InitEntryAccounts {
    pub stake_entry: Pubkey,
    pub stake_pool: Pubkey,
    pub original_mint: Pubkey,
    /// May not exist for plain fungible mints.
    pub original_mint_metadata: Pubkey,
    pub payer: Pubkey,
}

impl InitEntryAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.stake_entry, false),
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new_readonly(self.original_mint, false),
            AccountMeta::new_readonly(self.original_mint_metadata, false),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }
}

/// `user` is the staker the entry is seeded with (see `get_stake_seed`).
pub fn init_entry(
    program_id: &Pubkey,
    accounts: &InitEntryAccounts,
    user: &Pubkey,
) -> Result<Instruction> {
    build_instruction(program_id, "init_entry", user, accounts.to_account_metas())
}
