use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction, token::find_ata, Result, TOKEN_PROGRAM_ID};

pub struct StakeAccounts {
    pub stake_entry: Pubkey,
    pub stake_pool: Pubkey,
    pub original_mint: Pubkey,
    pub user: Pubkey,
    pub user_original_mint_token_account: Pubkey,
}

impl StakeAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        let stake_entry_original_mint_token_account = find_ata(&self.original_mint, &self.stake_entry);

        vec![
            AccountMeta::new(self.stake_entry, false),
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new(stake_entry_original_mint_token_account, false),
            AccountMeta::new_readonly(self.original_mint, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new(self.user_original_mint_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ]
    }
}

/// Moves `amount` original tokens from the user into the entry's ATA. The
/// ATA must already exist.
pub fn stake(program_id: &Pubkey, accounts: &StakeAccounts, amount: u64) -> Result<Instruction> {
    build_instruction(program_id, "stake", &amount, accounts.to_account_metas())
}
