use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{
    build_instruction_without_args, token::find_ata, ASSOCIATED_TOKEN_PROGRAM_ID, RENT_SYSVAR_ID,
    SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

use crate::pda::{find_mint_counter_id, find_token_manager_address};

pub struct ClaimReceiptMintAccounts {
    pub stake_entry: Pubkey,
    pub original_mint: Pubkey,
    /// Either the entry's stake mint or the original mint.
    pub receipt_mint: Pubkey,
    pub user: Pubkey,
    pub token_manager_program: Pubkey,
}

impl ClaimReceiptMintAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        let (token_manager, _) = find_token_manager_address(&self.token_manager_program, &self.receipt_mint);
        let (mint_counter, _) = find_mint_counter_id(&self.token_manager_program, &self.receipt_mint);
        let stake_entry_receipt_mint_token_account = find_ata(&self.receipt_mint, &self.stake_entry);
        let user_receipt_mint_token_account = find_ata(&self.receipt_mint, &self.user);
        let token_manager_receipt_mint_token_account = find_ata(&self.receipt_mint, &token_manager);

        vec![
            AccountMeta::new(self.stake_entry, false),
            AccountMeta::new_readonly(self.original_mint, false),
            AccountMeta::new(self.receipt_mint, false),
            AccountMeta::new(stake_entry_receipt_mint_token_account, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new(user_receipt_mint_token_account, false),
            AccountMeta::new(token_manager_receipt_mint_token_account, false),
            AccountMeta::new(token_manager, false),
            AccountMeta::new(mint_counter, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(self.token_manager_program, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
        ]
    }
}

/// Issues the receipt to the staker through a token manager.
pub fn claim_receipt_mint(program_id: &Pubkey, accounts: &ClaimReceiptMintAccounts) -> Instruction {
    build_instruction_without_args(program_id, "claim_receipt_mint", accounts.to_account_metas())
}
