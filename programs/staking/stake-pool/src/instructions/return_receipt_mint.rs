use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction_without_args, token::find_ata, RENT_SYSVAR_ID, TOKEN_PROGRAM_ID};

use crate::pda::find_token_manager_address;

pub struct ReturnReceiptMintAccounts {
    pub stake_entry: Pubkey,
    pub receipt_mint: Pubkey,
    pub user: Pubkey,
    pub token_manager_program: Pubkey,
}

impl ReturnReceiptMintAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        let (token_manager, _) = find_token_manager_address(&self.token_manager_program, &self.receipt_mint);
        let token_manager_token_account = find_ata(&self.receipt_mint, &token_manager);
        let user_receipt_mint_token_account = find_ata(&self.receipt_mint, &self.user);

        vec![
            AccountMeta::new(self.stake_entry, false),
            AccountMeta::new(self.receipt_mint, false),
            AccountMeta::new(token_manager, false),
            AccountMeta::new(token_manager_token_account, false),
            AccountMeta::new(user_receipt_mint_token_account, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(self.token_manager_program, false),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
        ]
    }
}

/// Invalidates the receipt's token manager, returning the receipt to the
/// stake entry.
pub fn return_receipt_mint(program_id: &Pubkey, accounts: &ReturnReceiptMintAccounts) -> Instruction {
    build_instruction_without_args(program_id, "return_receipt_mint", accounts.to_account_metas())
}
