use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{
    build_instruction, token::find_ata, Result, ASSOCIATED_TOKEN_PROGRAM_ID, RENT_SYSVAR_ID,
    SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

use crate::pda::{find_metadata_id, find_mint_manager_id};

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct InitStakeMintIx {
    pub name: String,
    pub symbol: String,
}

pub struct InitStakeMintAccounts {
    pub stake_entry: Pubkey,
    pub stake_pool: Pubkey,
    pub original_mint: Pubkey,
    /// Fresh keypair; signs the transaction.
    pub stake_mint: Pubkey,
    pub payer: Pubkey,
    pub token_manager_program: Pubkey,
    pub token_metadata_program: Pubkey,
}

impl InitStakeMintAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        let (original_mint_metadata, _) =
            find_metadata_id(&self.token_metadata_program, &self.original_mint);
        let (stake_mint_metadata, _) = find_metadata_id(&self.token_metadata_program, &self.stake_mint);
        let (mint_manager, _) = find_mint_manager_id(&self.token_manager_program, &self.stake_mint);
        let stake_entry_stake_mint_token_account = find_ata(&self.stake_mint, &self.stake_entry);

        vec![
            AccountMeta::new(self.stake_entry, false),
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new_readonly(self.original_mint, false),
            AccountMeta::new_readonly(original_mint_metadata, false),
            AccountMeta::new(self.stake_mint, true),
            AccountMeta::new(stake_mint_metadata, false),
            AccountMeta::new(stake_entry_stake_mint_token_account, false),
            AccountMeta::new(mint_manager, false),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(self.token_metadata_program, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }
}

/// Creates the entry's receipt mint and mints it to the entry's ATA.
pub fn init_stake_mint(
    program_id: &Pubkey,
    accounts: &InitStakeMintAccounts,
    ix: &InitStakeMintIx,
) -> Result<Instruction> {
    build_instruction(program_id, "init_stake_mint", ix, accounts.to_account_metas())
}
