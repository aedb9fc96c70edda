use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction_without_args, token::find_ata, TOKEN_PROGRAM_ID};

pub struct UnstakeAccounts {
    pub stake_pool: Pubkey,
    pub stake_entry: Pubkey,
    pub original_mint: Pubkey,
    pub user: Pubkey,
    /// The entry's stake mint. The program checks the receipt is back in the
    /// entry's stake-mint ATA, passed as a remaining account.
    pub stake_mint: Option<Pubkey>,
}

impl UnstakeAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        let stake_entry_original_mint_token_account = find_ata(&self.original_mint, &self.stake_entry);
        let user_original_mint_token_account = find_ata(&self.original_mint, &self.user);

        let mut metas = vec![
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new(self.stake_entry, false),
            AccountMeta::new_readonly(self.original_mint, false),
            AccountMeta::new(stake_entry_original_mint_token_account, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new(user_original_mint_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ];
        if let Some(stake_mint) = self.stake_mint {
            metas.push(AccountMeta::new_readonly(find_ata(&stake_mint, &self.stake_entry), false));
        }
        metas
    }
}

/// Returns the staked tokens to the user's ATA for the original mint.
pub fn unstake(program_id: &Pubkey, accounts: &UnstakeAccounts) -> Instruction {
    build_instruction_without_args(program_id, "unstake", accounts.to_account_metas())
}
