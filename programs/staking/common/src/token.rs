use solana_program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use spl_token::state::Mint;

use crate::{
    account::AccountReader,
    error::{Result, StakingError},
};

/// Associated token address of `owner` for `mint`. PDAs are valid owners.
pub fn find_ata(mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Reads and unpacks an SPL mint.
pub fn get_mint<R: AccountReader + ?Sized>(reader: &R, mint: &Pubkey) -> Result<Mint> {
    let account = reader
        .get_account(mint)?
        .ok_or(StakingError::AccountNotFound(*mint))?;
    if account.owner != spl_token::ID {
        return Err(StakingError::InvalidOwner {
            address: *mint,
            expected: spl_token::ID,
            actual: account.owner,
        });
    }
    Mint::unpack(&account.data).map_err(|_| StakingError::InvalidMint(*mint))
}
