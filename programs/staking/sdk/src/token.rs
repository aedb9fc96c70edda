use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;
use staking_common::{token::find_ata, AccountReader, Result, TOKEN_PROGRAM_ID};
use tracing::trace;

/// Returns `owner`'s ATA for `mint`, appending an idempotent create when the
/// account does not exist yet. `owner` may be a PDA.
pub fn with_find_or_init_ata<R: AccountReader + ?Sized>(
    ixs: &mut Vec<Instruction>,
    reader: &R,
    mint: &Pubkey,
    owner: &Pubkey,
    payer: &Pubkey,
) -> Result<Pubkey> {
    let ata = find_ata(mint, owner);
    if reader.get_account(&ata)?.is_none() {
        trace!(%ata, %mint, %owner, "creating associated token account");
        ixs.push(create_associated_token_account_idempotent(
            payer,
            owner,
            mint,
            &TOKEN_PROGRAM_ID,
        ));
    }
    Ok(ata)
}
