use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction, Result, SYSTEM_PROGRAM_ID};

use crate::pda::find_stake_authorization_id;

/// Whitelists `mint` for a pool with `requires_authorization` set.
pub fn authorize_mint(
    program_id: &Pubkey,
    stake_pool: &Pubkey,
    mint: &Pubkey,
    payer: &Pubkey,
) -> Result<Instruction> {
    let (stake_authorization_record, _) = find_stake_authorization_id(program_id, stake_pool, mint);

    build_instruction(
        program_id,
        "authorize_mint",
        mint,
        vec![
            AccountMeta::new_readonly(*stake_pool, false),
            AccountMeta::new(stake_authorization_record, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
    )
}
