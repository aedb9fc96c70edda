use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction, Result};

use super::InitPoolIx;

/// Same fields as pool creation; every field is overwritten.
pub type UpdatePoolIx = InitPoolIx;

pub fn update_pool(
    program_id: &Pubkey,
    stake_pool: &Pubkey,
    authority: &Pubkey,
    payer: &Pubkey,
    ix: &UpdatePoolIx,
) -> Result<Instruction> {
    build_instruction(
        program_id,
        "update_pool",
        ix,
        vec![
            AccountMeta::new(*stake_pool, false),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*payer, true),
        ],
    )
}
