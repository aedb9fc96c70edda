use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction_without_args, SYSTEM_PROGRAM_ID};

use crate::pda::find_identifier_id;

/// Creates the global identifier counter. Only needed once per deployment.
pub fn init_identifier(program_id: &Pubkey, payer: &Pubkey) -> Instruction {
    let (identifier, _) = find_identifier_id(program_id);

    build_instruction_without_args(
        program_id,
        "init_identifier",
        vec![
            AccountMeta::new(identifier, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
    )
}
