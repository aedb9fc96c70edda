use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction, Result};

/// Sets a reward entry's multiplier. Signed by the distributor authority.
pub fn update_reward_entry(
    program_id: &Pubkey,
    reward_entry: &Pubkey,
    reward_distributor: &Pubkey,
    authority: &Pubkey,
    multiplier: u64,
) -> Result<Instruction> {
    build_instruction(
        program_id,
        "update_reward_entry",
        &multiplier,
        vec![
            AccountMeta::new(*reward_entry, false),
            AccountMeta::new_readonly(*reward_distributor, false),
            AccountMeta::new_readonly(*authority, true),
        ],
    )
}
