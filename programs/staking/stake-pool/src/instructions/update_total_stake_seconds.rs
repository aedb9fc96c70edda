use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::build_instruction_without_args;

/// Accrues `total_stake_seconds` up to now. Signed by the current staker.
pub fn update_total_stake_seconds(
    program_id: &Pubkey,
    stake_entry: &Pubkey,
    last_staker: &Pubkey,
) -> Instruction {
    build_instruction_without_args(
        program_id,
        "update_total_stake_seconds",
        vec![
            AccountMeta::new(*stake_entry, false),
            AccountMeta::new(*last_staker, true),
        ],
    )
}
