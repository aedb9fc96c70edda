use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction_without_args, SYSTEM_PROGRAM_ID};

use crate::pda::find_reward_entry_id;

pub fn init_reward_entry(
    program_id: &Pubkey,
    reward_distributor: &Pubkey,
    stake_entry: &Pubkey,
    payer: &Pubkey,
) -> Instruction {
    let (reward_entry, _) = find_reward_entry_id(program_id, reward_distributor, stake_entry);

    build_instruction_without_args(
        program_id,
        "init_reward_entry",
        vec![
            AccountMeta::new(reward_entry, false),
            AccountMeta::new_readonly(*stake_entry, false),
            AccountMeta::new(*reward_distributor, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
    )
}
