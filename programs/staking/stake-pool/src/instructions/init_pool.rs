use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use staking_common::{build_instruction, Result, SYSTEM_PROGRAM_ID};

use crate::pda::{find_identifier_id, find_stake_pool_id};

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct InitPoolIx {
    pub overlay_text: String,
    pub image_uri: String,
    pub requires_collections: Vec<Pubkey>,
    pub requires_creators: Vec<Pubkey>,
    pub requires_authorization: bool,
    pub authority: Pubkey,
    pub reset_on_stake: bool,
    pub cooldown_seconds: Option<u32>,
    pub min_stake_seconds: Option<u32>,
    pub end_date: Option<i64>,
}

/// Creates the pool for `identifier`, which must equal the identifier
/// counter's current value. The program bumps the counter.
pub fn init_pool(
    program_id: &Pubkey,
    payer: &Pubkey,
    identifier: u64,
    ix: &InitPoolIx,
) -> Result<Instruction> {
    let (stake_pool, _) = find_stake_pool_id(program_id, identifier);
    let (identifier_id, _) = find_identifier_id(program_id);

    build_instruction(
        program_id,
        "init_pool",
        ix,
        vec![
            AccountMeta::new(stake_pool, false),
            AccountMeta::new(identifier_id, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
    )
}
