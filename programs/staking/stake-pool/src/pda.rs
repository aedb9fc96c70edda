use solana_sdk::pubkey::Pubkey;

use crate::constants::*;

/// Global pool identifier counter: ["identifier"]
pub fn find_identifier_id(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[IDENTIFIER_SEED], program_id)
}

/// Stake pool: ["stake-pool", identifier (u64 LE)]
pub fn find_stake_pool_id(program_id: &Pubkey, identifier: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_POOL_SEED, &identifier.to_le_bytes()], program_id)
}

/// Stake entry: ["stake-entry", stake_pool, original_mint, stake_seed]
///
/// `stake_seed` comes from [`get_stake_seed`].
pub fn find_stake_entry_id(
    program_id: &Pubkey,
    stake_pool: &Pubkey,
    original_mint: &Pubkey,
    stake_seed: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            STAKE_ENTRY_SEED,
            stake_pool.as_ref(),
            original_mint.as_ref(),
            stake_seed.as_ref(),
        ],
        program_id,
    )
}

/// Stake authorization record: ["stake-authorization", stake_pool, mint]
pub fn find_stake_authorization_id(
    program_id: &Pubkey,
    stake_pool: &Pubkey,
    mint: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[STAKE_AUTHORIZATION_SEED, stake_pool.as_ref(), mint.as_ref()],
        program_id,
    )
}

/// Fungible mints (supply > 1) get one stake entry per staker. Everything
/// else shares a single entry keyed by the default pubkey.
pub fn get_stake_seed(supply: u64, user: &Pubkey) -> Pubkey {
    if supply > 1 {
        *user
    } else {
        Pubkey::default()
    }
}

// ======================== EXTERNAL PROGRAMS ========================

/// Token manager holding a receipt: ["token-manager", mint]
pub fn find_token_manager_address(token_manager_program: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_MANAGER_SEED, mint.as_ref()], token_manager_program)
}

/// Receipt mint counter: ["mint-counter", mint]
pub fn find_mint_counter_id(token_manager_program: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_COUNTER_SEED, mint.as_ref()], token_manager_program)
}

/// Mint manager of a stake mint: ["mint-manager", mint]
pub fn find_mint_manager_id(token_manager_program: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_MANAGER_SEED, mint.as_ref()], token_manager_program)
}

/// Token metadata: ["metadata", metadata_program, mint]
pub fn find_metadata_id(token_metadata_program: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_SEED, token_metadata_program.as_ref(), mint.as_ref()],
        token_metadata_program,
    )
}
