//! Client for the reward distributor program: one distributor per stake
//! pool, one reward entry per stake entry.

pub mod accounts;
pub mod constants;
pub mod instructions;
pub mod pda;
pub mod state;

pub use accounts::*;
pub use pda::*;
pub use state::*;

use solana_sdk::pubkey::Pubkey;

pub const ID: Pubkey = staking_common::config::DEFAULT_REWARD_DISTRIBUTOR_PROGRAM_ID;

pub fn id() -> Pubkey {
    ID
}
