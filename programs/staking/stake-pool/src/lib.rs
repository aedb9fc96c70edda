//! Client for the stake pool program.
//!
//! The program itself is deployed separately. This crate knows its seeds,
//! account layouts and instruction encoding, nothing more.

pub mod accounts;
pub mod constants;
pub mod instructions;
pub mod pda;
pub mod state;

pub use accounts::*;
pub use pda::*;
pub use state::*;

use solana_sdk::pubkey::Pubkey;

pub const ID: Pubkey = staking_common::config::DEFAULT_STAKE_POOL_PROGRAM_ID;

pub fn id() -> Pubkey {
    ID
}
