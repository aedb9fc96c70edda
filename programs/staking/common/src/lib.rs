//! Building blocks shared by the stake pool and reward distributor clients:
//! Anchor discriminators, typed account decoding behind the [`AccountReader`]
//! seam, SPL mint reads and the program-id configuration.

pub mod account;
pub mod config;
pub mod discriminator;
pub mod error;
pub mod instruction;
pub mod token;

pub use account::{
    fetch_account, try_fetch_account, try_fetch_accounts, AccountData, AccountReader, AnchorAccount,
};
pub use config::StakingConfig;
pub use discriminator::{account_discriminator, instruction_discriminator};
pub use error::{Result, StakingError};
pub use instruction::{build_instruction, build_instruction_without_args};

use solana_sdk::pubkey::Pubkey;

/// Rent sysvar, still required by the older Anchor account structs.
pub const RENT_SYSVAR_ID: Pubkey = solana_sdk::pubkey!("SysvarRent111111111111111111111111111111111");

pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_system_interface::program::ID;
