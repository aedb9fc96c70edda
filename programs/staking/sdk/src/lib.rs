//! High-level transaction composers for the staking programs.
//!
//! Each composer inspects the chain through an [`AccountReader`], works out
//! which setup steps are still missing and returns the instructions in the
//! order they must execute. Nothing here signs or submits; fresh keypairs
//! that must co-sign are handed back to the caller.
//!
//! ```no_run
//! # fn demo(reader: &impl staking_common::AccountReader, payer: solana_sdk::pubkey::Pubkey) -> staking_common::Result<()> {
//! use staking_sdk::{create_stake_pool, CreateStakePoolParams, StakingConfig};
//!
//! let config = StakingConfig::default();
//! let (instructions, stake_pool) =
//!     create_stake_pool(reader, &config, &payer, CreateStakePoolParams::default())?;
//! # let _ = (instructions, stake_pool);
//! # Ok(())
//! # }
//! ```

pub mod entry;
pub mod pool;
pub mod reward_distributor;
pub mod rewards;
pub mod stake;
pub mod token;

pub use entry::{
    create_stake_entry, create_stake_entry_and_stake_mint, initialize_reward_entry,
    with_init_stake_entry, CreateStakeEntryParams, InitializeRewardEntryParams,
};
pub use pool::{authorize_stake_mint, create_stake_pool, CreateStakePoolParams};
pub use reward_distributor::{
    create_reward_distributor, with_init_reward_distributor, InitRewardDistributorParams,
};
pub use rewards::{claim_rewards, with_claim_rewards, ClaimRewardsParams};
pub use stake::{stake, unstake, StakeParams, UnstakeParams};

pub use reward_distributor_client::RewardDistributorKind;
pub use stake_pool_client::ReceiptType;
pub use staking_common::{AccountReader, Result, StakingConfig, StakingError};
