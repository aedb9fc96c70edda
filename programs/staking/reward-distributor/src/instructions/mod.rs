//! One builder per reward distributor instruction. Treasury distributors
//! take their token accounts as trailing (remaining) accounts.

pub mod claim_rewards;
pub mod close_reward_distributor;
pub mod init_reward_distributor;
pub mod init_reward_entry;
pub mod update_reward_entry;

pub use claim_rewards::*;
pub use close_reward_distributor::*;
pub use init_reward_distributor::*;
pub use init_reward_entry::*;
pub use update_reward_entry::*;
