//! One builder per stake pool instruction. Account order matches the
//! program's Anchor `Accounts` structs.

pub mod authorize_mint;
pub mod claim_receipt_mint;
pub mod init_entry;
pub mod init_identifier;
pub mod init_pool;
pub mod init_stake_mint;
pub mod return_receipt_mint;
pub mod stake;
pub mod unstake;
pub mod update_pool;
pub mod update_total_stake_seconds;

pub use authorize_mint::*;
pub use claim_receipt_mint::*;
pub use init_entry::*;
pub use init_identifier::*;
pub use init_pool::*;
pub use init_stake_mint::*;
pub use return_receipt_mint::*;
pub use stake::*;
pub use unstake::*;
pub use update_pool::*;
pub use update_total_stake_seconds::*;
