// PDA seeds owned by the stake pool program
pub const IDENTIFIER_SEED: &[u8] = b"identifier";
pub const STAKE_POOL_SEED: &[u8] = b"stake-pool";
pub const STAKE_ENTRY_SEED: &[u8] = b"stake-entry";
pub const STAKE_AUTHORIZATION_SEED: &[u8] = b"stake-authorization";

// Token manager program seeds (receipt custody)
pub const TOKEN_MANAGER_SEED: &[u8] = b"token-manager";
pub const MINT_COUNTER_SEED: &[u8] = b"mint-counter";
pub const MINT_MANAGER_SEED: &[u8] = b"mint-manager";

// Token metadata program seed
pub const METADATA_SEED: &[u8] = b"metadata";

/// Identifier handed to the first pool when the identifier account is absent.
pub const FIRST_POOL_IDENTIFIER: u64 = 1;

pub const DEFAULT_OVERLAY_TEXT: &str = "STAKED";
