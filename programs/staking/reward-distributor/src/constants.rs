pub const REWARD_DISTRIBUTOR_SEED: &[u8] = b"reward-distributor";
pub const REWARD_ENTRY_SEED: &[u8] = b"reward-entry";

// Defaults applied when a distributor is created without explicit values
pub const DEFAULT_REWARD_AMOUNT: u64 = 1;
pub const DEFAULT_REWARD_DURATION_SECONDS: u128 = 1;
