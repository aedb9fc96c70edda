use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Client-side failures. Rejections from the on-chain programs are not
/// wrapped here; they come back from whatever executes the transaction.
#[derive(Debug, Error)]
pub enum StakingError {
    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),

    #[error("Account {address} is owned by {actual}, expected {expected}")]
    InvalidOwner {
        address: Pubkey,
        expected: Pubkey,
        actual: Pubkey,
    },

    #[error("Account {address} is not a {expected} account")]
    InvalidDiscriminator {
        address: Pubkey,
        expected: &'static str,
    },

    #[error("Failed to decode {kind} account {address}: {source}")]
    Decode {
        kind: &'static str,
        address: Pubkey,
        #[source]
        source: std::io::Error,
    },

    #[error("Mint {0} could not be unpacked")]
    InvalidMint(Pubkey),

    #[error("Stake entry {0} has no stake mint, initialize the stake mint first")]
    MissingStakeMint(Pubkey),

    #[error("Receipt for stake entry {0} is already claimed")]
    ReceiptAlreadyClaimed(Pubkey),

    #[error("Mint {0} is fungible and cannot be locked as an original receipt")]
    FungibleOriginalReceipt(Pubkey),

    #[error("Stake entry {stake_entry} must stay staked {remaining} more seconds")]
    MinStakeSecondsNotSatisfied { stake_entry: Pubkey, remaining: i64 },

    #[error("No reward distributor exists for stake pool {0}")]
    MissingRewardDistributor(Pubkey),

    #[error("Reward distributor {address} has unknown kind {kind}")]
    UnknownDistributorKind { address: Pubkey, kind: u8 },

    #[error("Invalid program id for {name}: {value}")]
    InvalidProgramId { name: &'static str, value: String },

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to serialize instruction data: {0}")]
    Serialize(#[from] std::io::Error),

    #[error("Account reader error: {0}")]
    Reader(String),
}

pub type Result<T> = std::result::Result<T, StakingError>;
