use borsh::{BorshDeserialize, BorshSerialize};
use staking_common::AnchorAccount;

/// Global counter; `count` is the identifier the next pool will take.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Identifier {
    pub bump: u8,
    pub count: u64,
}

impl AnchorAccount for Identifier {
    const NAME: &'static str = "Identifier";
}
