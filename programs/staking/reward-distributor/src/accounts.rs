use solana_sdk::pubkey::Pubkey;
use staking_common::{fetch_account, try_fetch_account, AccountData, AccountReader, Result};

use crate::state::{RewardDistributor, RewardEntry};

pub fn get_reward_distributor<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    reward_distributor: &Pubkey,
) -> Result<AccountData<RewardDistributor>> {
    fetch_account(reader, program_id, reward_distributor)
}

pub fn try_get_reward_distributor<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    reward_distributor: &Pubkey,
) -> Result<Option<AccountData<RewardDistributor>>> {
    try_fetch_account(reader, program_id, reward_distributor)
}

pub fn get_reward_entry<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    reward_entry: &Pubkey,
) -> Result<AccountData<RewardEntry>> {
    fetch_account(reader, program_id, reward_entry)
}

pub fn try_get_reward_entry<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    reward_entry: &Pubkey,
) -> Result<Option<AccountData<RewardEntry>>> {
    try_fetch_account(reader, program_id, reward_entry)
}
