use solana_sdk::pubkey::Pubkey;
use staking_common::{
    fetch_account, token::get_mint, try_fetch_account, try_fetch_accounts, AccountData, AccountReader,
    Result,
};
use tracing::debug;

use crate::{
    pda::{find_identifier_id, find_stake_entry_id, get_stake_seed},
    state::{Identifier, StakeAuthorizationRecord, StakeEntry, StakePool},
};

pub fn get_pool_identifier<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
) -> Result<AccountData<Identifier>> {
    let (identifier_id, _) = find_identifier_id(program_id);
    fetch_account(reader, program_id, &identifier_id)
}

pub fn try_get_pool_identifier<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
) -> Result<Option<AccountData<Identifier>>> {
    let (identifier_id, _) = find_identifier_id(program_id);
    try_fetch_account(reader, program_id, &identifier_id)
}

pub fn get_stake_pool<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    stake_pool: &Pubkey,
) -> Result<AccountData<StakePool>> {
    fetch_account(reader, program_id, stake_pool)
}

pub fn try_get_stake_pool<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    stake_pool: &Pubkey,
) -> Result<Option<AccountData<StakePool>>> {
    try_fetch_account(reader, program_id, stake_pool)
}

pub fn get_stake_entry<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    stake_entry: &Pubkey,
) -> Result<AccountData<StakeEntry>> {
    fetch_account(reader, program_id, stake_entry)
}

pub fn try_get_stake_entry<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    stake_entry: &Pubkey,
) -> Result<Option<AccountData<StakeEntry>>> {
    try_fetch_account(reader, program_id, stake_entry)
}

/// Decodes every entry that exists, skipping missing ones.
pub fn get_stake_entries<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    stake_entries: &[Pubkey],
) -> Result<Vec<AccountData<StakeEntry>>> {
    let fetched = try_fetch_accounts(reader, program_id, stake_entries)?;
    Ok(fetched.into_iter().flatten().collect())
}

pub fn try_get_stake_authorization<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    stake_authorization: &Pubkey,
) -> Result<Option<AccountData<StakeAuthorizationRecord>>> {
    try_fetch_account(reader, program_id, stake_authorization)
}

/// Stake entry address for `user` staking `original_mint`. Reads the mint to
/// decide whether the entry is per-staker (fungible) or shared.
pub fn find_stake_entry_id_from_mint<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    user: &Pubkey,
    stake_pool: &Pubkey,
    original_mint: &Pubkey,
) -> Result<Pubkey> {
    let mint = get_mint(reader, original_mint)?;
    let stake_seed = get_stake_seed(mint.supply, user);
    let (stake_entry, _) = find_stake_entry_id(program_id, stake_pool, original_mint, &stake_seed);
    debug!(%stake_pool, %original_mint, supply = mint.supply, %stake_entry, "resolved stake entry");
    Ok(stake_entry)
}
