use std::time::{SystemTime, UNIX_EPOCH};

use reward_distributor_client::{
    find_reward_distributor_id, instructions::init_reward_entry, try_get_reward_distributor,
};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use stake_pool_client::{
    find_stake_entry_id, find_stake_entry_id_from_mint, get_stake_entry, get_stake_pool, get_stake_seed,
    instructions::{
        self as pool_ix, claim_receipt_mint, return_receipt_mint, ClaimReceiptMintAccounts,
        ReturnReceiptMintAccounts, StakeAccounts, UnstakeAccounts,
    },
    try_get_stake_entry, ReceiptType, StakeEntry, StakePool,
};
use staking_common::{token::get_mint, AccountReader, Result, StakingConfig, StakingError};
use tracing::debug;

use crate::{entry::with_init_stake_entry, rewards::with_claim_rewards, token::with_find_or_init_ata};

#[derive(Debug, Clone, Copy)]
pub struct StakeParams {
    pub stake_pool: Pubkey,
    pub original_mint: Pubkey,
    pub user_original_mint_token_account: Pubkey,
    /// `None` stakes without issuing a receipt.
    pub receipt_type: Option<ReceiptType>,
    /// Defaults to 1.
    pub amount: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
pub struct UnstakeParams {
    pub stake_pool: Pubkey,
    pub original_mint: Pubkey,
    pub skip_reward_mint_token_account: bool,
    /// Unix time the cooldown and minimum stake period are measured
    /// against. Defaults to the system clock.
    pub now: Option<i64>,
}

/// Instructions staking `amount` of `original_mint` from `user`.
///
/// A missing stake entry is created in the same transaction, together with
/// its reward entry when the pool has a distributor. A receipt is only
/// issued to an empty entry; a `Receipt` stake needs the entry's stake mint
/// to exist already, and fungible mints cannot be locked as `Original`.
pub fn stake<R: AccountReader + ?Sized>(
    reader: &R,
    config: &StakingConfig,
    user: &Pubkey,
    params: StakeParams,
) -> Result<Vec<Instruction>> {
    let program_id = &config.stake_pool_program;
    let amount = params.amount.unwrap_or(1);
    let mint = get_mint(reader, &params.original_mint)?;
    if params.receipt_type == Some(ReceiptType::Original) && (mint.supply > 1 || amount > 1) {
        return Err(StakingError::FungibleOriginalReceipt(params.original_mint));
    }

    let stake_seed = get_stake_seed(mint.supply, user);
    let (stake_entry, _) =
        find_stake_entry_id(program_id, &params.stake_pool, &params.original_mint, &stake_seed);
    let existing = try_get_stake_entry(reader, program_id, &stake_entry)?;

    let receipt_mint = match params.receipt_type {
        Some(ReceiptType::Receipt) => Some(
            existing
                .as_ref()
                .and_then(|entry| entry.parsed.stake_mint)
                .ok_or(StakingError::MissingStakeMint(stake_entry))?,
        ),
        Some(ReceiptType::Original) => Some(params.original_mint),
        Some(ReceiptType::None) | None => None,
    };
    if receipt_mint.is_some() && existing.as_ref().is_some_and(|entry| entry.parsed.receipt_claimed()) {
        return Err(StakingError::ReceiptAlreadyClaimed(stake_entry));
    }

    let mut ixs = Vec::new();
    if existing.is_none() {
        with_init_stake_entry(
            &mut ixs,
            config,
            user,
            &params.stake_pool,
            &params.original_mint,
            &stake_entry,
        )?;

        let distributor_program = &config.reward_distributor_program;
        let (reward_distributor, _) = find_reward_distributor_id(distributor_program, &params.stake_pool);
        if try_get_reward_distributor(reader, distributor_program, &reward_distributor)?.is_some() {
            ixs.push(init_reward_entry(
                distributor_program,
                &reward_distributor,
                &stake_entry,
                user,
            ));
        }
    }

    with_find_or_init_ata(&mut ixs, reader, &params.original_mint, &stake_entry, user)?;

    let accounts = StakeAccounts {
        stake_entry,
        stake_pool: params.stake_pool,
        original_mint: params.original_mint,
        user: *user,
        user_original_mint_token_account: params.user_original_mint_token_account,
    };
    ixs.push(pool_ix::stake(program_id, &accounts, amount)?);

    // Tokens already in the entry were staked under the receipt issued then
    let entry_is_empty = existing.as_ref().map_or(true, |entry| entry.parsed.amount == 0);
    if let Some(receipt_mint) = receipt_mint.filter(|_| entry_is_empty) {
        let accounts = ClaimReceiptMintAccounts {
            stake_entry,
            original_mint: params.original_mint,
            receipt_mint,
            user: *user,
            token_manager_program: config.token_manager_program,
        };
        ixs.push(claim_receipt_mint(program_id, &accounts));
    }

    debug!(
        stake_pool = %params.stake_pool,
        %stake_entry,
        amount,
        receipt = ?params.receipt_type,
        instructions = ixs.len(),
        "stake"
    );
    Ok(ixs)
}

/// Mint whose token manager must be invalidated before unstaking, if any.
fn claimed_receipt_mint(entry: &StakeEntry) -> Option<Pubkey> {
    match entry.stake_mint {
        Some(stake_mint) if entry.stake_mint_claimed => Some(stake_mint),
        _ if entry.original_mint_claimed => Some(entry.original_mint),
        _ => None,
    }
}

/// Whether a claimed receipt may come back now. Until then `unstake` only
/// starts the pool's cooldown.
fn cooldown_elapsed(pool: &StakePool, entry: &StakeEntry, now: i64) -> bool {
    match pool.cooldown_seconds {
        None | Some(0) => true,
        Some(cooldown) => entry
            .cooldown_start_seconds
            .is_some_and(|start| now - start >= i64::from(cooldown)),
    }
}

/// Seconds left before the pool's minimum stake period is over.
fn min_stake_remaining(pool: &StakePool, entry: &StakeEntry, now: i64) -> Option<i64> {
    let min_stake_seconds = i64::from(pool.min_stake_seconds.filter(|seconds| *seconds > 0)?);
    let remaining = min_stake_seconds - (now - entry.last_staked_at);
    (entry.is_staked() && remaining > 0).then_some(remaining)
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default()
}

/// Instructions returning `user`'s stake: hand back any claimed receipt once
/// the cooldown allows, unstake, then claim rewards when the pool has a
/// distributor.
pub fn unstake<R: AccountReader + ?Sized>(
    reader: &R,
    config: &StakingConfig,
    user: &Pubkey,
    params: UnstakeParams,
) -> Result<Vec<Instruction>> {
    let program_id = &config.stake_pool_program;
    let stake_entry = find_stake_entry_id_from_mint(
        reader,
        program_id,
        user,
        &params.stake_pool,
        &params.original_mint,
    )?;
    let entry = get_stake_entry(reader, program_id, &stake_entry)?;
    let pool = get_stake_pool(reader, program_id, &params.stake_pool)?;
    let now = params.now.unwrap_or_else(unix_now);

    if let Some(remaining) = min_stake_remaining(&pool.parsed, &entry.parsed, now) {
        return Err(StakingError::MinStakeSecondsNotSatisfied {
            stake_entry,
            remaining,
        });
    }

    let mut ixs = Vec::new();
    if let Some(receipt_mint) = claimed_receipt_mint(&entry.parsed) {
        if cooldown_elapsed(&pool.parsed, &entry.parsed, now) {
            let accounts = ReturnReceiptMintAccounts {
                stake_entry,
                receipt_mint,
                user: *user,
                token_manager_program: config.token_manager_program,
            };
            ixs.push(return_receipt_mint(program_id, &accounts));
        }
    }

    with_find_or_init_ata(&mut ixs, reader, &params.original_mint, user, user)?;
    with_find_or_init_ata(&mut ixs, reader, &params.original_mint, &stake_entry, user)?;

    let accounts = UnstakeAccounts {
        stake_pool: params.stake_pool,
        stake_entry,
        original_mint: params.original_mint,
        user: *user,
        stake_mint: entry.parsed.stake_mint,
    };
    ixs.push(pool_ix::unstake(program_id, &accounts));

    let (reward_distributor, _) =
        find_reward_distributor_id(&config.reward_distributor_program, &params.stake_pool);
    if let Some(distributor) =
        try_get_reward_distributor(reader, &config.reward_distributor_program, &reward_distributor)?
    {
        with_claim_rewards(
            &mut ixs,
            reader,
            config,
            user,
            &stake_entry,
            &distributor,
            params.skip_reward_mint_token_account,
        )?;
    }

    debug!(
        stake_pool = %params.stake_pool,
        %stake_entry,
        instructions = ixs.len(),
        "unstake"
    );
    Ok(ixs)
}
