use reward_distributor_client::{
    find_reward_distributor_id, find_reward_entry_id,
    instructions::{init_reward_entry, update_reward_entry},
};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use stake_pool_client::{
    find_metadata_id, find_stake_entry_id_from_mint, get_stake_pool,
    instructions::{init_entry, init_stake_mint, InitEntryAccounts, InitStakeMintAccounts, InitStakeMintIx},
    try_get_stake_entry,
};
use staking_common::{AccountReader, Result, StakingConfig};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct CreateStakeEntryParams {
    pub stake_pool: Pubkey,
    pub original_mint: Pubkey,
}

#[derive(Debug, Clone, Copy)]
pub struct InitializeRewardEntryParams {
    pub stake_pool: Pubkey,
    pub original_mint: Pubkey,
    /// Set right after init. Requires the payer to be the distributor authority.
    pub multiplier: Option<u64>,
}

/// Appends `init_entry` for `stake_entry`, seeded with `payer` as the staker.
pub fn with_init_stake_entry(
    ixs: &mut Vec<Instruction>,
    config: &StakingConfig,
    payer: &Pubkey,
    stake_pool: &Pubkey,
    original_mint: &Pubkey,
    stake_entry: &Pubkey,
) -> Result<()> {
    let (original_mint_metadata, _) = find_metadata_id(&config.token_metadata_program, original_mint);
    let accounts = InitEntryAccounts {
        stake_entry: *stake_entry,
        stake_pool: *stake_pool,
        original_mint: *original_mint,
        original_mint_metadata,
        payer: *payer,
    };
    ixs.push(init_entry(&config.stake_pool_program, &accounts, payer)?);
    Ok(())
}

pub fn create_stake_entry<R: AccountReader + ?Sized>(
    reader: &R,
    config: &StakingConfig,
    payer: &Pubkey,
    params: CreateStakeEntryParams,
) -> Result<(Vec<Instruction>, Pubkey)> {
    let stake_entry = find_stake_entry_id_from_mint(
        reader,
        &config.stake_pool_program,
        payer,
        &params.stake_pool,
        &params.original_mint,
    )?;

    let mut ixs = Vec::new();
    with_init_stake_entry(
        &mut ixs,
        config,
        payer,
        &params.stake_pool,
        &params.original_mint,
        &stake_entry,
    )?;
    Ok((ixs, stake_entry))
}

/// Creates whatever is missing of the stake entry and its receipt mint.
///
/// Returns the stake mint keypair when a new mint is created; it must
/// co-sign the transaction.
pub fn create_stake_entry_and_stake_mint<R: AccountReader + ?Sized>(
    reader: &R,
    config: &StakingConfig,
    payer: &Pubkey,
    params: CreateStakeEntryParams,
) -> Result<(Vec<Instruction>, Pubkey, Option<Keypair>)> {
    let program_id = &config.stake_pool_program;
    let stake_entry = find_stake_entry_id_from_mint(
        reader,
        program_id,
        payer,
        &params.stake_pool,
        &params.original_mint,
    )?;
    let existing = try_get_stake_entry(reader, program_id, &stake_entry)?;

    let mut ixs = Vec::new();
    if existing.is_none() {
        with_init_stake_entry(
            &mut ixs,
            config,
            payer,
            &params.stake_pool,
            &params.original_mint,
            &stake_entry,
        )?;
    }

    let has_stake_mint = existing
        .as_ref()
        .is_some_and(|entry| entry.parsed.stake_mint.is_some());
    if has_stake_mint {
        return Ok((ixs, stake_entry, None));
    }

    let identifier = get_stake_pool(reader, program_id, &params.stake_pool)?
        .parsed
        .identifier;
    let stake_mint = Keypair::new();
    let accounts = InitStakeMintAccounts {
        stake_entry,
        stake_pool: params.stake_pool,
        original_mint: params.original_mint,
        stake_mint: stake_mint.pubkey(),
        payer: *payer,
        token_manager_program: config.token_manager_program,
        token_metadata_program: config.token_metadata_program,
    };
    let args = InitStakeMintIx {
        name: format!("POOL{identifier} RECEIPT"),
        symbol: format!("POOL{identifier}"),
    };
    ixs.push(init_stake_mint(program_id, &accounts, &args)?);

    debug!(
        %stake_entry,
        stake_mint = %stake_mint.pubkey(),
        instructions = ixs.len(),
        "create stake entry and stake mint"
    );
    Ok((ixs, stake_entry, Some(stake_mint)))
}

/// Creates the reward entry for `payer`'s stake entry, creating the stake
/// entry first if needed.
pub fn initialize_reward_entry<R: AccountReader + ?Sized>(
    reader: &R,
    config: &StakingConfig,
    payer: &Pubkey,
    params: InitializeRewardEntryParams,
) -> Result<Vec<Instruction>> {
    let stake_entry = find_stake_entry_id_from_mint(
        reader,
        &config.stake_pool_program,
        payer,
        &params.stake_pool,
        &params.original_mint,
    )?;

    let mut ixs = Vec::new();
    if try_get_stake_entry(reader, &config.stake_pool_program, &stake_entry)?.is_none() {
        with_init_stake_entry(
            &mut ixs,
            config,
            payer,
            &params.stake_pool,
            &params.original_mint,
            &stake_entry,
        )?;
    }

    let program_id = &config.reward_distributor_program;
    let (reward_distributor, _) = find_reward_distributor_id(program_id, &params.stake_pool);
    ixs.push(init_reward_entry(program_id, &reward_distributor, &stake_entry, payer));

    if let Some(multiplier) = params.multiplier {
        let (reward_entry, _) = find_reward_entry_id(program_id, &reward_distributor, &stake_entry);
        ixs.push(update_reward_entry(
            program_id,
            &reward_entry,
            &reward_distributor,
            payer,
            multiplier,
        )?);
    }

    debug!(%stake_entry, %reward_distributor, instructions = ixs.len(), "initialize reward entry");
    Ok(ixs)
}
