use reward_distributor_client::{
    find_reward_distributor_id, find_reward_entry_id,
    instructions::{self as distributor_ix, init_reward_entry, ClaimRewardsAccounts},
    try_get_reward_distributor, try_get_reward_entry, RewardDistributor,
};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use stake_pool_client::{find_stake_entry_id_from_mint, instructions::update_total_stake_seconds};
use staking_common::{AccountData, AccountReader, Result, StakingConfig, StakingError};
use tracing::debug;

use crate::token::with_find_or_init_ata;

#[derive(Debug, Clone, Copy)]
pub struct ClaimRewardsParams {
    pub stake_pool: Pubkey,
    pub original_mint: Pubkey,
    /// The caller guarantees the user's reward ATA exists.
    pub skip_reward_mint_token_account: bool,
}

/// Instructions paying out `user`'s accrued rewards for one stake entry.
pub fn claim_rewards<R: AccountReader + ?Sized>(
    reader: &R,
    config: &StakingConfig,
    user: &Pubkey,
    params: ClaimRewardsParams,
) -> Result<Vec<Instruction>> {
    let stake_entry = find_stake_entry_id_from_mint(
        reader,
        &config.stake_pool_program,
        user,
        &params.stake_pool,
        &params.original_mint,
    )?;
    let (distributor_id, _) =
        find_reward_distributor_id(&config.reward_distributor_program, &params.stake_pool);
    let distributor = try_get_reward_distributor(reader, &config.reward_distributor_program, &distributor_id)?
        .ok_or(StakingError::MissingRewardDistributor(params.stake_pool))?;

    let mut ixs = Vec::new();
    with_claim_rewards(
        &mut ixs,
        reader,
        config,
        user,
        &stake_entry,
        &distributor,
        params.skip_reward_mint_token_account,
    )?;
    Ok(ixs)
}

/// Appends the claim sequence: reward entry (if missing), reward ATA,
/// stake-seconds update, claim.
pub fn with_claim_rewards<R: AccountReader + ?Sized>(
    ixs: &mut Vec<Instruction>,
    reader: &R,
    config: &StakingConfig,
    user: &Pubkey,
    stake_entry: &Pubkey,
    distributor: &AccountData<RewardDistributor>,
    skip_reward_mint_token_account: bool,
) -> Result<()> {
    let program_id = &config.reward_distributor_program;
    let kind = distributor
        .parsed
        .distributor_kind()
        .ok_or(StakingError::UnknownDistributorKind {
            address: distributor.pubkey,
            kind: distributor.parsed.kind,
        })?;

    let (reward_entry, _) = find_reward_entry_id(program_id, &distributor.pubkey, stake_entry);
    if try_get_reward_entry(reader, program_id, &reward_entry)?.is_none() {
        ixs.push(init_reward_entry(program_id, &distributor.pubkey, stake_entry, user));
    }

    if !skip_reward_mint_token_account {
        with_find_or_init_ata(ixs, reader, &distributor.parsed.reward_mint, user, user)?;
    }

    ixs.push(update_total_stake_seconds(
        &config.stake_pool_program,
        stake_entry,
        user,
    ));

    let accounts = ClaimRewardsAccounts {
        reward_distributor: distributor.pubkey,
        stake_entry: *stake_entry,
        stake_pool: distributor.parsed.stake_pool,
        reward_mint: distributor.parsed.reward_mint,
        user: *user,
    };
    ixs.push(distributor_ix::claim_rewards(program_id, &accounts, kind));

    debug!(%stake_entry, %reward_entry, ?kind, "claim rewards");
    Ok(())
}
