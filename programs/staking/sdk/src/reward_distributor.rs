use reward_distributor_client::{
    constants::{DEFAULT_REWARD_AMOUNT, DEFAULT_REWARD_DURATION_SECONDS},
    find_reward_distributor_id,
    instructions::{init_reward_distributor, InitRewardDistributorAccounts, InitRewardDistributorIx},
    RewardDistributorKind,
};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use staking_common::{AccountReader, Result, StakingConfig};
use tracing::debug;

use crate::token::with_find_or_init_ata;

#[derive(Debug, Clone)]
pub struct InitRewardDistributorParams {
    pub stake_pool: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_amount: Option<u64>,
    pub reward_duration_seconds: Option<u128>,
    pub kind: RewardDistributorKind,
    /// Treasury funding moved from the authority at init.
    pub supply: Option<u64>,
    pub max_supply: Option<u64>,
    pub default_multiplier: Option<u64>,
    pub multiplier_decimals: Option<u8>,
    pub max_reward_seconds_received: Option<u128>,
}

impl InitRewardDistributorParams {
    /// A Mint-kind distributor paying one token per staked second.
    pub fn new(stake_pool: Pubkey, reward_mint: Pubkey) -> Self {
        Self {
            stake_pool,
            reward_mint,
            reward_amount: None,
            reward_duration_seconds: None,
            kind: RewardDistributorKind::Mint,
            supply: None,
            max_supply: None,
            default_multiplier: None,
            multiplier_decimals: None,
            max_reward_seconds_received: None,
        }
    }

    fn to_ix(&self) -> InitRewardDistributorIx {
        InitRewardDistributorIx {
            reward_amount: self.reward_amount.unwrap_or(DEFAULT_REWARD_AMOUNT),
            reward_duration_seconds: self
                .reward_duration_seconds
                .unwrap_or(DEFAULT_REWARD_DURATION_SECONDS),
            kind: self.kind as u8,
            supply: self.supply,
            max_supply: self.max_supply,
            default_multiplier: self.default_multiplier,
            multiplier_decimals: self.multiplier_decimals,
            max_reward_seconds_received: self.max_reward_seconds_received,
        }
    }
}

/// Appends the instructions creating the pool's reward distributor and
/// returns its id. `authority` signs and pays.
pub fn with_init_reward_distributor<R: AccountReader + ?Sized>(
    ixs: &mut Vec<Instruction>,
    reader: &R,
    config: &StakingConfig,
    authority: &Pubkey,
    params: &InitRewardDistributorParams,
) -> Result<Pubkey> {
    let program_id = &config.reward_distributor_program;
    let (reward_distributor, _) = find_reward_distributor_id(program_id, &params.stake_pool);

    if params.kind == RewardDistributorKind::Treasury {
        with_find_or_init_ata(ixs, reader, &params.reward_mint, &reward_distributor, authority)?;
    }

    let accounts = InitRewardDistributorAccounts {
        reward_distributor,
        stake_pool: params.stake_pool,
        reward_mint: params.reward_mint,
        authority: *authority,
        payer: *authority,
    };
    ixs.push(init_reward_distributor(program_id, &accounts, &params.to_ix())?);

    debug!(
        stake_pool = %params.stake_pool,
        %reward_distributor,
        kind = ?params.kind,
        "init reward distributor"
    );
    Ok(reward_distributor)
}

pub fn create_reward_distributor<R: AccountReader + ?Sized>(
    reader: &R,
    config: &StakingConfig,
    authority: &Pubkey,
    params: &InitRewardDistributorParams,
) -> Result<(Vec<Instruction>, Pubkey)> {
    let mut ixs = Vec::new();
    let reward_distributor = with_init_reward_distributor(&mut ixs, reader, config, authority, params)?;
    Ok((ixs, reward_distributor))
}
