use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use stake_pool_client::{
    constants::{DEFAULT_OVERLAY_TEXT, FIRST_POOL_IDENTIFIER},
    find_stake_authorization_id, find_stake_pool_id,
    instructions::{authorize_mint, init_identifier, init_pool, InitPoolIx},
    try_get_pool_identifier, try_get_stake_authorization,
};
use staking_common::{AccountReader, Result, StakingConfig};
use tracing::debug;

/// Pool settings. Everything left as `None` or empty gets the permissive
/// default: authority is the payer, any mint may stake, no cooldown.
#[derive(Debug, Clone, Default)]
pub struct CreateStakePoolParams {
    pub authority: Option<Pubkey>,
    pub requires_collections: Vec<Pubkey>,
    pub requires_creators: Vec<Pubkey>,
    pub requires_authorization: bool,
    pub overlay_text: Option<String>,
    pub image_uri: Option<String>,
    pub reset_on_stake: bool,
    pub cooldown_seconds: Option<u32>,
    pub min_stake_seconds: Option<u32>,
    pub end_date: Option<i64>,
}

impl CreateStakePoolParams {
    fn into_ix(self, payer: &Pubkey) -> InitPoolIx {
        InitPoolIx {
            overlay_text: self
                .overlay_text
                .unwrap_or_else(|| DEFAULT_OVERLAY_TEXT.to_string()),
            image_uri: self.image_uri.unwrap_or_default(),
            requires_collections: self.requires_collections,
            requires_creators: self.requires_creators,
            requires_authorization: self.requires_authorization,
            authority: self.authority.unwrap_or(*payer),
            reset_on_stake: self.reset_on_stake,
            cooldown_seconds: self.cooldown_seconds,
            min_stake_seconds: self.min_stake_seconds,
            end_date: self.end_date,
        }
    }
}

/// Instructions creating the next stake pool, and that pool's id.
///
/// The pool id is taken from the identifier counter. On a fresh deployment
/// the counter is created first and the pool gets identifier 1.
pub fn create_stake_pool<R: AccountReader + ?Sized>(
    reader: &R,
    config: &StakingConfig,
    payer: &Pubkey,
    params: CreateStakePoolParams,
) -> Result<(Vec<Instruction>, Pubkey)> {
    let program_id = &config.stake_pool_program;
    let mut ixs = Vec::new();

    let identifier = match try_get_pool_identifier(reader, program_id)? {
        Some(identifier) => identifier.parsed.count,
        None => {
            ixs.push(init_identifier(program_id, payer));
            FIRST_POOL_IDENTIFIER
        }
    };

    let (stake_pool, _) = find_stake_pool_id(program_id, identifier);
    ixs.push(init_pool(program_id, payer, identifier, &params.into_ix(payer))?);

    debug!(%stake_pool, identifier, instructions = ixs.len(), "create stake pool");
    Ok((ixs, stake_pool))
}

/// Instructions whitelisting `mint` on a pool that requires authorization.
/// Empty when the mint already has a stake authorization record.
pub fn authorize_stake_mint<R: AccountReader + ?Sized>(
    reader: &R,
    config: &StakingConfig,
    payer: &Pubkey,
    stake_pool: &Pubkey,
    mint: &Pubkey,
) -> Result<Vec<Instruction>> {
    let program_id = &config.stake_pool_program;
    let (stake_authorization, _) = find_stake_authorization_id(program_id, stake_pool, mint);
    if try_get_stake_authorization(reader, program_id, &stake_authorization)?.is_some() {
        debug!(%stake_pool, %mint, "mint already authorized");
        return Ok(Vec::new());
    }
    Ok(vec![authorize_mint(program_id, stake_pool, mint, payer)?])
}
