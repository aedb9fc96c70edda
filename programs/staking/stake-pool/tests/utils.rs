// Test utilities for the stake pool client

#![allow(dead_code)]

use litesvm::LiteSVM;
use litesvm_token::{CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    account::Account,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use stake_pool_client::{StakeEntry, StakePool};
use staking_common::AnchorAccount;

pub const STAKE_POOL_PROGRAM_ID: Pubkey = stake_pool_client::ID;

// ======================== HELPERS ========================

pub fn setup_svm() -> LiteSVM {
    LiteSVM::new()
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

/// Write an Anchor account straight into the SVM, owned by `owner`
pub fn plant_account<T: AnchorAccount>(svm: &mut LiteSVM, address: Pubkey, owner: Pubkey, value: &T) {
    let data = value.to_account_data().expect("Account should encode");
    let lamports = svm.minimum_balance_for_rent_exemption(data.len());
    svm.set_account(
        address,
        Account {
            lamports,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        },
    )
    .expect("Setting account should succeed");
}

/// Mint `supply` tokens (0 decimals) to the authority's ATA.
/// Returns (mint, authority ATA).
pub fn create_mint_with_supply(svm: &mut LiteSVM, authority: &Keypair, supply: u64) -> (Pubkey, Pubkey) {
    let mint = CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(0)
        .send()
        .expect("Mint creation should succeed");

    let ata = CreateAssociatedTokenAccount::new(svm, authority, &mint)
        .owner(&authority.pubkey())
        .send()
        .expect("ATA creation should succeed");

    if supply > 0 {
        MintTo::new(svm, authority, &mint, &ata, supply)
            .send()
            .expect("Minting should succeed");
    }

    (mint, ata)
}

pub fn sample_stake_pool(identifier: u64, authority: Pubkey) -> StakePool {
    StakePool {
        bump: 255,
        identifier,
        authority,
        requires_creators: vec![],
        requires_collections: vec![Pubkey::new_unique()],
        requires_authorization: false,
        overlay_text: "STAKED".to_string(),
        image_uri: String::new(),
        reset_on_stake: false,
        total_staked: 0,
        cooldown_seconds: Some(60),
        min_stake_seconds: None,
        end_date: None,
    }
}

pub fn sample_stake_entry(pool: Pubkey, original_mint: Pubkey, last_staker: Pubkey, amount: u64) -> StakeEntry {
    StakeEntry {
        bump: 254,
        pool,
        amount,
        original_mint,
        original_mint_claimed: false,
        last_staker,
        last_staked_at: 1_700_000_000,
        total_stake_seconds: 0,
        stake_mint_claimed: false,
        kind: 0,
        stake_mint: None,
        cooldown_start_seconds: None,
        last_updated_at: None,
    }
}
