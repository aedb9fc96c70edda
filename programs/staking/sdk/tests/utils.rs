// Test utilities for the staking SDK

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use litesvm::LiteSVM;
use litesvm_token::{CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    account::Account,
    instruction::Instruction,
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use staking_common::{instruction_discriminator, AnchorAccount, StakingConfig, ASSOCIATED_TOKEN_PROGRAM_ID};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

// Program dumps, fetched from a cluster with `solana program dump`
pub fn fixtures(config: &StakingConfig) -> [(&'static str, Pubkey); 4] {
    [
        ("stake_pool.so", config.stake_pool_program),
        ("reward_distributor.so", config.reward_distributor_program),
        ("token_manager.so", config.token_manager_program),
        ("mpl_token_metadata.so", config.token_metadata_program),
    ]
}

// ======================== SETUP ========================

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("staking_sdk=debug"));
    let _ = Registry::default()
        .with(filter)
        .with(fmt::layer().with_test_writer())
        .try_init();
}

pub fn setup_svm() -> LiteSVM {
    init_tracing();
    LiteSVM::new()
}

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// SVM with the staking programs loaded, or `None` when the dumps are missing
pub fn setup_svm_with_programs(config: &StakingConfig) -> Option<LiteSVM> {
    let missing: Vec<&str> = fixtures(config)
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| !fixture_path(name).exists())
        .collect();
    if !missing.is_empty() {
        println!("[SKIP] Program dumps missing from tests/fixtures: {}", missing.join(", "));
        return None;
    }

    let mut svm = setup_svm();
    for (name, program_id) in fixtures(config) {
        let bytes = std::fs::read(fixture_path(name)).expect("Failed to read program dump");
        svm.add_program(program_id, &bytes)
            .expect("Failed to add program");
        println!("[Setup] Loaded {} at {}", name, program_id);
    }
    Some(svm)
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn create_funded_wallet(svm: &mut LiteSVM) -> Keypair {
    create_funded_account(svm, 10 * LAMPORTS_PER_SOL)
}

pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);
}

// ======================== TOKEN HELPERS ========================

/// New 0-decimal mint with `amount` minted to `target`'s ATA.
/// Returns (mint, target ATA).
pub fn create_mint_to(svm: &mut LiteSVM, mint_authority: &Keypair, target: &Pubkey, amount: u64) -> (Pubkey, Pubkey) {
    let mint = CreateMint::new(svm, mint_authority)
        .authority(&mint_authority.pubkey())
        .decimals(0)
        .send()
        .expect("Mint creation should succeed");

    let ata = CreateAssociatedTokenAccount::new(svm, mint_authority, &mint)
        .owner(target)
        .send()
        .expect("ATA creation should succeed");

    if amount > 0 {
        MintTo::new(svm, mint_authority, &mint, &ata, amount)
            .send()
            .expect("Minting should succeed");
    }

    (mint, ata)
}

// ======================== ACCOUNT HELPERS ========================

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

// ======================== TRANSACTION HELPERS ========================

pub fn send_ixs_expect_success(svm: &mut LiteSVM, ixs: &[Instruction], payer: &Keypair, signers: &[&Keypair]) {
    let blockhash = svm.latest_blockhash();

    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), signers, blockhash);

    svm.send_transaction(tx)
        .expect("Transaction should succeed");
}

// ======================== ASSERTIONS ========================

pub fn assert_anchor_ix(ix: &Instruction, program_id: &Pubkey, method: &str) {
    assert_eq!(ix.program_id, *program_id, "program of {}", method);
    assert_eq!(ix.data[..8], instruction_discriminator(method), "discriminator of {}", method);
}

/// Idempotent ATA create for `owner`'s `mint` account
pub fn assert_create_ata_ix(ix: &Instruction, mint: &Pubkey, owner: &Pubkey) {
    assert_eq!(ix.program_id, ASSOCIATED_TOKEN_PROGRAM_ID);
    assert_eq!(ix.data, vec![1]);
    assert_eq!(ix.accounts[2].pubkey, *owner);
    assert_eq!(ix.accounts[3].pubkey, *mint);
}
