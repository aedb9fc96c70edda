// Account reader tests for the stake pool client using LiteSVM
//
// Accounts are written straight into the SVM in the program's layout, then
// read back through the `AccountReader` implementation for LiteSVM. Mints
// are real SPL mints created with litesvm-token.

mod utils;

use solana_sdk::{native_token::LAMPORTS_PER_SOL, pubkey::Pubkey, signature::Signer};
use stake_pool_client::{
    find_identifier_id, find_stake_entry_id, find_stake_entry_id_from_mint, find_stake_pool_id,
    get_pool_identifier, get_stake_entries, get_stake_entry, get_stake_pool, try_get_pool_identifier,
    try_get_stake_entry, Identifier,
};
use staking_common::StakingError;
use utils::*;

#[test]
fn test_read_identifier_and_pool() {
    println!("[TEST START] test_read_identifier_and_pool");
    let mut svm = setup_svm();

    assert!(try_get_pool_identifier(&svm, &STAKE_POOL_PROGRAM_ID)
        .expect("Read should succeed")
        .is_none());

    let (identifier_id, _) = find_identifier_id(&STAKE_POOL_PROGRAM_ID);
    plant_account(
        &mut svm,
        identifier_id,
        STAKE_POOL_PROGRAM_ID,
        &Identifier { bump: 255, count: 4 },
    );
    println!("[Setup] Identifier planted with count 4");

    let identifier = get_pool_identifier(&svm, &STAKE_POOL_PROGRAM_ID).expect("Identifier should decode");
    assert_eq!(identifier.pubkey, identifier_id);
    assert_eq!(identifier.parsed.count, 4);

    let authority = Pubkey::new_unique();
    let (stake_pool_id, _) = find_stake_pool_id(&STAKE_POOL_PROGRAM_ID, 3);
    let pool = sample_stake_pool(3, authority);
    plant_account(&mut svm, stake_pool_id, STAKE_POOL_PROGRAM_ID, &pool);

    let fetched = get_stake_pool(&svm, &STAKE_POOL_PROGRAM_ID, &stake_pool_id).expect("Pool should decode");
    assert_eq!(fetched.parsed, pool);
    println!("[TEST END] test_read_identifier_and_pool");
}

#[test]
fn test_stake_entry_id_from_fungible_mint_is_per_staker() {
    println!("[TEST START] test_stake_entry_id_from_fungible_mint_is_per_staker");
    let mut svm = setup_svm();
    let authority = create_funded_account(&mut svm, 10 * LAMPORTS_PER_SOL);
    let (mint, _) = create_mint_with_supply(&mut svm, &authority, 10);
    println!("[Setup] Fungible mint with supply 10: {}", mint);

    let stake_pool = Pubkey::new_unique();
    let user = authority.pubkey();
    let stake_entry = find_stake_entry_id_from_mint(&svm, &STAKE_POOL_PROGRAM_ID, &user, &stake_pool, &mint)
        .expect("Stake entry should resolve");

    let (expected, _) = find_stake_entry_id(&STAKE_POOL_PROGRAM_ID, &stake_pool, &mint, &user);
    assert_eq!(stake_entry, expected);
    println!("[TEST END] test_stake_entry_id_from_fungible_mint_is_per_staker");
}

#[test]
fn test_stake_entry_id_from_single_supply_mint_is_shared() {
    let mut svm = setup_svm();
    let authority = create_funded_account(&mut svm, 10 * LAMPORTS_PER_SOL);
    let (mint, _) = create_mint_with_supply(&mut svm, &authority, 1);

    let stake_pool = Pubkey::new_unique();
    let stake_entry = find_stake_entry_id_from_mint(
        &svm,
        &STAKE_POOL_PROGRAM_ID,
        &authority.pubkey(),
        &stake_pool,
        &mint,
    )
    .expect("Stake entry should resolve");

    let (expected, _) = find_stake_entry_id(&STAKE_POOL_PROGRAM_ID, &stake_pool, &mint, &Pubkey::default());
    assert_eq!(stake_entry, expected);
}

#[test]
fn test_stake_entry_id_from_missing_mint_fails() {
    let svm = setup_svm();
    let mint = Pubkey::new_unique();
    let err = find_stake_entry_id_from_mint(
        &svm,
        &STAKE_POOL_PROGRAM_ID,
        &Pubkey::new_unique(),
        &Pubkey::new_unique(),
        &mint,
    )
    .unwrap_err();
    assert!(matches!(err, StakingError::AccountNotFound(missing) if missing == mint));
}

#[test]
fn test_stake_entries_batch_skips_missing() {
    let mut svm = setup_svm();
    let pool = Pubkey::new_unique();
    let staker = Pubkey::new_unique();

    let first = Pubkey::new_unique();
    let second = Pubkey::new_unique();
    let missing = Pubkey::new_unique();
    plant_account(&mut svm, first, STAKE_POOL_PROGRAM_ID, &sample_stake_entry(pool, Pubkey::new_unique(), staker, 1));
    plant_account(&mut svm, second, STAKE_POOL_PROGRAM_ID, &sample_stake_entry(pool, Pubkey::new_unique(), staker, 7));

    let entries = get_stake_entries(&svm, &STAKE_POOL_PROGRAM_ID, &[first, missing, second])
        .expect("Batch read should succeed");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].pubkey, first);
    assert_eq!(entries[1].parsed.amount, 7);

    assert!(try_get_stake_entry(&svm, &STAKE_POOL_PROGRAM_ID, &missing)
        .expect("Read should succeed")
        .is_none());
}

#[test]
fn test_stake_entry_owned_by_other_program_is_rejected() {
    let mut svm = setup_svm();
    let impostor = Pubkey::new_unique();
    let address = Pubkey::new_unique();
    plant_account(
        &mut svm,
        address,
        impostor,
        &sample_stake_entry(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique(), 1),
    );

    let err = get_stake_entry(&svm, &STAKE_POOL_PROGRAM_ID, &address).unwrap_err();
    assert!(matches!(err, StakingError::InvalidOwner { actual, .. } if actual == impostor));
}

#[test]
fn test_pool_account_is_not_a_stake_entry() {
    let mut svm = setup_svm();
    let (stake_pool_id, _) = find_stake_pool_id(&STAKE_POOL_PROGRAM_ID, 1);
    plant_account(
        &mut svm,
        stake_pool_id,
        STAKE_POOL_PROGRAM_ID,
        &sample_stake_pool(1, Pubkey::new_unique()),
    );

    let err = get_stake_entry(&svm, &STAKE_POOL_PROGRAM_ID, &stake_pool_id).unwrap_err();
    assert!(matches!(
        err,
        StakingError::InvalidDiscriminator { expected: "StakeEntry", .. }
    ));
}
