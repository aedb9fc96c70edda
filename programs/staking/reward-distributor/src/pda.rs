use solana_sdk::pubkey::Pubkey;

use crate::constants::{REWARD_DISTRIBUTOR_SEED, REWARD_ENTRY_SEED};

/// Reward distributor: ["reward-distributor", stake_pool]
pub fn find_reward_distributor_id(program_id: &Pubkey, stake_pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARD_DISTRIBUTOR_SEED, stake_pool.as_ref()], program_id)
}

/// Reward entry: ["reward-entry", reward_distributor, stake_entry]
pub fn find_reward_entry_id(
    program_id: &Pubkey,
    reward_distributor: &Pubkey,
    stake_entry: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[REWARD_ENTRY_SEED, reward_distributor.as_ref(), stake_entry.as_ref()],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ID;

    #[test]
    fn one_distributor_per_pool() {
        let pool = Pubkey::new_unique();
        assert_eq!(
            find_reward_distributor_id(&ID, &pool),
            find_reward_distributor_id(&ID, &pool)
        );
        assert_ne!(
            find_reward_distributor_id(&ID, &pool).0,
            find_reward_distributor_id(&ID, &Pubkey::new_unique()).0
        );
    }

    #[test]
    fn reward_entry_is_keyed_by_distributor_and_entry() {
        let distributor = Pubkey::new_unique();
        let entry = Pubkey::new_unique();
        let (id, _) = find_reward_entry_id(&ID, &distributor, &entry);
        assert_ne!(id, find_reward_entry_id(&ID, &Pubkey::new_unique(), &entry).0);
        assert_ne!(id, find_reward_entry_id(&ID, &distributor, &Pubkey::new_unique()).0);
        // seed order matters
        assert_ne!(id, find_reward_entry_id(&ID, &entry, &distributor).0);
    }
}
