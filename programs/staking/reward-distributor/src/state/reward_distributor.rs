use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use staking_common::AnchorAccount;

/// How a distributor sources reward tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RewardDistributorKind {
    /// The distributor holds mint authority over the reward mint.
    Mint = 1,
    /// The distributor pays out of a pre-funded token account.
    Treasury = 2,
}

impl TryFrom<u8> for RewardDistributorKind {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Mint),
            2 => Ok(Self::Treasury),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RewardDistributor {
    pub bump: u8,
    pub stake_pool: Pubkey,
    pub kind: u8,
    pub authority: Pubkey,
    pub reward_mint: Pubkey,
    /// Paid out per `reward_duration_seconds` of stake.
    pub reward_amount: u64,
    pub reward_duration_seconds: u128,
    pub rewards_issued: u128,
    pub max_supply: Option<u64>,
    pub default_multiplier: u64,
    pub multiplier_decimals: u8,
    pub max_reward_seconds_received: Option<u128>,
}

impl AnchorAccount for RewardDistributor {
    const NAME: &'static str = "RewardDistributor";
}

impl RewardDistributor {
    pub fn distributor_kind(&self) -> Option<RewardDistributorKind> {
        RewardDistributorKind::try_from(self.kind).ok()
    }

    pub fn is_treasury(&self) -> bool {
        self.distributor_kind() == Some(RewardDistributorKind::Treasury)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_u8() {
        for kind in [RewardDistributorKind::Mint, RewardDistributorKind::Treasury] {
            assert_eq!(RewardDistributorKind::try_from(kind as u8), Ok(kind));
        }
        assert_eq!(RewardDistributorKind::try_from(0), Err(0));
    }

    #[test]
    fn decodes_u128_fields() {
        let distributor = RewardDistributor {
            bump: 250,
            stake_pool: Pubkey::new_unique(),
            kind: RewardDistributorKind::Treasury as u8,
            authority: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            reward_amount: 1,
            reward_duration_seconds: u128::from(u64::MAX) + 1,
            rewards_issued: 0,
            max_supply: Some(100),
            default_multiplier: 1,
            multiplier_decimals: 0,
            max_reward_seconds_received: None,
        };
        let address = Pubkey::new_unique();
        let data = distributor.to_account_data().unwrap();

        let decoded = RewardDistributor::try_decode(&address, &data).unwrap();
        assert_eq!(decoded, distributor);
        assert!(decoded.is_treasury());
    }
}
