//! Program-id configuration.
//!
//! The clients default to the well-known deployments. Local validators and
//! forks can point them elsewhere with a TOML file or environment variables:
//!
//! ```toml
//! stake_pool_program = "stkBL96RZkjY5ine4TvPihGqW8UHJfch2cokjAPzV8i"
//! reward_distributor_program = "rwdNPNPS6zNrtF6s5m6KgG4Q8hJh6JaBGBrYsgF7XCq"
//! ```

use std::str::FromStr;

use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::error::{Result, StakingError};

pub const DEFAULT_STAKE_POOL_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("stkBL96RZkjY5ine4TvPihGqW8UHJfch2cokjAPzV8i");
pub const DEFAULT_REWARD_DISTRIBUTOR_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("rwdNPNPS6zNrtF6s5m6KgG4Q8hJh6JaBGBrYsgF7XCq");
pub const DEFAULT_TOKEN_MANAGER_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("mgr99QFMYByTqGPWmNqunV7vBLmWWXdSrHUfV8Jf3JM");
pub const DEFAULT_TOKEN_METADATA_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

pub const STAKE_POOL_PROGRAM_ENV: &str = "STAKE_POOL_PROGRAM_ID";
pub const REWARD_DISTRIBUTOR_PROGRAM_ENV: &str = "REWARD_DISTRIBUTOR_PROGRAM_ID";
pub const TOKEN_MANAGER_PROGRAM_ENV: &str = "TOKEN_MANAGER_PROGRAM_ID";
pub const TOKEN_METADATA_PROGRAM_ENV: &str = "TOKEN_METADATA_PROGRAM_ID";

/// Program ids the clients address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakingConfig {
    pub stake_pool_program: Pubkey,
    pub reward_distributor_program: Pubkey,
    pub token_manager_program: Pubkey,
    pub token_metadata_program: Pubkey,
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self {
            stake_pool_program: DEFAULT_STAKE_POOL_PROGRAM_ID,
            reward_distributor_program: DEFAULT_REWARD_DISTRIBUTOR_PROGRAM_ID,
            token_manager_program: DEFAULT_TOKEN_MANAGER_PROGRAM_ID,
            token_metadata_program: DEFAULT_TOKEN_METADATA_PROGRAM_ID,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    stake_pool_program: Option<String>,
    #[serde(default)]
    reward_distributor_program: Option<String>,
    #[serde(default)]
    token_manager_program: Option<String>,
    #[serde(default)]
    token_metadata_program: Option<String>,
}

impl StakingConfig {
    /// Parses a TOML document. Keys that are absent keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(source)?;
        let mut config = Self::default();
        override_with(&mut config.stake_pool_program, "stake_pool_program", raw.stake_pool_program)?;
        override_with(
            &mut config.reward_distributor_program,
            "reward_distributor_program",
            raw.reward_distributor_program,
        )?;
        override_with(
            &mut config.token_manager_program,
            "token_manager_program",
            raw.token_manager_program,
        )?;
        override_with(
            &mut config.token_metadata_program,
            "token_metadata_program",
            raw.token_metadata_program,
        )?;
        Ok(config)
    }

    /// Defaults overridden by the `*_PROGRAM_ID` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by environment variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = [
            (&mut self.stake_pool_program, STAKE_POOL_PROGRAM_ENV),
            (&mut self.reward_distributor_program, REWARD_DISTRIBUTOR_PROGRAM_ENV),
            (&mut self.token_manager_program, TOKEN_MANAGER_PROGRAM_ENV),
            (&mut self.token_metadata_program, TOKEN_METADATA_PROGRAM_ENV),
        ];
        for (slot, name) in overrides {
            override_with(slot, name, lookup(name))?;
        }
        Ok(self)
    }
}

fn override_with(slot: &mut Pubkey, name: &'static str, value: Option<String>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let program_id = parse_program_id(name, &value)?;
    debug!(setting = name, %program_id, "overriding program id");
    *slot = program_id;
    Ok(())
}

fn parse_program_id(name: &'static str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value.trim()).map_err(|_| StakingError::InvalidProgramId {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_document_keeps_defaults() {
        let config = StakingConfig::from_toml_str("").unwrap();
        assert_eq!(config, StakingConfig::default());
    }

    #[test]
    fn toml_overrides_selected_programs() {
        let local = Pubkey::new_unique();
        let source = format!("reward_distributor_program = \"{}\"\n", local);

        let config = StakingConfig::from_toml_str(&source).unwrap();
        assert_eq!(config.reward_distributor_program, local);
        assert_eq!(config.stake_pool_program, DEFAULT_STAKE_POOL_PROGRAM_ID);
        assert_eq!(config.token_metadata_program, DEFAULT_TOKEN_METADATA_PROGRAM_ID);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = StakingConfig::from_toml_str("cluster = \"devnet\"").unwrap_err();
        assert!(matches!(err, StakingError::Config(_)));
    }

    #[test]
    fn invalid_program_id_is_reported() {
        let err = StakingConfig::from_toml_str("stake_pool_program = \"not-a-key\"").unwrap_err();
        assert!(matches!(
            err,
            StakingError::InvalidProgramId { name: "stake_pool_program", .. }
        ));
    }

    #[test]
    fn env_style_overrides() {
        let token_manager = Pubkey::new_unique();
        let metadata = Pubkey::new_unique();
        let vars: HashMap<&str, String> = HashMap::from([
            (TOKEN_MANAGER_PROGRAM_ENV, token_manager.to_string()),
            (TOKEN_METADATA_PROGRAM_ENV, format!("  {}  ", metadata)),
        ]);

        let config = StakingConfig::default()
            .with_overrides(|key| vars.get(key).cloned())
            .unwrap();
        assert_eq!(config.token_manager_program, token_manager);
        assert_eq!(config.token_metadata_program, metadata);
        assert_eq!(config.stake_pool_program, DEFAULT_STAKE_POOL_PROGRAM_ID);
    }
}
