use std::collections::HashMap;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{account::Account, pubkey::Pubkey};
use tracing::trace;

use crate::{
    discriminator::account_discriminator,
    error::{Result, StakingError},
};

/// Read access to on-chain accounts.
///
/// This is the only place the clients touch the network. Connection setup,
/// commitment levels and retries belong to whoever implements it.
pub trait AccountReader {
    /// Returns `Ok(None)` when the account does not exist.
    fn get_account(&self, address: &Pubkey) -> Result<Option<Account>>;

    fn get_multiple_accounts(&self, addresses: &[Pubkey]) -> Result<Vec<Option<Account>>> {
        addresses
            .iter()
            .map(|address| self.get_account(address))
            .collect()
    }
}

impl<T: AccountReader + ?Sized> AccountReader for &T {
    fn get_account(&self, address: &Pubkey) -> Result<Option<Account>> {
        (**self).get_account(address)
    }

    fn get_multiple_accounts(&self, addresses: &[Pubkey]) -> Result<Vec<Option<Account>>> {
        (**self).get_multiple_accounts(addresses)
    }
}

impl AccountReader for HashMap<Pubkey, Account> {
    fn get_account(&self, address: &Pubkey) -> Result<Option<Account>> {
        Ok(self.get(address).cloned())
    }
}

#[cfg(feature = "litesvm")]
impl AccountReader for litesvm::LiteSVM {
    fn get_account(&self, address: &Pubkey) -> Result<Option<Account>> {
        Ok(litesvm::LiteSVM::get_account(self, address))
    }
}

/// An account owned by an Anchor program: 8-byte discriminator followed by
/// the Borsh-encoded fields.
pub trait AnchorAccount: BorshSerialize + BorshDeserialize {
    /// Rust type name of the account in the owning program.
    const NAME: &'static str;

    fn discriminator() -> [u8; 8] {
        account_discriminator(Self::NAME)
    }

    /// Decodes account data. Trailing bytes past the encoded fields are
    /// ignored since programs allocate accounts with slack.
    fn try_decode(address: &Pubkey, data: &[u8]) -> Result<Self> {
        if data.len() < 8 || data[..8] != Self::discriminator() {
            return Err(StakingError::InvalidDiscriminator {
                address: *address,
                expected: Self::NAME,
            });
        }

        let mut body = &data[8..];
        Self::deserialize(&mut body).map_err(|source| StakingError::Decode {
            kind: Self::NAME,
            address: *address,
            source,
        })
    }

    /// Encodes the account the way the owning program stores it.
    fn to_account_data(&self) -> Result<Vec<u8>> {
        let mut data = Self::discriminator().to_vec();
        self.serialize(&mut data)?;
        Ok(data)
    }
}

/// A decoded account together with its address.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountData<T> {
    pub pubkey: Pubkey,
    pub parsed: T,
}

/// Fetches and decodes an account that must exist.
pub fn fetch_account<T, R>(reader: &R, program_id: &Pubkey, address: &Pubkey) -> Result<AccountData<T>>
where
    T: AnchorAccount,
    R: AccountReader + ?Sized,
{
    try_fetch_account(reader, program_id, address)?.ok_or(StakingError::AccountNotFound(*address))
}

/// Fetches and decodes an account, returning `Ok(None)` when it does not
/// exist or has been closed. Owner and discriminator mismatches are errors.
pub fn try_fetch_account<T, R>(
    reader: &R,
    program_id: &Pubkey,
    address: &Pubkey,
) -> Result<Option<AccountData<T>>>
where
    T: AnchorAccount,
    R: AccountReader + ?Sized,
{
    decode_account(program_id, address, reader.get_account(address)?)
}

/// Batch form of [`try_fetch_account`], one round trip through the reader.
/// Results line up with `addresses`.
pub fn try_fetch_accounts<T, R>(
    reader: &R,
    program_id: &Pubkey,
    addresses: &[Pubkey],
) -> Result<Vec<Option<AccountData<T>>>>
where
    T: AnchorAccount,
    R: AccountReader + ?Sized,
{
    let accounts = reader.get_multiple_accounts(addresses)?;
    addresses
        .iter()
        .zip(accounts)
        .map(|(address, account)| decode_account(program_id, address, account))
        .collect()
}

fn decode_account<T: AnchorAccount>(
    program_id: &Pubkey,
    address: &Pubkey,
    account: Option<Account>,
) -> Result<Option<AccountData<T>>> {
    let account = match account {
        Some(account) if account.lamports > 0 => account,
        _ => {
            trace!(%address, kind = T::NAME, "account not found");
            return Ok(None);
        }
    };

    if account.owner != *program_id {
        return Err(StakingError::InvalidOwner {
            address: *address,
            expected: *program_id,
            actual: account.owner,
        });
    }

    let parsed = T::try_decode(address, &account.data)?;
    Ok(Some(AccountData {
        pubkey: *address,
        parsed,
    }))
}
