use borsh::BorshSerialize;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::{discriminator::instruction_discriminator, error::Result};

/// Builds an Anchor instruction: discriminator of `method` followed by the
/// Borsh-encoded `args`.
pub fn build_instruction<A: BorshSerialize>(
    program_id: &Pubkey,
    method: &str,
    args: &A,
    accounts: Vec<AccountMeta>,
) -> Result<Instruction> {
    let mut data = instruction_discriminator(method).to_vec();
    args.serialize(&mut data)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

/// Builds an Anchor instruction that takes no arguments.
pub fn build_instruction_without_args(
    program_id: &Pubkey,
    method: &str,
    accounts: Vec<AccountMeta>,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction_discriminator(method).to_vec(),
    }
}
