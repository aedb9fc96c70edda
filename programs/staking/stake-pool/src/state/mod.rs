pub mod identifier;
pub mod stake_authorization;
pub mod stake_entry;
pub mod stake_pool;

pub use identifier::*;
pub use stake_authorization::*;
pub use stake_entry::*;
pub use stake_pool::*;
