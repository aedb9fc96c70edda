pub mod reward_distributor;
pub mod reward_entry;

pub use reward_distributor::*;
pub use reward_entry::*;
