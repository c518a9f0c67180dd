mod types;
mod client;
mod tickets;

pub use types::OwnedObjectRecord;
pub use client::Wallet;
