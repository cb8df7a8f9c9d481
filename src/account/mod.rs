//! Accounts and the double-entry ledger

pub mod models;
pub mod repo;

pub use models::{Account, Entry, Transfer};
pub use repo::{AccountRepo, EntryRepo, TransferRepo};
