#![no_std]

mod admin;
mod allowance;
mod authority;
mod balance;
mod contract;
mod error;
mod link;
mod metadata;
mod storage_types;

pub use contract::{CorkLedger, CorkLedgerClient};
pub use error::Error;
pub use storage_types::{MintAuthority, MintState};

mod test;
