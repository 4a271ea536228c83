#![no_std]

mod allowance;
mod authority;
mod contract;
mod error;
mod events;
mod issuer;
mod ledger;
mod metadata;
mod storage_types;


pub use crate::allowance::UNLIMITED_ALLOWANCE;
pub use crate::contract::FixedSupplyTokenClient;
pub use crate::contract::{FixedSupplyToken, TokenTrait};
pub use crate::error::Error;
pub use crate::storage_types::{DECIMALS, NULL_ACCOUNT};
