use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage_types::{DataKey, ENTRY_BUMP_AMOUNT, ENTRY_LIFETIME_THRESHOLD};

pub fn balance_of(e: &Env, addr: &Address) -> u128 {
    let key = DataKey::Balance(addr.clone());
    e.storage()
        .persistent()
        .get::<DataKey, u128>(&key)
        .unwrap_or(0)
}

// Zero balances are written like any other; entries are never removed.
fn write_balance(e: &Env, addr: &Address, amount: u128) {
    let key = DataKey::Balance(addr.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn credit(e: &Env, addr: &Address, amount: u128) -> Result<(), Error> {
    let balance = balance_of(e, addr)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    write_balance(e, addr, balance);
    Ok(())
}

pub fn debit(e: &Env, addr: &Address, amount: u128) -> Result<(), Error> {
    let balance = balance_of(e, addr)
        .checked_sub(amount)
        .ok_or(Error::InsufficientBalance)?;
    write_balance(e, addr, balance);
    Ok(())
}

pub fn read_total_supply(e: &Env) -> u128 {
    e.storage()
        .instance()
        .get::<DataKey, u128>(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub(crate) fn write_total_supply(e: &Env, supply: u128) {
    e.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub(crate) fn is_issued(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::TotalSupply)
}
