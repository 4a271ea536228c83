use soroban_sdk::{Address, Env, String};

use crate::allowance::{spend_allowance, write_allowance};
use crate::error::Error;
use crate::events;
use crate::ledger::{credit, debit};
use crate::storage_types::NULL_ACCOUNT;

pub fn null_address(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, NULL_ACCOUNT))
}

/// Moves `amount` from `from` to `to`. Callers are expected to have checked
/// authorization already.
pub fn transfer(e: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), Error> {
    if *to == null_address(e) {
        return Err(Error::InvalidReceiver);
    }
    debit(e, from, amount)?;
    // Balances sum to the fixed supply, so a credit after a successful debit
    // never overflows.
    credit(e, to, amount)?;

    events::transfer(e, from.clone(), to.clone(), amount);
    Ok(())
}

pub fn transfer_from(
    e: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), Error> {
    spend_allowance(e, from, spender, amount)?;
    transfer(e, from, to, amount)
}

pub fn approve(e: &Env, from: &Address, spender: &Address, amount: u128) {
    write_allowance(e, from, spender, amount);
    events::approve(e, from.clone(), spender.clone(), amount);
}
