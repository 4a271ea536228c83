use crate::error::Error;
use crate::storage_types::{
    AllowanceDataKey, DataKey, ENTRY_BUMP_AMOUNT, ENTRY_LIFETIME_THRESHOLD,
};
use soroban_sdk::{Address, Env};

/// Quota at which an allowance stops depleting.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

pub fn read_allowance(e: &Env, from: &Address, spender: &Address) -> u128 {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    e.storage()
        .persistent()
        .get::<_, u128>(&key)
        .unwrap_or(0)
}

/// Replaces the quota for the pair. A zero quota is stored, not removed.
pub fn write_allowance(e: &Env, from: &Address, spender: &Address, amount: u128) {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn spend_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: u128,
) -> Result<(), Error> {
    let allowance = read_allowance(e, from, spender);
    if allowance < amount {
        return Err(Error::InsufficientAllowance);
    }
    if allowance == UNLIMITED_ALLOWANCE {
        return Ok(());
    }
    write_allowance(e, from, spender, allowance - amount);
    Ok(())
}
