use soroban_sdk::{Address, Env};

use crate::authority::null_address;
use crate::error::Error;
use crate::events;
use crate::ledger::{credit, is_issued, write_total_supply};

/// Creates the whole supply and hands it to `recipient`. Only the constructor
/// calls this; any later call is rejected.
pub fn issue(e: &Env, recipient: &Address, initial_supply: u128) -> Result<(), Error> {
    if is_issued(e) {
        return Err(Error::AlreadyIssued);
    }
    if *recipient == null_address(e) {
        return Err(Error::InvalidReceiver);
    }
    write_total_supply(e, initial_supply);
    credit(e, recipient, initial_supply)?;

    events::issue(e, recipient.clone(), initial_supply);
    Ok(())
}

/// Minting after construction is never granted, whoever asks.
pub fn mint_capability(_e: &Env, _caller: &Address) -> Result<(), Error> {
    Err(Error::Unsupported)
}
