use crate::allowance::read_allowance;
use crate::authority;
use crate::error::Error;
use crate::issuer::{issue, mint_capability};
use crate::ledger::{balance_of, read_total_supply};
use crate::metadata::{read_name, read_symbol, write_name, write_symbol};
use crate::storage_types::{DECIMALS, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};

pub trait TokenTrait {
    fn total_supply(e: Env) -> u128;
    fn balance(e: Env, id: Address) -> u128;
    fn allowance(e: Env, from: Address, spender: Address) -> u128;
    fn approve(e: Env, from: Address, spender: Address, amount: u128);
    fn transfer(e: Env, from: Address, to: Address, amount: u128) -> Result<(), Error>;
    fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), Error>;
    fn mint(e: Env, caller: Address, to: Address, amount: u128) -> Result<(), Error>;
    fn decimals(e: Env) -> u32;
    fn name(e: Env) -> String;
    fn symbol(e: Env) -> String;
}

fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contract]
pub struct FixedSupplyToken;

#[contractimpl]
impl FixedSupplyToken {
    pub fn __constructor(
        e: Env,
        recipient: Address,
        initial_supply: u128,
        name: String,
        symbol: String,
    ) {
        write_name(&e, &name);
        write_symbol(&e, &symbol);
        if let Err(err) = issue(&e, &recipient, initial_supply) {
            panic_with_error!(&e, err);
        }
        extend_instance(&e);
    }
}

#[contractimpl]
impl TokenTrait for FixedSupplyToken {
    fn total_supply(e: Env) -> u128 {
        extend_instance(&e);
        read_total_supply(&e)
    }

    fn balance(e: Env, id: Address) -> u128 {
        extend_instance(&e);
        balance_of(&e, &id)
    }

    fn allowance(e: Env, from: Address, spender: Address) -> u128 {
        extend_instance(&e);
        read_allowance(&e, &from, &spender)
    }

    fn approve(e: Env, from: Address, spender: Address, amount: u128) {
        from.require_auth();
        extend_instance(&e);

        authority::approve(&e, &from, &spender, amount);
    }

    fn transfer(e: Env, from: Address, to: Address, amount: u128) -> Result<(), Error> {
        from.require_auth();
        extend_instance(&e);

        authority::transfer(&e, &from, &to, amount)
    }

    fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), Error> {
        spender.require_auth();
        extend_instance(&e);

        authority::transfer_from(&e, &spender, &from, &to, amount)
    }

    fn mint(e: Env, caller: Address, _to: Address, _amount: u128) -> Result<(), Error> {
        mint_capability(&e, &caller)
    }

    fn decimals(_e: Env) -> u32 {
        DECIMALS
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }
}
