use soroban_sdk::{symbol_short, Address, Env};

pub(crate) fn transfer(e: &Env, from: Address, to: Address, amount: u128) {
    let topics = (symbol_short!("transfer"), from, to);
    e.events().publish(topics, amount);
}

pub(crate) fn approve(e: &Env, from: Address, spender: Address, amount: u128) {
    let topics = (symbol_short!("approve"), from, spender);
    e.events().publish(topics, amount);
}

pub(crate) fn issue(e: &Env, recipient: Address, amount: u128) {
    let topics = (symbol_short!("issue"), recipient);
    e.events().publish(topics, amount);
}
