use crate::storage_types::DataKey;
use soroban_sdk::{Env, String};

pub fn read_name(e: &Env) -> String {
    e.storage()
        .instance()
        .get(&DataKey::Name)
        .unwrap_or_else(|| String::from_str(e, ""))
}

pub fn write_name(e: &Env, name: &String) {
    e.storage().instance().set(&DataKey::Name, name);
}

pub fn read_symbol(e: &Env) -> String {
    e.storage()
        .instance()
        .get(&DataKey::Symbol)
        .unwrap_or_else(|| String::from_str(e, ""))
}

pub fn write_symbol(e: &Env, symbol: &String) {
    e.storage().instance().set(&DataKey::Symbol, symbol);
}
