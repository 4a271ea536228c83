use soroban_sdk::{
    testutils::Address as _,
    xdr::{AccountId, Hash, PublicKey, ScAddress, Uint256},
    Address, Env, String as SorobanString,
};
use stellar_strkey::{ed25519, Contract, Strkey};

use crate::errors::DeployError;

/// Parse a `G...` account strkey into an [`Address`] on `env`.
pub fn parse_account(env: &Env, strkey: &str) -> Result<Address, DeployError> {
    match Strkey::from_string(strkey) {
        Ok(Strkey::PublicKeyEd25519(_)) => Ok(Address::from_string(&SorobanString::from_str(
            env, strkey,
        ))),
        Ok(_) => Err(DeployError::InvalidDeployer(format!(
            "{} is not an account public key",
            strkey
        ))),
        Err(e) => Err(DeployError::InvalidDeployer(e.to_string())),
    }
}

/// The configured deployer, or a freshly generated account.
pub fn resolve_deployer(env: &Env, configured: Option<&str>) -> Result<Address, DeployError> {
    match configured {
        Some(strkey) => parse_account(env, strkey),
        None => Ok(Address::generate(env)),
    }
}

pub fn generate_accounts(env: &Env, count: usize) -> Vec<Address> {
    (0..count).map(|_| Address::generate(env)).collect()
}

pub fn address_to_strkey(address: &Address) -> String {
    match ScAddress::from(address) {
        ScAddress::Account(AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(key)))) => {
            Strkey::PublicKeyEd25519(ed25519::PublicKey(key)).to_string()
        }
        ScAddress::Contract(Hash(id)) => Strkey::Contract(Contract(id)).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
    const CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

    #[test]
    fn test_parse_account_round_trips() {
        let env = Env::default();
        let address = parse_account(&env, ACCOUNT).unwrap();
        assert_eq!(address_to_strkey(&address), ACCOUNT);
    }

    #[test]
    fn test_parse_account_rejects_contract() {
        let env = Env::default();
        let err = parse_account(&env, CONTRACT).unwrap_err();
        assert!(err.to_string().contains("not an account"));
    }

    #[test]
    fn test_parse_account_rejects_garbage() {
        let env = Env::default();
        assert!(matches!(
            parse_account(&env, "not-a-key"),
            Err(DeployError::InvalidDeployer(_))
        ));
    }

    #[test]
    fn test_resolve_deployer() {
        let env = Env::default();
        let configured = resolve_deployer(&env, Some(ACCOUNT)).unwrap();
        assert_eq!(address_to_strkey(&configured), ACCOUNT);

        let generated = resolve_deployer(&env, None).unwrap();
        assert_ne!(generated, configured);
    }

    #[test]
    fn test_generate_accounts_are_distinct() {
        let env = Env::default();
        let accounts = generate_accounts(&env, 5);
        assert_eq!(accounts.len(), 5);
        for (i, a) in accounts.iter().enumerate() {
            for b in &accounts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_contract_address_strkey() {
        let env = Env::default();
        let contract = Address::from_string(&SorobanString::from_str(&env, CONTRACT));
        assert_eq!(address_to_strkey(&contract), CONTRACT);
    }
}
