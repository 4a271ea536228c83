use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use fixed_supply_token::{FixedSupplyToken, FixedSupplyTokenClient, DECIMALS};
use serde::Serialize;
use sha2::{Digest, Sha256};
use soroban_sdk::{Address, Env, String as SorobanString};

use crate::accounts::{address_to_strkey, resolve_deployer};
use crate::config::AppConfig;
use crate::errors::DeployError;
use crate::units::{format_units, to_base_units};

const WASM_MAGIC: &[u8; 4] = b"\0asm";

/// Where the token contract's code comes from.
#[derive(Debug, Clone)]
pub enum ContractSource {
    Wasm(Vec<u8>),
    /// The contract linked into this binary.
    Native,
}

impl ContractSource {
    pub fn from_wasm(wasm: Vec<u8>) -> Result<Self, DeployError> {
        if wasm.is_empty() {
            return Err(DeployError::InvalidWasm("WASM bytecode is empty".to_string()));
        }
        if wasm.len() < 4 || &wasm[0..4] != WASM_MAGIC {
            return Err(DeployError::InvalidWasm(
                "Invalid WASM magic number".to_string(),
            ));
        }
        Ok(Self::Wasm(wasm))
    }

    pub fn load(path: &Path) -> Result<Self, DeployError> {
        tracing::info!("Loading contract from: {:?}", path);
        Self::from_wasm(fs::read(path)?)
    }

    /// Hex SHA-256 of the bytecode, for wasm sources.
    pub fn digest(&self) -> Option<String> {
        match self {
            Self::Wasm(wasm) => Some(hex::encode(Sha256::digest(wasm))),
            Self::Native => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Wasm(_) => "wasm",
            Self::Native => "native",
        }
    }
}

/// Constructor arguments for the token.
#[derive(Debug, Clone)]
pub struct TokenParams {
    pub name: String,
    pub symbol: String,
    /// Base units.
    pub initial_supply: u128,
}

/// Outcome of a verified deployment.
#[derive(Debug, Clone, Serialize)]
pub struct Deployment {
    #[serde(skip)]
    pub address: Address,
    #[serde(skip)]
    pub deployer_address: Address,
    pub contract_id: String,
    pub deployer: String,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wasm_sha256: Option<String>,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub total_supply: u128,
    pub total_supply_display: String,
}

/// Register the token on `env`, issuing the whole supply to `deployer`, and
/// check the resulting state.
pub fn deploy_token(
    env: &Env,
    source: &ContractSource,
    deployer: &Address,
    params: &TokenParams,
) -> Result<Deployment, DeployError> {
    let name = SorobanString::from_str(env, &params.name);
    let symbol = SorobanString::from_str(env, &params.symbol);
    let args = (
        deployer.clone(),
        params.initial_supply,
        name.clone(),
        symbol.clone(),
    );

    let address = match source {
        ContractSource::Wasm(wasm) => register_wasm(env, wasm, args)?,
        ContractSource::Native => env.register(FixedSupplyToken, args),
    };
    let contract_id = address_to_strkey(&address);
    tracing::info!("Token {} registered at {}", params.symbol, contract_id);

    let client = FixedSupplyTokenClient::new(env, &address);
    verify(&client, deployer, &name, &symbol, params.initial_supply)?;

    Ok(Deployment {
        contract_id,
        deployer: address_to_strkey(deployer),
        source: source.kind(),
        wasm_sha256: source.digest(),
        name: params.name.clone(),
        symbol: params.symbol.clone(),
        decimals: DECIMALS,
        total_supply: params.initial_supply,
        total_supply_display: format_units(params.initial_supply, DECIMALS),
        address,
        deployer_address: deployer.clone(),
    })
}

// The host aborts with a panic when the bytecode is not a loadable contract or
// its constructor rejects the arguments.
fn register_wasm(
    env: &Env,
    wasm: &[u8],
    args: (Address, u128, SorobanString, SorobanString),
) -> Result<Address, DeployError> {
    panic::catch_unwind(AssertUnwindSafe(|| env.register(wasm, args))).map_err(|cause| {
        let reason = cause
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| cause.downcast_ref::<&str>().copied())
            .unwrap_or("host rejected the contract");
        DeployError::InvalidWasm(format!("registration failed: {}", reason))
    })
}

fn verify(
    client: &FixedSupplyTokenClient,
    deployer: &Address,
    name: &SorobanString,
    symbol: &SorobanString,
    supply: u128,
) -> Result<(), DeployError> {
    let total_supply = client.total_supply();
    if total_supply != supply {
        return Err(DeployError::Verification(format!(
            "total supply is {}, expected {}",
            total_supply, supply
        )));
    }
    let balance = client.balance(deployer);
    if balance != supply {
        return Err(DeployError::Verification(format!(
            "deployer balance is {}, expected {}",
            balance, supply
        )));
    }
    if client.name() != *name || client.symbol() != *symbol {
        return Err(DeployError::Verification(
            "token metadata does not match".to_string(),
        ));
    }
    if client.decimals() != DECIMALS {
        return Err(DeployError::Verification(format!(
            "decimals is {}, expected {}",
            client.decimals(),
            DECIMALS
        )));
    }
    tracing::debug!("Deployer holds the full supply of {}", supply);
    Ok(())
}

/// Deploy the token described by `config` into `env`.
pub fn deploy_from_config(env: &Env, config: &AppConfig) -> Result<Deployment, DeployError> {
    let source = match &config.wasm_path {
        Some(path) => ContractSource::load(Path::new(path))?,
        None => ContractSource::Native,
    };
    let deployer = resolve_deployer(env, config.deployer.as_deref())?;
    let initial_supply = to_base_units(config.initial_supply, DECIMALS)
        .ok_or(DeployError::SupplyOverflow(config.initial_supply))?;

    let params = TokenParams {
        name: config.token_name.clone(),
        symbol: config.token_symbol.clone(),
        initial_supply,
    };
    deploy_token(env, &source, &deployer, &params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn params(supply: u128) -> TokenParams {
        TokenParams {
            name: "Test Token".to_string(),
            symbol: "TEST".to_string(),
            initial_supply: supply,
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            rust_log: "info".to_string(),
            token_name: "Config Token".to_string(),
            token_symbol: "CFG".to_string(),
            initial_supply: 1_000,
            deployer: None,
            wasm_path: None,
        }
    }

    #[test]
    fn test_deploy_native() {
        let env = Env::default();
        env.mock_all_auths();
        let deployer = Address::generate(&env);

        let deployment =
            deploy_token(&env, &ContractSource::Native, &deployer, &params(1000)).unwrap();
        assert_eq!(deployment.total_supply, 1000);
        assert_eq!(deployment.decimals, 18);
        assert_eq!(deployment.source, "native");
        assert!(deployment.wasm_sha256.is_none());
        assert!(deployment.contract_id.starts_with('C'));
        assert_eq!(deployment.deployer, address_to_strkey(&deployer));

        let client = FixedSupplyTokenClient::new(&env, &deployment.address);
        let other = Address::generate(&env);
        assert_eq!(client.balance(&deployer), 1000);
        assert_eq!(client.balance(&other), 0);
    }

    #[test]
    fn test_deploy_from_config_scales_supply() {
        let env = Env::default();
        env.mock_all_auths();

        let deployment = deploy_from_config(&env, &config()).unwrap();
        assert_eq!(deployment.total_supply, 1_000_000_000_000_000_000_000);
        assert_eq!(deployment.total_supply_display, "1000");
        assert_eq!(deployment.name, "Config Token");
        assert_eq!(deployment.symbol, "CFG");

        let client = FixedSupplyTokenClient::new(&env, &deployment.address);
        assert_eq!(
            client.balance(&deployment.deployer_address),
            deployment.total_supply
        );
    }

    #[test]
    fn test_deploy_from_config_with_configured_deployer() {
        let env = Env::default();
        env.mock_all_auths();

        let deployer = "GADQOBYHA4DQOBYHA4DQOBYHA4DQOBYHA4DQOBYHA4DQOBYHA4DQOZPI";
        let mut config = config();
        config.deployer = Some(deployer.to_string());

        let deployment = deploy_from_config(&env, &config).unwrap();
        assert_eq!(deployment.deployer, deployer);
    }

    #[test]
    fn test_deploy_from_config_missing_wasm() {
        let env = Env::default();
        let mut config = config();
        config.wasm_path = Some("does/not/exist.wasm".to_string());

        let result = deploy_from_config(&env, &config);
        assert!(matches!(result, Err(DeployError::Io(_))));
    }

    #[test]
    fn test_invalid_wasm_rejected() {
        let err = ContractSource::from_wasm(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("empty"));

        let err = ContractSource::from_wasm(b"invalid".to_vec()).unwrap_err();
        assert!(err.to_string().contains("magic number"));
    }

    #[test]
    fn test_deploy_wasm_without_contract_fails() {
        let env = Env::default();
        env.mock_all_auths();
        let deployer = Address::generate(&env);
        let source = ContractSource::from_wasm(b"\0asm\x01\0\0\0".to_vec()).unwrap();

        let result = deploy_token(&env, &source, &deployer, &params(1000));
        assert!(matches!(result, Err(DeployError::InvalidWasm(_))));
    }

    #[test]
    fn test_wasm_digest() {
        let source = ContractSource::from_wasm(b"\0asm\x01\0\0\0".to_vec()).unwrap();
        let digest = source.digest().unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(
            digest,
            hex::encode(Sha256::digest(b"\0asm\x01\0\0\0"))
        );
        assert!(ContractSource::Native.digest().is_none());
    }

    #[test]
    fn test_deployment_serialize() {
        let env = Env::default();
        env.mock_all_auths();
        let deployer = Address::generate(&env);

        let deployment =
            deploy_token(&env, &ContractSource::Native, &deployer, &params(1500)).unwrap();
        let json = serde_json::to_string(&deployment).unwrap();
        assert!(json.contains("\"total_supply\":1500"));
        assert!(json.contains("\"source\":\"native\""));
        assert!(json.contains("\"decimals\":18"));
        assert!(!json.contains("wasm_sha256"));
    }
}
