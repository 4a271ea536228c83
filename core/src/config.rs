use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::errors::DeployError;

/// Settings for the deployment script, read from the process environment
/// (and `.env`, when present).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
    pub token_name: String,
    pub token_symbol: String,
    /// Whole tokens; scaled by `10^DECIMALS` before issuance.
    pub initial_supply: u64,
    /// `G...` account that receives the supply. A fresh account is generated
    /// when unset.
    #[serde(default)]
    pub deployer: Option<String>,
    /// Compiled contract to deploy. The natively linked contract is used
    /// when unset.
    #[serde(default)]
    pub wasm_path: Option<String>,
}

pub fn load_config() -> Result<AppConfig, DeployError> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    Ok(load_config_from(Environment::default())?)
}

pub fn load_config_from(source: Environment) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(source)
        .set_default("rust_log", "info")?
        .set_default("token_name", "Fixed Token")?
        .set_default("token_symbol", "FIX")?
        .set_default("initial_supply", 1_000_000)?
        .build()?;

    settings.try_deserialize()
}
