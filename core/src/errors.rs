use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid WASM: {0}")]
    InvalidWasm(String),

    #[error("Invalid deployer address: {0}")]
    InvalidDeployer(String),

    #[error("Initial supply of {0} tokens does not fit in base units")]
    SupplyOverflow(u64),

    #[error("Post-deployment check failed: {0}")]
    Verification(String),

    #[error("Token call failed: {0:?}")]
    Token(fixed_supply_token::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<fixed_supply_token::Error> for DeployError {
    fn from(err: fixed_supply_token::Error) -> Self {
        Self::Token(err)
    }
}
