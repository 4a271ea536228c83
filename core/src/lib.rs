//! Host-side tooling for the fixed-supply token: a sandbox deployment script
//! with post-deployment checks, account helpers, and a cost benchmark.

pub mod accounts;
pub mod benchmarks;
pub mod config;
pub mod deploy;
pub mod errors;
pub mod units;

pub use crate::config::{load_config, AppConfig};
pub use crate::deploy::{deploy_from_config, deploy_token, ContractSource, Deployment, TokenParams};
pub use crate::errors::DeployError;
