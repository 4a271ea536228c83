use fixed_token_core::{benchmarks, deploy_from_config, load_config, DeployError};
use soroban_sdk::Env;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage: cargo run -p fixed-token-core -- [deploy|benchmark]";

fn main() -> ExitCode {
    // -------------------------------
    // Load configuration
    // -------------------------------
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // -------------------------------
    // Initialize Tracing / Logging
    // -------------------------------
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Fixed token tooling initialized with config: {:?}", config);

    let command = env::args().nth(1).unwrap_or_else(|| "deploy".to_string());
    let result = match command.as_str() {
        "deploy" => run_deploy(&config),
        "benchmark" => run_benchmark(&config),
        other => {
            tracing::error!("Unknown command {:?}. {}", other, USAGE);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{} failed: {}", command, e);
            ExitCode::FAILURE
        }
    }
}

fn sandbox() -> Env {
    let env = Env::default();
    env.mock_all_auths();
    env
}

fn run_deploy(config: &fixed_token_core::AppConfig) -> Result<(), DeployError> {
    tracing::info!("Deploying {} ({})...", config.token_name, config.token_symbol);
    let env = sandbox();
    let deployment = deploy_from_config(&env, config)?;
    tracing::info!(
        "Issued {} {} to {}",
        deployment.total_supply_display,
        deployment.symbol,
        deployment.deployer
    );
    println!("{}", serde_json::to_string_pretty(&deployment)?);
    Ok(())
}

fn run_benchmark(config: &fixed_token_core::AppConfig) -> Result<(), DeployError> {
    tracing::info!("Starting token benchmark...");
    let env = sandbox();
    let deployment = deploy_from_config(&env, config)?;
    let report = benchmarks::run_token_benchmark(&env, &deployment)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
