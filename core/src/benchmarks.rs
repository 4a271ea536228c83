use fixed_supply_token::FixedSupplyTokenClient;
use serde::Serialize;
use soroban_sdk::Env;

use crate::accounts::generate_accounts;
use crate::deploy::Deployment;
use crate::errors::DeployError;

const TRANSFER_AMOUNT: u128 = 200;
const APPROVE_AMOUNT: u128 = 500;
const TRANSFER_FROM_AMOUNT: u128 = 100;

/// Host cost of a single token call.
#[derive(Debug, Clone, Serialize)]
pub struct OperationCost {
    pub operation: &'static str,
    pub cpu_instructions: u64,
    pub memory_bytes: u64,
}

fn measure<R, F>(env: &Env, operation: &'static str, call: F) -> (OperationCost, R)
where
    F: FnOnce() -> R,
{
    env.cost_estimate().budget().reset_unlimited();
    let start_cpu = env.cost_estimate().budget().cpu_instruction_cost();
    let start_mem = env.cost_estimate().budget().memory_bytes_cost();

    let output = call();

    let end_cpu = env.cost_estimate().budget().cpu_instruction_cost();
    let end_mem = env.cost_estimate().budget().memory_bytes_cost();

    let cost = OperationCost {
        operation,
        cpu_instructions: end_cpu.saturating_sub(start_cpu),
        memory_bytes: end_mem.saturating_sub(start_mem),
    };
    tracing::info!(
        "{} stats: {} CPU instructions, {} memory bytes",
        operation,
        cost.cpu_instructions,
        cost.memory_bytes
    );
    (cost, output)
}

/// Measure transfer, approve and transfer_from against a deployed token. The
/// deployer must hold at least 300 base units.
pub fn run_token_benchmark(
    env: &Env,
    deployment: &Deployment,
) -> Result<Vec<OperationCost>, DeployError> {
    let client = FixedSupplyTokenClient::new(env, &deployment.address);
    let owner = &deployment.deployer_address;
    let accounts = generate_accounts(env, 3);
    let (receiver, spender, delegate_receiver) = (&accounts[0], &accounts[1], &accounts[2]);

    let needed = TRANSFER_AMOUNT + TRANSFER_FROM_AMOUNT;
    if client.balance(owner) < needed {
        return Err(DeployError::Verification(format!(
            "deployer needs at least {} base units to run the benchmark",
            needed
        )));
    }

    let mut report = Vec::with_capacity(3);

    let (cost, outcome) = measure(env, "transfer", || {
        client.try_transfer(owner, receiver, &TRANSFER_AMOUNT)
    });
    outcome.map(|_| ()).map_err(token_error)?;
    report.push(cost);

    let (cost, ()) = measure(env, "approve", || {
        client.approve(owner, spender, &APPROVE_AMOUNT)
    });
    report.push(cost);

    let (cost, outcome) = measure(env, "transfer_from", || {
        client.try_transfer_from(spender, owner, delegate_receiver, &TRANSFER_FROM_AMOUNT)
    });
    outcome.map(|_| ()).map_err(token_error)?;
    report.push(cost);

    Ok(report)
}

fn token_error<T>(err: Result<fixed_supply_token::Error, T>) -> DeployError {
    match err {
        Ok(err) => DeployError::from(err),
        Err(_) => DeployError::Verification("token call aborted by the host".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::{deploy_token, ContractSource, TokenParams};
    use soroban_sdk::{testutils::Address as _, Address};

    fn deploy(env: &Env, supply: u128) -> Deployment {
        let deployer = Address::generate(env);
        let params = TokenParams {
            name: "Benchmark Token".to_string(),
            symbol: "BNCH".to_string(),
            initial_supply: supply,
        };
        deploy_token(env, &ContractSource::Native, &deployer, &params).unwrap()
    }

    #[test]
    fn test_benchmark_reports_each_operation() {
        let env = Env::default();
        env.mock_all_auths();
        let deployment = deploy(&env, 1000);

        let report = run_token_benchmark(&env, &deployment).unwrap();
        let names: Vec<&str> = report.iter().map(|c| c.operation).collect();
        assert_eq!(names, ["transfer", "approve", "transfer_from"]);
        assert!(report.iter().all(|c| c.cpu_instructions > 0));

        let client = FixedSupplyTokenClient::new(&env, &deployment.address);
        assert_eq!(client.balance(&deployment.deployer_address), 700);
        assert_eq!(client.total_supply(), 1000);
    }

    #[test]
    fn test_benchmark_requires_funded_deployer() {
        let env = Env::default();
        env.mock_all_auths();
        let deployment = deploy(&env, 10);

        let result = run_token_benchmark(&env, &deployment);
        assert!(matches!(result, Err(DeployError::Verification(_))));
    }
}
