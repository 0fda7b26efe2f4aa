pub mod arguments;
pub mod deploy;

use {
    crate::deploy::{Deployment, Settings},
    alloy::providers::Provider,
    anyhow::{Context, Result},
};

/// Name of the contract this tool deploys.
pub const CONTRACT_NAME: &str = "ChainBattles";

/// Deploys a new `ChainBattles` instance to the configured network and
/// returns it once it reached on-chain confirmation.
pub async fn run(args: arguments::Arguments) -> Result<Deployment> {
    let provider = ethrpc::alloy::provider_with_signer(
        args.node_url.as_str(),
        Box::new(args.private_key.clone()),
    )
    .context("failed to create provider")?;

    let chain_id = provider
        .get_chain_id()
        .await
        .context("could not fetch current chain id")?;
    tracing::info!(chain_id, "connected to network");

    let factory = deploy::factory(
        CONTRACT_NAME,
        provider,
        Settings {
            confirmations: args.confirmations,
            timeout: args.deployment_timeout,
        },
    )?;
    deploy::deploy_contract(factory.as_ref()).await
}

/// The line reported on stdout after a successful deployment.
pub fn success_message(deployment: &Deployment) -> String {
    format!("{CONTRACT_NAME} deployed to  {}", deployment.address)
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address};

    #[test]
    fn success_message_reports_the_deployed_address() {
        let deployment = Deployment {
            address: address!("0x9008D19f58AAbD9eD0D60971565AA8510560ab41"),
        };
        assert_eq!(
            success_message(&deployment),
            "ChainBattles deployed to  0x9008D19f58AAbD9eD0D60971565AA8510560ab41",
        );
    }
}
