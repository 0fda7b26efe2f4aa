//! The deployment flow behind [`crate::run`].
//!
//! The traits abstract the contract deployment capabilities of the node so
//! the orchestration can be unit tested with mocks.

use {
    alloy::{network::Ethereum, primitives::Address, providers::PendingTransactionBuilder},
    anyhow::{Context, Result},
    contracts::alloy::ChainBattles,
    ethrpc::AlloyProvider,
    std::time::Duration,
};

/// A contract instance that reached on-chain confirmation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deployment {
    pub address: Address,
}

/// How long to wait for a deployment transaction to be confirmed.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// Number of blocks the transaction must be included for.
    pub confirmations: u64,
    /// Upper bound on the confirmation wait. `None` leaves the wait bounded
    /// by the node alone.
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confirmations: 1,
            timeout: None,
        }
    }
}

/// A handle capable of producing a new deployed instance of a specific
/// pre-compiled contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContractFactory: Send + Sync {
    /// Requests deployment of a new contract instance and returns a handle
    /// representing the in-flight deployment.
    async fn deploy(&self) -> Result<Box<dyn PendingDeployment>>;
}

/// An in-flight deployment.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PendingDeployment: Send {
    /// Waits until the network reports the deployment transaction as
    /// included and final enough to read the resulting address.
    async fn confirmed(self: Box<Self>) -> Result<Deployment>;
}

/// Looks up the deployment factory for the contract with the given name.
pub fn factory(
    name: &str,
    provider: AlloyProvider,
    settings: Settings,
) -> Result<Box<dyn ContractFactory>> {
    match name {
        "ChainBattles" => Ok(Box::new(ChainBattlesFactory { provider, settings })),
        _ => anyhow::bail!("no contract registered for the name {name:?}"),
    }
}

/// Deploys a single new contract instance through the given factory and
/// waits for it to be confirmed. Failures are fatal; there is no retry.
pub async fn deploy_contract(factory: &dyn ContractFactory) -> Result<Deployment> {
    let pending = factory
        .deploy()
        .await
        .context("deployment request failed")?;
    pending
        .confirmed()
        .await
        .context("deployment confirmation failed")
}

struct ChainBattlesFactory {
    provider: AlloyProvider,
    settings: Settings,
}

#[async_trait::async_trait]
impl ContractFactory for ChainBattlesFactory {
    async fn deploy(&self) -> Result<Box<dyn PendingDeployment>> {
        let pending = ChainBattles::Instance::deploy_builder(self.provider.clone())
            .send()
            .await
            .context("failed to send deployment transaction")?;
        tracing::debug!(tx_hash = ?pending.tx_hash(), "deployment transaction sent");
        Ok(Box::new(PendingTransaction {
            inner: pending,
            settings: self.settings,
        }))
    }
}

struct PendingTransaction {
    inner: PendingTransactionBuilder<Ethereum>,
    settings: Settings,
}

#[async_trait::async_trait]
impl PendingDeployment for PendingTransaction {
    async fn confirmed(self: Box<Self>) -> Result<Deployment> {
        let Self { inner, settings } = *self;
        let receipt = inner
            .with_required_confirmations(settings.confirmations)
            .with_timeout(settings.timeout)
            .get_receipt()
            .await
            .context("failed to confirm deployment transaction")?;
        let address = receipt
            .contract_address
            .context("deployment receipt contains no contract address")?;
        tracing::info!(
            ?address,
            tx_hash = ?receipt.transaction_hash,
            block = ?receipt.block_number,
            "deployment confirmed"
        );
        Ok(Deployment { address })
    }
}
