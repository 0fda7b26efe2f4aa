#[cfg(any(test, feature = "test-util"))]
use alloy::providers::mock;
use {
    crate::AlloyProvider,
    alloy::{
        network::{EthereumWallet, TxSigner},
        primitives::Signature,
        providers::{Provider, ProviderBuilder},
        rpc::client::ClientBuilder,
    },
};

/// Creates a provider that signs outgoing transactions with the given
/// signer. All transactions sent through it default to the signer's
/// address as the sender.
pub fn provider_with_signer(
    url: &str,
    signer: Box<dyn TxSigner<Signature> + Send + Sync + 'static>,
) -> anyhow::Result<AlloyProvider> {
    let rpc = ClientBuilder::default().http(url.parse()?);
    let wallet = EthereumWallet::new(signer);

    Ok(ProviderBuilder::new()
        .wallet(wallet)
        .connect_client(rpc)
        .erased())
}

#[cfg(any(test, feature = "test-util"))]
pub fn dummy_provider() -> AlloyProvider {
    let asserter = mock::Asserter::new();
    ProviderBuilder::new()
        .connect_mocked_client(asserter)
        .erased()
}
