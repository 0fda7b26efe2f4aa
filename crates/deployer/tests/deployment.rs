use {clap::Parser, deployer::arguments::Arguments};

const NODE_URL: &str = "http://127.0.0.1:8545";

// First account of the default test mnemonic used by development nodes.
const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Deploys the contract to a local development node.
///
/// Start one with e.g. `anvil` before running this test:
/// `cargo test -p deployer --test deployment -- --ignored`
#[tokio::test]
#[ignore]
async fn local_node_deployment() {
    observe::tracing::initialize_reentrant("warn,deployer=debug");

    let args = Arguments::parse_from([
        "deployer",
        "--node-url",
        NODE_URL,
        "--private-key",
        PRIVATE_KEY,
    ]);
    let deployment = deployer::run(args).await.unwrap();

    assert!(!deployment.address.is_zero());
    println!("{}", deployer::success_message(&deployment));
}
