use {
    alloy::signers::local::PrivateKeySigner,
    clap::Parser,
    std::{
        fmt::{self, Display, Formatter},
        num::ParseFloatError,
        time::Duration,
    },
    tracing::level_filters::LevelFilter,
    url::Url,
};

#[derive(Parser)]
pub struct Arguments {
    /// Filters spans and events based on a set of filter directives.
    #[clap(long, env, default_value = "warn,deployer=debug")]
    pub log_filter: String,

    /// Minimum level threshold for stderr output.
    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Private key of the account that funds and signs the deployment
    /// transaction.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: PrivateKeySigner,

    /// Number of blocks the deployment transaction must be included for
    /// before it counts as confirmed.
    #[clap(long, env, default_value = "1")]
    pub confirmations: u64,

    /// Maximum time in seconds to wait for the deployment confirmation.
    /// By default the wait is bounded by the node alone and there is no
    /// retry on expiry.
    #[clap(long, env, value_parser = duration_from_seconds)]
    pub deployment_timeout: Option<Duration>,
}

pub fn duration_from_seconds(s: &str) -> Result<Duration, ParseFloatError> {
    Ok(Duration::from_secs_f32(s.parse()?))
}

fn display_option(
    f: &mut Formatter<'_>,
    name: &str,
    option: &Option<impl Display>,
) -> fmt::Result {
    write!(f, "{name}: ")?;
    match option {
        Some(display) => writeln!(f, "{display}"),
        None => writeln!(f, "None"),
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            node_url,
            private_key: _,
            confirmations,
            deployment_timeout,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "private_key: SECRET")?;
        writeln!(f, "confirmations: {confirmations}")?;
        display_option(
            f,
            "deployment_timeout",
            &deployment_timeout.map(|timeout| format!("{timeout:?}")),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // First account of the default test mnemonic used by development nodes.
    const PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn arguments(extra: &[&str]) -> Arguments {
        Arguments::try_parse_from(
            ["deployer", "--private-key", PRIVATE_KEY]
                .iter()
                .chain(extra)
                .copied(),
        )
        .unwrap()
    }

    #[test]
    fn defaults() {
        let args = arguments(&[]);
        assert_eq!(args.node_url.as_str(), "http://localhost:8545/");
        assert_eq!(args.confirmations, 1);
        assert_eq!(args.deployment_timeout, None);
    }

    #[test]
    fn parses_deployment_timeout() {
        let args = arguments(&["--deployment-timeout", "30"]);
        assert_eq!(args.deployment_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn does_not_leak_the_private_key() {
        let args = arguments(&[]);
        let displayed = args.to_string();
        assert!(displayed.contains("private_key: SECRET"));
        assert!(!displayed.contains(&PRIVATE_KEY[2..10]));
    }
}
