use {clap::Parser, deployer::arguments::Arguments, std::process::ExitCode};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Arguments::parse();
    observe::tracing::initialize(&args.log_filter, args.log_stderr_threshold);
    tracing::info!("running deployer with validated arguments:\n{}", args);

    match deployer::run(args).await {
        Ok(deployment) => {
            println!("{}", deployer::success_message(&deployment));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
