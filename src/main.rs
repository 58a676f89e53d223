//! tfdeploy - Main entry point

use clap::Parser;
use log::{debug, error, info, Level};
use std::process::ExitCode;

use tfdeploy::{output_outcome, run_deploy_command, Cli, DeployConfig, TfeClient};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // Initialize logging (RUST_LOG overrides --log-level)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfdeploy v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: url={:?}, workspace={:?}, prefix={:?}, module={}, variables={:?}, sensitive={:?}",
        cli.url, cli.workspace, cli.prefix, cli.module, cli.variables, cli.sensitive
    );

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            report_error(format_args!("Failed to start async runtime: {}", e));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(format_args!("{}", e));
            ExitCode::FAILURE
        }
    }
}

/// Log a fatal error, falling back to plain stderr when logging is filtered out
fn report_error(message: std::fmt::Arguments<'_>) {
    if log::log_enabled!(Level::Error) {
        error!("{}", message);
    } else {
        eprintln!("Error: {}", message);
    }
}

async fn run(cli: &Cli) -> tfdeploy::Result<()> {
    let config = DeployConfig::from_cli(cli)?;
    let client = TfeClient::new(config.token.clone(), config.base_url.clone());

    let outcome = run_deploy_command(&client, &config, cli.quiet).await?;
    output_outcome(&outcome, cli.format);

    info!("Completed successfully");
    Ok(())
}
