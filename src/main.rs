/*!
 * Groundlink CLI
 *
 * Usage: groundlink <DIRECTORY_URI>
 *
 * Run settings come from the TOML file named by GROUNDLINK_CONFIG; RUST_LOG
 * overrides the log filter.
 */

use clap::{error::ErrorKind, CommandFactory, Parser};
use groundlink::{
    error::{GroundError, Result},
    logging, GroundConfig, SetAndCommand, WorkflowPlan,
};
use groundlink_connect::{GrpcBinder, RemoteDirectory};
use tracing::debug;

#[derive(Parser)]
#[command(name = "groundlink")]
#[command(version, about = "Set a parameter and launch an action on a directory-registered provider", long_about = None)]
struct Cli {
    /// Directory service address, e.g. grpc://10.0.0.5:1024/supervisor-directory
    #[arg(value_name = "DIRECTORY_URI")]
    directory: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let result = match parse_cli() {
        Ok(cli) => run(cli).await,
        Err(e) => Err(e),
    };

    let code = match result {
        Ok(code) => code,
        Err(e @ GroundError::Usage(_)) => {
            eprintln!("Please give the directory URI as the only argument!");
            eprintln!("e.g. grpc://10.0.0.5:1024/supervisor-directory");
            eprintln!();
            eprintln!("{}", Cli::command().render_usage());
            eprintln!("Error: {}", e);
            e.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}

/// Parse arguments; help and version print and exit here
fn parse_cli() -> Result<Cli> {
    Cli::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        kind => GroundError::Usage(kind.as_str().unwrap_or("invalid arguments").to_string()),
    })
}

async fn run(cli: Cli) -> Result<i32> {
    let config = GroundConfig::from_env()?;
    config.validate()?;

    logging::init_logging(&config)?;

    debug!(
        "Driving provider {} via directory {}",
        config.provider_name, cli.directory
    );

    let options = config.transport.to_options();
    let workflow = SetAndCommand::new(
        RemoteDirectory::new(options),
        GrpcBinder::new(options),
        WorkflowPlan::from(&config),
    );

    let report = workflow.run(&cli.directory).await;
    Ok(report.exit_code())
}
