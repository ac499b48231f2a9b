use clap::Parser;
use tracing_subscriber::EnvFilter;

use mc_cli::cli::{Cli, Command, ConfigCommand};
use mc_domain::capability::CapabilityRequirements;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_cli_tracing(cli.verbose);

    match cli.command {
        Command::Resolve {
            model,
            model_type,
            json,
        } => mc_cli::cli::resolve::run(&model, &model_type, json),
        Command::Check {
            model,
            model_type,
            tools,
            media,
        } => {
            let req = CapabilityRequirements { tools, media };
            if !mc_cli::cli::resolve::check(&model, &model_type, req) {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Models { json } => mc_cli::cli::models::list(json),
        Command::Prefixes => {
            mc_cli::cli::models::prefixes();
            Ok(())
        }
        Command::Registry { json } => {
            let (config, _config_path) = mc_cli::cli::load_config()?;
            mc_cli::cli::models::registry(&config, json)
        }
        Command::Config(ConfigCommand::Validate) => {
            let (config, config_path) = mc_cli::cli::load_config()?;
            let valid = mc_cli::cli::config::validate(&config, &config_path);
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Config(ConfigCommand::Show) => {
            let (config, _config_path) = mc_cli::cli::load_config()?;
            mc_cli::cli::config::show(&config)
        }
        Command::Version => {
            println!("modelcaps {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Initialize compact stderr-only tracing.
///
/// Defaults to `warn` (`debug` with `--verbose`) so diagnostic output does
/// not pollute stdout.
fn init_cli_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
