pub mod config;
pub mod models;
pub mod resolve;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mc_domain::config::Config;

/// modelcaps — Bedrock model capability lookup.
#[derive(Debug, Parser)]
#[command(name = "modelcaps", version, about)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the capabilities of a model id.
    Resolve {
        /// Model id, optionally with an inference-profile prefix.
        model: String,
        /// Model type: chat, image or embedding. Anything else is treated as chat.
        #[arg(long = "type", default_value = "chat")]
        model_type: String,
        /// Output as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Resolve a model id and fail unless it supports the requested capabilities.
    Check {
        /// Model id, optionally with an inference-profile prefix.
        model: String,
        /// Model type: chat, image or embedding. Anything else is treated as chat.
        #[arg(long = "type", default_value = "chat")]
        model_type: String,
        /// Require tool/function calling.
        #[arg(long)]
        tools: bool,
        /// Require media (multimodal) support.
        #[arg(long)]
        media: bool,
    },
    /// List every model in the capability table.
    Models {
        /// Output as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// List the inference-profile prefixes in match order.
    Prefixes,
    /// Build the model registry from config and list what registered.
    Registry {
        /// Output as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `MODELCAPS_CONFIG` (or
/// `modelcaps.toml` by default). Returns the parsed [`Config`] and the path
/// that was used. A missing file yields the defaults.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let config_path =
        std::env::var("MODELCAPS_CONFIG").unwrap_or_else(|_| "modelcaps.toml".into());

    let exists = std::path::Path::new(&config_path).exists();
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("loading {config_path}"))?;
    tracing::info!(
        path = %config_path,
        defaults = !exists,
        models = config.bedrock.models.len(),
        "configuration loaded"
    );

    Ok((config, config_path))
}

/// Render a capability flag for plain-text output.
pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_default_type() {
        let cli = Cli::try_parse_from(["modelcaps", "resolve", "amazon.nova-pro-v1:0"]).unwrap();
        match cli.command {
            Command::Resolve {
                model,
                model_type,
                json,
            } => {
                assert_eq!(model, "amazon.nova-pro-v1:0");
                assert_eq!(model_type, "chat");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_check_flags() {
        let cli = Cli::try_parse_from([
            "modelcaps",
            "-v",
            "check",
            "us.amazon.nova-micro-v1:0",
            "--tools",
            "--media",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Check { tools, media, .. } => assert!(tools && media),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn load_config_reads_path_from_env() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[bedrock.models]]\nname = \"amazon.nova-lite-v1:0\"").unwrap();
        let path = file.path().display().to_string();

        std::env::set_var("MODELCAPS_CONFIG", &path);
        let loaded = load_config();
        std::env::remove_var("MODELCAPS_CONFIG");

        let (config, used_path) = loaded.unwrap();
        assert_eq!(used_path, path);
        assert_eq!(config.bedrock.models.len(), 1);
        assert_eq!(config.bedrock.models[0].name, "amazon.nova-lite-v1:0");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["modelcaps"]).is_err());
    }
}
