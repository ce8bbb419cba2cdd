//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;
pub mod tags;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::client::{Client, Tags};
use crate::config::Settings;
use crate::errors::Result;
use crate::provider::{Provider, ProviderConfig};

pub use tags::parse_tag;

/// Vezor CLI: read secrets and groups from the Vezor API.
#[derive(Parser)]
#[command(
    name = "vezor",
    about = "Read secrets and groups from the Vezor secrets API",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vezor API URL (overrides the config file and VEZOR_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// API key (overrides the config file and VEZOR_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Settings file (default: ./.vezor.toml if present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Read a secret by name and tags (vezor_secret)
    Secret {
        /// Secret name (matched case-insensitively)
        name: String,
        /// Required tag, repeatable (e.g. --tag env=prod --tag app=api)
        #[arg(short, long = "tag", value_parser = parse_tag)]
        tags: Vec<(String, String)>,
        /// Show the decrypted value in table and json output
        #[arg(long)]
        show_value: bool,
        /// Output format: table, json, or env (env always prints values)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Read a group and its secrets (vezor_group)
    Group {
        /// Group name
        name: String,
        /// Show decrypted values in table and json output
        #[arg(long)]
        show_values: bool,
        /// Output format: table, json, or env (env always prints values)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print a secret's value by ID
    Get {
        /// Secret ID
        id: String,
        /// Specific version to fetch
        #[arg(long)]
        version: Option<i64>,
    },

    /// List secrets matching tags
    List {
        /// Tag filter, repeatable (e.g. --tag env=prod)
        #[arg(short, long = "tag", value_parser = parse_tag)]
        tags: Vec<(String, String)>,
        /// Search string
        #[arg(short, long)]
        search: Option<String>,
        /// Maximum number of secrets to return (0 = server default)
        #[arg(short, long, default_value = "0")]
        limit: u32,
    },

    /// Show version and registered data sources
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// How data source state is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Env,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--verbose` enables debug output for this
/// crate and everything else stays at `warn`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "warn,vezor=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Build the explicit provider configuration: CLI flags over the settings file.
pub fn provider_config(cli: &Cli) -> Result<ProviderConfig> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Path::new(path))?,
        None => Settings::load(&std::env::current_dir()?)?,
    };

    Ok(ProviderConfig {
        api_key: cli.api_key.clone().or(settings.api_key),
        api_url: cli.api_url.clone().or(settings.api_url),
    })
}

/// Resolve configuration and build an API client.
pub fn connect(cli: &Cli) -> Result<Client> {
    let config = provider_config(cli)?;
    Provider::new(env!("CARGO_PKG_VERSION")).configure(&config)
}

/// Collect parsed `--tag` pairs into a tag map. Later duplicates win.
pub fn tags_from(pairs: &[(String, String)]) -> Tags {
    pairs.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_secret_command_with_tags() {
        let cli = Cli::try_parse_from([
            "vezor", "secret", "DB_URL", "--tag", "env=prod", "-t", "app=api",
        ])
        .unwrap();

        match cli.command {
            Commands::Secret { name, tags, .. } => {
                assert_eq!(name, "DB_URL");
                assert_eq!(
                    tags,
                    vec![
                        ("env".to_string(), "prod".to_string()),
                        ("app".to_string(), "api".to_string()),
                    ]
                );
            }
            _ => panic!("expected secret command"),
        }
    }

    #[test]
    fn rejects_malformed_tag() {
        let result = Cli::try_parse_from(["vezor", "secret", "DB_URL", "--tag", "env"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vezor",
            "group",
            "backend",
            "--api-url",
            "http://localhost:9000",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000"));
        assert!(cli.verbose);
    }

    #[test]
    fn flags_override_settings_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("vezor.toml");
        std::fs::write(
            &path,
            "api_url = \"https://file.example\"\napi_key = \"file-key\"\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "vezor",
            "--config",
            path.to_str().unwrap(),
            "--api-key",
            "flag-key",
            "version",
        ])
        .unwrap();

        let config = provider_config(&cli).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("flag-key"));
        assert_eq!(config.api_url.as_deref(), Some("https://file.example"));
    }

    #[test]
    fn tags_from_keeps_last_duplicate() {
        let tags = tags_from(&[
            ("env".to_string(), "dev".to_string()),
            ("env".to_string(), "prod".to_string()),
        ]);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags["env"], "prod");
    }
}
