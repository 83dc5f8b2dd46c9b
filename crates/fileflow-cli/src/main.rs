use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use fileflow_core::FileFlowConfig;
use fileflow_dashboard::DashboardServer;

/// Config file picked up from the working directory when none is given.
const DEFAULT_CONFIG: &str = "fileflow.yaml";

#[derive(Parser, Debug)]
#[command(name = "fileflow", version, about = "FileFlow admin dashboard")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the dashboard.
    Serve {
        /// Path to the config file. Defaults to ./fileflow.yaml when present.
        #[arg(long, short, env = "FILEFLOW_CONFIG")]
        config: Option<PathBuf>,

        /// Override dashboard.host
        #[arg(long)]
        host: Option<String>,

        /// Override dashboard.port
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Parse and validate a config file, then exit.
    Check {
        #[arg(long, short, env = "FILEFLOW_CONFIG", default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Serve { config, host, port } => {
            let (mut config, source) = load_config(config.as_deref())?;
            init_tracing(&config.logging.level);

            if let Some(host) = host {
                config.dashboard.host = host;
            }
            if let Some(port) = port {
                config.dashboard.port = port;
            }
            config.validate().context("invalid command-line overrides")?;

            match source {
                Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
                None => tracing::info!("No {DEFAULT_CONFIG} found, using defaults"),
            }

            DashboardServer::new(config).run().await?;
        }
        Command::Check { config } => {
            init_tracing("info");
            let loaded = FileFlowConfig::from_file(&config)
                .with_context(|| format!("failed to load {}", config.display()))?;
            tracing::info!(
                path = %config.display(),
                address = %loaded.dashboard.bind_addr(),
                page_size = loaded.table.page_size,
                auth = loaded.dashboard.auth.enabled,
                users = loaded.dashboard.auth.users.len(),
                "Configuration is valid"
            );
        }
    }

    Ok(())
}

/// Load the given config file, or the default one if it exists.
///
/// An explicitly named file must exist; a missing default falls back to
/// built-in defaults. Returns the path actually read.
fn load_config(path: Option<&Path>) -> anyhow::Result<(FileFlowConfig, Option<PathBuf>)> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            if !default.exists() {
                return Ok((FileFlowConfig::default(), None));
            }
            default
        }
    };
    let config = FileFlowConfig::from_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    Ok((config, Some(path)))
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli =
            Cli::try_parse_from(["fileflow", "serve", "--host", "0.0.0.0", "--port", "8080"])
                .unwrap();
        match cli.cmd {
            Command::Serve { host, port, .. } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/fileflow.yaml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load"));
    }
}
