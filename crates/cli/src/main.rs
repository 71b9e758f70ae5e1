use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use walletdeck_types::{WalletRecord, dataset};

#[derive(Debug, Parser)]
#[command(name = "walletdeck", version, about = "Browse wallet balances in the terminal", long_about = None)]
struct Cli {
    /// Theme to use (see --list-themes for the available names).
    #[arg(long)]
    theme: Option<String>,

    /// Load wallet records from a JSON file instead of the built-in dataset.
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the available themes and exit.
    #[arg(long)]
    list_themes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    if cli.list_themes {
        for row in walletdeck_tui::themes::listing() {
            println!("{row}");
        }
        return Ok(());
    }

    if let Some(name) = cli.theme.as_deref()
        && walletdeck_tui::themes::resolve(name).is_none()
    {
        bail!("unknown theme '{name}'; run with --list-themes to see the available names");
    }

    let records = load_records(cli.data.as_deref())?;
    tracing::info!(count = records.len(), "starting wallet dashboard");
    walletdeck_tui::run(records, cli.theme.as_deref()).await
}

/// Logs go to stderr by default; `--log-file` redirects them so they do not
/// bleed into the alternate screen.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
    Ok(())
}

fn load_records(data: Option<&Path>) -> Result<Vec<WalletRecord>> {
    match data {
        Some(path) => {
            dataset::from_path(path).with_context(|| format!("failed to load wallet data from {}", path.display()))
        }
        None => Ok(dataset::EMBEDDED_WALLETS.clone()),
    }
}
