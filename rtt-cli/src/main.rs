use std::fs::{self, OpenOptions};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rtt_cli::config::{self, ConfigError, CredentialStore};
use rtt_cli::domain::Station;
use rtt_cli::rtt::{RttClient, RttConfig, RttError, fetch_departures};
use rtt_cli::stations;
use rtt_cli::ui::{self, QuickDisplay, Selector, Theme, UiError};

/// Env var holding the log filter, e.g. `RTT_LOG=debug`.
const LOG_ENV: &str = "RTT_LOG";
const LOG_FILE: &str = "rtt-cli.log";

/// Departure board for direct trains between two UK stations.
///
/// With no arguments, pick both stations interactively.
#[derive(Debug, Parser)]
#[command(name = "rtt-cli", version, about)]
struct Args {
    /// Origin CRS code, e.g. PAD
    #[arg(requires = "to")]
    from: Option<String>,

    /// Destination CRS code, e.g. RDG
    #[arg(requires = "from")]
    to: Option<String>,

    /// Forget the stored RTT credentials and exit
    #[arg(long, conflicts_with_all = ["from", "to"])]
    reset: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rtt(#[from] RttError),

    #[error(transparent)]
    Ui(#[from] UiError),

    #[error("unknown station code: {0}")]
    UnknownStation(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "exiting with failure");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    if args.reset {
        let store = CredentialStore::default_location()?;
        if store.reset()? {
            println!("Removed stored credentials from {}", store.path().display());
        } else {
            println!("No stored credentials to remove.");
        }
        return Ok(());
    }

    // Resolve codes before prompting so a typo doesn't cost a login.
    let route = match (args.from.as_deref(), args.to.as_deref()) {
        (Some(from), Some(to)) => Some((lookup(from)?, lookup(to)?)),
        _ => None,
    };

    let credentials = config::load_or_prompt()?;
    let client = Arc::new(RttClient::new(RttConfig::new(
        credentials.username,
        credentials.password,
    ))?);
    let theme = Theme::detect();

    match route {
        Some((from, to)) => quick(client, from, to, theme).await,
        None => {
            info!("starting station picker");
            ui::run(Selector::new(theme), client).await?;
            Ok(())
        }
    }
}

fn lookup(code: &str) -> Result<&'static Station, CliError> {
    stations::find(code).ok_or_else(|| CliError::UnknownStation(code.to_string()))
}

/// Fetch first, then show the table only if there is something to show.
async fn quick(
    client: Arc<RttClient>,
    from: &Station,
    to: &Station,
    theme: Theme,
) -> Result<(), CliError> {
    println!("Searching for trains from {} to {}...", from.name, to.name);

    let departures = fetch_departures(client.as_ref(), from.code, to.code).await?;
    info!(from = from.code, to = to.code, count = departures.len(), "quick search done");

    if departures.is_empty() {
        println!("No departures found.");
        return Ok(());
    }

    ui::run(QuickDisplay::new(from, to, departures, theme), client).await?;
    Ok(())
}

/// Log to a file beside the credentials; stdout belongs to the UI.
///
/// Logging is silently skipped if the file cannot be opened.
fn init_logging() {
    let Ok(dir) = config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
