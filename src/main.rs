use clap::Parser;
use roomatch_client::config::{LoggingSettings, Settings};
use roomatch_client::{BlockingMatchFetcher, ClientConfig, MatchFetcher, MatchOutcome, MatchingError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Fetch the next roommate match for a seeker
#[derive(Parser, Debug)]
#[command(name = "roomatch-client")]
#[command(version, about = "Fetch the next RooMatch match for a roommate seeker")]
struct Cli {
    /// ID of the roommate seeker
    seeker_id: String,

    /// Path to configuration file (defaults to config/default.toml and config/local.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Use the blocking client instead of the async one
    #[arg(long)]
    blocking: bool,
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // stdout carries the match itself
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn run(cli: &Cli, config: ClientConfig) -> Result<MatchOutcome, MatchingError> {
    if cli.blocking {
        return BlockingMatchFetcher::new(config)?.fetch_next_match(&cli.seeker_id);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| MatchingError::InvalidConfig(format!("failed to start runtime: {}", e)))?;

    let fetcher = MatchFetcher::new(config)?;
    runtime.block_on(fetcher.fetch_next_match(&cli.seeker_id))
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    let mut config = settings.api.client_config();
    if let Some(url) = &cli.base_url {
        config = config.with_custom_base_url(url.clone());
    }

    info!("Requesting next match for seeker {}", cli.seeker_id);

    match run(&cli, config) {
        Ok(MatchOutcome::Match(m)) => match serde_json::to_string_pretty(&m) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to render match: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(MatchOutcome::NoMatch) => {
            println!("no more matches");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to fetch next match: {}", e);
            ExitCode::FAILURE
        }
    }
}
