use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use numerology_search::config::{LoggingSettings, Settings};
use numerology_search::display::render_results;
use numerology_search::models::SearchResponse;
use numerology_search::{CandidateSearch, NameLists, SearchRequest};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Find first and middle names that give master numbers (11, 22, 33)
#[derive(Debug, Parser)]
#[command(name = "numerology-search", version)]
struct Cli {
    /// Birth date, MM-DD-YYYY or MM/DD/YYYY
    birth_date: String,

    /// Last name shared by every candidate
    last_name: String,

    /// Gender: male/m/boy, female/f/girl; anything else searches both lists
    #[arg(long, short = 'g', default_value = "")]
    gender: String,

    /// Target master numbers, comma separated (default: 11,22,33)
    #[arg(long, short = 'n')]
    numbers: Option<String>,

    /// Target components: life_path, soul_urge, expression, personality
    #[arg(long, short = 'c')]
    components: Option<String>,

    /// Maximum results to show
    #[arg(long, short = 'm', env = "NUMEROLOGY_MAX_RESULTS")]
    max_results: Option<String>,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Settings file to use instead of config/default and config/local
    #[arg(long, env = "NUMEROLOGY_CONFIG")]
    config: Option<PathBuf>,
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    let request = SearchRequest {
        birth_date: cli.birth_date,
        gender: cli.gender,
        last_name: cli.last_name,
        numbers: cli.numbers,
        components: cli.components,
        max_results: cli.max_results,
    };

    let criteria = match request.into_criteria(settings.search.default_max_results) {
        Ok(criteria) => criteria,
        Err(e) => {
            error!("Invalid search input: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Searching for names with master numbers {:?}, components {:?}, max results {}",
        criteria.target_numbers, criteria.target_components, criteria.max_results
    );

    // Ctrl-C stops the search and keeps what was found so far
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping search");
                cancel.store(true, Ordering::Relaxed);
            }
        });
    }

    let search = CandidateSearch::new(NameLists::builtin())
        .with_progress_interval(settings.search.progress_interval);

    let outcome = {
        let criteria = criteria.clone();
        let cancel = Arc::clone(&cancel);
        tokio::task::spawn_blocking(move || search.run_until(&criteria, &*cancel)).await
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Search task failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        let response = SearchResponse {
            criteria,
            results: outcome.results,
            combinations_checked: outcome.combinations_checked,
            cancelled: outcome.cancelled,
            generated_at: chrono::Utc::now(),
        };
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize results: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        if outcome.cancelled {
            println!("Search interrupted, showing partial results.");
        }
        print!("{}", render_results(&outcome.results));
    }

    ExitCode::SUCCESS
}
