//! Live harvest of restaurant listings over HTTP.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use restaurant_extract::{export, harvest, FetchConfig, HttpFetcher, Options, RecordSet, Summary};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "harvest", about = "Harvest restaurant listings into CSV")]
struct Cli {
    /// Stop after this many restaurants
    #[arg(short = 'n', long, default_value_t = 50)]
    limit: usize,

    /// Output CSV path (a `_formatted` copy is written next to it)
    #[arg(short, long, default_value = "toronto_restaurants_advanced.csv")]
    output: PathBuf,

    /// Site root that relative links and seed paths resolve against
    #[arg(long, env = "RESTAURANT_BASE_URL", default_value = restaurant_extract::DEFAULT_BASE_URL)]
    base_url: String,

    /// Listing path to paginate from; repeat for several (default: Toronto listings)
    #[arg(long = "seed")]
    seeds: Vec<String>,

    /// Skip detail page fetches
    #[arg(long)]
    no_enrich: bool,

    /// Attempts per URL
    #[arg(long, default_value_t = 3)]
    retries: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut options = Options {
        base_url: cli.base_url,
        max_restaurants: cli.limit,
        enrich_details: !cli.no_enrich,
        ..Options::default()
    };
    if !cli.seeds.is_empty() {
        options.seed_paths = cli.seeds;
    }

    let fetcher = match HttpFetcher::new(FetchConfig {
        retries: cli.retries,
        ..FetchConfig::default()
    }) {
        Ok(f) => f,
        Err(err) => {
            error!(%err, "could not set up HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let mut records = RecordSet::new();
    let outcome = harvest(&fetcher, &options, &mut records);
    let records = records.into_records();

    let code = match outcome {
        Ok(stats) => {
            info!(
                pages = stats.pages_read,
                failed = stats.pages_failed,
                added = stats.added,
                enriched = stats.enriched,
                "harvest complete"
            );
            save(&cli.output, &records);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "harvest stopped");
            if !records.is_empty() {
                save(&error_path(&cli.output), &records);
            }
            ExitCode::FAILURE
        }
    };

    print!("{}", Summary::from_records(&records));
    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    code
}

fn save(path: &Path, records: &[restaurant_extract::RestaurantRecord]) {
    if records.is_empty() {
        info!("no restaurants to save");
        return;
    }
    match export::save_csv(path, records) {
        Ok(formatted) => info!(path = %path.display(), formatted = %formatted.display(), "saved"),
        Err(err) => error!(path = %path.display(), %err, "could not save results"),
    }
}

/// `out/name.csv` becomes `out/name_error.csv`.
fn error_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!("{stem}_error.csv"))
}
