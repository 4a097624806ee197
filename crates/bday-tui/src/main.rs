//! Terminal birthday surprise.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use bday_core::{Engine, EngineConfig, Itinerary};
use bday_muse::{CannedMuse, GeminiMuse};
use bday_tui::app::App;
use bday_tui::worker::{Backend, Worker};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bday",
    about = "A birthday surprise hidden behind three missions",
    version
)]
struct Args {
    /// Stages to play (full, classic, minimal)
    #[arg(long, default_value = "classic")]
    itinerary: String,

    /// RNG seed for the memory board and the runaway button
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Password for the final door
    #[arg(long)]
    secret: Option<String>,

    /// Never call the Gemini API, use the built-in texts
    #[arg(long)]
    offline: bool,

    /// Gemini model
    #[arg(long, default_value = bday_muse::gemini::DEFAULT_MODEL)]
    model: String,

    /// Name the closing poem is addressed to
    #[arg(long, default_value = bday_muse::gemini::DEFAULT_RECIPIENT)]
    recipient: String,

    /// Gemini API key (falls back to API_KEY)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let itinerary = Itinerary::from_name(&args.itinerary).map_err(|e| e.to_string())?;
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut config = EngineConfig::default()
        .with_seed(args.seed)
        .with_itinerary(itinerary);
    if let Some(secret) = &args.secret {
        config = config.with_secret(secret.clone());
    }
    let engine = Engine::new(config).map_err(|e| e.to_string())?;

    let backend = choose_backend(&args);
    info!(backend = backend.label(), itinerary = %args.itinerary, "starting");
    let app = App::new(engine, backend.label());
    let worker = Worker::spawn(backend).map_err(|e| format!("worker error: {e}"))?;

    bday_tui::terminal::run(app, worker)
}

/// Gemini when a key is available, the offline texts otherwise.
fn choose_backend(args: &Args) -> Backend {
    if args.offline {
        return Backend::Canned(CannedMuse);
    }
    let key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("API_KEY").ok())
        .filter(|k| !k.trim().is_empty());
    let Some(key) = key else {
        info!("no API key, running offline");
        return Backend::Canned(CannedMuse);
    };
    match GeminiMuse::new(key) {
        Ok(muse) => Backend::Gemini(
            muse.with_model(args.model.clone())
                .with_recipient(args.recipient.clone()),
        ),
        Err(e) => {
            warn!(error = %e, "cannot build the Gemini client, running offline");
            Backend::Canned(CannedMuse)
        }
    }
}

fn init_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("cannot open log file: {e}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
