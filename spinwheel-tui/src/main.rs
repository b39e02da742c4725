mod app;
mod error;
mod event_loop;
mod render;
mod surface;
mod terminal;

use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use spinwheel_lib::{ItemList, RandomSource, RngSource, SessionClock, SpinController, WheelConfig};

use crate::app::App;
use crate::error::AppError;

/// Spin a list of names and draw a winner.
#[derive(Debug, Parser)]
#[command(name = "spinwheel", version)]
struct Args {
    /// JSON file holding a list of labels. A sample list is used when omitted.
    items: Option<PathBuf>,

    /// Seed for a reproducible sequence of draws.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "spinwheel.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Debug)]
    log_level: LogLevel,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn sample_items() -> ItemList {
    ItemList::new([
        "Andi Pratama",
        "Budi Santoso",
        "Citra Lestari",
        "Dewi Anggraini",
        "Eko Saputra",
        "Fajar Nugroho",
        "Gita Permata",
        "Hadi Wijaya",
        "Intan Maharani",
        "Joko Susilo",
    ])
}

async fn run(args: Args) -> Result<(), AppError> {
    let log_file = File::create(&args.log_file)?;
    WriteLogger::init(args.log_level.into(), Config::default(), log_file)?;

    let items = match &args.items {
        Some(path) => ItemList::load(path)?,
        None => sample_items(),
    };
    info!("Loaded {} items", items.len());

    let random: Box<dyn RandomSource> = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::thread()),
    };

    let clock = SessionClock::start();
    let wheel = SpinController::new(items, WheelConfig::default(), random, clock.now())?;

    event_loop::run(App::new(clock, wheel), args.fps).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
