use clap::{Parser, Subcommand};
use scorigami::config::{DataPaths, ThresholdSet};
use scorigami::loader::Dataset;
use scorigami::view::Controller;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    data: DataPaths,

    /// Optional JSON file overriding the built-in color thresholds.
    #[arg(global = true, long)]
    thresholds: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one narrative step's grid.
    Show(cmd::show::ShowArgs),
    /// Walk every narrative step in order, ending at the explorer.
    Narrative,
    /// Free-form explorer with tour/year filters.
    Explore(cmd::explore::ExploreArgs),
    /// Global statistics (rarest, most popular, coverage).
    Stats(cmd::stats::StatsArgs),
    /// Counters and example matches for one scoreline.
    Detail(cmd::detail::DetailArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚀 Initializing Tennis Scorigami...");

    let thresholds = match &cli.thresholds {
        Some(path) => ThresholdSet::load_from_file(path),
        None => ThresholdSet::default(),
    };

    // Loading is all-or-nothing: any bad file aborts the whole session.
    let dataset = Dataset::load(&cli.data).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR LOADING DATA:");
        error!("   {}", e);
        process::exit(1);
    });

    let controller = Controller::new(dataset, thresholds);

    let result = match cli.command {
        Commands::Show(args) => cmd::show::run(args, &controller),
        Commands::Narrative => cmd::show::run_all(&controller),
        Commands::Explore(args) => cmd::explore::run(args, &controller),
        Commands::Stats(args) => cmd::stats::run(args, &controller),
        Commands::Detail(args) => cmd::detail::run(args, &controller),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
