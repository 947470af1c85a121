use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pawtrack-cli", version, about = "Pawtrack workload analytics CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify events from a JSON file
    Classify(commands::classify::ClassifyArgs),
    /// Workload metrics
    Metrics {
        #[command(subcommand)]
        action: commands::metrics::MetricsAction,
    },
    /// Workload rules and burnout risk
    Rules {
        #[command(subcommand)]
        action: commands::rules::RulesAction,
    },
    /// Multi-day booking generation
    Booking {
        #[command(subcommand)]
        action: commands::booking::BookingAction,
    },
    /// Settings management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PAWTRACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Metrics { action } => commands::metrics::run(action),
        Commands::Rules { action } => commands::rules::run(action),
        Commands::Booking { action } => commands::booking::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
