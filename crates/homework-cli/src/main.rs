use clap::{Parser, Subcommand};
use homework_core::Config;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "homework-cli", version, about = "Homework Tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assignment management
    Assignment {
        #[command(subcommand)]
        action: commands::assignment::AssignmentAction,
    },
    /// Workload warnings, study schedule and tips
    Advise {
        #[command(subcommand)]
        action: commands::advise::AdviseAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    logging::init(&config.logging.level);

    let result = match cli.command {
        Commands::Assignment { action } => commands::assignment::run(action, &config),
        Commands::Advise { action } => commands::advise::run(action, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
