use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use warpgen::cli::{self, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().as_str().to_lowercase()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Warp(args) => cli::commands::cmd_warp(args),
        Commands::Inspect { profile } => cli::commands::cmd_inspect(&profile),
        Commands::ShowProfile => {
            cli::commands::cmd_show_profile();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
