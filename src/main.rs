//! Clipbridge CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipbridge::cli::{
    handle_config_command, load_config, run_command, Cli, Commands, Presenter, EXIT_ERROR,
};
use clipbridge::infrastructure::{init_logging, XdgConfigStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    match cli.command {
        // Config subcommands work on the raw file, not the merged view
        Commands::Config { action } => {
            init_logging(if cli.verbose { "debug" } else { "warn" });
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        command => {
            let config = load_config(&store, &presenter).await;
            init_logging(if cli.verbose {
                "debug"
            } else {
                config.log_level_or_default()
            });

            ExitCode::from(run_command(command, &config, &presenter).await)
        }
    }
}
