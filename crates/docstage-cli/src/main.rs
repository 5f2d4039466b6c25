mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::CommandOptions;

fn main() -> anyhow::Result<()> {
    // A partially mirrored docs tree is safe to re-run over
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C); re-run to finish updating the docs tree");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.verbose {
        println!("Verbose mode enabled");
        println!("Dry run: {}", cli.dry_run);
    }

    let options = CommandOptions {
        verbose: cli.verbose,
        dry_run: cli.dry_run,
        config_path: cli.config.as_deref(),
        no_config: cli.no_config,
        source: cli.source.as_deref(),
        docs: cli.docs.as_deref(),
    };

    match &cli.command {
        Commands::Mirror => {
            commands::Mirror::execute(&options).context("Failed to execute mirror command")?;
        }
        Commands::Index { git_dir } => {
            commands::Index::execute(&options, git_dir)
                .context("Failed to execute index command")?;
        }
        Commands::Build { git_dir } => {
            commands::Build::execute(&options, git_dir)
                .context("Failed to execute build command")?;
        }
        Commands::Config => {
            commands::Config::execute(&options).context("Failed to execute config command")?;
        }
    }

    Ok(())
}
