//! rulesync CLI
//!
//! Synchronizes Markdown rule files into the layouts AI coding assistants
//! expect.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Markdown rule synchronizer", "rulesync".green().bold());
            println!();
            println!("Run {} for available commands.", "rulesync --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr: DEBUG with `--verbose`, otherwise `RUST_LOG` or warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Generate {
            path,
            force,
            dry_run,
            copy,
            preserve_structure,
        } => commands::run_generate(
            &path,
            &commands::sync_options(force, dry_run, copy, preserve_structure),
        ),
        Commands::Watch {
            path,
            cooldown_ms,
            copy,
            preserve_structure,
        } => commands::run_watch(
            &path,
            std::time::Duration::from_millis(cooldown_ms),
            commands::sync_options(true, false, copy, preserve_structure),
        ),
        Commands::Validate {
            path,
            preserve_structure,
        } => commands::run_validate(&path, preserve_structure),
        Commands::ListTools => commands::run_list_tools(),
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CliError;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let error = CliError::from(rulesync_core::Error::MissingInput {
            path: std::path::PathBuf::from(".ai"),
        });
        assert_eq!(error.to_string(), "Input directory not found: .ai");
    }
}
