//! Watch command implementation

use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use rulesync_core::{SyncEngine, SyncOptions};
use rulesync_fs::NormalizedPath;
use rulesync_meta::{RulesConfig, load_config};
use rulesync_watch::RuleWatcher;
use tracing::error;

use super::generate::print_report;
use super::resolve_root;
use crate::error::Result;

/// Run the watch command
///
/// Generates once, then regenerates on every admitted change until Ctrl-C.
pub fn run_watch(path: &Path, cooldown: Duration, options: SyncOptions) -> Result<()> {
    let root = resolve_root(path)?;
    let config = load_config(&root)?;
    let input_dir = config.input_dir(&root);

    let watch_root = root.clone();
    let watch_config = config.clone();
    let handle = RuleWatcher::start(&input_dir, cooldown, move || {
        println!(
            "{} Change detected, regenerating rules...",
            "=>".blue().bold()
        );
        regenerate(&watch_root, &watch_config, &options);
    })?;

    handle.run_exclusive(|| regenerate(&root, &config, &options));

    println!(
        "{} Watching {} for changes (Ctrl+C to stop)",
        "=>".green().bold(),
        NormalizedPath::relative_to(&input_dir, &root).to_string().cyan()
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(handle.watch_until(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
        }
    }));

    println!("{}", "Stopping watch mode...".yellow());
    Ok(())
}

fn regenerate(root: &Path, config: &RulesConfig, options: &SyncOptions) {
    match SyncEngine::new(root, config).run(options) {
        Ok(report) => print_report(&report),
        Err(e) => println!("{} {}", "error:".red().bold(), e),
    }
}
