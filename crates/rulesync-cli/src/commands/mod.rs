//! Command implementations for rulesync-cli

pub mod generate;
pub mod list;
pub mod validate;
pub mod watch;

use std::path::{Path, PathBuf};

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use rulesync_core::SyncOptions;
use rulesync_fs::SyncMode;

use crate::error::{CliError, Result};

pub use generate::run_generate;
pub use list::run_list_tools;
pub use validate::run_validate;
pub use watch::run_watch;

/// Build sync options from command-line flags.
pub fn sync_options(force: bool, dry_run: bool, copy: bool, preserve_structure: bool) -> SyncOptions {
    SyncOptions {
        force_mode: copy.then_some(SyncMode::Copy),
        dry_run,
        force,
        preserve_structure,
    }
}

/// Resolve the project root argument to an absolute directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(CliError::user(format!(
            "Directory not found: {}",
            path.display()
        )));
    }
    Ok(dunce::canonicalize(path)?)
}

/// A table with the shared look.
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);
    table
}
