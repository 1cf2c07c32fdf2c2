//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// rulesync - Sync Markdown rule files into AI coding-assistant layouts
#[derive(Parser, Debug)]
#[command(name = "rulesync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate rule files for every configured tool
    ///
    /// Examples:
    ///   rulesync generate                       # Current directory
    ///   rulesync generate my-project --copy     # Copies instead of symlinks
    ///   rulesync generate --dry-run             # Show what would be written
    Generate {
        /// Project root directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Replace directories that block output files
        #[arg(short, long)]
        force: bool,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,

        /// Copy files instead of symlinking, for every tool
        #[arg(long)]
        copy: bool,

        /// Mirror the input tree under the Cursor rules directory
        #[arg(long)]
        preserve_structure: bool,
    },

    /// Watch the input directory and regenerate on change
    Watch {
        /// Project root directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Minimum milliseconds between regenerations
        #[arg(long, default_value_t = 500)]
        cooldown_ms: u64,

        /// Copy files instead of symlinking, for every tool
        #[arg(long)]
        copy: bool,

        /// Mirror the input tree under the Cursor rules directory
        #[arg(long)]
        preserve_structure: bool,
    },

    /// Validate rule files and generated outputs
    Validate {
        /// Project root directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Expect the mirrored Cursor rules directory
        #[arg(long)]
        preserve_structure: bool,
    },

    /// List supported tools and their default outputs
    ListTools,
}
