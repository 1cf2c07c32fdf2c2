//! Configuration and tool metadata for rulesync.
//!
//! This crate owns the `.ai-rules.yml` model, its loader, and the table of
//! built-in assistant tools with their default output locations.

pub mod config;
pub mod error;
pub mod loader;
pub mod tools;

pub use config::{DEFAULT_INPUT_PATH, RulesConfig, ToolConfig};
pub use error::{Error, Result};
pub use loader::{CONFIG_FILE_NAMES, MAX_CONFIG_SIZE, find_config_file, load_config, parse_config};
pub use tools::{BUILTIN_TOOLS, BuiltinTool, EmptyInput, OutputShape, builtin_tool};
