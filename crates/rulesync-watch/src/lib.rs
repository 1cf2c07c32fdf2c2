//! Change watcher for rulesync
//!
//! Watches an input directory recursively and calls back when a Markdown file
//! changes, at most once per cooldown window. Callbacks never overlap.

pub mod error;
pub mod gate;
pub mod watcher;

pub use error::{Error, Result};
pub use gate::{ChangeHandler, DEFAULT_COOLDOWN, EventGate, is_rule_event};
pub use watcher::{LIVENESS_TICK, RuleWatcher, WatchHandle};
