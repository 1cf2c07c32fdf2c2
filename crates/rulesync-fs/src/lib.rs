//! Filesystem primitives for rulesync
//!
//! Provides the link-or-copy primitive, atomic writes, Markdown aggregation
//! and rule discovery used by the tool adapters.

pub mod aggregate;
pub mod discover;
pub mod error;
pub mod io;
pub mod link;
pub mod mode;
pub mod path;

pub use aggregate::{Combined, SEPARATOR, combine_contents, combine_markdown};
pub use discover::{MARKDOWN_EXTENSION, find_markdown_files, is_markdown};
pub use error::{Error, Result};
pub use link::{clear_conflict, symlinks_supported, sync_file};
pub use mode::SyncMode;
pub use path::{NormalizedPath, relative_path};
