//! Tool adapters for rulesync.
//!
//! Each supported assistant tool expects its rules in a particular layout.
//! An adapter maps the discovered rule files onto that layout:
//!
//! 1. **Combined** - one output file. Cursor renders a front-matter header and
//!    the aggregated rules; Copilot and Devin pass the first rule file through
//!    the link-or-copy primitive.
//! 2. **Per-file** - one output directory with a flat copy of every rule file
//!    (Cline).
//! 3. **Structure-preserving** - the input tree mirrored under the Cursor
//!    rules directory with `.mdc` extensions.
//!
//! The [`ToolDispatcher`] selects the adapter for a tool name.

pub mod combined;
pub mod dispatcher;
pub mod error;
pub mod integration;
pub mod per_file;
pub mod structure;
pub mod transform;

pub use combined::{PassthroughAdapter, RenderedAdapter};
pub use dispatcher::ToolDispatcher;
pub use error::{Error, Result};
pub use integration::{SyncContext, ToolAdapter};
pub use per_file::PerFileAdapter;
pub use structure::StructureAdapter;
pub use transform::{DEFAULT_TITLE, FrontMatter, ensure_heading};
