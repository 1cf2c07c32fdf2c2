//! Sync orchestration
//!
//! - **engine**: runs tool adapters over the discovered rule files
//! - **report**: per-tool and per-run outcomes

mod engine;
mod report;

pub use engine::{SyncEngine, SyncOptions, sync_project};
pub use report::{SyncReport, ToolReport};
