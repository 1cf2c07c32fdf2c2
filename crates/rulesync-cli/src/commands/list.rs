//! list-tools command

use colored::Colorize;
use comfy_table::{Cell, Color};
use rulesync_fs::SyncMode;
use rulesync_meta::ToolConfig;
use rulesync_tools::ToolDispatcher;

use super::new_table;
use crate::error::Result;

/// Run the list-tools command
pub fn run_list_tools() -> Result<()> {
    let dispatcher = ToolDispatcher::new();
    let defaults = ToolConfig::default();

    println!("{}", "Supported AI Tools".bold());

    let mut table = new_table(vec!["Tool", "Name", "Default Output", "Layout", "Mode"]);
    for tool in dispatcher.list_available() {
        let layout = dispatcher
            .get_adapter(tool.name, &defaults)
            .map(|adapter| adapter.describe())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(tool.name).fg(Color::Green),
            Cell::new(tool.display_name),
            Cell::new(tool.default_output),
            Cell::new(layout),
            Cell::new(SyncMode::default().as_str()),
        ]);
    }
    println!("{table}");

    println!(
        "{} Override outputs and modes in {}.",
        "Tip:".dimmed(),
        ".ai-rules.yml".cyan()
    );
    Ok(())
}
