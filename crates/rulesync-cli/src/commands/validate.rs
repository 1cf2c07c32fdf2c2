//! Validate command implementation

use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Color};
use rulesync_core::{OutputStatus, validate_project};
use rulesync_meta::load_config;

use super::{new_table, resolve_root};
use crate::error::{CliError, Result};

/// Run the validate command
pub fn run_validate(path: &Path, preserve_structure: bool) -> Result<()> {
    let root = resolve_root(path)?;
    let config = load_config(&root)?;

    println!(
        "{} Validating {}",
        "=>".blue().bold(),
        root.display().to_string().cyan()
    );

    let report = validate_project(&root, &config, preserve_structure);
    if report.source_count > 0 {
        println!(
            "Found {} Markdown files in {}",
            report.source_count, report.input_dir
        );
    }

    let mut table = new_table(vec!["Tool", "Status", "Details"]);
    for check in &report.outputs {
        let color = match check.status {
            OutputStatus::Ok { .. } => Color::Green,
            OutputStatus::Missing => Color::Yellow,
            OutputStatus::BrokenLink | OutputStatus::WrongKind => Color::Red,
        };
        table.add_row(vec![
            Cell::new(&check.tool),
            Cell::new(check.status.label()).fg(color),
            Cell::new(check.details()),
        ]);
    }
    println!("{table}");

    if !report.errors.is_empty() {
        println!("{}", "Errors:".red().bold());
        for error in &report.errors {
            println!("   {} {}", "-".red(), error);
        }
    }

    if !report.warnings.is_empty() {
        println!("{}", "Warnings:".yellow().bold());
        for warning in &report.warnings {
            println!("   {} {}", "-".yellow(), warning);
        }
    }

    if report.all_passed() {
        println!("{}", "All checks passed".green().bold());
    }

    if report.is_ok() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "Validation failed with {} error(s)",
            report.errors.len()
        )))
    }
}
