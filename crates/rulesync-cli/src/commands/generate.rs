//! Generate command implementation

use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Color};
use rulesync_core::{SyncEngine, SyncOptions, SyncReport};
use rulesync_meta::load_config;

use super::{new_table, resolve_root};
use crate::error::{CliError, Result};

/// Run the generate command
pub fn run_generate(path: &Path, options: &SyncOptions) -> Result<()> {
    let root = resolve_root(path)?;
    let config = load_config(&root)?;
    let engine = SyncEngine::new(&root, &config);

    println!(
        "{} Generating rules for {}",
        "=>".blue().bold(),
        root.display().to_string().cyan()
    );

    let report = engine.run(options)?;
    print_report(&report);

    if report.success {
        Ok(())
    } else {
        let failed: Vec<&str> = report.failed_tools().map(|t| t.tool.as_str()).collect();
        Err(CliError::user(format!(
            "Failed to generate rules for: {}",
            failed.join(", ")
        )))
    }
}

/// Print a sync report: sources, warnings, then per-tool results.
pub fn print_report(report: &SyncReport) {
    if !report.sources.is_empty() {
        println!("Found {} Markdown files", report.sources.len());
        for source in &report.sources {
            println!("   {} {}", "-".dimmed(), source);
        }
    }

    for warning in &report.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    if report.dry_run {
        print_plan(report);
        return;
    }

    for tool in &report.tools {
        match &tool.error {
            None => println!(
                "{} {} -> {} ({})",
                "OK".green().bold(),
                tool.tool,
                tool.output.to_string().cyan(),
                tool.mode
            ),
            Some(error) => println!(
                "{} {}: {}",
                "FAILED".red().bold(),
                tool.tool,
                error
            ),
        }
    }

    if report.success {
        println!(
            "{} Successfully generated rules for {} tools",
            "OK".green().bold(),
            report.tools.len()
        );
    }
}

fn print_plan(report: &SyncReport) {
    println!("{}", "Dry run: no files were changed".bold());

    let mut table = new_table(vec!["Tool", "Output", "Mode", "Files"]);
    for tool in &report.tools {
        let files = if tool.written.is_empty() {
            Cell::new("(none)").fg(Color::Yellow)
        } else {
            Cell::new(
                tool.written
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
        };
        table.add_row(vec![
            Cell::new(&tool.tool),
            Cell::new(tool.output.as_str()),
            Cell::new(tool.mode.as_str()),
            files,
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulesync_test_utils::TestProject;

    #[test]
    fn test_generate_writes_outputs() {
        let project = TestProject::with_input_dir();
        project.write_rule("main.md", "# Main");

        run_generate(project.root(), &SyncOptions::default()).unwrap();

        project.assert_file_exists(".cursor/rules/core.mdc");
        project.assert_file_exists("devin-guidelines.md");
    }

    #[test]
    fn test_generate_reports_failed_tools() {
        let project = TestProject::with_input_dir();

        let err = run_generate(project.root(), &SyncOptions::default()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to generate rules for: copilot, devin"
        );
    }
}
