//! Shared test fixtures for the rulesync workspace.

pub mod project;

pub use project::TestProject;
