//! Built-in tool table
//!
//! Each assistant tool is described by its output shape, default output
//! location, and what it does when there are no rule files.

/// How a tool lays out its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// A single file with a front-matter header and the combined rules.
    Rendered,
    /// A single file materialized from the first rule file.
    Passthrough,
    /// A directory holding one file per rule file.
    PerFile,
}

/// Behavior when the input directory holds no rule files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyInput {
    /// Write the output with its header only.
    HeaderOnly,
    /// Create the output directory and succeed.
    EmptyDirectory,
    /// Fail without writing anything.
    Fail,
}

/// Static description of a supported tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTool {
    pub name: &'static str,
    pub display_name: &'static str,
    pub shape: OutputShape,
    /// Output path relative to the project root.
    pub default_output: &'static str,
    pub empty_input: EmptyInput,
}

impl BuiltinTool {
    /// True if the output is a directory rather than a file.
    pub fn outputs_directory(&self) -> bool {
        matches!(self.shape, OutputShape::PerFile)
    }
}

/// Supported tools, sorted by name.
pub const BUILTIN_TOOLS: &[BuiltinTool] = &[
    BuiltinTool {
        name: "cline",
        display_name: "Cline",
        shape: OutputShape::PerFile,
        default_output: ".cline-rules",
        empty_input: EmptyInput::EmptyDirectory,
    },
    BuiltinTool {
        name: "copilot",
        display_name: "GitHub Copilot",
        shape: OutputShape::Passthrough,
        default_output: ".github/copilot-instructions.md",
        empty_input: EmptyInput::Fail,
    },
    BuiltinTool {
        name: "cursor",
        display_name: "Cursor",
        shape: OutputShape::Rendered,
        default_output: ".cursor/rules/core.mdc",
        empty_input: EmptyInput::HeaderOnly,
    },
    BuiltinTool {
        name: "devin",
        display_name: "Devin",
        shape: OutputShape::Passthrough,
        default_output: "devin-guidelines.md",
        empty_input: EmptyInput::Fail,
    },
];

/// Look up a built-in tool by name.
pub fn builtin_tool(name: &str) -> Option<&'static BuiltinTool> {
    BUILTIN_TOOLS.iter().find(|tool| tool.name == name)
}
