//! Tool dispatcher that selects the adapter for a tool name

use rulesync_meta::{BUILTIN_TOOLS, BuiltinTool, OutputShape, ToolConfig, builtin_tool};

use crate::combined::{PassthroughAdapter, RenderedAdapter};
use crate::integration::ToolAdapter;
use crate::per_file::PerFileAdapter;
use crate::structure::StructureAdapter;

/// Routes tool names to adapters.
///
/// The set of tools is closed; names outside [`BUILTIN_TOOLS`] have no
/// adapter.
#[derive(Debug, Clone, Default)]
pub struct ToolDispatcher {
    preserve_structure: bool,
}

impl ToolDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror the input tree for tools that render a combined file.
    pub fn with_preserve_structure(mut self, preserve: bool) -> Self {
        self.preserve_structure = preserve;
        self
    }

    /// Get the adapter for `tool_name` configured by `config`.
    ///
    /// Returns `None` if the tool name is not recognized.
    pub fn get_adapter(&self, tool_name: &str, config: &ToolConfig) -> Option<Box<dyn ToolAdapter>> {
        let tool = builtin_tool(tool_name)?;
        let output = config.output.clone();

        let adapter: Box<dyn ToolAdapter> = match tool.shape {
            OutputShape::Rendered if self.preserve_structure => {
                Box::new(StructureAdapter::new(tool, output))
            }
            OutputShape::Rendered => Box::new(RenderedAdapter::new(tool, output)),
            OutputShape::Passthrough => Box::new(PassthroughAdapter::new(tool, output)),
            OutputShape::PerFile => Box::new(PerFileAdapter::new(tool, output)),
        };
        Some(adapter)
    }

    pub fn has_tool(&self, tool_name: &str) -> bool {
        builtin_tool(tool_name).is_some()
    }

    /// All supported tools, sorted by name.
    pub fn list_available(&self) -> Vec<&'static BuiltinTool> {
        BUILTIN_TOOLS.iter().collect()
    }
}
