//! Tool Registry - name-based metadata and dispatch for all tools.

use serde_json::Value;
use tracing::{info, warn};

use crate::core::RandomSource;

use super::ToolError;
use super::definitions::{
    CreditCardTool, Ean13Tool, IbanTool, ImoTool, IsbnTool, MmsiTool, ToolDefinition, UuidTool,
};

/// Tool registry - lists tools and dispatches calls by name.
///
/// `call_tool` is the synchronous `execute(params) -> value | error`
/// contract used outside the rmcp router.
pub struct ToolRegistry {
    random: RandomSource,
}

impl ToolRegistry {
    pub fn new(random: RandomSource) -> Self {
        Self { random }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CreditCardTool::NAME,
            IsbnTool::NAME,
            Ean13Tool::NAME,
            ImoTool::NAME,
            IbanTool::NAME,
            MmsiTool::NAME,
            UuidTool::NAME,
        ]
    }

    /// Dispatch a tool call by name.
    pub fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        info!("Dispatching tool call: {}", name);
        let random = &self.random;
        match name {
            CreditCardTool::NAME => CreditCardTool::call(arguments, random),
            IsbnTool::NAME => IsbnTool::call(arguments, random),
            Ean13Tool::NAME => Ean13Tool::call(arguments, random),
            ImoTool::NAME => ImoTool::call(arguments, random),
            IbanTool::NAME => IbanTool::call(arguments, random),
            MmsiTool::NAME => MmsiTool::call(arguments, random),
            UuidTool::NAME => UuidTool::call(arguments, random),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(format!(
                    "{name} (available: {})",
                    self.tool_names().join(", ")
                )))
            }
        }
    }
}
