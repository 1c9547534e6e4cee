//! Tools domain module.
//!
//! One MCP tool per identifier family. Every tool takes an `operation`
//! (`validate` or `generate`) and returns JSON.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Name-based dispatch without the rmcp router
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` and its name in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
