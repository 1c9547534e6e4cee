//! Identifier MCP Server Library
//!
//! Validation and generation of checksummed real-world identifiers (payment
//! card numbers, ISBN-10/13, EAN-13, IMO ship numbers, IBANs, MMSIs and
//! UUIDs), exposed as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the random source, the server
//!   handler and the transports
//! - **domains**: business logic organized by bounded contexts
//!   - **identifiers**: checksum primitives, codecs, country tables and the
//!     MMSI classifier
//!   - **tools**: one MCP tool per identifier family
//!   - **resources**: the reference tables as read-only resources
//!
//! # Example
//!
//! ```rust,no_run
//! use identifier_mcp_server::{core::Config, core::McpServer};
//!
//! let server = McpServer::new(Config::from_env());
//! let result = server
//!     .call_tool(
//!         "iban",
//!         serde_json::json!({"operation": "validate", "input": "GB82WEST12345698765432"}),
//!     )
//!     .unwrap();
//! assert_eq!(result["valid"], true);
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, RandomSource, Result};
