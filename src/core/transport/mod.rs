//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output (default for MCP), feature `stdio`
//! - **TCP**: raw TCP socket with line-delimited JSON-RPC, feature `tcp`

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
