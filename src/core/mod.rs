//! Core infrastructure: configuration, errors, the random source, the server
//! handler and the transport layer.

pub mod config;
pub mod error;
pub mod random;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use random::RandomSource;
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
