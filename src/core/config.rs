//! Configuration management for the MCP server.
//!
//! Values come from defaults overridden by `MCP_*` environment variables
//! (a `.env` file is honoured).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Identifier generation settings.
    pub generation: GenerationConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Identifier generation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Seed for a reproducible random source. `None` uses thread-local
    /// entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "identifier-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_RANDOM_SEED` and the transport variables read by
    /// [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(seed) = std::env::var("MCP_RANDOM_SEED") {
            match seed.trim().parse::<u64>() {
                Ok(seed) => {
                    config.generation.seed = Some(seed);
                    info!("Deterministic generation enabled (seed {})", seed);
                }
                Err(e) => warn!("Ignoring MCP_RANDOM_SEED={:?}: {}", seed, e),
            }
        }

        config
    }
}
