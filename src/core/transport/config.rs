//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with line-delimited JSON-RPC.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

#[cfg(feature = "tcp")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or tcp");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

impl TransportConfig {
    /// Create a TCP transport config.
    #[cfg(feature = "tcp")]
    pub fn tcp(port: u16, host: impl Into<String>) -> Self {
        Self::Tcp(TcpConfig {
            port,
            host: host.into(),
        })
    }

    /// Load transport config from `MCP_TRANSPORT`, `MCP_TCP_HOST` and
    /// `MCP_TCP_PORT`.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => {
                let port = std::env::var("MCP_TCP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_TCP_PORT);
                let host = std::env::var("MCP_TCP_HOST").unwrap_or_else(|_| default_host());
                Self::Tcp(TcpConfig { port, host })
            }
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
        }
    }
}
