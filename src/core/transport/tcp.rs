//! TCP transport: one MCP session per accepted connection.

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Back-off after a failed `accept`.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// The `host:port` the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections forever, serving each on its own task.
    ///
    /// All sessions share the server's random source, so a seeded source
    /// yields one deterministic stream across connections in call order.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    info!("Accepted connection from {}", peer_addr);
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                    }
                    tokio::spawn(Self::serve_connection(server.clone(), stream, peer_addr));
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                }
            }
        }
    }

    async fn serve_connection(server: McpServer, stream: TcpStream, peer_addr: SocketAddr) {
        let service = match server.serve(stream).await {
            Ok(service) => service,
            Err(e) => {
                warn!("Failed to initialize session for {}: {}", peer_addr, e);
                return;
            }
        };
        debug!("Session with {} initialized", peer_addr);

        match service.waiting().await {
            Ok(reason) => info!("Client {} disconnected ({:?})", peer_addr, reason),
            Err(e) => warn!("Session with {} ended with error: {}", peer_addr, e),
        }
    }
}
