//! STDIO transport.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single client over stdin/stdout until it disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
