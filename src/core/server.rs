//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools and resources domains.
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::random::RandomSource;
use crate::domains::{
    resources::ResourceService,
    tools::{ToolRegistry, build_tool_router},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Random source shared by every generating tool.
    random: RandomSource,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let random = RandomSource::from_seed(config.generation.seed);
        if random.is_seeded() {
            info!("Using seeded random source");
        }

        Self {
            tool_router: build_tool_router::<Self>(random.clone()),
            resource_service: Arc::new(ResourceService::new()),
            random,
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Call a tool by name without going through the protocol layer.
    pub fn call_tool(&self, name: &str, arguments: Value) -> super::Result<Value> {
        let registry = ToolRegistry::new(self.random.clone());
        Ok(registry.call_tool(name, arguments)?)
    }

    /// Read a resource by URI and return its contents as JSON.
    pub async fn read_resource(&self, uri: &str) -> super::Result<Value> {
        let result = self.resource_service.read_resource(uri).await?;
        let contents = serde_json::to_value(&result.contents)?;
        Ok(serde_json::json!({ "contents": contents }))
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Validates and generates checksummed identifiers: credit card numbers, \
                 ISBN-10/13, EAN-13, IMO ship numbers, IBANs, MMSIs and UUIDs. \
                 Every tool takes an `operation` of `validate` or `generate`. \
                 Reference tables are available as resources under identifiers://."
                    .to_string(),
            ),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| e.into_mcp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::domains::tools::ToolError;
    use serde_json::json;

    fn seeded_config(seed: u64) -> Config {
        let mut config = Config::default();
        config.generation.seed = Some(seed);
        config
    }

    #[test]
    fn test_server_metadata() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.name(), "identifier-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));

        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "identifier-mcp-server");
    }

    #[test]
    fn test_router_lists_all_tools() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.tool_router.list_all().len(), 7);
    }

    #[test]
    fn test_seeded_servers_generate_identically() {
        let args = json!({"operation": "generate", "count": 5});
        let a = McpServer::new(seeded_config(99));
        let b = McpServer::new(seeded_config(99));
        for tool in ["credit_card", "iban", "mmsi", "uuid"] {
            assert_eq!(
                a.call_tool(tool, args.clone()).unwrap(),
                b.call_tool(tool, args.clone()).unwrap(),
                "{tool}"
            );
        }
    }

    #[test]
    fn test_call_tool_errors() {
        let server = McpServer::new(Config::default());
        assert!(matches!(
            server.call_tool("nope", json!({})),
            Err(Error::Tool(ToolError::NotFound(_)))
        ));
        assert!(matches!(
            server.call_tool("ean13", json!({"operation": "validate", "input": ""})),
            Err(Error::Tool(ToolError::InvalidArguments(_)))
        ));
    }

    #[test]
    fn test_validation_failure_is_not_an_error() {
        let server = McpServer::new(Config::default());
        let value = server
            .call_tool(
                "ean13",
                json!({"operation": "validate", "input": "1234567890123"}),
            )
            .unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["input"], "1234567890123");
    }

    #[tokio::test]
    async fn test_read_resource() {
        let server = McpServer::new(Config::default());
        let value = server
            .read_resource("identifiers://countries/iban")
            .await
            .unwrap();
        assert_eq!(value["contents"][0]["uri"], "identifiers://countries/iban");
        assert!(matches!(
            server.read_resource("identifiers://countries/ZZ").await,
            Err(Error::Resource(_))
        ));
    }
}
