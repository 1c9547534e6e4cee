//! Error types and handling for the MCP server.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::ResourceError;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_domain_errors_convert() {
        let err: Error = ToolError::not_found("luhn").into();
        assert_eq!(err.to_string(), "Tool error: Tool not found: luhn");

        let err: Error = ResourceError::not_found("identifiers://x").into();
        assert!(matches!(err, Error::Resource(ResourceError::NotFound(_))));

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(Error::from(json).to_string().starts_with("JSON error:"));
    }
}
