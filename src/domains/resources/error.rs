//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert into the protocol error returned to MCP clients.
    pub fn into_mcp(self) -> McpError {
        match self {
            Self::NotFound(_) => McpError::resource_not_found(self.to_string(), None),
            Self::Internal(_) => McpError::internal_error(self.to_string(), None),
        }
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_into_mcp_codes() {
        let err = ResourceError::not_found("identifiers://nope").into_mcp();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(err.message.contains("identifiers://nope"));

        let err = ResourceError::internal("boom").into_mcp();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
