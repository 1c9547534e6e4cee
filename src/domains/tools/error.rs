//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::identifiers::IdentifierError;

/// Call-level errors raised by tools.
///
/// An identifier that fails validation is not a `ToolError`; it is reported
/// inside a successful result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The engine rejected the request (unknown country, count out of range...).
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert into the protocol error returned to MCP clients.
    pub fn into_mcp(self) -> McpError {
        match self {
            Self::Internal(_) => McpError::internal_error(self.to_string(), None),
            _ => McpError::invalid_params(self.to_string(), None),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidArguments(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_errors_are_transparent() {
        let err = ToolError::from(IdentifierError::unknown_country("ZZ"));
        assert_eq!(err.to_string(), "Unknown country code: ZZ");
    }

    #[test]
    fn test_into_mcp_codes() {
        let invalid = ToolError::invalid_arguments("missing input").into_mcp();
        assert_eq!(invalid.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        let internal = ToolError::internal("boom").into_mcp();
        assert_eq!(internal.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
    }
}
