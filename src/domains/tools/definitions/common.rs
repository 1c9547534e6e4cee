//! Helpers shared by the identifier tools.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domains::identifiers::{IdentifierError, ValidationResult};
use crate::domains::tools::ToolError;

/// Upper bound on `count` for checksummed identifier families.
pub const MAX_COUNT: u32 = 100;

/// Upper bound on `count` for UUIDs.
pub const MAX_UUID_COUNT: u32 = 1000;

/// What a tool call should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Check an identifier given in `input`.
    Validate,
    /// Produce `count` fresh identifiers.
    Generate,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Generate => "generate",
        }
    }
}

/// Resolve the requested count, defaulting to 1.
pub fn resolve_count(count: Option<u32>, max: u32) -> Result<usize, IdentifierError> {
    let count = count.unwrap_or(1);
    if !(1..=max).contains(&count) {
        return Err(IdentifierError::CountNotInRange {
            count: u64::from(count),
            min: 1,
            max: u64::from(max),
        });
    }
    Ok(count as usize)
}

/// The `input` argument of a validate call.
pub fn require_input(input: Option<&str>) -> Result<&str, ToolError> {
    match input {
        Some(input) if !input.is_empty() => Ok(input),
        Some(_) => Err(ToolError::invalid_arguments(
            "'input' must not be empty for operation 'validate'",
        )),
        None => Err(ToolError::invalid_arguments(
            "'input' is required for operation 'validate'",
        )),
    }
}

/// A single string for one identifier, an array otherwise.
pub fn generated(mut values: Vec<String>) -> Value {
    if values.len() == 1 {
        Value::String(values.remove(0))
    } else {
        Value::from(values)
    }
}

/// Generate `count` identifiers, stopping at the first error.
pub fn generate_many<F>(count: usize, mut generate: F) -> Result<Value, ToolError>
where
    F: FnMut() -> Result<String, IdentifierError>,
{
    let values = (0..count)
        .map(|_| generate())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(generated(values))
}

/// Wire payload for a validation result.
///
/// `{valid: true, <id_field>: normalized, ...metadata}` on success,
/// `{valid: false, error, input}` when the identifier is invalid. An error
/// that describes the request rather than the identifier is returned as `Err`.
pub fn validation_payload(
    id_field: &str,
    input: &str,
    result: &ValidationResult,
) -> Result<Value, ToolError> {
    if let Some(error) = result.error.as_ref().filter(|e| !e.is_validation_failure()) {
        return Err(ToolError::Identifier(error.clone()));
    }
    let mut payload = Map::new();
    payload.insert("valid".to_string(), Value::Bool(result.valid));
    match (&result.normalized, &result.error) {
        (Some(normalized), None) if result.valid => {
            payload.insert(id_field.to_string(), Value::from(normalized.as_str()));
            payload.extend(result.metadata.clone());
        }
        (_, error) => {
            let message = error
                .as_ref()
                .map_or_else(|| "Invalid identifier".to_string(), ToString::to_string);
            payload.insert("error".to_string(), Value::from(message));
            payload.insert("input".to_string(), Value::from(input));
        }
    }
    Ok(Value::Object(payload))
}

/// Wrap a tool's JSON value in an MCP result.
pub fn tool_result(value: Value) -> Result<CallToolResult, ToolError> {
    let text = match &value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other)
            .map_err(|e| ToolError::internal(format!("Failed to serialize result: {e}")))?,
    };
    Ok(CallToolResult {
        content: vec![Content::text(text)],
        structured_content: value.is_object().then_some(value),
        is_error: Some(false),
        meta: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_count_bounds() {
        assert_eq!(resolve_count(None, MAX_COUNT), Ok(1));
        assert_eq!(resolve_count(Some(100), MAX_COUNT), Ok(100));
        assert!(matches!(
            resolve_count(Some(0), MAX_COUNT),
            Err(IdentifierError::CountNotInRange { count: 0, .. })
        ));
        assert!(matches!(
            resolve_count(Some(101), MAX_COUNT),
            Err(IdentifierError::CountNotInRange { count: 101, max: 100, .. })
        ));
        assert_eq!(resolve_count(Some(1000), MAX_UUID_COUNT), Ok(1000));
    }

    #[test]
    fn test_require_input() {
        assert_eq!(require_input(Some("123")).unwrap(), "123");
        assert!(matches!(
            require_input(None),
            Err(ToolError::InvalidArguments(_))
        ));
        assert!(matches!(
            require_input(Some("")),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_generated_shape() {
        assert_eq!(generated(vec!["a".into()]), json!("a"));
        assert_eq!(generated(vec!["a".into(), "b".into()]), json!(["a", "b"]));
    }

    #[test]
    fn test_validation_payload_shapes() {
        let mut metadata = Map::new();
        metadata.insert("card_type".into(), json!("visa"));
        let ok = ValidationResult::valid("4532015112830366", metadata);
        assert_eq!(
            validation_payload("card", "4532 0151 1283 0366", &ok).unwrap(),
            json!({"valid": true, "card": "4532015112830366", "card_type": "visa"})
        );

        let bad = ValidationResult::invalid(IdentifierError::ChecksumMismatch);
        assert_eq!(
            validation_payload("card", "4532015112830367", &bad).unwrap(),
            json!({"valid": false, "error": "Checksum mismatch", "input": "4532015112830367"})
        );
    }

    #[test]
    fn test_validation_payload_rejects_request_errors() {
        let in_band = ValidationResult::invalid(IdentifierError::wrong_length("9", 4));
        assert_eq!(
            validation_payload("mmsi", "1234", &in_band).unwrap()["valid"],
            false
        );

        let request = ValidationResult::invalid(IdentifierError::unknown_country("ZZ"));
        assert!(matches!(
            validation_payload("iban", "ZZ00", &request),
            Err(ToolError::Identifier(IdentifierError::UnknownCountry(_)))
        ));
    }

    #[test]
    fn test_tool_result_structured_only_for_objects() {
        let result = tool_result(json!({"valid": true})).unwrap();
        assert_eq!(result.structured_content, Some(json!({"valid": true})));
        assert_eq!(result.is_error, Some(false));

        let result = tool_result(json!("9780306406157")).unwrap();
        assert!(result.structured_content.is_none());
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "9780306406157");
    }
}
