//! EAN-13 tool.

use rand::RngCore;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::ToolDefinition;
use super::common::{
    MAX_COUNT, Operation, generate_many, require_input, resolve_count, validation_payload,
};
use crate::domains::identifiers::{Family, ean};
use crate::domains::tools::ToolError;

/// Parameters for the EAN-13 tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Ean13Params {
    /// `validate` an existing barcode or `generate` new ones.
    pub operation: Operation,

    /// EAN-13 to validate.
    #[serde(default)]
    pub input: Option<String>,

    /// Number of barcodes to generate (default 1).
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub count: Option<u32>,
}

pub struct Ean13Tool;

impl ToolDefinition for Ean13Tool {
    const NAME: &'static str = "ean13";

    const DESCRIPTION: &'static str =
        "Validate an EAN-13 barcode number or generate EAN-13s with a correct check digit.";

    type Params = Ean13Params;

    #[instrument(skip_all, fields(tool = Self::NAME, operation = params.operation.as_str()))]
    fn execute(params: &Self::Params, rng: &mut dyn RngCore) -> Result<Value, ToolError> {
        match params.operation {
            Operation::Validate => {
                let input = require_input(params.input.as_deref())?;
                debug!("Validating EAN-13 {}", input);
                let result = ean::validate(input);
                validation_payload(Family::Ean13.id_field(), input, &result)
            }
            Operation::Generate => {
                let count = resolve_count(params.count, MAX_COUNT)?;
                info!("Generating {} EAN-13(s)", count);
                generate_many(count, || Ok(ean::generate(rng)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RandomSource;
    use serde_json::json;

    fn call(args: Value) -> Result<Value, ToolError> {
        Ean13Tool::call(args, &RandomSource::seeded(3))
    }

    #[test]
    fn test_validate() {
        let value = call(json!({"operation": "validate", "input": "1234567890128"})).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["ean"], "1234567890128");

        let value = call(json!({"operation": "validate", "input": "1234567890123"})).unwrap();
        assert_eq!(value["valid"], false);
    }

    #[test]
    fn test_generate_two() {
        let value = call(json!({"operation": "generate", "count": 2})).unwrap();
        let codes = value.as_array().unwrap();
        assert_eq!(codes.len(), 2);
        assert!(codes.iter().all(|c| ean::validate(c.as_str().unwrap()).valid));
    }

    #[test]
    fn test_count_zero_rejected() {
        assert!(matches!(
            call(json!({"operation": "generate", "count": 0})),
            Err(ToolError::Identifier(_))
        ));
    }
}
