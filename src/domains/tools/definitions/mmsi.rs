//! MMSI tool: classification and type-aware generation.

use rand::RngCore;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::ToolDefinition;
use super::common::{
    MAX_COUNT, Operation, generate_many, require_input, resolve_count, validation_payload,
};
use crate::domains::identifiers::{Family, mmsi};
use crate::domains::tools::ToolError;

/// Parameters for the MMSI tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MmsiParams {
    /// `validate` (and classify) an MMSI or `generate` new ones.
    pub operation: Operation,

    /// Nine-digit MMSI to validate.
    #[serde(default)]
    pub input: Option<String>,

    /// Number of MMSIs to generate (default 1).
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub count: Option<u32>,

    /// Flag state (ISO 3166-1 alpha-2) whose MIDs generated MMSIs embed.
    #[serde(default, rename = "country-code", alias = "country_code")]
    pub country_code: Option<String>,

    /// MMSI type slug such as `ship`, `coast`, `ais_sart` or `aton_virtual`
    /// (see the `identifiers://mmsi/types` resource). Any MMSI when omitted.
    #[serde(default, rename = "type")]
    pub mmsi_type: Option<String>,
}

pub struct MmsiTool;

impl ToolDefinition for MmsiTool {
    const NAME: &'static str = "mmsi";

    const DESCRIPTION: &'static str = "Validate and classify a maritime MMSI (ship, coast station, SAR aircraft, \
         AIS-SART, AtoN...) or generate MMSIs of a given type, optionally for a given country.";

    type Params = MmsiParams;

    #[instrument(skip_all, fields(tool = Self::NAME, operation = params.operation.as_str()))]
    fn execute(params: &Self::Params, rng: &mut dyn RngCore) -> Result<Value, ToolError> {
        match params.operation {
            Operation::Validate => {
                let input = require_input(params.input.as_deref())?;
                debug!("Validating MMSI {}", input);
                let result = mmsi::validate(input);
                validation_payload(Family::Mmsi.id_field(), input, &result)
            }
            Operation::Generate => {
                let count = resolve_count(params.count, MAX_COUNT)?;
                let kind = params.mmsi_type.as_deref();
                let country = params.country_code.as_deref();
                info!(
                    "Generating {} MMSI(s), type {}, country {}",
                    count,
                    kind.unwrap_or("any"),
                    country.unwrap_or("any")
                );
                generate_many(count, || mmsi::generate(rng, kind, country))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RandomSource;
    use crate::domains::identifiers::IdentifierError;
    use serde_json::json;

    fn call(args: Value) -> Result<Value, ToolError> {
        MmsiTool::call(args, &RandomSource::seeded(6))
    }

    #[test]
    fn test_validate_classifies() {
        let value = call(json!({"operation": "validate", "input": "036699999"})).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["mmsi"], "036699999");
        assert_eq!(value["type"], "US Coast Guard Group Ship Station");
        assert_eq!(value["country_code"], "US");
    }

    #[test]
    fn test_validate_wrong_length_in_band() {
        let value = call(json!({"operation": "validate", "input": "1234"})).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["input"], "1234");
    }

    #[test]
    fn test_generate_typed_for_country() {
        let value = call(json!({
            "operation": "generate",
            "count": 20,
            "type": "coast",
            "country-code": "NO"
        }))
        .unwrap();
        for mmsi in value.as_array().unwrap() {
            let result = mmsi::validate(mmsi.as_str().unwrap());
            assert_eq!(result.metadata["type_slug"], "coast");
            assert_eq!(result.metadata["country_code"], "NO");
        }
    }

    #[test]
    fn test_unknown_type_is_call_error() {
        assert!(matches!(
            call(json!({"operation": "generate", "type": "spaceship"})),
            Err(ToolError::Identifier(IdentifierError::UnknownMmsiType(_)))
        ));
    }
}
