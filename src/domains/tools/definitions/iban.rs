//! IBAN tool.

use rand::RngCore;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::ToolDefinition;
use super::common::{
    MAX_COUNT, Operation, generate_many, require_input, resolve_count, validation_payload,
};
use crate::domains::identifiers::{Family, iban};
use crate::domains::tools::ToolError;

/// Parameters for the IBAN tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IbanParams {
    /// `validate` an existing IBAN or `generate` new ones.
    pub operation: Operation,

    /// IBAN to validate. Spaces are ignored and letters may be lowercase.
    #[serde(default)]
    pub input: Option<String>,

    /// Number of IBANs to generate (default 1).
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub count: Option<u32>,

    /// ISO 3166-1 alpha-2 country of generated IBANs (e.g. `DE`). A random
    /// supported country is used when omitted.
    #[serde(default, rename = "country-code", alias = "country_code")]
    pub country_code: Option<String>,
}

pub struct IbanTool;

impl ToolDefinition for IbanTool {
    const NAME: &'static str = "iban";

    const DESCRIPTION: &'static str = "Validate an IBAN (country length and MOD-97 check digits) \
         or generate IBANs with correct check digits for a given or random country.";

    type Params = IbanParams;

    #[instrument(skip_all, fields(tool = Self::NAME, operation = params.operation.as_str()))]
    fn execute(params: &Self::Params, rng: &mut dyn RngCore) -> Result<Value, ToolError> {
        match params.operation {
            Operation::Validate => {
                let input = require_input(params.input.as_deref())?;
                debug!("Validating IBAN {}", input);
                let result = iban::validate(input);
                validation_payload(Family::Iban.id_field(), input, &result)
            }
            Operation::Generate => {
                let count = resolve_count(params.count, MAX_COUNT)?;
                let country = params.country_code.as_deref();
                info!(
                    "Generating {} IBAN(s), country {}",
                    count,
                    country.unwrap_or("random")
                );
                generate_many(count, || iban::generate(rng, country))
            }
        }
    }
}
