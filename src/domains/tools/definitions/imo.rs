//! IMO ship number tool.

use rand::RngCore;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::ToolDefinition;
use super::common::{
    MAX_COUNT, Operation, generate_many, require_input, resolve_count, validation_payload,
};
use crate::domains::identifiers::{Family, imo};
use crate::domains::tools::ToolError;

/// Parameters for the IMO tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImoParams {
    /// `validate` an existing IMO number or `generate` new ones.
    pub operation: Operation,

    /// IMO number to validate, with or without the `IMO` prefix.
    #[serde(default)]
    pub input: Option<String>,

    /// Number of IMO numbers to generate (default 1).
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub count: Option<u32>,
}

pub struct ImoTool;

impl ToolDefinition for ImoTool {
    const NAME: &'static str = "imo";

    const DESCRIPTION: &'static str =
        "Validate a 7-digit IMO ship identification number or generate valid IMO numbers.";

    type Params = ImoParams;

    #[instrument(skip_all, fields(tool = Self::NAME, operation = params.operation.as_str()))]
    fn execute(params: &Self::Params, rng: &mut dyn RngCore) -> Result<Value, ToolError> {
        match params.operation {
            Operation::Validate => {
                let input = require_input(params.input.as_deref())?;
                debug!("Validating IMO number {}", input);
                let result = imo::validate(input);
                validation_payload(Family::Imo.id_field(), input, &result)
            }
            Operation::Generate => {
                let count = resolve_count(params.count, MAX_COUNT)?;
                info!("Generating {} IMO number(s)", count);
                generate_many(count, || Ok(imo::generate(rng)))
            }
        }
    }
}
