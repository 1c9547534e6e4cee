//! ISBN tool.

use rand::RngCore;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::ToolDefinition;
use super::common::{
    MAX_COUNT, Operation, generate_many, require_input, resolve_count, validation_payload,
};
use crate::domains::identifiers::{Family, IsbnFormat, isbn};
use crate::domains::tools::ToolError;

/// Parameters for the ISBN tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IsbnParams {
    /// `validate` an existing ISBN or `generate` new ones.
    pub operation: Operation,

    /// ISBN to validate. Hyphens and spaces are ignored.
    #[serde(default)]
    pub input: Option<String>,

    /// Number of ISBNs to generate (default 1).
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub count: Option<u32>,

    /// `isbn10`, `isbn13` or `auto` (default). `auto` detects the format by
    /// length when validating and generates ISBN-13.
    #[serde(default)]
    pub format: IsbnFormat,
}

pub struct IsbnTool;

impl ToolDefinition for IsbnTool {
    const NAME: &'static str = "isbn";

    const DESCRIPTION: &'static str = "Validate an ISBN-10 (including the X check character) or ISBN-13, \
         or generate valid ISBNs. ISBN-13s are generated with a 978/979 prefix.";

    type Params = IsbnParams;

    #[instrument(skip_all, fields(tool = Self::NAME, operation = params.operation.as_str()))]
    fn execute(params: &Self::Params, rng: &mut dyn RngCore) -> Result<Value, ToolError> {
        match params.operation {
            Operation::Validate => {
                let input = require_input(params.input.as_deref())?;
                debug!("Validating ISBN {} as {}", input, params.format.slug());
                let result = isbn::validate(input, params.format);
                validation_payload(Family::Isbn13.id_field(), input, &result)
            }
            Operation::Generate => {
                let count = resolve_count(params.count, MAX_COUNT)?;
                info!("Generating {} ISBN(s), format {}", count, params.format.slug());
                generate_many(count, || Ok(isbn::generate(rng, params.format)))
            }
        }
    }
}
