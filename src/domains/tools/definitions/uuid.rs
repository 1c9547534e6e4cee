//! UUID tool: random (v4) generation and parsing of any textual form.

use ::uuid::{Builder, Uuid, Variant};
use rand::RngCore;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, instrument};

use super::ToolDefinition;
use super::common::{MAX_UUID_COUNT, Operation, generated, require_input, resolve_count};
use crate::domains::tools::ToolError;

/// Parameters for the UUID tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UuidParams {
    /// `validate` an existing UUID or `generate` new ones.
    pub operation: Operation,

    /// UUID to validate: hyphenated, simple, braced or `urn:uuid:` form.
    #[serde(default)]
    pub input: Option<String>,

    /// Number of UUIDs to generate (default 1).
    #[serde(default)]
    #[schemars(range(min = 1, max = 1000))]
    pub count: Option<u32>,
}

pub struct UuidTool;

fn random_uuid(rng: &mut dyn RngCore) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

fn variant_name(variant: Variant) -> &'static str {
    match variant {
        Variant::NCS => "ncs",
        Variant::RFC4122 => "rfc4122",
        Variant::Microsoft => "microsoft",
        Variant::Future => "future",
        _ => "unknown",
    }
}

impl ToolDefinition for UuidTool {
    const NAME: &'static str = "uuid";

    const DESCRIPTION: &'static str =
        "Generate random (version 4) UUIDs, or validate a UUID and report its version and variant.";

    type Params = UuidParams;

    #[instrument(skip_all, fields(tool = Self::NAME, operation = params.operation.as_str()))]
    fn execute(params: &Self::Params, rng: &mut dyn RngCore) -> Result<Value, ToolError> {
        match params.operation {
            Operation::Validate => {
                let input = require_input(params.input.as_deref())?;
                debug!("Validating UUID {}", input);
                Ok(match Uuid::try_parse(input.trim()) {
                    Ok(uuid) => json!({
                        "valid": true,
                        "uuid": uuid.hyphenated().to_string(),
                        "version": uuid.get_version_num(),
                        "variant": variant_name(uuid.get_variant()),
                    }),
                    Err(e) => json!({
                        "valid": false,
                        "error": e.to_string(),
                        "input": input,
                    }),
                })
            }
            Operation::Generate => {
                let count = resolve_count(params.count, MAX_UUID_COUNT)?;
                info!("Generating {} UUID(s)", count);
                let uuids = (0..count).map(|_| random_uuid(rng).to_string()).collect();
                Ok(generated(uuids))
            }
        }
    }
}
