//! Tool definitions, one file per identifier family.
//!
//! Every tool implements [`ToolDefinition`]. The trait supplies the rmcp
//! metadata, the dynamic route and the synchronous `call` entry point, so a
//! tool only declares its parameters and its `execute` logic.

pub mod common;
pub mod credit_card;
pub mod ean13;
pub mod iban;
pub mod imo;
pub mod isbn;
pub mod mmsi;
pub mod uuid;

use futures::FutureExt;
use rand::RngCore;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::RandomSource;
use crate::domains::tools::ToolError;

pub use credit_card::{CreditCardParams, CreditCardTool};
pub use ean13::{Ean13Params, Ean13Tool};
pub use iban::{IbanParams, IbanTool};
pub use imo::{ImoParams, ImoTool};
pub use isbn::{IsbnParams, IsbnTool};
pub use mmsi::{MmsiParams, MmsiTool};
pub use uuid::{UuidParams, UuidTool};

/// A tool exposed over MCP.
pub trait ToolDefinition: Sized + Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Deserialized arguments; the input schema is derived from this type.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool. Validation failures are part of the returned value;
    /// `Err` is reserved for malformed calls.
    fn execute(params: &Self::Params, rng: &mut dyn RngCore) -> Result<Value, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Deserialize JSON arguments. `null` counts as an empty object.
    fn parse(arguments: Value) -> Result<Self::Params, ToolError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        Ok(serde_json::from_value(arguments)?)
    }

    /// Parse `arguments` and execute with the shared random source.
    fn call(arguments: Value, random: &RandomSource) -> Result<Value, ToolError> {
        let params = Self::parse(arguments)?;
        random.with_rng(|rng| Self::execute(&params, rng))
    }

    /// Create a ToolRoute for the rmcp router.
    fn create_route<S>(random: RandomSource) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let random = random.clone();
            async move {
                match Self::call(Value::Object(args), &random).and_then(common::tool_result) {
                    Ok(result) => {
                        debug!(tool = Self::NAME, "Tool call succeeded");
                        Ok(result)
                    }
                    Err(e) => {
                        warn!(tool = Self::NAME, "Tool call rejected: {}", e);
                        Err(e.into_mcp())
                    }
                }
            }
            .boxed()
        })
    }
}
