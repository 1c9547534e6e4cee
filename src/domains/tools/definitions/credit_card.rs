//! Credit card tool: Luhn validation with brand detection, and generation.

use rand::RngCore;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::ToolDefinition;
use super::common::{
    MAX_COUNT, Operation, generate_many, require_input, resolve_count, validation_payload,
};
use crate::domains::identifiers::{CardBrand, Family, credit_card};
use crate::domains::tools::ToolError;

/// Parameters for the credit card tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreditCardParams {
    /// `validate` an existing number or `generate` new ones.
    pub operation: Operation,

    /// Card number to validate. Spaces and dashes are ignored.
    #[serde(default)]
    pub input: Option<String>,

    /// Number of card numbers to generate (default 1).
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub count: Option<u32>,

    /// Brand of generated numbers. A random brand is used when omitted.
    #[serde(default, rename = "card-type", alias = "card_type")]
    #[schemars(with = "Option<CardBrand>")]
    pub card_type: Option<String>,
}

pub struct CreditCardTool;

impl ToolDefinition for CreditCardTool {
    const NAME: &'static str = "credit_card";

    const DESCRIPTION: &'static str = "Validate a payment card number with the Luhn algorithm and detect its brand, \
         or generate Luhn-valid test card numbers (visa, mastercard, amex, discover, diners, jcb).";

    type Params = CreditCardParams;

    #[instrument(skip_all, fields(tool = Self::NAME, operation = params.operation.as_str()))]
    fn execute(params: &Self::Params, rng: &mut dyn RngCore) -> Result<Value, ToolError> {
        match params.operation {
            Operation::Validate => {
                let input = require_input(params.input.as_deref())?;
                debug!("Validating card number {}", input);
                let result = credit_card::validate(input);
                validation_payload(Family::CreditCard.id_field(), input, &result)
            }
            Operation::Generate => {
                let count = resolve_count(params.count, MAX_COUNT)?;
                let brand = params
                    .card_type
                    .as_deref()
                    .map(str::parse::<CardBrand>)
                    .transpose()?;
                info!(
                    "Generating {} card number(s), brand {}",
                    count,
                    brand.map_or("random", |b| b.slug())
                );
                generate_many(count, || Ok(credit_card::generate(rng, brand)))
            }
        }
    }
}
