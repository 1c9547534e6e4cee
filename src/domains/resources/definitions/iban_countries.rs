//! Country to IBAN length table resource.

use serde_json::Value;

use super::ResourceDefinition;
use crate::domains::identifiers::countries::IBAN_COUNTRIES;

pub struct IbanCountriesResource;

impl ResourceDefinition for IbanCountriesResource {
    const URI: &'static str = "identifiers://countries/iban";
    const NAME: &'static str = "IBAN Countries";
    const DESCRIPTION: &'static str =
        "Countries with a registered IBAN format and their total IBAN length.";

    fn content() -> Value {
        serde_json::to_value(IBAN_COUNTRIES).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_lengths() {
        let content = IbanCountriesResource::content();
        let countries = content.as_array().unwrap();
        assert_eq!(countries.len(), IBAN_COUNTRIES.len());

        let de = countries.iter().find(|c| c["iso_code"] == "DE").unwrap();
        assert_eq!(de["length"], 22);
    }
}
