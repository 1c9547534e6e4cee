//! Per-country resource template.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};
use serde_json::{Value, json};

use super::JSON_MIME_TYPE;
use crate::domains::identifiers::countries::{iban_country, mmsi_country};
use crate::domains::resources::ResourceError;

/// `identifiers://countries/{iso_code}`: one country's MIDs and IBAN length.
pub struct CountryResource;

impl CountryResource {
    pub const URI_TEMPLATE: &'static str = "identifiers://countries/{iso_code}";

    const PREFIX: &'static str = "identifiers://countries/";

    pub fn template() -> ResourceTemplate {
        RawResourceTemplate {
            uri_template: Self::URI_TEMPLATE.to_string(),
            name: "Country Identifiers".to_string(),
            title: Some("Identifier data for one country".to_string()),
            description: Some(
                "MIDs and IBAN length for an ISO 3166-1 alpha-2 country code".to_string(),
            ),
            mime_type: Some(JSON_MIME_TYPE.to_string()),
        }
        .no_annotation()
    }

    /// The ISO code in `uri`, if the URI has this template's shape.
    pub fn iso_code(uri: &str) -> Option<&str> {
        let code = uri.strip_prefix(Self::PREFIX)?;
        (code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())).then_some(code)
    }

    /// Resolve a country code against both tables.
    pub fn content(iso_code: &str) -> Result<Value, ResourceError> {
        let mmsi = mmsi_country(iso_code);
        let iban = iban_country(iso_code);
        let name = match (mmsi, iban) {
            (Some(c), _) => c.name,
            (None, Some(c)) => c.name,
            (None, None) => {
                return Err(ResourceError::not_found(format!(
                    "{}{}",
                    Self::PREFIX,
                    iso_code
                )));
            }
        };

        Ok(json!({
            "iso_code": iso_code.to_ascii_uppercase(),
            "name": name,
            "mids": mmsi.map(|c| c.mids),
            "iban_length": iban.map(|c| c.length),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_code_extraction() {
        assert_eq!(CountryResource::iso_code("identifiers://countries/de"), Some("de"));
        assert_eq!(CountryResource::iso_code("identifiers://countries/mmsi"), None);
        assert_eq!(CountryResource::iso_code("identifiers://countries/"), None);
        assert_eq!(CountryResource::iso_code("file:///etc/passwd"), None);
    }

    #[test]
    fn test_country_in_both_tables() {
        let content = CountryResource::content("de").unwrap();
        assert_eq!(content["iso_code"], "DE");
        assert_eq!(content["iban_length"], 22);
        assert!(!content["mids"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_country() {
        assert!(matches!(
            CountryResource::content("ZZ"),
            Err(ResourceError::NotFound(_))
        ));
    }
}
