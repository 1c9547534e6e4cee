//! Country to MID table resource.

use serde_json::Value;

use super::ResourceDefinition;
use crate::domains::identifiers::countries::MMSI_COUNTRIES;

pub struct MmsiCountriesResource;

impl ResourceDefinition for MmsiCountriesResource {
    const URI: &'static str = "identifiers://countries/mmsi";
    const NAME: &'static str = "MMSI Countries";
    const DESCRIPTION: &'static str =
        "Flag states and their Maritime Identification Digits (MIDs), usable as `country-code` for the mmsi tool.";

    fn content() -> Value {
        serde_json::to_value(MMSI_COUNTRIES).unwrap_or_default()
    }
}
