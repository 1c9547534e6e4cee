//! MMSI type list resource.

use serde_json::{Value, json};

use super::ResourceDefinition;
use crate::domains::identifiers::mmsi::MMSI_TYPES;

/// The MMSI classification rules, in precedence order.
pub struct MmsiTypesResource;

impl ResourceDefinition for MmsiTypesResource {
    const URI: &'static str = "identifiers://mmsi/types";
    const NAME: &'static str = "MMSI Types";
    const DESCRIPTION: &'static str = "MMSI categories in classification order. \
         Use `slug` as the `type` argument of the mmsi tool.";

    fn content() -> Value {
        let types: Vec<Value> = MMSI_TYPES
            .iter()
            .map(|t| {
                json!({
                    "slug": t.slug,
                    "display_name": t.display_name,
                    "country_scope": t.country_scope,
                    "mid_offset": t.mid_offset,
                })
            })
            .collect();
        Value::from(types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_published_in_precedence_order() {
        let content = MmsiTypesResource::content();
        let slugs: Vec<_> = content
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs.len(), 20);
        assert_eq!(slugs.first(), Some(&"us_coast_guard_group_ship"));
        assert_eq!(slugs.last(), Some(&"free_form"));

        let position = |slug: &str| slugs.iter().position(|s| *s == slug).unwrap();
        assert!(position("us_federal") < position("us_ship"));
        assert!(position("ship_inmarsat_c") < position("ship"));
        assert!(position("aton_virtual") < position("aton"));
        assert_eq!(content[0]["display_name"], "US Coast Guard Group Ship Station");
    }

    #[test]
    fn test_scope_serialized_as_snake_case() {
        let content = MmsiTypesResource::content();
        let ship = content
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["slug"] == "ship")
            .unwrap();
        assert_eq!(ship["country_scope"], "non_united_states");
        assert_eq!(ship["mid_offset"], 0);
    }
}
