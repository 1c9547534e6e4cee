//! The ordered MMSI type table.
//!
//! Every entry pairs a predicate over a normalized 9-digit MMSI with a
//! generator that produces members of that type. Classification walks the
//! table top to bottom and stops at the first match, so specific types such
//! as the Coast Guard constants must stay above the broad ranges that
//! numerically contain them. The predicates are also written to exclude one
//! another; the tests check both properties.

use rand::RngCore;
use serde::Serialize;

use super::generators;
use crate::domains::identifiers::countries::{MmsiCountry, US_MIDS};
use crate::domains::identifiers::error::IdentifierError;

pub const US_COAST_GUARD_GROUP_SHIP: &str = "036699999";
pub const US_COAST_GUARD_GROUP_COAST: &str = "003669999";
pub const US_FEDERAL_PREFIX: &str = "3669";

/// Produces an MMSI of one type, optionally tied to a flag state.
pub type Generator =
    fn(&mut dyn RngCore, Option<&'static MmsiCountry>) -> Result<String, IdentifierError>;

/// How a type uses the requested country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryScope {
    /// Embeds a MID from any flag state.
    Any,
    /// Only valid with a United States MID.
    UnitedStatesOnly,
    /// Only valid with a non-US MID.
    NonUnitedStates,
    /// Carries no MID; the country is ignored.
    Ignored,
}

#[derive(Clone, Copy)]
pub struct MmsiType {
    pub slug: &'static str,
    pub display_name: &'static str,
    /// Position of the embedded MID, if the type carries one.
    pub mid_offset: Option<usize>,
    pub country_scope: CountryScope,
    predicate: fn(&str) -> bool,
    generator: Generator,
}

impl MmsiType {
    pub fn matches(&self, mmsi: &str) -> bool {
        (self.predicate)(mmsi)
    }

    pub fn generate(
        &self,
        rng: &mut dyn RngCore,
        country: Option<&'static MmsiCountry>,
    ) -> Result<String, IdentifierError> {
        (self.generator)(rng, country)
    }

    /// The MID embedded in `mmsi`, if this type carries one.
    pub fn mid(&self, mmsi: &str) -> Option<u16> {
        let offset = self.mid_offset?;
        mmsi.get(offset..offset + 3)?.parse().ok()
    }
}

impl std::fmt::Debug for MmsiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MmsiType")
            .field("slug", &self.slug)
            .field("display_name", &self.display_name)
            .field("mid_offset", &self.mid_offset)
            .field("country_scope", &self.country_scope)
            .finish()
    }
}

pub static MMSI_TYPES: &[MmsiType] = &[
    MmsiType {
        slug: "us_coast_guard_group_ship",
        display_name: "US Coast Guard Group Ship Station",
        mid_offset: Some(1),
        country_scope: CountryScope::UnitedStatesOnly,
        predicate: |s| s == US_COAST_GUARD_GROUP_SHIP,
        generator: generators::us_coast_guard_group_ship,
    },
    MmsiType {
        slug: "us_coast_guard_group_coast",
        display_name: "US Coast Guard Group Coast Station",
        mid_offset: Some(2),
        country_scope: CountryScope::UnitedStatesOnly,
        predicate: |s| s == US_COAST_GUARD_GROUP_COAST,
        generator: generators::us_coast_guard_group_coast,
    },
    MmsiType {
        slug: "us_federal",
        display_name: "US Federal MMSI",
        mid_offset: Some(0),
        country_scope: CountryScope::UnitedStatesOnly,
        predicate: is_us_federal,
        generator: generators::us_federal,
    },
    MmsiType {
        slug: "ship_inmarsat_bcm",
        display_name: "Ship Station (Inmarsat B/C/M)",
        mid_offset: Some(0),
        country_scope: CountryScope::Any,
        predicate: |s| is_ship_band(s) && !is_us_federal(s) && s.ends_with("000"),
        generator: generators::ship_inmarsat_bcm,
    },
    MmsiType {
        slug: "ship_inmarsat_c",
        display_name: "Ship Station (Inmarsat C)",
        mid_offset: Some(0),
        country_scope: CountryScope::Any,
        predicate: |s| {
            is_ship_band(s) && !is_us_federal(s) && s.ends_with('0') && !s.ends_with("000")
        },
        generator: generators::ship_inmarsat_c,
    },
    MmsiType {
        slug: "us_ship",
        display_name: "US Ship Station",
        mid_offset: Some(0),
        country_scope: CountryScope::UnitedStatesOnly,
        predicate: |s| has_us_mid(s) && !is_us_federal(s) && !s.ends_with('0'),
        generator: generators::us_ship,
    },
    MmsiType {
        slug: "ship",
        display_name: "Ship Station",
        mid_offset: Some(0),
        country_scope: CountryScope::NonUnitedStates,
        predicate: |s| is_ship_band(s) && !has_us_mid(s) && !s.ends_with('0'),
        generator: generators::ship,
    },
    MmsiType {
        slug: "group_ship",
        display_name: "Group Ship Station",
        mid_offset: Some(1),
        country_scope: CountryScope::Any,
        predicate: |s| {
            s.starts_with('0') && digit_in_ship_band(s, 1) && s != US_COAST_GUARD_GROUP_SHIP
        },
        generator: generators::group_ship,
    },
    MmsiType {
        slug: "group_coast",
        display_name: "Group Coast Station",
        mid_offset: Some(2),
        country_scope: CountryScope::Any,
        predicate: |s| s.starts_with("00") && digit_in_ship_band(s, 2) && s.ends_with("00"),
        generator: generators::group_coast,
    },
    MmsiType {
        slug: "coast",
        display_name: "Coast Station",
        mid_offset: Some(2),
        country_scope: CountryScope::Any,
        predicate: |s| {
            s.starts_with("00")
                && digit_in_ship_band(s, 2)
                && !s.ends_with("00")
                && s != US_COAST_GUARD_GROUP_COAST
        },
        generator: generators::coast,
    },
    MmsiType {
        slug: "sar_aircraft",
        display_name: "SAR Aircraft",
        mid_offset: Some(3),
        country_scope: CountryScope::Any,
        predicate: |s| s.starts_with("111"),
        generator: generators::sar_aircraft,
    },
    MmsiType {
        slug: "handheld_vhf",
        display_name: "Handheld VHF Transceiver",
        mid_offset: Some(1),
        country_scope: CountryScope::Any,
        predicate: |s| s.starts_with('8'),
        generator: generators::handheld_vhf,
    },
    MmsiType {
        slug: "ais_sart",
        display_name: "AIS-SART",
        mid_offset: None,
        country_scope: CountryScope::Ignored,
        predicate: |s| s.starts_with("970"),
        generator: generators::ais_sart,
    },
    MmsiType {
        slug: "man_overboard",
        display_name: "Man Overboard Device",
        mid_offset: None,
        country_scope: CountryScope::Ignored,
        predicate: |s| s.starts_with("972"),
        generator: generators::man_overboard,
    },
    MmsiType {
        slug: "epirb_ais",
        display_name: "EPIRB-AIS",
        mid_offset: None,
        country_scope: CountryScope::Ignored,
        predicate: |s| s.starts_with("974"),
        generator: generators::epirb_ais,
    },
    MmsiType {
        slug: "craft_associated",
        display_name: "Craft Associated with Parent Ship",
        mid_offset: Some(2),
        country_scope: CountryScope::Any,
        predicate: |s| s.starts_with("98"),
        generator: generators::craft_associated,
    },
    MmsiType {
        slug: "aton_physical",
        display_name: "Physical AIS AtoN",
        mid_offset: Some(2),
        country_scope: CountryScope::Any,
        predicate: |s| s.starts_with("99") && s.as_bytes().get(5) == Some(&b'1'),
        generator: generators::aton_physical,
    },
    MmsiType {
        slug: "aton_virtual",
        display_name: "Virtual AIS AtoN",
        mid_offset: Some(2),
        country_scope: CountryScope::Any,
        predicate: |s| s.starts_with("99") && s.as_bytes().get(5) == Some(&b'6'),
        generator: generators::aton_virtual,
    },
    MmsiType {
        slug: "aton",
        display_name: "Navigational Aid (AtoN)",
        mid_offset: Some(2),
        country_scope: CountryScope::Any,
        predicate: |s| s.starts_with("99") && !matches!(s.as_bytes().get(5), Some(b'1' | b'6')),
        generator: generators::aton,
    },
    MmsiType {
        slug: "free_form",
        display_name: "Free-form Device",
        mid_offset: None,
        country_scope: CountryScope::Ignored,
        predicate: |s| s.starts_with('9') && !matches!(s.as_bytes().get(1), Some(b'7'..=b'9')),
        generator: generators::free_form,
    },
];

fn digit_in_ship_band(s: &str, index: usize) -> bool {
    matches!(s.as_bytes().get(index), Some(b'2'..=b'7'))
}

fn is_ship_band(s: &str) -> bool {
    digit_in_ship_band(s, 0)
}

fn is_us_federal(s: &str) -> bool {
    s.starts_with(US_FEDERAL_PREFIX)
}

fn has_us_mid(s: &str) -> bool {
    s.get(..3)
        .and_then(|mid| mid.parse::<u16>().ok())
        .is_some_and(|mid| US_MIDS.contains(&mid))
}

/// First type whose predicate accepts `mmsi`.
pub fn classify(mmsi: &str) -> Option<&'static MmsiType> {
    MMSI_TYPES.iter().find(|t| t.matches(mmsi))
}

/// Look up a type by slug or display name.
///
/// Matching ignores case and treats `-` and spaces like `_`.
pub fn find_type(name: &str) -> Option<&'static MmsiType> {
    let wanted = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    MMSI_TYPES
        .iter()
        .find(|t| t.slug == wanted || t.display_name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn name(mmsi: &str) -> &'static str {
        classify(mmsi).map_or("Unknown", |t| t.display_name)
    }

    #[test]
    fn test_precedence_fixed_vectors() {
        assert_eq!(name("036699999"), "US Coast Guard Group Ship Station");
        assert_eq!(name("003669999"), "US Coast Guard Group Coast Station");
        assert_eq!(name("366912345"), "US Federal MMSI");
        assert_eq!(name("366123457"), "US Ship Station");
        assert_eq!(name("366123000"), "Ship Station (Inmarsat B/C/M)");
        assert_eq!(name("232123450"), "Ship Station (Inmarsat C)");
        assert_eq!(name("232123456"), "Ship Station");
        assert_eq!(name("036612345"), "Group Ship Station");
        assert_eq!(name("002321200"), "Group Coast Station");
        assert_eq!(name("002321234"), "Coast Station");
        assert_eq!(name("111232123"), "SAR Aircraft");
        assert_eq!(name("823212345"), "Handheld VHF Transceiver");
        assert_eq!(name("970123456"), "AIS-SART");
        assert_eq!(name("972123456"), "Man Overboard Device");
        assert_eq!(name("974123456"), "EPIRB-AIS");
        assert_eq!(name("982321234"), "Craft Associated with Parent Ship");
        assert_eq!(name("992321123"), "Physical AIS AtoN");
        assert_eq!(name("992326123"), "Virtual AIS AtoN");
        assert_eq!(name("992323123"), "Navigational Aid (AtoN)");
        assert_eq!(name("912345678"), "Free-form Device");
    }

    #[test]
    fn test_unclassifiable_values() {
        assert_eq!(name("100000000"), "Unknown");
        assert_eq!(name("971000000"), "Unknown");
        assert_eq!(name("001000000"), "Unknown");
        assert_eq!(name("012345678"), "Unknown");
    }

    #[test]
    fn test_predicates_are_mutually_exclusive() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut samples: Vec<String> = (0..20_000)
            .map(|_| format!("{:09}", rng.gen_range(0..1_000_000_000u32)))
            .collect();
        samples.push(US_COAST_GUARD_GROUP_SHIP.to_string());
        samples.push(US_COAST_GUARD_GROUP_COAST.to_string());
        for t in MMSI_TYPES {
            for _ in 0..20 {
                if let Ok(mmsi) = t.generate(&mut rng, None) {
                    samples.push(mmsi);
                }
            }
        }

        for mmsi in &samples {
            let hits: Vec<_> = MMSI_TYPES
                .iter()
                .filter(|t| t.matches(mmsi))
                .map(|t| t.slug)
                .collect();
            assert!(hits.len() <= 1, "{mmsi} matches {hits:?}");
        }
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = MMSI_TYPES.iter().map(|t| t.slug).collect();
        assert_eq!(slugs.len(), MMSI_TYPES.len());
        assert_eq!(MMSI_TYPES.len(), 20);
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<_> = MMSI_TYPES.iter().map(|t| t.slug).collect();
        assert_eq!(
            order,
            [
                "us_coast_guard_group_ship",
                "us_coast_guard_group_coast",
                "us_federal",
                "ship_inmarsat_bcm",
                "ship_inmarsat_c",
                "us_ship",
                "ship",
                "group_ship",
                "group_coast",
                "coast",
                "sar_aircraft",
                "handheld_vhf",
                "ais_sart",
                "man_overboard",
                "epirb_ais",
                "craft_associated",
                "aton_physical",
                "aton_virtual",
                "aton",
                "free_form",
            ]
        );
    }

    #[test]
    fn test_find_type() {
        assert_eq!(find_type("ship").map(|t| t.slug), Some("ship"));
        assert_eq!(find_type("AIS-SART").map(|t| t.slug), Some("ais_sart"));
        assert_eq!(find_type("Group-Coast").map(|t| t.slug), Some("group_coast"));
        assert_eq!(
            find_type("US Federal MMSI").map(|t| t.slug),
            Some("us_federal")
        );
        assert!(find_type("submarine").is_none());
    }

    #[test]
    fn test_mid_extraction() {
        let ship = find_type("ship").unwrap();
        assert_eq!(ship.mid("232123456"), Some(232));
        let sar = find_type("sar_aircraft").unwrap();
        assert_eq!(sar.mid("111232123"), Some(232));
        let sart = find_type("ais_sart").unwrap();
        assert_eq!(sart.mid("970123456"), None);
    }
}
