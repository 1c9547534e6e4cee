//! Maritime Mobile Service Identities.
//!
//! An MMSI is nine digits with no checksum. Its leading digits encode the
//! kind of station and usually a MID naming the flag state; see
//! [`types::MMSI_TYPES`] for the classification rules.

pub mod generators;
pub mod types;

use rand::RngCore;
use serde_json::{Map, Value};

pub use types::{CountryScope, MMSI_TYPES, MmsiType, classify, find_type};

use super::codec::{CheckPosition, Charset, Family, IdentifierFormat, LengthRule, ValidationResult};
use super::countries::{country_for_mid, mmsi_country};
use super::error::IdentifierError;

pub const MMSI_FORMAT: IdentifierFormat = IdentifierFormat {
    family: Family::Mmsi,
    length: LengthRule::Exact(9),
    check_position: CheckPosition::Last,
    checksum: None,
    charset: Charset::Digits,
};

/// Display name reported for well-formed MMSIs that match no type.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Validate an MMSI and classify it.
pub fn validate(raw: &str) -> ValidationResult {
    ValidationResult::from_check(MMSI_FORMAT.check(raw), describe)
}

fn describe(mmsi: &str) -> Map<String, Value> {
    let mut metadata = Map::new();
    let Some(kind) = classify(mmsi) else {
        metadata.insert("type".to_string(), Value::from(UNKNOWN_TYPE));
        return metadata;
    };
    metadata.insert("type".to_string(), Value::from(kind.display_name));
    metadata.insert("type_slug".to_string(), Value::from(kind.slug));
    if let Some(mid) = kind.mid(mmsi) {
        metadata.insert("mid".to_string(), Value::from(format!("{mid:03}")));
        if let Some(country) = country_for_mid(mid) {
            metadata.insert("country_code".to_string(), Value::from(country.iso_code));
            metadata.insert("country".to_string(), Value::from(country.name));
        }
    }
    metadata
}

/// Generate an MMSI.
///
/// With a `type_name` the result classifies as that type; without one it is
/// a MID followed by six random digits. `country` restricts the MID to that
/// flag state where the type carries one.
pub fn generate(
    rng: &mut dyn RngCore,
    type_name: Option<&str>,
    country: Option<&str>,
) -> Result<String, IdentifierError> {
    let country = country
        .map(|code| mmsi_country(code).ok_or_else(|| IdentifierError::unknown_country(code)))
        .transpose()?;

    match type_name {
        Some(name) => {
            let kind =
                find_type(name).ok_or_else(|| IdentifierError::UnknownMmsiType(name.to_string()))?;
            kind.generate(rng, country)
        }
        None => generators::any(rng, country),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_validate_classifies() {
        let result = validate("232 123 456");
        assert!(result.valid);
        assert_eq!(result.normalized.as_deref(), Some("232123456"));
        assert_eq!(result.metadata["type"], "Ship Station");
        assert_eq!(result.metadata["type_slug"], "ship");
        assert_eq!(result.metadata["mid"], "232");
        assert_eq!(result.metadata["country_code"], "GB");
        assert_eq!(result.metadata["country"], "United Kingdom");
    }

    #[test]
    fn test_validate_precedence() {
        assert_eq!(
            validate("036699999").metadata["type"],
            "US Coast Guard Group Ship Station"
        );
        assert_eq!(validate("366912345").metadata["type"], "US Federal MMSI");
    }

    #[test]
    fn test_validate_unknown_type_is_still_valid() {
        let result = validate("100000000");
        assert!(result.valid);
        assert_eq!(result.metadata["type"], UNKNOWN_TYPE);
        assert!(result.metadata.get("type_slug").is_none());
    }

    #[test]
    fn test_validate_structure_errors() {
        assert!(matches!(
            validate("12345").error,
            Some(IdentifierError::WrongLength { actual: 5, .. })
        ));
        assert!(matches!(
            validate("12345678A").error,
            Some(IdentifierError::InvalidCharacters(_))
        ));
        assert_eq!(validate("").error, Some(IdentifierError::EmptyInput));
    }

    #[test]
    fn test_every_type_round_trips_without_country() {
        let mut rng = StdRng::seed_from_u64(31);
        for kind in MMSI_TYPES {
            for _ in 0..50 {
                let mmsi = generate(&mut rng, Some(kind.slug), None).unwrap();
                assert_eq!(mmsi.len(), 9, "{mmsi}");
                assert_eq!(
                    classify(&mmsi).map(|t| t.slug),
                    Some(kind.slug),
                    "{mmsi} generated for {}",
                    kind.slug
                );
            }
        }
    }

    #[test]
    fn test_every_type_round_trips_with_country() {
        let mut rng = StdRng::seed_from_u64(32);
        for kind in MMSI_TYPES {
            let codes: &[&str] = match kind.country_scope {
                CountryScope::UnitedStatesOnly => &["US"],
                CountryScope::NonUnitedStates => &["GB", "PA", "NO"],
                CountryScope::Any | CountryScope::Ignored => &["US", "GB", "PA"],
            };
            for code in codes {
                for _ in 0..50 {
                    let mmsi = generate(&mut rng, Some(kind.slug), Some(code)).unwrap();
                    assert_eq!(classify(&mmsi).map(|t| t.slug), Some(kind.slug), "{mmsi}");
                    if kind.country_scope == CountryScope::Any {
                        let mid = kind.mid(&mmsi).unwrap();
                        let owner = country_for_mid(mid).map(|c| c.iso_code);
                        assert_eq!(owner, Some(*code), "{mmsi}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_untyped_generation_uses_country_mid() {
        let mut rng = StdRng::seed_from_u64(33);
        for _ in 0..50 {
            let mmsi = generate(&mut rng, None, Some("de")).unwrap();
            assert!(mmsi.starts_with("211") || mmsi.starts_with("218"), "{mmsi}");
            assert!(validate(&mmsi).valid);
        }
    }

    #[test]
    fn test_generation_errors() {
        let mut rng = StdRng::seed_from_u64(34);
        assert_eq!(
            generate(&mut rng, Some("submarine"), None),
            Err(IdentifierError::UnknownMmsiType("submarine".to_string()))
        );
        assert_eq!(
            generate(&mut rng, None, Some("XX")),
            Err(IdentifierError::UnknownCountry("XX".to_string()))
        );
        assert!(matches!(
            generate(&mut rng, Some("us_ship"), Some("GB")),
            Err(IdentifierError::CountryNotApplicable { .. })
        ));
        assert!(matches!(
            generate(&mut rng, Some("ship"), Some("US")),
            Err(IdentifierError::CountryNotApplicable { .. })
        ));
    }
}
