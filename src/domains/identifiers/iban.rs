//! International Bank Account Numbers (ISO 13616, MOD-97).

use rand::Rng;
use serde_json::{Map, Value};

use super::checksum::ChecksumKind;
use super::codec::{
    CheckPosition, Charset, Family, IdentifierFormat, LengthRule, ValidationResult,
    random_alphanumeric,
};
use super::countries::{IBAN_COUNTRIES, IbanCountry, iban_country};
use super::error::IdentifierError;

pub const IBAN_FORMAT: IdentifierFormat = IdentifierFormat {
    family: Family::Iban,
    length: LengthRule::Range(15, 34),
    check_position: CheckPosition::AfterPrefix(2),
    checksum: Some(ChecksumKind::Mod97),
    charset: Charset::AlphaNumericWithTwoLetterPrefix,
};

/// Validate an IBAN.
///
/// When the country code is in the registry the IBAN must also have that
/// country's exact length; unknown countries only get the generic 15-34
/// bound.
pub fn validate(raw: &str) -> ValidationResult {
    let normalized = IBAN_FORMAT.normalize(raw);
    let outcome = check_country_length(&normalized)
        .and_then(|()| IBAN_FORMAT.check_normalized(&normalized))
        .map(|()| normalized);

    ValidationResult::from_check(outcome, |iban| {
        let (country, rest) = iban.split_at(2);
        let (check_digits, bban) = rest.split_at(2);
        let mut metadata = Map::new();
        metadata.insert("country".to_string(), Value::from(country));
        if let Some(entry) = iban_country(country) {
            metadata.insert("country_name".to_string(), Value::from(entry.name));
        }
        metadata.insert("check_digits".to_string(), Value::from(check_digits));
        metadata.insert("bban".to_string(), Value::from(bban));
        metadata
    })
}

fn check_country_length(normalized: &str) -> Result<(), IdentifierError> {
    let len = normalized.chars().count();
    match normalized.get(..2).and_then(iban_country) {
        Some(entry) if entry.length != len => {
            Err(IdentifierError::wrong_length(entry.length.to_string(), len))
        }
        _ => Ok(()),
    }
}

/// Generate an IBAN for `country`, or for a random registered country.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    country: Option<&str>,
) -> Result<String, IdentifierError> {
    let entry = match country {
        Some(code) => iban_country(code).ok_or_else(|| IdentifierError::unknown_country(code))?,
        None => &IBAN_COUNTRIES[rng.gen_range(0..IBAN_COUNTRIES.len())],
    };
    Ok(generate_for(rng, entry))
}

/// Draw account numbers until the format can place check digits after the
/// country code.
fn generate_for<R: Rng + ?Sized>(rng: &mut R, entry: &IbanCountry) -> String {
    loop {
        let bban = random_alphanumeric(rng, entry.length - 4);
        if let Some(iban) = IBAN_FORMAT.assemble(&format!("{}{bban}", entry.iso_code)) {
            return iban;
        }
    }
}
