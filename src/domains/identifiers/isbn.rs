//! ISBN-10 and ISBN-13.

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::checksum::{ChecksumKind, EAN13_WEIGHTS, ISBN10_WEIGHTS};
use super::codec::{CheckPosition, Charset, Family, IdentifierFormat, LengthRule, ValidationResult};
use super::error::IdentifierError;

pub const ISBN10_FORMAT: IdentifierFormat = IdentifierFormat {
    family: Family::Isbn10,
    length: LengthRule::Exact(10),
    check_position: CheckPosition::Last,
    checksum: Some(ChecksumKind::WeightedMod11 {
        weights: &ISBN10_WEIGHTS,
        allow_x: true,
    }),
    charset: Charset::DigitsPlusX,
};

pub const ISBN13_FORMAT: IdentifierFormat = IdentifierFormat {
    family: Family::Isbn13,
    length: LengthRule::Exact(13),
    check_position: CheckPosition::Last,
    checksum: Some(ChecksumKind::WeightedMod10(&EAN13_WEIGHTS)),
    charset: Charset::Digits,
};

/// Which ISBN flavour to validate or generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IsbnFormat {
    Isbn10,
    Isbn13,
    /// Detect by length when validating; ISBN-13 when generating.
    #[default]
    Auto,
}

impl IsbnFormat {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Isbn10 => "isbn10",
            Self::Isbn13 => "isbn13",
            Self::Auto => "auto",
        }
    }
}

/// Validate an ISBN in the requested format.
pub fn validate(raw: &str, format: IsbnFormat) -> ValidationResult {
    let outcome = match format {
        IsbnFormat::Isbn10 => ISBN10_FORMAT.check(raw).map(|n| (n, IsbnFormat::Isbn10)),
        IsbnFormat::Isbn13 => ISBN13_FORMAT.check(raw).map(|n| (n, IsbnFormat::Isbn13)),
        IsbnFormat::Auto => detect(raw),
    };

    match outcome {
        Ok((normalized, detected)) => {
            let mut metadata = Map::new();
            metadata.insert("format".to_string(), Value::from(detected.slug()));
            if detected == IsbnFormat::Isbn13 {
                let bookland = normalized.starts_with("978") || normalized.starts_with("979");
                metadata.insert("bookland".to_string(), Value::from(bookland));
            }
            ValidationResult::valid(normalized, metadata)
        }
        Err(e) => ValidationResult::invalid(e),
    }
}

fn detect(raw: &str) -> Result<(String, IsbnFormat), IdentifierError> {
    let normalized = ISBN10_FORMAT.normalize(raw);
    match normalized.chars().count() {
        0 => Err(IdentifierError::EmptyInput),
        10 => ISBN10_FORMAT
            .check_normalized(&normalized)
            .map(|_| (normalized, IsbnFormat::Isbn10)),
        13 => ISBN13_FORMAT
            .check_normalized(&normalized)
            .map(|_| (normalized, IsbnFormat::Isbn13)),
        other => Err(IdentifierError::wrong_length("10 or 13", other)),
    }
}

/// Generate an ISBN. ISBN-13s always carry a 978 or 979 prefix.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, format: IsbnFormat) -> String {
    match format {
        IsbnFormat::Isbn10 => ISBN10_FORMAT.generate_from_prefix(rng, "", 10),
        IsbnFormat::Isbn13 | IsbnFormat::Auto => {
            let prefix = if rng.gen_bool(0.5) { "978" } else { "979" };
            ISBN13_FORMAT.generate_from_prefix(rng, prefix, 13)
        }
    }
}
