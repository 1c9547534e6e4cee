//! Identifier engine error types.

use thiserror::Error;

/// Errors produced while validating or generating identifiers.
///
/// The first four variants describe an identifier that is well-formed as a
/// request but fails its format or checksum; they are reported in-band as a
/// validation result. The remaining variants mean the request itself was
/// malformed and are surfaced to the caller as call-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Nothing was left after removing separators.
    #[error("Input is empty after removing separators")]
    EmptyInput,

    /// The normalized identifier has the wrong number of characters.
    #[error("Invalid length: expected {expected} characters, got {actual}")]
    WrongLength { expected: String, actual: usize },

    /// The identifier contains characters its family does not allow.
    #[error("Invalid characters: {0}")]
    InvalidCharacters(String),

    /// Format is fine but the check digit(s) do not match.
    #[error("Checksum mismatch")]
    ChecksumMismatch,

    /// The identifier family or card brand is not supported.
    #[error("Unknown identifier family or brand: {0}")]
    UnknownFamilyOrBrand(String),

    /// A generation count outside the permitted range.
    #[error("Count {count} is out of range (must be between {min} and {max})")]
    CountNotInRange { count: u64, min: u64, max: u64 },

    /// The country code is not present in the relevant table.
    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    /// The country cannot be combined with the requested identifier type.
    #[error("Country '{country}' cannot be used for {target}")]
    CountryNotApplicable { country: String, target: String },

    /// No MMSI type with the given slug exists.
    #[error("Unknown MMSI type: {0}")]
    UnknownMmsiType(String),
}

impl IdentifierError {
    /// Create a new "wrong length" error.
    pub fn wrong_length(expected: impl Into<String>, actual: usize) -> Self {
        Self::WrongLength {
            expected: expected.into(),
            actual,
        }
    }

    /// Create a new "invalid characters" error.
    pub fn invalid_characters(msg: impl Into<String>) -> Self {
        Self::InvalidCharacters(msg.into())
    }

    /// Create a new "unknown country" error.
    pub fn unknown_country(code: impl Into<String>) -> Self {
        Self::UnknownCountry(code.into())
    }

    /// Create a new "country not applicable" error.
    pub fn country_not_applicable(country: impl Into<String>, target: impl Into<String>) -> Self {
        Self::CountryNotApplicable {
            country: country.into(),
            target: target.into(),
        }
    }

    /// Whether this error describes an invalid identifier rather than a bad call.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::WrongLength { .. }
                | Self::InvalidCharacters(_)
                | Self::ChecksumMismatch
        )
    }
}
