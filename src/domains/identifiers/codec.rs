//! Shared codec skeleton.
//!
//! Every family is described by an [`IdentifierFormat`]; the format drives
//! normalization, length and charset checks, checksum verification and
//! check-character placement, so family modules only add prefix selection
//! and metadata on top.

use rand::Rng;
use serde_json::{Map, Value};

use super::checksum::ChecksumKind;
use super::error::IdentifierError;

/// Supported identifier families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    CreditCard,
    Isbn10,
    Isbn13,
    Ean13,
    Imo,
    Iban,
    Mmsi,
}

impl Family {
    /// Human-readable family name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit card number",
            Self::Isbn10 => "ISBN-10",
            Self::Isbn13 => "ISBN-13",
            Self::Ean13 => "EAN-13",
            Self::Imo => "IMO number",
            Self::Iban => "IBAN",
            Self::Mmsi => "MMSI",
        }
    }

    /// Key under which a validated identifier is reported.
    pub fn id_field(&self) -> &'static str {
        match self {
            Self::CreditCard => "card",
            Self::Isbn10 | Self::Isbn13 => "isbn",
            Self::Ean13 => "ean",
            Self::Imo => "imo",
            Self::Iban => "iban",
            Self::Mmsi => "mmsi",
        }
    }
}

/// Characters a family accepts after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Digits,
    /// Digits, with `X` permitted as the final character only.
    DigitsPlusX,
    /// Two letters, two check digits, then letters or digits.
    AlphaNumericWithTwoLetterPrefix,
}

/// Accepted length of a normalized identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    Exact(usize),
    Range(usize, usize),
}

impl LengthRule {
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            Self::Exact(n) => len == n,
            Self::Range(min, max) => (min..=max).contains(&len),
        }
    }

    fn describe(&self) -> String {
        match *self {
            Self::Exact(n) => n.to_string(),
            Self::Range(min, max) => format!("{min}-{max}"),
        }
    }
}

/// Where the check characters sit in the finished identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckPosition {
    Last,
    /// Immediately after a fixed-length prefix (IBAN country code).
    AfterPrefix(usize),
}

/// Static description of an identifier family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierFormat {
    pub family: Family,
    pub length: LengthRule,
    pub check_position: CheckPosition,
    /// `None` for families without a checksum (MMSI).
    pub checksum: Option<ChecksumKind>,
    pub charset: Charset,
}

impl IdentifierFormat {
    /// Strip separators and case-fold families that carry letters.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = raw
            .chars()
            .filter(|c| !is_separator(*c))
            .collect::<String>();
        match self.charset {
            Charset::Digits => cleaned,
            Charset::DigitsPlusX | Charset::AlphaNumericWithTwoLetterPrefix => {
                cleaned.to_ascii_uppercase()
            }
        }
    }

    /// Run the full check pipeline and return the normalized identifier.
    pub fn check(&self, raw: &str) -> Result<String, IdentifierError> {
        let normalized = self.normalize(raw);
        self.check_normalized(&normalized)?;
        Ok(normalized)
    }

    /// Length, charset and checksum checks on an already normalized value.
    pub fn check_normalized(&self, normalized: &str) -> Result<(), IdentifierError> {
        if normalized.is_empty() {
            return Err(IdentifierError::EmptyInput);
        }
        // Byte length is only meaningful once the charset is known to be ASCII,
        // so count characters here.
        let len = normalized.chars().count();
        if !self.length.accepts(len) {
            return Err(IdentifierError::wrong_length(self.length.describe(), len));
        }
        self.check_charset(normalized)?;
        match self.checksum {
            Some(kind) if !kind.verify(normalized) => Err(IdentifierError::ChecksumMismatch),
            _ => Ok(()),
        }
    }

    fn check_charset(&self, normalized: &str) -> Result<(), IdentifierError> {
        let bytes = normalized.as_bytes();
        let family = self.family.display_name();
        match self.charset {
            Charset::Digits => {
                if !bytes.iter().all(u8::is_ascii_digit) {
                    return Err(IdentifierError::invalid_characters(format!(
                        "{family} must contain only digits"
                    )));
                }
            }
            Charset::DigitsPlusX => {
                let (body, last) = bytes.split_at(bytes.len() - 1);
                if !body.iter().all(u8::is_ascii_digit)
                    || !(last[0].is_ascii_digit() || last[0] == b'X')
                {
                    return Err(IdentifierError::invalid_characters(format!(
                        "{family} must contain only digits, with X allowed as the check character"
                    )));
                }
            }
            Charset::AlphaNumericWithTwoLetterPrefix => {
                if !bytes.iter().take(2).all(u8::is_ascii_uppercase) {
                    return Err(IdentifierError::invalid_characters(format!(
                        "{family} must start with a two-letter country code"
                    )));
                }
                if !bytes.iter().skip(2).take(2).all(u8::is_ascii_digit) {
                    return Err(IdentifierError::invalid_characters(format!(
                        "{family} check digits (positions 3-4) must be numeric"
                    )));
                }
                if !bytes.iter().skip(4).all(u8::is_ascii_alphanumeric) {
                    return Err(IdentifierError::invalid_characters(format!(
                        "{family} may only contain letters and digits"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Insert check characters into `payload`.
    ///
    /// Returns `None` when the checksum cannot represent a check value for
    /// this payload and the caller has to draw a new one.
    pub fn assemble(&self, payload: &str) -> Option<String> {
        let Some(kind) = self.checksum else {
            return Some(payload.to_string());
        };
        let check = kind.check_characters(payload)?;
        Some(match self.check_position {
            CheckPosition::Last => format!("{payload}{check}"),
            CheckPosition::AfterPrefix(n) => {
                let (prefix, rest) = payload.split_at(n.min(payload.len()));
                format!("{prefix}{check}{rest}")
            }
        })
    }

    /// Fill `prefix` with random digits up to `total_len - 1` and append the
    /// check digit.
    pub fn generate_from_prefix<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        prefix: &str,
        total_len: usize,
    ) -> String {
        let body_len = total_len.saturating_sub(prefix.len() + 1);
        loop {
            let payload = format!("{prefix}{}", random_digits(rng, body_len));
            if let Some(code) = self.assemble(&payload) {
                return code;
            }
        }
    }
}

/// Separators stripped during normalization.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '\u{2010}'..='\u{2015}' | '\u{2212}')
}

/// Outcome of validating one identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub normalized: Option<String>,
    pub error: Option<IdentifierError>,
    /// Family-specific details (card brand, IBAN country, MMSI type...).
    pub metadata: Map<String, Value>,
}

impl ValidationResult {
    /// A successful validation.
    pub fn valid(normalized: impl Into<String>, metadata: Map<String, Value>) -> Self {
        Self {
            valid: true,
            normalized: Some(normalized.into()),
            error: None,
            metadata,
        }
    }

    /// A failed validation.
    pub fn invalid(error: IdentifierError) -> Self {
        Self {
            valid: false,
            normalized: None,
            error: Some(error),
            metadata: Map::new(),
        }
    }

    /// Build a result from a check outcome, attaching metadata on success.
    pub fn from_check(
        outcome: Result<String, IdentifierError>,
        metadata: impl FnOnce(&str) -> Map<String, Value>,
    ) -> Self {
        match outcome {
            Ok(normalized) => {
                let metadata = metadata(&normalized);
                Self::valid(normalized, metadata)
            }
            Err(e) => Self::invalid(e),
        }
    }
}

/// `n` uniformly random decimal digits.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    (0..n)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// One random digit from an inclusive range.
pub fn random_digit_in<R: Rng + ?Sized>(rng: &mut R, range: std::ops::RangeInclusive<u8>) -> char {
    char::from(b'0' + rng.gen_range(range))
}

/// `n` uniformly random uppercase letters or digits.
pub fn random_alphanumeric<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    (0..n)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::identifiers::checksum::{EAN13_WEIGHTS, ISBN10_WEIGHTS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EAN: IdentifierFormat = IdentifierFormat {
        family: Family::Ean13,
        length: LengthRule::Exact(13),
        check_position: CheckPosition::Last,
        checksum: Some(ChecksumKind::WeightedMod10(&EAN13_WEIGHTS)),
        charset: Charset::Digits,
    };

    const ISBN10: IdentifierFormat = IdentifierFormat {
        family: Family::Isbn10,
        length: LengthRule::Exact(10),
        check_position: CheckPosition::Last,
        checksum: Some(ChecksumKind::WeightedMod11 {
            weights: &ISBN10_WEIGHTS,
            allow_x: true,
        }),
        charset: Charset::DigitsPlusX,
    };

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(EAN.normalize(" 123-456 789\u{2014}0128 "), "1234567890128");
        assert_eq!(ISBN10.normalize("0-306-40615-x"), "030640615X");
    }

    #[test]
    fn test_check_pipeline_errors() {
        assert_eq!(EAN.check(" - "), Err(IdentifierError::EmptyInput));
        assert!(matches!(
            EAN.check("123"),
            Err(IdentifierError::WrongLength { actual: 3, .. })
        ));
        assert!(matches!(
            EAN.check("12345678901A8"),
            Err(IdentifierError::InvalidCharacters(_))
        ));
        assert_eq!(EAN.check("1234567890123"), Err(IdentifierError::ChecksumMismatch));
        assert_eq!(EAN.check("1234567890128"), Ok("1234567890128".to_string()));
    }

    #[test]
    fn test_x_only_allowed_last() {
        assert!(matches!(
            ISBN10.check("10000000X1"),
            Err(IdentifierError::InvalidCharacters(_))
        ));
        assert!(ISBN10.check("100000001X").is_ok());
    }

    #[test]
    fn test_generate_from_prefix_keeps_prefix_and_length() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let code = EAN.generate_from_prefix(&mut rng, "400", 13);
            assert!(code.starts_with("400"));
            assert_eq!(code.len(), 13);
            assert!(EAN.check(&code).is_ok());
        }
    }

    #[test]
    fn test_validation_result_from_check() {
        let ok = ValidationResult::from_check(Ok("42".to_string()), |n| {
            let mut m = Map::new();
            m.insert("length".to_string(), Value::from(n.len()));
            m
        });
        assert!(ok.valid);
        assert_eq!(ok.metadata["length"], 2);

        let bad = ValidationResult::from_check(Err(IdentifierError::ChecksumMismatch), |_| {
            Map::new()
        });
        assert!(!bad.valid);
        assert_eq!(bad.error, Some(IdentifierError::ChecksumMismatch));
        assert!(bad.normalized.is_none());
    }

    #[test]
    fn test_random_helpers_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(random_digits(&mut rng, 12).bytes().all(|b| b.is_ascii_digit()));
        let alnum = random_alphanumeric(&mut rng, 30);
        assert_eq!(alnum.len(), 30);
        assert!(alnum.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
        let d = random_digit_in(&mut rng, 1..=9);
        assert!(('1'..='9').contains(&d));
    }
}
