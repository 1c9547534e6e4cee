//! Payment card numbers (Luhn).

use rand::Rng;
use rand::seq::SliceRandom;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use super::checksum::ChecksumKind;
use super::codec::{CheckPosition, Charset, Family, IdentifierFormat, LengthRule, ValidationResult};
use super::error::IdentifierError;

pub const CARD_FORMAT: IdentifierFormat = IdentifierFormat {
    family: Family::CreditCard,
    length: LengthRule::Range(12, 19),
    check_position: CheckPosition::Last,
    checksum: Some(ChecksumKind::Luhn),
    charset: Charset::Digits,
};

/// Card brands recognized by prefix and supported for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Diners,
    Jcb,
}

impl CardBrand {
    pub const ALL: [CardBrand; 6] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::Diners,
        Self::Jcb,
    ];

    /// Wire name, as used by the `card-type` parameter.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Diners => "diners",
            Self::Jcb => "jcb",
        }
    }

    /// Length of generated numbers for this brand.
    pub fn total_length(&self) -> usize {
        match self {
            Self::Amex => 15,
            Self::Diners => 14,
            Self::Visa | Self::Mastercard | Self::Discover | Self::Jcb => 16,
        }
    }

    /// Pick an issuer prefix for generation.
    pub fn random_prefix<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            Self::Visa => "4".to_string(),
            Self::Mastercard => rng.gen_range(51..=55u32).to_string(),
            Self::Amex => ["34", "37"][rng.gen_range(0..2)].to_string(),
            Self::Discover => "6011".to_string(),
            Self::Diners => {
                const PREFIXES: [&str; 8] = ["300", "301", "302", "303", "304", "305", "36", "38"];
                PREFIXES[rng.gen_range(0..PREFIXES.len())].to_string()
            }
            // Narrower than "35" so that generated numbers sniff back as JCB.
            Self::Jcb => rng.gen_range(3528..=3589u32).to_string(),
        }
    }

    /// Detect the brand from the leading digits of a card number.
    pub fn detect(digits: &str) -> Option<Self> {
        let p2 = leading_value(digits, 2);
        let p3 = leading_value(digits, 3);
        let p4 = leading_value(digits, 4);

        if digits.starts_with('4') {
            Some(Self::Visa)
        } else if p2.is_some_and(|p| (51..=55).contains(&p))
            || p4.is_some_and(|p| (2221..=2720).contains(&p))
        {
            Some(Self::Mastercard)
        } else if matches!(p2, Some(34 | 37)) {
            Some(Self::Amex)
        } else if p4 == Some(6011) || p2 == Some(65) || p3.is_some_and(|p| (644..=649).contains(&p))
        {
            Some(Self::Discover)
        } else if p3.is_some_and(|p| (300..=305).contains(&p)) || matches!(p2, Some(36 | 38)) {
            Some(Self::Diners)
        } else if p4.is_some_and(|p| (3528..=3589).contains(&p)) {
            Some(Self::Jcb)
        } else {
            None
        }
    }
}

impl FromStr for CardBrand {
    type Err = IdentifierError;

    /// Parse a brand name, ignoring case and separators
    /// (`"Master Card"`, `"american-express"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "amex" | "americanexpress" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            "diners" | "dinersclub" => Ok(Self::Diners),
            "jcb" => Ok(Self::Jcb),
            _ => Err(IdentifierError::UnknownFamilyOrBrand(s.to_string())),
        }
    }
}

fn leading_value(digits: &str, n: usize) -> Option<u32> {
    digits.get(..n)?.parse().ok()
}

/// Validate a card number and report its brand.
pub fn validate(raw: &str) -> ValidationResult {
    ValidationResult::from_check(CARD_FORMAT.check(raw), |number| {
        let brand = CardBrand::detect(number).map_or("unknown", |b| b.slug());
        let mut metadata = Map::new();
        metadata.insert("card_type".to_string(), Value::from(brand));
        metadata
    })
}

/// Generate a Luhn-valid card number, for `brand` or a random one.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, brand: Option<CardBrand>) -> String {
    let brand = match brand {
        Some(brand) => brand,
        None => *CardBrand::ALL.choose(rng).unwrap_or(&CardBrand::Visa),
    };
    let prefix = brand.random_prefix(rng);
    CARD_FORMAT.generate_from_prefix(rng, &prefix, brand.total_length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_validate_known_visa() {
        let result = validate("4532015112830366");
        assert!(result.valid);
        assert_eq!(result.metadata["card_type"], "visa");
    }

    #[test]
    fn test_single_digit_corruption_is_invalid() {
        let result = validate("4532015112830367");
        assert!(!result.valid);
        assert_eq!(
            result.error,
            Some(IdentifierError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let spaced = validate(" 4 5 3 2-0151-1283-0366");
        let plain = validate("4532015112830366");
        assert_eq!(spaced, plain);
    }

    #[test]
    fn test_parse_brand_names() {
        assert_eq!("visa".parse::<CardBrand>(), Ok(CardBrand::Visa));
        assert_eq!("Master Card".parse::<CardBrand>(), Ok(CardBrand::Mastercard));
        assert_eq!("american-express".parse::<CardBrand>(), Ok(CardBrand::Amex));
        assert_eq!("Diners_Club".parse::<CardBrand>(), Ok(CardBrand::Diners));
        for brand in CardBrand::ALL {
            assert_eq!(brand.slug().parse::<CardBrand>(), Ok(brand));
        }
        assert_eq!(
            "maestro".parse::<CardBrand>(),
            Err(IdentifierError::UnknownFamilyOrBrand("maestro".to_string()))
        );
    }

    #[test]
    fn test_detect_brands() {
        assert_eq!(CardBrand::detect("5500000000000004"), Some(CardBrand::Mastercard));
        assert_eq!(CardBrand::detect("2221000000000009"), Some(CardBrand::Mastercard));
        assert_eq!(CardBrand::detect("378282246310005"), Some(CardBrand::Amex));
        assert_eq!(CardBrand::detect("6011111111111117"), Some(CardBrand::Discover));
        assert_eq!(CardBrand::detect("6445644564456445"), Some(CardBrand::Discover));
        assert_eq!(CardBrand::detect("30569309025904"), Some(CardBrand::Diners));
        assert_eq!(CardBrand::detect("3530111333300000"), Some(CardBrand::Jcb));
        assert_eq!(CardBrand::detect("3500000000000000"), None);
        assert_eq!(CardBrand::detect("9"), None);
    }

    #[test]
    fn test_unknown_brand_can_still_be_valid() {
        let result = validate("9000000000000001");
        assert!(result.valid);
        assert_eq!(result.metadata["card_type"], "unknown");
        let result = validate("79927398713");
        // 11 digits is below the accepted card length.
        assert!(!result.valid);
    }

    #[test]
    fn test_generated_numbers_round_trip_per_brand() {
        let mut rng = StdRng::seed_from_u64(42);
        for brand in CardBrand::ALL {
            for _ in 0..50 {
                let number = generate(&mut rng, Some(brand));
                assert_eq!(number.len(), brand.total_length());
                let result = validate(&number);
                assert!(result.valid, "{number} should be valid");
                assert_eq!(result.metadata["card_type"], brand.slug(), "{number}");
            }
        }
    }

    #[test]
    fn test_random_brand_generation_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(validate(&generate(&mut rng, None)).valid);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate(&mut StdRng::seed_from_u64(99), Some(CardBrand::Visa));
        let b = generate(&mut StdRng::seed_from_u64(99), Some(CardBrand::Visa));
        assert_eq!(a, b);
    }

    #[test]
    fn test_brand_serde_names() {
        let brand: CardBrand = serde_json::from_value(serde_json::json!("amex")).unwrap();
        assert_eq!(brand, CardBrand::Amex);
        assert!(serde_json::from_value::<CardBrand>(serde_json::json!("maestro")).is_err());
    }
}
