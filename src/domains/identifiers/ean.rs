//! EAN-13 barcodes.

use rand::Rng;
use serde_json::{Map, Value};

use super::checksum::{ChecksumKind, EAN13_WEIGHTS};
use super::codec::{CheckPosition, Charset, Family, IdentifierFormat, LengthRule, ValidationResult};

pub const EAN13_FORMAT: IdentifierFormat = IdentifierFormat {
    family: Family::Ean13,
    length: LengthRule::Exact(13),
    check_position: CheckPosition::Last,
    checksum: Some(ChecksumKind::WeightedMod10(&EAN13_WEIGHTS)),
    charset: Charset::Digits,
};

pub fn validate(raw: &str) -> ValidationResult {
    ValidationResult::from_check(EAN13_FORMAT.check(raw), |code| {
        let mut metadata = Map::new();
        metadata.insert("gs1_prefix".to_string(), Value::from(&code[..3]));
        metadata
    })
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> String {
    EAN13_FORMAT.generate_from_prefix(rng, "", 13)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_known_codes() {
        let result = validate("1234567890128");
        assert!(result.valid);
        assert_eq!(result.metadata["gs1_prefix"], "123");
        assert!(!validate("1234567890123").valid);
        assert!(validate("4006381333931").valid);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..100 {
            let code = generate(&mut rng);
            assert_eq!(code.len(), 13);
            assert!(validate(&code).valid, "{code}");
        }
    }
}
