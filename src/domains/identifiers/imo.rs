//! IMO ship identification numbers.
//!
//! Seven digits; the last is the weighted sum of the first six (weights 7
//! down to 2) taken mod 10. Inputs may carry a leading `IMO` marker.

use rand::Rng;
use serde_json::Map;

use super::checksum::ChecksumKind;
use super::codec::{
    CheckPosition, Charset, Family, IdentifierFormat, LengthRule, ValidationResult, random_digit_in,
};

pub const IMO_FORMAT: IdentifierFormat = IdentifierFormat {
    family: Family::Imo,
    length: LengthRule::Exact(7),
    check_position: CheckPosition::Last,
    checksum: Some(ChecksumKind::ImoWeighted),
    charset: Charset::Digits,
};

fn strip_marker(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    match trimmed.get(..3) {
        Some(marker) if marker.eq_ignore_ascii_case("IMO") => &trimmed[3..],
        _ => trimmed,
    }
}

pub fn validate(raw: &str) -> ValidationResult {
    ValidationResult::from_check(IMO_FORMAT.check(strip_marker(raw)), |_| Map::new())
}

/// Generate an IMO number. The first digit is never zero.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let lead = random_digit_in(rng, 1..=9).to_string();
    IMO_FORMAT.generate_from_prefix(rng, &lead, 7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_known_numbers() {
        assert!(validate("1234567").valid);
        assert!(validate("9074729").valid);
        assert!(!validate("9074728").valid);
    }

    #[test]
    fn test_marker_is_stripped() {
        let result = validate("IMO 9074729");
        assert!(result.valid);
        assert_eq!(result.normalized.as_deref(), Some("9074729"));
        assert!(validate("imo9074729").valid);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let imo = generate(&mut rng);
            assert_eq!(imo.len(), 7);
            assert!(!imo.starts_with('0'));
            assert!(validate(&imo).valid, "{imo}");
        }
    }
}
