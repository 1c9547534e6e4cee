//! Checksum primitives shared by every identifier family.
//!
//! All functions here are total over well-formed input. Length and charset
//! checks happen in the codec layer before any of these are called, so a
//! primitive only ever answers "does the checksum match" or "what is the
//! check character".

/// Weights for EAN-13 and ISBN-13 (check digit included, weight 1).
pub const EAN13_WEIGHTS: [u32; 13] = [1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1, 3, 1];

/// Weights for ISBN-10 (check character included, weight 1).
pub const ISBN10_WEIGHTS: [u32; 10] = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Weights for the six payload digits of an IMO number.
pub const IMO_WEIGHTS: [u32; 6] = [7, 6, 5, 4, 3, 2];

/// The checksum scheme used by an identifier family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumKind {
    /// Payment card numbers.
    Luhn,
    /// Positional dot product, check digit brings the sum to a multiple of 10.
    WeightedMod10(&'static [u32]),
    /// Positional dot product mod 11; a check value of 10 is written `X`
    /// when `allow_x` is set.
    WeightedMod11 {
        weights: &'static [u32],
        allow_x: bool,
    },
    /// IMO numbers: weighted sum of the first six digits, last digit mod 10.
    ImoWeighted,
    /// ISO 7064 MOD 97-10 as used by IBAN.
    Mod97,
}

impl ChecksumKind {
    /// Check a complete, normalized identifier.
    pub fn verify(&self, code: &str) -> bool {
        match self {
            Self::Luhn => luhn_valid(code),
            Self::WeightedMod10(weights) => weighted_sum(code, weights) % 10 == 0,
            Self::WeightedMod11 { weights, allow_x } => {
                if !allow_x && code.contains('X') {
                    return false;
                }
                weighted_sum(code, weights) % 11 == 0
            }
            Self::ImoWeighted => match code.len().checked_sub(1) {
                Some(split) => {
                    let (payload, check) = code.split_at(split);
                    check.bytes().next().map(char_value) == Some(imo_check_digit(payload))
                }
                None => false,
            },
            Self::Mod97 => mod97_remainder(code) == 1,
        }
    }

    /// Compute the check character(s) for `payload`.
    ///
    /// For trailing schemes the payload is everything before the check digit.
    /// For MOD-97 it is the country code followed by the account number, and
    /// the two returned digits belong right after the country code.
    ///
    /// Returns `None` when the payload has no representable check character
    /// (a mod-11 value of 10 in a scheme without `X`).
    pub fn check_characters(&self, payload: &str) -> Option<String> {
        match self {
            Self::Luhn => Some(luhn_check_digit(payload).to_string()),
            Self::WeightedMod10(weights) => {
                let sum = weighted_sum(payload, weights);
                Some(((10 - sum % 10) % 10).to_string())
            }
            Self::WeightedMod11 { weights, allow_x } => {
                match (11 - weighted_sum(payload, weights) % 11) % 11 {
                    10 if *allow_x => Some("X".to_string()),
                    10 => None,
                    value => Some(value.to_string()),
                }
            }
            Self::ImoWeighted => Some(imo_check_digit(payload).to_string()),
            Self::Mod97 => {
                let (country, bban) = payload.split_at(payload.len().min(2));
                Some(mod97_check_digits(country, bban))
            }
        }
    }
}

/// Numeric value of a digit, or 10 for `X`.
fn char_value(byte: u8) -> u32 {
    match byte {
        b'X' | b'x' => 10,
        b => u32::from(b.wrapping_sub(b'0')),
    }
}

/// Luhn sum of a complete number: every second digit from the right doubled,
/// with doubled values above 9 reduced by 9.
///
/// Exposed alongside [`luhn_valid`] for callers that need the raw sum, such
/// as checking a number against a modulus other than 10.
pub fn luhn_sum(digits: &str) -> u32 {
    luhn_fold(digits, false)
}

/// Whether a complete number passes the Luhn check.
pub fn luhn_valid(digits: &str) -> bool {
    luhn_sum(digits) % 10 == 0
}

/// Luhn check digit for a number that does not yet carry one.
///
/// The check digit will become the rightmost digit, so the current rightmost
/// digit is the first one doubled.
pub fn luhn_check_digit(partial: &str) -> u32 {
    (10 - luhn_fold(partial, true) % 10) % 10
}

fn luhn_fold(digits: &str, double_rightmost: bool) -> u32 {
    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let value = char_value(b);
            if (i % 2 == 0) == double_rightmost {
                let doubled = value * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                value
            }
        })
        .sum()
}

/// Positional dot product of digit values and weights.
///
/// Extra characters beyond the weight list are ignored, which lets a
/// payload use the leading part of a full-length weight table.
pub fn weighted_sum(digits: &str, weights: &[u32]) -> u32 {
    digits
        .bytes()
        .zip(weights)
        .map(|(b, w)| char_value(b) * w)
        .sum()
}

/// IMO check digit over the six payload digits.
pub fn imo_check_digit(payload: &str) -> u32 {
    weighted_sum(payload, &IMO_WEIGHTS) % 10
}

/// Remainder of the ISO 7064 MOD 97-10 computation.
///
/// The first four characters move to the end, letters are transcoded
/// (`A` = 10 ... `Z` = 35) and the resulting decimal string is folded one
/// digit at a time so arbitrarily long codes never overflow.
pub fn mod97_remainder(code: &str) -> u32 {
    let split = code.len().min(4);
    let (head, tail) = code.split_at(split);

    let mut remainder = 0;
    for c in tail.chars().chain(head.chars()) {
        let Some(value) = c.to_digit(36) else {
            continue;
        };
        if value >= 10 {
            remainder = (remainder * 10 + value / 10) % 97;
            remainder = (remainder * 10 + value % 10) % 97;
        } else {
            remainder = (remainder * 10 + value) % 97;
        }
    }
    remainder
}

/// Two MOD-97 check digits for a country code and account number.
pub fn mod97_check_digits(country: &str, bban: &str) -> String {
    let seeded = format!("{country}00{bban}");
    format!("{:02}", 98 - mod97_remainder(&seeded))
}
