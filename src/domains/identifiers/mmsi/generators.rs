//! Per-type MMSI generators.
//!
//! Each generator builds a value directly inside its type's range rather
//! than sampling and rejecting. Where a type's range numerically contains a
//! higher-precedence one (US federal numbers inside US ship MIDs, the Coast
//! Guard constants inside group and coast ranges) the generator steers
//! around it.

use rand::RngCore;
use rand::seq::SliceRandom;

use super::types::{US_COAST_GUARD_GROUP_COAST, US_COAST_GUARD_GROUP_SHIP, US_FEDERAL_PREFIX};
use crate::domains::identifiers::codec::{random_digit_in, random_digits};
use crate::domains::identifiers::countries::{MmsiCountry, US_MIDS, all_mids};
use crate::domains::identifiers::error::IdentifierError;

type Generated = Result<String, IdentifierError>;

/// A MID from `country`, or from any flag state.
pub(super) fn pick_mid(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> u16 {
    let mids = country.map_or(all_mids(), |c| c.mids);
    mids.choose(rng).copied().unwrap_or(US_MIDS[0])
}

fn pick_us_mid(
    rng: &mut dyn RngCore,
    country: Option<&'static MmsiCountry>,
    target: &str,
) -> Result<u16, IdentifierError> {
    match country {
        Some(c) if !c.is_us() => Err(IdentifierError::country_not_applicable(c.iso_code, target)),
        _ => Ok(US_MIDS.choose(rng).copied().unwrap_or(US_MIDS[0])),
    }
}

fn pick_non_us_mid(
    rng: &mut dyn RngCore,
    country: Option<&'static MmsiCountry>,
    target: &str,
) -> Result<u16, IdentifierError> {
    match country {
        Some(c) if c.is_us() => Err(IdentifierError::country_not_applicable(c.iso_code, target)),
        Some(c) => Ok(pick_mid(rng, Some(c))),
        None => {
            let candidates: Vec<u16> = all_mids()
                .iter()
                .copied()
                .filter(|mid| !US_MIDS.contains(mid))
                .collect();
            Ok(candidates.choose(rng).copied().unwrap_or(201))
        }
    }
}

fn require_us(country: Option<&'static MmsiCountry>, target: &str) -> Result<(), IdentifierError> {
    match country {
        Some(c) if !c.is_us() => Err(IdentifierError::country_not_applicable(c.iso_code, target)),
        _ => Ok(()),
    }
}

/// MID whose numbers continuing with 9 are reserved for federal use.
const FEDERAL_MID: u16 = 366;

/// The digit after a leading MID, never opening a federal number.
fn digit_after_mid(rng: &mut dyn RngCore, mid: u16) -> char {
    if mid == FEDERAL_MID {
        random_digit_in(rng, 0..=8)
    } else {
        random_digit_in(rng, 0..=9)
    }
}

fn nonzero_digit(rng: &mut dyn RngCore) -> char {
    random_digit_in(rng, 1..=9)
}

/// Replace the last digit when `candidate` collides with a reserved constant.
fn avoid_constant(mut candidate: String, reserved: &str) -> String {
    if candidate == reserved {
        candidate.pop();
        candidate.push('8');
    }
    candidate
}

pub fn us_coast_guard_group_ship(
    _: &mut dyn RngCore,
    country: Option<&'static MmsiCountry>,
) -> Generated {
    require_us(country, "US Coast Guard Group Ship Station")?;
    Ok(US_COAST_GUARD_GROUP_SHIP.to_string())
}

pub fn us_coast_guard_group_coast(
    _: &mut dyn RngCore,
    country: Option<&'static MmsiCountry>,
) -> Generated {
    require_us(country, "US Coast Guard Group Coast Station")?;
    Ok(US_COAST_GUARD_GROUP_COAST.to_string())
}

pub fn us_federal(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    require_us(country, "US Federal MMSI")?;
    Ok(format!("{US_FEDERAL_PREFIX}{}", random_digits(rng, 5)))
}

pub fn ship_inmarsat_bcm(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    let fourth = digit_after_mid(rng, mid);
    Ok(format!("{mid}{fourth}{}000", random_digits(rng, 2)))
}

pub fn ship_inmarsat_c(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    let fourth = digit_after_mid(rng, mid);
    let body = random_digits(rng, 3);
    let last = nonzero_digit(rng);
    Ok(format!("{mid}{fourth}{body}{last}0"))
}

pub fn us_ship(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_us_mid(rng, country, "US Ship Station")?;
    let fourth = digit_after_mid(rng, mid);
    let body = random_digits(rng, 4);
    let last = nonzero_digit(rng);
    Ok(format!("{mid}{fourth}{body}{last}"))
}

pub fn ship(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_non_us_mid(rng, country, "Ship Station")?;
    let body = random_digits(rng, 5);
    let last = nonzero_digit(rng);
    Ok(format!("{mid}{body}{last}"))
}

pub fn group_ship(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    let candidate = format!("0{mid}{}", random_digits(rng, 5));
    Ok(avoid_constant(candidate, US_COAST_GUARD_GROUP_SHIP))
}

pub fn group_coast(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    Ok(format!("00{mid}{}00", random_digits(rng, 2)))
}

pub fn coast(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    let body = random_digits(rng, 3);
    let last = nonzero_digit(rng);
    Ok(avoid_constant(format!("00{mid}{body}{last}"), US_COAST_GUARD_GROUP_COAST))
}

pub fn sar_aircraft(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    Ok(format!("111{mid}{}", random_digits(rng, 3)))
}

pub fn handheld_vhf(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    Ok(format!("8{mid}{}", random_digits(rng, 5)))
}

pub fn ais_sart(rng: &mut dyn RngCore, _: Option<&'static MmsiCountry>) -> Generated {
    Ok(format!("970{}", random_digits(rng, 6)))
}

pub fn man_overboard(rng: &mut dyn RngCore, _: Option<&'static MmsiCountry>) -> Generated {
    Ok(format!("972{}", random_digits(rng, 6)))
}

pub fn epirb_ais(rng: &mut dyn RngCore, _: Option<&'static MmsiCountry>) -> Generated {
    Ok(format!("974{}", random_digits(rng, 6)))
}

pub fn craft_associated(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    Ok(format!("98{mid}{}", random_digits(rng, 4)))
}

pub fn aton_physical(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    Ok(format!("99{mid}1{}", random_digits(rng, 3)))
}

pub fn aton_virtual(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    Ok(format!("99{mid}6{}", random_digits(rng, 3)))
}

pub fn aton(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    const KIND_DIGITS: [char; 8] = ['0', '2', '3', '4', '5', '7', '8', '9'];
    let mid = pick_mid(rng, country);
    let kind = KIND_DIGITS.choose(rng).copied().unwrap_or('0');
    Ok(format!("99{mid}{kind}{}", random_digits(rng, 3)))
}

pub fn free_form(rng: &mut dyn RngCore, _: Option<&'static MmsiCountry>) -> Generated {
    let second = random_digit_in(rng, 0..=6);
    Ok(format!("9{second}{}", random_digits(rng, 7)))
}

/// Any MMSI: a MID from `country` (or any flag state) and six random digits.
pub fn any(rng: &mut dyn RngCore, country: Option<&'static MmsiCountry>) -> Generated {
    let mid = pick_mid(rng, country);
    Ok(format!("{mid}{}", random_digits(rng, 6)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::identifiers::countries::mmsi_country;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_avoid_constant() {
        assert_eq!(avoid_constant("036699999".into(), US_COAST_GUARD_GROUP_SHIP), "036699998");
        assert_eq!(avoid_constant("036612345".into(), US_COAST_GUARD_GROUP_SHIP), "036612345");
    }

    #[test]
    fn test_federal_digit_avoided_for_366() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            assert_ne!(digit_after_mid(&mut rng, 366), '9');
        }
    }

    #[test]
    fn test_us_only_rejects_other_countries() {
        let mut rng = StdRng::seed_from_u64(9);
        let gb = mmsi_country("GB");
        assert!(matches!(
            us_ship(&mut rng, gb),
            Err(IdentifierError::CountryNotApplicable { .. })
        ));
        assert!(us_federal(&mut rng, mmsi_country("US")).is_ok());
        assert!(ship(&mut rng, mmsi_country("US")).is_err());
    }

    #[test]
    fn test_country_mid_is_embedded() {
        let mut rng = StdRng::seed_from_u64(9);
        let gb = mmsi_country("GB");
        for _ in 0..20 {
            let mmsi = coast(&mut rng, gb).unwrap();
            let mid: u16 = mmsi[2..5].parse().unwrap();
            assert!((232..=235).contains(&mid), "{mmsi}");
        }
    }

    #[test]
    fn test_any_has_nine_digits() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let mmsi = any(&mut rng, None).unwrap();
            assert_eq!(mmsi.len(), 9);
            assert!(mmsi.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
