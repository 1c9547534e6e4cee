//! Identifier engine.
//!
//! Checksum primitives, one codec per identifier family, the country
//! registries and the MMSI type taxonomy. Everything here is synchronous and
//! pure apart from the random source passed into the generators.

pub mod checksum;
pub mod codec;
pub mod countries;
pub mod credit_card;
pub mod ean;
pub mod error;
pub mod iban;
pub mod imo;
pub mod isbn;
pub mod mmsi;

pub use codec::{Family, IdentifierFormat, ValidationResult};
pub use credit_card::CardBrand;
pub use error::IdentifierError;
pub use isbn::IsbnFormat;
