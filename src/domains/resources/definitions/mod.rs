//! Resource definitions module.
//!
//! Each resource publishes one of the identifier reference tables as JSON.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod country;
pub mod iban_countries;
pub mod mmsi_countries;
pub mod mmsi_types;

use serde_json::Value;

pub use country::CountryResource;
pub use iban_countries::IbanCountriesResource;
pub use mmsi_countries::MmsiCountriesResource;
pub use mmsi_types::MmsiTypesResource;

/// MIME type of every identifier resource.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// Build the JSON document served for this resource.
    fn content() -> Value;
}
