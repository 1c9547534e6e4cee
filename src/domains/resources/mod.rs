//! Resources domain module.
//!
//! Read-only MCP resources publishing the identifier reference tables, so
//! clients can discover valid `country-code` and MMSI `type` values.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceEntry, ResourceService};
