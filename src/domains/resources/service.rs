//! Resource service implementation.
//!
//! The ResourceService serves the registered reference tables and resolves
//! the per-country template. Adding a new resource does NOT require
//! modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::definitions::{CountryResource, JSON_MIME_TYPE};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Registry of available resources, keyed by URI.
    resources: BTreeMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Builds the JSON document on read.
    pub content: fn() -> Value,
}

impl ResourceService {
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: BTreeMap::new(),
            templates: get_all_resource_templates(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI, falling back to the country template.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let document = match self.resources.get(uri) {
            Some(entry) => (entry.content)(),
            None => {
                let iso_code =
                    CountryResource::iso_code(uri).ok_or_else(|| ResourceError::not_found(uri))?;
                CountryResource::content(iso_code)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(JSON_MIME_TYPE.to_string()),
                text: serde_json::to_string_pretty(&document)?,
                meta: None,
            }],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &ReadResourceResult) -> Value {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                serde_json::from_str(text).unwrap()
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = ResourceService::new();
        assert_eq!(service.list_resources().await.len(), 3);
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_mmsi_types() {
        let service = ResourceService::new();
        let result = service
            .read_resource("identifiers://mmsi/types")
            .await
            .unwrap();
        let types = text_of(&result);
        assert_eq!(types.as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_read_country_template() {
        let service = ResourceService::new();
        let result = service
            .read_resource("identifiers://countries/NO")
            .await
            .unwrap();
        let country = text_of(&result);
        assert_eq!(country["iso_code"], "NO");
        assert_eq!(country["iban_length"], 15);
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new();
        for uri in [
            "identifiers://nonexistent",
            "identifiers://countries/ZZ",
            "identifiers://countries/germany",
        ] {
            assert!(matches!(
                service.read_resource(uri).await,
                Err(ResourceError::NotFound(_))
            ));
        }
    }
}
