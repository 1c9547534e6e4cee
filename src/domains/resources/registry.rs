//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, ResourceTemplate};

use super::definitions::{
    CountryResource, IbanCountriesResource, JSON_MIME_TYPE, MmsiCountriesResource,
    MmsiTypesResource, ResourceDefinition,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(JSON_MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content,
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<MmsiTypesResource>(),
        build_resource::<MmsiCountriesResource>(),
        build_resource::<IbanCountriesResource>(),
    ]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![CountryResource::template()]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        MmsiTypesResource::URI,
        MmsiCountriesResource::URI,
        IbanCountriesResource::URI,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 3);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(uris, resource_uris());
        for entry in &resources {
            assert_eq!(entry.resource.raw.mime_type.as_deref(), Some(JSON_MIME_TYPE));
        }
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates[0].raw.uri_template,
            "identifiers://countries/{iso_code}"
        );
    }
}
