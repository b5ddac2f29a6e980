//! Registry of every shipped resource type
//!
//! Pairs each generated `DOC` catalog with a structural check that reads a
//! resource declaration into the module's typed `Resource<P>`.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use cfntypes_core::schema::ResourceDoc;
use cfntypes_core::{Error, Json, Resource, ResourceProperties, Result};

use crate::generated;

/// A resource type known to this crate
pub struct RegisteredResource {
    pub doc: &'static ResourceDoc,
    check: fn(&Json) -> Result<()>,
}

impl RegisteredResource {
    pub fn of<P: ResourceProperties>(doc: &'static ResourceDoc) -> Self {
        Self {
            doc,
            check: check_properties::<P>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.doc.type_name
    }

    /// Deserialize a `{ Type, Properties, ... }` declaration of this type
    pub fn check(&self, declaration: &Json) -> Result<()> {
        (self.check)(declaration)
    }
}

impl std::fmt::Debug for RegisteredResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredResource")
            .field("type_name", &self.doc.type_name)
            .finish()
    }
}

fn check_properties<P: ResourceProperties>(declaration: &Json) -> Result<()> {
    Resource::<P>::from_json(declaration).map(|_| ())
}

static REGISTRY: LazyLock<Vec<RegisteredResource>> = LazyLock::new(|| {
    let mut resources = generated::registered();
    resources.sort_by_key(|r| r.type_name());
    log::debug!("Registered {} resource types", resources.len());
    resources
});

/// Every shipped resource type, ordered by type name
pub fn resource_types() -> &'static [RegisteredResource] {
    &REGISTRY
}

pub fn lookup(type_name: &str) -> Option<&'static RegisteredResource> {
    REGISTRY.iter().find(|r| r.type_name() == type_name)
}

/// Distinct service segments (e.g., "EC2", "SQS")
pub fn services() -> Vec<&'static str> {
    REGISTRY
        .iter()
        .map(|r| r.doc.service())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Check a single resource declaration against the type named by its `Type` key
pub fn check_resource(declaration: &Json) -> Result<()> {
    let type_name = declaration
        .get("Type")
        .and_then(Json::as_str)
        .ok_or_else(|| Error::Shape {
            path: "Type".to_string(),
            message: "missing or non-string `Type`".to_string(),
        })?;
    let registered =
        lookup(type_name).ok_or_else(|| Error::UnknownResourceType(type_name.to_string()))?;
    registered.check(declaration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_types_sorted_and_unique() {
        let names: Vec<&str> = resource_types().iter().map(|r| r.type_name()).collect();
        assert_eq!(names.len(), 13);
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_lookup() {
        let queue = lookup("AWS::SQS::Queue").unwrap();
        assert_eq!(queue.doc.resource_name(), "Queue");
        assert!(queue.doc.property("QueueName").is_some());
        assert!(lookup("AWS::SQS::QueuePolicy").is_none());
    }

    #[test]
    fn test_services() {
        let services = services();
        assert!(services.contains(&"EC2"));
        assert!(services.contains(&"Lambda"));
        // EC2 and Lambda each ship two types
        assert_eq!(services.len(), 11);
    }

    #[test]
    fn test_every_doc_describes_its_properties() {
        for registered in resource_types() {
            let doc = registered.doc;
            assert!(!doc.properties.is_empty(), "{}", doc.type_name);
            let nested = doc.property_types.iter().flat_map(|t| t.properties);
            for property in doc.properties.iter().chain(nested) {
                if let Some(name) = property.kind.struct_name() {
                    assert!(
                        doc.property_type(name).is_some(),
                        "{}.{} references missing property type {}",
                        doc.type_name,
                        property.name,
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn test_check_resource() {
        assert!(check_resource(&json!({"Type": "AWS::SQS::Queue"})).is_ok());

        let err = check_resource(&json!({"Type": "Custom::Thing"})).unwrap_err();
        assert_eq!(err, Error::UnknownResourceType("Custom::Thing".to_string()));

        let err = check_resource(&json!({"Properties": {}})).unwrap_err();
        assert!(matches!(err, Error::Shape { ref path, .. } if path == "Type"));

        let err = check_resource(&json!({
            "Type": "AWS::IAM::Role",
            "Properties": {}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("AssumeRolePolicyDocument"));
    }
}
