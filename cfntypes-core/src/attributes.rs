//! Resource-level attributes shared by every resource declaration

use serde::{Deserialize, Serialize};

use crate::value::Json;

/// `DependsOn` is written either as one logical id or as a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    One(String),
    Many(Vec<String>),
}

impl DependsOn {
    /// Logical ids in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let ids: &[String] = match self {
            DependsOn::One(id) => std::slice::from_ref(id),
            DependsOn::Many(ids) => ids,
        };
        ids.iter().map(String::as_str)
    }
}

impl From<&str> for DependsOn {
    fn from(id: &str) -> Self {
        DependsOn::One(id.to_string())
    }
}

impl From<Vec<String>> for DependsOn {
    fn from(ids: Vec<String>) -> Self {
        DependsOn::Many(ids)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateReplacePolicy {
    Delete,
    Retain,
    Snapshot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSignal {
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// ISO 8601 duration, e.g. `PT15M`
    #[serde(rename = "Timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingCreationPolicy {
    #[serde(
        rename = "MinSuccessfulInstancesPercent",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_successful_instances_percent: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreationPolicy {
    #[serde(
        rename = "AutoScalingCreationPolicy",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_scaling_creation_policy: Option<AutoScalingCreationPolicy>,
    #[serde(rename = "ResourceSignal", skip_serializing_if = "Option::is_none")]
    pub resource_signal: Option<ResourceSignal>,
}

/// Attributes that sit next to `Type` and `Properties` on every resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceAttributes {
    /// Name of a template condition gating creation of the resource
    #[serde(rename = "Condition", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "DependsOn", skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
    #[serde(rename = "Metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(rename = "DeletionPolicy", skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<DeletionPolicy>,
    #[serde(rename = "UpdateReplacePolicy", skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<UpdateReplacePolicy>,
    #[serde(rename = "CreationPolicy", skip_serializing_if = "Option::is_none")]
    pub creation_policy: Option<CreationPolicy>,
    /// Shape depends on the resource type (auto scaling, Lambda alias, ...)
    #[serde(rename = "UpdatePolicy", skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<Json>,
}

impl ResourceAttributes {
    pub fn is_empty(&self) -> bool {
        *self == ResourceAttributes::default()
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_depends_on(mut self, depends_on: impl Into<DependsOn>) -> Self {
        self.depends_on = Some(depends_on.into());
        self
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.deletion_policy = Some(policy);
        self
    }

    pub fn with_update_replace_policy(mut self, policy: UpdateReplacePolicy) -> Self {
        self.update_replace_policy = Some(policy);
        self
    }

    pub fn with_metadata(mut self, metadata: Json) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_depends_on_forms() {
        let one: DependsOn = serde_json::from_value(json!("Vpc")).unwrap();
        assert_eq!(one.iter().collect::<Vec<_>>(), vec!["Vpc"]);

        let many: DependsOn = serde_json::from_value(json!(["Vpc", "Gateway"])).unwrap();
        assert_eq!(many.iter().collect::<Vec<_>>(), vec!["Vpc", "Gateway"]);
    }

    #[test]
    fn test_attributes_deserialize() {
        let attrs: ResourceAttributes = serde_json::from_value(json!({
            "Condition": "IsProd",
            "DeletionPolicy": "RetainExceptOnCreate",
            "CreationPolicy": { "ResourceSignal": { "Count": 2, "Timeout": "PT15M" } }
        }))
        .unwrap();
        assert_eq!(attrs.condition.as_deref(), Some("IsProd"));
        assert_eq!(
            attrs.deletion_policy,
            Some(DeletionPolicy::RetainExceptOnCreate)
        );
        let signal = attrs.creation_policy.unwrap().resource_signal.unwrap();
        assert_eq!(signal.count, Some(2));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let result: Result<ResourceAttributes, _> =
            serde_json::from_value(json!({ "UpdateReplacePolicy": "RetainExceptOnCreate" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_attributes_serialize_to_empty_object() {
        let attrs = ResourceAttributes::default();
        assert!(attrs.is_empty());
        assert_eq!(serde_json::to_value(&attrs).unwrap(), json!({}));

        let attrs = attrs
            .with_depends_on("Vpc")
            .with_deletion_policy(DeletionPolicy::Retain);
        assert_eq!(
            serde_json::to_value(&attrs).unwrap(),
            json!({ "DependsOn": "Vpc", "DeletionPolicy": "Retain" })
        );
    }
}
