//! CloudFormation registry schema model
//!
//! The subset of the resource provider schema (as returned by
//! `aws cloudformation describe-type --query Schema`) that the generator reads.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value as JsonValue;

/// CloudFormation Resource Schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnSchema {
    pub type_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub read_only_properties: Vec<String>,
    #[serde(default)]
    pub create_only_properties: Vec<String>,
    #[serde(default)]
    pub deprecated_properties: Vec<String>,
    #[serde(default)]
    pub definitions: BTreeMap<String, CfnProperty>,
    pub tagging: Option<CfnTagging>,
    pub documentation_url: Option<String>,
}

/// CloudFormation Tagging metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnTagging {
    #[serde(default)]
    pub taggable: bool,
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypeValue::Single(s) => Some(s),
            TypeValue::Multiple(v) => v.first().map(|s| s.as_str()),
        }
    }
}

/// `additionalProperties` is either a boolean or a schema
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<CfnProperty>),
}

/// A property schema; definitions share the same shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnProperty {
    #[serde(rename = "type")]
    pub prop_type: Option<TypeValue>,
    pub description: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<JsonValue>>,
    pub items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
    pub properties: Option<BTreeMap<String, CfnProperty>>,
    #[serde(default)]
    pub required: Vec<String>,
    pub pattern_properties: Option<BTreeMap<String, CfnProperty>>,
    pub additional_properties: Option<AdditionalProperties>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub pattern: Option<String>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub unique_items: Option<bool>,
}

impl CfnProperty {
    pub fn type_str(&self) -> Option<&str> {
        self.prop_type.as_ref().and_then(|t| t.as_str())
    }

    /// Definition name of a local `$ref` (e.g., "#/definitions/Tag" -> "Tag")
    pub fn ref_name(&self) -> Option<&str> {
        self.ref_path
            .as_deref()
            .and_then(|path| path.strip_prefix("#/definitions/"))
    }

    /// Enum values rendered as strings, whatever their JSON type
    pub fn enum_strings(&self) -> Option<Vec<String>> {
        self.enum_values.as_ref().map(|values| {
            values
                .iter()
                .map(|v| match v {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
    }
}

impl CfnSchema {
    /// Strip the `/properties/` prefix from a JSON pointer; nested paths are joined with '.'
    pub fn property_path(pointer: &str) -> String {
        pointer
            .trim_start_matches("/properties/")
            .split('/')
            .filter(|segment| *segment != "*")
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn read_only(&self) -> Vec<String> {
        self.read_only_properties
            .iter()
            .map(|p| Self::property_path(p))
            .collect()
    }

    pub fn create_only(&self) -> Vec<String> {
        self.create_only_properties
            .iter()
            .map(|p| Self::property_path(p))
            .collect()
    }

    pub fn deprecated(&self) -> Vec<String> {
        self.deprecated_properties
            .iter()
            .map(|p| Self::property_path(p))
            .collect()
    }

    pub fn taggable(&self) -> bool {
        match &self.tagging {
            Some(tagging) => tagging.taggable,
            None => self.properties.contains_key("Tags"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_schema() {
        let schema: CfnSchema = serde_json::from_str(
            r##"{
                "typeName": "AWS::Test::Widget",
                "properties": {
                    "Name": { "type": "string", "minLength": 1 },
                    "Mode": { "type": ["string", "object"], "enum": ["A", "B"] },
                    "Tags": { "type": "array", "items": { "$ref": "#/definitions/Tag" } }
                },
                "definitions": {
                    "Tag": {
                        "type": "object",
                        "properties": { "Key": { "type": "string" } },
                        "required": ["Key"]
                    }
                },
                "readOnlyProperties": ["/properties/Arn", "/properties/Endpoint/Address"]
            }"##,
        )
        .unwrap();

        assert_eq!(schema.type_name, "AWS::Test::Widget");
        assert_eq!(schema.properties["Name"].min_length, Some(1));
        assert_eq!(schema.properties["Mode"].type_str(), Some("string"));
        assert_eq!(
            schema.properties["Tags"].items.as_ref().unwrap().ref_name(),
            Some("Tag")
        );
        assert_eq!(schema.definitions["Tag"].required, vec!["Key"]);
        assert_eq!(schema.read_only(), vec!["Arn", "Endpoint.Address"]);
        assert!(schema.taggable());
    }

    #[test]
    fn test_enum_strings_accepts_non_strings() {
        let prop: CfnProperty = serde_json::from_str(r#"{ "enum": ["a", 1, true] }"#).unwrap();
        assert_eq!(
            prop.enum_strings().unwrap(),
            vec!["a".to_string(), "1".to_string(), "true".to_string()]
        );
    }

    #[test]
    fn test_property_path_skips_wildcards() {
        assert_eq!(
            CfnSchema::property_path("/properties/Replicas/*/Region"),
            "Replicas.Region"
        );
    }

    #[test]
    fn test_additional_properties_forms() {
        let allowed: CfnProperty =
            serde_json::from_str(r#"{ "type": "object", "additionalProperties": false }"#).unwrap();
        assert!(matches!(
            allowed.additional_properties,
            Some(AdditionalProperties::Allowed(false))
        ));

        let schema: CfnProperty = serde_json::from_str(
            r#"{ "type": "object", "additionalProperties": { "type": "string" } }"#,
        )
        .unwrap();
        assert!(matches!(
            schema.additional_properties,
            Some(AdditionalProperties::Schema(_))
        ));
    }
}
