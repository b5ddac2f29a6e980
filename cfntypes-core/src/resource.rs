//! Resource - the `{ Type, Properties }` envelope of a resource declaration

use serde::de::{self, DeserializeOwned, Error as _};
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attributes::{
    CreationPolicy, DeletionPolicy, DependsOn, ResourceAttributes, UpdateReplacePolicy,
};
use crate::error::{Error, Result};
use crate::value::Json;

/// Implemented by the `Properties` struct of every resource type
pub trait ResourceProperties: Serialize + DeserializeOwned {
    /// CloudFormation type name (e.g., "AWS::SQS::Queue")
    const TYPE_NAME: &'static str;
}

/// A declared resource of type `P::TYPE_NAME`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    pub attributes: ResourceAttributes,
}

impl<P: ResourceProperties> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: ResourceAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn type_name(&self) -> &'static str {
        P::TYPE_NAME
    }

    /// Read a resource declaration, reporting the JSON path of any mismatch
    pub fn from_json(value: &Json) -> Result<Self> {
        let raw: RawResource =
            serde_path_to_error::deserialize(value).map_err(Error::from_path_error)?;
        let (type_name, properties, attributes) = raw.into_parts();
        if type_name != P::TYPE_NAME {
            return Err(Error::TypeMismatch {
                expected: P::TYPE_NAME.to_string(),
                got: type_name,
            });
        }
        let properties: P = serde_path_to_error::deserialize(properties)
            .map_err(|e| Error::from_path_error(e).within("Properties"))?;
        Ok(Self {
            properties,
            attributes,
        })
    }

    /// Write the declaration back in its template form
    pub fn to_json(&self) -> Result<Json> {
        serde_json::to_value(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

/// Wire form before the properties are typed
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawResource {
    #[serde(rename = "Type")]
    type_name: String,
    #[serde(rename = "Properties")]
    properties: Option<Json>,
    #[serde(rename = "Condition")]
    condition: Option<String>,
    #[serde(rename = "DependsOn")]
    depends_on: Option<DependsOn>,
    #[serde(rename = "Metadata")]
    metadata: Option<Json>,
    #[serde(rename = "DeletionPolicy")]
    deletion_policy: Option<DeletionPolicy>,
    #[serde(rename = "UpdateReplacePolicy")]
    update_replace_policy: Option<UpdateReplacePolicy>,
    #[serde(rename = "CreationPolicy")]
    creation_policy: Option<CreationPolicy>,
    #[serde(rename = "UpdatePolicy")]
    update_policy: Option<Json>,
}

impl RawResource {
    /// A missing `Properties` key reads as `{}`
    fn into_parts(self) -> (String, Json, ResourceAttributes) {
        let attributes = ResourceAttributes {
            condition: self.condition,
            depends_on: self.depends_on,
            metadata: self.metadata,
            deletion_policy: self.deletion_policy,
            update_replace_policy: self.update_replace_policy,
            creation_policy: self.creation_policy,
            update_policy: self.update_policy,
        };
        let properties = self
            .properties
            .unwrap_or_else(|| Json::Object(serde_json::Map::new()));
        (self.type_name, properties, attributes)
    }
}

impl<P: ResourceProperties> Serialize for Resource<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let attributes = match serde_json::to_value(&self.attributes).map_err(S::Error::custom)? {
            Json::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        let mut map = serializer.serialize_map(Some(2 + attributes.len()))?;
        map.serialize_entry("Type", P::TYPE_NAME)?;
        map.serialize_entry("Properties", &self.properties)?;
        for (key, value) in &attributes {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, P: ResourceProperties> Deserialize<'de> for Resource<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let (type_name, properties, attributes) =
            RawResource::deserialize(deserializer)?.into_parts();
        if type_name != P::TYPE_NAME {
            return Err(D::Error::invalid_value(
                de::Unexpected::Str(&type_name),
                &P::TYPE_NAME,
            ));
        }
        let properties = P::deserialize(properties).map_err(D::Error::custom)?;
        Ok(Self {
            properties,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct WidgetProperties {
        #[serde(rename = "Name")]
        name: Value<String>,
        #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
        size: Option<Value<i64>>,
    }

    impl ResourceProperties for WidgetProperties {
        const TYPE_NAME: &'static str = "AWS::Test::Widget";
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct GadgetProperties {
        #[serde(rename = "Label", skip_serializing_if = "Option::is_none")]
        label: Option<Value<String>>,
    }

    impl ResourceProperties for GadgetProperties {
        const TYPE_NAME: &'static str = "AWS::Test::Gadget";
    }

    #[test]
    fn test_serialize_writes_type_and_attributes() {
        let widget = Resource::new(WidgetProperties {
            name: Value::from("w"),
            size: None,
        })
        .with_attributes(ResourceAttributes::default().with_condition("IsProd"));

        assert_eq!(
            widget.to_json().unwrap(),
            json!({
                "Type": "AWS::Test::Widget",
                "Properties": { "Name": "w" },
                "Condition": "IsProd"
            })
        );
    }

    #[test]
    fn test_roundtrip() {
        let doc = json!({
            "Type": "AWS::Test::Widget",
            "Properties": { "Name": { "Ref": "WidgetName" }, "Size": 3 },
            "DependsOn": ["Other"],
            "DeletionPolicy": "Retain"
        });
        let widget: Resource<WidgetProperties> = serde_json::from_value(doc.clone()).unwrap();
        assert!(widget.properties.name.is_intrinsic());
        assert_eq!(widget.attributes.deletion_policy, Some(DeletionPolicy::Retain));
        assert_eq!(serde_json::to_value(&widget).unwrap(), doc);
    }

    #[test]
    fn test_missing_properties_means_empty() {
        let gadget = Resource::<GadgetProperties>::from_json(&json!({
            "Type": "AWS::Test::Gadget"
        }))
        .unwrap();
        assert_eq!(gadget.properties, GadgetProperties::default());

        // Not allowed when a property is required
        let err = Resource::<WidgetProperties>::from_json(&json!({
            "Type": "AWS::Test::Widget"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `Name`"));
    }

    #[test]
    fn test_type_mismatch() {
        let err = Resource::<GadgetProperties>::from_json(&json!({
            "Type": "AWS::Test::Widget",
            "Properties": {}
        }))
        .unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                expected: "AWS::Test::Gadget".to_string(),
                got: "AWS::Test::Widget".to_string(),
            }
        );

        let result: std::result::Result<Resource<GadgetProperties>, _> =
            serde_json::from_value(json!({ "Type": "AWS::Test::Widget" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_shape_error_has_path() {
        let err = Resource::<WidgetProperties>::from_json(&json!({
            "Type": "AWS::Test::Widget",
            "Properties": { "Name": "w", "Size": "large" }
        }))
        .unwrap_err();
        match err {
            Error::Shape { path, .. } => assert_eq!(path, "Properties.Size"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = Resource::<GadgetProperties>::from_json(&json!({
            "Type": "AWS::Test::Gadget",
            "Properties": { "Colour": "red" }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Colour"));

        let err = Resource::<GadgetProperties>::from_json(&json!({
            "Type": "AWS::Test::Gadget",
            "Propertie": {}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Propertie"));
    }
}
