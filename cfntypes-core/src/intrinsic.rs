//! Intrinsic - CloudFormation intrinsic function placeholders
//!
//! An intrinsic may appear wherever a literal value is accepted. On the wire
//! each one is an object with exactly one key naming the function:
//!
//! ```json
//! { "Ref": "MyQueue" }
//! { "Fn::GetAtt": ["MyQueue", "Arn"] }
//! { "Fn::Join": [",", ["a", { "Ref": "B" }]] }
//! ```
//!
//! Function arguments that may be arbitrary values (including nested
//! intrinsics) are kept as raw JSON. Nothing here evaluates a function.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Error as _, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Json;

/// Every function key accepted on input
pub const FUNCTION_NAMES: &[&str] = &[
    "Ref",
    "Fn::GetAtt",
    "Fn::Sub",
    "Fn::Join",
    "Fn::Select",
    "Fn::Split",
    "Fn::If",
    "Fn::Equals",
    "Fn::And",
    "Fn::Or",
    "Fn::Not",
    "Fn::FindInMap",
    "Fn::GetAZs",
    "Fn::ImportValue",
    "Fn::Base64",
    "Fn::Cidr",
    "Condition",
    "Fn::Length",
    "Fn::ToJsonString",
    "Fn::Transform",
];

/// Whether a single-key object with this key stands in for a property value.
/// `Condition` only names a condition inside `Fn::And`, `Fn::Or` and `Fn::Not`.
pub fn is_value_function(key: &str) -> bool {
    key != "Condition" && FUNCTION_NAMES.contains(&key)
}

/// CloudFormation intrinsic function placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    /// Logical id of a resource or parameter, or a pseudo parameter
    Ref(String),
    GetAtt {
        logical_name: String,
        attribute_name: String,
    },
    Sub {
        template: String,
        variables: Option<BTreeMap<String, Json>>,
    },
    Join {
        delimiter: String,
        values: Json,
    },
    Select {
        index: Json,
        list: Json,
    },
    Split {
        delimiter: String,
        source: Json,
    },
    If {
        condition: String,
        if_true: Json,
        if_false: Json,
    },
    Equals(Json, Json),
    And(Vec<Json>),
    Or(Vec<Json>),
    Not(Json),
    FindInMap {
        map_name: Json,
        top_level_key: Json,
        second_level_key: Json,
    },
    GetAZs(Json),
    ImportValue(Json),
    Base64(Json),
    Cidr {
        ip_block: Json,
        count: Json,
        cidr_bits: Json,
    },
    /// Reference to a named condition (only valid inside condition functions)
    Condition(String),
    Length(Json),
    ToJsonString(Json),
    Transform {
        name: String,
        parameters: BTreeMap<String, Json>,
    },
}

impl Intrinsic {
    /// `{ "Ref": logical_id }`
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Intrinsic::Ref(logical_id.into())
    }

    /// `{ "Fn::GetAtt": [logical_name, attribute_name] }`
    pub fn get_att(logical_name: impl Into<String>, attribute_name: impl Into<String>) -> Self {
        Intrinsic::GetAtt {
            logical_name: logical_name.into(),
            attribute_name: attribute_name.into(),
        }
    }

    /// `{ "Fn::Sub": template }`
    pub fn sub(template: impl Into<String>) -> Self {
        Intrinsic::Sub {
            template: template.into(),
            variables: None,
        }
    }

    /// `{ "Fn::Sub": [template, variables] }`
    pub fn sub_with(template: impl Into<String>, variables: BTreeMap<String, Json>) -> Self {
        Intrinsic::Sub {
            template: template.into(),
            variables: Some(variables),
        }
    }

    /// `{ "Fn::Join": [delimiter, values] }`
    pub fn join<I>(delimiter: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Json>,
    {
        Intrinsic::Join {
            delimiter: delimiter.into(),
            values: Json::Array(values.into_iter().map(Into::into).collect()),
        }
    }

    /// `{ "Fn::ImportValue": export_name }`
    pub fn import_value(export_name: impl Into<String>) -> Self {
        Intrinsic::ImportValue(Json::String(export_name.into()))
    }

    /// `{ "Fn::If": [condition, if_true, if_false] }`
    pub fn if_(
        condition: impl Into<String>,
        if_true: impl Into<Json>,
        if_false: impl Into<Json>,
    ) -> Self {
        Intrinsic::If {
            condition: condition.into(),
            if_true: if_true.into(),
            if_false: if_false.into(),
        }
    }

    /// The JSON key this function is written with
    pub fn function_name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => "Ref",
            Intrinsic::GetAtt { .. } => "Fn::GetAtt",
            Intrinsic::Sub { .. } => "Fn::Sub",
            Intrinsic::Join { .. } => "Fn::Join",
            Intrinsic::Select { .. } => "Fn::Select",
            Intrinsic::Split { .. } => "Fn::Split",
            Intrinsic::If { .. } => "Fn::If",
            Intrinsic::Equals(_, _) => "Fn::Equals",
            Intrinsic::And(_) => "Fn::And",
            Intrinsic::Or(_) => "Fn::Or",
            Intrinsic::Not(_) => "Fn::Not",
            Intrinsic::FindInMap { .. } => "Fn::FindInMap",
            Intrinsic::GetAZs(_) => "Fn::GetAZs",
            Intrinsic::ImportValue(_) => "Fn::ImportValue",
            Intrinsic::Base64(_) => "Fn::Base64",
            Intrinsic::Cidr { .. } => "Fn::Cidr",
            Intrinsic::Condition(_) => "Condition",
            Intrinsic::Length(_) => "Fn::Length",
            Intrinsic::ToJsonString(_) => "Fn::ToJsonString",
            Intrinsic::Transform { .. } => "Fn::Transform",
        }
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intrinsic::Ref(name) => write!(f, "!Ref {}", name),
            Intrinsic::GetAtt {
                logical_name,
                attribute_name,
            } => write!(f, "!GetAtt {}.{}", logical_name, attribute_name),
            Intrinsic::Sub { template, .. } => write!(f, "!Sub {:?}", template),
            Intrinsic::Condition(name) => write!(f, "Condition {}", name),
            other => write!(f, "{} ...", other.function_name()),
        }
    }
}

/// `Fn::GetAtt` accepts `["Res", "Attr"]` and the dotted `"Res.Attr"`
#[derive(Deserialize)]
#[serde(untagged)]
enum GetAttArgs {
    Pair(String, String),
    Dotted(String),
}

/// `Fn::Sub` accepts `"template"` and `["template", { vars }]`
#[derive(Deserialize)]
#[serde(untagged)]
enum SubArgs {
    Template(String),
    WithVariables(String, BTreeMap<String, Json>),
}

#[derive(Serialize, Deserialize)]
struct TransformArgs {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Parameters", default)]
    parameters: BTreeMap<String, Json>,
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        let key = self.function_name();
        match self {
            Intrinsic::Ref(name) | Intrinsic::Condition(name) => map.serialize_entry(key, name)?,
            Intrinsic::GetAtt {
                logical_name,
                attribute_name,
            } => map.serialize_entry(key, &(logical_name, attribute_name))?,
            Intrinsic::Sub {
                template,
                variables: None,
            } => map.serialize_entry(key, template)?,
            Intrinsic::Sub {
                template,
                variables: Some(vars),
            } => map.serialize_entry(key, &(template, vars))?,
            Intrinsic::Join { delimiter, values } => {
                map.serialize_entry(key, &(delimiter, values))?
            }
            Intrinsic::Select { index, list } => map.serialize_entry(key, &(index, list))?,
            Intrinsic::Split { delimiter, source } => {
                map.serialize_entry(key, &(delimiter, source))?
            }
            Intrinsic::If {
                condition,
                if_true,
                if_false,
            } => map.serialize_entry(key, &(condition, if_true, if_false))?,
            Intrinsic::Equals(a, b) => map.serialize_entry(key, &(a, b))?,
            Intrinsic::And(conditions) | Intrinsic::Or(conditions) => {
                map.serialize_entry(key, conditions)?
            }
            Intrinsic::Not(condition) => map.serialize_entry(key, &[condition])?,
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
            } => map.serialize_entry(key, &(map_name, top_level_key, second_level_key))?,
            Intrinsic::GetAZs(arg)
            | Intrinsic::ImportValue(arg)
            | Intrinsic::Base64(arg)
            | Intrinsic::Length(arg)
            | Intrinsic::ToJsonString(arg) => map.serialize_entry(key, arg)?,
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => map.serialize_entry(key, &(ip_block, count, cidr_bits))?,
            Intrinsic::Transform { name, parameters } => map.serialize_entry(
                key,
                &TransformArgs {
                    name: name.clone(),
                    parameters: parameters.clone(),
                },
            )?,
        }
        map.end()
    }
}

struct IntrinsicVisitor;

impl<'de> Visitor<'de> for IntrinsicVisitor {
    type Value = Intrinsic;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an intrinsic function object with exactly one key")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Intrinsic, A::Error> {
        let key: String = map
            .next_key()?
            .ok_or_else(|| A::Error::invalid_length(0, &self))?;

        let intrinsic = match key.as_str() {
            "Ref" => Intrinsic::Ref(map.next_value()?),
            "Fn::GetAtt" => match map.next_value::<GetAttArgs>()? {
                GetAttArgs::Pair(logical_name, attribute_name) => Intrinsic::GetAtt {
                    logical_name,
                    attribute_name,
                },
                GetAttArgs::Dotted(dotted) => {
                    let (logical_name, attribute_name) =
                        dotted.split_once('.').ok_or_else(|| {
                            A::Error::invalid_value(
                                de::Unexpected::Str(&dotted),
                                &"\"LogicalName.AttributeName\"",
                            )
                        })?;
                    Intrinsic::GetAtt {
                        logical_name: logical_name.to_string(),
                        attribute_name: attribute_name.to_string(),
                    }
                }
            },
            "Fn::Sub" => match map.next_value::<SubArgs>()? {
                SubArgs::Template(template) => Intrinsic::Sub {
                    template,
                    variables: None,
                },
                SubArgs::WithVariables(template, variables) => Intrinsic::Sub {
                    template,
                    variables: Some(variables),
                },
            },
            "Fn::Join" => {
                let (delimiter, values) = map.next_value()?;
                Intrinsic::Join { delimiter, values }
            }
            "Fn::Select" => {
                let (index, list) = map.next_value()?;
                Intrinsic::Select { index, list }
            }
            "Fn::Split" => {
                let (delimiter, source) = map.next_value()?;
                Intrinsic::Split { delimiter, source }
            }
            "Fn::If" => {
                let (condition, if_true, if_false) = map.next_value()?;
                Intrinsic::If {
                    condition,
                    if_true,
                    if_false,
                }
            }
            "Fn::Equals" => {
                let (a, b) = map.next_value()?;
                Intrinsic::Equals(a, b)
            }
            "Fn::And" => Intrinsic::And(map.next_value()?),
            "Fn::Or" => Intrinsic::Or(map.next_value()?),
            "Fn::Not" => {
                let (condition,): (Json,) = map.next_value()?;
                Intrinsic::Not(condition)
            }
            "Fn::FindInMap" => {
                let (map_name, top_level_key, second_level_key) = map.next_value()?;
                Intrinsic::FindInMap {
                    map_name,
                    top_level_key,
                    second_level_key,
                }
            }
            "Fn::GetAZs" => Intrinsic::GetAZs(map.next_value()?),
            "Fn::ImportValue" => Intrinsic::ImportValue(map.next_value()?),
            "Fn::Base64" => Intrinsic::Base64(map.next_value()?),
            "Fn::Cidr" => {
                let (ip_block, count, cidr_bits) = map.next_value()?;
                Intrinsic::Cidr {
                    ip_block,
                    count,
                    cidr_bits,
                }
            }
            "Condition" => Intrinsic::Condition(map.next_value()?),
            "Fn::Length" => Intrinsic::Length(map.next_value()?),
            "Fn::ToJsonString" => Intrinsic::ToJsonString(map.next_value()?),
            "Fn::Transform" => {
                let args: TransformArgs = map.next_value()?;
                Intrinsic::Transform {
                    name: args.name,
                    parameters: args.parameters,
                }
            }
            other => return Err(de::Error::unknown_variant(other, FUNCTION_NAMES)),
        };

        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }

        Ok(intrinsic)
    }
}

impl<'de> Deserialize<'de> for Intrinsic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(IntrinsicVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Json) -> Result<Intrinsic, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_ref() {
        let intrinsic = parse(json!({ "Ref": "MyQueue" })).unwrap();
        assert_eq!(intrinsic, Intrinsic::reference("MyQueue"));
        assert_eq!(
            serde_json::to_value(&intrinsic).unwrap(),
            json!({ "Ref": "MyQueue" })
        );
    }

    #[test]
    fn test_get_att_forms() {
        let array = parse(json!({ "Fn::GetAtt": ["MyQueue", "Arn"] })).unwrap();
        let dotted = parse(json!({ "Fn::GetAtt": "MyQueue.Arn" })).unwrap();
        assert_eq!(array, Intrinsic::get_att("MyQueue", "Arn"));
        assert_eq!(array, dotted);

        // Attribute names may themselves contain dots
        let nested = parse(json!({ "Fn::GetAtt": "Db.Endpoint.Address" })).unwrap();
        assert_eq!(nested, Intrinsic::get_att("Db", "Endpoint.Address"));

        // Always written in array form
        assert_eq!(
            serde_json::to_value(&dotted).unwrap(),
            json!({ "Fn::GetAtt": ["MyQueue", "Arn"] })
        );
    }

    #[test]
    fn test_get_att_without_dot_fails() {
        assert!(parse(json!({ "Fn::GetAtt": "MyQueue" })).is_err());
    }

    #[test]
    fn test_sub_forms() {
        let plain = parse(json!({ "Fn::Sub": "arn:aws:s3:::${Bucket}/*" })).unwrap();
        assert_eq!(plain, Intrinsic::sub("arn:aws:s3:::${Bucket}/*"));

        let with_vars = parse(json!({
            "Fn::Sub": ["${Name}-queue", { "Name": { "Ref": "AWS::StackName" } }]
        }))
        .unwrap();
        match &with_vars {
            Intrinsic::Sub {
                template,
                variables: Some(vars),
            } => {
                assert_eq!(template, "${Name}-queue");
                assert_eq!(vars["Name"], json!({ "Ref": "AWS::StackName" }));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            serde_json::to_value(&with_vars).unwrap(),
            json!({ "Fn::Sub": ["${Name}-queue", { "Name": { "Ref": "AWS::StackName" } }] })
        );
    }

    #[test]
    fn test_join_keeps_nested_intrinsics() {
        let join = parse(json!({ "Fn::Join": ["", ["arn:aws:sqs:", { "Ref": "AWS::Region" }]] }))
            .unwrap();
        assert_eq!(
            join,
            Intrinsic::join("", [json!("arn:aws:sqs:"), json!({ "Ref": "AWS::Region" })])
        );
    }

    #[test]
    fn test_condition_functions() {
        let not = parse(json!({ "Fn::Not": [{ "Condition": "IsProd" }] })).unwrap();
        assert_eq!(not, Intrinsic::Not(json!({ "Condition": "IsProd" })));
        assert_eq!(
            serde_json::to_value(&not).unwrap(),
            json!({ "Fn::Not": [{ "Condition": "IsProd" }] })
        );

        let equals = parse(json!({ "Fn::Equals": [{ "Ref": "Env" }, "prod"] })).unwrap();
        assert_eq!(equals.function_name(), "Fn::Equals");

        let if_ = parse(json!({ "Fn::If": ["IsProd", 10, { "Ref": "AWS::NoValue" }] })).unwrap();
        assert_eq!(
            if_,
            Intrinsic::if_("IsProd", 10, json!({ "Ref": "AWS::NoValue" }))
        );
    }

    #[test]
    fn test_select_and_cidr() {
        let select = json!({ "Fn::Select": ["0", { "Fn::GetAZs": "" }] });
        let parsed = parse(select.clone()).unwrap();
        assert_eq!(
            parsed,
            Intrinsic::Select {
                index: json!("0"),
                list: json!({ "Fn::GetAZs": "" }),
            }
        );
        assert_eq!(serde_json::to_value(&parsed).unwrap(), select);

        let cidr = json!({ "Fn::Cidr": [{ "Fn::GetAtt": ["Vpc", "CidrBlock"] }, 6, 5] });
        let parsed = parse(cidr.clone()).unwrap();
        match &parsed {
            Intrinsic::Cidr {
                count, cidr_bits, ..
            } => {
                assert_eq!(count, &json!(6));
                assert_eq!(cidr_bits, &json!(5));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(serde_json::to_value(&parsed).unwrap(), cidr);

        assert!(parse(json!({ "Fn::Cidr": ["10.0.0.0/16", 6] })).is_err());
    }

    #[test]
    fn test_find_in_map() {
        let find = json!({ "Fn::FindInMap": ["RegionMap", { "Ref": "AWS::Region" }, "Ami"] });
        let parsed = parse(find.clone()).unwrap();
        assert_eq!(
            parsed,
            Intrinsic::FindInMap {
                map_name: json!("RegionMap"),
                top_level_key: json!({ "Ref": "AWS::Region" }),
                second_level_key: json!("Ami"),
            }
        );
        assert_eq!(serde_json::to_value(&parsed).unwrap(), find);
    }

    #[test]
    fn test_single_argument_functions() {
        let cases = [
            (json!({ "Fn::GetAZs": { "Ref": "AWS::Region" } }), "Fn::GetAZs"),
            (json!({ "Fn::Length": [1, 2, 3] }), "Fn::Length"),
            (json!({ "Fn::ToJsonString": { "Key": "Value" } }), "Fn::ToJsonString"),
        ];
        for (input, name) in cases {
            let parsed = parse(input.clone()).unwrap();
            assert_eq!(parsed.function_name(), name);
            assert_eq!(serde_json::to_value(&parsed).unwrap(), input);
        }
        assert_eq!(
            parse(json!({ "Fn::GetAZs": "" })).unwrap(),
            Intrinsic::GetAZs(json!(""))
        );
    }

    #[test]
    fn test_value_functions() {
        assert!(is_value_function("Ref"));
        assert!(is_value_function("Fn::ToJsonString"));
        assert!(!is_value_function("Condition"));
        assert!(!is_value_function("Key"));
    }

    #[test]
    fn test_transform() {
        let transform = parse(json!({
            "Fn::Transform": { "Name": "AWS::Include", "Parameters": { "Location": "s3://b/k" } }
        }))
        .unwrap();
        match &transform {
            Intrinsic::Transform { name, parameters } => {
                assert_eq!(name, "AWS::Include");
                assert_eq!(parameters["Location"], json!("s3://b/k"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_intrinsic_objects() {
        assert!(parse(json!({})).is_err());
        assert!(parse(json!({ "Fn::Unknown": 1 })).is_err());
        assert!(parse(json!({ "Key": "Name" })).is_err());
        assert!(parse(json!({ "Ref": "A", "Fn::Base64": "x" })).is_err());
        assert!(parse(json!("MyQueue")).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Intrinsic::reference("Vpc").to_string(), "!Ref Vpc");
        assert_eq!(
            Intrinsic::get_att("Queue", "Arn").to_string(),
            "!GetAtt Queue.Arn"
        );
        assert_eq!(
            Intrinsic::Base64(json!("x")).to_string(),
            "Fn::Base64 ..."
        );
    }
}
