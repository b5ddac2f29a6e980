//! Value - a literal or an intrinsic function placeholder

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error;
use crate::intrinsic::{self, Intrinsic};

/// Free-form JSON (policy documents, `Metadata`, untyped objects)
pub type Json = serde_json::Value;

/// A property value: either a literal `T` or an intrinsic that
/// CloudFormation resolves at deploy time.
///
/// A single-key object whose key names a value function, such as
/// `{ "Ref": "X" }`, is always read as an intrinsic. Anything else must be a
/// valid `T`, and a mismatch below the value keeps its own path and reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value<T> {
    Intrinsic(Intrinsic),
    Literal(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        if is_function_call(&json) {
            return Intrinsic::deserialize(json)
                .map(Value::Intrinsic)
                .map_err(D::Error::custom);
        }
        serde_path_to_error::deserialize(json)
            .map(Value::Literal)
            .map_err(|err| {
                let (path, message) = error::path_and_message(err);
                D::Error::custom(error::nested_message(&path, &message))
            })
    }
}

fn is_function_call(json: &Json) -> bool {
    match json {
        Json::Object(map) if map.len() == 1 => map
            .keys()
            .next()
            .is_some_and(|key| intrinsic::is_value_function(key)),
        _ => false,
    }
}

impl<T> Value<T> {
    pub fn literal(value: T) -> Self {
        Value::Literal(value)
    }

    pub fn as_literal(&self) -> Option<&T> {
        match self {
            Value::Literal(value) => Some(value),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn into_literal(self) -> Option<T> {
        match self {
            Value::Literal(value) => Some(value),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Intrinsic(intrinsic) => Some(intrinsic),
            Value::Literal(_) => None,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }

    /// Transform the literal, leaving intrinsics untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Value<U> {
        match self {
            Value::Literal(value) => Value::Literal(f(value)),
            Value::Intrinsic(intrinsic) => Value::Intrinsic(intrinsic),
        }
    }
}

impl<T: Default> Default for Value<T> {
    fn default() -> Self {
        Value::Literal(T::default())
    }
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(value) => value.fmt(f),
            Value::Intrinsic(intrinsic) => intrinsic.fmt(f),
        }
    }
}

impl<T> From<Intrinsic> for Value<T> {
    fn from(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(intrinsic)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_string())
    }
}

impl From<String> for Value<String> {
    fn from(value: String) -> Self {
        Value::Literal(value)
    }
}

impl From<bool> for Value<bool> {
    fn from(value: bool) -> Self {
        Value::Literal(value)
    }
}

impl From<i64> for Value<i64> {
    fn from(value: i64) -> Self {
        Value::Literal(value)
    }
}

impl From<i32> for Value<i64> {
    fn from(value: i32) -> Self {
        Value::Literal(i64::from(value))
    }
}

impl From<f64> for Value<f64> {
    fn from(value: f64) -> Self {
        Value::Literal(value)
    }
}

impl<T> From<Vec<T>> for Value<Vec<T>> {
    fn from(values: Vec<T>) -> Self {
        Value::Literal(values)
    }
}

impl<T> From<BTreeMap<String, T>> for Value<BTreeMap<String, T>> {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Literal(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_and_intrinsic_deserialize() {
        let literal: Value<String> = serde_json::from_value(json!("my-queue")).unwrap();
        assert_eq!(literal, Value::from("my-queue"));

        let reference: Value<String> = serde_json::from_value(json!({ "Ref": "Name" })).unwrap();
        assert_eq!(reference.as_intrinsic(), Some(&Intrinsic::reference("Name")));
    }

    #[test]
    fn test_wrong_primitive_type_fails() {
        assert!(serde_json::from_value::<Value<bool>>(json!("true")).is_err());
        assert!(serde_json::from_value::<Value<i64>>(json!(1.5)).is_err());
        assert!(serde_json::from_value::<Value<String>>(json!(42)).is_err());
        assert!(serde_json::from_value::<Value<Vec<Value<String>>>>(json!("a")).is_err());
    }

    #[test]
    fn test_mismatch_keeps_reason_and_path() {
        let err = serde_json::from_value::<Value<i64>>(json!("sixty")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid type: string \"sixty\", expected i64"
        );

        let err =
            serde_json::from_value::<Value<Vec<Value<String>>>>(json!(["a", 7])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "at `[1]`: invalid type: integer `7`, expected a string"
        );
    }

    #[test]
    fn test_condition_key_is_a_literal_map() {
        let value: Value<BTreeMap<String, Value<String>>> =
            serde_json::from_value(json!({ "Condition": "prod" })).unwrap();
        let entries = value.as_literal().unwrap();
        assert_eq!(entries["Condition"], Value::from("prod"));

        // Other single-key objects are only intrinsics when the key is a function
        let value: Value<BTreeMap<String, Value<String>>> =
            serde_json::from_value(json!({ "Team": "core" })).unwrap();
        assert!(!value.is_intrinsic());
    }

    #[test]
    fn test_malformed_intrinsic_is_not_read_as_literal() {
        let err = serde_json::from_value::<Value<String>>(json!({ "Fn::GetAtt": "NoDot" }))
            .unwrap_err();
        assert!(err.to_string().contains("LogicalName.AttributeName"), "{}", err);
    }

    #[test]
    fn test_number_accepts_integers() {
        let value: Value<f64> = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(value, Value::from(5.0));
    }

    #[test]
    fn test_list_elements_may_be_intrinsics() {
        let value: Value<Vec<Value<String>>> =
            serde_json::from_value(json!(["sg-123", { "Ref": "WebSg" }])).unwrap();
        let items = value.as_literal().unwrap();
        assert_eq!(items[0], Value::from("sg-123"));
        assert!(items[1].is_intrinsic());

        // The whole list may be an intrinsic as well
        let whole: Value<Vec<Value<String>>> =
            serde_json::from_value(json!({ "Fn::Split": [",", { "Ref": "Ids" }] })).unwrap();
        assert!(whole.is_intrinsic());
    }

    #[test]
    fn test_serializes_transparently() {
        assert_eq!(serde_json::to_value(Value::<bool>::from(true)).unwrap(), json!(true));
        let intrinsic: Value<bool> = Intrinsic::reference("Flag").into();
        assert_eq!(
            serde_json::to_value(intrinsic).unwrap(),
            json!({ "Ref": "Flag" })
        );
    }

    #[test]
    fn test_map_keeps_intrinsic() {
        let literal = Value::<i64>::Literal(3).map(|n| n * 2);
        assert_eq!(literal, Value::Literal(6));

        let intrinsic: Value<i64> = Intrinsic::reference("Count").into();
        assert!(intrinsic.map(|n| n * 2).is_intrinsic());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::<String>::from("abc").to_string(), "abc");
        let intrinsic: Value<String> = Intrinsic::get_att("Queue", "Arn").into();
        assert_eq!(intrinsic.to_string(), "!GetAtt Queue.Arn");
    }
}
