//! Error types shared by the cfntypes crates

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A JSON document does not match the declared shape
    #[error("{path}: {message}")]
    Shape { path: String, message: String },

    /// The `Type` discriminant does not name the expected resource type
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// The document is not a CloudFormation template
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl Error {
    /// Build a shape error from a path-tracking serde failure
    pub fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let (path, message) = path_and_message(err);
        Error::Shape {
            path: if path.is_empty() {
                "(root)".to_string()
            } else {
                path
            },
            message,
        }
    }

    /// Prefix the path of a shape error with an enclosing key
    pub fn within(self, key: &str) -> Self {
        match self {
            Error::Shape { path, message } if path == "(root)" => Error::Shape {
                path: key.to_string(),
                message,
            },
            Error::Shape { path, message } => Error::Shape {
                path: if path.starts_with('[') {
                    format!("{}{}", key, path)
                } else {
                    format!("{}.{}", key, path)
                },
                message,
            },
            other => other,
        }
    }
}

/// Leads a message that carries the path of the failure below a property value
const NESTED_PATH: &str = "at `";

/// Message reported by a property value whose content failed at `path`
/// (empty when the value itself is at fault)
pub(crate) fn nested_message(path: &str, message: &str) -> String {
    if path.is_empty() {
        message.to_string()
    } else {
        format!("{}{}`: {}", NESTED_PATH, path, message)
    }
}

/// Path (empty at the root) and message of a path-tracking failure, with
/// the path carried up by a nested property value appended
pub(crate) fn path_and_message(
    err: serde_path_to_error::Error<serde_json::Error>,
) -> (String, String) {
    let outer = match err.path().to_string() {
        root if root == "." => String::new(),
        path => path,
    };
    let message = err.into_inner().to_string();
    match message
        .strip_prefix(NESTED_PATH)
        .and_then(|rest| rest.split_once("`: "))
    {
        Some((inner, rest)) => (join_path(&outer, inner), rest.to_string()),
        None => (outer, message),
    }
}

fn join_path(outer: &str, inner: &str) -> String {
    if outer.is_empty() {
        inner.to_string()
    } else if inner.starts_with('[') {
        format!("{}{}", outer, inner)
    } else {
        format!("{}.{}", outer, inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_prefixes_shape_paths() {
        let err = Error::Shape {
            path: "Tags[0].Key".to_string(),
            message: "missing field `Key`".to_string(),
        };
        assert_eq!(
            err.within("Properties").to_string(),
            "Properties.Tags[0].Key: missing field `Key`"
        );

        let root = Error::Shape {
            path: "(root)".to_string(),
            message: "invalid type".to_string(),
        };
        assert_eq!(root.within("Properties").to_string(), "Properties: invalid type");

        let index = Error::Shape {
            path: "[2]".to_string(),
            message: "invalid type".to_string(),
        };
        assert_eq!(index.within("Items").to_string(), "Items[2]: invalid type");
    }

    #[test]
    fn nested_paths_are_folded_into_the_shape_path() {
        let json = serde_json::json!({ "Outer": 1 });
        let err = serde_path_to_error::deserialize::<_, std::collections::BTreeMap<String, String>>(
            &json,
        )
        .unwrap_err();
        let (path, message) = path_and_message(err);
        assert_eq!(path, "Outer");
        assert!(message.starts_with("invalid type: integer `1`"), "{}", message);

        assert_eq!(join_path("Tags", "[0].Key"), "Tags[0].Key");
        assert_eq!(join_path("Code", "ZipFile"), "Code.ZipFile");
        assert_eq!(join_path("", "[3]"), "[3]");
        assert_eq!(nested_message("", "boom"), "boom");
        assert_eq!(nested_message("[0]", "boom"), "at `[0]`: boom");
    }

    #[test]
    fn within_leaves_other_errors_alone() {
        let err = Error::UnknownResourceType("Custom::Thing".to_string());
        assert_eq!(err.clone().within("Resources"), err);
    }
}
