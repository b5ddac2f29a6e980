//! Structural check of a whole CloudFormation template
//!
//! Every entry under `Resources` whose `Type` is shipped by this crate is read
//! into its typed declaration. Types this crate does not know about are
//! skipped rather than failed.

use std::fmt;

use cfntypes_core::{Error, Json, Result};

use crate::registry;

/// Result of checking one resource entry
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Conforms,
    /// The type is not shipped (custom resources, unsupported types)
    Skipped,
    Failed(Error),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Conforms => write!(f, "ok"),
            Outcome::Skipped => write!(f, "skipped"),
            Outcome::Failed(e) => write!(f, "failed: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceReport {
    pub logical_id: String,
    pub type_name: Option<String>,
    pub outcome: Outcome,
}

/// Per-resource outcomes, in logical-id order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateReport {
    pub resources: Vec<ResourceReport>,
}

impl TemplateReport {
    pub fn is_conforming(&self) -> bool {
        self.failed() == 0
    }

    pub fn conforming(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Conforms))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = &ResourceReport> {
        self.resources
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.resources.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Check every resource of a template document
pub fn check_template(template: &Json) -> Result<TemplateReport> {
    let root = template
        .as_object()
        .ok_or_else(|| Error::InvalidTemplate("template is not a JSON object".to_string()))?;
    let resources = root
        .get("Resources")
        .ok_or_else(|| Error::InvalidTemplate("missing `Resources` section".to_string()))?
        .as_object()
        .ok_or_else(|| Error::InvalidTemplate("`Resources` is not an object".to_string()))?;

    let mut logical_ids: Vec<&String> = resources.keys().collect();
    logical_ids.sort();

    let mut report = TemplateReport::default();
    for logical_id in logical_ids {
        let declaration = &resources[logical_id.as_str()];
        let entry = check_entry(logical_id, declaration);
        log::debug!("{}: {}", logical_id, entry.outcome);
        report.resources.push(entry);
    }
    Ok(report)
}

fn check_entry(logical_id: &str, declaration: &Json) -> ResourceReport {
    let type_name = declaration
        .get("Type")
        .and_then(Json::as_str)
        .map(str::to_string);

    let outcome = match (&type_name, declaration.is_object()) {
        (_, false) => Outcome::Failed(Error::Shape {
            path: logical_id.to_string(),
            message: "resource declaration is not an object".to_string(),
        }),
        (None, true) => Outcome::Failed(Error::Shape {
            path: format!("{}.Type", logical_id),
            message: "missing or non-string `Type`".to_string(),
        }),
        (Some(name), true) => match registry::lookup(name) {
            Some(registered) => match registered.check(declaration) {
                Ok(()) => Outcome::Conforms,
                Err(e) => Outcome::Failed(e.within(logical_id)),
            },
            None => Outcome::Skipped,
        },
    };

    ResourceReport {
        logical_id: logical_id.to_string(),
        type_name,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_template_classifies_resources() {
        let template = json!({
            "AWSTemplateFormatVersion": "2010-09-09",
            "Resources": {
                "Queue": { "Type": "AWS::SQS::Queue", "Properties": {} },
                "Widget": { "Type": "Custom::Widget", "Properties": { "Anything": 1 } },
                "Table": { "Type": "AWS::DynamoDB::Table", "Properties": {} }
            }
        });

        let report = check_template(&template).unwrap();
        let ids: Vec<&str> = report
            .resources
            .iter()
            .map(|r| r.logical_id.as_str())
            .collect();
        assert_eq!(ids, vec!["Queue", "Table", "Widget"]);
        assert_eq!(report.conforming(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_conforming());

        let failure = report.failures().next().unwrap();
        assert_eq!(failure.type_name.as_deref(), Some("AWS::DynamoDB::Table"));
        match &failure.outcome {
            Outcome::Failed(Error::Shape { path, message }) => {
                assert_eq!(path, "Table.Properties");
                assert!(message.contains("KeySchema"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_check_template_malformed_entries() {
        let template = json!({
            "Resources": {
                "NotAnObject": "AWS::SQS::Queue",
                "NoType": { "Properties": {} },
                "NumericType": { "Type": 42 }
            }
        });

        let report = check_template(&template).unwrap();
        assert_eq!(report.failed(), 3);
        assert_eq!(report.resources[0].logical_id, "NoType");
        assert_eq!(report.resources[2].type_name, None);
    }

    #[test]
    fn test_check_template_empty_resources() {
        let report = check_template(&json!({ "Resources": {} })).unwrap();
        assert!(report.is_conforming());
        assert!(report.resources.is_empty());
    }

    #[test]
    fn test_check_template_rejects_non_templates() {
        for doc in [
            json!([]),
            json!({ "Parameters": {} }),
            json!({ "Resources": [] }),
        ] {
            let err = check_template(&doc).unwrap_err();
            assert!(matches!(err, Error::InvalidTemplate(_)), "{:?}", err);
        }
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Conforms.to_string(), "ok");
        assert_eq!(Outcome::Skipped.to_string(), "skipped");
        let failed = Outcome::Failed(Error::UnknownResourceType("X".to_string()));
        assert_eq!(failed.to_string(), "failed: Unknown resource type: X");
    }
}
