//! AWS::Logs::LogGroup resource type
//!
//! Generated from CloudFormation resource schema `AWS::Logs::LogGroup`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// A key-value pair to associate with a resource.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-logs-loggroup-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The key name of the tag. You can specify a value that is 1 to 128 Unicode characters in length and cannot be prefixed with ``aws:``.
    ///
    /// Constraints: min length 1, max length 128
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The value for the tag. You can specify a value that is 0 to 256 Unicode characters in length and cannot be prefixed with ``aws:``.
    ///
    /// Constraints: min length 0, max length 256
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::Logs::LogGroup`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-loggroup.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogGroupProperties {
    /// Creates a data protection policy and assigns it to the log group.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DataProtectionPolicy", skip_serializing_if = "Option::is_none")]
    pub data_protection_policy: Option<Json>,
    /// Creates or updates a *field index policy* for the specified log group.
    ///
    /// Update requires: No interruption
    #[serde(rename = "FieldIndexPolicies", skip_serializing_if = "Option::is_none")]
    pub field_index_policies: Option<Value<Vec<Json>>>,
    /// The Amazon Resource Name (ARN) of the KMS key to use when encrypting log data.
    ///
    /// Constraints: max length 256
    /// Update requires: No interruption
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Value<String>>,
    /// Specifies the log group class for this log group.
    ///
    /// Allowed values: `STANDARD`, `INFREQUENT_ACCESS`
    /// Update requires: Replacement
    #[serde(rename = "LogGroupClass", skip_serializing_if = "Option::is_none")]
    pub log_group_class: Option<Value<String>>,
    /// The name of the log group. If you don't specify a name, CFNlong generates a unique ID for the log group.
    ///
    /// Constraints: min length 1, max length 512, pattern `^[.\-_/#A-Za-z0-9]{1,512}\Z`
    /// Update requires: Replacement
    #[serde(rename = "LogGroupName", skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<Value<String>>,
    /// The number of days to retain the log events in the specified log group.
    ///
    /// Allowed values: `1`, `3`, `5`, `7`, `14`, `30`, `60`, `90`, `120`, `150`, `180`, `365`, `400`, `545`, `731`, `1096`, `1827`, `2192`, `2557`, `2922`, `3288`, `3653`
    /// Update requires: No interruption
    #[serde(rename = "RetentionInDays", skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<Value<i64>>,
    /// An array of key-value pairs to apply to the log group.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
}

impl ResourceProperties for LogGroupProperties {
    const TYPE_NAME: &'static str = "AWS::Logs::LogGroup";
}

/// The `AWS::Logs::LogGroup` resource
pub type LogGroup = Resource<LogGroupProperties>;

/// Documentation catalog of `AWS::Logs::LogGroup`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::Logs::LogGroup",
    description: "The ``AWS::Logs::LogGroup`` resource specifies a log group. A log group defines common properties for log streams, such as their retention and access...",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-loggroup.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("DataProtectionPolicy", PropertyKind::Json)
            .with_description("Creates a data protection policy and assigns it to the log group.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("FieldIndexPolicies", PropertyKind::List(&PropertyKind::Json))
            .with_description("Creates or updates a *field index policy* for the specified log group.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("KmsKeyId", PropertyKind::String)
            .with_description("The Amazon Resource Name (ARN) of the KMS key to use when encrypting log data.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::MaxLength(256)]),
        PropertyDoc::new("LogGroupClass", PropertyKind::String)
            .with_description("Specifies the log group class for this log group.")
            .with_update_requires(UpdateRequires::Replacement)
            .with_allowed_values(&["STANDARD", "INFREQUENT_ACCESS"]),
        PropertyDoc::new("LogGroupName", PropertyKind::String)
            .with_description("The name of the log group. If you don't specify a name, CFNlong generates a unique ID for the log group.")
            .with_update_requires(UpdateRequires::Replacement)
            .with_constraints(&[
                Constraint::MinLength(1),
                Constraint::MaxLength(512),
                Constraint::Pattern("^[.\\-_/#A-Za-z0-9]{1,512}\\Z"),
            ]),
        PropertyDoc::new("RetentionInDays", PropertyKind::Integer)
            .with_description("The number of days to retain the log events in the specified log group.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&[
                "1", "3", "5", "7", "14", "30", "60", "90", "120", "150", "180", "365", "400",
                "545", "731", "1096", "1827", "2192", "2557", "2922", "3288", "3653",
            ]),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("An array of key-value pairs to apply to the log group.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
    ],
    property_types: &[PropertyTypeDoc {
        name: "Tag",
        description: "A key-value pair to associate with a resource.",
        documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-logs-loggroup-tag.html",
        properties: &[
            PropertyDoc::new("Key", PropertyKind::String)
                .required()
                .with_description("The key name of the tag. You can specify a value that is 1 to 128 Unicode characters in length and cannot be prefixed with ``aws:``.")
                .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(128)]),
            PropertyDoc::new("Value", PropertyKind::String)
                .required()
                .with_description("The value for the tag. You can specify a value that is 0 to 256 Unicode characters in length and cannot be prefixed with ``aws:``.")
                .with_constraints(&[Constraint::MinLength(0), Constraint::MaxLength(256)]),
        ],
    }],
    attributes: &["Arn"],
};
