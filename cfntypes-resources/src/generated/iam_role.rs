//! AWS::IAM::Role resource type
//!
//! Generated from CloudFormation resource schema `AWS::IAM::Role`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// Contains information about an attached policy.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-iam-role-policy.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    /// The entire contents of the policy that defines permissions.
    #[serde(rename = "PolicyDocument")]
    pub policy_document: Json,
    /// The friendly name (not ARN) identifying the policy.
    #[serde(rename = "PolicyName")]
    pub policy_name: Value<String>,
}

/// A structure that represents user-provided metadata that can be associated with an IAM resource.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-iam-role-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The key name that can be used to look up or retrieve the associated value.
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The value associated with this tag.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::IAM::Role`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleProperties {
    /// The trust policy that is associated with this role. Trust policies define which entities can assume the role.
    ///
    /// Update requires: No interruption
    #[serde(rename = "AssumeRolePolicyDocument")]
    pub assume_role_policy_document: Json,
    /// A description of the role that you provide.
    ///
    /// Constraints: max length 1000
    /// Update requires: No interruption
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// A list of Amazon Resource Names (ARNs) of the IAM managed policies that you want to attach to the role.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "ManagedPolicyArns", skip_serializing_if = "Option::is_none")]
    pub managed_policy_arns: Option<Value<Vec<Value<String>>>>,
    /// The maximum session duration (in seconds) that you want to set for the specified role.
    ///
    /// Constraints: minimum 3600, maximum 43200
    /// Update requires: No interruption
    #[serde(rename = "MaxSessionDuration", skip_serializing_if = "Option::is_none")]
    pub max_session_duration: Option<Value<i64>>,
    /// The path to the role. For more information about paths, see [IAM Identifiers](https://docs.aws.amazon.com/IAM/latest/UserGuide/Using_Identifiers.html) in the *User Guide*.
    ///
    /// Update requires: Replacement
    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<Value<String>>,
    /// The ARN of the policy used to set the permissions boundary for the role.
    ///
    /// Update requires: No interruption
    #[serde(rename = "PermissionsBoundary", skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<Value<String>>,
    /// Adds or updates an inline policy document that is embedded in the specified IAM role.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Policies", skip_serializing_if = "Option::is_none")]
    pub policies: Option<Value<Vec<Policy>>>,
    /// A name for the IAM role, up to 64 characters in length.
    ///
    /// Update requires: Replacement
    #[serde(rename = "RoleName", skip_serializing_if = "Option::is_none")]
    pub role_name: Option<Value<String>>,
    /// A list of tags that are attached to the role.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
}

impl ResourceProperties for RoleProperties {
    const TYPE_NAME: &'static str = "AWS::IAM::Role";
}

/// The `AWS::IAM::Role` resource
pub type Role = Resource<RoleProperties>;

/// Documentation catalog of `AWS::IAM::Role`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::IAM::Role",
    description: "Creates a new role for your AWS-account.",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("AssumeRolePolicyDocument", PropertyKind::Json)
            .required()
            .with_description("The trust policy that is associated with this role. Trust policies define which entities can assume the role.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Description", PropertyKind::String)
            .with_description("A description of the role that you provide.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::MaxLength(1000)]),
        PropertyDoc::new("ManagedPolicyArns", PropertyKind::List(&PropertyKind::String))
            .with_description("A list of Amazon Resource Names (ARNs) of the IAM managed policies that you want to attach to the role.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("MaxSessionDuration", PropertyKind::Integer)
            .with_description("The maximum session duration (in seconds) that you want to set for the specified role.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(3600.0), Constraint::Maximum(43200.0)]),
        PropertyDoc::new("Path", PropertyKind::String)
            .with_description("The path to the role. For more information about paths, see [IAM...")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("PermissionsBoundary", PropertyKind::String)
            .with_description("The ARN of the policy used to set the permissions boundary for the role.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Policies", PropertyKind::List(&PropertyKind::Struct("Policy")))
            .with_description("Adds or updates an inline policy document that is embedded in the specified IAM role.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("RoleName", PropertyKind::String)
            .with_description("A name for the IAM role, up to 64 characters in length.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("A list of tags that are attached to the role.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
    ],
    property_types: &[
        PropertyTypeDoc {
            name: "Policy",
            description: "Contains information about an attached policy.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-iam-role-policy.html",
            properties: &[
                PropertyDoc::new("PolicyDocument", PropertyKind::Json)
                    .required()
                    .with_description("The entire contents of the policy that defines permissions."),
                PropertyDoc::new("PolicyName", PropertyKind::String)
                    .required()
                    .with_description("The friendly name (not ARN) identifying the policy."),
            ],
        },
        PropertyTypeDoc {
            name: "Tag",
            description: "A structure that represents user-provided metadata that can be associated with an IAM resource.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-iam-role-tag.html",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String)
                    .required()
                    .with_description("The key name that can be used to look up or retrieve the associated value."),
                PropertyDoc::new("Value", PropertyKind::String)
                    .required()
                    .with_description("The value associated with this tag."),
            ],
        },
    ],
    attributes: &["Arn", "RoleId"],
};
