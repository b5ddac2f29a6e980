//! AWS::ECR::Repository resource type
//!
//! Generated from CloudFormation resource schema `AWS::ECR::Repository`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// The encryption configuration for the repository. This determines how the contents of your repository are encrypted at rest.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-encryptionconfiguration.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptionConfiguration {
    /// The encryption type to use.
    ///
    /// Allowed values: `AES256`, `KMS`, `KMS_DSSE`
    #[serde(rename = "EncryptionType")]
    pub encryption_type: Value<String>,
    /// If you use the ``KMS`` encryption type, specify the KMS key to use for encryption.
    ///
    /// Constraints: min length 1, max length 2048
    #[serde(rename = "KmsKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<Value<String>>,
}

/// The image scanning configuration for a repository.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-imagescanningconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageScanningConfiguration {
    /// The setting that determines whether images are scanned after being pushed to a repository.
    #[serde(rename = "ScanOnPush", skip_serializing_if = "Option::is_none")]
    pub scan_on_push: Option<Value<bool>>,
}

/// The ``LifecyclePolicy`` property type specifies a lifecycle policy.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-lifecyclepolicy.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LifecyclePolicy {
    /// The JSON repository policy text to apply to the repository.
    ///
    /// Constraints: min length 100, max length 30720
    #[serde(rename = "LifecyclePolicyText", skip_serializing_if = "Option::is_none")]
    pub lifecycle_policy_text: Option<Value<String>>,
    /// The AWS account ID associated with the registry that contains the repository.
    ///
    /// Constraints: pattern `^[0-9]{12}$`
    #[serde(rename = "RegistryId", skip_serializing_if = "Option::is_none")]
    pub registry_id: Option<Value<String>>,
}

/// The metadata to apply to a resource to help you categorize and organize them.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// One part of a key-value pair that make up a tag.
    ///
    /// Constraints: min length 1, max length 127
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// A ``value`` acts as a descriptor within a tag category (key).
    ///
    /// Constraints: min length 0, max length 255
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::ECR::Repository`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ecr-repository.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryProperties {
    /// If true, deleting the repository force deletes the contents of the repository.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EmptyOnDelete", skip_serializing_if = "Option::is_none")]
    pub empty_on_delete: Option<Value<bool>>,
    /// The encryption configuration for the repository.
    ///
    /// Update requires: Replacement
    #[serde(
        rename = "EncryptionConfiguration",
        skip_serializing_if = "Option::is_none"
    )]
    pub encryption_configuration: Option<Value<EncryptionConfiguration>>,
    /// The image scanning configuration for the repository.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "ImageScanningConfiguration",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_scanning_configuration: Option<Value<ImageScanningConfiguration>>,
    /// The tag mutability setting for the repository. If this parameter is omitted, the default setting of ``MUTABLE`` will be used.
    ///
    /// Allowed values: `MUTABLE`, `IMMUTABLE`
    /// Update requires: No interruption
    #[serde(rename = "ImageTagMutability", skip_serializing_if = "Option::is_none")]
    pub image_tag_mutability: Option<Value<String>>,
    /// Creates or updates a lifecycle policy.
    ///
    /// Update requires: No interruption
    #[serde(rename = "LifecyclePolicy", skip_serializing_if = "Option::is_none")]
    pub lifecycle_policy: Option<Value<LifecyclePolicy>>,
    /// The name to use for the repository. The repository name may be specified on its own (such as ``nginx-web-app``) or it can be prepended with a namespace to group the repository into a category (such as ``project-a/nginx-web-app``).
    ///
    /// Constraints: min length 2, max length 256, pattern `^(?=.{2,256}$)((?:[a-z0-9]+(?:[._-][a-z0-9]+)*/)*[a-z0-9]+(?:[._-][a-z0-9]+)*)$`
    /// Update requires: Replacement
    #[serde(rename = "RepositoryName", skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<Value<String>>,
    /// The JSON repository policy text to apply to the repository.
    ///
    /// Update requires: No interruption
    #[serde(rename = "RepositoryPolicyText", skip_serializing_if = "Option::is_none")]
    pub repository_policy_text: Option<Json>,
    /// An array of key-value pairs to apply to this resource.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
}

impl ResourceProperties for RepositoryProperties {
    const TYPE_NAME: &'static str = "AWS::ECR::Repository";
}

/// The `AWS::ECR::Repository` resource
pub type Repository = Resource<RepositoryProperties>;

/// Documentation catalog of `AWS::ECR::Repository`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::ECR::Repository",
    description: "The ``AWS::ECR::Repository`` resource specifies an Amazon Elastic Container Registry (Amazon ECR) repository, where users can push and pull Docker...",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ecr-repository.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("EmptyOnDelete", PropertyKind::Boolean)
            .with_description("If true, deleting the repository force deletes the contents of the repository.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new(
            "EncryptionConfiguration",
            PropertyKind::Struct("EncryptionConfiguration"),
        )
        .with_description("The encryption configuration for the repository.")
        .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new(
            "ImageScanningConfiguration",
            PropertyKind::Struct("ImageScanningConfiguration"),
        )
        .with_description("The image scanning configuration for the repository.")
        .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("ImageTagMutability", PropertyKind::String)
            .with_description("The tag mutability setting for the repository. If this parameter is omitted, the default setting of ``MUTABLE`` will be used.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&["MUTABLE", "IMMUTABLE"]),
        PropertyDoc::new("LifecyclePolicy", PropertyKind::Struct("LifecyclePolicy"))
            .with_description("Creates or updates a lifecycle policy.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("RepositoryName", PropertyKind::String)
            .with_description("The name to use for the repository. The repository name may be specified on its own (such as ``nginx-web-app``) or it can be prepended with a...")
            .with_update_requires(UpdateRequires::Replacement)
            .with_constraints(&[
                Constraint::MinLength(2),
                Constraint::MaxLength(256),
                Constraint::Pattern(
                    "^(?=.{2,256}$)((?:[a-z0-9]+(?:[._-][a-z0-9]+)*/)*[a-z0-9]+(?:[._-][a-z0-9]+)*)$",
                ),
            ]),
        PropertyDoc::new("RepositoryPolicyText", PropertyKind::Json)
            .with_description("The JSON repository policy text to apply to the repository.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("An array of key-value pairs to apply to this resource.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
    ],
    property_types: &[
        PropertyTypeDoc {
            name: "EncryptionConfiguration",
            description: "The encryption configuration for the repository. This determines how the contents of your repository are encrypted at rest.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-encryptionconfiguration.html",
            properties: &[
                PropertyDoc::new("EncryptionType", PropertyKind::String)
                    .required()
                    .with_description("The encryption type to use.")
                    .with_allowed_values(&["AES256", "KMS", "KMS_DSSE"]),
                PropertyDoc::new("KmsKey", PropertyKind::String)
                    .with_description("If you use the ``KMS`` encryption type, specify the KMS key to use for encryption.")
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(2048)]),
            ],
        },
        PropertyTypeDoc {
            name: "ImageScanningConfiguration",
            description: "The image scanning configuration for a repository.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-imagescanningconfiguration.html",
            properties: &[PropertyDoc::new("ScanOnPush", PropertyKind::Boolean)
                .with_description("The setting that determines whether images are scanned after being pushed to a repository.")],
        },
        PropertyTypeDoc {
            name: "LifecyclePolicy",
            description: "The ``LifecyclePolicy`` property type specifies a lifecycle policy.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-lifecyclepolicy.html",
            properties: &[
                PropertyDoc::new("LifecyclePolicyText", PropertyKind::String)
                    .with_description("The JSON repository policy text to apply to the repository.")
                    .with_constraints(&[Constraint::MinLength(100), Constraint::MaxLength(30720)]),
                PropertyDoc::new("RegistryId", PropertyKind::String)
                    .with_description("The AWS account ID associated with the registry that contains the repository.")
                    .with_constraints(&[Constraint::Pattern("^[0-9]{12}$")]),
            ],
        },
        PropertyTypeDoc {
            name: "Tag",
            description: "The metadata to apply to a resource to help you categorize and organize them.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ecr-repository-tag.html",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String)
                    .required()
                    .with_description("One part of a key-value pair that make up a tag.")
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(127)]),
                PropertyDoc::new("Value", PropertyKind::String)
                    .required()
                    .with_description("A ``value`` acts as a descriptor within a tag category (key).")
                    .with_constraints(&[Constraint::MinLength(0), Constraint::MaxLength(255)]),
            ],
        },
    ],
    attributes: &["Arn", "RepositoryUri"],
};
