//! AWS::KMS::Key resource type
//!
//! Generated from CloudFormation resource schema `AWS::KMS::Key`.
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
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kms-key-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The key name of the tag.
    ///
    /// Constraints: min length 1, max length 128
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The value for the tag.
    ///
    /// Constraints: min length 0, max length 256
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::KMS::Key`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-kms-key.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyProperties {
    /// Skips ("bypasses") the key policy lockout safety check. The default value is false.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "BypassPolicyLockoutSafetyCheck",
        skip_serializing_if = "Option::is_none"
    )]
    pub bypass_policy_lockout_safety_check: Option<Value<bool>>,
    /// A description of the KMS key. Use a description that helps you to distinguish this KMS key from others in the account, such as its intended use.
    ///
    /// Constraints: min length 0, max length 8192
    /// Update requires: No interruption
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// Enables automatic rotation of the key material for the specified KMS key. By default, automatic key rotation is not enabled.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EnableKeyRotation", skip_serializing_if = "Option::is_none")]
    pub enable_key_rotation: Option<Value<bool>>,
    /// Specifies whether the KMS key is enabled. Disabled KMS keys cannot be used in cryptographic operations.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,
    /// The key policy to attach to the KMS key.
    ///
    /// Update requires: No interruption
    #[serde(rename = "KeyPolicy", skip_serializing_if = "Option::is_none")]
    pub key_policy: Option<Json>,
    /// Specifies the type of KMS key to create. The default value, ``SYMMETRIC_DEFAULT``, creates a KMS key with a 256-bit symmetric key for encryption and decryption.
    ///
    /// Allowed values: `SYMMETRIC_DEFAULT`, `RSA_2048`, `RSA_3072`, `RSA_4096`, `ECC_NIST_P256`, `ECC_NIST_P384`, `ECC_NIST_P521`, `ECC_SECG_P256K1`, `HMAC_224`, `HMAC_256`, `HMAC_384`, `HMAC_512`, `SM2`
    /// Update requires: No interruption
    #[serde(rename = "KeySpec", skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<Value<String>>,
    /// Determines the [cryptographic operations](https://docs.aws.amazon.com/kms/latest/developerguide/concepts.html#cryptographic-operations) for which you can use the KMS key.
    ///
    /// Allowed values: `ENCRYPT_DECRYPT`, `SIGN_VERIFY`, `GENERATE_VERIFY_MAC`, `KEY_AGREEMENT`
    /// Update requires: No interruption
    #[serde(rename = "KeyUsage", skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<Value<String>>,
    /// Creates a multi-Region primary key that you can replicate in other AWS-Regions.
    ///
    /// Update requires: No interruption
    #[serde(rename = "MultiRegion", skip_serializing_if = "Option::is_none")]
    pub multi_region: Option<Value<bool>>,
    /// The source of the key material for the KMS key. You cannot change the origin after you create the KMS key.
    ///
    /// Allowed values: `AWS_KMS`, `EXTERNAL`
    /// Update requires: No interruption
    #[serde(rename = "Origin", skip_serializing_if = "Option::is_none")]
    pub origin: Option<Value<String>>,
    /// Specifies the number of days in the waiting period before KMS deletes a KMS key that has been removed from a CloudFormation stack.
    ///
    /// Constraints: minimum 7, maximum 30
    /// Update requires: No interruption
    #[serde(rename = "PendingWindowInDays", skip_serializing_if = "Option::is_none")]
    pub pending_window_in_days: Option<Value<i64>>,
    /// Specifies a custom period of time between each rotation date. If no value is specified, the default value is 365 days.
    ///
    /// Constraints: minimum 90, maximum 2560
    /// Update requires: No interruption
    #[serde(rename = "RotationPeriodInDays", skip_serializing_if = "Option::is_none")]
    pub rotation_period_in_days: Option<Value<i64>>,
    /// Assigns one or more tags to the replica key.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
}

impl ResourceProperties for KeyProperties {
    const TYPE_NAME: &'static str = "AWS::KMS::Key";
}

/// The `AWS::KMS::Key` resource
pub type Key = Resource<KeyProperties>;

/// Documentation catalog of `AWS::KMS::Key`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::KMS::Key",
    description: "The ``AWS::KMS::Key`` resource specifies an [KMS key](https://docs.aws.amazon.com/kms/latest/developerguide/concepts.html#kms_keys) in KMSlong. You...",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-kms-key.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("BypassPolicyLockoutSafetyCheck", PropertyKind::Boolean)
            .with_description("Skips (\"bypasses\") the key policy lockout safety check. The default value is false.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Description", PropertyKind::String)
            .with_description("A description of the KMS key. Use a description that helps you to distinguish this KMS key from others in the account, such as its intended use.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::MinLength(0), Constraint::MaxLength(8192)]),
        PropertyDoc::new("EnableKeyRotation", PropertyKind::Boolean)
            .with_description("Enables automatic rotation of the key material for the specified KMS key. By default, automatic key rotation is not enabled.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Enabled", PropertyKind::Boolean)
            .with_description("Specifies whether the KMS key is enabled. Disabled KMS keys cannot be used in cryptographic operations.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("KeyPolicy", PropertyKind::Json)
            .with_description("The key policy to attach to the KMS key.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("KeySpec", PropertyKind::String)
            .with_description("Specifies the type of KMS key to create. The default value, ``SYMMETRIC_DEFAULT``, creates a KMS key with a 256-bit symmetric key for encryption...")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&[
                "SYMMETRIC_DEFAULT",
                "RSA_2048",
                "RSA_3072",
                "RSA_4096",
                "ECC_NIST_P256",
                "ECC_NIST_P384",
                "ECC_NIST_P521",
                "ECC_SECG_P256K1",
                "HMAC_224",
                "HMAC_256",
                "HMAC_384",
                "HMAC_512",
                "SM2",
            ]),
        PropertyDoc::new("KeyUsage", PropertyKind::String)
            .with_description("Determines the [cryptographic operations](https://docs.aws.amazon.com/kms/latest/developerguide/concepts.html#cryptographic-operations) for which...")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&[
                "ENCRYPT_DECRYPT",
                "SIGN_VERIFY",
                "GENERATE_VERIFY_MAC",
                "KEY_AGREEMENT",
            ]),
        PropertyDoc::new("MultiRegion", PropertyKind::Boolean)
            .with_description("Creates a multi-Region primary key that you can replicate in other AWS-Regions.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Origin", PropertyKind::String)
            .with_description("The source of the key material for the KMS key. You cannot change the origin after you create the KMS key.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&["AWS_KMS", "EXTERNAL"]),
        PropertyDoc::new("PendingWindowInDays", PropertyKind::Integer)
            .with_description("Specifies the number of days in the waiting period before KMS deletes a KMS key that has been removed from a CloudFormation stack.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(7.0), Constraint::Maximum(30.0)]),
        PropertyDoc::new("RotationPeriodInDays", PropertyKind::Integer)
            .with_description("Specifies a custom period of time between each rotation date. If no value is specified, the default value is 365 days.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(90.0), Constraint::Maximum(2560.0)]),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("Assigns one or more tags to the replica key.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
    ],
    property_types: &[PropertyTypeDoc {
        name: "Tag",
        description: "A key-value pair to associate with a resource.",
        documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kms-key-tag.html",
        properties: &[
            PropertyDoc::new("Key", PropertyKind::String)
                .required()
                .with_description("The key name of the tag.")
                .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(128)]),
            PropertyDoc::new("Value", PropertyKind::String)
                .required()
                .with_description("The value for the tag.")
                .with_constraints(&[Constraint::MinLength(0), Constraint::MaxLength(256)]),
        ],
    }],
    attributes: &["Arn", "KeyId"],
};
