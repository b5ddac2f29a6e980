//! AWS::SecretsManager::Secret resource type
//!
//! Generated from CloudFormation resource schema `AWS::SecretsManager::Secret`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// Generates a random password.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-secretsmanager-secret-generatesecretstring.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSecretString {
    /// A string of the characters that you don't want in the password.
    #[serde(rename = "ExcludeCharacters", skip_serializing_if = "Option::is_none")]
    pub exclude_characters: Option<Value<String>>,
    /// Specifies whether to exclude lowercase letters from the password.
    #[serde(rename = "ExcludeLowercase", skip_serializing_if = "Option::is_none")]
    pub exclude_lowercase: Option<Value<bool>>,
    /// Specifies whether to exclude numbers from the password.
    #[serde(rename = "ExcludeNumbers", skip_serializing_if = "Option::is_none")]
    pub exclude_numbers: Option<Value<bool>>,
    /// Specifies whether to exclude the following punctuation characters from the password.
    #[serde(rename = "ExcludePunctuation", skip_serializing_if = "Option::is_none")]
    pub exclude_punctuation: Option<Value<bool>>,
    /// Specifies whether to exclude uppercase letters from the password.
    #[serde(rename = "ExcludeUppercase", skip_serializing_if = "Option::is_none")]
    pub exclude_uppercase: Option<Value<bool>>,
    /// The JSON key name for the key/value pair, where the value is the generated password.
    #[serde(rename = "GenerateStringKey", skip_serializing_if = "Option::is_none")]
    pub generate_string_key: Option<Value<String>>,
    /// Specifies whether to include the space character.
    #[serde(rename = "IncludeSpace", skip_serializing_if = "Option::is_none")]
    pub include_space: Option<Value<bool>>,
    /// The length of the password. If you don't include this parameter, the default length is 32 characters.
    #[serde(rename = "PasswordLength", skip_serializing_if = "Option::is_none")]
    pub password_length: Option<Value<i64>>,
    /// Specifies whether to include at least one upper and lowercase letter, one number, and one punctuation.
    #[serde(
        rename = "RequireEachIncludedType",
        skip_serializing_if = "Option::is_none"
    )]
    pub require_each_included_type: Option<Value<bool>>,
    /// A template that the generated string must match.
    #[serde(rename = "SecretStringTemplate", skip_serializing_if = "Option::is_none")]
    pub secret_string_template: Option<Value<String>>,
}

/// Specifies a ``Region`` and the ``KmsKeyId`` for a replica secret.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-secretsmanager-secret-replicaregion.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplicaRegion {
    /// The ARN, key ID, or alias of the KMS key to encrypt the secret.
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Value<String>>,
    /// A string that represents a ``Region``, for example "us-east-1".
    #[serde(rename = "Region")]
    pub region: Value<String>,
}

/// A structure that contains information about a tag.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-secretsmanager-secret-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The key identifier, or name, of the tag.
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The string value associated with the key of the tag.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::SecretsManager::Secret`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-secretsmanager-secret.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretProperties {
    /// The description of the secret.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// A structure that specifies how to generate a password to encrypt and store in the secret.
    /// Either ``GenerateSecretString`` or ``SecretString`` must have a value, but not both.
    ///
    /// Update requires: No interruption
    #[serde(rename = "GenerateSecretString", skip_serializing_if = "Option::is_none")]
    pub generate_secret_string: Option<Value<GenerateSecretString>>,
    /// The ARN, key ID, or alias of the KMS key that Secrets Manager uses to encrypt the secret value in the secret.
    ///
    /// Update requires: No interruption
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Value<String>>,
    /// The name of the new secret. The secret name can contain ASCII letters, numbers, and the following characters: /_+=.@-
    ///
    /// Update requires: Replacement
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value<String>>,
    /// A custom type that specifies a ``Region`` and the ``KmsKeyId`` for a replica secret.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "ReplicaRegions", skip_serializing_if = "Option::is_none")]
    pub replica_regions: Option<Value<Vec<ReplicaRegion>>>,
    /// The text to encrypt and store in the secret. We recommend you use a JSON structure of key/value pairs for your secret value.
    ///
    /// Update requires: No interruption
    #[serde(rename = "SecretString", skip_serializing_if = "Option::is_none")]
    pub secret_string: Option<Value<String>>,
    /// A list of tags to attach to the secret.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
}

impl ResourceProperties for SecretProperties {
    const TYPE_NAME: &'static str = "AWS::SecretsManager::Secret";
}

/// The `AWS::SecretsManager::Secret` resource
pub type Secret = Resource<SecretProperties>;

/// Documentation catalog of `AWS::SecretsManager::Secret`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::SecretsManager::Secret",
    description: "Creates a new secret. A *secret* can be a password, a set of credentials such as a user name and password, an OAuth token, or other secret...",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-secretsmanager-secret.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("Description", PropertyKind::String)
            .with_description("The description of the secret.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new(
            "GenerateSecretString",
            PropertyKind::Struct("GenerateSecretString"),
        )
        .with_description("A structure that specifies how to generate a password to encrypt and store in the secret. Either ``GenerateSecretString`` or ``SecretString`` must...")
        .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("KmsKeyId", PropertyKind::String)
            .with_description("The ARN, key ID, or alias of the KMS key that Secrets Manager uses to encrypt the secret value in the secret.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Name", PropertyKind::String)
            .with_description("The name of the new secret. The secret name can contain ASCII letters, numbers, and the following characters: /_+=.@-")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new(
            "ReplicaRegions",
            PropertyKind::List(&PropertyKind::Struct("ReplicaRegion")),
        )
        .with_description("A custom type that specifies a ``Region`` and the ``KmsKeyId`` for a replica secret.")
        .with_update_requires(UpdateRequires::NoInterruption)
        .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("SecretString", PropertyKind::String)
            .with_description("The text to encrypt and store in the secret. We recommend you use a JSON structure of key/value pairs for your secret value.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("A list of tags to attach to the secret.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
    ],
    property_types: &[
        PropertyTypeDoc {
            name: "GenerateSecretString",
            description: "Generates a random password.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-secretsmanager-secret-generatesecretstring.html",
            properties: &[
                PropertyDoc::new("ExcludeCharacters", PropertyKind::String)
                    .with_description("A string of the characters that you don't want in the password."),
                PropertyDoc::new("ExcludeLowercase", PropertyKind::Boolean)
                    .with_description("Specifies whether to exclude lowercase letters from the password."),
                PropertyDoc::new("ExcludeNumbers", PropertyKind::Boolean)
                    .with_description("Specifies whether to exclude numbers from the password."),
                PropertyDoc::new("ExcludePunctuation", PropertyKind::Boolean)
                    .with_description("Specifies whether to exclude the following punctuation characters from the password."),
                PropertyDoc::new("ExcludeUppercase", PropertyKind::Boolean)
                    .with_description("Specifies whether to exclude uppercase letters from the password."),
                PropertyDoc::new("GenerateStringKey", PropertyKind::String)
                    .with_description("The JSON key name for the key/value pair, where the value is the generated password."),
                PropertyDoc::new("IncludeSpace", PropertyKind::Boolean)
                    .with_description("Specifies whether to include the space character."),
                PropertyDoc::new("PasswordLength", PropertyKind::Integer)
                    .with_description("The length of the password. If you don't include this parameter, the default length is 32 characters."),
                PropertyDoc::new("RequireEachIncludedType", PropertyKind::Boolean)
                    .with_description("Specifies whether to include at least one upper and lowercase letter, one number, and one punctuation."),
                PropertyDoc::new("SecretStringTemplate", PropertyKind::String)
                    .with_description("A template that the generated string must match."),
            ],
        },
        PropertyTypeDoc {
            name: "ReplicaRegion",
            description: "Specifies a ``Region`` and the ``KmsKeyId`` for a replica secret.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-secretsmanager-secret-replicaregion.html",
            properties: &[
                PropertyDoc::new("KmsKeyId", PropertyKind::String)
                    .with_description("The ARN, key ID, or alias of the KMS key to encrypt the secret."),
                PropertyDoc::new("Region", PropertyKind::String)
                    .required()
                    .with_description("A string that represents a ``Region``, for example \"us-east-1\"."),
            ],
        },
        PropertyTypeDoc {
            name: "Tag",
            description: "A structure that contains information about a tag.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-secretsmanager-secret-tag.html",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String)
                    .required()
                    .with_description("The key identifier, or name, of the tag."),
                PropertyDoc::new("Value", PropertyKind::String)
                    .required()
                    .with_description("The string value associated with the key of the tag."),
            ],
        },
    ],
    attributes: &["Id"],
};
