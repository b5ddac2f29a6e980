//! AWS::DynamoDB::Table resource type
//!
//! Generated from CloudFormation resource schema `AWS::DynamoDB::Table`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// Represents an attribute for describing the schema for the table and indexes.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-attributedefinition.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeDefinition {
    /// A name for the attribute.
    ///
    /// Constraints: min length 1, max length 255
    #[serde(rename = "AttributeName")]
    pub attribute_name: Value<String>,
    /// The data type for the attribute, where:
    /// + ``S`` - the attribute is of type String
    /// + ``N`` - the attribute is of type Number
    /// + ``B`` - the attribute is of type Binary
    ///
    /// Allowed values: `S`, `N`, `B`
    #[serde(rename = "AttributeType")]
    pub attribute_type: Value<String>,
}

/// Configures contributor insights settings for a table or one of its indexes.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-contributorinsightsspecification.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContributorInsightsSpecification {
    /// Indicates whether CloudWatch Contributor Insights are to be enabled (true) or disabled (false).
    #[serde(rename = "Enabled")]
    pub enabled: Value<bool>,
}

/// Represents the properties of a global secondary index.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-globalsecondaryindex.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalSecondaryIndex {
    /// The settings used to enable or disable CloudWatch Contributor Insights for the specified global secondary index.
    #[serde(
        rename = "ContributorInsightsSpecification",
        skip_serializing_if = "Option::is_none"
    )]
    pub contributor_insights_specification: Option<Value<ContributorInsightsSpecification>>,
    /// The name of the global secondary index. The name must be unique among all other indexes on this table.
    ///
    /// Constraints: min length 3, max length 255
    #[serde(rename = "IndexName")]
    pub index_name: Value<String>,
    /// The complete key schema for a global secondary index.
    ///
    /// Constraints: min items 1, max items 2, unique items
    #[serde(rename = "KeySchema")]
    pub key_schema: Value<Vec<KeySchema>>,
    /// Represents attributes that are copied (projected) from the table into the global secondary index.
    #[serde(rename = "Projection")]
    pub projection: Value<Projection>,
    /// Represents the provisioned throughput settings for the specified global secondary index.
    #[serde(rename = "ProvisionedThroughput", skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<Value<ProvisionedThroughput>>,
}

/// Represents *a single element* of a key schema.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-keyschema.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeySchema {
    /// The name of a key attribute.
    ///
    /// Constraints: min length 1, max length 255
    #[serde(rename = "AttributeName")]
    pub attribute_name: Value<String>,
    /// The role that this key attribute will assume:
    /// + ``HASH`` - partition key
    /// + ``RANGE`` - sort key
    ///
    /// Allowed values: `HASH`, `RANGE`
    #[serde(rename = "KeyType")]
    pub key_type: Value<String>,
}

/// Represents the properties of a local secondary index.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-localsecondaryindex.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalSecondaryIndex {
    /// The name of the local secondary index.
    ///
    /// Constraints: min length 3, max length 255
    #[serde(rename = "IndexName")]
    pub index_name: Value<String>,
    /// The complete key schema for the local secondary index.
    ///
    /// Constraints: min items 1, max items 2, unique items
    #[serde(rename = "KeySchema")]
    pub key_schema: Value<Vec<KeySchema>>,
    /// Represents attributes that are copied (projected) from the table into the local secondary index.
    #[serde(rename = "Projection")]
    pub projection: Value<Projection>,
}

/// The settings used to enable point in time recovery.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-pointintimerecoveryspecification.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointInTimeRecoverySpecification {
    /// Indicates whether point in time recovery is enabled (true) or disabled (false) on the table.
    #[serde(
        rename = "PointInTimeRecoveryEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub point_in_time_recovery_enabled: Option<Value<bool>>,
    /// The number of preceding days for which continuous backups are taken and maintained.
    ///
    /// Constraints: minimum 1, maximum 35
    #[serde(rename = "RecoveryPeriodInDays", skip_serializing_if = "Option::is_none")]
    pub recovery_period_in_days: Option<Value<i64>>,
}

/// Represents attributes that are copied (projected) from the table into an index.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-projection.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Projection {
    /// Represents the non-key attribute names which will be projected into the index.
    ///
    /// Constraints: max items 20, unique items
    #[serde(rename = "NonKeyAttributes", skip_serializing_if = "Option::is_none")]
    pub non_key_attributes: Option<Value<Vec<Value<String>>>>,
    /// The set of attributes that are projected into the index:
    /// + ``KEYS_ONLY`` - Only the index and primary keys are projected into the index.
    /// + ``INCLUDE`` - In addition to the attributes described in ``KEYS_ONLY``, the secondary index will include other non-key attributes that you specify.
    /// + ``ALL`` - All of the table attributes are projected into the index.
    ///
    /// Allowed values: `KEYS_ONLY`, `INCLUDE`, `ALL`
    #[serde(rename = "ProjectionType", skip_serializing_if = "Option::is_none")]
    pub projection_type: Option<Value<String>>,
}

/// Throughput for the specified table, which consists of values for ``ReadCapacityUnits`` and ``WriteCapacityUnits``.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-provisionedthroughput.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisionedThroughput {
    /// The maximum number of strongly consistent reads consumed per second before DynamoDB returns a ``ThrottlingException``.
    #[serde(rename = "ReadCapacityUnits")]
    pub read_capacity_units: Value<i64>,
    /// The maximum number of writes consumed per second before DynamoDB returns a ``ThrottlingException``.
    #[serde(rename = "WriteCapacityUnits")]
    pub write_capacity_units: Value<i64>,
}

/// Represents the settings used to enable server-side encryption.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-ssespecification.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SseSpecification {
    /// The KMS key that should be used for the KMS encryption.
    #[serde(rename = "KMSMasterKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<Value<String>>,
    /// Indicates whether server-side encryption is done using an AWS managed key or an AWS owned key.
    #[serde(rename = "SSEEnabled")]
    pub sse_enabled: Value<bool>,
    /// Server-side encryption type. The only supported value is:
    /// ``KMS`` - Server-side encryption that uses KMSlong.
    #[serde(rename = "SSEType", skip_serializing_if = "Option::is_none")]
    pub sse_type: Option<Value<String>>,
}

/// Represents the DynamoDB Streams configuration for a table in DynamoDB.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-streamspecification.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamSpecification {
    /// When an item in the table is modified, ``StreamViewType`` determines what information is written to the stream for this table.
    /// Valid values for ``StreamViewType`` are:
    /// + ``KEYS_ONLY`` - Only the key attributes of the modified item are written to the stream.
    /// + ``NEW_IMAGE`` - The entire item, as it appears after it was modified, is written to the stream.
    /// + ``OLD_IMAGE`` - The entire item, as it appeared before it was modified, is written to the stream.
    /// + ``NEW_AND_OLD_IMAGES`` - Both the new and the old item images of the item are written to the stream.
    ///
    /// Allowed values: `KEYS_ONLY`, `NEW_IMAGE`, `OLD_IMAGE`, `NEW_AND_OLD_IMAGES`
    #[serde(rename = "StreamViewType")]
    pub stream_view_type: Value<String>,
}

/// Describes a tag. A tag is a key-value pair.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The key of the tag. Tag keys are case sensitive.
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The value of the tag. Tag values are case-sensitive and can be null.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Represents the settings used to enable or disable Time to Live (TTL) for the specified table.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-timetolivespecification.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeToLiveSpecification {
    /// The name of the TTL attribute used to store the expiration time for items in the table.
    ///
    /// Constraints: min length 1, max length 255
    #[serde(rename = "AttributeName", skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<Value<String>>,
    /// Indicates whether TTL is to be enabled (true) or disabled (false) on the table.
    #[serde(rename = "Enabled")]
    pub enabled: Value<bool>,
}

/// Properties of `AWS::DynamoDB::Table`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-dynamodb-table.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableProperties {
    /// A list of attributes that describe the key schema for the table and indexes.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "AttributeDefinitions", skip_serializing_if = "Option::is_none")]
    pub attribute_definitions: Option<Value<Vec<AttributeDefinition>>>,
    /// Specify how you are charged for read and write throughput and how you manage capacity.
    /// Valid values include:
    /// + ``PAY_PER_REQUEST`` - We recommend using ``PAY_PER_REQUEST`` for most DynamoDB workloads.
    /// + ``PROVISIONED`` - We recommend using ``PROVISIONED`` for steady workloads with predictable growth.
    ///
    /// Allowed values: `PAY_PER_REQUEST`, `PROVISIONED`
    /// Update requires: No interruption
    #[serde(rename = "BillingMode", skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<Value<String>>,
    /// The settings used to enable or disable CloudWatch Contributor Insights for the specified table.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "ContributorInsightsSpecification",
        skip_serializing_if = "Option::is_none"
    )]
    pub contributor_insights_specification: Option<Value<ContributorInsightsSpecification>>,
    /// Determines if a table is protected from deletion.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "DeletionProtectionEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub deletion_protection_enabled: Option<Value<bool>>,
    /// Global secondary indexes to be created on the table. You can create up to 20 global secondary indexes.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "GlobalSecondaryIndexes", skip_serializing_if = "Option::is_none")]
    pub global_secondary_indexes: Option<Value<Vec<GlobalSecondaryIndex>>>,
    /// Specifies the attributes that make up the primary key for the table.
    ///
    /// Update requires: Replacement
    #[serde(rename = "KeySchema")]
    pub key_schema: Json,
    /// Local secondary indexes to be created on the table. You can create up to 5 local secondary indexes.
    ///
    /// Constraints: unique items
    /// Update requires: Replacement
    #[serde(rename = "LocalSecondaryIndexes", skip_serializing_if = "Option::is_none")]
    pub local_secondary_indexes: Option<Value<Vec<LocalSecondaryIndex>>>,
    /// The settings used to enable point in time recovery.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "PointInTimeRecoverySpecification",
        skip_serializing_if = "Option::is_none"
    )]
    pub point_in_time_recovery_specification: Option<Value<PointInTimeRecoverySpecification>>,
    /// Throughput for the specified table. If you set ``BillingMode`` as ``PROVISIONED``, you must specify this property.
    ///
    /// Update requires: No interruption
    #[serde(rename = "ProvisionedThroughput", skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<Value<ProvisionedThroughput>>,
    /// Specifies the settings to enable server-side encryption.
    ///
    /// Update requires: No interruption
    #[serde(rename = "SSESpecification", skip_serializing_if = "Option::is_none")]
    pub sse_specification: Option<Value<SseSpecification>>,
    /// The settings for the DDB table stream, which capture changes to items stored in the table.
    ///
    /// Update requires: No interruption
    #[serde(rename = "StreamSpecification", skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<Value<StreamSpecification>>,
    /// The table class of the new table. Valid values are ``STANDARD`` and ``STANDARD_INFREQUENT_ACCESS``.
    ///
    /// Allowed values: `STANDARD`, `STANDARD_INFREQUENT_ACCESS`
    /// Update requires: No interruption
    #[serde(rename = "TableClass", skip_serializing_if = "Option::is_none")]
    pub table_class: Option<Value<String>>,
    /// A name for the table. If you don't specify a name, CFNlong generates a unique physical ID and uses that ID for the table name.
    ///
    /// Update requires: Replacement
    #[serde(rename = "TableName", skip_serializing_if = "Option::is_none")]
    pub table_name: Option<Value<String>>,
    /// An array of key-value pairs to apply to this resource.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
    /// Specifies the Time to Live (TTL) settings for the table.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "TimeToLiveSpecification",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_to_live_specification: Option<Value<TimeToLiveSpecification>>,
}

impl ResourceProperties for TableProperties {
    const TYPE_NAME: &'static str = "AWS::DynamoDB::Table";
}

/// The `AWS::DynamoDB::Table` resource
pub type Table = Resource<TableProperties>;

/// Documentation catalog of `AWS::DynamoDB::Table`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::DynamoDB::Table",
    description: "The ``AWS::DynamoDB::Table`` resource creates a DDB table.",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-dynamodb-table.html",
    taggable: true,
    properties: &[
        PropertyDoc::new(
            "AttributeDefinitions",
            PropertyKind::List(&PropertyKind::Struct("AttributeDefinition")),
        )
        .with_description("A list of attributes that describe the key schema for the table and indexes.")
        .with_update_requires(UpdateRequires::NoInterruption)
        .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("BillingMode", PropertyKind::String)
            .with_description("Specify how you are charged for read and write throughput and how you manage capacity. Valid values include: + ``PAY_PER_REQUEST`` - We recommend...")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&["PAY_PER_REQUEST", "PROVISIONED"]),
        PropertyDoc::new(
            "ContributorInsightsSpecification",
            PropertyKind::Struct("ContributorInsightsSpecification"),
        )
        .with_description("The settings used to enable or disable CloudWatch Contributor Insights for the specified table.")
        .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("DeletionProtectionEnabled", PropertyKind::Boolean)
            .with_description("Determines if a table is protected from deletion.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new(
            "GlobalSecondaryIndexes",
            PropertyKind::List(&PropertyKind::Struct("GlobalSecondaryIndex")),
        )
        .with_description("Global secondary indexes to be created on the table. You can create up to 20 global secondary indexes.")
        .with_update_requires(UpdateRequires::NoInterruption)
        .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("KeySchema", PropertyKind::Json)
            .required()
            .with_description("Specifies the attributes that make up the primary key for the table.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new(
            "LocalSecondaryIndexes",
            PropertyKind::List(&PropertyKind::Struct("LocalSecondaryIndex")),
        )
        .with_description("Local secondary indexes to be created on the table. You can create up to 5 local secondary indexes.")
        .with_update_requires(UpdateRequires::Replacement)
        .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new(
            "PointInTimeRecoverySpecification",
            PropertyKind::Struct("PointInTimeRecoverySpecification"),
        )
        .with_description("The settings used to enable point in time recovery.")
        .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new(
            "ProvisionedThroughput",
            PropertyKind::Struct("ProvisionedThroughput"),
        )
        .with_description("Throughput for the specified table. If you set ``BillingMode`` as ``PROVISIONED``, you must specify this property.")
        .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("SSESpecification", PropertyKind::Struct("SSESpecification"))
            .with_description("Specifies the settings to enable server-side encryption.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("StreamSpecification", PropertyKind::Struct("StreamSpecification"))
            .with_description("The settings for the DDB table stream, which capture changes to items stored in the table.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("TableClass", PropertyKind::String)
            .with_description("The table class of the new table. Valid values are ``STANDARD`` and ``STANDARD_INFREQUENT_ACCESS``.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&["STANDARD", "STANDARD_INFREQUENT_ACCESS"]),
        PropertyDoc::new("TableName", PropertyKind::String)
            .with_description("A name for the table. If you don't specify a name, CFNlong generates a unique physical ID and uses that ID for the table name.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("An array of key-value pairs to apply to this resource.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new(
            "TimeToLiveSpecification",
            PropertyKind::Struct("TimeToLiveSpecification"),
        )
        .with_description("Specifies the Time to Live (TTL) settings for the table.")
        .with_update_requires(UpdateRequires::NoInterruption),
    ],
    property_types: &[
        PropertyTypeDoc {
            name: "AttributeDefinition",
            description: "Represents an attribute for describing the schema for the table and indexes.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-attributedefinition.html",
            properties: &[
                PropertyDoc::new("AttributeName", PropertyKind::String)
                    .required()
                    .with_description("A name for the attribute.")
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(255)]),
                PropertyDoc::new("AttributeType", PropertyKind::String)
                    .required()
                    .with_description("The data type for the attribute, where: + ``S`` - the attribute is of type String + ``N`` - the attribute is of type Number + ``B`` - the attribute...")
                    .with_allowed_values(&["S", "N", "B"]),
            ],
        },
        PropertyTypeDoc {
            name: "ContributorInsightsSpecification",
            description: "Configures contributor insights settings for a table or one of its indexes.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-contributorinsightsspecification.html",
            properties: &[PropertyDoc::new("Enabled", PropertyKind::Boolean)
                .required()
                .with_description("Indicates whether CloudWatch Contributor Insights are to be enabled (true) or disabled (false).")],
        },
        PropertyTypeDoc {
            name: "GlobalSecondaryIndex",
            description: "Represents the properties of a global secondary index.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-globalsecondaryindex.html",
            properties: &[
                PropertyDoc::new(
                    "ContributorInsightsSpecification",
                    PropertyKind::Struct("ContributorInsightsSpecification"),
                )
                .with_description("The settings used to enable or disable CloudWatch Contributor Insights for the specified global secondary index."),
                PropertyDoc::new("IndexName", PropertyKind::String)
                    .required()
                    .with_description("The name of the global secondary index. The name must be unique among all other indexes on this table.")
                    .with_constraints(&[Constraint::MinLength(3), Constraint::MaxLength(255)]),
                PropertyDoc::new("KeySchema", PropertyKind::List(&PropertyKind::Struct("KeySchema")))
                    .required()
                    .with_description("The complete key schema for a global secondary index.")
                    .with_constraints(&[
                        Constraint::MinItems(1),
                        Constraint::MaxItems(2),
                        Constraint::UniqueItems,
                    ]),
                PropertyDoc::new("Projection", PropertyKind::Struct("Projection"))
                    .required()
                    .with_description("Represents attributes that are copied (projected) from the table into the global secondary index."),
                PropertyDoc::new(
                    "ProvisionedThroughput",
                    PropertyKind::Struct("ProvisionedThroughput"),
                )
                .with_description("Represents the provisioned throughput settings for the specified global secondary index."),
            ],
        },
        PropertyTypeDoc {
            name: "KeySchema",
            description: "Represents *a single element* of a key schema.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-keyschema.html",
            properties: &[
                PropertyDoc::new("AttributeName", PropertyKind::String)
                    .required()
                    .with_description("The name of a key attribute.")
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(255)]),
                PropertyDoc::new("KeyType", PropertyKind::String)
                    .required()
                    .with_description("The role that this key attribute will assume: + ``HASH`` - partition key + ``RANGE`` - sort key")
                    .with_allowed_values(&["HASH", "RANGE"]),
            ],
        },
        PropertyTypeDoc {
            name: "LocalSecondaryIndex",
            description: "Represents the properties of a local secondary index.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-localsecondaryindex.html",
            properties: &[
                PropertyDoc::new("IndexName", PropertyKind::String)
                    .required()
                    .with_description("The name of the local secondary index.")
                    .with_constraints(&[Constraint::MinLength(3), Constraint::MaxLength(255)]),
                PropertyDoc::new("KeySchema", PropertyKind::List(&PropertyKind::Struct("KeySchema")))
                    .required()
                    .with_description("The complete key schema for the local secondary index.")
                    .with_constraints(&[
                        Constraint::MinItems(1),
                        Constraint::MaxItems(2),
                        Constraint::UniqueItems,
                    ]),
                PropertyDoc::new("Projection", PropertyKind::Struct("Projection"))
                    .required()
                    .with_description("Represents attributes that are copied (projected) from the table into the local secondary index."),
            ],
        },
        PropertyTypeDoc {
            name: "PointInTimeRecoverySpecification",
            description: "The settings used to enable point in time recovery.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-pointintimerecoveryspecification.html",
            properties: &[
                PropertyDoc::new("PointInTimeRecoveryEnabled", PropertyKind::Boolean)
                    .with_description("Indicates whether point in time recovery is enabled (true) or disabled (false) on the table."),
                PropertyDoc::new("RecoveryPeriodInDays", PropertyKind::Integer)
                    .with_description("The number of preceding days for which continuous backups are taken and maintained.")
                    .with_constraints(&[Constraint::Minimum(1.0), Constraint::Maximum(35.0)]),
            ],
        },
        PropertyTypeDoc {
            name: "Projection",
            description: "Represents attributes that are copied (projected) from the table into an index.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-projection.html",
            properties: &[
                PropertyDoc::new("NonKeyAttributes", PropertyKind::List(&PropertyKind::String))
                    .with_description("Represents the non-key attribute names which will be projected into the index.")
                    .with_constraints(&[Constraint::MaxItems(20), Constraint::UniqueItems]),
                PropertyDoc::new("ProjectionType", PropertyKind::String)
                    .with_description("The set of attributes that are projected into the index: + ``KEYS_ONLY`` - Only the index and primary keys are projected into the index. +...")
                    .with_allowed_values(&["KEYS_ONLY", "INCLUDE", "ALL"]),
            ],
        },
        PropertyTypeDoc {
            name: "ProvisionedThroughput",
            description: "Throughput for the specified table, which consists of values for ``ReadCapacityUnits`` and ``WriteCapacityUnits``.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-provisionedthroughput.html",
            properties: &[
                PropertyDoc::new("ReadCapacityUnits", PropertyKind::Integer)
                    .required()
                    .with_description("The maximum number of strongly consistent reads consumed per second before DynamoDB returns a ``ThrottlingException``."),
                PropertyDoc::new("WriteCapacityUnits", PropertyKind::Integer)
                    .required()
                    .with_description("The maximum number of writes consumed per second before DynamoDB returns a ``ThrottlingException``."),
            ],
        },
        PropertyTypeDoc {
            name: "SSESpecification",
            description: "Represents the settings used to enable server-side encryption.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-ssespecification.html",
            properties: &[
                PropertyDoc::new("KMSMasterKeyId", PropertyKind::String)
                    .with_description("The KMS key that should be used for the KMS encryption."),
                PropertyDoc::new("SSEEnabled", PropertyKind::Boolean)
                    .required()
                    .with_description("Indicates whether server-side encryption is done using an AWS managed key or an AWS owned key."),
                PropertyDoc::new("SSEType", PropertyKind::String)
                    .with_description("Server-side encryption type. The only supported value is: ``KMS`` - Server-side encryption that uses KMSlong."),
            ],
        },
        PropertyTypeDoc {
            name: "StreamSpecification",
            description: "Represents the DynamoDB Streams configuration for a table in DynamoDB.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-streamspecification.html",
            properties: &[PropertyDoc::new("StreamViewType", PropertyKind::String)
                .required()
                .with_description("When an item in the table is modified, ``StreamViewType`` determines what information is written to the stream for this table. Valid values for...")
                .with_allowed_values(&["KEYS_ONLY", "NEW_IMAGE", "OLD_IMAGE", "NEW_AND_OLD_IMAGES"])],
        },
        PropertyTypeDoc {
            name: "Tag",
            description: "Describes a tag. A tag is a key-value pair.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-tag.html",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String)
                    .required()
                    .with_description("The key of the tag. Tag keys are case sensitive."),
                PropertyDoc::new("Value", PropertyKind::String)
                    .required()
                    .with_description("The value of the tag. Tag values are case-sensitive and can be null."),
            ],
        },
        PropertyTypeDoc {
            name: "TimeToLiveSpecification",
            description: "Represents the settings used to enable or disable Time to Live (TTL) for the specified table.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-dynamodb-table-timetolivespecification.html",
            properties: &[
                PropertyDoc::new("AttributeName", PropertyKind::String)
                    .with_description("The name of the TTL attribute used to store the expiration time for items in the table.")
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(255)]),
                PropertyDoc::new("Enabled", PropertyKind::Boolean)
                    .required()
                    .with_description("Indicates whether TTL is to be enabled (true) or disabled (false) on the table."),
            ],
        },
    ],
    attributes: &["Arn", "StreamArn"],
};
