//! AWS::SQS::Queue resource type
//!
//! Generated from CloudFormation resource schema `AWS::SQS::Queue`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// The ``Tag`` type enables you to specify a key-value pair that can be used to store information about an SQS queue.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sqs-queue-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The key name of the tag. You can specify a value that is 1 to 128 Unicode characters in length and cannot be prefixed with ``aws:``.
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The value for the tag. You can specify a value that is 0 to 256 characters in length.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::SQS::Queue`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sqs-queue.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueueProperties {
    /// For first-in-first-out (FIFO) queues, specifies whether to enable content-based deduplication.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "ContentBasedDeduplication",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_based_deduplication: Option<Value<bool>>,
    /// For high throughput for FIFO queues, specifies whether message deduplication occurs at the message group or queue level.
    /// Valid values are ``messageGroup`` and ``queue``.
    ///
    /// Allowed values: `messageGroup`, `queue`
    /// Update requires: No interruption
    #[serde(rename = "DeduplicationScope", skip_serializing_if = "Option::is_none")]
    pub deduplication_scope: Option<Value<String>>,
    /// The time in seconds for which the delivery of all messages in the queue is delayed.
    /// You can specify an integer value of ``0`` to ``900`` (15 minutes). The default value is ``0``.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DelaySeconds", skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<Value<i64>>,
    /// If set to true, creates a FIFO queue. If you don't specify this property, SQS creates a standard queue.
    ///
    /// Update requires: Replacement
    #[serde(rename = "FifoQueue", skip_serializing_if = "Option::is_none")]
    pub fifo_queue: Option<Value<bool>>,
    /// For high throughput for FIFO queues, specifies whether the FIFO queue throughput quota applies to the entire queue or per message group.
    /// Valid values are ``perQueue`` and ``perMessageGroupId``.
    ///
    /// Allowed values: `perQueue`, `perMessageGroupId`
    /// Update requires: No interruption
    #[serde(rename = "FifoThroughputLimit", skip_serializing_if = "Option::is_none")]
    pub fifo_throughput_limit: Option<Value<String>>,
    /// The length of time in seconds for which SQS can reuse a data key to encrypt or decrypt messages before calling KMS again.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "KmsDataKeyReusePeriodSeconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub kms_data_key_reuse_period_seconds: Option<Value<i64>>,
    /// The ID of an AWS Key Management Service (KMS) for SQS, or a custom KMS.
    ///
    /// Update requires: No interruption
    #[serde(rename = "KmsMasterKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<Value<String>>,
    /// The limit of how many bytes that a message can contain before SQS rejects it.
    ///
    /// Update requires: No interruption
    #[serde(rename = "MaximumMessageSize", skip_serializing_if = "Option::is_none")]
    pub maximum_message_size: Option<Value<i64>>,
    /// The number of seconds that SQS retains a message.
    ///
    /// Update requires: No interruption
    #[serde(rename = "MessageRetentionPeriod", skip_serializing_if = "Option::is_none")]
    pub message_retention_period: Option<Value<i64>>,
    /// A name for the queue. To create a FIFO queue, the name of your FIFO queue must end with the ``.fifo`` suffix.
    ///
    /// Update requires: Replacement
    #[serde(rename = "QueueName", skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<Value<String>>,
    /// Specifies the duration, in seconds, that the ReceiveMessage action call waits until a message is in the queue.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "ReceiveMessageWaitTimeSeconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub receive_message_wait_time_seconds: Option<Value<i64>>,
    /// The string that includes the parameters for the permissions for the dead-letter queue redrive permission.
    ///
    /// Update requires: No interruption
    #[serde(rename = "RedriveAllowPolicy", skip_serializing_if = "Option::is_none")]
    pub redrive_allow_policy: Option<Json>,
    /// The string that includes the parameters for the dead-letter queue functionality of the source queue as a JSON object.
    ///
    /// Update requires: No interruption
    #[serde(rename = "RedrivePolicy", skip_serializing_if = "Option::is_none")]
    pub redrive_policy: Option<Json>,
    /// Enables server-side queue encryption using SQS owned encryption keys.
    ///
    /// Update requires: No interruption
    #[serde(rename = "SqsManagedSseEnabled", skip_serializing_if = "Option::is_none")]
    pub sqs_managed_sse_enabled: Option<Value<bool>>,
    /// The tags that you attach to this queue.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
    /// The length of time during which a message will be unavailable after a message is delivered from the queue.
    ///
    /// Update requires: No interruption
    #[serde(rename = "VisibilityTimeout", skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<Value<i64>>,
}

impl ResourceProperties for QueueProperties {
    const TYPE_NAME: &'static str = "AWS::SQS::Queue";
}

/// The `AWS::SQS::Queue` resource
pub type Queue = Resource<QueueProperties>;

/// Documentation catalog of `AWS::SQS::Queue`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::SQS::Queue",
    description: "The ``AWS::SQS::Queue`` resource creates an SQS standard or FIFO queue.",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sqs-queue.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("ContentBasedDeduplication", PropertyKind::Boolean)
            .with_description("For first-in-first-out (FIFO) queues, specifies whether to enable content-based deduplication.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("DeduplicationScope", PropertyKind::String)
            .with_description("For high throughput for FIFO queues, specifies whether message deduplication occurs at the message group or queue level. Valid values are ``messageGroup``...")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&["messageGroup", "queue"]),
        PropertyDoc::new("DelaySeconds", PropertyKind::Integer)
            .with_description("The time in seconds for which the delivery of all messages in the queue is delayed. You can specify an integer value of ``0`` to ``900`` (15 minutes)...")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("FifoQueue", PropertyKind::Boolean)
            .with_description("If set to true, creates a FIFO queue. If you don't specify this property, SQS creates a standard queue.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("FifoThroughputLimit", PropertyKind::String)
            .with_description("For high throughput for FIFO queues, specifies whether the FIFO queue throughput quota applies to the entire queue or per message group. Valid values...")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&["perQueue", "perMessageGroupId"]),
        PropertyDoc::new("KmsDataKeyReusePeriodSeconds", PropertyKind::Integer)
            .with_description("The length of time in seconds for which SQS can reuse a data key to encrypt or decrypt messages before calling KMS again.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("KmsMasterKeyId", PropertyKind::String)
            .with_description("The ID of an AWS Key Management Service (KMS) for SQS, or a custom KMS.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("MaximumMessageSize", PropertyKind::Integer)
            .with_description("The limit of how many bytes that a message can contain before SQS rejects it.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("MessageRetentionPeriod", PropertyKind::Integer)
            .with_description("The number of seconds that SQS retains a message.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("QueueName", PropertyKind::String)
            .with_description("A name for the queue. To create a FIFO queue, the name of your FIFO queue must end with the ``.fifo`` suffix.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("ReceiveMessageWaitTimeSeconds", PropertyKind::Integer)
            .with_description("Specifies the duration, in seconds, that the ReceiveMessage action call waits until a message is in the queue.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("RedriveAllowPolicy", PropertyKind::Json)
            .with_description("The string that includes the parameters for the permissions for the dead-letter queue redrive permission.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("RedrivePolicy", PropertyKind::Json)
            .with_description("The string that includes the parameters for the dead-letter queue functionality of the source queue as a JSON object.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("SqsManagedSseEnabled", PropertyKind::Boolean)
            .with_description("Enables server-side queue encryption using SQS owned encryption keys.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("The tags that you attach to this queue.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("VisibilityTimeout", PropertyKind::Integer)
            .with_description("The length of time during which a message will be unavailable after a message is delivered from the queue.")
            .with_update_requires(UpdateRequires::NoInterruption),
    ],
    property_types: &[PropertyTypeDoc {
        name: "Tag",
        description: "The ``Tag`` type enables you to specify a key-value pair that can be used to store information about an SQS queue.",
        documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sqs-queue-tag.html",
        properties: &[
            PropertyDoc::new("Key", PropertyKind::String)
                .required()
                .with_description("The key name of the tag. You can specify a value that is 1 to 128 Unicode characters in length and cannot be prefixed with ``aws:``."),
            PropertyDoc::new("Value", PropertyKind::String)
                .required()
                .with_description("The value for the tag. You can specify a value that is 0 to 256 characters in length."),
        ],
    }],
    attributes: &["Arn", "QueueUrl"],
};
