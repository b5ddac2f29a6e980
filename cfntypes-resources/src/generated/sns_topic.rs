//! AWS::SNS::Topic resource type
//!
//! Generated from CloudFormation resource schema `AWS::SNS::Topic`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// The ``LoggingConfig`` property type specifies the ``Delivery`` status logging configuration for an ``AWS::SNS::Topic``.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sns-topic-loggingconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The IAM role ARN to be used when logging failed message deliveries in Amazon CloudWatch.
    #[serde(rename = "FailureFeedbackRoleArn", skip_serializing_if = "Option::is_none")]
    pub failure_feedback_role_arn: Option<Value<String>>,
    /// Indicates one of the supported protocols for the Amazon SNS topic.
    ///
    /// Allowed values: `http/s`, `sqs`, `lambda`, `firehose`, `application`
    #[serde(rename = "Protocol")]
    pub protocol: Value<String>,
    /// The IAM role ARN to be used when logging successful message deliveries in Amazon CloudWatch.
    #[serde(rename = "SuccessFeedbackRoleArn", skip_serializing_if = "Option::is_none")]
    pub success_feedback_role_arn: Option<Value<String>>,
    /// The percentage of successful message deliveries to be logged in Amazon CloudWatch.
    #[serde(rename = "SuccessFeedbackSampleRate", skip_serializing_if = "Option::is_none")]
    pub success_feedback_sample_rate: Option<Value<String>>,
}

/// ``Subscription`` is an embedded property that describes the subscription endpoints of an SNS topic.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sns-topic-subscription.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Subscription {
    /// The endpoint that receives notifications from the SNS topic. The endpoint value depends on the protocol that you specify.
    #[serde(rename = "Endpoint")]
    pub endpoint: Value<String>,
    /// The subscription's protocol.
    #[serde(rename = "Protocol")]
    pub protocol: Value<String>,
}

/// The list of tags to be added to the specified topic.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sns-topic-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The required key portion of the tag.
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The optional value portion of the tag.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::SNS::Topic`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sns-topic.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicProperties {
    /// The ``ArchivePolicy`` determines the number of days SNS retains messages in FIFO topics.
    ///
    /// Update requires: No interruption
    #[serde(rename = "ArchivePolicy", skip_serializing_if = "Option::is_none")]
    pub archive_policy: Option<Json>,
    /// Enables content-based deduplication for FIFO topics.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "ContentBasedDeduplication",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_based_deduplication: Option<Value<bool>>,
    /// The body of the policy document you want to use for this topic.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DataProtectionPolicy", skip_serializing_if = "Option::is_none")]
    pub data_protection_policy: Option<Json>,
    /// The ``DeliveryStatusLogging`` configuration enables you to log the delivery status of messages sent from your Amazon SNS topic.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DeliveryStatusLogging", skip_serializing_if = "Option::is_none")]
    pub delivery_status_logging: Option<Value<Vec<LoggingConfig>>>,
    /// The display name to use for an SNS topic with SMS subscriptions.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Value<String>>,
    /// Specifies the throughput quota and deduplication behavior to apply for the FIFO topic.
    /// Valid values are ``Topic`` or ``MessageGroup``.
    ///
    /// Update requires: No interruption
    #[serde(rename = "FifoThroughputScope", skip_serializing_if = "Option::is_none")]
    pub fifo_throughput_scope: Option<Value<String>>,
    /// Set to true to create a FIFO topic.
    ///
    /// Update requires: Replacement
    #[serde(rename = "FifoTopic", skip_serializing_if = "Option::is_none")]
    pub fifo_topic: Option<Value<bool>>,
    /// The ID of an AWS managed customer master key (CMK) for SNS or a custom CMK.
    ///
    /// Update requires: No interruption
    #[serde(rename = "KmsMasterKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<Value<String>>,
    /// The signature version corresponds to the hashing algorithm used while creating the signature of the notifications.
    ///
    /// Update requires: No interruption
    #[serde(rename = "SignatureVersion", skip_serializing_if = "Option::is_none")]
    pub signature_version: Option<Value<String>>,
    /// The SNS subscriptions (endpoints) for this topic.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Subscription", skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Value<Vec<Subscription>>>,
    /// The list of tags to add to a new topic.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
    /// The name of the topic you want to create. Topic names must include only uppercase and lowercase ASCII letters, numbers, underscores, and hyphens.
    ///
    /// Update requires: Replacement
    #[serde(rename = "TopicName", skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<Value<String>>,
    /// Tracing mode of an SNS topic. By default ``TracingConfig`` is set to ``PassThrough``.
    ///
    /// Update requires: No interruption
    #[serde(rename = "TracingConfig", skip_serializing_if = "Option::is_none")]
    pub tracing_config: Option<Value<String>>,
}

impl ResourceProperties for TopicProperties {
    const TYPE_NAME: &'static str = "AWS::SNS::Topic";
}

/// The `AWS::SNS::Topic` resource
pub type Topic = Resource<TopicProperties>;

/// Documentation catalog of `AWS::SNS::Topic`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::SNS::Topic",
    description: "The ``AWS::SNS::Topic`` resource creates a topic to which notifications can be published.",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sns-topic.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("ArchivePolicy", PropertyKind::Json)
            .with_description("The ``ArchivePolicy`` determines the number of days SNS retains messages in FIFO topics.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("ContentBasedDeduplication", PropertyKind::Boolean)
            .with_description("Enables content-based deduplication for FIFO topics.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("DataProtectionPolicy", PropertyKind::Json)
            .with_description("The body of the policy document you want to use for this topic.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new(
            "DeliveryStatusLogging",
            PropertyKind::List(&PropertyKind::Struct("LoggingConfig")),
        )
        .with_description("The ``DeliveryStatusLogging`` configuration enables you to log the delivery status of messages sent from your Amazon SNS topic.")
        .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("DisplayName", PropertyKind::String)
            .with_description("The display name to use for an SNS topic with SMS subscriptions.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("FifoThroughputScope", PropertyKind::String)
            .with_description("Specifies the throughput quota and deduplication behavior to apply for the FIFO topic. Valid values are ``Topic`` or ``MessageGroup``.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("FifoTopic", PropertyKind::Boolean)
            .with_description("Set to true to create a FIFO topic.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("KmsMasterKeyId", PropertyKind::String)
            .with_description("The ID of an AWS managed customer master key (CMK) for SNS or a custom CMK.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("SignatureVersion", PropertyKind::String)
            .with_description("The signature version corresponds to the hashing algorithm used while creating the signature of the notifications.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new(
            "Subscription",
            PropertyKind::List(&PropertyKind::Struct("Subscription")),
        )
        .with_description("The SNS subscriptions (endpoints) for this topic.")
        .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("The list of tags to add to a new topic.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("TopicName", PropertyKind::String)
            .with_description("The name of the topic you want to create. Topic names must include only uppercase and lowercase ASCII letters, numbers, underscores, and hyphens.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("TracingConfig", PropertyKind::String)
            .with_description("Tracing mode of an SNS topic. By default ``TracingConfig`` is set to ``PassThrough``.")
            .with_update_requires(UpdateRequires::NoInterruption),
    ],
    property_types: &[
        PropertyTypeDoc {
            name: "LoggingConfig",
            description: "The ``LoggingConfig`` property type specifies the ``Delivery`` status logging configuration for an ``AWS::SNS::Topic``.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sns-topic-loggingconfig.html",
            properties: &[
                PropertyDoc::new("FailureFeedbackRoleArn", PropertyKind::String)
                    .with_description("The IAM role ARN to be used when logging failed message deliveries in Amazon CloudWatch."),
                PropertyDoc::new("Protocol", PropertyKind::String)
                    .required()
                    .with_description("Indicates one of the supported protocols for the Amazon SNS topic.")
                    .with_allowed_values(&["http/s", "sqs", "lambda", "firehose", "application"]),
                PropertyDoc::new("SuccessFeedbackRoleArn", PropertyKind::String)
                    .with_description("The IAM role ARN to be used when logging successful message deliveries in Amazon CloudWatch."),
                PropertyDoc::new("SuccessFeedbackSampleRate", PropertyKind::String)
                    .with_description("The percentage of successful message deliveries to be logged in Amazon CloudWatch."),
            ],
        },
        PropertyTypeDoc {
            name: "Subscription",
            description: "``Subscription`` is an embedded property that describes the subscription endpoints of an SNS topic.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sns-topic-subscription.html",
            properties: &[
                PropertyDoc::new("Endpoint", PropertyKind::String)
                    .required()
                    .with_description("The endpoint that receives notifications from the SNS topic. The endpoint value depends on the protocol that you specify."),
                PropertyDoc::new("Protocol", PropertyKind::String)
                    .required()
                    .with_description("The subscription's protocol."),
            ],
        },
        PropertyTypeDoc {
            name: "Tag",
            description: "The list of tags to be added to the specified topic.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-sns-topic-tag.html",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String)
                    .required()
                    .with_description("The required key portion of the tag."),
                PropertyDoc::new("Value", PropertyKind::String)
                    .required()
                    .with_description("The optional value portion of the tag."),
            ],
        },
    ],
    attributes: &["TopicArn"],
};
