//! AWS::Lambda::EventSourceMapping resource type
//!
//! Generated from CloudFormation resource schema `AWS::Lambda::EventSourceMapping`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// A configuration object that specifies the destination of an event after Lambda processes it.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-destinationconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DestinationConfig {
    /// The destination configuration for failed invocations.
    #[serde(rename = "OnFailure", skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<Value<OnFailure>>,
}

/// A structure within a ``FilterCriteria`` object that defines an event filtering pattern.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-filter.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Filter {
    /// A filter pattern. For more information on the syntax of a filter pattern, see [Filter rule syntax](https://docs.aws.amazon.com/lambda/latest/dg/invocation-eventfiltering.html#filtering-syntax).
    ///
    /// Constraints: min length 0, max length 4096, pattern `.*`
    #[serde(rename = "Pattern", skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Value<String>>,
}

/// An object that contains the filters for an event source.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-filtercriteria.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterCriteria {
    /// A list of filters.
    ///
    /// Constraints: min items 1, max items 20, unique items
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value<Vec<Filter>>>,
}

/// A destination for events that failed processing.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-onfailure.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OnFailure {
    /// The Amazon Resource Name (ARN) of the destination resource.
    ///
    /// Constraints: min length 12, max length 1024
    #[serde(rename = "Destination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<Value<String>>,
}

/// (Amazon SQS only) The scaling configuration for the event source.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-scalingconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalingConfig {
    /// Limits the number of concurrent instances that the SQS event source can invoke.
    ///
    /// Constraints: minimum 2, maximum 1000
    #[serde(rename = "MaximumConcurrency", skip_serializing_if = "Option::is_none")]
    pub maximum_concurrency: Option<Value<i64>>,
}

/// An array of the authentication protocol, VPC components, or virtual host to secure and define your event source.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-sourceaccessconfiguration.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceAccessConfiguration {
    /// The type of authentication protocol, VPC components, or virtual host for your event source.
    ///
    /// Allowed values: `BASIC_AUTH`, `VPC_SUBNET`, `VPC_SECURITY_GROUP`, `SASL_SCRAM_512_AUTH`, `SASL_SCRAM_256_AUTH`, `VIRTUAL_HOST`, `CLIENT_CERTIFICATE_TLS_AUTH`, `SERVER_ROOT_CA_CERTIFICATE`
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Value<String>>,
    /// The value for your chosen configuration in ``Type``.
    ///
    /// Constraints: min length 1, max length 200, pattern `[a-zA-Z0-9-\/*:_+=.@-]*`
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<Value<String>>,
}

/// A [tag](https://docs.aws.amazon.com/lambda/latest/dg/tagging.html) to apply to the event source mapping.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The key for this tag.
    ///
    /// Constraints: min length 1, max length 128
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The value for this tag.
    ///
    /// Constraints: min length 0, max length 256
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value<String>>,
}

/// Properties of `AWS::Lambda::EventSourceMapping`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-eventsourcemapping.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventSourceMappingProperties {
    /// The maximum number of records in each batch that Lambda pulls from your stream or queue and sends to your function.
    ///
    /// Constraints: minimum 1, maximum 10000
    /// Update requires: No interruption
    #[serde(rename = "BatchSize", skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<Value<i64>>,
    /// (Kinesis and DynamoDB Streams only) If the function returns an error, split the batch in two and retry. The default value is false.
    ///
    /// Update requires: No interruption
    #[serde(
        rename = "BisectBatchOnFunctionError",
        skip_serializing_if = "Option::is_none"
    )]
    pub bisect_batch_on_function_error: Option<Value<bool>>,
    /// (Kinesis, DynamoDB Streams, Amazon MSK, and self-managed Apache Kafka event sources only) A configuration object that specifies the destination of an event after Lambda processes it.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DestinationConfig", skip_serializing_if = "Option::is_none")]
    pub destination_config: Option<Value<DestinationConfig>>,
    /// When true, the event source mapping is active. When false, Lambda pauses polling and invocation.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,
    /// The Amazon Resource Name (ARN) of the event source.
    ///
    /// Constraints: min length 12, max length 1024
    /// Update requires: Replacement
    #[serde(rename = "EventSourceArn", skip_serializing_if = "Option::is_none")]
    pub event_source_arn: Option<Value<String>>,
    /// An object that defines the filter criteria that determine whether Lambda should process an event.
    ///
    /// Update requires: No interruption
    #[serde(rename = "FilterCriteria", skip_serializing_if = "Option::is_none")]
    pub filter_criteria: Option<Value<FilterCriteria>>,
    /// The name or ARN of the Lambda function.
    ///
    /// Constraints: min length 1, max length 140
    /// Update requires: No interruption
    #[serde(rename = "FunctionName")]
    pub function_name: Value<String>,
    /// (Streams and SQS) A list of current response type enums applied to the event source mapping.
    ///
    /// Constraints: min items 0, max items 1, unique items
    /// Update requires: No interruption
    #[serde(rename = "FunctionResponseTypes", skip_serializing_if = "Option::is_none")]
    pub function_response_types: Option<Value<Vec<Value<String>>>>,
    /// The ARN of the KMSlong (KMS) customer managed key that Lambda uses to encrypt your function's filter criteria.
    ///
    /// Constraints: min length 12, max length 2048
    /// Update requires: No interruption
    #[serde(rename = "KmsKeyArn", skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<Value<String>>,
    /// The maximum amount of time, in seconds, that Lambda spends gathering records before invoking the function.
    ///
    /// Constraints: minimum 0, maximum 300
    /// Update requires: No interruption
    #[serde(
        rename = "MaximumBatchingWindowInSeconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub maximum_batching_window_in_seconds: Option<Value<i64>>,
    /// (Kinesis and DynamoDB Streams only) Discard records older than the specified age.
    ///
    /// Constraints: minimum -1, maximum 604800
    /// Update requires: No interruption
    #[serde(
        rename = "MaximumRecordAgeInSeconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub maximum_record_age_in_seconds: Option<Value<i64>>,
    /// (Kinesis and DynamoDB Streams only) Discard records after the specified number of retries.
    ///
    /// Constraints: minimum -1, maximum 10000
    /// Update requires: No interruption
    #[serde(rename = "MaximumRetryAttempts", skip_serializing_if = "Option::is_none")]
    pub maximum_retry_attempts: Option<Value<i64>>,
    /// (Kinesis and DynamoDB Streams only) The number of batches to process concurrently from each shard. The default value is 1.
    ///
    /// Constraints: minimum 1, maximum 10
    /// Update requires: No interruption
    #[serde(rename = "ParallelizationFactor", skip_serializing_if = "Option::is_none")]
    pub parallelization_factor: Option<Value<i64>>,
    /// (Amazon MQ) The name of the Amazon MQ broker destination queue to consume.
    ///
    /// Constraints: min items 1, max items 1, unique items
    /// Update requires: No interruption
    #[serde(rename = "Queues", skip_serializing_if = "Option::is_none")]
    pub queues: Option<Value<Vec<Value<String>>>>,
    /// (Amazon SQS only) The scaling configuration for the event source.
    ///
    /// Update requires: No interruption
    #[serde(rename = "ScalingConfig", skip_serializing_if = "Option::is_none")]
    pub scaling_config: Option<Value<ScalingConfig>>,
    /// An array of the authentication protocol, VPC components, or virtual host to secure and define your event source.
    ///
    /// Constraints: min items 1, max items 22, unique items
    /// Update requires: No interruption
    #[serde(
        rename = "SourceAccessConfigurations",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_access_configurations: Option<Value<Vec<SourceAccessConfiguration>>>,
    /// The position in a stream from which to start reading. Required for Amazon Kinesis and Amazon DynamoDB.
    ///
    /// Constraints: min length 6, max length 12, pattern `(LATEST|TRIM_HORIZON|AT_TIMESTAMP)+`
    /// Update requires: Replacement
    #[serde(rename = "StartingPosition", skip_serializing_if = "Option::is_none")]
    pub starting_position: Option<Value<String>>,
    /// With ``StartingPosition`` set to ``AT_TIMESTAMP``, the time from which to start reading, in Unix time seconds.
    ///
    /// Update requires: Replacement
    #[serde(
        rename = "StartingPositionTimestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub starting_position_timestamp: Option<Value<f64>>,
    /// A list of tags to add to the event source mapping.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
    /// The name of the Kafka topic.
    ///
    /// Constraints: min items 1, max items 1, unique items
    /// Update requires: No interruption
    #[serde(rename = "Topics", skip_serializing_if = "Option::is_none")]
    pub topics: Option<Value<Vec<Value<String>>>>,
    /// (Kinesis and DynamoDB Streams only) The duration in seconds of a processing window for DynamoDB and Kinesis Streams event sources.
    ///
    /// Constraints: minimum 0, maximum 900
    /// Update requires: No interruption
    #[serde(rename = "TumblingWindowInSeconds", skip_serializing_if = "Option::is_none")]
    pub tumbling_window_in_seconds: Option<Value<i64>>,
}

impl ResourceProperties for EventSourceMappingProperties {
    const TYPE_NAME: &'static str = "AWS::Lambda::EventSourceMapping";
}

/// The `AWS::Lambda::EventSourceMapping` resource
pub type EventSourceMapping = Resource<EventSourceMappingProperties>;

/// Documentation catalog of `AWS::Lambda::EventSourceMapping`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::Lambda::EventSourceMapping",
    description: "The ``AWS::Lambda::EventSourceMapping`` resource creates a mapping between an event source and an LAMlong function. LAM reads items from the event...",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-eventsourcemapping.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("BatchSize", PropertyKind::Integer)
            .with_description("The maximum number of records in each batch that Lambda pulls from your stream or queue and sends to your function.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(1.0), Constraint::Maximum(10000.0)]),
        PropertyDoc::new("BisectBatchOnFunctionError", PropertyKind::Boolean)
            .with_description("(Kinesis and DynamoDB Streams only) If the function returns an error, split the batch in two and retry. The default value is false.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("DestinationConfig", PropertyKind::Struct("DestinationConfig"))
            .with_description("(Kinesis, DynamoDB Streams, Amazon MSK, and self-managed Apache Kafka event sources only) A configuration object that specifies the destination of...")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Enabled", PropertyKind::Boolean)
            .with_description("When true, the event source mapping is active. When false, Lambda pauses polling and invocation.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("EventSourceArn", PropertyKind::String)
            .with_description("The Amazon Resource Name (ARN) of the event source.")
            .with_update_requires(UpdateRequires::Replacement)
            .with_constraints(&[Constraint::MinLength(12), Constraint::MaxLength(1024)]),
        PropertyDoc::new("FilterCriteria", PropertyKind::Struct("FilterCriteria"))
            .with_description("An object that defines the filter criteria that determine whether Lambda should process an event.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("FunctionName", PropertyKind::String)
            .required()
            .with_description("The name or ARN of the Lambda function.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(140)]),
        PropertyDoc::new("FunctionResponseTypes", PropertyKind::List(&PropertyKind::String))
            .with_description("(Streams and SQS) A list of current response type enums applied to the event source mapping.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[
                Constraint::MinItems(0),
                Constraint::MaxItems(1),
                Constraint::UniqueItems,
            ]),
        PropertyDoc::new("KmsKeyArn", PropertyKind::String)
            .with_description("The ARN of the KMSlong (KMS) customer managed key that Lambda uses to encrypt your function's filter criteria.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::MinLength(12), Constraint::MaxLength(2048)]),
        PropertyDoc::new("MaximumBatchingWindowInSeconds", PropertyKind::Integer)
            .with_description("The maximum amount of time, in seconds, that Lambda spends gathering records before invoking the function.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(0.0), Constraint::Maximum(300.0)]),
        PropertyDoc::new("MaximumRecordAgeInSeconds", PropertyKind::Integer)
            .with_description("(Kinesis and DynamoDB Streams only) Discard records older than the specified age.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(-1.0), Constraint::Maximum(604800.0)]),
        PropertyDoc::new("MaximumRetryAttempts", PropertyKind::Integer)
            .with_description("(Kinesis and DynamoDB Streams only) Discard records after the specified number of retries.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(-1.0), Constraint::Maximum(10000.0)]),
        PropertyDoc::new("ParallelizationFactor", PropertyKind::Integer)
            .with_description("(Kinesis and DynamoDB Streams only) The number of batches to process concurrently from each shard. The default value is 1.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(1.0), Constraint::Maximum(10.0)]),
        PropertyDoc::new("Queues", PropertyKind::List(&PropertyKind::String))
            .with_description("(Amazon MQ) The name of the Amazon MQ broker destination queue to consume.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[
                Constraint::MinItems(1),
                Constraint::MaxItems(1),
                Constraint::UniqueItems,
            ]),
        PropertyDoc::new("ScalingConfig", PropertyKind::Struct("ScalingConfig"))
            .with_description("(Amazon SQS only) The scaling configuration for the event source.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new(
            "SourceAccessConfigurations",
            PropertyKind::List(&PropertyKind::Struct("SourceAccessConfiguration")),
        )
        .with_description("An array of the authentication protocol, VPC components, or virtual host to secure and define your event source.")
        .with_update_requires(UpdateRequires::NoInterruption)
        .with_constraints(&[
            Constraint::MinItems(1),
            Constraint::MaxItems(22),
            Constraint::UniqueItems,
        ]),
        PropertyDoc::new("StartingPosition", PropertyKind::String)
            .with_description("The position in a stream from which to start reading. Required for Amazon Kinesis and Amazon DynamoDB.")
            .with_update_requires(UpdateRequires::Replacement)
            .with_constraints(&[
                Constraint::MinLength(6),
                Constraint::MaxLength(12),
                Constraint::Pattern("(LATEST|TRIM_HORIZON|AT_TIMESTAMP)+"),
            ]),
        PropertyDoc::new("StartingPositionTimestamp", PropertyKind::Number)
            .with_description("With ``StartingPosition`` set to ``AT_TIMESTAMP``, the time from which to start reading, in Unix time seconds.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("A list of tags to add to the event source mapping.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("Topics", PropertyKind::List(&PropertyKind::String))
            .with_description("The name of the Kafka topic.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[
                Constraint::MinItems(1),
                Constraint::MaxItems(1),
                Constraint::UniqueItems,
            ]),
        PropertyDoc::new("TumblingWindowInSeconds", PropertyKind::Integer)
            .with_description("(Kinesis and DynamoDB Streams only) The duration in seconds of a processing window for DynamoDB and Kinesis Streams event sources.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(0.0), Constraint::Maximum(900.0)]),
    ],
    property_types: &[
        PropertyTypeDoc {
            name: "DestinationConfig",
            description: "A configuration object that specifies the destination of an event after Lambda processes it.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-destinationconfig.html",
            properties: &[PropertyDoc::new("OnFailure", PropertyKind::Struct("OnFailure"))
                .with_description("The destination configuration for failed invocations.")],
        },
        PropertyTypeDoc {
            name: "Filter",
            description: "A structure within a ``FilterCriteria`` object that defines an event filtering pattern.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-filter.html",
            properties: &[PropertyDoc::new("Pattern", PropertyKind::String)
                .with_description("A filter pattern. For more information on the syntax of a filter pattern, see [Filter rule...")
                .with_constraints(&[
                    Constraint::MinLength(0),
                    Constraint::MaxLength(4096),
                    Constraint::Pattern(".*"),
                ])],
        },
        PropertyTypeDoc {
            name: "FilterCriteria",
            description: "An object that contains the filters for an event source.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-filtercriteria.html",
            properties: &[PropertyDoc::new("Filters", PropertyKind::List(&PropertyKind::Struct("Filter")))
                .with_description("A list of filters.")
                .with_constraints(&[
                    Constraint::MinItems(1),
                    Constraint::MaxItems(20),
                    Constraint::UniqueItems,
                ])],
        },
        PropertyTypeDoc {
            name: "OnFailure",
            description: "A destination for events that failed processing.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-onfailure.html",
            properties: &[PropertyDoc::new("Destination", PropertyKind::String)
                .with_description("The Amazon Resource Name (ARN) of the destination resource.")
                .with_constraints(&[Constraint::MinLength(12), Constraint::MaxLength(1024)])],
        },
        PropertyTypeDoc {
            name: "ScalingConfig",
            description: "(Amazon SQS only) The scaling configuration for the event source.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-scalingconfig.html",
            properties: &[PropertyDoc::new("MaximumConcurrency", PropertyKind::Integer)
                .with_description("Limits the number of concurrent instances that the SQS event source can invoke.")
                .with_constraints(&[Constraint::Minimum(2.0), Constraint::Maximum(1000.0)])],
        },
        PropertyTypeDoc {
            name: "SourceAccessConfiguration",
            description: "An array of the authentication protocol, VPC components, or virtual host to secure and define your event source.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-sourceaccessconfiguration.html",
            properties: &[
                PropertyDoc::new("Type", PropertyKind::String)
                    .with_description("The type of authentication protocol, VPC components, or virtual host for your event source.")
                    .with_allowed_values(&[
                        "BASIC_AUTH",
                        "VPC_SUBNET",
                        "VPC_SECURITY_GROUP",
                        "SASL_SCRAM_512_AUTH",
                        "SASL_SCRAM_256_AUTH",
                        "VIRTUAL_HOST",
                        "CLIENT_CERTIFICATE_TLS_AUTH",
                        "SERVER_ROOT_CA_CERTIFICATE",
                    ]),
                PropertyDoc::new("URI", PropertyKind::String)
                    .with_description("The value for your chosen configuration in ``Type``.")
                    .with_constraints(&[
                        Constraint::MinLength(1),
                        Constraint::MaxLength(200),
                        Constraint::Pattern("[a-zA-Z0-9-\\/*:_+=.@-]*"),
                    ]),
            ],
        },
        PropertyTypeDoc {
            name: "Tag",
            description: "A [tag](https://docs.aws.amazon.com/lambda/latest/dg/tagging.html) to apply to the event source mapping.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-eventsourcemapping-tag.html",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String)
                    .required()
                    .with_description("The key for this tag.")
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(128)]),
                PropertyDoc::new("Value", PropertyKind::String)
                    .with_description("The value for this tag.")
                    .with_constraints(&[Constraint::MinLength(0), Constraint::MaxLength(256)]),
            ],
        },
    ],
    attributes: &["Id", "EventSourceMappingArn"],
};
