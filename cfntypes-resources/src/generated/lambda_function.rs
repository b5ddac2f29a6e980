//! AWS::Lambda::Function resource type
//!
//! Generated from CloudFormation resource schema `AWS::Lambda::Function`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// The [deployment package](https://docs.aws.amazon.com/lambda/latest/dg/gettingstarted-package.html) for a Lambda function.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-code.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Code {
    /// URI of a [container image](https://docs.aws.amazon.com/lambda/latest/dg/lambda-images.html) in the Amazon ECR registry.
    #[serde(rename = "ImageUri", skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<Value<String>>,
    /// An Amazon S3 bucket in the same AWS-Region as your function.
    ///
    /// Constraints: min length 3, max length 63, pattern `^[0-9A-Za-z\.\-_]*(?<!\.)$`
    #[serde(rename = "S3Bucket", skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<Value<String>>,
    /// The Amazon S3 key of the deployment package.
    ///
    /// Constraints: min length 1, max length 1024
    #[serde(rename = "S3Key", skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<Value<String>>,
    /// For versioned objects, the version of the deployment package object to use.
    ///
    /// Constraints: min length 1, max length 1024
    #[serde(rename = "S3ObjectVersion", skip_serializing_if = "Option::is_none")]
    pub s3_object_version: Option<Value<String>>,
    /// The ARN of the KMSlong (KMS) customer managed key that's used to encrypt your function's .zip deployment package.
    #[serde(rename = "SourceKMSKeyArn", skip_serializing_if = "Option::is_none")]
    pub source_kms_key_arn: Option<Value<String>>,
    /// (Node.js and Python) The source code of your Lambda function. If you include your function source inline with this parameter, CFN places it in a file named ``index`` and zips it to create a deployment package.
    #[serde(rename = "ZipFile", skip_serializing_if = "Option::is_none")]
    pub zip_file: Option<Value<String>>,
}

/// The [dead-letter queue](https://docs.aws.amazon.com/lambda/latest/dg/invocation-async.html#dlq) for failed asynchronous invocations.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-deadletterconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeadLetterConfig {
    /// The Amazon Resource Name (ARN) of an Amazon SQS queue or Amazon SNS topic.
    ///
    /// Constraints: pattern `^(arn:(aws[a-zA-Z-]*)?:[a-z0-9-.]+:.*)|()$`
    #[serde(rename = "TargetArn", skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<Value<String>>,
}

/// A function's environment variable settings.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-environment.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Environment {
    /// Environment variable key-value pairs.
    #[serde(rename = "Variables", skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value<BTreeMap<String, Value<String>>>>,
}

/// The size of the function's ``/tmp`` directory in MB. The default value is 512, but it can be any whole number between 512 and 10,240 MB.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-ephemeralstorage.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EphemeralStorage {
    /// The size of the function's ``/tmp`` directory.
    ///
    /// Constraints: minimum 512, maximum 10240
    #[serde(rename = "Size")]
    pub size: Value<i64>,
}

/// Details about the connection between a Lambda function and an Amazon EFS file system.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-filesystemconfig.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSystemConfig {
    /// The Amazon Resource Name (ARN) of the Amazon EFS access point that provides access to the file system.
    ///
    /// Constraints: max length 200
    #[serde(rename = "Arn")]
    pub arn: Value<String>,
    /// The path where the function can access the file system, starting with ``/mnt/``.
    ///
    /// Constraints: max length 160, pattern `^/mnt/[a-zA-Z0-9-_.]+$`
    #[serde(rename = "LocalMountPath")]
    pub local_mount_path: Value<String>,
}

/// Configuration values that override the container image Dockerfile settings.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-imageconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    /// Specifies parameters that you want to pass in with ENTRYPOINT. You can specify a maximum of 1,500 parameters in the list.
    ///
    /// Constraints: max items 1500, unique items
    #[serde(rename = "Command", skip_serializing_if = "Option::is_none")]
    pub command: Option<Value<Vec<Value<String>>>>,
    /// Specifies the entry point to their application, which is typically the location of the runtime executable.
    ///
    /// Constraints: max items 1500, unique items
    #[serde(rename = "EntryPoint", skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<Value<Vec<Value<String>>>>,
    /// Specifies the working directory. The length of the directory string cannot exceed 1,000 characters.
    #[serde(rename = "WorkingDirectory", skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<Value<String>>,
}

/// The function's Amazon CloudWatch Logs configuration settings.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-loggingconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Set this property to filter the application logs for your function that Lambda sends to CloudWatch.
    ///
    /// Allowed values: `TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`, `FATAL`
    #[serde(rename = "ApplicationLogLevel", skip_serializing_if = "Option::is_none")]
    pub application_log_level: Option<Value<String>>,
    /// The format in which Lambda sends your function's application and system logs to CloudWatch.
    ///
    /// Allowed values: `Text`, `JSON`
    #[serde(rename = "LogFormat", skip_serializing_if = "Option::is_none")]
    pub log_format: Option<Value<String>>,
    /// The name of the Amazon CloudWatch log group the function sends logs to.
    ///
    /// Constraints: min length 1, max length 512, pattern `[\.\-_/#A-Za-z0-9]+`
    #[serde(rename = "LogGroup", skip_serializing_if = "Option::is_none")]
    pub log_group: Option<Value<String>>,
    /// Set this property to filter the system logs for your function that Lambda sends to CloudWatch.
    ///
    /// Allowed values: `DEBUG`, `INFO`, `WARN`
    #[serde(rename = "SystemLogLevel", skip_serializing_if = "Option::is_none")]
    pub system_log_level: Option<Value<String>>,
}

/// The function's [SnapStart](https://docs.aws.amazon.com/lambda/latest/dg/snapstart.html) setting.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-snapstart.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapStart {
    /// Set ``ApplyOn`` to ``PublishedVersions`` to create a snapshot of the initialized execution environment when you publish a function version.
    ///
    /// Allowed values: `PublishedVersions`, `None`
    #[serde(rename = "ApplyOn")]
    pub apply_on: Value<String>,
}

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// Constraints: min length 1, max length 128
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// Constraints: min length 0, max length 256
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value<String>>,
}

/// The function's [](https://docs.aws.amazon.com/lambda/latest/dg/services-xray.html) tracing configuration.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-tracingconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TracingConfig {
    /// The tracing mode.
    ///
    /// Allowed values: `Active`, `PassThrough`
    #[serde(rename = "Mode", skip_serializing_if = "Option::is_none")]
    pub mode: Option<Value<String>>,
}

/// The VPC security groups and subnets that are attached to a Lambda function.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-vpcconfig.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VpcConfig {
    /// Allows outbound IPv6 traffic on VPC functions that are connected to dual-stack subnets.
    #[serde(
        rename = "Ipv6AllowedForDualStack",
        skip_serializing_if = "Option::is_none"
    )]
    pub ipv6_allowed_for_dual_stack: Option<Value<bool>>,
    /// A list of VPC security group IDs.
    ///
    /// Constraints: max items 5, unique items
    #[serde(rename = "SecurityGroupIds", skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Value<Vec<Value<String>>>>,
    /// A list of VPC subnet IDs.
    ///
    /// Constraints: max items 16, unique items
    #[serde(rename = "SubnetIds", skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Value<Vec<Value<String>>>>,
}

/// Properties of `AWS::Lambda::Function`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-function.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionProperties {
    /// The instruction set architecture that the function supports.
    ///
    /// Constraints: min items 1, max items 1, unique items
    /// Update requires: No interruption
    #[serde(rename = "Architectures", skip_serializing_if = "Option::is_none")]
    pub architectures: Option<Value<Vec<Value<String>>>>,
    /// The code for the function. You can define your function code in multiple ways.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Code")]
    pub code: Value<Code>,
    /// To enable code signing for this function, specify the ARN of a code-signing configuration.
    ///
    /// Update requires: No interruption
    #[serde(rename = "CodeSigningConfigArn", skip_serializing_if = "Option::is_none")]
    pub code_signing_config_arn: Option<Value<String>>,
    /// A dead-letter queue configuration that specifies the queue or topic where Lambda sends asynchronous events when they fail processing.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DeadLetterConfig", skip_serializing_if = "Option::is_none")]
    pub dead_letter_config: Option<Value<DeadLetterConfig>>,
    /// A description of the function.
    ///
    /// Constraints: max length 256
    /// Update requires: No interruption
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// Environment variables that are accessible from function code during execution.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Environment", skip_serializing_if = "Option::is_none")]
    pub environment: Option<Value<Environment>>,
    /// The size of the function's ``/tmp`` directory in MB.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EphemeralStorage", skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage: Option<Value<EphemeralStorage>>,
    /// Connection settings for an Amazon EFS file system.
    ///
    /// Constraints: max items 1
    /// Update requires: No interruption
    #[serde(rename = "FileSystemConfigs", skip_serializing_if = "Option::is_none")]
    pub file_system_configs: Option<Value<Vec<FileSystemConfig>>>,
    /// The name of the Lambda function, up to 64 characters in length.
    ///
    /// Constraints: min length 1
    /// Update requires: Replacement
    #[serde(rename = "FunctionName", skip_serializing_if = "Option::is_none")]
    pub function_name: Option<Value<String>>,
    /// The name of the method within your code that Lambda calls to run your function.
    ///
    /// Constraints: max length 128, pattern `^[^\s]+$`
    /// Update requires: No interruption
    #[serde(rename = "Handler", skip_serializing_if = "Option::is_none")]
    pub handler: Option<Value<String>>,
    /// Configuration values that override the container image Dockerfile settings.
    ///
    /// Update requires: No interruption
    #[serde(rename = "ImageConfig", skip_serializing_if = "Option::is_none")]
    pub image_config: Option<Value<ImageConfig>>,
    /// The ARN of the KMSlong (KMS) customer managed key that's used to encrypt the function's environment variables.
    ///
    /// Constraints: pattern `^(arn:(aws[a-zA-Z-]*)?:[a-z0-9-.]+:.*)|()$`
    /// Update requires: No interruption
    #[serde(rename = "KmsKeyArn", skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<Value<String>>,
    /// A list of [function layers](https://docs.aws.amazon.com/lambda/latest/dg/configuration-layers.html) to add to the function's execution environment.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Layers", skip_serializing_if = "Option::is_none")]
    pub layers: Option<Value<Vec<Value<String>>>>,
    /// The function's Amazon CloudWatch Logs configuration settings.
    ///
    /// Update requires: No interruption
    #[serde(rename = "LoggingConfig", skip_serializing_if = "Option::is_none")]
    pub logging_config: Option<Value<LoggingConfig>>,
    /// The amount of memory available to the function at runtime. Increasing the function memory also increases its CPU allocation.
    ///
    /// Update requires: No interruption
    #[serde(rename = "MemorySize", skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<Value<i64>>,
    /// The type of deployment package. Set to ``Image`` for container image and set ``Zip`` for .zip file archive.
    ///
    /// Allowed values: `Image`, `Zip`
    /// Update requires: No interruption
    #[serde(rename = "PackageType", skip_serializing_if = "Option::is_none")]
    pub package_type: Option<Value<String>>,
    /// The number of simultaneous executions to reserve for the function.
    ///
    /// Constraints: minimum 0
    /// Update requires: No interruption
    #[serde(
        rename = "ReservedConcurrentExecutions",
        skip_serializing_if = "Option::is_none"
    )]
    pub reserved_concurrent_executions: Option<Value<i64>>,
    /// The Amazon Resource Name (ARN) of the function's execution role.
    ///
    /// Constraints: pattern `^arn:(aws[a-zA-Z-]*)?:iam::\d{12}:role/?[a-zA-Z_0-9+=,.@\-_/]+$`
    /// Update requires: No interruption
    #[serde(rename = "Role")]
    pub role: Value<String>,
    /// The identifier of the function's [runtime](https://docs.aws.amazon.com/lambda/latest/dg/lambda-runtimes.html).
    ///
    /// Update requires: No interruption
    #[serde(rename = "Runtime", skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Value<String>>,
    /// The function's [SnapStart](https://docs.aws.amazon.com/lambda/latest/dg/snapstart.html) setting.
    ///
    /// Update requires: No interruption
    #[serde(rename = "SnapStart", skip_serializing_if = "Option::is_none")]
    pub snap_start: Option<Value<SnapStart>>,
    /// A list of [tags](https://docs.aws.amazon.com/lambda/latest/dg/tagging.html) to apply to the function.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
    /// The amount of time (in seconds) that Lambda allows a function to run before stopping it. The default is 3 seconds. The maximum allowed value is 900 seconds.
    ///
    /// Constraints: minimum 1
    /// Update requires: No interruption
    #[serde(rename = "Timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value<i64>>,
    /// Set ``Mode`` to ``Active`` to sample and trace a subset of incoming requests with X-Ray.
    ///
    /// Update requires: No interruption
    #[serde(rename = "TracingConfig", skip_serializing_if = "Option::is_none")]
    pub tracing_config: Option<Value<TracingConfig>>,
    /// For network connectivity to AWS resources in a VPC, specify a list of security groups and subnets in the VPC.
    ///
    /// Update requires: No interruption
    #[serde(rename = "VpcConfig", skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<Value<VpcConfig>>,
}

impl ResourceProperties for FunctionProperties {
    const TYPE_NAME: &'static str = "AWS::Lambda::Function";
}

/// The `AWS::Lambda::Function` resource
pub type Function = Resource<FunctionProperties>;

/// Documentation catalog of `AWS::Lambda::Function`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::Lambda::Function",
    description: "The ``AWS::Lambda::Function`` resource creates a Lambda function. To create a function, you need a deployment package and an execution role.",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-function.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("Architectures", PropertyKind::List(&PropertyKind::String))
            .with_description("The instruction set architecture that the function supports.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[
                Constraint::MinItems(1),
                Constraint::MaxItems(1),
                Constraint::UniqueItems,
            ]),
        PropertyDoc::new("Code", PropertyKind::Struct("Code"))
            .required()
            .with_description("The code for the function. You can define your function code in multiple ways.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("CodeSigningConfigArn", PropertyKind::String)
            .with_description("To enable code signing for this function, specify the ARN of a code-signing configuration.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("DeadLetterConfig", PropertyKind::Struct("DeadLetterConfig"))
            .with_description("A dead-letter queue configuration that specifies the queue or topic where Lambda sends asynchronous events when they fail processing.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Description", PropertyKind::String)
            .with_description("A description of the function.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::MaxLength(256)]),
        PropertyDoc::new("Environment", PropertyKind::Struct("Environment"))
            .with_description("Environment variables that are accessible from function code during execution.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("EphemeralStorage", PropertyKind::Struct("EphemeralStorage"))
            .with_description("The size of the function's ``/tmp`` directory in MB.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new(
            "FileSystemConfigs",
            PropertyKind::List(&PropertyKind::Struct("FileSystemConfig")),
        )
        .with_description("Connection settings for an Amazon EFS file system.")
        .with_update_requires(UpdateRequires::NoInterruption)
        .with_constraints(&[Constraint::MaxItems(1)]),
        PropertyDoc::new("FunctionName", PropertyKind::String)
            .with_description("The name of the Lambda function, up to 64 characters in length.")
            .with_update_requires(UpdateRequires::Replacement)
            .with_constraints(&[Constraint::MinLength(1)]),
        PropertyDoc::new("Handler", PropertyKind::String)
            .with_description("The name of the method within your code that Lambda calls to run your function.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::MaxLength(128), Constraint::Pattern("^[^\\s]+$")]),
        PropertyDoc::new("ImageConfig", PropertyKind::Struct("ImageConfig"))
            .with_description("Configuration values that override the container image Dockerfile settings.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("KmsKeyArn", PropertyKind::String)
            .with_description("The ARN of the KMSlong (KMS) customer managed key that's used to encrypt the function's environment variables.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Pattern("^(arn:(aws[a-zA-Z-]*)?:[a-z0-9-.]+:.*)|()$")]),
        PropertyDoc::new("Layers", PropertyKind::List(&PropertyKind::String))
            .with_description("A list of [function layers](https://docs.aws.amazon.com/lambda/latest/dg/configuration-layers.html) to add to the function's execution...")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("LoggingConfig", PropertyKind::Struct("LoggingConfig"))
            .with_description("The function's Amazon CloudWatch Logs configuration settings.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("MemorySize", PropertyKind::Integer)
            .with_description("The amount of memory available to the function at runtime. Increasing the function memory also increases its CPU allocation.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("PackageType", PropertyKind::String)
            .with_description("The type of deployment package. Set to ``Image`` for container image and set ``Zip`` for .zip file archive.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&["Image", "Zip"]),
        PropertyDoc::new("ReservedConcurrentExecutions", PropertyKind::Integer)
            .with_description("The number of simultaneous executions to reserve for the function.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(0.0)]),
        PropertyDoc::new("Role", PropertyKind::String)
            .required()
            .with_description("The Amazon Resource Name (ARN) of the function's execution role.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Pattern(
                "^arn:(aws[a-zA-Z-]*)?:iam::\\d{12}:role/?[a-zA-Z_0-9+=,.@\\-_/]+$",
            )]),
        PropertyDoc::new("Runtime", PropertyKind::String)
            .with_description("The identifier of the function's [runtime](https://docs.aws.amazon.com/lambda/latest/dg/lambda-runtimes.html).")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("SnapStart", PropertyKind::Struct("SnapStart"))
            .with_description("The function's [SnapStart](https://docs.aws.amazon.com/lambda/latest/dg/snapstart.html) setting.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("A list of [tags](https://docs.aws.amazon.com/lambda/latest/dg/tagging.html) to apply to the function.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("Timeout", PropertyKind::Integer)
            .with_description("The amount of time (in seconds) that Lambda allows a function to run before stopping it. The default is 3 seconds. The maximum allowed value is 900...")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::Minimum(1.0)]),
        PropertyDoc::new("TracingConfig", PropertyKind::Struct("TracingConfig"))
            .with_description("Set ``Mode`` to ``Active`` to sample and trace a subset of incoming requests with X-Ray.")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("VpcConfig", PropertyKind::Struct("VpcConfig"))
            .with_description("For network connectivity to AWS resources in a VPC, specify a list of security groups and subnets in the VPC.")
            .with_update_requires(UpdateRequires::NoInterruption),
    ],
    property_types: &[
        PropertyTypeDoc {
            name: "Code",
            description: "The [deployment package](https://docs.aws.amazon.com/lambda/latest/dg/gettingstarted-package.html) for a Lambda function.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-code.html",
            properties: &[
                PropertyDoc::new("ImageUri", PropertyKind::String)
                    .with_description("URI of a [container image](https://docs.aws.amazon.com/lambda/latest/dg/lambda-images.html) in the Amazon ECR registry."),
                PropertyDoc::new("S3Bucket", PropertyKind::String)
                    .with_description("An Amazon S3 bucket in the same AWS-Region as your function.")
                    .with_constraints(&[
                        Constraint::MinLength(3),
                        Constraint::MaxLength(63),
                        Constraint::Pattern("^[0-9A-Za-z\\.\\-_]*(?<!\\.)$"),
                    ]),
                PropertyDoc::new("S3Key", PropertyKind::String)
                    .with_description("The Amazon S3 key of the deployment package.")
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(1024)]),
                PropertyDoc::new("S3ObjectVersion", PropertyKind::String)
                    .with_description("For versioned objects, the version of the deployment package object to use.")
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(1024)]),
                PropertyDoc::new("SourceKMSKeyArn", PropertyKind::String)
                    .with_description("The ARN of the KMSlong (KMS) customer managed key that's used to encrypt your function's .zip deployment package."),
                PropertyDoc::new("ZipFile", PropertyKind::String)
                    .with_description("(Node.js and Python) The source code of your Lambda function. If you include your function source inline with this parameter, CFN places it in a file..."),
            ],
        },
        PropertyTypeDoc {
            name: "DeadLetterConfig",
            description: "The [dead-letter queue](https://docs.aws.amazon.com/lambda/latest/dg/invocation-async.html#dlq) for failed asynchronous invocations.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-deadletterconfig.html",
            properties: &[PropertyDoc::new("TargetArn", PropertyKind::String)
                .with_description("The Amazon Resource Name (ARN) of an Amazon SQS queue or Amazon SNS topic.")
                .with_constraints(&[Constraint::Pattern("^(arn:(aws[a-zA-Z-]*)?:[a-z0-9-.]+:.*)|()$")])],
        },
        PropertyTypeDoc {
            name: "Environment",
            description: "A function's environment variable settings.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-environment.html",
            properties: &[PropertyDoc::new("Variables", PropertyKind::Map(&PropertyKind::String))
                .with_description("Environment variable key-value pairs.")],
        },
        PropertyTypeDoc {
            name: "EphemeralStorage",
            description: "The size of the function's ``/tmp`` directory in MB. The default value is 512, but it can be any whole number between 512 and 10,240 MB.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-ephemeralstorage.html",
            properties: &[PropertyDoc::new("Size", PropertyKind::Integer)
                .required()
                .with_description("The size of the function's ``/tmp`` directory.")
                .with_constraints(&[Constraint::Minimum(512.0), Constraint::Maximum(10240.0)])],
        },
        PropertyTypeDoc {
            name: "FileSystemConfig",
            description: "Details about the connection between a Lambda function and an Amazon EFS file system.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-filesystemconfig.html",
            properties: &[
                PropertyDoc::new("Arn", PropertyKind::String)
                    .required()
                    .with_description("The Amazon Resource Name (ARN) of the Amazon EFS access point that provides access to the file system.")
                    .with_constraints(&[Constraint::MaxLength(200)]),
                PropertyDoc::new("LocalMountPath", PropertyKind::String)
                    .required()
                    .with_description("The path where the function can access the file system, starting with ``/mnt/``.")
                    .with_constraints(&[
                        Constraint::MaxLength(160),
                        Constraint::Pattern("^/mnt/[a-zA-Z0-9-_.]+$"),
                    ]),
            ],
        },
        PropertyTypeDoc {
            name: "ImageConfig",
            description: "Configuration values that override the container image Dockerfile settings.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-imageconfig.html",
            properties: &[
                PropertyDoc::new("Command", PropertyKind::List(&PropertyKind::String))
                    .with_description("Specifies parameters that you want to pass in with ENTRYPOINT. You can specify a maximum of 1,500 parameters in the list.")
                    .with_constraints(&[Constraint::MaxItems(1500), Constraint::UniqueItems]),
                PropertyDoc::new("EntryPoint", PropertyKind::List(&PropertyKind::String))
                    .with_description("Specifies the entry point to their application, which is typically the location of the runtime executable.")
                    .with_constraints(&[Constraint::MaxItems(1500), Constraint::UniqueItems]),
                PropertyDoc::new("WorkingDirectory", PropertyKind::String)
                    .with_description("Specifies the working directory. The length of the directory string cannot exceed 1,000 characters."),
            ],
        },
        PropertyTypeDoc {
            name: "LoggingConfig",
            description: "The function's Amazon CloudWatch Logs configuration settings.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-loggingconfig.html",
            properties: &[
                PropertyDoc::new("ApplicationLogLevel", PropertyKind::String)
                    .with_description("Set this property to filter the application logs for your function that Lambda sends to CloudWatch.")
                    .with_allowed_values(&["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"]),
                PropertyDoc::new("LogFormat", PropertyKind::String)
                    .with_description("The format in which Lambda sends your function's application and system logs to CloudWatch.")
                    .with_allowed_values(&["Text", "JSON"]),
                PropertyDoc::new("LogGroup", PropertyKind::String)
                    .with_description("The name of the Amazon CloudWatch log group the function sends logs to.")
                    .with_constraints(&[
                        Constraint::MinLength(1),
                        Constraint::MaxLength(512),
                        Constraint::Pattern("[\\.\\-_/#A-Za-z0-9]+"),
                    ]),
                PropertyDoc::new("SystemLogLevel", PropertyKind::String)
                    .with_description("Set this property to filter the system logs for your function that Lambda sends to CloudWatch.")
                    .with_allowed_values(&["DEBUG", "INFO", "WARN"]),
            ],
        },
        PropertyTypeDoc {
            name: "SnapStart",
            description: "The function's [SnapStart](https://docs.aws.amazon.com/lambda/latest/dg/snapstart.html) setting.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-snapstart.html",
            properties: &[PropertyDoc::new("ApplyOn", PropertyKind::String)
                .required()
                .with_description("Set ``ApplyOn`` to ``PublishedVersions`` to create a snapshot of the initialized execution environment when you publish a function version.")
                .with_allowed_values(&["PublishedVersions", "None"])],
        },
        PropertyTypeDoc {
            name: "Tag",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-tag.html",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String)
                    .required()
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(128)]),
                PropertyDoc::new("Value", PropertyKind::String)
                    .with_constraints(&[Constraint::MinLength(0), Constraint::MaxLength(256)]),
            ],
        },
        PropertyTypeDoc {
            name: "TracingConfig",
            description: "The function's [](https://docs.aws.amazon.com/lambda/latest/dg/services-xray.html) tracing configuration.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-tracingconfig.html",
            properties: &[PropertyDoc::new("Mode", PropertyKind::String)
                .with_description("The tracing mode.")
                .with_allowed_values(&["Active", "PassThrough"])],
        },
        PropertyTypeDoc {
            name: "VpcConfig",
            description: "The VPC security groups and subnets that are attached to a Lambda function.",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-lambda-function-vpcconfig.html",
            properties: &[
                PropertyDoc::new("Ipv6AllowedForDualStack", PropertyKind::Boolean)
                    .with_description("Allows outbound IPv6 traffic on VPC functions that are connected to dual-stack subnets."),
                PropertyDoc::new("SecurityGroupIds", PropertyKind::List(&PropertyKind::String))
                    .with_description("A list of VPC security group IDs.")
                    .with_constraints(&[Constraint::MaxItems(5), Constraint::UniqueItems]),
                PropertyDoc::new("SubnetIds", PropertyKind::List(&PropertyKind::String))
                    .with_description("A list of VPC subnet IDs.")
                    .with_constraints(&[Constraint::MaxItems(16), Constraint::UniqueItems]),
            ],
        },
    ],
    attributes: &[
        "SnapStartResponse",
        "SnapStartResponse.ApplyOn",
        "SnapStartResponse.OptimizationStatus",
        "Arn",
    ],
};
