//! Generated resource types
//!
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

pub mod billingconductor_custom_line_item;
pub mod dynamodb_table;
pub mod ec2_security_group;
pub mod ec2_vpc;
pub mod ecr_repository;
pub mod iam_role;
pub mod kms_key;
pub mod lambda_event_source_mapping;
pub mod lambda_function;
pub mod logs_log_group;
pub mod secretsmanager_secret;
pub mod sns_topic;
pub mod sqs_queue;

use crate::registry::RegisteredResource;

/// Every generated resource type
pub fn registered() -> Vec<RegisteredResource> {
    Vec::from([
        RegisteredResource::of::<billingconductor_custom_line_item::CustomLineItemProperties>(
            &billingconductor_custom_line_item::DOC,
        ),
        RegisteredResource::of::<dynamodb_table::TableProperties>(&dynamodb_table::DOC),
        RegisteredResource::of::<ec2_security_group::SecurityGroupProperties>(
            &ec2_security_group::DOC,
        ),
        RegisteredResource::of::<ec2_vpc::VpcProperties>(&ec2_vpc::DOC),
        RegisteredResource::of::<ecr_repository::RepositoryProperties>(&ecr_repository::DOC),
        RegisteredResource::of::<iam_role::RoleProperties>(&iam_role::DOC),
        RegisteredResource::of::<kms_key::KeyProperties>(&kms_key::DOC),
        RegisteredResource::of::<lambda_event_source_mapping::EventSourceMappingProperties>(
            &lambda_event_source_mapping::DOC,
        ),
        RegisteredResource::of::<lambda_function::FunctionProperties>(&lambda_function::DOC),
        RegisteredResource::of::<logs_log_group::LogGroupProperties>(&logs_log_group::DOC),
        RegisteredResource::of::<secretsmanager_secret::SecretProperties>(
            &secretsmanager_secret::DOC,
        ),
        RegisteredResource::of::<sns_topic::TopicProperties>(&sns_topic::DOC),
        RegisteredResource::of::<sqs_queue::QueueProperties>(&sqs_queue::DOC),
    ])
}
