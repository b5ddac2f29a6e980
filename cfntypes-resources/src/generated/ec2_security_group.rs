//! AWS::EC2::SecurityGroup resource type
//!
//! Generated from CloudFormation resource schema `AWS::EC2::SecurityGroup`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-securitygroup-egress.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Egress {
    #[serde(rename = "CidrIp", skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<Value<String>>,
    #[serde(rename = "CidrIpv6", skip_serializing_if = "Option::is_none")]
    pub cidr_ipv6: Option<Value<String>>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    #[serde(
        rename = "DestinationPrefixListId",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_prefix_list_id: Option<Value<String>>,
    #[serde(
        rename = "DestinationSecurityGroupId",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_security_group_id: Option<Value<String>>,
    #[serde(rename = "FromPort", skip_serializing_if = "Option::is_none")]
    pub from_port: Option<Value<i64>>,
    #[serde(rename = "IpProtocol")]
    pub ip_protocol: Value<String>,
    #[serde(rename = "ToPort", skip_serializing_if = "Option::is_none")]
    pub to_port: Option<Value<i64>>,
}

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-securitygroup-ingress.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ingress {
    #[serde(rename = "CidrIp", skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<Value<String>>,
    #[serde(rename = "CidrIpv6", skip_serializing_if = "Option::is_none")]
    pub cidr_ipv6: Option<Value<String>>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    #[serde(rename = "FromPort", skip_serializing_if = "Option::is_none")]
    pub from_port: Option<Value<i64>>,
    #[serde(rename = "IpProtocol")]
    pub ip_protocol: Value<String>,
    #[serde(rename = "SourcePrefixListId", skip_serializing_if = "Option::is_none")]
    pub source_prefix_list_id: Option<Value<String>>,
    #[serde(rename = "SourceSecurityGroupId", skip_serializing_if = "Option::is_none")]
    pub source_security_group_id: Option<Value<String>>,
    #[serde(
        rename = "SourceSecurityGroupName",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_security_group_name: Option<Value<String>>,
    #[serde(
        rename = "SourceSecurityGroupOwnerId",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_security_group_owner_id: Option<Value<String>>,
    #[serde(rename = "ToPort", skip_serializing_if = "Option::is_none")]
    pub to_port: Option<Value<i64>>,
}

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-securitygroup-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: Value<String>,
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::EC2::SecurityGroup`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-securitygroup.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityGroupProperties {
    /// A description for the security group.
    ///
    /// Update requires: Replacement
    #[serde(rename = "GroupDescription")]
    pub group_description: Value<String>,
    /// The name of the security group.
    ///
    /// Update requires: Replacement
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<Value<String>>,
    /// [VPC only] The outbound rules associated with the security group. There is a short interruption during which you cannot connect to the security group.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "SecurityGroupEgress", skip_serializing_if = "Option::is_none")]
    pub security_group_egress: Option<Value<Vec<Egress>>>,
    /// The inbound rules associated with the security group. There is a short interruption during which you cannot connect to the security group.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "SecurityGroupIngress", skip_serializing_if = "Option::is_none")]
    pub security_group_ingress: Option<Value<Vec<Ingress>>>,
    /// Any tags assigned to the security group.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
    /// The ID of the VPC for the security group.
    ///
    /// Update requires: Replacement
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<Value<String>>,
}

impl ResourceProperties for SecurityGroupProperties {
    const TYPE_NAME: &'static str = "AWS::EC2::SecurityGroup";
}

/// The `AWS::EC2::SecurityGroup` resource
pub type SecurityGroup = Resource<SecurityGroupProperties>;

/// Documentation catalog of `AWS::EC2::SecurityGroup`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::EC2::SecurityGroup",
    description: "Resource Type definition for AWS::EC2::SecurityGroup",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-securitygroup.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("GroupDescription", PropertyKind::String)
            .required()
            .with_description("A description for the security group.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("GroupName", PropertyKind::String)
            .with_description("The name of the security group.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new(
            "SecurityGroupEgress",
            PropertyKind::List(&PropertyKind::Struct("Egress")),
        )
        .with_description("[VPC only] The outbound rules associated with the security group. There is a short interruption during which you cannot connect to the security group.")
        .with_update_requires(UpdateRequires::NoInterruption)
        .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new(
            "SecurityGroupIngress",
            PropertyKind::List(&PropertyKind::Struct("Ingress")),
        )
        .with_description("The inbound rules associated with the security group. There is a short interruption during which you cannot connect to the security group.")
        .with_update_requires(UpdateRequires::NoInterruption)
        .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("Any tags assigned to the security group.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
        PropertyDoc::new("VpcId", PropertyKind::String)
            .with_description("The ID of the VPC for the security group.")
            .with_update_requires(UpdateRequires::Replacement),
    ],
    property_types: &[
        PropertyTypeDoc {
            name: "Egress",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-securitygroup-egress.html",
            properties: &[
                PropertyDoc::new("CidrIp", PropertyKind::String),
                PropertyDoc::new("CidrIpv6", PropertyKind::String),
                PropertyDoc::new("Description", PropertyKind::String),
                PropertyDoc::new("DestinationPrefixListId", PropertyKind::String),
                PropertyDoc::new("DestinationSecurityGroupId", PropertyKind::String),
                PropertyDoc::new("FromPort", PropertyKind::Integer),
                PropertyDoc::new("IpProtocol", PropertyKind::String).required(),
                PropertyDoc::new("ToPort", PropertyKind::Integer),
            ],
        },
        PropertyTypeDoc {
            name: "Ingress",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-securitygroup-ingress.html",
            properties: &[
                PropertyDoc::new("CidrIp", PropertyKind::String),
                PropertyDoc::new("CidrIpv6", PropertyKind::String),
                PropertyDoc::new("Description", PropertyKind::String),
                PropertyDoc::new("FromPort", PropertyKind::Integer),
                PropertyDoc::new("IpProtocol", PropertyKind::String).required(),
                PropertyDoc::new("SourcePrefixListId", PropertyKind::String),
                PropertyDoc::new("SourceSecurityGroupId", PropertyKind::String),
                PropertyDoc::new("SourceSecurityGroupName", PropertyKind::String),
                PropertyDoc::new("SourceSecurityGroupOwnerId", PropertyKind::String),
                PropertyDoc::new("ToPort", PropertyKind::Integer),
            ],
        },
        PropertyTypeDoc {
            name: "Tag",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-securitygroup-tag.html",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String).required(),
                PropertyDoc::new("Value", PropertyKind::String).required(),
            ],
        },
    ],
    attributes: &["GroupId", "Id"],
};
