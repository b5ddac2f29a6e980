//! AWS::EC2::VPC resource type
//!
//! Generated from CloudFormation resource schema `AWS::EC2::VPC`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// Specifies a tag. For more information, see [Resource tags](https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-resource-tags.html).
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-vpc-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The tag key.
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The tag value.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::EC2::VPC`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VpcProperties {
    /// The IPv4 network range for the VPC, in CIDR notation. For example, ``10.0.0.0/16``.
    /// We modify the specified CIDR block to its canonical form; for example, if you specify ``100.68.0.18/18``, we modify it to ``100.68.0.0/18``.
    /// You must specify either``CidrBlock`` or ``Ipv4IpamPoolId``.
    ///
    /// Update requires: Replacement
    #[serde(rename = "CidrBlock", skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<Value<String>>,
    /// Indicates whether the instances launched in the VPC get DNS hostnames. If enabled, instances in the VPC get DNS hostnames; otherwise, they do not.
    /// Disabled by default for nondefault VPCs.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EnableDnsHostnames", skip_serializing_if = "Option::is_none")]
    pub enable_dns_hostnames: Option<Value<bool>>,
    /// Indicates whether the DNS resolution is supported for the VPC. If enabled, queries to the Amazon provided DNS server at the 169.254.169.253 IP address succeed.
    /// Enabled by default.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EnableDnsSupport", skip_serializing_if = "Option::is_none")]
    pub enable_dns_support: Option<Value<bool>>,
    /// The allowed tenancy of instances launched into the VPC.
    /// + ``default``: An instance launched into the VPC runs on shared hardware by default, unless you explicitly specify a different tenancy during instance launch.
    /// + ``dedicated``: An instance launched into the VPC runs on dedicated hardware by default, unless you explicitly specify a tenancy of ``host`` during instance launch.
    ///
    /// Updating ``InstanceTenancy`` requires no replacement only if you are updating its value from ``dedicated`` to ``default``.
    ///
    /// Allowed values: `default`, `dedicated`, `host`
    /// Update requires: No interruption
    #[serde(rename = "InstanceTenancy", skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<Value<String>>,
    /// The ID of an IPv4 IPAM pool you want to use for allocating this VPC's CIDR.
    ///
    /// Update requires: Replacement
    #[serde(rename = "Ipv4IpamPoolId", skip_serializing_if = "Option::is_none")]
    pub ipv4_ipam_pool_id: Option<Value<String>>,
    /// The netmask length of the IPv4 CIDR you want to allocate to this VPC from an Amazon VPC IP Address Manager (IPAM) pool.
    ///
    /// Update requires: Replacement
    #[serde(rename = "Ipv4NetmaskLength", skip_serializing_if = "Option::is_none")]
    pub ipv4_netmask_length: Option<Value<i64>>,
    /// The tags for the VPC.
    ///
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
}

impl ResourceProperties for VpcProperties {
    const TYPE_NAME: &'static str = "AWS::EC2::VPC";
}

/// The `AWS::EC2::VPC` resource
pub type Vpc = Resource<VpcProperties>;

/// Documentation catalog of `AWS::EC2::VPC`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::EC2::VPC",
    description: "Specifies a virtual private cloud (VPC).",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("CidrBlock", PropertyKind::String)
            .with_description("The IPv4 network range for the VPC, in CIDR notation. For example, ``10.0.0.0/16``. We modify the specified CIDR block to its canonical form; for...")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("EnableDnsHostnames", PropertyKind::Boolean)
            .with_description("Indicates whether the instances launched in the VPC get DNS hostnames. If enabled, instances in the VPC get DNS hostnames; otherwise, they do not....")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("EnableDnsSupport", PropertyKind::Boolean)
            .with_description("Indicates whether the DNS resolution is supported for the VPC. If enabled, queries to the Amazon provided DNS server at the 169.254.169.253 IP...")
            .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("InstanceTenancy", PropertyKind::String)
            .with_description("The allowed tenancy of instances launched into the VPC. + ``default``: An instance launched into the VPC runs on shared hardware by default, unless...")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_allowed_values(&["default", "dedicated", "host"]),
        PropertyDoc::new("Ipv4IpamPoolId", PropertyKind::String)
            .with_description("The ID of an IPv4 IPAM pool you want to use for allocating this VPC's CIDR.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("Ipv4NetmaskLength", PropertyKind::Integer)
            .with_description("The netmask length of the IPv4 CIDR you want to allocate to this VPC from an Amazon VPC IP Address Manager (IPAM) pool.")
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_description("The tags for the VPC.")
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
    ],
    property_types: &[PropertyTypeDoc {
        name: "Tag",
        description: "Specifies a tag. For more information, see [Resource tags](https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-resource-tags....",
        documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-vpc-tag.html",
        properties: &[
            PropertyDoc::new("Key", PropertyKind::String)
                .required()
                .with_description("The tag key."),
            PropertyDoc::new("Value", PropertyKind::String)
                .required()
                .with_description("The tag value."),
        ],
    }],
    attributes: &[
        "CidrBlockAssociations",
        "DefaultNetworkAcl",
        "DefaultSecurityGroup",
        "Ipv6CidrBlocks",
        "VpcId",
    ],
};
