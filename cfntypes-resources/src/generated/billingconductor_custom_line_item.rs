//! AWS::BillingConductor::CustomLineItem resource type
//!
//! Generated from CloudFormation resource schema `AWS::BillingConductor::CustomLineItem`.
//! DO NOT EDIT MANUALLY - regenerate with cfntypes-codegen

#![allow(unused_imports)]

use std::collections::BTreeMap;

use cfntypes_core::schema::{
    Constraint, PropertyDoc, PropertyKind, PropertyTypeDoc, ResourceDoc, UpdateRequires,
};
use cfntypes_core::{Json, Resource, ResourceProperties, Value};
use serde::{Deserialize, Serialize};

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-billingperiodrange.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BillingPeriodRange {
    #[serde(
        rename = "ExclusiveEndBillingPeriod",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclusive_end_billing_period: Option<Value<String>>,
    #[serde(
        rename = "InclusiveStartBillingPeriod",
        skip_serializing_if = "Option::is_none"
    )]
    pub inclusive_start_billing_period: Option<Value<String>>,
}

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-customlineitemchargedetails.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomLineItemChargeDetails {
    #[serde(rename = "Flat", skip_serializing_if = "Option::is_none")]
    pub flat: Option<Value<CustomLineItemFlatChargeDetails>>,
    #[serde(rename = "LineItemFilters", skip_serializing_if = "Option::is_none")]
    pub line_item_filters: Option<Value<Vec<LineItemFilter>>>,
    #[serde(rename = "Percentage", skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Value<CustomLineItemPercentageChargeDetails>>,
    /// Allowed values: `FEE`, `CREDIT`
    #[serde(rename = "Type")]
    pub r#type: Value<String>,
}

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-customlineitemflatchargedetails.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomLineItemFlatChargeDetails {
    /// Constraints: minimum 0, maximum 1000000
    #[serde(rename = "ChargeValue")]
    pub charge_value: Value<f64>,
}

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-customlineitempercentagechargedetails.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomLineItemPercentageChargeDetails {
    /// Constraints: unique items
    #[serde(
        rename = "ChildAssociatedResources",
        skip_serializing_if = "Option::is_none"
    )]
    pub child_associated_resources: Option<Value<Vec<Value<String>>>>,
    /// Constraints: minimum 0, maximum 10000
    #[serde(rename = "PercentageValue")]
    pub percentage_value: Value<f64>,
}

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-lineitemfilter.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineItemFilter {
    /// Allowed values: `LINE_ITEM_TYPE`
    #[serde(rename = "Attribute")]
    pub attribute: Value<String>,
    /// Allowed values: `NOT_EQUAL`
    #[serde(rename = "MatchOption")]
    pub match_option: Value<String>,
    /// Constraints: unique items
    #[serde(rename = "Values")]
    pub values: Value<Vec<Value<String>>>,
}

/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-tag.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// Constraints: min length 1, max length 128
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// Constraints: min length 0, max length 256
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// Properties of `AWS::BillingConductor::CustomLineItem`.
///
/// <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-billingconductor-customlineitem.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomLineItemProperties {
    /// The account which this custom line item will be charged to
    ///
    /// Constraints: pattern `[0-9]{12}`
    /// Update requires: Replacement
    #[serde(rename = "AccountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Value<String>>,
    /// Billing Group ARN
    ///
    /// Constraints: pattern `arn:aws(-cn)?:billingconductor::[0-9]{12}:billinggroup/?[0-9]{12}`
    /// Update requires: Replacement
    #[serde(rename = "BillingGroupArn")]
    pub billing_group_arn: Value<String>,
    /// Update requires: Replacement
    #[serde(rename = "BillingPeriodRange", skip_serializing_if = "Option::is_none")]
    pub billing_period_range: Option<Value<BillingPeriodRange>>,
    /// Update requires: No interruption
    #[serde(
        rename = "CustomLineItemChargeDetails",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_line_item_charge_details: Option<Value<CustomLineItemChargeDetails>>,
    /// Constraints: min length 0, max length 255
    /// Update requires: No interruption
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// Constraints: min length 1, max length 128, pattern `[a-zA-Z0-9_\+=\.\-@]+`
    /// Update requires: No interruption
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// Constraints: unique items
    /// Update requires: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Tag>>>,
}

impl ResourceProperties for CustomLineItemProperties {
    const TYPE_NAME: &'static str = "AWS::BillingConductor::CustomLineItem";
}

/// The `AWS::BillingConductor::CustomLineItem` resource
pub type CustomLineItem = Resource<CustomLineItemProperties>;

/// Documentation catalog of `AWS::BillingConductor::CustomLineItem`
pub static DOC: ResourceDoc = ResourceDoc {
    type_name: "AWS::BillingConductor::CustomLineItem",
    description: "A custom line item is an one time charge that is applied to a specific billing group's bill.",
    documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-billingconductor-customlineitem.html",
    taggable: true,
    properties: &[
        PropertyDoc::new("AccountId", PropertyKind::String)
            .with_description("The account which this custom line item will be charged to")
            .with_update_requires(UpdateRequires::Replacement)
            .with_constraints(&[Constraint::Pattern("[0-9]{12}")]),
        PropertyDoc::new("BillingGroupArn", PropertyKind::String)
            .required()
            .with_description("Billing Group ARN")
            .with_update_requires(UpdateRequires::Replacement)
            .with_constraints(&[Constraint::Pattern(
                "arn:aws(-cn)?:billingconductor::[0-9]{12}:billinggroup/?[0-9]{12}",
            )]),
        PropertyDoc::new("BillingPeriodRange", PropertyKind::Struct("BillingPeriodRange"))
            .with_update_requires(UpdateRequires::Replacement),
        PropertyDoc::new(
            "CustomLineItemChargeDetails",
            PropertyKind::Struct("CustomLineItemChargeDetails"),
        )
        .with_update_requires(UpdateRequires::NoInterruption),
        PropertyDoc::new("Description", PropertyKind::String)
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::MinLength(0), Constraint::MaxLength(255)]),
        PropertyDoc::new("Name", PropertyKind::String)
            .required()
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[
                Constraint::MinLength(1),
                Constraint::MaxLength(128),
                Constraint::Pattern("[a-zA-Z0-9_\\+=\\.\\-@]+"),
            ]),
        PropertyDoc::new("Tags", PropertyKind::List(&PropertyKind::Struct("Tag")))
            .with_update_requires(UpdateRequires::NoInterruption)
            .with_constraints(&[Constraint::UniqueItems]),
    ],
    property_types: &[
        PropertyTypeDoc {
            name: "BillingPeriodRange",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-billingperiodrange.html",
            properties: &[
                PropertyDoc::new("ExclusiveEndBillingPeriod", PropertyKind::String),
                PropertyDoc::new("InclusiveStartBillingPeriod", PropertyKind::String),
            ],
        },
        PropertyTypeDoc {
            name: "CustomLineItemChargeDetails",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-customlineitemchargedetails.html",
            properties: &[
                PropertyDoc::new("Flat", PropertyKind::Struct("CustomLineItemFlatChargeDetails")),
                PropertyDoc::new(
                    "LineItemFilters",
                    PropertyKind::List(&PropertyKind::Struct("LineItemFilter")),
                ),
                PropertyDoc::new(
                    "Percentage",
                    PropertyKind::Struct("CustomLineItemPercentageChargeDetails"),
                ),
                PropertyDoc::new("Type", PropertyKind::String)
                    .required()
                    .with_allowed_values(&["FEE", "CREDIT"]),
            ],
        },
        PropertyTypeDoc {
            name: "CustomLineItemFlatChargeDetails",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-customlineitemflatchargedetails.html",
            properties: &[PropertyDoc::new("ChargeValue", PropertyKind::Number)
                .required()
                .with_constraints(&[Constraint::Minimum(0.0), Constraint::Maximum(1000000.0)])],
        },
        PropertyTypeDoc {
            name: "CustomLineItemPercentageChargeDetails",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-customlineitempercentagechargedetails.html",
            properties: &[
                PropertyDoc::new(
                    "ChildAssociatedResources",
                    PropertyKind::List(&PropertyKind::String),
                )
                .with_constraints(&[Constraint::UniqueItems]),
                PropertyDoc::new("PercentageValue", PropertyKind::Number)
                    .required()
                    .with_constraints(&[Constraint::Minimum(0.0), Constraint::Maximum(10000.0)]),
            ],
        },
        PropertyTypeDoc {
            name: "LineItemFilter",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-lineitemfilter.html",
            properties: &[
                PropertyDoc::new("Attribute", PropertyKind::String)
                    .required()
                    .with_allowed_values(&["LINE_ITEM_TYPE"]),
                PropertyDoc::new("MatchOption", PropertyKind::String)
                    .required()
                    .with_allowed_values(&["NOT_EQUAL"]),
                PropertyDoc::new("Values", PropertyKind::List(&PropertyKind::String))
                    .required()
                    .with_constraints(&[Constraint::UniqueItems]),
            ],
        },
        PropertyTypeDoc {
            name: "Tag",
            description: "",
            documentation_url: "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-billingconductor-customlineitem-tag.html",
            properties: &[
                PropertyDoc::new("Key", PropertyKind::String)
                    .required()
                    .with_constraints(&[Constraint::MinLength(1), Constraint::MaxLength(128)]),
                PropertyDoc::new("Value", PropertyKind::String)
                    .required()
                    .with_constraints(&[Constraint::MinLength(0), Constraint::MaxLength(256)]),
            ],
        },
    ],
    attributes: &[
        "Arn",
        "AssociationSize",
        "CreationTime",
        "CurrencyCode",
        "LastModifiedTime",
        "ProductCode",
    ],
};
