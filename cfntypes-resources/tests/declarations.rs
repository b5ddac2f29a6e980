use std::collections::BTreeMap;

use cfntypes_core::{
    DeletionPolicy, DependsOn, Error, Intrinsic, Json, Resource, ResourceAttributes, Value,
};
use cfntypes_resources::generated::billingconductor_custom_line_item::{
    CustomLineItem, CustomLineItemChargeDetails, CustomLineItemFlatChargeDetails,
    CustomLineItemProperties, LineItemFilter,
};
use cfntypes_resources::generated::dynamodb_table::Table;
use cfntypes_resources::generated::iam_role::Role;
use cfntypes_resources::generated::lambda_event_source_mapping::{Filter, FilterCriteria};
use cfntypes_resources::generated::lambda_function::{Environment, Function};
use cfntypes_resources::generated::sqs_queue::{Queue, QueueProperties, Tag};
use cfntypes_resources::{check_template, lookup};
use serde_json::json;

fn shape_error(err: Error) -> (String, String) {
    match err {
        Error::Shape { path, message } => (path, message),
        other => panic!("expected a shape error, got {:?}", other),
    }
}

#[test]
fn minimal_queue_with_empty_properties() {
    let queue = Queue::from_json(&json!({
        "Type": "AWS::SQS::Queue",
        "Properties": {}
    }))
    .unwrap();
    assert_eq!(queue.properties, QueueProperties::default());
    assert!(queue.attributes.is_empty());
}

#[test]
fn minimal_queue_without_properties() {
    let queue = Queue::from_json(&json!({ "Type": "AWS::SQS::Queue" })).unwrap();
    assert_eq!(queue.properties, QueueProperties::default());
}

#[test]
fn missing_required_property_is_reported() {
    let err = CustomLineItem::from_json(&json!({
        "Type": "AWS::BillingConductor::CustomLineItem",
        "Properties": { "Name": "Support fee" }
    }))
    .unwrap_err();
    let (path, message) = shape_error(err);
    assert_eq!(path, "Properties");
    assert!(message.contains("BillingGroupArn"), "{}", message);
}

#[test]
fn required_properties_are_documented() {
    let doc = lookup("AWS::BillingConductor::CustomLineItem").unwrap().doc;
    let required: Vec<&str> = doc.required_properties().map(|p| p.name).collect();
    assert_eq!(required, vec!["BillingGroupArn", "Name"]);
}

#[test]
fn wrong_primitive_type_fails() {
    let err = Queue::from_json(&json!({
        "Type": "AWS::SQS::Queue",
        "Properties": { "VisibilityTimeout": "sixty" }
    }))
    .unwrap_err();
    assert_eq!(
        shape_error(err),
        (
            "Properties.VisibilityTimeout".to_string(),
            "invalid type: string \"sixty\", expected i64".to_string()
        )
    );

    let err = Queue::from_json(&json!({
        "Type": "AWS::SQS::Queue",
        "Properties": { "FifoQueue": "yes" }
    }))
    .unwrap_err();
    assert_eq!(shape_error(err).0, "Properties.FifoQueue");
}

#[test]
fn nested_property_errors_keep_path_and_reason() {
    let err = Queue::from_json(&json!({
        "Type": "AWS::SQS::Queue",
        "Properties": { "Tags": [{ "Key": "team", "Value": "a" }, { "Key": "env" }] }
    }))
    .unwrap_err();
    assert_eq!(
        shape_error(err),
        (
            "Properties.Tags[1]".to_string(),
            "missing field `Value`".to_string()
        )
    );

    let err = Queue::from_json(&json!({
        "Type": "AWS::SQS::Queue",
        "Properties": { "Tags": [{ "Key": 42, "Value": "a" }] }
    }))
    .unwrap_err();
    let (path, message) = shape_error(err);
    assert_eq!(path, "Properties.Tags[0].Key");
    assert!(message.contains("expected a string"), "{}", message);

    let err = Queue::from_json(&json!({
        "Type": "AWS::SQS::Queue",
        "Properties": { "Tags": [{ "Key": "a", "Value": "b", "Extra": 1 }] }
    }))
    .unwrap_err();
    let (path, message) = shape_error(err);
    assert!(path.starts_with("Properties.Tags[0]"), "{}", path);
    assert!(message.contains("unknown field `Extra`"), "{}", message);
}

#[test]
fn deeply_nested_errors_keep_path() {
    let err = CustomLineItem::from_json(&json!({
        "Type": "AWS::BillingConductor::CustomLineItem",
        "Properties": {
            "BillingGroupArn": "arn:aws:billingconductor::1:billinggroup/x",
            "Name": "Fee",
            "CustomLineItemChargeDetails": {
                "Type": "FEE",
                "Flat": { "ChargeValue": "ten" }
            }
        }
    }))
    .unwrap_err();
    let (path, message) = shape_error(err);
    assert_eq!(path, "Properties.CustomLineItemChargeDetails.Flat.ChargeValue");
    assert!(message.contains("expected f64"), "{}", message);
}

#[test]
fn condition_key_in_string_map_is_literal() {
    let function = Function::from_json(&json!({
        "Type": "AWS::Lambda::Function",
        "Properties": {
            "Code": { "ZipFile": "exports.handler = () => {}" },
            "Role": "arn:aws:iam::1:role/r",
            "Environment": { "Variables": { "Condition": "prod" } }
        }
    }))
    .unwrap();
    let variables = function
        .properties
        .environment
        .and_then(Value::into_literal)
        .and_then(|env| env.variables)
        .and_then(Value::into_literal)
        .unwrap();
    assert_eq!(variables["Condition"], Value::literal("prod".to_string()));
}

#[test]
fn intrinsics_are_accepted_anywhere() {
    let queue = Queue::from_json(&json!({
        "Type": "AWS::SQS::Queue",
        "Properties": {
            "QueueName": { "Fn::Sub": "${AWS::StackName}-jobs" },
            "VisibilityTimeout": { "Ref": "Timeout" },
            "FifoQueue": { "Fn::If": ["IsFifo", true, { "Ref": "AWS::NoValue" }] },
            "KmsMasterKeyId": { "Fn::GetAtt": "Key.Arn" },
            "Tags": { "Ref": "SharedTags" }
        }
    }))
    .unwrap();

    let props = &queue.properties;
    assert_eq!(
        props.visibility_timeout,
        Some(Value::Intrinsic(Intrinsic::reference("Timeout")))
    );
    assert_eq!(
        props.kms_master_key_id,
        Some(Value::Intrinsic(Intrinsic::get_att("Key", "Arn")))
    );
    assert!(props.fifo_queue.as_ref().is_some_and(Value::is_intrinsic));
    assert!(props.tags.as_ref().is_some_and(Value::is_intrinsic));

    // The dotted GetAtt form is written back as the array form
    let out = queue.to_json().unwrap();
    assert_eq!(
        out["Properties"]["KmsMasterKeyId"],
        json!({ "Fn::GetAtt": ["Key", "Arn"] })
    );
}

#[test]
fn intrinsic_in_place_of_nested_property_type() {
    let function = Function::from_json(&json!({
        "Type": "AWS::Lambda::Function",
        "Properties": {
            "Code": { "Fn::If": ["UseImage", { "ImageUri": "x" }, { "ZipFile": "y" }] },
            "Role": { "Fn::GetAtt": ["ExecutionRole", "Arn"] },
            "Environment": {
                "Variables": {
                    "TABLE": { "Ref": "Table" },
                    "STAGE": "prod"
                }
            }
        }
    }))
    .unwrap();
    assert!(function.properties.code.is_intrinsic());

    let variables = function
        .properties
        .environment
        .and_then(Value::into_literal)
        .and_then(|env| env.variables)
        .and_then(Value::into_literal)
        .unwrap();
    assert_eq!(variables["STAGE"], Value::literal("prod".to_string()));
    assert!(variables["TABLE"].is_intrinsic());
}

#[test]
fn mismatched_type_discriminant_fails() {
    let err = Queue::from_json(&json!({ "Type": "AWS::SNS::Topic" })).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            expected: "AWS::SQS::Queue".to_string(),
            got: "AWS::SNS::Topic".to_string(),
        }
    );
}

#[test]
fn unknown_property_fails() {
    let err = Queue::from_json(&json!({
        "Type": "AWS::SQS::Queue",
        "Properties": { "QueueNmae": "typo" }
    }))
    .unwrap_err();
    let (path, message) = shape_error(err);
    assert!(path.starts_with("Properties"), "{}", path);
    assert!(message.contains("unknown field `QueueNmae`"), "{}", message);
}

#[test]
fn json_typed_properties_take_any_document() {
    let role = Role::from_json(&json!({
        "Type": "AWS::IAM::Role",
        "Properties": {
            "AssumeRolePolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": { "Service": "lambda.amazonaws.com" },
                    "Action": "sts:AssumeRole"
                }]
            },
            "Policies": [{
                "PolicyName": "read",
                "PolicyDocument": { "Statement": [] }
            }]
        }
    }))
    .unwrap();
    assert_eq!(
        role.properties.assume_role_policy_document["Version"],
        json!("2012-10-17")
    );
}

#[test]
fn standalone_property_types_build_declarations() {
    let tag = Tag {
        key: Value::literal("team".to_string()),
        value: Value::Intrinsic(Intrinsic::reference("TeamName")),
    };
    let filter = LineItemFilter {
        attribute: Value::literal("LINE_ITEM_TYPE".to_string()),
        match_option: Value::literal("NOT_EQUAL".to_string()),
        values: Value::literal(vec![Value::literal("SavingsPlanCoveredUsage".to_string())]),
    };
    let criteria = FilterCriteria {
        filters: Some(Value::literal(vec![Filter {
            pattern: Some(Value::literal(r#"{"body":{"kind":["order"]}}"#.to_string())),
        }])),
    };
    let environment = Environment {
        variables: Some(Value::literal(BTreeMap::from([(
            "LOG_LEVEL".to_string(),
            Value::literal("debug".to_string()),
        )]))),
    };

    let queue = Queue::new(QueueProperties {
        tags: Some(Value::literal(vec![tag])),
        ..Default::default()
    });
    assert_eq!(
        queue.to_json().unwrap()["Properties"]["Tags"],
        json!([{ "Key": "team", "Value": { "Ref": "TeamName" } }])
    );

    let item = CustomLineItem::new(CustomLineItemProperties {
        account_id: None,
        billing_group_arn: Value::Intrinsic(Intrinsic::get_att("Group", "Arn")),
        billing_period_range: None,
        custom_line_item_charge_details: Some(Value::literal(CustomLineItemChargeDetails {
            flat: Some(Value::literal(CustomLineItemFlatChargeDetails {
                charge_value: Value::literal(100.0),
            })),
            line_item_filters: Some(Value::literal(vec![filter])),
            percentage: None,
            r#type: Value::literal("FEE".to_string()),
        })),
        description: None,
        name: Value::literal("Support".to_string()),
        tags: None,
    });
    let item = item.to_json().unwrap();
    let details = &item["Properties"]["CustomLineItemChargeDetails"];
    assert_eq!(details["Type"], json!("FEE"));
    assert_eq!(details["LineItemFilters"][0]["MatchOption"], json!("NOT_EQUAL"));

    assert_eq!(
        serde_json::to_value(&criteria).unwrap(),
        json!({ "Filters": [{ "Pattern": r#"{"body":{"kind":["order"]}}"# }] })
    );
    assert_eq!(
        serde_json::to_value(&environment).unwrap(),
        json!({ "Variables": { "LOG_LEVEL": "debug" } })
    );
}

#[test]
fn declarations_round_trip() {
    let declaration = json!({
        "Type": "AWS::DynamoDB::Table",
        "DeletionPolicy": "Retain",
        "DependsOn": "Key",
        "Properties": {
            "AttributeDefinitions": [
                { "AttributeName": "pk", "AttributeType": "S" }
            ],
            "BillingMode": "PAY_PER_REQUEST",
            "KeySchema": [{ "AttributeName": "pk", "KeyType": "HASH" }],
            "SSESpecification": {
                "SSEEnabled": true,
                "KMSMasterKeyId": { "Ref": "Key" }
            },
            "TableName": { "Fn::Join": ["-", [{ "Ref": "AWS::StackName" }, "items"]] }
        }
    });

    let table = Table::from_json(&declaration).unwrap();
    assert_eq!(
        table.attributes,
        ResourceAttributes::default()
            .with_deletion_policy(DeletionPolicy::Retain)
            .with_depends_on(DependsOn::One("Key".to_string()))
    );
    assert_eq!(table.to_json().unwrap(), declaration);

    let again: Resource<_> = Table::from_json(&table.to_json().unwrap()).unwrap();
    assert_eq!(again, table);
}

#[test]
fn template_check_uses_typed_declarations() {
    let template: Json = json!({
        "Resources": {
            "Queue": { "Type": "AWS::SQS::Queue" },
            "Role": { "Type": "AWS::IAM::Role", "Properties": {} },
            "Custom": { "Type": "Custom::Thing" }
        }
    });
    let report = check_template(&template).unwrap();
    assert_eq!(report.conforming(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.skipped(), 1);
    let failure = report.failures().next().unwrap();
    assert_eq!(failure.logical_id, "Role");
}
