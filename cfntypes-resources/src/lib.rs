//! cfntypes Resources
//!
//! Typed declarations of CloudFormation resource types, generated from the
//! AWS registry schemas, plus a registry of the shipped types and a
//! structural check for whole templates.
//!
//! ```
//! use cfntypes_core::{Intrinsic, Value};
//! use cfntypes_resources::generated::sqs_queue::{Queue, QueueProperties, Tag};
//!
//! let queue = Queue::new(QueueProperties {
//!     queue_name: Some(Value::Intrinsic(Intrinsic::sub("${AWS::StackName}-jobs"))),
//!     visibility_timeout: Some(Value::literal(60)),
//!     tags: Some(Value::literal(vec![Tag {
//!         key: Value::literal("team".to_string()),
//!         value: Value::literal("platform".to_string()),
//!     }])),
//!     ..Default::default()
//! });
//! assert_eq!(queue.type_name(), "AWS::SQS::Queue");
//! ```

pub mod generated;
pub mod registry;
pub mod template;

pub use registry::{RegisteredResource, check_resource, lookup, resource_types, services};
pub use template::{Outcome, ResourceReport, TemplateReport, check_template};
