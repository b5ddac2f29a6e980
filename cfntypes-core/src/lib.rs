//! cfntypes Core
//!
//! Shared building blocks for typed CloudFormation resource declarations.
//!
//! Every generated resource module imports only from this crate:
//!
//! - `Intrinsic` - an intrinsic function placeholder (`Ref`, `Fn::GetAtt`, ...)
//! - `Value<T>` - a literal `T` or an `Intrinsic`
//! - `ResourceAttributes` - `Condition`, `DependsOn`, `DeletionPolicy`, ...
//! - `Resource<P>` - the `{ Type, Properties }` envelope
//! - `schema` - static documentation metadata (allowed values, update behavior)

pub mod attributes;
pub mod error;
pub mod intrinsic;
pub mod resource;
pub mod schema;
pub mod value;

pub use attributes::{
    AutoScalingCreationPolicy, CreationPolicy, DeletionPolicy, DependsOn, ResourceAttributes,
    ResourceSignal, UpdateReplacePolicy,
};
pub use error::{Error, Result};
pub use intrinsic::Intrinsic;
pub use resource::{Resource, ResourceProperties};
pub use value::{Json, Value};
