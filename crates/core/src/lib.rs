pub mod codec;
pub mod config;
pub mod descriptor;
pub mod enumeration;
pub mod error;
pub mod model;
pub mod value;

pub use descriptor::{
    Constraints, ElementKind, FieldDescriptor, FieldKind, OperationDescriptor, ShapeDescriptor,
    ShapeRole,
};
pub use enumeration::EnumDescriptor;
pub use error::*;
pub use model::Model;
pub use value::Value;

#[doc(hidden)]
pub use serde as __serde;
