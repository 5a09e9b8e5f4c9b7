//! Integration tests for schemata-core: model properties over a small
//! hand-written schema.

mod enums;
mod properties;
mod schema;
