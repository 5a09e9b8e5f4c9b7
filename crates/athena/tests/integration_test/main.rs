//! Integration tests for schemata-athena.
//!
//! Everything runs against an in-memory transport; no AWS credentials needed.

mod client;
mod errors;
mod helpers;
mod shapes;
