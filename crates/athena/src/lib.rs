pub mod client;
pub mod config;
pub mod error;
pub mod operations;
pub mod schema;
pub mod table;
pub mod transport;
pub mod types;

pub use client::{apply_defaults, fill_idempotency_tokens, AthenaClient};
pub use config::AthenaConfig;
pub use error::{AthenaError, AthenaServiceError};
pub use operations::{find_operation, operation_for_request, OPERATIONS};
pub use schema::{find_enum, find_shape};
pub use table::{QueryResultTable, QueryStatus, ResultColumn};
pub use transport::{Transport, TransportError, WireFailure, WireRequest};
pub use types::*;
