//! Static shape descriptors for the Athena API.
//!
//! Every shape is a `static` so models can hold `&'static` references to
//! their descriptor. [`SHAPES`] and [`ENUMS`] list everything by name for
//! tooling that works from strings (the CLI, error decoding).

mod errors;
mod requests;
mod structures;

pub use errors::*;
pub use requests::*;
pub use structures::*;

use schemata_core::{EnumDescriptor, ShapeDescriptor};

use crate::types::{
    ColumnNullable, DataCatalogType, EncryptionOption, QueryExecutionState, StatementType,
    ThrottleReason, WorkGroupState,
};

/// Every shape, structures first, then request/result pairs, then errors.
pub static SHAPES: &[&ShapeDescriptor] = &[
    // structures
    &QUERY_EXECUTION,
    &QUERY_EXECUTION_CONTEXT,
    &RESULT_CONFIGURATION,
    &ENCRYPTION_CONFIGURATION,
    &QUERY_EXECUTION_STATUS,
    &QUERY_EXECUTION_STATISTICS,
    &UNPROCESSED_QUERY_EXECUTION_ID,
    &NAMED_QUERY,
    &UNPROCESSED_NAMED_QUERY_ID,
    &RESULT_SET,
    &ROW,
    &DATUM,
    &RESULT_SET_METADATA,
    &COLUMN_INFO,
    &WORK_GROUP,
    &WORK_GROUP_CONFIGURATION,
    &WORK_GROUP_CONFIGURATION_UPDATES,
    &RESULT_CONFIGURATION_UPDATES,
    &WORK_GROUP_SUMMARY,
    &DATA_CATALOG,
    &DATA_CATALOG_SUMMARY,
    &DATABASE,
    &TABLE_METADATA,
    &COLUMN,
    &TAG,
    // operations
    &BATCH_GET_NAMED_QUERY_REQUEST,
    &BATCH_GET_NAMED_QUERY_RESULT,
    &BATCH_GET_QUERY_EXECUTION_REQUEST,
    &BATCH_GET_QUERY_EXECUTION_RESULT,
    &CREATE_DATA_CATALOG_REQUEST,
    &CREATE_DATA_CATALOG_RESULT,
    &CREATE_NAMED_QUERY_REQUEST,
    &CREATE_NAMED_QUERY_RESULT,
    &CREATE_WORK_GROUP_REQUEST,
    &CREATE_WORK_GROUP_RESULT,
    &DELETE_DATA_CATALOG_REQUEST,
    &DELETE_DATA_CATALOG_RESULT,
    &DELETE_NAMED_QUERY_REQUEST,
    &DELETE_NAMED_QUERY_RESULT,
    &DELETE_WORK_GROUP_REQUEST,
    &DELETE_WORK_GROUP_RESULT,
    &GET_DATA_CATALOG_REQUEST,
    &GET_DATA_CATALOG_RESULT,
    &GET_DATABASE_REQUEST,
    &GET_DATABASE_RESULT,
    &GET_NAMED_QUERY_REQUEST,
    &GET_NAMED_QUERY_RESULT,
    &GET_QUERY_EXECUTION_REQUEST,
    &GET_QUERY_EXECUTION_RESULT,
    &GET_QUERY_RESULTS_REQUEST,
    &GET_QUERY_RESULTS_RESULT,
    &GET_TABLE_METADATA_REQUEST,
    &GET_TABLE_METADATA_RESULT,
    &GET_WORK_GROUP_REQUEST,
    &GET_WORK_GROUP_RESULT,
    &LIST_DATA_CATALOGS_REQUEST,
    &LIST_DATA_CATALOGS_RESULT,
    &LIST_DATABASES_REQUEST,
    &LIST_DATABASES_RESULT,
    &LIST_NAMED_QUERIES_REQUEST,
    &LIST_NAMED_QUERIES_RESULT,
    &LIST_QUERY_EXECUTIONS_REQUEST,
    &LIST_QUERY_EXECUTIONS_RESULT,
    &LIST_TABLE_METADATA_REQUEST,
    &LIST_TABLE_METADATA_RESULT,
    &LIST_TAGS_FOR_RESOURCE_REQUEST,
    &LIST_TAGS_FOR_RESOURCE_RESULT,
    &LIST_WORK_GROUPS_REQUEST,
    &LIST_WORK_GROUPS_RESULT,
    &START_QUERY_EXECUTION_REQUEST,
    &START_QUERY_EXECUTION_RESULT,
    &STOP_QUERY_EXECUTION_REQUEST,
    &STOP_QUERY_EXECUTION_RESULT,
    &TAG_RESOURCE_REQUEST,
    &TAG_RESOURCE_RESULT,
    &UNTAG_RESOURCE_REQUEST,
    &UNTAG_RESOURCE_RESULT,
    &UPDATE_DATA_CATALOG_REQUEST,
    &UPDATE_DATA_CATALOG_RESULT,
    &UPDATE_WORK_GROUP_REQUEST,
    &UPDATE_WORK_GROUP_RESULT,
    // errors
    &INTERNAL_SERVER_EXCEPTION,
    &INVALID_REQUEST_EXCEPTION,
    &METADATA_EXCEPTION,
    &RESOURCE_NOT_FOUND_EXCEPTION,
    &TOO_MANY_REQUESTS_EXCEPTION,
];

pub static ENUMS: &[&EnumDescriptor] = &[
    &QueryExecutionState::DESCRIPTOR,
    &StatementType::DESCRIPTOR,
    &EncryptionOption::DESCRIPTOR,
    &ColumnNullable::DESCRIPTOR,
    &WorkGroupState::DESCRIPTOR,
    &DataCatalogType::DESCRIPTOR,
    &ThrottleReason::DESCRIPTOR,
];

pub fn find_shape(name: &str) -> Option<&'static ShapeDescriptor> {
    SHAPES.iter().copied().find(|s| s.name == name)
}

pub fn find_enum(name: &str) -> Option<&'static EnumDescriptor> {
    ENUMS.iter().copied().find(|e| e.name == name)
}
