//! The Athena operation table.

use schemata_core::{OperationDescriptor, ShapeDescriptor};

use crate::schema::*;

/// JSON protocol version Athena speaks.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

const TARGET_PREFIX: &str = "AmazonAthena";

macro_rules! operation {
    ($name:literal, $input:ident, $output:ident) => {
        OperationDescriptor {
            name: $name,
            input: &$input,
            output: &$output,
        }
    };
}

/// Every operation, in alphabetical order.
pub static OPERATIONS: &[OperationDescriptor] = &[
    operation!("BatchGetNamedQuery", BATCH_GET_NAMED_QUERY_REQUEST, BATCH_GET_NAMED_QUERY_RESULT),
    operation!(
        "BatchGetQueryExecution",
        BATCH_GET_QUERY_EXECUTION_REQUEST,
        BATCH_GET_QUERY_EXECUTION_RESULT
    ),
    operation!("CreateDataCatalog", CREATE_DATA_CATALOG_REQUEST, CREATE_DATA_CATALOG_RESULT),
    operation!("CreateNamedQuery", CREATE_NAMED_QUERY_REQUEST, CREATE_NAMED_QUERY_RESULT),
    operation!("CreateWorkGroup", CREATE_WORK_GROUP_REQUEST, CREATE_WORK_GROUP_RESULT),
    operation!("DeleteDataCatalog", DELETE_DATA_CATALOG_REQUEST, DELETE_DATA_CATALOG_RESULT),
    operation!("DeleteNamedQuery", DELETE_NAMED_QUERY_REQUEST, DELETE_NAMED_QUERY_RESULT),
    operation!("DeleteWorkGroup", DELETE_WORK_GROUP_REQUEST, DELETE_WORK_GROUP_RESULT),
    operation!("GetDataCatalog", GET_DATA_CATALOG_REQUEST, GET_DATA_CATALOG_RESULT),
    operation!("GetDatabase", GET_DATABASE_REQUEST, GET_DATABASE_RESULT),
    operation!("GetNamedQuery", GET_NAMED_QUERY_REQUEST, GET_NAMED_QUERY_RESULT),
    operation!("GetQueryExecution", GET_QUERY_EXECUTION_REQUEST, GET_QUERY_EXECUTION_RESULT),
    operation!("GetQueryResults", GET_QUERY_RESULTS_REQUEST, GET_QUERY_RESULTS_RESULT),
    operation!("GetTableMetadata", GET_TABLE_METADATA_REQUEST, GET_TABLE_METADATA_RESULT),
    operation!("GetWorkGroup", GET_WORK_GROUP_REQUEST, GET_WORK_GROUP_RESULT),
    operation!("ListDataCatalogs", LIST_DATA_CATALOGS_REQUEST, LIST_DATA_CATALOGS_RESULT),
    operation!("ListDatabases", LIST_DATABASES_REQUEST, LIST_DATABASES_RESULT),
    operation!("ListNamedQueries", LIST_NAMED_QUERIES_REQUEST, LIST_NAMED_QUERIES_RESULT),
    operation!(
        "ListQueryExecutions",
        LIST_QUERY_EXECUTIONS_REQUEST,
        LIST_QUERY_EXECUTIONS_RESULT
    ),
    operation!("ListTableMetadata", LIST_TABLE_METADATA_REQUEST, LIST_TABLE_METADATA_RESULT),
    operation!(
        "ListTagsForResource",
        LIST_TAGS_FOR_RESOURCE_REQUEST,
        LIST_TAGS_FOR_RESOURCE_RESULT
    ),
    operation!("ListWorkGroups", LIST_WORK_GROUPS_REQUEST, LIST_WORK_GROUPS_RESULT),
    operation!(
        "StartQueryExecution",
        START_QUERY_EXECUTION_REQUEST,
        START_QUERY_EXECUTION_RESULT
    ),
    operation!("StopQueryExecution", STOP_QUERY_EXECUTION_REQUEST, STOP_QUERY_EXECUTION_RESULT),
    operation!("TagResource", TAG_RESOURCE_REQUEST, TAG_RESOURCE_RESULT),
    operation!("UntagResource", UNTAG_RESOURCE_REQUEST, UNTAG_RESOURCE_RESULT),
    operation!("UpdateDataCatalog", UPDATE_DATA_CATALOG_REQUEST, UPDATE_DATA_CATALOG_RESULT),
    operation!("UpdateWorkGroup", UPDATE_WORK_GROUP_REQUEST, UPDATE_WORK_GROUP_RESULT),
];

pub fn find_operation(name: &str) -> Option<&'static OperationDescriptor> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// The operation whose input is `shape`.
pub fn operation_for_request(shape: &ShapeDescriptor) -> Option<&'static OperationDescriptor> {
    OPERATIONS.iter().find(|op| op.input.same_as(shape))
}

/// Value of the `X-Amz-Target` header for `operation`.
pub fn target(operation: &OperationDescriptor) -> String {
    format!("{TARGET_PREFIX}.{}", operation.name)
}
