//! Request and result shapes, one pair per operation.

use schemata_core::{ElementKind, FieldDescriptor as F, ShapeDescriptor, ShapeRole};

use super::structures::*;
use crate::types::{DataCatalogType, WorkGroupState};

const fn request(operation: &'static str) -> ShapeRole {
    ShapeRole::Request { operation }
}

const fn result(operation: &'static str) -> ShapeRole {
    ShapeRole::Result { operation }
}

// Shared field definitions.
const NEXT_TOKEN: F = F::string("NextToken").length(1, 1024);
const WORK_GROUP_NAME: F = F::string("WorkGroup").pattern(WORK_GROUP_PATTERN);
const CATALOG_NAME: F = F::string("CatalogName").required().length(1, 256).pattern(NAME_PATTERN);
const DATABASE_NAME: F = F::string("DatabaseName").required().length(1, 128).pattern(NAME_PATTERN);
const CLIENT_REQUEST_TOKEN: F = F::string("ClientRequestToken").length(32, 128).idempotency_token();
const RESOURCE_ARN: F = F::string("ResourceARN").required().length(1, 1011);

// ── Named queries ────────────────────────────────────────────────

pub static BATCH_GET_NAMED_QUERY_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "BatchGetNamedQueryRequest",
    role: request("BatchGetNamedQuery"),
    fields: &[F::list("NamedQueryIds", ElementKind::String).required().length(1, 50)],
};

pub static BATCH_GET_NAMED_QUERY_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "BatchGetNamedQueryResult",
    role: result("BatchGetNamedQuery"),
    fields: &[
        F::list("NamedQueries", ElementKind::Structure(&NAMED_QUERY)),
        F::list("UnprocessedNamedQueryIds", ElementKind::Structure(&UNPROCESSED_NAMED_QUERY_ID)),
    ],
};

pub static CREATE_NAMED_QUERY_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "CreateNamedQueryRequest",
    role: request("CreateNamedQuery"),
    fields: &[
        F::string("Name").required().length(1, 128),
        F::string("Description").length(1, 1024),
        F::string("Database").required().length(1, 255),
        F::string("QueryString").required().length(1, 262_144),
        CLIENT_REQUEST_TOKEN,
        WORK_GROUP_NAME,
    ],
};

pub static CREATE_NAMED_QUERY_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "CreateNamedQueryResult",
    role: result("CreateNamedQuery"),
    fields: &[F::string("NamedQueryId")],
};

/// The id doubles as the idempotency token and is generated when absent.
pub static DELETE_NAMED_QUERY_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "DeleteNamedQueryRequest",
    role: request("DeleteNamedQuery"),
    fields: &[F::string("NamedQueryId").required().idempotency_token()],
};

pub static DELETE_NAMED_QUERY_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "DeleteNamedQueryResult",
    role: result("DeleteNamedQuery"),
    fields: &[],
};

pub static GET_NAMED_QUERY_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "GetNamedQueryRequest",
    role: request("GetNamedQuery"),
    fields: &[F::string("NamedQueryId").required()],
};

pub static GET_NAMED_QUERY_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "GetNamedQueryResult",
    role: result("GetNamedQuery"),
    fields: &[F::structure("NamedQuery", &NAMED_QUERY)],
};

pub static LIST_NAMED_QUERIES_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "ListNamedQueriesRequest",
    role: request("ListNamedQueries"),
    fields: &[
        NEXT_TOKEN,
        F::integer("MaxResults").range(0, 50),
        WORK_GROUP_NAME,
    ],
};

pub static LIST_NAMED_QUERIES_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "ListNamedQueriesResult",
    role: result("ListNamedQueries"),
    fields: &[
        F::list("NamedQueryIds", ElementKind::String),
        F::string("NextToken"),
    ],
};

// ── Query executions ─────────────────────────────────────────────

pub static BATCH_GET_QUERY_EXECUTION_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "BatchGetQueryExecutionRequest",
    role: request("BatchGetQueryExecution"),
    fields: &[F::list("QueryExecutionIds", ElementKind::String).required().length(1, 50)],
};

pub static BATCH_GET_QUERY_EXECUTION_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "BatchGetQueryExecutionResult",
    role: result("BatchGetQueryExecution"),
    fields: &[
        F::list("QueryExecutions", ElementKind::Structure(&QUERY_EXECUTION)),
        F::list(
            "UnprocessedQueryExecutionIds",
            ElementKind::Structure(&UNPROCESSED_QUERY_EXECUTION_ID),
        ),
    ],
};

pub static GET_QUERY_EXECUTION_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "GetQueryExecutionRequest",
    role: request("GetQueryExecution"),
    fields: &[F::string("QueryExecutionId").required()],
};

pub static GET_QUERY_EXECUTION_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "GetQueryExecutionResult",
    role: result("GetQueryExecution"),
    fields: &[F::structure("QueryExecution", &QUERY_EXECUTION)],
};

pub static GET_QUERY_RESULTS_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "GetQueryResultsRequest",
    role: request("GetQueryResults"),
    fields: &[
        F::string("QueryExecutionId").required(),
        NEXT_TOKEN,
        F::integer("MaxResults").range(1, 1000),
    ],
};

/// `UpdateCount` is only meaningful for DML statements.
pub static GET_QUERY_RESULTS_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "GetQueryResultsResult",
    role: result("GetQueryResults"),
    fields: &[
        F::integer("UpdateCount"),
        F::structure("ResultSet", &RESULT_SET),
        F::string("NextToken"),
    ],
};

pub static LIST_QUERY_EXECUTIONS_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "ListQueryExecutionsRequest",
    role: request("ListQueryExecutions"),
    fields: &[
        NEXT_TOKEN,
        F::integer("MaxResults").range(0, 50),
        WORK_GROUP_NAME,
    ],
};

pub static LIST_QUERY_EXECUTIONS_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "ListQueryExecutionsResult",
    role: result("ListQueryExecutions"),
    fields: &[
        F::list("QueryExecutionIds", ElementKind::String),
        F::string("NextToken"),
    ],
};

pub static START_QUERY_EXECUTION_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "StartQueryExecutionRequest",
    role: request("StartQueryExecution"),
    fields: &[
        F::string("QueryString").required().length(1, 262_144),
        CLIENT_REQUEST_TOKEN,
        F::structure("QueryExecutionContext", &QUERY_EXECUTION_CONTEXT),
        F::structure("ResultConfiguration", &RESULT_CONFIGURATION),
        WORK_GROUP_NAME,
    ],
};

pub static START_QUERY_EXECUTION_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "StartQueryExecutionResult",
    role: result("StartQueryExecution"),
    fields: &[F::string("QueryExecutionId")],
};

pub static STOP_QUERY_EXECUTION_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "StopQueryExecutionRequest",
    role: request("StopQueryExecution"),
    fields: &[F::string("QueryExecutionId").required().idempotency_token()],
};

pub static STOP_QUERY_EXECUTION_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "StopQueryExecutionResult",
    role: result("StopQueryExecution"),
    fields: &[],
};

// ── Work groups ──────────────────────────────────────────────────

pub static CREATE_WORK_GROUP_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "CreateWorkGroupRequest",
    role: request("CreateWorkGroup"),
    fields: &[
        F::string("Name").required().pattern(WORK_GROUP_PATTERN),
        F::structure("Configuration", &WORK_GROUP_CONFIGURATION),
        F::string("Description").length(0, 1024),
        F::list("Tags", ElementKind::Structure(&TAG)),
    ],
};

pub static CREATE_WORK_GROUP_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "CreateWorkGroupResult",
    role: result("CreateWorkGroup"),
    fields: &[],
};

/// `RecursiveDeleteOption` also drops the work group's named queries.
pub static DELETE_WORK_GROUP_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "DeleteWorkGroupRequest",
    role: request("DeleteWorkGroup"),
    fields: &[
        F::string("WorkGroup").required().pattern(WORK_GROUP_PATTERN),
        F::boolean("RecursiveDeleteOption"),
    ],
};

pub static DELETE_WORK_GROUP_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "DeleteWorkGroupResult",
    role: result("DeleteWorkGroup"),
    fields: &[],
};

pub static GET_WORK_GROUP_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "GetWorkGroupRequest",
    role: request("GetWorkGroup"),
    fields: &[F::string("WorkGroup").required().pattern(WORK_GROUP_PATTERN)],
};

pub static GET_WORK_GROUP_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "GetWorkGroupResult",
    role: result("GetWorkGroup"),
    fields: &[F::structure("WorkGroup", &WORK_GROUP)],
};

pub static LIST_WORK_GROUPS_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "ListWorkGroupsRequest",
    role: request("ListWorkGroups"),
    fields: &[NEXT_TOKEN, F::integer("MaxResults").range(1, 50)],
};

pub static LIST_WORK_GROUPS_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "ListWorkGroupsResult",
    role: result("ListWorkGroups"),
    fields: &[
        F::list("WorkGroups", ElementKind::Structure(&WORK_GROUP_SUMMARY)),
        F::string("NextToken"),
    ],
};

pub static UPDATE_WORK_GROUP_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "UpdateWorkGroupRequest",
    role: request("UpdateWorkGroup"),
    fields: &[
        F::string("WorkGroup").required().pattern(WORK_GROUP_PATTERN),
        F::string("Description").length(0, 1024),
        F::structure("ConfigurationUpdates", &WORK_GROUP_CONFIGURATION_UPDATES),
        F::enumeration("State", &WorkGroupState::DESCRIPTOR),
    ],
};

pub static UPDATE_WORK_GROUP_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "UpdateWorkGroupResult",
    role: result("UpdateWorkGroup"),
    fields: &[],
};

// ── Data catalogs ────────────────────────────────────────────────

pub static CREATE_DATA_CATALOG_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "CreateDataCatalogRequest",
    role: request("CreateDataCatalog"),
    fields: &[
        F::string("Name").required().length(1, 256).pattern(NAME_PATTERN),
        F::enumeration("Type", &DataCatalogType::DESCRIPTOR).required(),
        F::string("Description").length(1, 1024),
        F::map("Parameters", ElementKind::String),
        F::list("Tags", ElementKind::Structure(&TAG)),
    ],
};

pub static CREATE_DATA_CATALOG_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "CreateDataCatalogResult",
    role: result("CreateDataCatalog"),
    fields: &[],
};

pub static DELETE_DATA_CATALOG_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "DeleteDataCatalogRequest",
    role: request("DeleteDataCatalog"),
    fields: &[F::string("Name").required().length(1, 256).pattern(NAME_PATTERN)],
};

pub static DELETE_DATA_CATALOG_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "DeleteDataCatalogResult",
    role: result("DeleteDataCatalog"),
    fields: &[],
};

pub static GET_DATA_CATALOG_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "GetDataCatalogRequest",
    role: request("GetDataCatalog"),
    fields: &[F::string("Name").required().length(1, 256).pattern(NAME_PATTERN)],
};

pub static GET_DATA_CATALOG_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "GetDataCatalogResult",
    role: result("GetDataCatalog"),
    fields: &[F::structure("DataCatalog", &DATA_CATALOG)],
};

pub static LIST_DATA_CATALOGS_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "ListDataCatalogsRequest",
    role: request("ListDataCatalogs"),
    fields: &[NEXT_TOKEN, F::integer("MaxResults").range(2, 50)],
};

pub static LIST_DATA_CATALOGS_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "ListDataCatalogsResult",
    role: result("ListDataCatalogs"),
    fields: &[
        F::list("DataCatalogsSummary", ElementKind::Structure(&DATA_CATALOG_SUMMARY)),
        F::string("NextToken"),
    ],
};

pub static UPDATE_DATA_CATALOG_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "UpdateDataCatalogRequest",
    role: request("UpdateDataCatalog"),
    fields: &[
        F::string("Name").required().length(1, 256).pattern(NAME_PATTERN),
        F::enumeration("Type", &DataCatalogType::DESCRIPTOR).required(),
        F::string("Description").length(1, 1024),
        F::map("Parameters", ElementKind::String),
    ],
};

pub static UPDATE_DATA_CATALOG_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "UpdateDataCatalogResult",
    role: result("UpdateDataCatalog"),
    fields: &[],
};

// ── Databases and tables ─────────────────────────────────────────

pub static GET_DATABASE_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "GetDatabaseRequest",
    role: request("GetDatabase"),
    fields: &[CATALOG_NAME, DATABASE_NAME],
};

pub static GET_DATABASE_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "GetDatabaseResult",
    role: result("GetDatabase"),
    fields: &[F::structure("Database", &DATABASE)],
};

pub static LIST_DATABASES_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "ListDatabasesRequest",
    role: request("ListDatabases"),
    fields: &[CATALOG_NAME, NEXT_TOKEN, F::integer("MaxResults").range(1, 50)],
};

pub static LIST_DATABASES_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "ListDatabasesResult",
    role: result("ListDatabases"),
    fields: &[
        F::list("DatabaseList", ElementKind::Structure(&DATABASE)),
        F::string("NextToken"),
    ],
};

pub static GET_TABLE_METADATA_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "GetTableMetadataRequest",
    role: request("GetTableMetadata"),
    fields: &[
        CATALOG_NAME,
        DATABASE_NAME,
        F::string("TableName").required().length(1, 128).pattern(NAME_PATTERN),
    ],
};

pub static GET_TABLE_METADATA_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "GetTableMetadataResult",
    role: result("GetTableMetadata"),
    fields: &[F::structure("TableMetadata", &TABLE_METADATA)],
};

/// `Expression` is a regex filter over table names.
pub static LIST_TABLE_METADATA_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "ListTableMetadataRequest",
    role: request("ListTableMetadata"),
    fields: &[
        CATALOG_NAME,
        DATABASE_NAME,
        F::string("Expression").length(0, 256),
        NEXT_TOKEN,
        F::integer("MaxResults").range(1, 50),
    ],
};

pub static LIST_TABLE_METADATA_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "ListTableMetadataResult",
    role: result("ListTableMetadata"),
    fields: &[
        F::list("TableMetadataList", ElementKind::Structure(&TABLE_METADATA)),
        F::string("NextToken"),
    ],
};

// ── Tags ─────────────────────────────────────────────────────────

pub static LIST_TAGS_FOR_RESOURCE_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "ListTagsForResourceRequest",
    role: request("ListTagsForResource"),
    fields: &[RESOURCE_ARN, NEXT_TOKEN, F::integer("MaxResults").min_value(75)],
};

pub static LIST_TAGS_FOR_RESOURCE_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "ListTagsForResourceResult",
    role: result("ListTagsForResource"),
    fields: &[
        F::list("Tags", ElementKind::Structure(&TAG)),
        F::string("NextToken"),
    ],
};

pub static TAG_RESOURCE_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "TagResourceRequest",
    role: request("TagResource"),
    fields: &[RESOURCE_ARN, F::list("Tags", ElementKind::Structure(&TAG)).required()],
};

pub static TAG_RESOURCE_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "TagResourceResult",
    role: result("TagResource"),
    fields: &[],
};

pub static UNTAG_RESOURCE_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "UntagResourceRequest",
    role: request("UntagResource"),
    fields: &[
        RESOURCE_ARN,
        F::list("TagKeys", ElementKind::String).required(),
    ],
};

pub static UNTAG_RESOURCE_RESULT: ShapeDescriptor = ShapeDescriptor {
    name: "UntagResourceResult",
    role: result("UntagResource"),
    fields: &[],
};
