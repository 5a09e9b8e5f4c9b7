//! Structures embedded in Athena requests and results.

use schemata_core::{ElementKind, FieldDescriptor as F, ShapeDescriptor, ShapeRole};

use crate::types::{
    ColumnNullable, DataCatalogType, EncryptionOption, QueryExecutionState, StatementType,
    WorkGroupState,
};

/// Printable characters plus tab, as accepted for catalog object names.
pub(crate) const NAME_PATTERN: &str = r"[^\x00-\x08\x0A-\x1F]*";
pub(crate) const WORK_GROUP_PATTERN: &str = r"[a-zA-Z0-9._-]{1,128}";
pub(crate) const TAG_KEY_PATTERN: &str = r"[\p{L}\p{Z}\p{N}_.:/=+\-@]+";
pub(crate) const TAG_VALUE_PATTERN: &str = r"[\p{L}\p{Z}\p{N}_.:/=+\-@]*";

/// Minimum value of a per-query scan cutoff, in bytes.
pub const MIN_BYTES_SCANNED_CUTOFF: i64 = 10_000_000;

// ── Query executions ─────────────────────────────────────────────

pub static QUERY_EXECUTION_CONTEXT: ShapeDescriptor = ShapeDescriptor {
    name: "QueryExecutionContext",
    role: ShapeRole::Structure,
    fields: &[
        F::string("Database").length(1, 255),
        F::string("Catalog").length(1, 256).pattern(NAME_PATTERN),
    ],
};

/// Either `KmsKey` is present or the option is `SSE_S3`; the service
/// enforces that pairing, not this schema.
pub static ENCRYPTION_CONFIGURATION: ShapeDescriptor = ShapeDescriptor {
    name: "EncryptionConfiguration",
    role: ShapeRole::Structure,
    fields: &[
        F::enumeration("EncryptionOption", &EncryptionOption::DESCRIPTOR).required(),
        F::string("KmsKey"),
    ],
};

pub static RESULT_CONFIGURATION: ShapeDescriptor = ShapeDescriptor {
    name: "ResultConfiguration",
    role: ShapeRole::Structure,
    fields: &[
        F::string("OutputLocation"),
        F::structure("EncryptionConfiguration", &ENCRYPTION_CONFIGURATION),
    ],
};

pub static QUERY_EXECUTION_STATUS: ShapeDescriptor = ShapeDescriptor {
    name: "QueryExecutionStatus",
    role: ShapeRole::Structure,
    fields: &[
        F::enumeration("State", &QueryExecutionState::DESCRIPTOR),
        F::string("StateChangeReason"),
        F::timestamp("SubmissionDateTime"),
        F::timestamp("CompletionDateTime"),
    ],
};

pub static QUERY_EXECUTION_STATISTICS: ShapeDescriptor = ShapeDescriptor {
    name: "QueryExecutionStatistics",
    role: ShapeRole::Structure,
    fields: &[
        F::integer("EngineExecutionTimeInMillis"),
        F::integer("DataScannedInBytes"),
        F::string("DataManifestLocation"),
        F::integer("TotalExecutionTimeInMillis"),
        F::integer("QueryQueueTimeInMillis"),
        F::integer("QueryPlanningTimeInMillis"),
        F::integer("ServiceProcessingTimeInMillis"),
    ],
};

pub static QUERY_EXECUTION: ShapeDescriptor = ShapeDescriptor {
    name: "QueryExecution",
    role: ShapeRole::Structure,
    fields: &[
        F::string("QueryExecutionId"),
        F::string("Query").length(1, 262_144),
        F::enumeration("StatementType", &StatementType::DESCRIPTOR),
        F::structure("ResultConfiguration", &RESULT_CONFIGURATION),
        F::structure("QueryExecutionContext", &QUERY_EXECUTION_CONTEXT),
        F::structure("Status", &QUERY_EXECUTION_STATUS),
        F::structure("Statistics", &QUERY_EXECUTION_STATISTICS),
        F::string("WorkGroup"),
    ],
};

pub static UNPROCESSED_QUERY_EXECUTION_ID: ShapeDescriptor = ShapeDescriptor {
    name: "UnprocessedQueryExecutionId",
    role: ShapeRole::Structure,
    fields: &[
        F::string("QueryExecutionId"),
        F::string("ErrorCode").length(1, 256),
        F::string("ErrorMessage"),
    ],
};

// ── Named queries ────────────────────────────────────────────────

/// A saved query.
pub static NAMED_QUERY: ShapeDescriptor = ShapeDescriptor {
    name: "NamedQuery",
    role: ShapeRole::Structure,
    fields: &[
        F::string("Name").required().length(1, 128),
        F::string("Description").length(1, 1024),
        F::string("Database").required().length(1, 255),
        F::string("QueryString").required().length(1, 262_144),
        F::string("NamedQueryId"),
        F::string("WorkGroup"),
    ],
};

pub static UNPROCESSED_NAMED_QUERY_ID: ShapeDescriptor = ShapeDescriptor {
    name: "UnprocessedNamedQueryId",
    role: ShapeRole::Structure,
    fields: &[
        F::string("NamedQueryId"),
        F::string("ErrorCode").length(1, 256),
        F::string("ErrorMessage"),
    ],
};

// ── Result sets ──────────────────────────────────────────────────

/// A single cell. An absent `VarCharValue` is SQL NULL.
pub static DATUM: ShapeDescriptor = ShapeDescriptor {
    name: "Datum",
    role: ShapeRole::Structure,
    fields: &[F::string("VarCharValue")],
};

pub static ROW: ShapeDescriptor = ShapeDescriptor {
    name: "Row",
    role: ShapeRole::Structure,
    fields: &[F::list("Data", ElementKind::Structure(&DATUM))],
};

pub static COLUMN_INFO: ShapeDescriptor = ShapeDescriptor {
    name: "ColumnInfo",
    role: ShapeRole::Structure,
    fields: &[
        F::string("CatalogName"),
        F::string("SchemaName"),
        F::string("TableName"),
        F::string("Name").required(),
        F::string("Label"),
        F::string("Type").required(),
        F::integer("Precision"),
        F::integer("Scale"),
        F::enumeration("Nullable", &ColumnNullable::DESCRIPTOR),
        F::boolean("CaseSensitive"),
    ],
};

pub static RESULT_SET_METADATA: ShapeDescriptor = ShapeDescriptor {
    name: "ResultSetMetadata",
    role: ShapeRole::Structure,
    fields: &[F::list("ColumnInfo", ElementKind::Structure(&COLUMN_INFO))],
};

pub static RESULT_SET: ShapeDescriptor = ShapeDescriptor {
    name: "ResultSet",
    role: ShapeRole::Structure,
    fields: &[
        F::list("Rows", ElementKind::Structure(&ROW)),
        F::structure("ResultSetMetadata", &RESULT_SET_METADATA),
    ],
};

// ── Work groups ──────────────────────────────────────────────────

pub static WORK_GROUP_CONFIGURATION: ShapeDescriptor = ShapeDescriptor {
    name: "WorkGroupConfiguration",
    role: ShapeRole::Structure,
    fields: &[
        F::structure("ResultConfiguration", &RESULT_CONFIGURATION),
        F::boolean("EnforceWorkGroupConfiguration"),
        F::boolean("PublishCloudWatchMetricsEnabled"),
        F::integer("BytesScannedCutoffPerQuery").min_value(MIN_BYTES_SCANNED_CUTOFF),
        F::boolean("RequesterPaysEnabled"),
    ],
};

pub static RESULT_CONFIGURATION_UPDATES: ShapeDescriptor = ShapeDescriptor {
    name: "ResultConfigurationUpdates",
    role: ShapeRole::Structure,
    fields: &[
        F::string("OutputLocation"),
        F::boolean("RemoveOutputLocation"),
        F::structure("EncryptionConfiguration", &ENCRYPTION_CONFIGURATION),
        F::boolean("RemoveEncryptionConfiguration"),
    ],
};

pub static WORK_GROUP_CONFIGURATION_UPDATES: ShapeDescriptor = ShapeDescriptor {
    name: "WorkGroupConfigurationUpdates",
    role: ShapeRole::Structure,
    fields: &[
        F::boolean("EnforceWorkGroupConfiguration"),
        F::structure("ResultConfigurationUpdates", &RESULT_CONFIGURATION_UPDATES),
        F::boolean("PublishCloudWatchMetricsEnabled"),
        F::integer("BytesScannedCutoffPerQuery").min_value(MIN_BYTES_SCANNED_CUTOFF),
        F::boolean("RemoveBytesScannedCutoffPerQuery"),
        F::boolean("RequesterPaysEnabled"),
    ],
};

pub static WORK_GROUP: ShapeDescriptor = ShapeDescriptor {
    name: "WorkGroup",
    role: ShapeRole::Structure,
    fields: &[
        F::string("Name").required().pattern(WORK_GROUP_PATTERN),
        F::enumeration("State", &WorkGroupState::DESCRIPTOR),
        F::structure("Configuration", &WORK_GROUP_CONFIGURATION),
        F::string("Description").length(0, 1024),
        F::timestamp("CreationTime"),
    ],
};

pub static WORK_GROUP_SUMMARY: ShapeDescriptor = ShapeDescriptor {
    name: "WorkGroupSummary",
    role: ShapeRole::Structure,
    fields: &[
        F::string("Name").pattern(WORK_GROUP_PATTERN),
        F::enumeration("State", &WorkGroupState::DESCRIPTOR),
        F::string("Description").length(0, 1024),
        F::timestamp("CreationTime"),
    ],
};

// ── Catalogs, databases, tables ──────────────────────────────────

pub static DATA_CATALOG: ShapeDescriptor = ShapeDescriptor {
    name: "DataCatalog",
    role: ShapeRole::Structure,
    fields: &[
        F::string("Name").required().length(1, 256).pattern(NAME_PATTERN),
        F::string("Description").length(1, 1024),
        F::enumeration("Type", &DataCatalogType::DESCRIPTOR).required(),
        F::map("Parameters", ElementKind::String),
    ],
};

pub static DATA_CATALOG_SUMMARY: ShapeDescriptor = ShapeDescriptor {
    name: "DataCatalogSummary",
    role: ShapeRole::Structure,
    fields: &[
        F::string("CatalogName").length(1, 256).pattern(NAME_PATTERN),
        F::enumeration("Type", &DataCatalogType::DESCRIPTOR),
    ],
};

pub static DATABASE: ShapeDescriptor = ShapeDescriptor {
    name: "Database",
    role: ShapeRole::Structure,
    fields: &[
        F::string("Name").required().length(1, 128).pattern(NAME_PATTERN),
        F::string("Description").length(1, 1024),
        F::map("Parameters", ElementKind::String),
    ],
};

pub static COLUMN: ShapeDescriptor = ShapeDescriptor {
    name: "Column",
    role: ShapeRole::Structure,
    fields: &[
        F::string("Name").required().length(1, 255).pattern(NAME_PATTERN),
        F::string("Type").length(0, 4096).pattern(NAME_PATTERN),
        F::string("Comment").length(0, 255).pattern(NAME_PATTERN),
    ],
};

pub static TABLE_METADATA: ShapeDescriptor = ShapeDescriptor {
    name: "TableMetadata",
    role: ShapeRole::Structure,
    fields: &[
        F::string("Name").required().length(1, 128).pattern(NAME_PATTERN),
        F::timestamp("CreateTime"),
        F::timestamp("LastAccessTime"),
        F::string("TableType").length(0, 255),
        F::list("Columns", ElementKind::Structure(&COLUMN)),
        F::list("PartitionKeys", ElementKind::Structure(&COLUMN)),
        F::map("Parameters", ElementKind::String),
    ],
};

// ── Tags ─────────────────────────────────────────────────────────

pub static TAG: ShapeDescriptor = ShapeDescriptor {
    name: "Tag",
    role: ShapeRole::Structure,
    fields: &[
        F::string("Key").length(1, 128).pattern(TAG_KEY_PATTERN),
        F::string("Value").length(0, 256).pattern(TAG_VALUE_PATTERN),
    ],
};
