//! Closed enumerations used by Athena shapes.

use schemata_core::wire_enum;

wire_enum! {
    /// Lifecycle state of a query execution.
    pub enum QueryExecutionState {
        Queued => "QUEUED",
        Running => "RUNNING",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
        Cancelled => "CANCELLED",
    }
}

impl QueryExecutionState {
    /// `SUCCEEDED`, `FAILED` and `CANCELLED` never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            QueryExecutionState::Succeeded
                | QueryExecutionState::Failed
                | QueryExecutionState::Cancelled
        )
    }
}

wire_enum! {
    /// Kind of SQL statement a query execution ran.
    pub enum StatementType {
        Ddl => "DDL",
        Dml => "DML",
        Utility => "UTILITY",
    }
}

wire_enum! {
    /// How query results written to S3 are encrypted.
    pub enum EncryptionOption {
        SseS3 => "SSE_S3",
        SseKms => "SSE_KMS",
        CseKms => "CSE_KMS",
    }
}

wire_enum! {
    pub enum ColumnNullable {
        NotNull => "NOT_NULL",
        Nullable => "NULLABLE",
        Unknown => "UNKNOWN",
    }
}

wire_enum! {
    pub enum WorkGroupState {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

wire_enum! {
    /// Metastore behind a data catalog.
    pub enum DataCatalogType {
        Lambda => "LAMBDA",
        Glue => "GLUE",
        Hive => "HIVE",
    }
}

wire_enum! {
    /// Why a request was throttled.
    pub enum ThrottleReason {
        ConcurrentQueryLimitExceeded => "CONCURRENT_QUERY_LIMIT_EXCEEDED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_round_trips() {
        for v in QueryExecutionState::ALL {
            assert_eq!(v.to_string().parse::<QueryExecutionState>().unwrap(), *v);
        }
        for v in EncryptionOption::ALL {
            assert_eq!(EncryptionOption::from_value(Some(v.as_str())).unwrap(), *v);
        }
        for v in DataCatalogType::ALL {
            assert_eq!(DataCatalogType::try_from(v.as_str()).unwrap(), *v);
        }
    }

    #[test]
    fn encryption_wire_values() {
        let values: Vec<_> = EncryptionOption::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(values, vec!["SSE_S3", "SSE_KMS", "CSE_KMS"]);
    }

    #[test]
    fn empty_null_and_unknown_fail() {
        assert!(StatementType::from_value(None).is_err());
        assert!(StatementType::from_value(Some("")).is_err());
        assert!("bogus".parse::<StatementType>().is_err());
        assert!("ddl".parse::<StatementType>().is_err());
    }

    #[test]
    fn terminal_states() {
        assert!(!QueryExecutionState::Queued.is_terminal());
        assert!(!QueryExecutionState::Running.is_terminal());
        assert!(QueryExecutionState::Succeeded.is_terminal());
        assert!(QueryExecutionState::Failed.is_terminal());
        assert!(QueryExecutionState::Cancelled.is_terminal());
    }
}
