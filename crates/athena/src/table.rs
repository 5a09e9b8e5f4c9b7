use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use schemata_core::Model;

use crate::types::{ColumnNullable, QueryExecutionState};

/// Column definition from a result set's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultColumn {
    /// Column name as declared in the result set.
    pub name: String,
    /// Athena data type (e.g. "varchar", "bigint", "double", "boolean", "timestamp").
    pub data_type: String,
    pub nullable: Option<ColumnNullable>,
}

/// One page of a `GetQueryResults` response as plain rows.
///
/// Rows are stored as `Vec<Option<String>>` where `None` represents SQL NULL.
/// Column ordering in each row matches the `columns` vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResultTable {
    pub columns: Vec<ResultColumn>,
    pub rows: Vec<Vec<Option<String>>>,
    /// Token for the following page, if there is one.
    pub next_token: Option<String>,
    /// Rows affected, for DML statements.
    pub update_count: Option<i64>,
}

impl QueryResultTable {
    /// Flattens a `GetQueryResultsResult` model.
    ///
    /// On the first page of a SELECT (no `UpdateCount`, or zero) Athena
    /// echoes the column headers as the first row; that row is skipped.
    pub fn from_result(result: &Model, first_page: bool) -> Self {
        let result_set = result.get_model("ResultSet");

        let columns: Vec<ResultColumn> = result_set
            .and_then(|rs| rs.get_model("ResultSetMetadata"))
            .and_then(|meta| meta.get_list("ColumnInfo"))
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model())
            .map(|ci| ResultColumn {
                name: ci.get_str("Name").unwrap_or_default().to_string(),
                data_type: ci.get_str("Type").unwrap_or_default().to_string(),
                nullable: ci.get_enum("Nullable"),
            })
            .collect();

        let raw_rows = result_set
            .and_then(|rs| rs.get_list("Rows"))
            .unwrap_or_default();

        let update_count = result.get_i64("UpdateCount");
        let skip = if first_page && update_count.unwrap_or(0) == 0 && !raw_rows.is_empty() {
            1
        } else {
            0
        };

        let rows = raw_rows
            .iter()
            .skip(skip)
            .filter_map(|v| v.as_model())
            .map(|row| {
                row.get_list("Data")
                    .unwrap_or_default()
                    .iter()
                    .map(|datum| {
                        datum
                            .as_model()
                            .and_then(|d| d.get_str("VarCharValue"))
                            .map(str::to_string)
                    })
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows,
            next_token: result.get_str("NextToken").map(str::to_string),
            update_count,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column called `name`. Athena column names are
    /// case-sensitive here even though the engine folds them.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&ResultColumn> {
        self.column_index(name).map(|i| &self.columns[i])
    }

    /// Cell by position; `None` covers both SQL NULL and out-of-range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(Option::as_deref)
    }

    /// Cell by column name.
    pub fn get_value(&self, row: usize, column: &str) -> Option<&str> {
        self.cell(row, self.column_index(column)?)
    }

    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }
}

impl fmt::Display for QueryResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return match self.update_count {
                Some(n) => write!(f, "({n} rows affected)"),
                None => write!(f, "(empty result set)"),
            };
        }

        // Compute column widths (minimum = header length).
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                let cell_len = cell.as_deref().unwrap_or("NULL").chars().count();
                widths[i] = widths[i].max(cell_len);
            }
        }

        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{:<width$}", col.name, width = widths[i])?;
        }
        writeln!(f)?;

        for (i, w) in widths.iter().enumerate() {
            if i > 0 {
                write!(f, "-+-")?;
            }
            write!(f, "{}", "-".repeat(*w))?;
        }
        writeln!(f)?;

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                if i > 0 {
                    write!(f, " | ")?;
                }
                let value = cell.as_deref().unwrap_or("NULL");
                write!(f, "{:<width$}", value, width = widths[i])?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        write!(f, "{} rows", self.rows.len())?;
        if self.has_more() {
            write!(f, " (more available)")?;
        }
        Ok(())
    }
}

// ── Query status ─────────────────────────────────────────────────

/// Execution state and statistics of one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryStatus {
    pub query_id: String,
    /// `None` when the service reported no state.
    pub state: Option<QueryExecutionState>,
    pub state_change_reason: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Total bytes scanned during execution.
    pub bytes_scanned: Option<i64>,
    pub execution_time_ms: Option<i64>,
    /// S3 output location where results were written, if available.
    pub output_location: Option<String>,
}

impl QueryStatus {
    /// Reads a `QueryExecution` structure.
    pub fn from_execution(query_id: &str, execution: &Model) -> Self {
        let status = execution.get_model("Status");
        let stats = execution.get_model("Statistics");
        Self {
            query_id: execution
                .get_str("QueryExecutionId")
                .unwrap_or(query_id)
                .to_string(),
            state: status.and_then(|s| s.get_enum("State")),
            state_change_reason: status
                .and_then(|s| s.get_str("StateChangeReason"))
                .map(str::to_string),
            submitted_at: status.and_then(|s| s.get_timestamp("SubmissionDateTime")),
            completed_at: status.and_then(|s| s.get_timestamp("CompletionDateTime")),
            bytes_scanned: stats.and_then(|s| s.get_i64("DataScannedInBytes")),
            execution_time_ms: stats.and_then(|s| s.get_i64("EngineExecutionTimeInMillis")),
            output_location: execution
                .lookup(&["ResultConfiguration", "OutputLocation"])
                .and_then(|v| v.as_str())
                .map(str::to_string),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_some_and(|s| s.is_terminal())
    }
}
