//! Typed request translation for AWS Athena.
//!
//! [`AthenaClient`] turns a request [`Model`] into a [`WireRequest`], hands
//! it to a [`Transport`] and decodes the response into the operation's
//! result shape. Service failures come back as [`AthenaServiceError`]s.
//!
//! [`AthenaServiceError`]: crate::error::AthenaServiceError

use tracing::{debug, info, warn};
use uuid::Uuid;

use schemata_core::{codec, CodecError, FieldKind, Model, ValidationError};

use crate::config::AthenaConfig;
use crate::error::AthenaError;
use crate::operations::{operation_for_request, target, CONTENT_TYPE};
use crate::schema::{
    GET_QUERY_EXECUTION_REQUEST, GET_QUERY_RESULTS_REQUEST, QUERY_EXECUTION_CONTEXT,
    RESULT_CONFIGURATION, START_QUERY_EXECUTION_REQUEST, STOP_QUERY_EXECUTION_REQUEST,
};
use crate::table::{QueryResultTable, QueryStatus};
use crate::transport::{Transport, WireRequest};

pub struct AthenaClient<T> {
    config: AthenaConfig,
    transport: T,
}

impl<T: Transport> AthenaClient<T> {
    pub fn new(config: AthenaConfig, transport: T) -> Self {
        info!(
            region = %config.region,
            endpoint = %config.endpoint,
            workgroup = %config.workgroup,
            "AthenaClient initialised"
        );
        Self { config, transport }
    }

    pub fn config(&self) -> &AthenaConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // -----------------------------------------------------------------------
    // Generic dispatch
    // -----------------------------------------------------------------------

    /// Sends any request model and returns its decoded result.
    ///
    /// Absent idempotency tokens are filled in, then the request is
    /// validated before anything reaches the transport.
    pub async fn execute(&self, request: Model) -> Result<Model, AthenaError> {
        let shape = request.shape();
        let operation = operation_for_request(shape)
            .ok_or_else(|| AthenaError::UnknownOperation(shape.name.to_string()))?;

        let request = fill_idempotency_tokens(request)?;
        let body = codec::to_value(&request)?;

        let wire = WireRequest {
            operation: operation.name,
            target: target(operation),
            content_type: CONTENT_TYPE,
            endpoint: self.config.endpoint.clone(),
            body,
        };

        debug!(operation = operation.name, "Invoking Athena operation");

        let doc = self.transport.invoke(wire).await.map_err(|e| {
            warn!(operation = operation.name, error = %e, "Athena operation failed");
            AthenaError::from(e)
        })?;

        let result = codec::from_value(operation.output, &doc)?;
        debug!(
            operation = operation.name,
            fields = result.present().count(),
            "Decoded Athena result"
        );
        Ok(result)
    }

    // -----------------------------------------------------------------------
    // Query helpers
    // -----------------------------------------------------------------------

    /// Starts `sql` with the configured work group, database, catalog and
    /// output location. Returns the query execution id.
    pub async fn start_query(&self, sql: &str) -> Result<String, AthenaError> {
        let request = Model::new(&START_QUERY_EXECUTION_REQUEST).with("QueryString", sql)?;
        let request = apply_defaults(&self.config, request)?;

        let result = self.execute(request).await?;
        let query_id = required_str(&result, "QueryExecutionId")?;

        info!(query_id = %query_id, "Query execution started");
        Ok(query_id)
    }

    /// Current state and statistics of a query execution.
    pub async fn get_query_status(&self, query_id: &str) -> Result<QueryStatus, AthenaError> {
        let request =
            Model::new(&GET_QUERY_EXECUTION_REQUEST).with("QueryExecutionId", query_id)?;
        let result = self.execute(request).await?;

        let execution = result
            .get_model("QueryExecution")
            .ok_or_else(|| missing(&result, "QueryExecution"))?;
        let status = QueryStatus::from_execution(query_id, execution);

        debug!(query_id = %query_id, state = ?status.state, "Fetched query status");
        Ok(status)
    }

    /// Requests cancellation of a running query.
    pub async fn cancel_query(&self, query_id: &str) -> Result<(), AthenaError> {
        info!(query_id = %query_id, "Cancelling query");

        let request =
            Model::new(&STOP_QUERY_EXECUTION_REQUEST).with("QueryExecutionId", query_id)?;
        self.execute(request).await?;

        info!(query_id = %query_id, "Query cancellation requested");
        Ok(())
    }

    /// Fetches one page of results. Pass the previous page's
    /// `next_token` to continue.
    pub async fn get_query_results(
        &self,
        query_id: &str,
        next_token: Option<&str>,
    ) -> Result<QueryResultTable, AthenaError> {
        let mut request =
            Model::new(&GET_QUERY_RESULTS_REQUEST).with("QueryExecutionId", query_id)?;
        if let Some(token) = next_token {
            request.set("NextToken", token)?;
        }

        let result = self.execute(request).await?;
        let table = QueryResultTable::from_result(&result, next_token.is_none());

        debug!(
            query_id = %query_id,
            columns = table.column_count(),
            rows = table.row_count(),
            more = table.has_more(),
            "Parsed Athena results"
        );
        Ok(table)
    }
}

/// Fills every absent idempotency-token field with a fresh UUID v4.
///
/// Required ids that double as tokens (`DeleteNamedQuery`,
/// `StopQueryExecution`) are generated too, so a forgotten id targets a
/// resource that does not exist rather than failing validation.
pub fn fill_idempotency_tokens(mut request: Model) -> Result<Model, ValidationError> {
    let shape = request.shape();
    for fd in shape.fields {
        if fd.idempotency_token && !request.is_set(fd.name) {
            let token = Uuid::new_v4().to_string();
            if fd.required {
                warn!(shape = shape.name, field = fd.name, token = %token, "Generated a required id");
            }
            request.set(fd.name, token)?;
        }
    }
    Ok(request)
}

/// Fills unset request fields from `config`.
///
/// Only optional `WorkGroup` fields are defaulted, so operations that name
/// their target work group are never pointed at the default one. A
/// `StartQueryExecution` request also gets its database, catalog and
/// output location.
pub fn apply_defaults(config: &AthenaConfig, mut request: Model) -> Result<Model, ValidationError> {
    let shape = request.shape();

    if let Some(fd) = shape.field("WorkGroup") {
        if !fd.required && matches!(fd.kind, FieldKind::String) && !request.is_set("WorkGroup") {
            request.set("WorkGroup", config.workgroup.as_str())?;
        }
    }

    if shape.same_as(&START_QUERY_EXECUTION_REQUEST) {
        let mut context = request
            .get_model("QueryExecutionContext")
            .cloned()
            .unwrap_or_else(|| Model::new(&QUERY_EXECUTION_CONTEXT));
        if !context.is_set("Database") {
            context.set("Database", config.database.as_str())?;
        }
        if !context.is_set("Catalog") {
            context.set("Catalog", config.catalog.as_str())?;
        }
        request.set("QueryExecutionContext", context)?;

        if let Some(location) = &config.output_location {
            let mut results = request
                .get_model("ResultConfiguration")
                .cloned()
                .unwrap_or_else(|| Model::new(&RESULT_CONFIGURATION));
            if !results.is_set("OutputLocation") {
                results.set("OutputLocation", location.as_str())?;
            }
            request.set("ResultConfiguration", results)?;
        }
    }

    Ok(request)
}

fn required_str(result: &Model, field: &str) -> Result<String, AthenaError> {
    result
        .get_str(field)
        .map(str::to_string)
        .ok_or_else(|| missing(result, field))
}

fn missing(result: &Model, field: &str) -> AthenaError {
    AthenaError::Codec(CodecError::Decode {
        path: format!("{}.{field}", result.shape().name),
        reason: "missing from response".to_string(),
    })
}
