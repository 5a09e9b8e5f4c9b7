//! End-to-end request translation through a recording transport.

use std::sync::Arc;

use serde_json::json;

use schemata_athena::schema::{
    BATCH_GET_QUERY_EXECUTION_REQUEST, CREATE_WORK_GROUP_REQUEST, WORK_GROUP_CONFIGURATION,
};
use schemata_athena::*;
use schemata_core::{Model, ValidationError};

use crate::helpers::RecordingTransport;

fn config() -> AthenaConfig {
    AthenaConfig {
        database: "analytics".into(),
        output_location: Some("s3://bucket/results/".into()),
        ..AthenaConfig::for_region("eu-west-1")
    }
}

#[tokio::test]
async fn query_lifecycle() {
    let transport = Arc::new(RecordingTransport::replying([
        Ok(json!({ "QueryExecutionId": "q-42" })),
        Ok(json!({
            "QueryExecution": {
                "QueryExecutionId": "q-42",
                "Query": "SELECT id, name FROM users",
                "StatementType": "DML",
                "Status": {
                    "State": "SUCCEEDED",
                    "SubmissionDateTime": 1589000000.5,
                    "CompletionDateTime": 1589000004.25
                },
                "Statistics": { "DataScannedInBytes": 1024, "EngineExecutionTimeInMillis": 3750 },
                "WorkGroup": "primary"
            }
        })),
        Ok(json!({
            "ResultSet": {
                "Rows": [
                    { "Data": [{ "VarCharValue": "id" }, { "VarCharValue": "name" }] },
                    { "Data": [{ "VarCharValue": "1" }, { "VarCharValue": "alice" }] },
                    { "Data": [{ "VarCharValue": "2" }, {}] }
                ],
                "ResultSetMetadata": {
                    "ColumnInfo": [
                        { "Name": "id", "Type": "bigint" },
                        { "Name": "name", "Type": "varchar", "Nullable": "NULLABLE" }
                    ]
                }
            },
            "NextToken": "tok-2"
        })),
        Ok(json!({
            "ResultSet": {
                "Rows": [{ "Data": [{ "VarCharValue": "3" }, { "VarCharValue": "carol" }] }]
            }
        })),
    ]));
    let client = AthenaClient::new(config(), Arc::clone(&transport));

    let id = client.start_query("SELECT id, name FROM users").await.unwrap();
    assert_eq!(id, "q-42");

    let status = client.get_query_status(&id).await.unwrap();
    assert_eq!(status.state, Some(QueryExecutionState::Succeeded));
    assert_eq!(status.execution_time_ms, Some(3750));
    let elapsed = status.completed_at.unwrap() - status.submitted_at.unwrap();
    assert_eq!(elapsed.num_milliseconds(), 3750);

    let first = client.get_query_results(&id, None).await.unwrap();
    assert_eq!(first.row_count(), 2);
    assert_eq!(first.get_value(0, "name"), Some("alice"));
    assert_eq!(first.get_value(1, "name"), None);
    assert_eq!(first.next_token.as_deref(), Some("tok-2"));

    let second = client
        .get_query_results(&id, first.next_token.as_deref())
        .await
        .unwrap();
    assert_eq!(second.row_count(), 1);
    assert!(!second.has_more());

    let requests = transport.requests();
    let operations: Vec<_> = requests.iter().map(|r| r.operation).collect();
    assert_eq!(
        operations,
        vec!["StartQueryExecution", "GetQueryExecution", "GetQueryResults", "GetQueryResults"]
    );
    assert!(requests.iter().all(|r| r.endpoint == "https://athena.eu-west-1.amazonaws.com"));
    assert_eq!(requests[0].body["QueryExecutionContext"]["Database"], "analytics");
    assert_eq!(requests[3].body["NextToken"], "tok-2");
}

#[tokio::test]
async fn batch_results_keep_unprocessed_ids() {
    let transport = RecordingTransport::replying([Ok(json!({
        "QueryExecutions": [{ "QueryExecutionId": "a", "Status": { "State": "RUNNING" } }],
        "UnprocessedQueryExecutionIds": [
            { "QueryExecutionId": "b", "ErrorCode": "INVALID_INPUT", "ErrorMessage": "not found" }
        ]
    }))]);
    let client = AthenaClient::new(config(), transport);

    let request = Model::new(&BATCH_GET_QUERY_EXECUTION_REQUEST)
        .with_all("QueryExecutionIds", ["a", "b"])
        .unwrap();
    let result = client.execute(request).await.unwrap();

    let executions = result.get_list("QueryExecutions").unwrap();
    assert_eq!(executions.len(), 1);
    let unprocessed = result.get_list("UnprocessedQueryExecutionIds").unwrap();
    let first = unprocessed[0].as_model().unwrap();
    assert_eq!(first.get_str("ErrorMessage"), Some("not found"));
    assert_eq!(
        first.to_string(),
        "{QueryExecutionId: b, ErrorCode: INVALID_INPUT, ErrorMessage: not found}"
    );
}

#[tokio::test]
async fn missing_field_then_fixed() {
    let transport = Arc::new(RecordingTransport::replying([Ok(json!({}))]));
    let client = AthenaClient::new(config(), Arc::clone(&transport));

    let request = Model::new(&CREATE_WORK_GROUP_REQUEST)
        .with("Description", "nightly batch")
        .unwrap();
    let err = client.execute(request.clone()).await.unwrap_err();
    match err {
        AthenaError::Validation(ValidationError::MissingRequired { field, .. }) => {
            assert_eq!(field, "Name")
        }
        other => panic!("unexpected: {other}"),
    }
    assert!(transport.requests().is_empty());

    let configuration = Model::new(&WORK_GROUP_CONFIGURATION)
        .with("BytesScannedCutoffPerQuery", 10_000_000_000i64)
        .unwrap();
    let request = request
        .with("Name", "nightly")
        .unwrap()
        .with("Configuration", configuration)
        .unwrap();
    client.execute(request).await.unwrap();

    let sent = &transport.requests()[0];
    assert_eq!(sent.target, "AmazonAthena.CreateWorkGroup");
    assert_eq!(
        sent.body,
        json!({
            "Name": "nightly",
            "Configuration": { "BytesScannedCutoffPerQuery": 10_000_000_000i64 },
            "Description": "nightly batch"
        })
    );
}

#[tokio::test]
async fn connection_failures_surface_as_transport_errors() {
    let client = AthenaClient::new(config(), RecordingTransport::default());
    let err = client.cancel_query("q-1").await.unwrap_err();
    assert!(matches!(err, AthenaError::Transport(reason) if reason == "no reply queued"));
}

#[tokio::test]
async fn unexpected_enum_in_response_is_a_codec_error() {
    let transport = RecordingTransport::replying([Ok(json!({
        "QueryExecution": { "Status": { "State": "PAUSED" } }
    }))]);
    let client = AthenaClient::new(config(), transport);
    let err = client.get_query_status("q-1").await.unwrap_err();
    assert!(matches!(
        err,
        AthenaError::Validation(ValidationError::InvalidArgument(ref msg))
            if msg == "Cannot create enum from PAUSED value!"
    ));
}
