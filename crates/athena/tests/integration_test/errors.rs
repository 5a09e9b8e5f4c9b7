//! Service failures as they reach the caller.

use serde_json::json;

use schemata_athena::*;
use schemata_core::ServiceFailure;

use crate::helpers::RecordingTransport;

fn failing(status: u16, body: serde_json::Value) -> AthenaClient<RecordingTransport> {
    AthenaClient::new(
        AthenaConfig::default(),
        RecordingTransport::replying([Err(TransportError::Service(WireFailure {
            status,
            error_type: None,
            body,
        }))]),
    )
}

#[tokio::test]
async fn metastore_failures_are_distinguishable_from_bad_input() {
    let metadata = failing(
        400,
        json!({ "__type": "com.amazonaws.athena#MetadataException", "Message": "HIVE_METASTORE_ERROR" }),
    );
    let err = metadata.get_query_status("q-1").await.unwrap_err();
    let service = err.as_service().unwrap();
    assert!(matches!(service, AthenaServiceError::Metadata { .. }));
    assert_eq!(service.message(), "HIVE_METASTORE_ERROR");

    let invalid = failing(
        400,
        json!({ "__type": "InvalidRequestException", "Message": "bad id", "AthenaErrorCode": "INVALID_INPUT" }),
    );
    let err = invalid.get_query_status("q-1").await.unwrap_err();
    let service = err.as_service().unwrap();
    assert_eq!(service.error_code(), Some("INVALID_INPUT"));
    assert_eq!(err.to_string(), "InvalidRequestException: bad id");
}

#[tokio::test]
async fn messages_are_preserved_verbatim() {
    let message = "  Query  has\tstrange   spacing: 'x' ";
    let client = failing(404, json!({ "__type": "ResourceNotFoundException", "Message": message }));
    let err = client.cancel_query("q-1").await.unwrap_err();
    assert_eq!(err.as_service().unwrap().message(), message);
}

#[tokio::test]
async fn transience_is_advisory_only() {
    let client = failing(500, json!({ "__type": "InternalServerException", "Message": "try again" }));
    let err = client.start_query("SELECT 1").await.unwrap_err();
    let service = err.as_service().unwrap();
    assert!(service.is_transient());
    assert_eq!(service.status(), 500);
    assert_eq!(client.transport().requests().len(), 1);
}
