//! Athena shapes as plain values: equality, rendering, wire round trips.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde_json::json;

use schemata_athena::schema::*;
use schemata_athena::*;
use schemata_core::{codec, Model, ValidationError};

fn datum(v: &str) -> Model {
    Model::new(&DATUM).with("VarCharValue", v).unwrap()
}

fn row(values: &[&str]) -> Model {
    Model::new(&ROW)
        .with_all("Data", values.iter().map(|v| datum(v)))
        .unwrap()
}

fn std_hash(m: &Model) -> u64 {
    let mut h = DefaultHasher::new();
    m.hash(&mut h);
    h.finish()
}

#[test]
fn rows_compare_by_datum_values() {
    let a = row(&["x", "y"]);
    let b = row(&["x", "y"]);
    assert_eq!(a, b);
    assert_eq!(a.identity_hash(), b.identity_hash());
    assert_eq!(std_hash(&a), std_hash(&b));

    let c = row(&["x", "z"]);
    assert_ne!(a, c);
}

#[test]
fn absent_datum_differs_from_empty_string() {
    let null = Model::new(&ROW).with_all("Data", [Model::new(&DATUM)]).unwrap();
    let empty = row(&[""]);
    assert_ne!(null, empty);
    assert_eq!(null.to_string(), "{Data: [{}]}");
    assert_eq!(empty.to_string(), "{Data: [{VarCharValue: }]}");
}

#[test]
fn fully_populated_execution_round_trips() {
    let submitted: DateTime<Utc> = DateTime::from_timestamp_millis(1_589_000_000_125).unwrap();
    let encryption = Model::new(&ENCRYPTION_CONFIGURATION)
        .with("EncryptionOption", EncryptionOption::SseKms)
        .unwrap()
        .with("KmsKey", "arn:aws:kms:us-east-1:111122223333:key/abc")
        .unwrap();
    let execution = Model::new(&QUERY_EXECUTION)
        .with("QueryExecutionId", "q-1")
        .unwrap()
        .with("Query", "SELECT 1")
        .unwrap()
        .with("StatementType", StatementType::Dml)
        .unwrap()
        .with(
            "ResultConfiguration",
            Model::new(&RESULT_CONFIGURATION)
                .with("OutputLocation", "s3://bucket/")
                .unwrap()
                .with("EncryptionConfiguration", encryption)
                .unwrap(),
        )
        .unwrap()
        .with(
            "Status",
            Model::new(&QUERY_EXECUTION_STATUS)
                .with("State", QueryExecutionState::Succeeded)
                .unwrap()
                .with("SubmissionDateTime", submitted)
                .unwrap(),
        )
        .unwrap()
        .with(
            "Statistics",
            Model::new(&QUERY_EXECUTION_STATISTICS)
                .with("DataScannedInBytes", 4096i64)
                .unwrap(),
        )
        .unwrap()
        .with("WorkGroup", "primary")
        .unwrap();

    let text = codec::to_string(&execution).unwrap();
    let decoded = codec::from_str(&QUERY_EXECUTION, &text).unwrap();
    assert_eq!(decoded, execution);
    assert_eq!(decoded.identity_hash(), execution.identity_hash());
    assert_eq!(decoded.get_enum::<StatementType>("StatementType"), Some(StatementType::Dml));

    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["Status"]["SubmissionDateTime"], json!(1589000000.125));
    assert!(doc.get("QueryExecutionContext").is_none());
}

#[test]
fn tag_keys_append_in_call_order() {
    let request = Model::new(&UNTAG_RESOURCE_REQUEST)
        .with("ResourceARN", "arn:aws:athena:us-east-1:111122223333:workgroup/primary")
        .unwrap()
        .with_all("TagKeys", ["a", "b"])
        .unwrap()
        .with_all("TagKeys", ["c", "a"])
        .unwrap();
    let keys: Vec<_> = request
        .get_list("TagKeys")
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(keys, vec!["a", "b", "c", "a"]);
}

#[test]
fn advisory_constraints_are_checked_on_set() {
    let mut request = Model::new(&START_QUERY_EXECUTION_REQUEST);

    let err = request.set("WorkGroup", "has spaces").unwrap_err();
    assert!(matches!(err, ValidationError::PatternMismatch { ref field, .. } if field == "WorkGroup"));
    assert!(!request.is_set("WorkGroup"));

    let err = request.set("ClientRequestToken", "too-short").unwrap_err();
    assert!(matches!(err, ValidationError::TooShort { min: 32, actual: 9, .. }));

    let err = request.set("QueryString", "").unwrap_err();
    assert!(matches!(err, ValidationError::TooShort { min: 1, actual: 0, .. }));

    let mut list = Model::new(&LIST_TAGS_FOR_RESOURCE_REQUEST);
    let err = list.set("MaxResults", 10).unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { actual: 10, .. }));
    list.set("MaxResults", 75).unwrap();
}

#[test]
fn tag_patterns_accept_unicode_letters() {
    let tag = Model::new(&TAG)
        .with("Key", "Équipe:owner")
        .unwrap()
        .with("Value", "")
        .unwrap();
    assert_eq!(tag.to_string(), "{Key: Équipe:owner, Value: }");
    assert!(Model::new(&TAG).with("Key", "bad\nkey").is_err());
}

#[test]
fn enum_fields_reject_unknown_strings() {
    let err = Model::new(&QUERY_EXECUTION_STATUS)
        .with("State", "queued")
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot create enum from queued value!");
}

#[test]
fn inbound_results_tolerate_missing_required_fields() {
    let result = codec::from_value(
        &GET_DATA_CATALOG_RESULT,
        &json!({ "DataCatalog": { "Description": "no name or type", "Extra": 1 } }),
    )
    .unwrap();
    let catalog = result.get_model("DataCatalog").unwrap();
    assert!(!catalog.is_set("Name"));
    assert!(catalog.validate().is_err());
}

#[test]
fn registry_and_operation_table_agree() {
    for op in OPERATIONS {
        assert!(find_shape(op.input.name).is_some());
        assert!(find_shape(op.output.name).is_some());
    }
    assert_eq!(
        find_enum("EncryptionOption").unwrap().values,
        &["SSE_S3", "SSE_KMS", "CSE_KMS"]
    );
}
