use chrono::DateTime;
use indexmap::IndexMap;

use schemata_core::{codec, Model, Value, ValidationError};

use crate::schema::{Priority, DATUM, ROW, SUBMIT_REQUEST};

fn row(values: &[&str]) -> Model {
    let data: Vec<Model> = values
        .iter()
        .map(|v| Model::new(&DATUM).with("VarCharValue", *v).unwrap())
        .collect();
    Model::new(&ROW).with_all("Data", data).unwrap()
}

fn full_request() -> Model {
    let mut env = IndexMap::new();
    env.insert("RUST_LOG".to_string(), "debug");
    env.insert("HOME".to_string(), "/tmp");
    Model::new(&SUBMIT_REQUEST)
        .with("JobName", "nightly-1")
        .unwrap()
        .with("Priority", Priority::High)
        .unwrap()
        .with("Retries", 3)
        .unwrap()
        .with("DryRun", true)
        .unwrap()
        .with("Weight", 0.75)
        .unwrap()
        .with("NotBefore", DateTime::from_timestamp_millis(1_700_000_000_500).unwrap())
        .unwrap()
        .with_all("Labels", ["etl", "etl"])
        .unwrap()
        .with("Env", env)
        .unwrap()
        .with_all("Rows", [row(&["x", "y"]), row(&[])])
        .unwrap()
}

#[test]
fn equality_is_reflexive() {
    let models = [
        Model::new(&SUBMIT_REQUEST),
        full_request(),
        full_request().with("Weight", f64::NAN).unwrap(),
    ];
    for m in &models {
        assert_eq!(m, m);
        assert_eq!(m, &m.clone());
    }
}

#[test]
fn equal_models_hash_equal() {
    let a = full_request();
    let b = full_request();
    assert_eq!(a, b);
    assert_eq!(a.identity_hash(), b.identity_hash());

    let c = b.with("Retries", 4).unwrap();
    assert_ne!(a, c);
}

#[test]
fn absent_fields_stay_out_of_render_and_document() {
    let m = Model::new(&SUBMIT_REQUEST).with("JobName", "solo").unwrap();
    assert_eq!(m.get("Priority"), None);
    assert_eq!(m.to_string(), "{JobName: solo}");
    assert_eq!(codec::to_string(&m).unwrap(), r#"{"JobName":"solo"}"#);
}

#[test]
fn absent_list_differs_from_empty_list() {
    let absent = Model::new(&SUBMIT_REQUEST).with("JobName", "a").unwrap();
    let empty = absent.clone().with_all("Labels", Vec::<&str>::new()).unwrap();
    assert_ne!(absent, empty);
    assert_eq!(empty.to_string(), "{JobName: a, Labels: []}");
}

#[test]
fn round_trip_of_fully_populated_model() {
    let original = full_request();
    let decoded = codec::from_slice(&SUBMIT_REQUEST, &codec::to_vec(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.to_string(), original.to_string());
}

#[test]
fn round_trip_keeps_nanosecond_times_and_non_finite_weights() {
    let fine = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
    for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let original = full_request()
            .with("NotBefore", fine)
            .unwrap()
            .with("Weight", weight)
            .unwrap();
        let decoded =
            codec::from_slice(&SUBMIT_REQUEST, &codec::to_vec(&original).unwrap()).unwrap();
        assert!(decoded.is_set("Weight"));
        assert_eq!(decoded, original);
        assert_eq!(decoded.identity_hash(), original.identity_hash());
    }
}

#[test]
fn with_all_appends_across_calls() {
    let m = Model::new(&SUBMIT_REQUEST)
        .with_all("Labels", ["a", "b"])
        .unwrap()
        .with_all("Labels", ["c"])
        .unwrap();
    assert_eq!(
        m.get("Labels"),
        Some(&Value::List(vec!["a".into(), "b".into(), "c".into()]))
    );
}

#[test]
fn missing_required_field_then_fixed() {
    let m = Model::new(&SUBMIT_REQUEST).with("Retries", 1).unwrap();
    let err = codec::to_value(&m).unwrap_err();
    assert!(err.to_string().contains("JobName"));
    assert!(matches!(
        m.validate(),
        Err(ValidationError::MissingRequired { ref field, .. }) if field == "JobName"
    ));

    let m = m.with("JobName", "fixed").unwrap();
    assert!(m.validate().is_ok());
    assert!(codec::to_value(&m).is_ok());
}

#[test]
fn failed_set_leaves_model_unchanged() {
    let before = Model::new(&SUBMIT_REQUEST).with("JobName", "ok").unwrap();
    let mut after = before.clone();
    assert!(after.set("JobName", "Not-Lowercase").is_err());
    assert!(after.set("Retries", 9).is_err());
    assert!(after.set("Retries", "three").is_err());
    assert!(after.set("Nope", 1).is_err());
    assert!(after
        .append("Labels", (0..11).map(|i| i.to_string()))
        .is_err());
    assert_eq!(after, before);
}

#[test]
fn row_scenario() {
    let a = row(&["x", "y"]);
    let b = row(&["x", "y"]);
    assert_eq!(a, b);
    assert_ne!(a, row(&["x", "z"]));
    assert_ne!(a, row(&["y", "x"]));
    assert_eq!(a.to_string(), "{Data: [{VarCharValue: x}, {VarCharValue: y}]}");
}
