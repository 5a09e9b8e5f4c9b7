use schemata_core::ValidationError;

use crate::schema::Priority;

#[test]
fn every_variant_parses_back() {
    for v in Priority::ALL {
        assert_eq!(Priority::from_value(Some(&v.to_string())).unwrap(), *v);
    }
}

#[test]
fn null_empty_and_bogus_are_invalid_arguments() {
    for input in [None, Some(""), Some("bogus"), Some("low")] {
        let err = Priority::from_value(input).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidArgument(_)), "{input:?}");
    }
}

#[test]
fn serde_uses_wire_strings() {
    assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"HIGH\"");
    assert_eq!(serde_json::from_str::<Priority>("\"LOW\"").unwrap(), Priority::Low);
    assert!(serde_json::from_str::<Priority>("\"MEDIUM\"").is_err());
}
