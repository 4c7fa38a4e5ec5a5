use approx::assert_relative_eq;
use root_finder::{Field, FieldValue, RootFinderConfig, RootFinderConfigBuilder};
use serde_json::json;

#[test]
fn serializes_with_property_names() {
    let cfg = RootFinderConfig::new(1e-6, 2e-6, 500).unwrap();
    let value = serde_json::to_value(cfg).unwrap();
    assert_eq!(
        value,
        json!({
            "absoluteTolerance": 1e-6,
            "relativeTolerance": 2e-6,
            "maximumSteps": 500
        })
    );
}

#[test]
fn deserializes_and_round_trips() {
    let cfg = RootFinderConfig::new(3e-7, 4e-8, 77).unwrap();
    let text = serde_json::to_string(&cfg).unwrap();
    let back: RootFinderConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn missing_properties_take_defaults() {
    let cfg: RootFinderConfig = serde_json::from_str(r#"{"maximumSteps": 20}"#).unwrap();
    assert_eq!(cfg.maximum_steps(), 20);
    assert_relative_eq!(cfg.absolute_tolerance(), 1e-9);
    assert_relative_eq!(cfg.relative_tolerance(), 1e-9);

    let cfg: RootFinderConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(&cfg, RootFinderConfig::standard());
}

#[test]
fn integer_tolerance_is_accepted() {
    let cfg: RootFinderConfig = serde_json::from_str(r#"{"relativeTolerance": 1}"#).unwrap();
    assert_relative_eq!(cfg.relative_tolerance(), 1.0);
}

#[test]
fn invalid_values_are_rejected_on_deserialize() {
    let err = serde_json::from_str::<RootFinderConfig>(r#"{"absoluteTolerance": 0.0}"#)
        .unwrap_err();
    assert!(err.to_string().contains("absoluteTolerance"));

    let err = serde_json::from_str::<RootFinderConfig>(r#"{"maximumSteps": 0}"#).unwrap_err();
    assert!(err.to_string().contains("maximumSteps"));

    assert!(serde_json::from_str::<RootFinderConfig>(r#"{"maximumSteps": -4}"#).is_err());
}

#[test]
fn unknown_properties_are_rejected() {
    let result = serde_json::from_str::<RootFinderConfig>(r#"{"tolerance": 1e-9}"#);
    assert!(result.is_err());
}

#[test]
fn builder_rejects_invalid_fields_on_deserialize() {
    let err = serde_json::from_str::<RootFinderConfigBuilder>(r#"{"relativeTolerance": -2.0}"#)
        .unwrap_err();
    assert!(err.to_string().contains("relativeTolerance"));

    let err = serde_json::from_str::<RootFinderConfigBuilder>(
        r#"{"maximumSteps": 0, "absoluteTolerance": -3.0}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("absoluteTolerance"));
}

#[test]
fn builder_deserializes_over_defaults() {
    let builder: RootFinderConfigBuilder =
        serde_json::from_str(r#"{"maximumSteps": 64}"#).unwrap();
    assert_eq!(builder.value(Field::MaximumSteps), FieldValue::Integer(64));
    assert_eq!(builder.value(Field::AbsoluteTolerance), FieldValue::Float(1e-9));

    let json = serde_json::to_string(&builder).unwrap();
    let back: RootFinderConfigBuilder = serde_json::from_str(&json).unwrap();
    assert_eq!(back, builder);
    assert!(serde_json::from_str::<RootFinderConfigBuilder>(r#"{"steps": 3}"#).is_err());
}
