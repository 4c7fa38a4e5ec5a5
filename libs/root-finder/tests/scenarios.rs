use root_finder::{ConfigError, ErrorKind, Field, FieldValue, RootFinderConfig};

#[test]
fn calibration_override_renders_fields_in_order() {
    let cfg = RootFinderConfig::new(1e-6, 1e-6, 500).unwrap();
    let text = cfg.to_string();
    let abs = text.find("absoluteTolerance=1e-6").unwrap();
    let rel = text.find("relativeTolerance=1e-6").unwrap();
    let steps = text.find("maximumSteps=500").unwrap();
    assert!(abs < rel && rel < steps);
}

#[test]
fn zero_absolute_tolerance_is_named_in_error() {
    let err = RootFinderConfig::new(0.0, 1e-9, 1000).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().contains("absoluteTolerance"));
}

#[test]
fn negative_builder_assignment_keeps_default() {
    let mut builder = RootFinderConfig::builder();
    let err = builder.absolute_tolerance(-1.0).unwrap_err();
    assert_eq!(
        err,
        ConfigError::NotPositive {
            field: Field::AbsoluteTolerance,
            value: FieldValue::Float(-1.0),
        }
    );
    assert_eq!(builder.get("absoluteTolerance"), Ok(FieldValue::Float(1e-9)));
}

#[test]
fn loader_tightens_standard_for_one_curve() {
    let base = RootFinderConfig::standard();
    let mut builder = base.to_builder();
    builder
        .apply_properties("absoluteTolerance = 1e-12\nmaximumSteps = 4000")
        .unwrap();
    let tight = builder.build().unwrap();

    assert_eq!(tight.absolute_tolerance(), 1e-12);
    assert_eq!(tight.relative_tolerance(), base.relative_tolerance());
    assert_eq!(tight.maximum_steps(), 4000);
    assert_eq!(*base, RootFinderConfig::new(1e-9, 1e-9, 1000).unwrap());
}
