//! Parameters over a user-defined payload type.

use dial_core::{
    KindMismatch, ParameterError, ParameterPayload, ParameterValue, ParameterVersion,
    PayloadError, ValueKind,
};
use dial_param::Parameter;
use dial_set::{ParameterSet, SetConfig, SetError};
use dial_test_utils::{RecordingObserver, ScriptedSupplier};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Fast,
    Exact,
}

impl ParameterPayload for Mode {
    const KIND: ValueKind = ValueKind::String;

    fn into_value(self) -> ParameterValue {
        match self {
            Mode::Fast => "fast".into(),
            Mode::Exact => "exact".into(),
        }
    }

    fn from_value(value: ParameterValue) -> Result<Self, PayloadError> {
        match value.as_str() {
            Some("fast") => Ok(Mode::Fast),
            Some("exact") => Ok(Mode::Exact),
            Some(_) => Err(PayloadError::invalid(&value)),
            None => Err(KindMismatch {
                expected: Self::KIND,
                found: value.kind(),
            }
            .into()),
        }
    }
}

fn mode_set(supplier: &ScriptedSupplier) -> ParameterSet {
    let mut set =
        ParameterSet::with_supplier(SetConfig::labelled("modes"), supplier.clone()).unwrap();
    set.add(Parameter::new("mode", Mode::Fast)).unwrap();
    set
}

#[test]
fn supplied_mode_is_applied() {
    let supplier = ScriptedSupplier::new().with("mode", "exact");
    let mut set = mode_set(&supplier);
    let observer = RecordingObserver::new();
    set.subscribe(observer.callback());

    set.refresh_by_name("mode").unwrap();

    let id = set.id_of("mode").unwrap();
    assert_eq!(set.read::<Mode>(id).unwrap(), Mode::Exact);
    assert_eq!(
        set.downcast::<Parameter<Mode>>(id).map(|p| *p.current()),
        Some(Mode::Exact)
    );
    assert_eq!(observer.versions(), vec![ParameterVersion(1)]);
}

#[test]
fn unknown_mode_string_is_invalid_value_not_type_mismatch() {
    let supplier = ScriptedSupplier::new().with("mode", "slow");
    let mut set = mode_set(&supplier);
    let observer = RecordingObserver::new();
    set.subscribe(observer.callback());

    let err = set.refresh_by_name("mode").unwrap_err();

    assert_eq!(
        err,
        SetError::Parameter(ParameterError::InvalidValue {
            name: "mode".into(),
            value: "\"slow\"".into(),
        })
    );
    assert_eq!(
        err.to_string(),
        "parameter 'mode': value \"slow\" is not a valid payload"
    );
    let id = set.id_of("mode").unwrap();
    assert_eq!(set.read::<Mode>(id).unwrap(), Mode::Fast);
    assert_eq!(observer.count(), 0);
    assert_eq!(set.version(), ParameterVersion(0));
}

#[test]
fn wrong_kind_for_mode_is_type_mismatch() {
    let supplier = ScriptedSupplier::new().with("mode", 3i64);
    let mut set = mode_set(&supplier);

    match set.refresh_by_name("mode") {
        Err(SetError::Parameter(ParameterError::TypeMismatch {
            expected, found, ..
        })) => {
            assert_eq!(expected, ValueKind::String);
            assert_eq!(found, ValueKind::Int);
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn direct_update_with_unknown_mode_is_rejected() {
    let mut set = ParameterSet::new();
    let id = set.add(Parameter::new("mode", Mode::Exact)).unwrap();
    assert!(matches!(
        set.update(id, "turbo"),
        Err(SetError::Parameter(ParameterError::InvalidValue { .. }))
    ));
    set.update(id, "fast").unwrap();
    assert_eq!(set.read::<Mode>(id).unwrap(), Mode::Fast);
}
