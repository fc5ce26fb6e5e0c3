//! The tagged [`ParameterValue`] and the payload conversion traits.
//!
//! A parameter's payload type `T` maps onto exactly one [`ValueKind`] via
//! [`ParameterPayload`]. The kind travels with every [`ParameterValue`],
//! so reading the wrong variant is detected instead of yielding a default.

use std::fmt;

use thiserror::Error;

use crate::error::ParameterError;

/// Classification of a parameter's payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 64-bit floating point.
    Double,
    /// 64-bit signed integer.
    Int,
    /// Boolean flag.
    Bool,
    /// UTF-8 string, usually drawn from an enumerated domain.
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double => write!(f, "double"),
            Self::Int => write!(f, "int"),
            Self::Bool => write!(f, "bool"),
            Self::String => write!(f, "string"),
        }
    }
}

/// A parameter value with its kind attached.
///
/// # Examples
///
/// ```
/// use dial_core::{ParameterValue, ValueKind};
///
/// let v = ParameterValue::from(5.0);
/// assert_eq!(v.kind(), ValueKind::Double);
/// assert_eq!(v.as_f64(), Some(5.0));
/// // Reading another variant is explicit, never a silent zero.
/// assert_eq!(v.as_i64(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    /// A floating-point payload.
    Double(f64),
    /// An integer payload.
    Int(i64),
    /// A boolean payload.
    Bool(bool),
    /// A string payload.
    String(String),
}

impl ParameterValue {
    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Double(_) => ValueKind::Double,
            Self::Int(_) => ValueKind::Int,
            Self::Bool(_) => ValueKind::Bool,
            Self::String(_) => ValueKind::String,
        }
    }

    /// The floating-point payload, or `None` for any other kind.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// The integer payload, or `None` for any other kind.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean payload, or `None` for any other kind.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The string payload, or `None` for any other kind.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParameterValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// A value of one kind was offered where another kind was required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("expected {expected} value, got {found}")]
pub struct KindMismatch {
    /// The kind the receiver accepts.
    pub expected: ValueKind,
    /// The kind that was supplied.
    pub found: ValueKind,
}

impl KindMismatch {
    /// Attach the name of the parameter the mismatch occurred on.
    pub fn for_parameter(self, name: &str) -> ParameterError {
        ParameterError::TypeMismatch {
            name: name.to_string(),
            expected: self.expected,
            found: self.found,
        }
    }
}

/// Why a [`ParameterValue`] could not be converted into a payload type.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PayloadError {
    /// The value has the wrong kind.
    #[error(transparent)]
    Kind(#[from] KindMismatch),
    /// The value has the right kind but does not describe any instance of
    /// the payload type.
    #[error("value {value} is not a valid payload")]
    Invalid {
        /// The rejected value, rendered.
        value: String,
    },
}

impl PayloadError {
    /// Content-level rejection of `value`.
    pub fn invalid(value: &ParameterValue) -> Self {
        Self::Invalid {
            value: value.to_string(),
        }
    }

    /// Attach the name of the parameter the conversion failed on.
    ///
    /// Kind failures become [`ParameterError::TypeMismatch`]; content
    /// failures become [`ParameterError::InvalidValue`].
    pub fn for_parameter(self, name: &str) -> ParameterError {
        match self {
            Self::Kind(mismatch) => mismatch.for_parameter(name),
            Self::Invalid { value } => ParameterError::InvalidValue {
                name: name.to_string(),
                value,
            },
        }
    }
}

/// A payload type that can be stored in a parameter.
///
/// Implemented for `f64`, `i64`, `bool`, and `String`. Domain types
/// (e.g. a mode enum) implement it by mapping themselves onto one of
/// the four kinds, typically [`ValueKind::String`].
///
/// # Examples
///
/// ```
/// use dial_core::{ParameterPayload, ParameterValue, ValueKind};
/// use dial_core::value::{KindMismatch, PayloadError};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Mode { Fast, Exact }
///
/// impl ParameterPayload for Mode {
///     const KIND: ValueKind = ValueKind::String;
///
///     fn into_value(self) -> ParameterValue {
///         match self {
///             Mode::Fast => "fast".into(),
///             Mode::Exact => "exact".into(),
///         }
///     }
///
///     fn from_value(value: ParameterValue) -> Result<Self, PayloadError> {
///         match value.as_str() {
///             Some("fast") => Ok(Mode::Fast),
///             Some("exact") => Ok(Mode::Exact),
///             Some(_) => Err(PayloadError::invalid(&value)),
///             None => Err(KindMismatch { expected: Self::KIND, found: value.kind() }.into()),
///         }
///     }
/// }
///
/// assert_eq!(Mode::from_value("exact".into()), Ok(Mode::Exact));
/// assert!(matches!(
///     Mode::from_value("slow".into()),
///     Err(PayloadError::Invalid { .. })
/// ));
/// ```
pub trait ParameterPayload: Clone + PartialEq + fmt::Debug + 'static {
    /// The value kind every instance of this type converts to.
    const KIND: ValueKind;

    /// Convert into the tagged representation.
    fn into_value(self) -> ParameterValue;

    /// Convert from the tagged representation.
    ///
    /// Fails with [`PayloadError::Kind`] when `value` has another kind and
    /// with [`PayloadError::Invalid`] when it has the right kind but does
    /// not describe a `Self`.
    fn from_value(value: ParameterValue) -> Result<Self, PayloadError>;
}

/// A payload with a total order and a representable range, usable as
/// the bounds of a numeric parameter.
pub trait NumericPayload: ParameterPayload + Copy + PartialOrd {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Whether the value is unordered (NaN). Always `false` for integers.
    fn is_nan(self) -> bool {
        false
    }
}

fn mismatch(expected: ValueKind, value: &ParameterValue) -> PayloadError {
    PayloadError::Kind(KindMismatch {
        expected,
        found: value.kind(),
    })
}

impl ParameterPayload for f64 {
    const KIND: ValueKind = ValueKind::Double;

    fn into_value(self) -> ParameterValue {
        ParameterValue::Double(self)
    }

    fn from_value(value: ParameterValue) -> Result<Self, PayloadError> {
        value.as_f64().ok_or_else(|| mismatch(Self::KIND, &value))
    }
}

impl ParameterPayload for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> ParameterValue {
        ParameterValue::Int(self)
    }

    fn from_value(value: ParameterValue) -> Result<Self, PayloadError> {
        value.as_i64().ok_or_else(|| mismatch(Self::KIND, &value))
    }
}

impl ParameterPayload for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn into_value(self) -> ParameterValue {
        ParameterValue::Bool(self)
    }

    fn from_value(value: ParameterValue) -> Result<Self, PayloadError> {
        value.as_bool().ok_or_else(|| mismatch(Self::KIND, &value))
    }
}

impl ParameterPayload for String {
    const KIND: ValueKind = ValueKind::String;

    fn into_value(self) -> ParameterValue {
        ParameterValue::String(self)
    }

    fn from_value(value: ParameterValue) -> Result<Self, PayloadError> {
        match value {
            ParameterValue::String(s) => Ok(s),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl NumericPayload for f64 {
    const MIN: Self = f64::MIN;
    const MAX: Self = f64::MAX;

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

impl NumericPayload for i64 {
    const MIN: Self = i64::MIN;
    const MAX: Self = i64::MAX;
}

impl TryFrom<ParameterValue> for f64 {
    type Error = PayloadError;

    fn try_from(value: ParameterValue) -> Result<Self, Self::Error> {
        <f64 as ParameterPayload>::from_value(value)
    }
}

impl TryFrom<ParameterValue> for i64 {
    type Error = PayloadError;

    fn try_from(value: ParameterValue) -> Result<Self, Self::Error> {
        <i64 as ParameterPayload>::from_value(value)
    }
}

impl TryFrom<ParameterValue> for bool {
    type Error = PayloadError;

    fn try_from(value: ParameterValue) -> Result<Self, Self::Error> {
        <bool as ParameterPayload>::from_value(value)
    }
}

impl TryFrom<ParameterValue> for String {
    type Error = PayloadError;

    fn try_from(value: ParameterValue) -> Result<Self, Self::Error> {
        <String as ParameterPayload>::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(ParameterValue::from(1.0).kind(), ValueKind::Double);
        assert_eq!(ParameterValue::from(1i64).kind(), ValueKind::Int);
        assert_eq!(ParameterValue::from(1i32).kind(), ValueKind::Int);
        assert_eq!(ParameterValue::from(true).kind(), ValueKind::Bool);
        assert_eq!(ParameterValue::from("a").kind(), ValueKind::String);
    }

    #[test]
    fn wrong_projection_is_none_not_default() {
        let v = ParameterValue::String("a".into());
        assert_eq!(v.as_f64(), None);
        assert_eq!(v.as_i64(), None);
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_str(), Some("a"));
    }

    #[test]
    fn try_from_reports_both_kinds() {
        let err = f64::try_from(ParameterValue::Bool(true)).unwrap_err();
        assert_eq!(
            err,
            PayloadError::Kind(KindMismatch {
                expected: ValueKind::Double,
                found: ValueKind::Bool,
            })
        );
        assert_eq!(format!("{err}"), "expected double value, got bool");
    }

    #[test]
    fn mismatch_names_the_parameter() {
        let err = KindMismatch {
            expected: ValueKind::Int,
            found: ValueKind::String,
        }
        .for_parameter("seed");
        assert_eq!(
            err,
            ParameterError::TypeMismatch {
                name: "seed".into(),
                expected: ValueKind::Int,
                found: ValueKind::String,
            }
        );
    }

    #[test]
    fn display_quotes_strings_only() {
        assert_eq!(ParameterValue::Double(2.5).to_string(), "2.5");
        assert_eq!(ParameterValue::Int(-3).to_string(), "-3");
        assert_eq!(ParameterValue::Bool(false).to_string(), "false");
        assert_eq!(ParameterValue::from("b").to_string(), "\"b\"");
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Percent(u8);

    impl ParameterPayload for Percent {
        const KIND: ValueKind = ValueKind::Int;

        fn into_value(self) -> ParameterValue {
            ParameterValue::Int(i64::from(self.0))
        }

        fn from_value(value: ParameterValue) -> Result<Self, PayloadError> {
            let raw = value.as_i64().ok_or_else(|| mismatch(Self::KIND, &value))?;
            match u8::try_from(raw) {
                Ok(p) if p <= 100 => Ok(Percent(p)),
                _ => Err(PayloadError::invalid(&value)),
            }
        }
    }

    #[test]
    fn right_kind_bad_content_is_invalid_not_mismatch() {
        let err = Percent::from_value(ParameterValue::Int(250)).unwrap_err();
        assert_eq!(
            err,
            PayloadError::Invalid {
                value: "250".into()
            }
        );
        assert_eq!(
            err.for_parameter("load"),
            ParameterError::InvalidValue {
                name: "load".into(),
                value: "250".into(),
            }
        );
    }

    #[test]
    fn wrong_kind_still_reports_mismatch() {
        let err = Percent::from_value(ParameterValue::Bool(true)).unwrap_err();
        assert!(matches!(
            err.for_parameter("load"),
            ParameterError::TypeMismatch {
                expected: ValueKind::Int,
                found: ValueKind::Bool,
                ..
            }
        ));
        assert_eq!(Percent::from_value(ParameterValue::Int(40)), Ok(Percent(40)));
    }

    #[test]
    fn nan_detection_is_float_only() {
        assert!(NumericPayload::is_nan(f64::NAN));
        assert!(!NumericPayload::is_nan(1.0f64));
        assert!(!NumericPayload::is_nan(0i64));
    }

    proptest! {
        #[test]
        fn int_payload_survives_value_form(v in any::<i64>()) {
            prop_assert_eq!(i64::from_value(v.into_value()), Ok(v));
        }

        #[test]
        fn string_payload_rejects_numbers(v in any::<f64>()) {
            let err = String::from_value(ParameterValue::Double(v)).unwrap_err();
            prop_assert_eq!(
                err,
                PayloadError::Kind(KindMismatch {
                    expected: ValueKind::String,
                    found: ValueKind::Double,
                })
            );
        }
    }
}
