//! Error types for individual parameters.
//!
//! Set-level failures (unknown parameters, sealing, missing supplier)
//! live in `dial-set`; this module covers what a single parameter can
//! reject on construction or assignment.

use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised by a parameter when it is defined or assigned.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParameterError {
    /// A value of the wrong kind was assigned.
    #[error("parameter '{name}': expected {expected} value, got {found}")]
    TypeMismatch {
        /// Name of the parameter.
        name: String,
        /// The parameter's declared kind.
        expected: ValueKind,
        /// The kind of the rejected value.
        found: ValueKind,
    },
    /// A type-erased value could not be downcast to the payload type.
    #[error("parameter '{name}': invalid cast, expected a value of type {expected}")]
    InvalidCast {
        /// Name of the parameter.
        name: String,
        /// Rust type name of the parameter's payload.
        expected: &'static str,
    },
    /// A numeric value lies outside `[min, max]` (or is NaN).
    #[error("parameter '{name}': value {value} outside [{min}, {max}]")]
    OutOfBounds {
        /// Name of the parameter.
        name: String,
        /// The rejected value, rendered.
        value: String,
        /// Lower bound, rendered.
        min: String,
        /// Upper bound, rendered.
        max: String,
    },
    /// A value has the right kind but does not describe any instance of
    /// the parameter's payload type.
    #[error("parameter '{name}': value {value} is not a valid payload")]
    InvalidValue {
        /// Name of the parameter.
        name: String,
        /// The rejected value, rendered.
        value: String,
    },
    /// A value is not a member of the parameter's enumerated domain.
    #[error("parameter '{name}': value {value} is not one of the allowed values")]
    NotInDomain {
        /// Name of the parameter.
        name: String,
        /// The rejected value, rendered.
        value: String,
    },
    /// The parameter's definition is inconsistent (bad bounds, empty
    /// domain, default outside its own constraints).
    #[error("parameter '{name}': invalid definition: {reason}")]
    InvalidDefinition {
        /// Name of the parameter.
        name: String,
        /// Description of the inconsistency.
        reason: String,
    },
}

impl ParameterError {
    /// Name of the parameter the error refers to.
    pub fn parameter_name(&self) -> &str {
        match self {
            Self::TypeMismatch { name, .. }
            | Self::InvalidCast { name, .. }
            | Self::InvalidValue { name, .. }
            | Self::OutOfBounds { name, .. }
            | Self::NotInDomain { name, .. }
            | Self::InvalidDefinition { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_parameter_name() {
        let err = ParameterError::OutOfBounds {
            name: "x".into(),
            value: "11".into(),
            min: "0".into(),
            max: "10".into(),
        };
        assert_eq!(format!("{err}"), "parameter 'x': value 11 outside [0, 10]");
        assert_eq!(err.parameter_name(), "x");
    }

    #[test]
    fn invalid_cast_names_expected_type() {
        let err = ParameterError::InvalidCast {
            name: "rate".into(),
            expected: "f64",
        };
        let msg = format!("{err}");
        assert!(msg.contains("invalid cast"));
        assert!(msg.contains("f64"));
    }
}
