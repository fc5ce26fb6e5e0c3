//! Error types for parameter set operations.

use dial_core::{ParameterError, ParameterId};
use thiserror::Error;

/// Errors from [`ParameterSet`](crate::ParameterSet) operations.
///
/// A failed operation never changes a parameter and never notifies
/// subscribers.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SetError {
    /// The parameter rejected the value.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    /// No parameter has this ID.
    #[error("no parameter with id {id}")]
    UnknownParameter {
        /// The unknown ID.
        id: ParameterId,
    },
    /// No parameter has this name.
    #[error("no parameter named '{name}'")]
    UnknownName {
        /// The unknown name.
        name: String,
    },
    /// A parameter with this name is already registered.
    #[error("parameter '{name}' already exists")]
    DuplicateName {
        /// The conflicting name.
        name: String,
    },
    /// The set is sealed; parameters can no longer be added.
    #[error("set '{label}' is sealed")]
    Sealed {
        /// Label of the sealed set.
        label: String,
    },
    /// A refresh was requested on a set without a supplier.
    #[error("set '{label}' has no supplier")]
    NoSupplier {
        /// Label of the set.
        label: String,
    },
    /// The set's parameter count no longer fits a [`ParameterId`].
    #[error("parameter capacity exceeded")]
    CapacityExceeded,
    /// The owning set was dropped; the refresh request went nowhere.
    #[error("refresh signal disconnected")]
    SignalDisconnected,
    /// The bounded refresh queue is full.
    #[error("refresh signal queue full")]
    SignalFull,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_core::ValueKind;
    use std::error::Error;

    #[test]
    fn parameter_errors_display_transparently() {
        let inner = ParameterError::TypeMismatch {
            name: "x".into(),
            expected: ValueKind::Double,
            found: ValueKind::Bool,
        };
        let err = SetError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, SetError::Parameter(inner));
    }

    #[test]
    fn set_errors_have_no_source() {
        let err = SetError::NoSupplier {
            label: "knobs".into(),
        };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "set 'knobs' has no supplier");
    }

    #[test]
    fn unknown_parameter_names_the_id() {
        let err = SetError::UnknownParameter { id: ParameterId(3) };
        assert_eq!(err.to_string(), "no parameter with id 3");
    }
}
