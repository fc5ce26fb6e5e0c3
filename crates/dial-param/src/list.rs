//! Enumerated parameters, [`ListParameter<T>`].

use std::any::Any;

use dial_core::{
    BoundsPolicy, ParameterError, ParameterPayload, ParameterValue, Tunable, ValueKind,
};

use crate::parameter::Parameter;

/// A parameter whose value must be one of an enumerated list.
///
/// The list has no ordering constraint beyond declaration order and
/// carries no bounds. String enumerations (`ListParameter<String>`) are
/// the common case.
///
/// # Examples
///
/// ```
/// use dial_core::BoundsPolicy;
/// use dial_param::ListParameter;
///
/// let mut mode = ListParameter::new(
///     "mode",
///     "a".to_string(),
///     ["a", "b", "c"].map(String::from),
/// )
/// .unwrap();
/// assert_eq!(mode.current(), "a");
/// assert!(mode.set("z".to_string(), BoundsPolicy::Reject).is_err());
/// mode.set("c".to_string(), BoundsPolicy::Reject).unwrap();
/// assert_eq!(mode.position(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ListParameter<T: ParameterPayload> {
    inner: Parameter<T>,
}

impl<T: ParameterPayload> ListParameter<T> {
    /// Create a list parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidDefinition`] if `values` is empty,
    /// contains duplicates, or does not contain `default`.
    pub fn new(
        name: impl Into<String>,
        default: T,
        values: impl IntoIterator<Item = T>,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            inner: Parameter::with_domain(name, default, values)?,
        })
    }

    /// The parameter's name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// The current value.
    pub fn current(&self) -> &T {
        self.inner.current()
    }

    /// The construction-time default.
    pub fn default(&self) -> &T {
        self.inner.default()
    }

    /// The allowed values in declaration order.
    pub fn values(&self) -> &[T] {
        self.inner.domain().unwrap_or(&[])
    }

    /// Index of the current value in [`values()`](Self::values).
    ///
    /// `None` only when an unchecked (`Accept`) assignment stored a value
    /// outside the list.
    pub fn position(&self) -> Option<usize> {
        self.values().iter().position(|v| v == self.current())
    }

    /// Assign a new current value.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotInDomain`] if `value` is not in the
    /// list and `policy` is `Reject` or `Clamp`.
    pub fn set(&mut self, value: T, policy: BoundsPolicy) -> Result<(), ParameterError> {
        self.inner.set(value, policy)
    }
}

impl<T: ParameterPayload> Tunable for ListParameter<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn current_value(&self) -> ParameterValue {
        self.inner.current_value()
    }

    fn default_value(&self) -> ParameterValue {
        self.inner.default_value()
    }

    fn domain(&self) -> Option<Vec<ParameterValue>> {
        Tunable::domain(&self.inner)
    }

    fn assign(
        &mut self,
        value: ParameterValue,
        policy: BoundsPolicy,
    ) -> Result<(), ParameterError> {
        self.inner.assign(value, policy)
    }

    fn assign_any(
        &mut self,
        value: Box<dyn Any>,
        policy: BoundsPolicy,
    ) -> Result<(), ParameterError> {
        self.inner.assign_any(value, policy)
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}
