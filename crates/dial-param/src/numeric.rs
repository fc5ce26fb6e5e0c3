//! Bounded numeric parameters, [`NumericParameter<T>`].

use std::any::Any;

use dial_core::{
    BoundsPolicy, NumericPayload, ParameterError, ParameterPayload, ParameterValue, Tunable,
    ValueKind,
};

use crate::parameter::{render, Parameter};

/// A numeric parameter constrained to the inclusive range `[min, max]`.
///
/// # Examples
///
/// ```
/// use dial_core::BoundsPolicy;
/// use dial_param::NumericParameter;
///
/// let mut x = NumericParameter::new("x", 1.0, 0.0, 10.0).unwrap();
/// x.set(5.0, BoundsPolicy::Reject).unwrap();
/// assert_eq!(x.current(), 5.0);
///
/// // Out of range: rejected, clamped, or stored depending on policy.
/// assert!(x.set(12.0, BoundsPolicy::Reject).is_err());
/// x.set(12.0, BoundsPolicy::Clamp).unwrap();
/// assert_eq!(x.current(), 10.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NumericParameter<T: NumericPayload> {
    inner: Parameter<T>,
    min: T,
    max: T,
}

impl<T: NumericPayload> NumericParameter<T> {
    /// Create a parameter with explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidDefinition`] if either bound is
    /// NaN, `min > max`, or `default` lies outside `[min, max]`.
    pub fn new(
        name: impl Into<String>,
        default: T,
        min: T,
        max: T,
    ) -> Result<Self, ParameterError> {
        let name = name.into();
        let invalid = |reason: String| ParameterError::InvalidDefinition {
            name: name.clone(),
            reason,
        };
        if min.is_nan() || max.is_nan() {
            return Err(invalid("bounds must not be NaN".to_string()));
        }
        if min > max {
            return Err(invalid(format!(
                "min {} exceeds max {}",
                render(&min),
                render(&max)
            )));
        }
        if default.is_nan() || default < min || default > max {
            return Err(invalid(format!(
                "default {} outside [{}, {}]",
                render(&default),
                render(&min),
                render(&max)
            )));
        }
        Ok(Self {
            inner: Parameter::new(name, default),
            min,
            max,
        })
    }

    /// Create a parameter bounded only by the payload's representable range.
    pub fn full_range(name: impl Into<String>, default: T) -> Self {
        Self {
            inner: Parameter::new(name, default),
            min: T::MIN,
            max: T::MAX,
        }
    }

    /// The parameter's name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// The current value.
    pub fn current(&self) -> T {
        *self.inner.current()
    }

    /// The construction-time default.
    pub fn default(&self) -> T {
        *self.inner.default()
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> T {
        self.max
    }

    /// Whether `value` lies within `[min, max]`. NaN never does.
    pub fn contains(&self, value: T) -> bool {
        !value.is_nan() && value >= self.min && value <= self.max
    }

    /// Assign a new current value under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::OutOfBounds`] for NaN (unless `Accept`)
    /// and for out-of-range values under `Reject`. The current value is
    /// unchanged on error.
    pub fn set(&mut self, value: T, policy: BoundsPolicy) -> Result<(), ParameterError> {
        let value = match policy {
            BoundsPolicy::Accept => value,
            _ if value.is_nan() => return Err(self.out_of_bounds(value)),
            BoundsPolicy::Clamp => self.clamp(value),
            BoundsPolicy::Reject if self.contains(value) => value,
            BoundsPolicy::Reject => return Err(self.out_of_bounds(value)),
        };
        self.inner.store(value);
        Ok(())
    }

    /// Store without a range check.
    pub(crate) fn store(&mut self, value: T) {
        self.inner.store(value);
    }

    fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    fn out_of_bounds(&self, value: T) -> ParameterError {
        ParameterError::OutOfBounds {
            name: self.inner.name().to_string(),
            value: render(&value),
            min: render(&self.min),
            max: render(&self.max),
        }
    }
}

impl<T: NumericPayload> Tunable for NumericParameter<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn current_value(&self) -> ParameterValue {
        self.current().into_value()
    }

    fn default_value(&self) -> ParameterValue {
        self.default().into_value()
    }

    fn bounds(&self) -> Option<(ParameterValue, ParameterValue)> {
        Some((self.min.into_value(), self.max.into_value()))
    }

    fn assign(
        &mut self,
        value: ParameterValue,
        policy: BoundsPolicy,
    ) -> Result<(), ParameterError> {
        let value = self.inner.decode(value)?;
        self.set(value, policy)
    }

    fn assign_any(
        &mut self,
        value: Box<dyn Any>,
        policy: BoundsPolicy,
    ) -> Result<(), ParameterError> {
        let value = self.inner.unbox(value)?;
        self.set(value, policy)
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}
