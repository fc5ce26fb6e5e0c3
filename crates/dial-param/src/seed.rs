//! Seed parameters, [`SeedParameter`].

use std::any::Any;

use dial_core::{BoundsPolicy, ParameterError, ParameterValue, Tunable, ValueKind};
use dial_rng::SeededRng;

use crate::numeric::NumericParameter;

/// An integer parameter used to seed a deterministic random source.
///
/// Bounds are the full `i64` range, so any integer is a valid seed and
/// the bounds policy never changes a stored value. [`rng()`](Self::rng)
/// materialises a [`SeededRng`] from the current value.
///
/// # Examples
///
/// ```
/// use dial_core::Tunable;
/// use dial_param::SeedParameter;
///
/// let seed = SeedParameter::new("seed", 42);
/// assert!(seed.is_seed());
///
/// let mut a = seed.rng();
/// let mut b = seed.rng();
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SeedParameter {
    inner: NumericParameter<i64>,
}

impl SeedParameter {
    /// Create a seed parameter with the given default seed.
    pub fn new(name: impl Into<String>, default: i64) -> Self {
        Self {
            inner: NumericParameter::full_range(name, default),
        }
    }

    /// The parameter's name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// The current seed.
    pub fn current(&self) -> i64 {
        self.inner.current()
    }

    /// The construction-time default seed.
    pub fn default(&self) -> i64 {
        self.inner.default()
    }

    /// Assign a new seed. Every `i64` is in range.
    pub fn set(&mut self, seed: i64) {
        self.inner.store(seed);
    }

    /// A fresh random source seeded from the current value.
    pub fn rng(&self) -> SeededRng {
        SeededRng::from_seed_value(self.current())
    }
}

impl Tunable for SeedParameter {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Int
    }

    fn is_seed(&self) -> bool {
        true
    }

    fn current_value(&self) -> ParameterValue {
        self.inner.current_value()
    }

    fn default_value(&self) -> ParameterValue {
        self.inner.default_value()
    }

    fn bounds(&self) -> Option<(ParameterValue, ParameterValue)> {
        self.inner.bounds()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_spans_full_integer_range() {
        let p = SeedParameter::new("seed", 7);
        assert_eq!(
            p.bounds(),
            Some((ParameterValue::Int(i64::MIN), ParameterValue::Int(i64::MAX)))
        );
        assert!(p.is_seed());
        assert_eq!(p.kind(), ValueKind::Int);
        assert_eq!(p.current(), 7);
        assert_eq!(p.current_value(), p.default_value());
    }

    #[test]
    fn any_integer_is_accepted_under_reject() {
        let mut p = SeedParameter::new("seed", 0);
        p.assign(ParameterValue::Int(i64::MIN), BoundsPolicy::Reject)
            .unwrap();
        assert_eq!(p.current(), i64::MIN);
        p.set(-5);
        assert_eq!(p.current(), -5);
    }

    #[test]
    fn non_integer_rejected() {
        let mut p = SeedParameter::new("seed", 3);
        let err = p
            .assign(ParameterValue::Double(3.0), BoundsPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, ParameterError::TypeMismatch { .. }));
        let err = p
            .assign_any(Box::new(3i32), BoundsPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, ParameterError::InvalidCast { .. }));
        assert_eq!(p.current(), 3);
    }

    #[test]
    fn rng_follows_current_seed() {
        let mut p = SeedParameter::new("seed", 1);
        let mut before = p.rng();
        p.set(2);
        let mut after = p.rng();
        assert_eq!(after.seed(), 2);
        assert_ne!(before.next_u64(), after.next_u64());
        p.reset();
        assert_eq!(p.rng().next_u64(), SeededRng::new(1).next_u64());
    }
}
