//! Core capability traits: [`Tunable`] parameters and their [`Supplier`].

use std::any::Any;
use std::fmt;

use crate::bounds::BoundsPolicy;
use crate::error::ParameterError;
use crate::value::{ParameterValue, ValueKind};

/// A named, typed parameter whose current value can be read and assigned.
///
/// Implemented by every concrete parameter type so that parameters of
/// different payload types can live in one collection. Assignment goes
/// through the tagged [`ParameterValue`] (supplier and direct updates)
/// or through a type-erased box (`assign_any`); both report a kind
/// mismatch as an error and leave the current value untouched.
///
/// # Contract
///
/// - `name()` and `kind()` never change after construction.
/// - After construction `current_value() == default_value()`.
/// - A failed `assign`/`assign_any` leaves the parameter unchanged.
///
/// # Object safety
///
/// This trait is object-safe; parameter sets store parameters as
/// `Box<dyn Tunable>`. Downcast to the concrete type through `dyn Any`.
pub trait Tunable: Any + fmt::Debug {
    /// The parameter's name, unique within its set.
    fn name(&self) -> &str;

    /// The kind every value of this parameter has.
    fn kind(&self) -> ValueKind;

    /// Whether this parameter is intended to seed a random source.
    ///
    /// Default: `false`.
    fn is_seed(&self) -> bool {
        false
    }

    /// The current value.
    fn current_value(&self) -> ParameterValue;

    /// The value the parameter was constructed with.
    fn default_value(&self) -> ParameterValue;

    /// Inclusive `(min, max)` bounds, for numeric parameters.
    ///
    /// Default: `None`.
    fn bounds(&self) -> Option<(ParameterValue, ParameterValue)> {
        None
    }

    /// The enumerated set of allowed values, if any, in declaration order.
    ///
    /// Default: `None`.
    fn domain(&self) -> Option<Vec<ParameterValue>> {
        None
    }

    /// Assign a new current value.
    ///
    /// Fails with [`ParameterError::TypeMismatch`] when the value's kind
    /// differs from [`kind()`](Tunable::kind), and with `OutOfBounds` or
    /// `NotInDomain` when `policy` checks constraints and the value
    /// violates them.
    fn assign(
        &mut self,
        value: ParameterValue,
        policy: BoundsPolicy,
    ) -> Result<(), ParameterError>;

    /// Assign a type-erased value.
    ///
    /// The box must hold the parameter's payload type exactly; anything
    /// else fails with [`ParameterError::InvalidCast`].
    fn assign_any(
        &mut self,
        value: Box<dyn Any>,
        policy: BoundsPolicy,
    ) -> Result<(), ParameterError>;

    /// Restore the default value.
    fn reset(&mut self);
}

/// External authority for parameter values.
///
/// A supplier answers "what is this parameter's value now?" and decides
/// when a parameter needs refreshing. It never receives values from a
/// parameter set.
///
/// # Examples
///
/// ```
/// use dial_core::{ParameterValue, Supplier, Tunable, ValueKind};
///
/// /// Answers every numeric parameter with zero.
/// struct Zeroes;
///
/// impl Supplier for Zeroes {
///     fn value_of(&self, parameter: &dyn Tunable) -> ParameterValue {
///         match parameter.kind() {
///             ValueKind::Int => ParameterValue::Int(0),
///             _ => ParameterValue::Double(0.0),
///         }
///     }
/// }
/// ```
pub trait Supplier {
    /// The authoritative value for `parameter`.
    ///
    /// Must return a value whose kind equals `parameter.kind()`; a value of
    /// another kind is rejected by the receiving set.
    fn value_of(&self, parameter: &dyn Tunable) -> ParameterValue;
}

impl<S: Supplier + ?Sized> Supplier for Box<S> {
    fn value_of(&self, parameter: &dyn Tunable) -> ParameterValue {
        (**self).value_of(parameter)
    }
}

impl<S: Supplier + ?Sized> Supplier for std::rc::Rc<S> {
    fn value_of(&self, parameter: &dyn Tunable) -> ParameterValue {
        (**self).value_of(parameter)
    }
}

impl<S: Supplier + ?Sized> Supplier for std::sync::Arc<S> {
    fn value_of(&self, parameter: &dyn Tunable) -> ParameterValue {
        (**self).value_of(parameter)
    }
}
