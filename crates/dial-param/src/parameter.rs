//! The base typed parameter, [`Parameter<T>`].

use std::any::{type_name, Any};

use dial_core::{
    BoundsPolicy, ParameterError, ParameterPayload, ParameterValue, Tunable, ValueKind,
};
use smallvec::SmallVec;

/// Enumerated domains are short in practice; up to four entries stay inline.
pub(crate) type Domain<T> = SmallVec<[T; 4]>;

/// A named parameter with a payload of type `T` and an optional
/// enumerated domain.
///
/// `current` starts equal to `default`. With a domain, assignments
/// outside it are rejected unless the caller's [`BoundsPolicy`] is
/// `Accept`.
///
/// # Examples
///
/// ```
/// use dial_core::BoundsPolicy;
/// use dial_param::Parameter;
///
/// let mut verbose = Parameter::new("verbose", false);
/// assert_eq!(*verbose.current(), false);
/// verbose.set(true, BoundsPolicy::Reject).unwrap();
/// assert_eq!(*verbose.current(), true);
/// assert_eq!(*verbose.default(), false);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter<T: ParameterPayload> {
    name: String,
    default: T,
    current: T,
    domain: Option<Domain<T>>,
}

impl<T: ParameterPayload> Parameter<T> {
    /// Create an unconstrained parameter.
    pub fn new(name: impl Into<String>, default: T) -> Self {
        Self {
            name: name.into(),
            current: default.clone(),
            default,
            domain: None,
        }
    }

    /// Create a parameter restricted to an enumerated domain.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidDefinition`] if the domain is
    /// empty, contains duplicates, or does not contain `default`.
    pub fn with_domain(
        name: impl Into<String>,
        default: T,
        domain: impl IntoIterator<Item = T>,
    ) -> Result<Self, ParameterError> {
        let name = name.into();
        let domain: Domain<T> = domain.into_iter().collect();
        validate_domain(&name, &default, &domain)?;
        Ok(Self {
            name,
            current: default.clone(),
            default,
            domain: Some(domain),
        })
    }

    /// The parameter's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// The construction-time default.
    pub fn default(&self) -> &T {
        &self.default
    }

    /// The allowed values, if the parameter has a domain.
    pub fn domain(&self) -> Option<&[T]> {
        self.domain.as_deref()
    }

    /// Assign a new current value.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotInDomain`] if the parameter has a
    /// domain, `policy` checks constraints, and `value` is not in it.
    /// The current value is unchanged on error.
    pub fn set(&mut self, value: T, policy: BoundsPolicy) -> Result<(), ParameterError> {
        if policy.checks() {
            self.check_domain(&value)?;
        }
        self.current = value;
        Ok(())
    }

    pub(crate) fn check_domain(&self, value: &T) -> Result<(), ParameterError> {
        match &self.domain {
            Some(domain) if !domain.contains(value) => Err(ParameterError::NotInDomain {
                name: self.name.clone(),
                value: render(value),
            }),
            _ => Ok(()),
        }
    }

    /// Store without any constraint check. Wrappers validate first.
    pub(crate) fn store(&mut self, value: T) {
        self.current = value;
    }

    /// Convert a tagged value into the payload type.
    pub(crate) fn decode(&self, value: ParameterValue) -> Result<T, ParameterError> {
        T::from_value(value).map_err(|e| e.for_parameter(&self.name))
    }

    /// Recover the payload from a type-erased box.
    pub(crate) fn unbox(&self, value: Box<dyn Any>) -> Result<T, ParameterError> {
        value
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| ParameterError::InvalidCast {
                name: self.name.clone(),
                expected: type_name::<T>(),
            })
    }
}

impl<T: ParameterPayload> Tunable for Parameter<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn current_value(&self) -> ParameterValue {
        self.current.clone().into_value()
    }

    fn default_value(&self) -> ParameterValue {
        self.default.clone().into_value()
    }

    fn domain(&self) -> Option<Vec<ParameterValue>> {
        self.domain
            .as_ref()
            .map(|d| d.iter().cloned().map(ParameterPayload::into_value).collect())
    }

    fn assign(
        &mut self,
        value: ParameterValue,
        policy: BoundsPolicy,
    ) -> Result<(), ParameterError> {
        let value = self.decode(value)?;
        self.set(value, policy)
    }

    fn assign_any(
        &mut self,
        value: Box<dyn Any>,
        policy: BoundsPolicy,
    ) -> Result<(), ParameterError> {
        let value = self.unbox(value)?;
        self.set(value, policy)
    }

    fn reset(&mut self) {
        self.current = self.default.clone();
    }
}

/// Render a payload the way its tagged form displays.
pub(crate) fn render<T: ParameterPayload>(value: &T) -> String {
    value.clone().into_value().to_string()
}

fn validate_domain<T: ParameterPayload>(
    name: &str,
    default: &T,
    domain: &[T],
) -> Result<(), ParameterError> {
    let invalid = |reason: String| ParameterError::InvalidDefinition {
        name: name.to_string(),
        reason,
    };
    if domain.is_empty() {
        return Err(invalid("domain is empty".to_string()));
    }
    for (i, v) in domain.iter().enumerate() {
        if domain[..i].contains(v) {
            return Err(invalid(format!("duplicate domain value {}", render(v))));
        }
    }
    if !domain.contains(default) {
        return Err(invalid(format!(
            "default {} is not in the domain",
            render(default)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colours() -> Parameter<String> {
        Parameter::with_domain(
            "colour",
            "red".to_string(),
            ["red", "green", "blue"].map(String::from),
        )
        .unwrap()
    }

    #[test]
    fn new_parameter_current_equals_default() {
        let p = Parameter::new("flag", true);
        assert_eq!(p.current(), p.default());
        assert_eq!(p.current_value(), p.default_value());
        assert_eq!(Tunable::name(&p), "flag");
        assert_eq!(p.kind(), ValueKind::Bool);
        assert!(!p.is_seed());
        assert!(p.bounds().is_none());
        assert!(Tunable::domain(&p).is_none());
    }

    #[test]
    fn domain_is_reported_in_order() {
        let p = colours();
        assert_eq!(
            Tunable::domain(&p),
            Some(vec!["red".into(), "green".into(), "blue".into()])
        );
        assert_eq!(p.domain().map(<[String]>::len), Some(3));
    }

    #[test]
    fn empty_domain_rejected() {
        let err = Parameter::with_domain("e", 1i64, Vec::new()).unwrap_err();
        assert!(matches!(err, ParameterError::InvalidDefinition { .. }));
    }

    #[test]
    fn duplicate_domain_rejected() {
        let err = Parameter::with_domain("d", 1i64, [1, 2, 1]).unwrap_err();
        match err {
            ParameterError::InvalidDefinition { reason, .. } => {
                assert!(reason.contains("duplicate"), "{reason}");
            }
            other => panic!("expected InvalidDefinition, got {other:?}"),
        }
    }

    #[test]
    fn default_outside_domain_rejected() {
        let err = Parameter::with_domain("d", 5i64, [1, 2, 3]).unwrap_err();
        assert!(matches!(err, ParameterError::InvalidDefinition { .. }));
    }

    #[test]
    fn set_outside_domain_rejected_and_unchanged() {
        let mut p = colours();
        let err = p.set("mauve".into(), BoundsPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            ParameterError::NotInDomain {
                name: "colour".into(),
                value: "\"mauve\"".into(),
            }
        );
        assert_eq!(p.current(), "red");
    }

    #[test]
    fn clamp_cannot_rescue_domain_violation() {
        let mut p = colours();
        assert!(p.set("mauve".into(), BoundsPolicy::Clamp).is_err());
    }

    #[test]
    fn accept_stores_outside_domain() {
        let mut p = colours();
        p.set("mauve".into(), BoundsPolicy::Accept).unwrap();
        assert_eq!(p.current(), "mauve");
    }

    #[test]
    fn assign_wrong_kind_is_type_mismatch() {
        let mut p = Parameter::new("flag", false);
        let err = p
            .assign(ParameterValue::Int(1), BoundsPolicy::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            ParameterError::TypeMismatch {
                name: "flag".into(),
                expected: ValueKind::Bool,
                found: ValueKind::Int,
            }
        );
        assert!(!*p.current());
    }

    #[test]
    fn assign_any_with_matching_type() {
        let mut p = Parameter::new("flag", false);
        p.assign_any(Box::new(true), BoundsPolicy::Reject).unwrap();
        assert!(*p.current());
    }

    #[test]
    fn assign_any_wrong_type_is_invalid_cast_and_unchanged() {
        let mut p = Parameter::new("flag", false);
        let err = p
            .assign_any(Box::new(1.0f64), BoundsPolicy::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            ParameterError::InvalidCast {
                name: "flag".into(),
                expected: "bool",
            }
        );
        assert!(!*p.current());
    }

    #[test]
    fn reset_restores_default() {
        let mut p = colours();
        p.set("blue".into(), BoundsPolicy::Reject).unwrap();
        p.reset();
        assert_eq!(p.current(), "red");
    }
}
