//! Policy for values that fall outside a parameter's constraints.

/// How a parameter treats a value outside its `[min, max]` range or
/// enumerated domain.
///
/// Kind mismatches are always rejected regardless of policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundsPolicy {
    /// Out-of-range and out-of-domain values are errors.
    #[default]
    Reject,
    /// Numeric values are clamped to the nearest bound. NaN and
    /// out-of-domain values are still rejected.
    Clamp,
    /// Any value of the right kind is stored unchecked.
    Accept,
}

impl BoundsPolicy {
    /// Whether values must be validated against the constraints at all.
    pub fn checks(self) -> bool {
        !matches!(self, Self::Accept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reject() {
        assert_eq!(BoundsPolicy::default(), BoundsPolicy::Reject);
    }

    #[test]
    fn only_accept_skips_checks() {
        assert!(BoundsPolicy::Reject.checks());
        assert!(BoundsPolicy::Clamp.checks());
        assert!(!BoundsPolicy::Accept.checks());
    }
}
