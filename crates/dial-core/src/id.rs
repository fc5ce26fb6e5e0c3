//! Strongly-typed identifiers for parameters, versions, and subscriptions.

use std::fmt;

/// Identifies a parameter within a parameter set.
///
/// Parameters are registered during the set's setup phase and assigned
/// sequential IDs. `ParameterId(n)` corresponds to the n-th parameter
/// added to the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterId(pub u32);

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParameterId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl ParameterId {
    /// The position of this parameter in its set's insertion order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Tracks the version of a parameter set's values.
///
/// Incremented once per successful change (direct update, supplier
/// refresh, or reset), enabling stale-value detection by subscribers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterVersion(pub u64);

impl ParameterVersion {
    /// The version following this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for ParameterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ParameterVersion {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Handle for a registered change subscriber.
///
/// Returned by `ParameterSet::subscribe` and accepted by
/// `ParameterSet::unsubscribe`. IDs are never reused within a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_id_index_matches_inner() {
        assert_eq!(ParameterId(7).index(), 7);
        assert_eq!(ParameterId::from(3), ParameterId(3));
    }

    #[test]
    fn version_next_increments() {
        let v = ParameterVersion::default();
        assert_eq!(v, ParameterVersion(0));
        assert_eq!(v.next(), ParameterVersion(1));
        assert_eq!(ParameterVersion(u64::MAX).next(), ParameterVersion(0));
    }

    #[test]
    fn ids_display_as_numbers() {
        assert_eq!(ParameterId(4).to_string(), "4");
        assert_eq!(ParameterVersion(12).to_string(), "12");
        assert_eq!(SubscriptionId(9).to_string(), "9");
    }
}
