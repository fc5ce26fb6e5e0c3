//! Parameter set configuration, validation, and error types.
//!
//! [`SetConfig`] is the construction input for a
//! [`ParameterSet`](crate::ParameterSet). [`validate()`](SetConfig::validate)
//! checks its invariants before the set is built.

use dial_core::BoundsPolicy;
use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SetConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The label is empty or whitespace only.
    #[error("set label must not be empty")]
    EmptyLabel,
    /// A bounded signal queue was configured with zero capacity.
    #[error("signal_capacity must be at least 1 when bounded")]
    ZeroSignalCapacity,
}

// ── SetConfig ──────────────────────────────────────────────────────

/// Configuration for a [`ParameterSet`](crate::ParameterSet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetConfig {
    /// Human-readable name used in log events and error messages.
    /// Default: `"parameters"`.
    pub label: String,
    /// How out-of-range and out-of-domain values are handled.
    /// Default: [`BoundsPolicy::Reject`].
    pub bounds_policy: BoundsPolicy,
    /// Seal the set (no further additions) on its first successful
    /// change. Default: `false`.
    pub seal_on_first_update: bool,
    /// Capacity of the refresh-signal queue. `None` = unbounded.
    /// Default: `None`.
    pub signal_capacity: Option<usize>,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            label: "parameters".to_string(),
            bounds_policy: BoundsPolicy::Reject,
            seal_on_first_update: false,
            signal_capacity: None,
        }
    }
}

impl SetConfig {
    /// Default configuration with the given label.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        if self.signal_capacity == Some(0) {
            return Err(ConfigError::ZeroSignalCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SetConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.bounds_policy, BoundsPolicy::Reject);
        assert!(!cfg.seal_on_first_update);
        assert_eq!(cfg.signal_capacity, None);
    }

    #[test]
    fn labelled_keeps_other_defaults() {
        let cfg = SetConfig::labelled("search");
        assert_eq!(cfg.label, "search");
        assert_eq!(cfg.bounds_policy, BoundsPolicy::Reject);
    }

    #[test]
    fn blank_label_fails() {
        let cfg = SetConfig::labelled("  ");
        match cfg.validate() {
            Err(ConfigError::EmptyLabel) => {}
            other => panic!("expected EmptyLabel, got {other:?}"),
        }
    }

    #[test]
    fn zero_signal_capacity_fails() {
        let cfg = SetConfig {
            signal_capacity: Some(0),
            ..SetConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::ZeroSignalCapacity) => {}
            other => panic!("expected ZeroSignalCapacity, got {other:?}"),
        }
    }

    #[test]
    fn bounded_signal_capacity_succeeds() {
        let cfg = SetConfig {
            signal_capacity: Some(16),
            ..SetConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ConfigError::EmptyLabel.to_string(),
            "set label must not be empty"
        );
    }
}
