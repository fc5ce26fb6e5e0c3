//! Test utilities and mock types for Dial development.
//!
//! Provides a mock [`Supplier`] ([`ScriptedSupplier`]), a subscriber that
//! records what it saw ([`RecordingObserver`]), and the standard fixture
//! parameters in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use dial_core::{ParameterValue, ParameterVersion, Supplier, Tunable};

/// Mock implementation of [`Supplier`].
///
/// Answers from a per-name script; unscripted parameters get their own
/// default value back. Clones share state, so a test can keep one clone,
/// hand the other to a set, and still rescript and inspect calls.
#[derive(Clone, Default)]
pub struct ScriptedSupplier {
    script: Rc<RefCell<HashMap<String, ParameterValue>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ScriptedSupplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the value returned for `name`, replacing any previous one.
    pub fn script(&self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        self.script.borrow_mut().insert(name.into(), value.into());
    }

    /// Builder form of [`script`](Self::script).
    pub fn with(self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.script(name, value);
        self
    }

    /// Total number of `value_of` calls.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Number of `value_of` calls for `name`.
    pub fn calls_for(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|n| *n == name).count()
    }

    /// Parameter names in the order they were asked for.
    pub fn call_log(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Supplier for ScriptedSupplier {
    fn value_of(&self, parameter: &dyn Tunable) -> ParameterValue {
        self.calls.borrow_mut().push(parameter.name().to_string());
        self.script
            .borrow()
            .get(parameter.name())
            .cloned()
            .unwrap_or_else(|| parameter.default_value())
    }
}

/// Subscriber that records every version it is notified with.
///
/// Register with `set.subscribe(observer.callback())`; the observer and
/// every callback it hands out share one log.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    seen: Rc<RefCell<Vec<ParameterVersion>>>,
    panic_on: Rc<Cell<Option<ParameterVersion>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends to this observer's log.
    pub fn callback(&self) -> impl FnMut(ParameterVersion) + 'static {
        let seen = Rc::clone(&self.seen);
        let panic_on = Rc::clone(&self.panic_on);
        move |version| {
            seen.borrow_mut().push(version);
            if panic_on.get() == Some(version) {
                panic!("observer asked to panic at version {version}");
            }
        }
    }

    /// Make callbacks panic after recording `version`.
    pub fn panic_at(&self, version: ParameterVersion) {
        self.panic_on.set(Some(version));
    }

    /// Number of notifications received.
    pub fn count(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn versions(&self) -> Vec<ParameterVersion> {
        self.seen.borrow().clone()
    }

    pub fn last(&self) -> Option<ParameterVersion> {
        self.seen.borrow().last().copied()
    }
}
