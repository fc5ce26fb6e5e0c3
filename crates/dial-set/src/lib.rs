//! Observable parameter sets for the Dial framework.
//!
//! A [`ParameterSet`] owns an insertion-ordered collection of parameters
//! and mediates every change to them. Changes arrive on two paths:
//!
//! - **Direct**: the owner calls [`ParameterSet::update`] (or one of its
//!   variants) with a new value.
//! - **Supplier-driven**: a set built with [`ParameterSet::with_supplier`]
//!   answers a refresh request by asking its [`Supplier`](dial_core::Supplier)
//!   for the parameter's value and applying it.
//!
//! Either way, each successful change bumps the set's
//! [`ParameterVersion`](dial_core::ParameterVersion) and synchronously
//! notifies every subscriber exactly once, in registration order, on the
//! caller's thread.
//!
//! Cross-thread refresh requests go through a [`RefreshSignal`], a
//! cloneable `Send` handle that queues parameter names until the owning
//! thread calls [`ParameterSet::drain_signals`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
mod observer;
pub mod set;
pub mod signal;

pub use config::{ConfigError, SetConfig};
pub use error::SetError;
pub use set::ParameterSet;
pub use signal::RefreshSignal;
