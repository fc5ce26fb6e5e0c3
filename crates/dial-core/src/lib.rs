//! Core types and traits for the Dial parameter framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Dial workspace:
//! identifiers, the tagged [`ParameterValue`], the [`ParameterPayload`]
//! conversion capability, error types, and the [`Tunable`] and
//! [`Supplier`] traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod id;
pub mod traits;
pub mod value;

pub use bounds::BoundsPolicy;
pub use error::ParameterError;
pub use id::{ParameterId, ParameterVersion, SubscriptionId};
pub use traits::{Supplier, Tunable};
pub use value::{
    KindMismatch, NumericPayload, ParameterPayload, ParameterValue, PayloadError, ValueKind,
};
