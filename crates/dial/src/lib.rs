//! Dial: typed, observable runtime parameters.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Dial sub-crates. For most users, adding `dial` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dial::prelude::*;
//!
//! // An external authority that decides parameter values.
//! struct Controller;
//! impl Supplier for Controller {
//!     fn value_of(&self, parameter: &dyn Tunable) -> ParameterValue {
//!         match parameter.name() {
//!             "rate" => ParameterValue::Double(0.25),
//!             _ => parameter.default_value(),
//!         }
//!     }
//! }
//!
//! let mut set = ParameterSet::with_supplier(SetConfig::labelled("search"), Controller).unwrap();
//! let rate = set.add(NumericParameter::new("rate", 0.5, 0.0, 1.0).unwrap()).unwrap();
//! let seed = set.add(SeedParameter::new("seed", 7)).unwrap();
//!
//! let mut changes = 0;
//! set.subscribe(move |version| {
//!     changes += 1;
//!     assert_eq!(version.0, changes);
//! });
//!
//! set.refresh(rate).unwrap();
//! assert_eq!(set.read::<f64>(rate).unwrap(), 0.25);
//!
//! let mut rng = set.downcast::<SeedParameter>(seed).unwrap().rng();
//! let order = rng.permute(&mut vec!["a", "b", "c"]);
//! assert_eq!(order.len(), 3);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dial-core` | IDs, values, payload traits, bounds policy, errors, core traits |
//! | [`param`] | `dial-param` | Concrete parameter types |
//! | [`rng`] | `dial-rng` | Deterministic seeded random source |
//! | [`set`] | `dial-set` | Parameter sets, configuration, refresh signals |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`dial-core`).
///
/// Contains [`types::ParameterValue`], the payload traits, error types, and
/// the two capability traits [`types::Tunable`] and [`types::Supplier`].
pub use dial_core as types;

/// Concrete parameter types (`dial-param`).
pub use dial_param as param;

/// Deterministic random source (`dial-rng`).
///
/// [`rng::SeededRng`] draws, picks, extracts, and permutes reproducibly
/// from a seed.
pub use dial_rng as rng;

/// Parameter sets (`dial-set`).
///
/// [`set::ParameterSet`] owns parameters and notifies subscribers of
/// changes; [`set::RefreshSignal`] requests supplier refreshes from other
/// threads.
pub use dial_set as set;

/// Common imports for typical Dial usage.
///
/// ```rust
/// use dial::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use dial_core::{
        BoundsPolicy, ParameterId, ParameterPayload, ParameterValue, ParameterVersion,
        SubscriptionId, Supplier, Tunable, ValueKind,
    };

    // Errors
    pub use dial_core::ParameterError;
    pub use dial_rng::RngError;
    pub use dial_set::{ConfigError, SetError};

    // Parameters
    pub use dial_param::{ListParameter, NumericParameter, Parameter, SeedParameter};

    // Random source
    pub use dial_rng::SeededRng;

    // Sets
    pub use dial_set::{ParameterSet, RefreshSignal, SetConfig};
}
