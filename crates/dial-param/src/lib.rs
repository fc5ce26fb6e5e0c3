//! Concrete parameter types for the Dial framework.
//!
//! Every type here implements [`Tunable`](dial_core::Tunable), so
//! parameters of different payload types can share one parameter set.
//!
//! | Type | Payload | Constraints |
//! |------|---------|-------------|
//! | [`Parameter<T>`] | any [`ParameterPayload`](dial_core::ParameterPayload) | optional enumerated domain |
//! | [`NumericParameter<T>`] | `f64`, `i64` | inclusive `[min, max]` |
//! | [`ListParameter<T>`] | any payload | required enumerated domain |
//! | [`SeedParameter`] | `i64` | full `i64` range, `is_seed() == true` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod list;
pub mod numeric;
pub mod parameter;
pub mod seed;

pub use list::ListParameter;
pub use numeric::NumericParameter;
pub use parameter::Parameter;
pub use seed::SeedParameter;
