//! Standard fixture parameters.
//!
//! - [`x`]: `f64` in `[0, 10]`, default `1.0`.
//! - [`count`]: `i64` in `[0, 100]`, default `10`.
//! - [`flag`]: `bool`, default `false`.
//! - [`letter`]: string enumeration `{a, b, c}`, default `"a"`.
//! - [`seed`]: seed parameter, default `42`.

use dial_core::ParameterError;
use dial_param::{ListParameter, NumericParameter, Parameter, SeedParameter};

pub fn x() -> NumericParameter<f64> {
    numeric_f64("x", 1.0, 0.0, 10.0)
}

pub fn count() -> NumericParameter<i64> {
    numeric_i64("count", 10, 0, 100)
}

pub fn flag() -> Parameter<bool> {
    Parameter::new("flag", false)
}

pub fn letter() -> ListParameter<String> {
    string_list("letter", "a", &["a", "b", "c"])
}

pub fn seed() -> SeedParameter {
    SeedParameter::new("seed", 42)
}

/// Fixture constructor for a bounded `f64`. Panics on an invalid
/// definition, which is a bug in the calling test.
pub fn numeric_f64(name: &str, default: f64, min: f64, max: f64) -> NumericParameter<f64> {
    unwrap_fixture(NumericParameter::new(name, default, min, max))
}

pub fn numeric_i64(name: &str, default: i64, min: i64, max: i64) -> NumericParameter<i64> {
    unwrap_fixture(NumericParameter::new(name, default, min, max))
}

pub fn string_list(name: &str, default: &str, values: &[&str]) -> ListParameter<String> {
    unwrap_fixture(ListParameter::new(
        name,
        default.to_string(),
        values.iter().map(|v| v.to_string()),
    ))
}

fn unwrap_fixture<P>(result: Result<P, ParameterError>) -> P {
    match result {
        Ok(p) => p,
        Err(e) => panic!("invalid fixture definition: {e}"),
    }
}
