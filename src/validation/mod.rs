//! Validation of dimensions, specs and quote requests.

mod validate;

pub use validate::*;
