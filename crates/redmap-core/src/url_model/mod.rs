//! URL modeling for redirect endpoints.
//!
//! Endpoints are compared by a shallow normalized key: absolute URLs reduce to
//! their path and query, anything else is the trimmed literal.

mod normalize;

pub use normalize::{normalize, parse_absolute};
