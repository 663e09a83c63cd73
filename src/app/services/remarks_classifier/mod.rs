//! Remarks classification service
//!
//! This module turns the unstructured "remarks" field of a request row into
//! one of three structured shapes: a sales-department affiliation, an
//! area-group, or an unclassified passthrough. Classification is a pure
//! function over a single text value with no external state.
//!
//! # Classification Order
//!
//! The two patterns are tried in a strict, mutually exclusive order:
//!
//! 1. **Sales-department pattern**: the text ends in a department
//!    designator (`営業部` or a numbered `営業第N部`), and is split at the
//!    earliest `支店`/`営業部` token into a branch-name prefix and a
//!    department-name suffix.
//! 2. **Area-group pattern**: a 5-character code, one (half- or full-width)
//!    space, a name ending in `Gr`, and an optional trailing parenthesized
//!    establishment annotation.
//!
//! Anything else, including absent input, passes through as
//! [`Classification::Other`](crate::app::models::Classification). The
//! classifier never fails; malformed input is a normal, frequent case.

pub mod classifier;
pub mod patterns;

#[cfg(test)]
pub mod tests;

// Re-export the entry point for easy access
pub use classifier::classify;
pub use patterns::strip_leading_bullet;
