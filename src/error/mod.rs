//! Validation failures reported as values, never panics.

mod types;

pub use types::ValidationFailure;
