//! Validation rules run against the bound argument set.
//!
//! Each rule is a standalone strategy behind the [`Rule`] trait: a pure
//! function from the binding collection (and the raw token stream) to
//! zero or more failures. Rules never short-circuit one another; the
//! engine runs the whole list so a single failed parse reports every
//! violation at once.

mod mutual_exclusion;
mod range;
mod repeated;
mod required;

pub use mutual_exclusion::MutualExclusion;
pub use range::Range;
pub use repeated::RepeatedFlag;
pub use required::Required;

use crate::binding::Binding;
use crate::error::ValidationFailure;
use crate::token::Token;

/// A pure check over one parse attempt's bindings.
///
/// Implementations must be side-effect-free: the same inputs always
/// produce the same failures, in the same order. Most rules ignore the
/// token stream; [`RepeatedFlag`] is the one that needs it.
pub trait Rule {
    /// Evaluates the rule, returning every violation it finds.
    fn evaluate(&self, bindings: &[Binding], tokens: &[Token]) -> Vec<ValidationFailure>;
}

/// The standard rule list in its canonical order: mutual exclusion,
/// required, range, repeated flag.
///
/// Returned as an explicitly constructed value rather than a global so
/// callers can extend, reorder, or replace rules per engine instance.
#[must_use]
pub fn standard_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MutualExclusion),
        Box::new(Required),
        Box::new(Range),
        Box::new(RepeatedFlag),
    ]
}
