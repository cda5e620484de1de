//! Checks sequence lengths against declared bounds.

use super::Rule;
use crate::binding::Binding;
use crate::declaration::TargetShape;
use crate::error::ValidationFailure;
use crate::token::Token;

/// Flags present sequence bindings whose value count falls outside the
/// declared `min`/`max` bounds.
///
/// An absent bound disables that side of the check. Scalar and switch
/// bindings are never examined, whatever bounds their declarations
/// carry.
pub struct Range;

impl Rule for Range {
    fn evaluate(&self, bindings: &[Binding], _tokens: &[Token]) -> Vec<ValidationFailure> {
        bindings
            .iter()
            .filter_map(|b| {
                let decl = b.declaration();
                if decl.shape() != TargetShape::Sequence {
                    return None;
                }
                let len = b.sequence_len()?;
                let too_few = decl.min().is_some_and(|min| len < min);
                let too_many = decl.max().is_some_and(|max| len > max);
                (too_few || too_many)
                    .then(|| ValidationFailure::SequenceOutOfRange(decl.name().clone()))
            })
            .collect()
    }
}
