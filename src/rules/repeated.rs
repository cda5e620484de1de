//! Detects the same option flag written more than once in the input.

use super::Rule;
use crate::binding::Binding;
use crate::declaration::Declaration;
use crate::error::ValidationFailure;
use crate::token::Token;

/// Flags an option whose flag text appears more than once in the raw
/// token stream.
///
/// Binding only records the final or merged value, so repetition is
/// invisible there; this is the one rule that reads the tokens. Each
/// name token is matched against the present options by exact text
/// equality with either spelling; occurrences are grouped by the
/// underlying identity, and a group of two or more yields exactly one
/// failure, however many extra occurrences it holds. Failures follow
/// the order of first occurrence in the token stream.
pub struct RepeatedFlag;

impl Rule for RepeatedFlag {
    fn evaluate(&self, bindings: &[Binding], tokens: &[Token]) -> Vec<ValidationFailure> {
        let present: Vec<&Declaration> = bindings
            .iter()
            .filter(|b| b.declaration().is_option() && b.is_present())
            .map(Binding::declaration)
            .collect();

        let mut occurrences: Vec<(&Declaration, usize)> = Vec::new();
        for token in tokens.iter().filter(|t| t.is_name()) {
            // Tokens naming no present option are discarded.
            let Some(decl) = present.iter().copied().find(|d| d.name().matches(token.text()))
            else {
                continue;
            };
            match occurrences.iter_mut().find(|(d, _)| d.name() == decl.name()) {
                Some((_, count)) => *count += 1,
                None => occurrences.push((decl, 1)),
            }
        }

        occurrences
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(decl, _)| ValidationFailure::RepeatedOption(decl.name().clone()))
            .collect()
    }
}
