//! Reports required declarations the user never supplied.

use std::collections::HashSet;

use super::Rule;
use crate::binding::Binding;
use crate::error::ValidationFailure;
use crate::token::Token;

/// Flags absent required options and positionals.
///
/// A required option's absence is forgiven when another required option
/// sharing its set name is present; a set of alternative required
/// options thereby means "pick one, not all". The empty set name takes
/// part in this mechanism like any other, so a present required
/// ungrouped option suppresses the missing-failure of every other
/// required ungrouped option. Positionals are never forgiven.
pub struct Required;

impl Rule for Required {
    fn evaluate(&self, bindings: &[Binding], _tokens: &[Token]) -> Vec<ValidationFailure> {
        let satisfied_sets: HashSet<&str> = bindings
            .iter()
            .filter(|b| b.declaration().is_option() && b.declaration().is_required() && b.is_present())
            .map(|b| b.declaration().set_name())
            .collect();

        let missing_options = bindings.iter().filter(|b| {
            let decl = b.declaration();
            decl.is_option()
                && decl.is_required()
                && !b.is_present()
                && !satisfied_sets.contains(decl.set_name())
        });
        let missing_values = bindings
            .iter()
            .filter(|b| b.declaration().is_value() && b.declaration().is_required() && !b.is_present());

        // Options first, then positionals, each in binding order.
        missing_options
            .chain(missing_values)
            .map(|b| ValidationFailure::MissingRequired(b.declaration().name().clone()))
            .collect()
    }
}
