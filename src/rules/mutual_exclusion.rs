//! Rejects present options drawn from more than one exclusion set.

use std::collections::BTreeSet;

use super::Rule;
use crate::binding::Binding;
use crate::error::ValidationFailure;
use crate::token::Token;

/// Flags every present, set-named option when two or more distinct sets
/// are represented among the supplied options.
///
/// Several present options from a single set are compatible
/// alternatives and produce no failure. Ungrouped options (empty set
/// name) never participate.
pub struct MutualExclusion;

impl Rule for MutualExclusion {
    fn evaluate(&self, bindings: &[Binding], _tokens: &[Token]) -> Vec<ValidationFailure> {
        let contenders: Vec<&Binding> = bindings
            .iter()
            .filter(|b| {
                b.is_present() && b.declaration().is_option() && !b.declaration().set_name().is_empty()
            })
            .collect();

        let distinct_sets: BTreeSet<&str> = contenders
            .iter()
            .map(|b| b.declaration().set_name())
            .collect();
        if distinct_sets.len() <= 1 {
            return Vec::new();
        }

        // Every contender is reported, not just the offending pair.
        contenders
            .iter()
            .map(|b| ValidationFailure::MutuallyExclusiveSet(b.declaration().name().clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{MutualExclusion, Rule};
    use crate::binding::{Binding, BoundValue};
    use crate::declaration::Declaration;
    use crate::error::ValidationFailure;
    use crate::name::NameInfo;

    fn present(decl: Declaration) -> Binding {
        Binding::present(decl, BoundValue::Switch)
    }

    #[test]
    fn no_set_named_options_present_is_clean() {
        let bindings = vec![
            present(Declaration::option(NameInfo::short('a'))),
            Binding::absent(Declaration::option(NameInfo::short('b')).in_set("g")),
        ];
        assert!(MutualExclusion.evaluate(&bindings, &[]).is_empty());
    }

    #[test]
    fn single_set_with_several_present_options_is_clean() {
        let bindings = vec![
            present(Declaration::option(NameInfo::short('a')).in_set("g")),
            present(Declaration::option(NameInfo::short('b')).in_set("g")),
        ];
        assert!(MutualExclusion.evaluate(&bindings, &[]).is_empty());
    }

    #[test]
    fn two_sets_report_every_present_set_named_option() {
        let bindings = vec![
            present(Declaration::option(NameInfo::short('a')).in_set("x")),
            present(Declaration::option(NameInfo::short('b')).in_set("x")),
            present(Declaration::option(NameInfo::short('c')).in_set("y")),
            present(Declaration::option(NameInfo::short('u'))),
        ];
        let failures = MutualExclusion.evaluate(&bindings, &[]);
        assert_eq!(
            failures,
            vec![
                ValidationFailure::MutuallyExclusiveSet(NameInfo::short('a')),
                ValidationFailure::MutuallyExclusiveSet(NameInfo::short('b')),
                ValidationFailure::MutuallyExclusiveSet(NameInfo::short('c')),
            ]
        );
    }

    #[test]
    fn absent_set_members_do_not_trigger_or_get_reported() {
        let bindings = vec![
            present(Declaration::option(NameInfo::short('a')).in_set("x")),
            Binding::absent(Declaration::option(NameInfo::short('c')).in_set("y")),
        ];
        assert!(MutualExclusion.evaluate(&bindings, &[]).is_empty());
    }
}
