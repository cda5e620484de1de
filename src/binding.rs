//! Pairing of declarations with the values the binder resolved for them.

use crate::declaration::Declaration;

/// A value resolved by the binder for one declaration.
///
/// Values arrive here already converted and aggregated; this crate only
/// inspects their shape and, for sequences, their length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundValue {
    /// A switch that was toggled on.
    Switch,
    /// A single value in its bound textual form.
    Scalar(String),
    /// An ordered collection of values.
    Sequence(Vec<String>),
}

/// Pairing of exactly one [`Declaration`] with the value resolved for
/// it, or nothing if the option/positional was not supplied.
///
/// Bindings are created once per parse attempt by the binding stage and
/// consumed read-only by every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    declaration: Declaration,
    value: Option<BoundValue>,
}

impl Binding {
    /// Binds a declaration to a resolved value.
    #[must_use]
    pub const fn present(declaration: Declaration, value: BoundValue) -> Self {
        Self {
            declaration,
            value: Some(value),
        }
    }

    /// Records that a declaration was not supplied.
    #[must_use]
    pub const fn absent(declaration: Declaration) -> Self {
        Self {
            declaration,
            value: None,
        }
    }

    /// The declaration this binding resolves.
    #[must_use]
    pub const fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    /// The resolved value, if one was supplied.
    #[must_use]
    pub const fn value(&self) -> Option<&BoundValue> {
        self.value.as_ref()
    }

    /// Whether a value was supplied.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Length of a present sequence value; `None` when the binding is
    /// absent or the value is not a sequence.
    #[must_use]
    pub fn sequence_len(&self) -> Option<usize> {
        match &self.value {
            Some(BoundValue::Sequence(items)) => Some(items.len()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Binding, BoundValue};
    use crate::declaration::Declaration;
    use crate::name::NameInfo;

    #[test]
    fn absence_is_explicit() {
        let binding = Binding::absent(Declaration::option(NameInfo::short('q')));
        assert!(!binding.is_present());
        assert_eq!(binding.value(), None);
        assert_eq!(binding.sequence_len(), None);
    }

    #[test]
    fn sequence_len_only_reports_sequences() {
        let seq = Binding::present(
            Declaration::option(NameInfo::long("include")).sequence(),
            BoundValue::Sequence(vec!["a".into(), "b".into()]),
        );
        let scalar = Binding::present(
            Declaration::option(NameInfo::long("out")),
            BoundValue::Scalar("file".into()),
        );
        assert_eq!(seq.sequence_len(), Some(2));
        assert_eq!(scalar.sequence_len(), None);
    }
}
