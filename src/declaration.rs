//! Declarative description of one configured option or positional value.
//!
//! Declarations are produced once at specification-registration time and
//! read-only thereafter; every rule consumes them through shared
//! references.

use serde::Serialize;

use crate::name::NameInfo;

/// Shape of the value a declaration binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetShape {
    /// A single value.
    Scalar,
    /// An ordered collection of values; the only shape with meaningful
    /// `min`/`max` bounds.
    Sequence,
    /// A boolean flag that takes no value.
    Switch,
}

/// Whether a declaration is a flagged option or a positional value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    /// A flagged option.
    Option {
        /// Mutual-exclusion set name; the empty string means ungrouped.
        set_name: String,
    },
    /// A positional value. Positionals carry no set semantics.
    Value,
}

/// One configured option or positional value.
///
/// Built fluently and immutable once handed to the binder:
///
/// ```
/// use argcheck::{Declaration, NameInfo};
///
/// let input = Declaration::option(NameInfo::both('i', "input"))
///     .required()
///     .in_set("source");
/// assert!(input.is_required());
/// assert_eq!(input.set_name(), "source");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: NameInfo,
    kind: DeclarationKind,
    required: bool,
    shape: TargetShape,
    min: Option<usize>,
    max: Option<usize>,
}

impl Declaration {
    /// Declares a flagged option with the given identity.
    ///
    /// Scalar-shaped, optional and ungrouped until the builder methods
    /// say otherwise.
    #[must_use]
    pub const fn option(name: NameInfo) -> Self {
        Self {
            name,
            kind: DeclarationKind::Option {
                set_name: String::new(),
            },
            required: false,
            shape: TargetShape::Scalar,
            min: None,
            max: None,
        }
    }

    /// Declares a positional value.
    #[must_use]
    pub const fn value() -> Self {
        Self {
            name: NameInfo::empty(),
            kind: DeclarationKind::Value,
            required: false,
            shape: TargetShape::Scalar,
            min: None,
            max: None,
        }
    }

    /// Marks the declaration as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Places an option in a named mutual-exclusion set.
    ///
    /// Positional values carry no set semantics, so this is a no-op for
    /// [`Declaration::value`] declarations.
    #[must_use]
    pub fn in_set(mut self, set: impl Into<String>) -> Self {
        if let DeclarationKind::Option { set_name } = &mut self.kind {
            *set_name = set.into();
        }
        self
    }

    /// Gives the declaration the supplied target shape.
    #[must_use]
    pub const fn with_shape(mut self, shape: TargetShape) -> Self {
        self.shape = shape;
        self
    }

    /// Shorthand for [`Declaration::with_shape`] with
    /// [`TargetShape::Sequence`].
    #[must_use]
    pub const fn sequence(self) -> Self {
        self.with_shape(TargetShape::Sequence)
    }

    /// Sets the minimum number of values a sequence must receive.
    #[must_use]
    pub const fn at_least(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum number of values a sequence may receive.
    #[must_use]
    pub const fn at_most(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Identity of the declaration; empty for positionals.
    #[must_use]
    pub const fn name(&self) -> &NameInfo {
        &self.name
    }

    /// Kind of the declaration.
    #[must_use]
    pub const fn kind(&self) -> &DeclarationKind {
        &self.kind
    }

    /// Whether this declares a flagged option.
    #[must_use]
    pub const fn is_option(&self) -> bool {
        matches!(self.kind, DeclarationKind::Option { .. })
    }

    /// Whether this declares a positional value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self.kind, DeclarationKind::Value)
    }

    /// Mutual-exclusion set name; empty for ungrouped options and for
    /// positional values.
    #[must_use]
    pub fn set_name(&self) -> &str {
        match &self.kind {
            DeclarationKind::Option { set_name } => set_name,
            DeclarationKind::Value => "",
        }
    }

    /// Whether the declaration must be supplied.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Target shape of the declaration.
    #[must_use]
    pub const fn shape(&self) -> TargetShape {
        self.shape
    }

    /// Minimum sequence length, if bounded below.
    #[must_use]
    pub const fn min(&self) -> Option<usize> {
        self.min
    }

    /// Maximum sequence length, if bounded above.
    #[must_use]
    pub const fn max(&self) -> Option<usize> {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::{Declaration, TargetShape};
    use crate::name::NameInfo;

    #[test]
    fn option_defaults_to_ungrouped_optional_scalar() {
        let decl = Declaration::option(NameInfo::short('x'));
        assert!(decl.is_option());
        assert!(!decl.is_required());
        assert_eq!(decl.set_name(), "");
        assert_eq!(decl.shape(), TargetShape::Scalar);
        assert_eq!(decl.min(), None);
        assert_eq!(decl.max(), None);
    }

    #[test]
    fn sequence_builder_sets_shape_and_bounds() {
        let decl = Declaration::option(NameInfo::long("include"))
            .sequence()
            .at_least(1)
            .at_most(4);
        assert_eq!(decl.shape(), TargetShape::Sequence);
        assert_eq!(decl.min(), Some(1));
        assert_eq!(decl.max(), Some(4));
    }

    #[test]
    fn in_set_is_inert_for_positionals() {
        let decl = Declaration::value().in_set("group");
        assert!(decl.is_value());
        assert_eq!(decl.set_name(), "");
    }
}
