//! The `ValidationFailure` enum and its user-facing messages.

use serde::Serialize;
use thiserror::Error;

use crate::name::NameInfo;

/// One structural violation found in a parse attempt.
///
/// Rules produce these as plain values; the engine never raises them as
/// control flow. Each variant carries the identity of the offending
/// declaration, which is all a caller needs to render a message or map
/// the failure back to its specification.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[non_exhaustive]
pub enum ValidationFailure {
    /// Options from two or more mutually exclusive sets were supplied
    /// together.
    #[error("option '{0}' is not compatible with options from another set")]
    MutuallyExclusiveSet(NameInfo),

    /// A required option or positional value was not supplied.
    #[error("required option '{0}' is missing")]
    MissingRequired(NameInfo),

    /// A sequence option received fewer or more values than its
    /// declared bounds allow.
    #[error("option '{0}' has fewer or more values than allowed")]
    SequenceOutOfRange(NameInfo),

    /// The same option flag was written more than once in the input.
    #[error("option '{0}' is given more than once")]
    RepeatedOption(NameInfo),
}

impl ValidationFailure {
    /// Identity of the offending declaration.
    #[must_use]
    pub const fn name(&self) -> &NameInfo {
        match self {
            Self::MutuallyExclusiveSet(name)
            | Self::MissingRequired(name)
            | Self::SequenceOutOfRange(name)
            | Self::RepeatedOption(name) => name,
        }
    }
}
