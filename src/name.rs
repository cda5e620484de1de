//! Option identity: the short and long spellings of a flag.

use std::fmt;

use serde::Serialize;

/// The short/long identity of a declared option.
///
/// Options carry at least one spelling; positional values carry an empty
/// identity. The constructors make an empty identity impossible for
/// options, so rules never need to defend against a nameless flag.
///
/// # Examples
///
/// ```
/// use argcheck::NameInfo;
///
/// let name = NameInfo::both('o', "out");
/// assert_eq!(name.to_string(), "-o, --out");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameInfo {
    short: Option<char>,
    long: Option<String>,
}

impl NameInfo {
    /// Identity with only a short spelling, e.g. `-v`.
    #[must_use]
    pub const fn short(short: char) -> Self {
        Self {
            short: Some(short),
            long: None,
        }
    }

    /// Identity with only a long spelling, e.g. `--verbose`.
    #[must_use]
    pub fn long(long: impl Into<String>) -> Self {
        Self {
            short: None,
            long: Some(long.into()),
        }
    }

    /// Identity with both spellings.
    #[must_use]
    pub fn both(short: char, long: impl Into<String>) -> Self {
        Self {
            short: Some(short),
            long: Some(long.into()),
        }
    }

    /// The empty identity carried by positional values.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            short: None,
            long: None,
        }
    }

    /// Short spelling, if any.
    #[must_use]
    pub const fn short_name(&self) -> Option<char> {
        self.short
    }

    /// Long spelling, if any.
    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Whether neither spelling is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }

    /// Whether `text` is one of this identity's spellings as written on
    /// the command line (without leading dashes).
    pub(crate) fn matches(&self, text: &str) -> bool {
        let short_hit = self.short.is_some_and(|s| {
            let mut chars = text.chars();
            chars.next() == Some(s) && chars.next().is_none()
        });
        short_hit || self.long.as_deref() == Some(text)
    }
}

impl fmt::Display for NameInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short, self.long.as_deref()) {
            (Some(s), Some(l)) => write!(f, "-{s}, --{l}"),
            (Some(s), None) => write!(f, "-{s}"),
            (None, Some(l)) => write!(f, "--{l}"),
            (None, None) => f.write_str("value"),
        }
    }
}
