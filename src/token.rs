//! Lexical units of the raw input, as split by the tokenizer.

/// One lexical unit of the raw command line.
///
/// Name tokens carry an option flag exactly as written, minus its
/// leading dashes; value tokens carry bare text. The tokenizer that
/// produces these is a collaborator of this crate, not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An option flag, e.g. `v` for `-v` or `verbose` for `--verbose`.
    Name(String),
    /// A bare value.
    Value(String),
}

impl Token {
    /// Builds a name token.
    #[must_use]
    pub fn name(text: impl Into<String>) -> Self {
        Self::Name(text.into())
    }

    /// Builds a value token.
    #[must_use]
    pub fn value(text: impl Into<String>) -> Self {
        Self::Value(text.into())
    }

    /// The literal text of the token.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Name(text) | Self::Value(text) => text,
        }
    }

    /// Whether this token is an option flag.
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self, Self::Name(_))
    }
}

#[cfg(test)]
mod tests {
    use super::Token;

    #[test]
    fn accessors_expose_kind_and_text() {
        let flag = Token::name("verbose");
        let arg = Token::value("out.txt");
        assert!(flag.is_name());
        assert!(!arg.is_name());
        assert_eq!(flag.text(), "verbose");
        assert_eq!(arg.text(), "out.txt");
    }
}
