//! Structural validation for parsed command-line options and positionals.
//!
//! This crate is the rule engine that runs after tokenization and
//! value-binding: given the [`Binding`] produced for every declared
//! option or positional and the raw [`Token`] stream, it decides which
//! structural errors exist — mutually exclusive sets supplied together,
//! required declarations left out, sequence value counts outside their
//! bounds, and the same flag written twice. Tokenizing, converting
//! values, and rendering help are collaborators outside this crate.
//!
//! Failures are values, never panics: [`RuleEngine::validate`] returns
//! every [`ValidationFailure`] from every rule in one pass, so a failed
//! parse can report all of its violations at once.
//!
//! ```
//! use argcheck::{Binding, BoundValue, Declaration, NameInfo, RuleEngine, Token};
//!
//! let out = Declaration::option(NameInfo::both('o', "out")).required();
//! let verbose = Declaration::option(NameInfo::long("verbose"));
//! let bindings = vec![
//!     Binding::absent(out),
//!     Binding::present(verbose, BoundValue::Switch),
//! ];
//! let tokens = vec![Token::name("verbose")];
//!
//! let failures = RuleEngine::standard().validate(&bindings, &tokens);
//! assert_eq!(
//!     failures.first().map(ToString::to_string),
//!     Some(String::from("required option '-o, --out' is missing")),
//! );
//! ```

mod binding;
mod declaration;
mod engine;
mod error;
mod name;
pub mod rules;
mod token;

pub use binding::{Binding, BoundValue};
pub use declaration::{Declaration, DeclarationKind, TargetShape};
pub use engine::RuleEngine;
pub use error::ValidationFailure;
pub use name::NameInfo;
pub use token::Token;
