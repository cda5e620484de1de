//! Ordered execution of the validation rules.

use crate::binding::Binding;
use crate::error::ValidationFailure;
use crate::rules::{Rule, standard_rules};
use crate::token::Token;

/// Runs an ordered rule list against one parse attempt.
///
/// The rule list is supplied explicitly at construction; there is no
/// process-wide registry. Every rule always runs — the engine never
/// short-circuits — so a single failed parse reports every violation at
/// once rather than one at a time.
///
/// # Examples
///
/// ```
/// use argcheck::{Binding, Declaration, NameInfo, RuleEngine};
///
/// let out = Declaration::option(NameInfo::long("out")).required();
/// let failures = RuleEngine::standard().validate(&[Binding::absent(out)], &[]);
/// assert_eq!(failures.len(), 1);
/// ```
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Builds an engine over an explicit, ordered rule list.
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Builds an engine over [`standard_rules`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_rules())
    }

    /// Evaluates every rule against the bindings and tokens, returning
    /// all failures in rule order, then rule-internal order.
    ///
    /// An empty result means the parse attempt is structurally valid.
    #[must_use]
    pub fn validate(&self, bindings: &[Binding], tokens: &[Token]) -> Vec<ValidationFailure> {
        let failures: Vec<ValidationFailure> = self
            .rules
            .iter()
            .flat_map(|rule| rule.evaluate(bindings, tokens))
            .collect();
        tracing::debug!(
            rules = self.rules.len(),
            failures = failures.len(),
            "validated bound arguments"
        );
        failures
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}
