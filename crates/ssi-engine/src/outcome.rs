//! Directive resolution outcomes.

/// Outcome of attempting to resolve a directive tag.
///
/// There are no partial results and no errors: a handler either produces a
/// substitution string or declares the tag unresolved, in which case the
/// tag's raw text stays literal content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveOutcome {
    /// The tag resolved to a substitution string.
    Resolved(String),
    /// The tag could not be resolved and is left untouched.
    Unresolved,
}

impl DirectiveOutcome {
    /// Create a resolved outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use ssi_engine::DirectiveOutcome;
    ///
    /// let outcome = DirectiveOutcome::resolved("index.html");
    /// assert!(matches!(outcome, DirectiveOutcome::Resolved(_)));
    /// ```
    #[must_use]
    pub fn resolved(s: impl Into<String>) -> Self {
        Self::Resolved(s.into())
    }
}
