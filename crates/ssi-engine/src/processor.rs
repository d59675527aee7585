//! Content assembly.
//!
//! Walks the scanned tags in order and splices literal spans with resolved
//! directive values into the output string.

use std::collections::HashMap;

use crate::scanner::{self, DirectiveTag};
use crate::{Directive, DirectiveOutcome, EchoDirective};

/// Directive-substitution processor.
///
/// Owns the directive registry, which is fixed at construction; parsing is
/// read-only, so one processor can serve concurrent parse calls.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use ssi_engine::SsiProcessor;
///
/// let vars = HashMap::from([("HOST".to_owned(), "example.com".to_owned())]);
/// let processor = SsiProcessor::new();
/// assert_eq!(
///     processor.parse(r#"Host: <!--#echo var="HOST" -->!"#, &vars),
///     "Host: example.com!"
/// );
/// ```
pub struct SsiProcessor {
    directives: Vec<Box<dyn Directive>>,
}

impl Default for SsiProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl SsiProcessor {
    /// Create a processor with the built-in directive set (`echo`).
    #[must_use]
    pub fn new() -> Self {
        Self::bare().with_directive(EchoDirective)
    }

    /// Create a processor with no registered directives.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            directives: Vec::new(),
        }
    }

    /// Register a directive handler.
    #[must_use]
    pub fn with_directive<D: Directive + 'static>(mut self, directive: D) -> Self {
        self.directives.push(Box::new(directive));
        self
    }

    /// Substitute directive tags in `content` against `vars`.
    ///
    /// Resolved tags are replaced in place; unresolved or malformed tags stay
    /// literal, with every byte outside resolved tag spans preserved in
    /// order. When no tag in the entire input resolves — including the case
    /// of no tags at all — the result is the empty string rather than the
    /// original content.
    ///
    /// Never fails: malformed input of any kind is literal content.
    #[must_use]
    pub fn parse(&self, content: &str, vars: &HashMap<String, String>) -> String {
        let mut output = String::new();
        let mut cursor = 0;

        for tag in scanner::scan(content) {
            if let DirectiveOutcome::Resolved(value) = self.dispatch(&tag, vars) {
                output.push_str(&content[cursor..tag.offset]);
                output.push_str(&value);
                cursor = tag.end();
            }
            // Unresolved: the cursor stays put. The tag and any literal text
            // pending before it are flushed together once a later tag
            // resolves.
        }

        // The trailing span is only emitted when something was accumulated.
        if !output.is_empty() {
            output.push_str(&content[cursor..]);
        }

        output
    }

    fn dispatch(&self, tag: &DirectiveTag, vars: &HashMap<String, String>) -> DirectiveOutcome {
        self.directives
            .iter()
            .find(|d| d.name() == tag.name)
            .map_or(DirectiveOutcome::Unresolved, |d| d.resolve(tag, vars))
    }
}
