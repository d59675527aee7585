//! Directive handler trait.

use std::collections::HashMap;

use crate::{DirectiveOutcome, DirectiveTag};

/// Handler for one directive name.
///
/// Dispatch is a flat, name-keyed lookup over the registered handlers; an
/// unknown directive name behaves exactly like a handler returning
/// [`DirectiveOutcome::Unresolved`].
///
/// # Thread Safety
///
/// Handlers are read-only during parsing, so a single processor can serve
/// concurrent parse calls; implementors must be `Send + Sync`.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use ssi_engine::{Directive, DirectiveOutcome, DirectiveTag};
///
/// struct UpperEcho;
///
/// impl Directive for UpperEcho {
///     fn name(&self) -> &str { "upper" }
///
///     fn resolve(&self, tag: &DirectiveTag, _vars: &HashMap<String, String>) -> DirectiveOutcome {
///         DirectiveOutcome::resolved(tag.params.trim().to_uppercase())
///     }
/// }
/// ```
pub trait Directive: Send + Sync {
    /// Directive name (e.g. `"echo"`), matched case-sensitively against the
    /// scanned tag's name.
    fn name(&self) -> &str;

    /// Resolve a scanned tag against the caller's variable mapping.
    fn resolve(&self, tag: &DirectiveTag, vars: &HashMap<String, String>) -> DirectiveOutcome;
}
