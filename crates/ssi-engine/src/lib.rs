//! Server-side include (SSI) directive substitution.
//!
//! Scans text content for HTML-comment-style directive tags of the form
//! `<!--#name key="value" -->`, resolves each recognized directive against a
//! caller-supplied variable mapping, and rebuilds the content with resolved
//! tags replaced in place. Malformed or unrecognized tags are never an
//! error; they stay literal content.
//!
//! # Architecture
//!
//! Three pieces, in dependency order:
//!
//! 1. **Scanner** ([`DirectiveTag`]): finds every well-formed tag in the
//!    input, left to right, without overlaps.
//! 2. **Registry** ([`Directive`]): flat name-keyed lookup from directive
//!    name to handler, fixed at construction. The one built-in handler is
//!    [`EchoDirective`].
//! 3. **Assembler** ([`SsiProcessor::parse`]): splices literal spans with
//!    handler results into the output string.
//!
//! A parse call is pure: no I/O, no panics, no shared mutable state. One
//! processor can serve any number of concurrent parse calls.
//!
//! # Output contract
//!
//! When no tag in the entire input resolves — including the case of an
//! input with no tags at all — `parse` returns the empty string, not the
//! original content. Callers that need pass-through must handle that case
//! themselves.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! let vars = HashMap::from([("DOCUMENT_ROOT".to_owned(), "/var/www".to_owned())]);
//! let output = ssi_engine::parse(r#"Root: <!--#echo var="DOCUMENT_ROOT" -->."#, &vars);
//! assert_eq!(output, "Root: /var/www.");
//! ```

mod directive;
mod echo;
mod outcome;
mod processor;
mod scanner;

pub use directive::Directive;
pub use echo::EchoDirective;
pub use outcome::DirectiveOutcome;
pub use processor::SsiProcessor;
pub use scanner::DirectiveTag;

use std::collections::HashMap;

/// Substitute directive tags in `content` using the built-in directive set.
///
/// Convenience wrapper that creates a default [`SsiProcessor`] (with only
/// the `echo` directive registered) for a single parse call. Callers that
/// parse repeatedly or register custom directives should construct and keep
/// a processor instead.
#[must_use]
pub fn parse(content: &str, vars: &HashMap<String, String>) -> String {
    SsiProcessor::new().parse(content, vars)
}
