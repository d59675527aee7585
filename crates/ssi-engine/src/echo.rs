//! The `echo` directive: substitutes a named variable's value.

use std::collections::HashMap;

use crate::{Directive, DirectiveOutcome, DirectiveTag};

/// Built-in `echo` directive: `<!--#echo var="NAME" -->`.
///
/// The accepted shape is deliberately strict: exactly one parameter whose
/// key is literally `var` and whose value contains no spaces. Anything else
/// — extra parameters, a different key, a value with a space in it — is
/// unresolved and the tag stays literal.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use ssi_engine::SsiProcessor;
///
/// let vars = HashMap::from([("HOST".to_owned(), "example.com".to_owned())]);
/// let output = SsiProcessor::new().parse(r#"<!--#echo var="HOST" --> it is"#, &vars);
/// assert_eq!(output, "example.com it is");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EchoDirective;

impl Directive for EchoDirective {
    fn name(&self) -> &str {
        "echo"
    }

    fn resolve(&self, tag: &DirectiveTag, vars: &HashMap<String, String>) -> DirectiveOutcome {
        match variable_name(&tag.raw) {
            Some(name) => vars
                .get(name)
                .map_or(DirectiveOutcome::Unresolved, DirectiveOutcome::resolved),
            None => DirectiveOutcome::Unresolved,
        }
    }
}

/// Extract the variable name from a tag's raw text.
///
/// The well-formed shape is exactly three space-separated tokens: the
/// open-marker+name token, a `var="NAME"` token, and the close-marker token.
/// A value containing a space splits into extra tokens and is rejected, as
/// is any parameter key other than `var`.
fn variable_name(raw: &str) -> Option<&str> {
    let mut tokens = raw.split(' ');
    let (_open, param, _close) = (tokens.next()?, tokens.next()?, tokens.next()?);
    if tokens.next().is_some() {
        return None;
    }
    param.strip_prefix("var=\"")?.strip_suffix('"')
}
