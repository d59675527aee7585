//! Boundary traits toward the host server.
//!
//! The host owns request/response construction and server-variable
//! population; the module consumes them through these two traits.

use std::collections::HashMap;

/// Read-only view of the per-request server variables.
pub trait RequestContext {
    /// Look up a single server variable by name (case-sensitive).
    fn server_var(&self, name: &str) -> Option<&str>;

    /// Snapshot of all server variables.
    ///
    /// Used as the variable mapping for the substitution engine.
    fn server_vars(&self) -> HashMap<String, String>;
}

/// Mutable view of the response under preparation.
pub trait Response {
    /// Current response body.
    fn body(&self) -> &str;

    /// Replace the response body.
    fn set_body(&mut self, body: String);
}
