//! Module-level errors.

use crate::ConfigError;

/// Error raised when the host invokes the module outside its contract.
///
/// The substitution engine itself never fails; unresolved directives are a
/// defined outcome, not an error. These variants cover the boundary only.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// A server variable the module requires is missing from the context.
    #[error("missing server variable: {0}")]
    MissingServerVar(String),
    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
