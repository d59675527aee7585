//! The SSI module: lifecycle adapter around the substitution engine.

use ssi_engine::SsiProcessor;

use crate::{ModuleConfig, ModuleError, ModuleHook, RequestContext, Response, server_vars};

/// Host-facing module contract.
///
/// The host registers modules once at startup and invokes
/// [`process`](Self::process) for every request at each hook phase, in
/// dependency order. The returned boolean reports whether the module acted
/// at that phase.
pub trait HttpModule {
    /// Unique module name used for registration and dependency ordering.
    fn name(&self) -> &'static str;

    /// Names of modules that must run before this one.
    fn dependencies(&self) -> &[&'static str] {
        &[]
    }

    /// Prepare the module for an upcoming request.
    fn prepare(&mut self) {}

    /// Run the module's logic for the given hook phase.
    ///
    /// # Errors
    ///
    /// Returns a [`ModuleError`] only when the host violates the module's
    /// contract (e.g. a required server variable is missing).
    fn process(
        &self,
        response: &mut dyn Response,
        context: &dyn RequestContext,
        hook: ModuleHook,
    ) -> Result<bool, ModuleError>;
}

/// Server-side include module.
///
/// Acts once per request, at the [`ModuleHook::ResponsePre`] phase, and only
/// when the served resource passes the configured extension filter. Eligible
/// response bodies are rewritten through the substitution engine with the
/// request's server variables as the variable mapping; at every other phase
/// the module is a no-op.
pub struct SsiModule {
    config: ModuleConfig,
    processor: SsiProcessor,
}

impl SsiModule {
    /// Name under which this module registers with the host.
    pub const MODULE_NAME: &'static str = "ssi";

    /// Create the module with the given configuration.
    #[must_use]
    pub fn new(config: ModuleConfig) -> Self {
        Self {
            config,
            processor: SsiProcessor::new(),
        }
    }

    /// Module configuration.
    #[must_use]
    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Whether the resolved filename passes the extension filter.
    ///
    /// An unconfigured extension disables the filter entirely.
    fn extension_allowed(&self, script_filename: &str) -> bool {
        self.config
            .ssi
            .allow_file_extension
            .as_deref()
            .is_none_or(|ext| script_filename.ends_with(ext))
    }
}

impl HttpModule for SsiModule {
    fn name(&self) -> &'static str {
        Self::MODULE_NAME
    }

    fn process(
        &self,
        response: &mut dyn Response,
        context: &dyn RequestContext,
        hook: ModuleHook,
    ) -> Result<bool, ModuleError> {
        // Only act while the response is being prepared.
        if hook != ModuleHook::ResponsePre {
            return Ok(false);
        }

        let script_filename = context
            .server_var(server_vars::SCRIPT_FILENAME)
            .ok_or_else(|| {
                ModuleError::MissingServerVar(server_vars::SCRIPT_FILENAME.to_owned())
            })?;

        if !self.extension_allowed(script_filename) {
            tracing::debug!(script_filename, "extension not allowed, skipping");
            return Ok(false);
        }

        let vars = context.server_vars();
        let body = self.processor.parse(response.body(), &vars);
        tracing::debug!(
            script_filename,
            input_len = response.body().len(),
            output_len = body.len(),
            "rewrote response body"
        );
        response.set_body(body);

        Ok(true)
    }
}
