//! Server-side include module for a host web server's request pipeline.
//!
//! Thin adapter around [`ssi_engine`]: registered once with the host, the
//! module runs during the response-preparation hook, checks the served
//! resource's extension against the configured allow extension, and rewrites
//! the response body through the substitution engine with the request's
//! server variables as the variable mapping.
//!
//! The host pipeline itself — module dispatch, request/response
//! construction, server-variable population — is consumed through the narrow
//! traits in this crate ([`RequestContext`], [`Response`]); the module only
//! decides whether and when to invoke the engine.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use ssi_module::{HttpModule, ModuleConfig, ModuleHook, RequestContext, Response, SsiModule};
//!
//! struct Ctx(HashMap<String, String>);
//!
//! impl RequestContext for Ctx {
//!     fn server_var(&self, name: &str) -> Option<&str> {
//!         self.0.get(name).map(String::as_str)
//!     }
//!     fn server_vars(&self) -> HashMap<String, String> {
//!         self.0.clone()
//!     }
//! }
//!
//! struct Body(String);
//!
//! impl Response for Body {
//!     fn body(&self) -> &str {
//!         &self.0
//!     }
//!     fn set_body(&mut self, body: String) {
//!         self.0 = body;
//!     }
//! }
//!
//! let module = SsiModule::new(ModuleConfig::default());
//! let ctx = Ctx(HashMap::from([(
//!     "SCRIPT_FILENAME".to_owned(),
//!     "/var/www/index.shtml".to_owned(),
//! )]));
//! let mut response = Body(r#"File: <!--#echo var="SCRIPT_FILENAME" -->."#.to_owned());
//!
//! let acted = module
//!     .process(&mut response, &ctx, ModuleHook::ResponsePre)
//!     .unwrap();
//! assert!(acted);
//! assert_eq!(response.body(), "File: /var/www/index.shtml.");
//! ```

mod config;
mod context;
mod error;
mod hooks;
mod module;
pub mod server_vars;

pub use config::{ConfigError, ModuleConfig, SsiConfig};
pub use context::{RequestContext, Response};
pub use error::ModuleError;
pub use hooks::ModuleHook;
pub use module::{HttpModule, SsiModule};
