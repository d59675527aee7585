//! Well-known server variable names.
//!
//! Names follow the host's CGI-style server-variable dictionary. The module
//! itself only reads [`SCRIPT_FILENAME`]; the rest are the keys documents
//! most commonly echo.

/// Resolved server-side filesystem path of the requested resource.
pub const SCRIPT_FILENAME: &str = "SCRIPT_FILENAME";

/// Unix timestamp at which request handling started.
pub const REQUEST_TIME: &str = "REQUEST_TIME";

/// Document root of the serving host.
pub const DOCUMENT_ROOT: &str = "DOCUMENT_ROOT";

/// Request URI as sent by the client.
pub const REQUEST_URI: &str = "REQUEST_URI";

/// Name of the serving host.
pub const SERVER_NAME: &str = "SERVER_NAME";
