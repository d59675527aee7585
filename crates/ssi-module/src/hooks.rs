//! Hook phases of the host module pipeline.

/// Phase at which the host invokes a module while handling one request.
///
/// The host dispatches every registered module once per phase; a module
/// reports through its return value whether it acted. The SSI module acts
/// only at [`ResponsePre`](Self::ResponsePre).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleHook {
    /// Before the request is parsed and routed.
    RequestPre,
    /// After the request is routed, before the handler runs.
    RequestPost,
    /// While the response is being prepared, before transmission.
    ResponsePre,
    /// After the response has been sent.
    ResponsePost,
}
