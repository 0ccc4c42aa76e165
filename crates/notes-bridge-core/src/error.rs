//! Error types for bridge operations.

use miette::Diagnostic;

/// Errors surfaced by the bridge.
///
/// Missing host handlers and missing page elements are not errors; those
/// paths degrade to no-ops at the call site.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum BridgeError {
    /// `initialize` was called on a runtime that already owns an editor.
    #[error("editor already initialized")]
    #[diagnostic(code(notes_bridge::already_initialized))]
    AlreadyInitialized,

    /// The editor capability failed to construct.
    #[error("failed to create editor: {0}")]
    #[diagnostic(
        code(notes_bridge::editor_create),
        help("check that the editor library loaded before the bridge booted")
    )]
    EditorCreate(String),

    /// A host call in wire form could not be decoded.
    #[error("invalid host call: {0}")]
    #[diagnostic(code(notes_bridge::invalid_host_call))]
    InvalidHostCall(#[from] serde_json::Error),

    /// A DOM operation failed outright.
    #[error("dom error: {0}")]
    #[diagnostic(code(notes_bridge::dom))]
    Dom(String),
}

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;
