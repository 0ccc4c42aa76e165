//! Messages exchanged between the page and the native host.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A recently used document, as supplied by the host.
///
/// The path is opaque to the bridge and is handed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub path: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Recent files in host order (most recent first by convention).
pub type RecentFilesList = Vec<FileDescriptor>;

/// Bridge-to-host message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Editor construction finished; the page accepts commands.
    EditorInitialized,
    /// The editor emitted a change event.
    ContentChanged,
    /// The user picked a recent file.
    OpenFile { path: String },
    /// The user asked for a fresh note from the start page.
    NewNote,
}

impl Signal {
    /// Name of the host message handler this signal is posted to.
    pub fn name(&self) -> &'static str {
        match self {
            Signal::EditorInitialized => "editorInitialized",
            Signal::ContentChanged => "contentChanged",
            Signal::OpenFile { .. } => "openFile",
            Signal::NewNote => "newNote",
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            Signal::OpenFile { path } => Some(path),
            Signal::EditorInitialized | Signal::ContentChanged | Signal::NewNote => None,
        }
    }
}

/// Host-to-bridge call.
///
/// Wire form is `{"call": "<name>", "arg": <value>}`; calls without an
/// argument omit `arg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", content = "arg", rename_all = "camelCase")]
pub enum HostCall {
    ShowEditor,
    ShowStartPage,
    UpdateRecentFiles(RecentFilesList),
    TogglePreview(bool),
    SetContent(String),
}

impl HostCall {
    /// Decode a call from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn name(&self) -> &'static str {
        match self {
            HostCall::ShowEditor => "showEditor",
            HostCall::ShowStartPage => "showStartPage",
            HostCall::UpdateRecentFiles(_) => "updateRecentFiles",
            HostCall::TogglePreview(_) => "togglePreview",
            HostCall::SetContent(_) => "setContent",
        }
    }
}
