//! Platform abstraction traits for the bridge.
//!
//! These traits define the interface between the bridge logic and the
//! environment it runs in: the editor widget, the native host's message
//! channel, and the page surfaces. The browser implementations live in
//! `notes-bridge-browser`; `testing` has recording fakes.

use std::rc::Rc;

use crate::config::EditorConfig;
use crate::error::Result;
use crate::protocol::Signal;

/// Callback bound to the editor's change stream.
pub type ChangeHandler = Box<dyn FnMut()>;

/// Callback bound to a rendered recent-file entry.
pub type ClickHandler = Box<dyn Fn()>;

/// Fire-and-forget transport to the native host.
///
/// Implementations own the presence check: posting to a handler the host
/// never registered is skipped without error, so the page also runs with
/// no host attached.
pub trait HostChannel {
    /// Post a named message with an optional payload.
    fn send(&self, name: &str, payload: Option<&str>);

    fn emit(&self, signal: &Signal) {
        self.send(signal.name(), signal.payload());
    }
}

impl<H: HostChannel + ?Sized> HostChannel for Rc<H> {
    fn send(&self, name: &str, payload: Option<&str>) {
        (**self).send(name, payload);
    }
}

/// Live handle to the embedded editor widget.
pub trait EditorCapability {
    /// Subscribe to the editor's change stream.
    ///
    /// The handler stays bound for the editor's lifetime.
    fn on_change(&self, handler: ChangeHandler);

    fn set_preview_visible(&self, show: bool);

    fn focus(&self);

    /// Current document as markdown.
    fn markdown(&self) -> String;

    /// Replace the document. Editors report this through their change stream.
    fn set_markdown(&self, markdown: &str);
}

/// Constructs the editor widget from its configuration.
pub trait EditorFactory {
    type Editor: EditorCapability;

    fn create(&self, config: &EditorConfig) -> Result<Self::Editor>;
}

/// The two top-level page surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Start,
    Editor,
}

/// Visibility control over the page surfaces.
///
/// A surface whose element is missing is skipped silently; that is a
/// markup problem, not a bridge failure.
pub trait ViewSurfaces {
    fn set_visible(&self, surface: Surface, visible: bool);
}

/// Presentation of the recent-files list.
pub trait RecentFilesView {
    /// Drop every rendered entry together with its click handler.
    fn clear(&mut self);

    /// Append an entry labelled `label` that runs `on_click` when clicked.
    fn push_entry(&mut self, label: &str, on_click: ClickHandler);
}
