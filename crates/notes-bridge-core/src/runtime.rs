//! Bridge runtime: owns the editor, performs the handshake, and forwards
//! editor changes to the host.

use std::rc::Rc;

use crate::config::EditorConfig;
use crate::error::{BridgeError, Result};
use crate::platform::{EditorCapability, EditorFactory, HostChannel};
use crate::protocol::Signal;

/// Owner of the single editor instance for the page's lifetime.
pub struct BridgeRuntime<F: EditorFactory, H> {
    factory: F,
    host: Rc<H>,
    editor: Option<F::Editor>,
    preview_visible: bool,
}

impl<F, H> BridgeRuntime<F, H>
where
    F: EditorFactory,
    H: HostChannel + 'static,
{
    pub fn new(factory: F, host: Rc<H>) -> Self {
        Self {
            factory,
            host,
            editor: None,
            preview_visible: true,
        }
    }

    /// Construct the editor, bind its change stream, and signal the host.
    ///
    /// The change handler is bound before `editorInitialized` is posted, and
    /// since everything runs on the page thread no `contentChanged` can
    /// reach the host ahead of the handshake.
    pub fn initialize(&mut self, config: &EditorConfig) -> Result<&F::Editor> {
        if self.editor.is_some() {
            tracing::warn!("initialize called twice; keeping the existing editor");
            return Err(BridgeError::AlreadyInitialized);
        }

        let editor = self.factory.create(config)?;

        let host = Rc::clone(&self.host);
        editor.on_change(Box::new(move || on_content_changed(&*host)));

        tracing::debug!(mount = %config.mount, "editor created");
        self.host.emit(&Signal::EditorInitialized);

        Ok(self.editor.insert(editor))
    }

    pub fn is_initialized(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor(&self) -> Option<&F::Editor> {
        self.editor.as_ref()
    }

    /// Show or hide the editor's preview pane, then give focus back to the
    /// editor so the cursor survives the layout change.
    ///
    /// No-op before initialization: nothing is applied or recorded, so the
    /// editor starts with its preview shown.
    pub fn set_preview_visible(&mut self, show: bool) {
        let Some(editor) = &self.editor else {
            tracing::debug!(show, "preview toggle before initialization ignored");
            return;
        };

        editor.set_preview_visible(show);
        editor.focus();
        self.preview_visible = show;
    }

    /// Preview visibility last applied to the editor.
    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    /// Replace the editor document. No-op before initialization.
    pub fn set_content(&self, markdown: &str) {
        match &self.editor {
            Some(editor) => editor.set_markdown(markdown),
            None => tracing::debug!("setContent before initialization ignored"),
        }
    }

    pub fn content(&self) -> Option<String> {
        self.editor.as_ref().map(|editor| editor.markdown())
    }

    pub fn request_new_note(&self) {
        self.host.emit(&Signal::NewNote);
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }
}

fn on_content_changed<H: HostChannel + ?Sized>(host: &H) {
    host.emit(&Signal::ContentChanged);
}
