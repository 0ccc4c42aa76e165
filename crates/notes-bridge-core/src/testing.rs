//! Recording fakes for the platform traits.
//!
//! Used by this crate's tests and by downstream tests that want to drive a
//! `Bridge` without a browser or a native host.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::config::EditorConfig;
use crate::error::{BridgeError, Result};
use crate::platform::{
    ChangeHandler, ClickHandler, EditorCapability, EditorFactory, HostChannel, RecentFilesView,
    Surface, ViewSurfaces,
};

/// One message as the host received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub name: String,
    pub payload: Option<String>,
}

/// Host channel that records every delivered message.
///
/// Handlers listed as missing behave like unregistered WebKit handlers:
/// posts to them are dropped.
#[derive(Debug, Default)]
pub struct RecordingHost {
    sent: RefCell<Vec<SentMessage>>,
    missing: HashSet<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_handlers(names: &[&str]) -> Self {
        Self {
            sent: RefCell::default(),
            missing: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|m| m.name.clone()).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.sent.borrow().iter().filter(|m| m.name == name).count()
    }
}

impl HostChannel for RecordingHost {
    fn send(&self, name: &str, payload: Option<&str>) {
        if self.missing.contains(name) {
            return;
        }
        self.sent.borrow_mut().push(SentMessage {
            name: name.to_string(),
            payload: payload.map(str::to_string),
        });
    }
}

/// Shared state behind a `FakeEditor`, kept by the test for inspection.
#[derive(Default)]
pub struct FakeEditorState {
    handlers: RefCell<Vec<ChangeHandler>>,
    markdown: RefCell<String>,
    preview_visible: Cell<Option<bool>>,
    focus_count: Cell<usize>,
}

impl FakeEditorState {
    /// Emit one change event to every subscribed handler.
    pub fn fire_change(&self) {
        let mut handlers = self.handlers.borrow_mut();
        for handler in handlers.iter_mut() {
            handler();
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Last preview visibility the editor was told, if any.
    pub fn preview_visible(&self) -> Option<bool> {
        self.preview_visible.get()
    }

    pub fn focus_count(&self) -> usize {
        self.focus_count.get()
    }

    pub fn markdown(&self) -> String {
        self.markdown.borrow().clone()
    }
}

/// Editor double that fires its change stream on `set_markdown`.
pub struct FakeEditor {
    state: Rc<FakeEditorState>,
}

impl EditorCapability for FakeEditor {
    fn on_change(&self, handler: ChangeHandler) {
        self.state.handlers.borrow_mut().push(handler);
    }

    fn set_preview_visible(&self, show: bool) {
        self.state.preview_visible.set(Some(show));
    }

    fn focus(&self) {
        self.state.focus_count.set(self.state.focus_count.get() + 1);
    }

    fn markdown(&self) -> String {
        self.state.markdown()
    }

    fn set_markdown(&self, markdown: &str) {
        *self.state.markdown.borrow_mut() = markdown.to_string();
        self.state.fire_change();
    }
}

/// Factory producing `FakeEditor`s that share one inspectable state.
#[derive(Default)]
pub struct FakeEditorFactory {
    pub state: Rc<FakeEditorState>,
    pub created: Cell<usize>,
    pub fail: bool,
}

impl FakeEditorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl EditorFactory for FakeEditorFactory {
    type Editor = FakeEditor;

    fn create(&self, config: &EditorConfig) -> Result<FakeEditor> {
        if self.fail {
            return Err(BridgeError::EditorCreate(format!(
                "no editor library for {}",
                config.mount
            )));
        }
        self.created.set(self.created.get() + 1);
        if let Some(initial) = &config.initial_value {
            *self.state.markdown.borrow_mut() = initial.clone();
        }
        Ok(FakeEditor {
            state: Rc::clone(&self.state),
        })
    }
}

/// Surfaces double tracking the visibility of each surface.
///
/// Starts the way the page markup does: start page shown, editor hidden.
#[derive(Debug)]
pub struct FakeSurfaces {
    start: Cell<bool>,
    editor: Cell<bool>,
}

impl Default for FakeSurfaces {
    fn default() -> Self {
        Self {
            start: Cell::new(true),
            editor: Cell::new(false),
        }
    }
}

impl FakeSurfaces {
    pub fn is_visible(&self, surface: Surface) -> bool {
        match surface {
            Surface::Start => self.start.get(),
            Surface::Editor => self.editor.get(),
        }
    }
}

impl ViewSurfaces for FakeSurfaces {
    fn set_visible(&self, surface: Surface, visible: bool) {
        match surface {
            Surface::Start => self.start.set(visible),
            Surface::Editor => self.editor.set(visible),
        }
    }
}

/// Recent-files list double holding labels and click handlers.
#[derive(Default)]
pub struct FakeRecentList {
    entries: Vec<(String, ClickHandler)>,
    pub clears: usize,
}

impl FakeRecentList {
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Simulate a click on the entry at `index`.
    pub fn click(&self, index: usize) {
        if let Some((_, on_click)) = self.entries.get(index) {
            on_click();
        }
    }
}

impl RecentFilesView for FakeRecentList {
    fn clear(&mut self) {
        self.entries.clear();
        self.clears += 1;
    }

    fn push_entry(&mut self, label: &str, on_click: ClickHandler) {
        self.entries.push((label.to_string(), on_click));
    }
}
