//! Toast UI editor binding.
//!
//! The page loads the editor's UMD bundle, which exposes the constructor as
//! `toastui.Editor`. Only the handful of methods the bridge needs are bound.

use std::cell::RefCell;

use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use notes_bridge_browser::{
    BridgeError, ChangeHandler, EditorCapability, EditorConfig, EditorFactory, PageLayout, Result,
    dom, set_class_toggled,
};

#[wasm_bindgen(js_namespace = toastui)]
extern "C" {
    /// `toastui.Editor` instance.
    #[wasm_bindgen(js_name = Editor)]
    pub type ToastEditor;

    #[wasm_bindgen(constructor, catch, js_class = "Editor")]
    fn new(options: &JsValue) -> std::result::Result<ToastEditor, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &ToastEditor, event: &str, handler: &Function);

    #[wasm_bindgen(method)]
    fn focus(this: &ToastEditor);

    #[wasm_bindgen(method, js_name = getMarkdown)]
    fn get_markdown(this: &ToastEditor) -> String;

    #[wasm_bindgen(method, js_name = setMarkdown)]
    fn set_markdown(this: &ToastEditor, markdown: &str);
}

/// A mounted Toast UI editor.
pub struct ToastUiEditor {
    inner: ToastEditor,
    preview_selector: String,
    hidden_class: String,
    // Change listeners live as long as the editor.
    listeners: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl EditorCapability for ToastUiEditor {
    fn on_change(&self, handler: ChangeHandler) {
        let closure = Closure::wrap(handler);
        self.inner.on("change", closure.as_ref().unchecked_ref());
        self.listeners.borrow_mut().push(closure);
    }

    fn set_preview_visible(&self, show: bool) {
        if !set_class_toggled(&self.preview_selector, &self.hidden_class, !show) {
            tracing::warn!(
                selector = %self.preview_selector,
                "preview container missing; toggle has no effect"
            );
        }
    }

    fn focus(&self) {
        self.inner.focus();
    }

    fn markdown(&self) -> String {
        self.inner.get_markdown()
    }

    fn set_markdown(&self, markdown: &str) {
        self.inner.set_markdown(markdown);
    }
}

/// Builds `ToastUiEditor`s against the page described by a `PageLayout`.
///
/// Each editor is also published as `window.editor`, which host scripts
/// call `setMarkdown` / `getMarkdown` on directly.
#[derive(Debug, Clone)]
pub struct ToastUiFactory {
    layout: PageLayout,
}

impl ToastUiFactory {
    pub fn new(layout: &PageLayout) -> Self {
        Self {
            layout: layout.clone(),
        }
    }
}

impl EditorFactory for ToastUiFactory {
    type Editor = ToastUiEditor;

    fn create(&self, config: &EditorConfig) -> Result<ToastUiEditor> {
        let mount = dom::query::<web_sys::HtmlElement>(&config.mount).ok_or_else(|| {
            BridgeError::EditorCreate(format!("mount element `{}` not found", config.mount))
        })?;

        let options = serde_wasm_bindgen::to_value(config)
            .map_err(|e| BridgeError::EditorCreate(format!("editor options: {}", e)))?;
        Reflect::set(&options, &JsValue::from_str("el"), &mount)
            .map_err(|e| BridgeError::Dom(format!("attaching mount element: {:?}", e)))?;

        let inner = ToastEditor::new(&options)
            .map_err(|e| BridgeError::EditorCreate(format!("{:?}", e)))?;

        let window = web_sys::window().ok_or_else(|| BridgeError::Dom("no window".into()))?;
        Reflect::set(&window, &JsValue::from_str("editor"), &inner)
            .map_err(|e| BridgeError::Dom(format!("publishing window.editor: {:?}", e)))?;

        Ok(ToastUiEditor {
            inner,
            preview_selector: self.layout.preview_container_selector.clone(),
            hidden_class: self.layout.preview_hidden_class.clone(),
            listeners: RefCell::new(Vec::new()),
        })
    }
}
