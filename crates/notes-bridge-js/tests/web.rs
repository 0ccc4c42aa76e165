//! WASM browser tests for the page bridge.
//!
//! The page bridge is one-per-page state, so the boot lifecycle runs as a
//! single ordered test against a stub `toastui.Editor` and a fake
//! `window.webkit.messageHandlers`.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use notes_bridge_browser::surfaces::is_displayed;
use notes_bridge_browser::{EditorConfig, PageLayout, dom};
use notes_bridge_js::{BootOptions, boot, dispatch, is_booted};
use web_sys::HtmlElement;

const STUB_EDITOR: &str = r#"
window.toastui = {
    Editor: class {
        constructor(options) {
            if (!(options.el instanceof HTMLElement)) {
                throw new Error("editor needs an el");
            }
            this.options = options;
            this.markdown = options.initialValue || "";
            this.handlers = [];
            this.focusCount = 0;
            window.__stubEditor = this;
        }
        on(event, handler) {
            if (event === "change") this.handlers.push(handler);
        }
        focus() {
            this.focusCount += 1;
        }
        getMarkdown() {
            return this.markdown;
        }
        setMarkdown(markdown) {
            this.markdown = markdown;
            this.handlers.forEach((handler) => handler());
        }
    },
};
"#;

const FAKE_HOST: &str = r#"
window.__posts = [];
const record = (name) => ({
    postMessage: (payload) => window.__posts.push(name + ":" + payload),
});
window.webkit = {
    messageHandlers: {
        editorInitialized: {
            postMessage: (payload) => {
                window.__posts.push("editorInitialized:" + payload);
                window.__callsAtHandshake = [
                    "showEditor", "showStartPage", "updateRecentFiles", "togglePreview",
                    "setContent", "getContent", "requestNewNote",
                ].every((name) => typeof window[name] === "function");
                window.__editorAtHandshake = window.editor === window.__stubEditor;
                try {
                    window.showEditor();
                    window.__reentryError = null;
                } catch (e) {
                    window.__reentryError = String(e);
                }
            },
        },
        contentChanged: record("contentChanged"),
        openFile: record("openFile"),
        newNote: record("newNote"),
    },
};
"#;

fn mount(id: &str) -> HtmlElement {
    let document = dom::document().expect("document");
    let element = document
        .create_element("div")
        .expect("create div")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    element.set_id(id);
    document
        .body()
        .expect("body")
        .append_child(&element)
        .expect("append");
    element
}

fn window() -> web_sys::Window {
    web_sys::window().expect("window")
}

fn global(name: &str) -> JsValue {
    Reflect::get(&window(), &JsValue::from_str(name)).expect("window property")
}

fn call(name: &str, args: &[JsValue]) -> JsValue {
    let function = global(name).dyn_into::<Function>().expect("host call installed");
    let args: Array = args.iter().collect();
    function.apply(&JsValue::NULL, &args).expect("host call threw")
}

fn posts() -> Vec<String> {
    Array::from(&global("__posts"))
        .iter()
        .filter_map(|post| post.as_string())
        .collect()
}

fn options() -> BootOptions {
    BootOptions {
        editor: EditorConfig {
            mount: "#page-editor-mount".to_string(),
            ..EditorConfig::default()
        },
        layout: PageLayout {
            start_page_id: "page-start".to_string(),
            editor_id: "page-editor".to_string(),
            recent_list_id: "page-recent".to_string(),
            preview_container_selector: "#page-preview".to_string(),
            ..PageLayout::default()
        },
    }
}

#[wasm_bindgen_test]
fn test_page_bridge_lifecycle() {
    // === Before boot ===

    assert!(!is_booted());
    assert!(dispatch(r#"{"call":"showEditor"}"#).is_err());

    // === Failed boot: no mount element ===

    js_sys::eval(FAKE_HOST).unwrap();
    assert!(boot(Some(options())).is_err());
    assert!(!is_booted());
    assert!(posts().is_empty());

    let show_editor = global("showEditor");
    assert!(show_editor.is_function());

    // === Boot ===

    mount("page-start");
    mount("page-editor");
    let recent = mount("page-recent");
    mount("page-editor-mount");
    let preview = mount("page-preview");
    let pane = dom::document().unwrap().create_element("div").unwrap();
    pane.set_class_name("toastui-editor-md-preview");
    preview.append_child(&pane).unwrap();

    js_sys::eval(STUB_EDITOR).unwrap();
    boot(Some(options())).unwrap();
    assert!(is_booted());

    // Host calls from the failed boot are reused, not reinstalled.
    assert!(Object::is(&global("showEditor"), &show_editor));

    // Handshake arrives once, with every host call and window.editor in place.
    assert_eq!(posts(), vec!["editorInitialized:".to_string()]);
    assert_eq!(global("__callsAtHandshake"), JsValue::TRUE);
    assert_eq!(global("__editorAtHandshake"), JsValue::TRUE);

    // The synchronous showEditor from inside the handshake was dropped
    // without throwing.
    assert!(global("__reentryError").is_null());
    assert_eq!(is_displayed("page-start"), Some(true));
    assert_eq!(is_displayed("page-editor"), Some(false));

    // === Host calls ===

    call("showEditor", &[]);
    assert_eq!(is_displayed("page-start"), Some(false));
    assert_eq!(is_displayed("page-editor"), Some(true));

    dispatch(r#"{"call":"showStartPage"}"#).unwrap();
    assert_eq!(is_displayed("page-start"), Some(true));
    assert!(dispatch(r#"{"call":"showNothing"}"#).is_err());
    assert!(dispatch("not json").is_err());
    assert_eq!(is_displayed("page-start"), Some(true));

    call("togglePreview", &[JsValue::TRUE]);
    call("togglePreview", &[JsValue::FALSE]);
    let display = window()
        .get_computed_style(&pane)
        .unwrap()
        .unwrap()
        .get_property_value("display")
        .unwrap();
    assert_eq!(display, "none");
    let stub = global("__stubEditor");
    assert_eq!(
        Reflect::get(&stub, &JsValue::from_str("focusCount")).unwrap(),
        JsValue::from_f64(2.0)
    );

    call("setContent", &[JsValue::from_str("# Loaded")]);
    assert_eq!(call("getContent", &[]).as_string().as_deref(), Some("# Loaded"));
    assert_eq!(posts().last().map(String::as_str), Some("contentChanged:"));

    let file = Object::new();
    Reflect::set(&file, &JsValue::from_str("name"), &JsValue::from_str("a.md")).unwrap();
    Reflect::set(&file, &JsValue::from_str("path"), &JsValue::from_str("/notes/a.md")).unwrap();
    call("updateRecentFiles", &[Array::of1(&file).into()]);
    assert_eq!(recent.child_element_count(), 1);
    recent
        .first_element_child()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert_eq!(posts().last().map(String::as_str), Some("openFile:/notes/a.md"));

    call("requestNewNote", &[]);
    assert_eq!(posts().last().map(String::as_str), Some("newNote:"));

    // === Second boot ===

    assert!(boot(Some(options())).is_err());
    assert!(is_booted());
    assert_eq!(
        posts().iter().filter(|post| post.starts_with("editorInitialized")).count(),
        1
    );
}
