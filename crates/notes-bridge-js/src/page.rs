//! The page bridge: one per page, booted from JavaScript.
//!
//! `boot` wires the Toast UI editor, the WebKit host channel, and the page
//! surfaces into a `Bridge`, then installs the functions the native host
//! calls through `evaluateJavaScript` on `window`.

use std::cell::{Cell, RefCell};

use js_sys::Reflect;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;

use notes_bridge_browser::{
    Bridge, BridgeError, DomRecentList, DomSurfaces, HostCall, RecentFilesList, WebkitHost,
    install_preview_style,
};

use crate::toastui::ToastUiFactory;
use crate::types::BootOptions;

type PageBridge = Bridge<ToastUiFactory, WebkitHost, DomSurfaces, DomRecentList>;

thread_local! {
    static BRIDGE: RefCell<Option<PageBridge>> = const { RefCell::new(None) };
    static HOST_CALLS_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Build the page bridge, install the host calls, and bring the editor up.
///
/// The host receives `editorInitialized` once the editor exists; by then
/// every host call and `window.editor` are in place. Throws if the editor
/// cannot be created or the bridge is already booted. A failed boot can be
/// retried.
#[wasm_bindgen]
pub fn boot(options: Option<BootOptions>) -> Result<(), JsError> {
    if is_booted() {
        return Err(BridgeError::AlreadyInitialized.into());
    }

    let BootOptions { editor, layout } = options.unwrap_or_default();
    let bridge = Bridge::new(
        ToastUiFactory::new(&layout),
        WebkitHost::new(),
        DomSurfaces::new(&layout),
        DomRecentList::new(&layout),
    );
    install_host_calls().map_err(|e| JsError::new(&format!("installing host calls: {:?}", e)))?;
    if !install_preview_style(&layout) {
        tracing::warn!("preview stylesheet not installed; togglePreview will not hide the pane");
    }
    BRIDGE.with(|slot| slot.replace(Some(bridge)));

    let started = with_bridge("boot", |bridge| bridge.start(&editor));
    match started {
        Some(Ok(())) => Ok(()),
        Some(Err(e)) => {
            tracing::error!("editor creation failed: {}", e);
            BRIDGE.with(|slot| slot.replace(None));
            Err(e.into())
        }
        None => Err(JsError::new("bridge busy during boot")),
    }
}

/// Apply a host call in its JSON wire form, e.g. `{"call":"showEditor"}`.
#[wasm_bindgen]
pub fn dispatch(call: &str) -> Result<(), JsError> {
    match with_bridge("dispatch", |bridge| bridge.dispatch_json(call)) {
        Some(result) => result.map_err(JsError::from),
        None => Err(JsError::new("bridge not booted")),
    }
}

#[wasm_bindgen(js_name = isBooted)]
pub fn is_booted() -> bool {
    BRIDGE.with(|slot| slot.try_borrow().map_or(true, |bridge| bridge.is_some()))
}

/// Run `f` against the page bridge.
///
/// Returns `None`, after logging, when the bridge is not booted or is
/// already borrowed by a call further up the stack.
fn with_bridge<R>(call: &str, f: impl FnOnce(&mut PageBridge) -> R) -> Option<R> {
    BRIDGE.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            tracing::warn!(call, "re-entrant host call dropped");
            return None;
        };
        match slot.as_mut() {
            Some(bridge) => Some(f(bridge)),
            None => {
                tracing::warn!(call, "host call before boot ignored");
                None
            }
        }
    })
}

fn handle(call: HostCall) {
    let name = call.name();
    with_bridge(name, |bridge| bridge.handle(call));
}

/// Install the window host calls. Runs once per page; later boots reuse
/// the installed functions.
fn install_host_calls() -> Result<(), JsValue> {
    if HOST_CALLS_INSTALLED.with(Cell::get) {
        return Ok(());
    }
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    install(
        &window,
        "showEditor",
        Closure::<dyn Fn()>::new(|| handle(HostCall::ShowEditor)),
    )?;
    install(
        &window,
        "showStartPage",
        Closure::<dyn Fn()>::new(|| handle(HostCall::ShowStartPage)),
    )?;
    install(
        &window,
        "updateRecentFiles",
        Closure::<dyn Fn(JsValue)>::new(|files: JsValue| {
            match serde_wasm_bindgen::from_value::<RecentFilesList>(files) {
                Ok(files) => handle(HostCall::UpdateRecentFiles(files)),
                Err(e) => tracing::warn!("updateRecentFiles: invalid file list: {}", e),
            }
        }),
    )?;
    install(
        &window,
        "togglePreview",
        Closure::<dyn Fn(JsValue)>::new(|show: JsValue| {
            handle(HostCall::TogglePreview(show.is_truthy()))
        }),
    )?;
    install(
        &window,
        "setContent",
        Closure::<dyn Fn(JsValue)>::new(|markdown: JsValue| match markdown.as_string() {
            Some(markdown) => handle(HostCall::SetContent(markdown)),
            None => tracing::warn!("setContent: expected a string"),
        }),
    )?;
    install(
        &window,
        "getContent",
        Closure::<dyn Fn() -> String>::new(|| {
            with_bridge("getContent", |bridge| bridge.runtime().content())
                .flatten()
                .unwrap_or_default()
        }),
    )?;
    install(
        &window,
        "requestNewNote",
        Closure::<dyn Fn()>::new(|| {
            with_bridge("requestNewNote", |bridge| bridge.runtime().request_new_note());
        }),
    )?;

    HOST_CALLS_INSTALLED.with(|installed| installed.set(true));
    Ok(())
}

/// Expose `closure` as `window[name]` for the rest of the page's life.
fn install<T: ?Sized + WasmClosure>(
    window: &web_sys::Window,
    name: &str,
    closure: Closure<T>,
) -> Result<(), JsValue> {
    Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}
