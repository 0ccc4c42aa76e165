//! Host channel over WebKit script message handlers.
//!
//! The native side registers one handler per message name; each appears as
//! `window.webkit.messageHandlers.<name>` with a `postMessage` method.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use notes_bridge_core::HostChannel;

/// Posts bridge signals to `window.webkit.messageHandlers`.
///
/// A handler the host did not register, or no `webkit` object at all when
/// the page runs in a plain browser, makes the post a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebkitHost;

impl WebkitHost {
    pub fn new() -> Self {
        Self
    }

    /// Whether the host registered a handler for `name`.
    pub fn has_handler(&self, name: &str) -> bool {
        lookup_handler(name).is_some()
    }
}

impl HostChannel for WebkitHost {
    fn send(&self, name: &str, payload: Option<&str>) {
        let Some((handler, post)) = lookup_handler(name) else {
            tracing::debug!(name, "no host handler registered; skipping");
            return;
        };

        // postMessage needs an argument; payload-less signals send "".
        let payload = JsValue::from_str(payload.unwrap_or(""));
        match post.call1(&handler, &payload) {
            Ok(_) => tracing::debug!(name, "posted to host"),
            Err(e) => tracing::warn!(name, "postMessage failed: {:?}", e),
        }
    }
}

fn lookup_handler(name: &str) -> Option<(JsValue, Function)> {
    let window = web_sys::window()?;
    let webkit = get_object(&window, "webkit")?;
    let handlers = get_object(&webkit, "messageHandlers")?;
    let handler = get_object(&handlers, name)?;
    let post = Reflect::get(&handler, &JsValue::from_str("postMessage"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((handler, post))
}

fn get_object(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| value.is_object())
}
