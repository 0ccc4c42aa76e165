//! WASM bindings for the notes bridge.
//!
//! Boots the page bridge that sits between the embedded Toast UI editor and
//! the native WebKit host:
//!
//! ```js
//! import init, { boot } from "notes-bridge-js";
//!
//! await init();
//! boot({ editor: { height: "100%" } });
//! // the host now drives the page through window.showEditor() etc.
//! ```

mod page;
mod toastui;
mod types;

pub use page::*;
pub use toastui::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_tracing();
}

fn init_tracing() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let reg = Registry::default().with(wasm_layer);

    // A host page that loads the module twice keeps the first subscriber.
    let _ = set_global_default(reg);
}
