//! Browser DOM layer for the notes bridge.
//!
//! This crate implements the platform traits of `notes-bridge-core` against
//! the page DOM and the WebKit script message handlers. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `host`: `window.webkit.messageHandlers` host channel
//! - `surfaces`: start page / editor display switching
//! - `recent_list`: recent-files list elements and click listeners
//! - `visibility`: class toggling and the stylesheet rule for the preview pane
//! - `dom`: element lookup helpers
//!
//! # Re-exports
//!
//! This crate re-exports `notes-bridge-core` for convenience, so consumers
//! only need to depend on `notes-bridge-browser`.

// Re-export core crate
pub use notes_bridge_core;
pub use notes_bridge_core::*;

pub mod dom;
pub mod host;
pub mod recent_list;
pub mod surfaces;
pub mod visibility;

pub use host::WebkitHost;
pub use recent_list::DomRecentList;
pub use surfaces::DomSurfaces;
pub use visibility::{install_preview_style, install_stylesheet, set_class_toggled};
