//! notes-bridge-core: bridge logic between the notes editor page and its native host.
//!
//! This crate provides:
//! - Protocol types (`Signal`, `HostCall`, `FileDescriptor`)
//! - Platform traits for the editor, host channel, and page surfaces
//! - `BridgeRuntime` - editor ownership, handshake, change forwarding
//! - `ViewStateController` - start/editor surface switching
//! - `RecentFilesRenderer` - recent file list rebuilds and open requests
//! - `Bridge` - routes host calls to the components above
//!
//! Nothing here touches the DOM; `notes-bridge-browser` supplies the
//! browser implementations of the platform traits.

pub mod bridge;
pub mod config;
pub mod error;
pub mod platform;
pub mod protocol;
pub mod recent;
pub mod runtime;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod view;

pub use bridge::Bridge;
pub use config::{EditType, EditorConfig, PageLayout, PreviewStyle};
pub use error::{BridgeError, Result};
pub use platform::{
    ChangeHandler, ClickHandler, EditorCapability, EditorFactory, HostChannel, RecentFilesView,
    Surface, ViewSurfaces,
};
pub use protocol::{FileDescriptor, HostCall, RecentFilesList, Signal};
pub use recent::RecentFilesRenderer;
pub use runtime::BridgeRuntime;
pub use view::{ViewState, ViewStateController};
