//! Class-based visibility toggling.
//!
//! The preview pane is hidden by adding a class to the editor's container.
//! `install_preview_style` puts the rule giving that class its effect into
//! the document head:
//! ```css
//! .toastui-editor-defaultUI.preview-hidden .toastui-editor-md-preview {
//!     display: none !important;
//! }
//! ```

use notes_bridge_core::PageLayout;

use crate::dom;

/// Id of the `<style>` element holding the preview rule.
pub const PREVIEW_STYLE_ID: &str = "notes-bridge-preview-style";

/// Add `class` to the first element matching `selector` when `on`, remove
/// it otherwise.
///
/// Returns `false` when no element matches; nothing is changed then.
pub fn set_class_toggled(selector: &str, class: &str, on: bool) -> bool {
    let Some(element) = dom::query::<web_sys::Element>(selector) else {
        tracing::debug!(selector, "class toggle target not found");
        return false;
    };

    let class_list = element.class_list();
    let result = if on {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };

    if let Err(e) = result {
        tracing::warn!(selector, class, "class toggle failed: {:?}", e);
    }
    true
}

/// Install (or replace) the stylesheet rule that hides the preview pane for
/// `layout`.
pub fn install_preview_style(layout: &PageLayout) -> bool {
    install_stylesheet(PREVIEW_STYLE_ID, &layout.preview_hidden_css())
}

/// Put `css` into a `<style id="{id}">` in the document head, reusing the
/// element when it already exists.
///
/// Returns `false` when there is no document head to attach to.
pub fn install_stylesheet(id: &str, css: &str) -> bool {
    let Some(document) = dom::document() else {
        return false;
    };

    if let Some(existing) = document.get_element_by_id(id) {
        existing.set_text_content(Some(css));
        return true;
    }

    let Some(head) = document.head() else {
        tracing::warn!(id, "no document head; stylesheet not installed");
        return false;
    };

    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(e) => {
            tracing::warn!(id, "failed to create style element: {:?}", e);
            return false;
        }
    };
    style.set_id(id);
    style.set_text_content(Some(css));

    match head.append_child(&style) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(id, "failed to append style element: {:?}", e);
            false
        }
    }
}
