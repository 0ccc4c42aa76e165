//! Start page / editor surface switching.

use web_sys::HtmlElement;

use notes_bridge_core::{PageLayout, Surface, ViewSurfaces};

use crate::dom;

/// Shows and hides the two page surfaces through their inline `display`.
///
/// The start page is a flex column when shown; the editor is a block.
#[derive(Debug, Clone)]
pub struct DomSurfaces {
    start_page_id: String,
    editor_id: String,
}

impl DomSurfaces {
    pub fn new(layout: &PageLayout) -> Self {
        Self {
            start_page_id: layout.start_page_id.clone(),
            editor_id: layout.editor_id.clone(),
        }
    }

    fn target(&self, surface: Surface) -> (&str, &'static str) {
        match surface {
            Surface::Start => (&self.start_page_id, "flex"),
            Surface::Editor => (&self.editor_id, "block"),
        }
    }
}

impl ViewSurfaces for DomSurfaces {
    fn set_visible(&self, surface: Surface, visible: bool) {
        let (id, shown) = self.target(surface);

        let Some(element) = dom::element_by_id::<HtmlElement>(id) else {
            tracing::debug!(id, "surface element missing; skipping");
            return;
        };

        let display = if visible { shown } else { "none" };
        if let Err(e) = element.style().set_property("display", display) {
            tracing::warn!(id, "failed to set display: {:?}", e);
        }
    }
}

/// Whether the element with `id` is currently displayed.
///
/// Reads the inline style only, which is all the bridge ever writes.
pub fn is_displayed(id: &str) -> Option<bool> {
    let element = dom::element_by_id::<HtmlElement>(id)?;
    let display = element.style().get_property_value("display").ok()?;
    Some(display != "none")
}
