//! Recent-files list elements.

use gloo_events::EventListener;

use notes_bridge_core::{ClickHandler, PageLayout, RecentFilesView};

use crate::dom;

/// Renders recent-file entries as `div`s inside the list container.
///
/// Click listeners are owned here; dropping them on `clear` detaches them
/// along with the discarded elements.
pub struct DomRecentList {
    list_id: String,
    entry_class: String,
    listeners: Vec<EventListener>,
}

impl DomRecentList {
    pub fn new(layout: &PageLayout) -> Self {
        Self {
            list_id: layout.recent_list_id.clone(),
            entry_class: layout.recent_entry_class.clone(),
            listeners: Vec::new(),
        }
    }

    /// Number of entries with a live click listener.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl RecentFilesView for DomRecentList {
    fn clear(&mut self) {
        self.listeners.clear();

        match dom::element_by_id::<web_sys::Element>(&self.list_id) {
            Some(list) => list.set_inner_html(""),
            None => tracing::debug!(id = %self.list_id, "recent list element missing"),
        }
    }

    fn push_entry(&mut self, label: &str, on_click: ClickHandler) {
        let Some(list) = dom::element_by_id::<web_sys::Element>(&self.list_id) else {
            return;
        };
        let Some(document) = dom::document() else {
            return;
        };

        let entry = match document.create_element("div") {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("failed to create recent file entry: {:?}", e);
                return;
            }
        };
        entry.set_class_name(&self.entry_class);
        entry.set_text_content(Some(label));

        let listener = EventListener::new(&entry, "click", move |_event| on_click());

        if let Err(e) = list.append_child(&entry) {
            tracing::warn!("failed to append recent file entry: {:?}", e);
            return;
        }
        self.listeners.push(listener);
    }
}
