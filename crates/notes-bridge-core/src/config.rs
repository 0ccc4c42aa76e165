//! Editor and page configuration.
//!
//! Both structs deserialize from partial objects: any field the host page
//! leaves out takes its default.

use serde::{Deserialize, Serialize};

/// Initial editing mode of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditType {
    #[default]
    Markdown,
    Wysiwyg,
}

/// Layout of the markdown preview pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStyle {
    /// Source and preview side by side.
    #[default]
    Vertical,
    /// Source and preview on separate tabs.
    Tab,
}

/// Options handed once to the editor constructor.
///
/// Serializes to the editor's own option names so the browser layer can
/// pass it through unchanged. `mount` is resolved separately and never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// CSS selector of the element the editor mounts into.
    #[serde(skip_serializing)]
    pub mount: String,
    pub height: String,
    pub initial_edit_type: EditType,
    pub preview_style: PreviewStyle,
    pub hide_mode_switch: bool,
    pub hide_toolbar: bool,
    /// Telemetry opt-in. Off unless the host asks for it.
    pub usage_statistics: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            mount: "#editor".to_string(),
            height: "100%".to_string(),
            initial_edit_type: EditType::Markdown,
            preview_style: PreviewStyle::Vertical,
            hide_mode_switch: false,
            hide_toolbar: false,
            usage_statistics: false,
            initial_value: None,
        }
    }
}

/// Element ids and classes the browser layer targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageLayout {
    pub start_page_id: String,
    pub editor_id: String,
    pub recent_list_id: String,
    pub recent_entry_class: String,
    pub preview_container_selector: String,
    pub preview_hidden_class: String,
    /// The editor's preview pane inside the container.
    pub preview_pane_selector: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            start_page_id: "start-page".to_string(),
            editor_id: "editor".to_string(),
            recent_list_id: "recent-files-list".to_string(),
            recent_entry_class: "recent-file".to_string(),
            preview_container_selector: ".toastui-editor-defaultUI".to_string(),
            preview_hidden_class: "preview-hidden".to_string(),
            preview_pane_selector: ".toastui-editor-md-preview".to_string(),
        }
    }
}

impl PageLayout {
    /// Stylesheet rule hiding the preview pane while the container carries
    /// the hidden class.
    pub fn preview_hidden_css(&self) -> String {
        format!(
            "{}.{} {} {{ display: none !important; }}",
            self.preview_container_selector, self.preview_hidden_class, self.preview_pane_selector
        )
    }
}
