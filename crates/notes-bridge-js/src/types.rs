//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use notes_bridge_browser::{EditorConfig, PageLayout};

/// Options accepted by `boot`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(default)]
pub struct BootOptions {
    #[tsify(type = "EditorOptions", optional)]
    pub editor: EditorConfig,
    #[tsify(type = "PageLayoutOptions", optional)]
    pub layout: PageLayout,
}

#[wasm_bindgen(typescript_custom_section)]
const TS_TYPES: &'static str = r##"
export interface EditorOptions {
    /** CSS selector of the mount element. Defaults to "#editor". */
    mount?: string;
    height?: string;
    initialEditType?: "markdown" | "wysiwyg";
    previewStyle?: "vertical" | "tab";
    hideModeSwitch?: boolean;
    hideToolbar?: boolean;
    usageStatistics?: boolean;
    initialValue?: string;
}

export interface PageLayoutOptions {
    startPageId?: string;
    editorId?: string;
    recentListId?: string;
    recentEntryClass?: string;
    previewContainerSelector?: string;
    previewHiddenClass?: string;
    previewPaneSelector?: string;
}

export interface RecentFile {
    name: string;
    path: string;
}

declare global {
    interface Window {
        /** The live Toast UI editor, once booted. */
        editor?: unknown;
        showEditor(): void;
        showStartPage(): void;
        updateRecentFiles(files: RecentFile[]): void;
        togglePreview(show: boolean): void;
        setContent(markdown: string): void;
        getContent(): string;
        requestNewNote(): void;
    }
}
"##;
