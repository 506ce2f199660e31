//! Reads the editor configuration embedded in the page.
//!
//! The host page may carry `<script type="application/json" id="editor-config">`
//! with any subset of the `EditorConfig` fields.

use common::config::EditorConfig;

const CONFIG_ELEMENT_ID: &str = "editor-config";

pub fn load_editor_config() -> EditorConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match EditorConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                gloo_console::warn!("invalid editor configuration, using defaults:", err);
                EditorConfig::default()
            }
        },
        _ => EditorConfig::default(),
    }
}

/// Id of the announcement to edit, from `?editar=<id>`.
pub fn edit_id_from_location() -> Option<u32> {
    let search = web_sys::window()?.location().search().ok()?;
    common::requests::edit_id_from_query(&search)
}
