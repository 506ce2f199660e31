//! Editor configuration.
//!
//! The page may embed a JSON object to tune timings and the backend location;
//! every field is optional and falls back to the values below.

use serde::Deserialize;

use crate::requests::Endpoints;

pub const DEFAULT_FOOTER: &str =
    "Em caso de dúvidas consulte o Service Desk no telefone 3003-7000.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Prefix of every backend route. Empty means same origin.
    pub api_base: String,
    pub preview_debounce_ms: u32,
    pub autosave_delay_ms: u32,
    /// How long a success or error indicator stays visible.
    pub indicator_hide_ms: u32,
    /// Delay between a manual draft save and the move to the history page.
    pub redirect_delay_ms: u32,
    pub default_footer: String,
    pub zoom_step: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            preview_debounce_ms: 800,
            autosave_delay_ms: 10_000,
            indicator_hide_ms: 3_000,
            redirect_delay_ms: 2_000,
            default_footer: DEFAULT_FOOTER.to_string(),
            zoom_step: 0.1,
        }
    }
}

impl EditorConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{"preview_debounce_ms": 300}"#).unwrap();
        assert_eq!(config.preview_debounce_ms, 300);
        assert_eq!(config.autosave_delay_ms, 10_000);
        assert_eq!(config.default_footer, DEFAULT_FOOTER);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(EditorConfig::from_json("{not json").is_err());
    }

    #[test]
    fn endpoints_use_api_base() {
        let config = EditorConfig {
            api_base: "/app".into(),
            ..EditorConfig::default()
        };
        assert_eq!(config.endpoints().preview(), "/app/preview");
    }
}
