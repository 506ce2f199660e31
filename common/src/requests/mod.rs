//! Backend routes and response payloads used by the editor.

use serde::Deserialize;

/// Answer of `POST /preview`: the rendered artboard as an HTML fragment.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewResponse {
    pub html: String,
}

/// Answer of `POST /criar-comunicado` and `PUT /comunicado/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default)]
    pub id: Option<u32>,
    /// Human readable code such as `COM-2511281`.
    #[serde(default)]
    pub codigo: Option<String>,
}

/// Builds backend URLs relative to a configurable base.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn preview(&self) -> String {
        format!("{}/preview", self.base)
    }

    pub fn announcement(&self, id: u32) -> String {
        format!("{}/comunicado/{}", self.base, id)
    }

    pub fn create(&self) -> String {
        format!("{}/criar-comunicado", self.base)
    }

    pub fn history(&self) -> String {
        format!("{}/historico", self.base)
    }

    pub fn generate_image(&self, id: u32) -> String {
        format!("{}/gerar-imagem/{}", self.base, id)
    }
}

/// Reads the id of the announcement to edit from a page query string.
///
/// Accepts the string with or without the leading `?`; returns `None` when
/// `editar` is absent or not a number.
pub fn edit_id_from_query(query: &str) -> Option<u32> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "editar")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_base_without_double_slash() {
        let endpoints = Endpoints::new("https://intranet.example/");
        assert_eq!(endpoints.preview(), "https://intranet.example/preview");
        assert_eq!(
            endpoints.announcement(12),
            "https://intranet.example/comunicado/12"
        );

        let relative = Endpoints::new("");
        assert_eq!(relative.create(), "/criar-comunicado");
        assert_eq!(relative.history(), "/historico");
        assert_eq!(relative.generate_image(3), "/gerar-imagem/3");
    }

    #[test]
    fn edit_id_is_read_from_query() {
        assert_eq!(edit_id_from_query("?editar=42"), Some(42));
        assert_eq!(edit_id_from_query("tab=1&editar=7"), Some(7));
        assert_eq!(edit_id_from_query("?editar="), None);
        assert_eq!(edit_id_from_query("?editar=abc"), None);
        assert_eq!(edit_id_from_query(""), None);
    }

    #[test]
    fn save_response_without_id() {
        let response: SaveResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.id, None);
    }
}
