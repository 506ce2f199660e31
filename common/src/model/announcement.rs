//! Wire representation of an announcement (comunicado).
//!
//! `Announcement` is the flat payload the editor sends to the backend for
//! previews, drafts and final submission. `AnnouncementRecord` is what the
//! backend answers when an existing announcement is opened for editing; it is
//! more lenient because older records may have null text fields and the
//! backend does not echo every size field.

use serde::{Deserialize, Serialize};

use crate::model::block::{Block, BlockLayout};

/// Lifecycle state of a stored announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnouncementStatus {
    #[serde(rename = "rascunho")]
    Draft,
    #[serde(rename = "enviado")]
    Sent,
}

/// Horizontal alignment of the body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyAlignment {
    Left,
    Center,
    Right,
    #[default]
    Justify,
}

impl BodyAlignment {
    pub const ALL: [BodyAlignment; 4] = [
        BodyAlignment::Left,
        BodyAlignment::Center,
        BodyAlignment::Right,
        BodyAlignment::Justify,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BodyAlignment::Left => "left",
            BodyAlignment::Center => "center",
            BodyAlignment::Right => "right",
            BodyAlignment::Justify => "justify",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }

    pub const fn icon(self) -> &'static str {
        match self {
            BodyAlignment::Left => "format_align_left",
            BodyAlignment::Center => "format_align_center",
            BodyAlignment::Right => "format_align_right",
            BodyAlignment::Justify => "format_align_justify",
        }
    }
}

/// Payload of `POST /preview`, `POST /criar-comunicado` and `PUT /comunicado/{id}`.
///
/// `status` is left out of preview requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub template_id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "subtitulo")]
    pub subtitle: String,
    /// Rich text body as HTML.
    #[serde(rename = "corpo")]
    pub body: String,
    #[serde(rename = "rodape")]
    pub footer: String,
    #[serde(rename = "publico_alvo")]
    pub audience: String,

    #[serde(rename = "tipo_pos_x")]
    pub title_pos_x: i32,
    #[serde(rename = "tipo_pos_y")]
    pub title_pos_y: i32,
    #[serde(rename = "tipo_tamanho")]
    pub title_size: i32,
    #[serde(rename = "subtitulo_pos_x")]
    pub subtitle_pos_x: i32,
    #[serde(rename = "subtitulo_pos_y")]
    pub subtitle_pos_y: i32,
    #[serde(rename = "subtitulo_tamanho")]
    pub subtitle_size: i32,
    #[serde(rename = "corpo_pos_x")]
    pub body_pos_x: i32,
    #[serde(rename = "corpo_pos_y")]
    pub body_pos_y: i32,
    #[serde(rename = "corpo_tamanho")]
    pub body_size: i32,
    #[serde(rename = "corpo_alinhamento")]
    pub body_alignment: BodyAlignment,
    #[serde(rename = "rodape_pos_x")]
    pub footer_pos_x: i32,
    #[serde(rename = "rodape_pos_y")]
    pub footer_pos_y: i32,
    #[serde(rename = "rodape_tamanho")]
    pub footer_size: i32,
    #[serde(rename = "publico_alvo_pos_x")]
    pub audience_pos_x: i32,
    #[serde(rename = "publico_alvo_pos_y")]
    pub audience_pos_y: i32,
    #[serde(rename = "publico_alvo_tamanho")]
    pub audience_size: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AnnouncementStatus>,
}

impl Announcement {
    /// Same payload with the given status attached.
    pub fn with_status(mut self, status: AnnouncementStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Stable fingerprint of the payload, used to detect unsaved changes.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        format!("{:x}", md5::compute(json))
    }
}

/// Announcement as returned by `GET /comunicado/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnnouncementRecord {
    pub id: u32,
    #[serde(rename = "codigo_unico")]
    pub code: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "subtitulo", default)]
    pub subtitle: Option<String>,
    #[serde(rename = "corpo", default)]
    pub body: Option<String>,
    #[serde(rename = "rodape", default)]
    pub footer: Option<String>,
    #[serde(rename = "publico_alvo", default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub template_id: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "tipo_pos_x", default)]
    pub title_pos_x: Option<i32>,
    #[serde(rename = "tipo_pos_y", default)]
    pub title_pos_y: Option<i32>,
    #[serde(rename = "tipo_tamanho", default)]
    pub title_size: Option<i32>,
    #[serde(rename = "subtitulo_pos_x", default)]
    pub subtitle_pos_x: Option<i32>,
    #[serde(rename = "subtitulo_pos_y", default)]
    pub subtitle_pos_y: Option<i32>,
    #[serde(rename = "subtitulo_tamanho", default)]
    pub subtitle_size: Option<i32>,
    #[serde(rename = "corpo_pos_x", default)]
    pub body_pos_x: Option<i32>,
    #[serde(rename = "corpo_pos_y", default)]
    pub body_pos_y: Option<i32>,
    #[serde(rename = "corpo_tamanho", default)]
    pub body_size: Option<i32>,
    #[serde(rename = "corpo_alinhamento", default)]
    pub body_alignment: Option<String>,
    #[serde(rename = "rodape_pos_x", default)]
    pub footer_pos_x: Option<i32>,
    #[serde(rename = "rodape_pos_y", default)]
    pub footer_pos_y: Option<i32>,
    #[serde(rename = "rodape_tamanho", default)]
    pub footer_size: Option<i32>,
    #[serde(rename = "publico_alvo_pos_x", default)]
    pub audience_pos_x: Option<i32>,
    #[serde(rename = "publico_alvo_pos_y", default)]
    pub audience_pos_y: Option<i32>,
    #[serde(rename = "publico_alvo_tamanho", default)]
    pub audience_size: Option<i32>,

    #[serde(rename = "criado_por", default)]
    pub created_by: Option<String>,
    #[serde(rename = "criado_em", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

impl AnnouncementRecord {
    /// Merges the stored layout of `block` over `current`.
    ///
    /// Missing values keep what the form already shows. The audience block
    /// falls back to its default position instead, since records created
    /// before it could be positioned carry no value for it.
    pub fn layout_over(&self, block: Block, current: BlockLayout) -> BlockLayout {
        let (x, y, size) = match block {
            Block::Type | Block::CustomType => {
                (self.title_pos_x, self.title_pos_y, self.title_size)
            }
            Block::Subtitle => (self.subtitle_pos_x, self.subtitle_pos_y, self.subtitle_size),
            Block::Body => (self.body_pos_x, self.body_pos_y, self.body_size),
            Block::Footer => (self.footer_pos_x, self.footer_pos_y, self.footer_size),
            Block::Audience => {
                let default = Block::Audience.default_layout();
                (
                    self.audience_pos_x.or(Some(default.pos_x)),
                    self.audience_pos_y.or(Some(default.pos_y)),
                    self.audience_size,
                )
            }
        };
        BlockLayout {
            pos_x: x.unwrap_or(current.pos_x),
            pos_y: y.unwrap_or(current.pos_y),
            size: size.unwrap_or(current.size),
        }
    }

    pub fn alignment(&self) -> BodyAlignment {
        self.body_alignment
            .as_deref()
            .and_then(BodyAlignment::parse)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_uses_portuguese_values() {
        assert_eq!(
            serde_json::to_value(AnnouncementStatus::Draft).unwrap(),
            json!("rascunho")
        );
        assert_eq!(
            serde_json::to_value(AnnouncementStatus::Sent).unwrap(),
            json!("enviado")
        );
    }

    #[test]
    fn record_tolerates_nulls_and_missing_sizes() {
        let record: AnnouncementRecord = serde_json::from_value(json!({
            "id": 7,
            "codigo_unico": "COM-2511281",
            "titulo": "Instabilidade",
            "subtitulo": null,
            "corpo": "<b>oi</b>",
            "rodape": null,
            "publico_alvo": null,
            "template_id": 2,
            "status": "rascunho",
            "tipo_pos_x": 60,
            "tipo_pos_y": 120,
            "subtitulo_pos_x": 0,
            "subtitulo_pos_y": 430,
            "corpo_pos_x": 60,
            "corpo_pos_y": 510,
            "corpo_alinhamento": "center",
            "rodape_pos_x": 60,
            "rodape_pos_y": 1000,
            "publico_alvo_pos_x": null,
            "publico_alvo_pos_y": null,
            "criado_por": "Sistema",
            "criado_em": "2025-11-28T10:00:00",
            "tags": ""
        }))
        .unwrap();

        assert_eq!(record.subtitle, None);
        assert_eq!(record.title_size, None);
        assert_eq!(record.alignment(), BodyAlignment::Center);

        let title = record.layout_over(Block::Type, BlockLayout::new(1, 2, 60));
        assert_eq!(title, BlockLayout::new(60, 120, 60));

        let audience = record.layout_over(Block::Audience, BlockLayout::new(5, 5, 18));
        assert_eq!(audience, BlockLayout::new(60, 1120, 18));
    }

    #[test]
    fn unknown_alignment_falls_back_to_justify() {
        let record: AnnouncementRecord = serde_json::from_value(json!({
            "id": 1,
            "codigo_unico": "COM-1",
            "titulo": "Aviso",
            "corpo_alinhamento": "diagonal"
        }))
        .unwrap();
        assert_eq!(record.alignment(), BodyAlignment::Justify);
    }
}
