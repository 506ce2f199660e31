//! "#ParaTodosVerem" image description.
//!
//! Announcements are published as images, so the editor offers a text
//! description to paste next to them. It lists the subtitle, body, footer and
//! audience in order, skipping empty ones.

use crate::form::text::{escape_html, strip_html};

pub const HASHTAG: &str = "#ParaTodosVerem";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityText {
    /// Formatted version shown in the dialog.
    pub html: String,
    /// Version copied to the clipboard.
    pub plain: String,
}

impl AccessibilityText {
    /// Builds the description, or `None` when every field is empty.
    ///
    /// Fields may contain markup; only their text content is kept.
    pub fn build(subtitle: &str, body_text: &str, footer: &str, audience: &str) -> Option<Self> {
        let parts: Vec<String> = [subtitle, body_text, footer, audience]
            .iter()
            .map(|f| strip_html(f.trim()))
            .collect();

        if parts.iter().all(|p| p.is_empty()) {
            return None;
        }

        let mut html = String::from(
            r#"<div style="font-family: Verdana, sans-serif; font-size: 8pt; text-align: center; line-height: 1.6;">"#,
        );
        html.push_str(&format!("<p><strong>{}</strong></p>", HASHTAG));
        for part in parts.iter().filter(|p| !p.is_empty()) {
            html.push_str(&format!("<p>{}</p>", escape_html(part)));
        }
        html.push_str("</div>");

        let mut lines = vec![HASHTAG.to_string()];
        lines.extend(parts.into_iter().filter(|p| !p.is_empty()));
        let plain = lines.join("\n");

        Some(Self { html, plain })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_produce_nothing() {
        assert_eq!(AccessibilityText::build(" ", "", "\n", ""), None);
    }

    #[test]
    fn plain_text_lists_non_empty_fields() {
        let text = AccessibilityText::build(
            "INDISPONIBILIDADE DO SCOUT",
            "Os times estão acompanhando.",
            "",
            "Enviado para um público específico.",
        )
        .unwrap();
        assert_eq!(
            text.plain,
            "#ParaTodosVerem\nINDISPONIBILIDADE DO SCOUT\nOs times estão acompanhando.\nEnviado para um público específico."
        );
        assert!(text.html.contains("<p><strong>#ParaTodosVerem</strong></p>"));
        assert!(text.html.contains("<p>Os times estão acompanhando.</p>"));
    }

    #[test]
    fn markup_is_stripped_then_escaped() {
        let text = AccessibilityText::build("<b>A</b> & B", "", "", "").unwrap();
        assert_eq!(text.plain, "#ParaTodosVerem\nA & B");
        assert!(text.html.contains("<p>A &amp; B</p>"));
    }
}
