//! Plain text helpers shared by the form and the accessibility description.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Reduces an HTML fragment to its text content.
///
/// Tags are removed and the common character entities are decoded. This is
/// only used on short, editor produced fragments, not arbitrary documents.
pub fn strip_html(input: &str) -> String {
    let without_tags = TAG_RE.replace_all(input, "");
    without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Escapes `&`, `<`, `>`, `"` and `'` so the text can be embedded in HTML.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Letter case the subtitle was last switched to with the case button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseState {
    /// As typed by the operator.
    #[default]
    Normal,
    Upper,
    Lower,
    Capitalized,
}

impl CaseState {
    /// Next state of the cycle; `Normal` is only left, never re-entered.
    pub fn next(self) -> Self {
        match self {
            CaseState::Normal => CaseState::Upper,
            CaseState::Upper => CaseState::Lower,
            CaseState::Lower => CaseState::Capitalized,
            CaseState::Capitalized => CaseState::Upper,
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            CaseState::Normal => text.to_string(),
            CaseState::Upper => text.to_uppercase(),
            CaseState::Lower => text.to_lowercase(),
            CaseState::Capitalized => capitalize_words(text),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaseState::Normal => "Aa",
            CaseState::Upper => "AA",
            CaseState::Lower => "aa",
            CaseState::Capitalized => "Aa",
        }
    }
}

/// Lowercases `text` and uppercases the first letter of every word.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_html_removes_tags_and_decodes_entities() {
        assert_eq!(
            strip_html("<p>Queda <b>AWS</b> &amp; Scout&nbsp;&lt;3</p>"),
            "Queda AWS & Scout <3"
        );
        assert_eq!(strip_html("sem tags"), "sem tags");
    }

    #[test]
    fn escape_html_escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">'y' & z</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;y&#39; &amp; z&lt;/a&gt;"
        );
    }

    #[test]
    fn case_cycle_never_returns_to_normal() {
        let mut state = CaseState::Normal;
        let mut seen = Vec::new();
        for _ in 0..5 {
            state = state.next();
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![
                CaseState::Upper,
                CaseState::Lower,
                CaseState::Capitalized,
                CaseState::Upper,
                CaseState::Lower
            ]
        );
    }

    #[test]
    fn capitalize_handles_accented_words() {
        assert_eq!(
            capitalize_words("INDISPONIBILIDADE DA aplicação"),
            "Indisponibilidade Da Aplicação"
        );
        assert_eq!(CaseState::Upper.apply("ação"), "AÇÃO");
    }
}
