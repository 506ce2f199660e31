//! Derived figures shown in the form and preview headers.

use num_format::{Locale, ToFormattedString};

/// Average reading speed used for the reading time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Counters displayed under the body editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyStats {
    /// Characters of the trimmed text, spaces included.
    pub chars: usize,
    pub words: usize,
    /// Estimated minutes, rounded up; zero for an empty body.
    pub read_minutes: usize,
}

impl BodyStats {
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        let words = trimmed.split_whitespace().count();
        Self {
            chars: trimmed.chars().count(),
            words,
            read_minutes: words.div_ceil(WORDS_PER_MINUTE),
        }
    }

    pub fn chars_label(&self) -> String {
        format!("{} caracteres", format_count(self.chars))
    }

    pub fn words_label(&self) -> String {
        format!("{} palavras", format_count(self.words))
    }

    /// `None` when there is nothing to read.
    pub fn read_time_label(&self) -> Option<String> {
        (self.read_minutes > 0).then(|| format!("~{} min leitura", self.read_minutes))
    }
}

/// Formats a count with Brazilian digit grouping (`1.234`).
pub fn format_count(value: usize) -> String {
    value.to_formatted_string(&Locale::pt)
}

/// Color level of a length counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Limit,
}

impl CounterLevel {
    /// Warning from 80 % of `max`, limit once `max` is reached.
    pub fn for_length(length: usize, max: usize) -> Self {
        if length >= max {
            CounterLevel::Limit
        } else if length * 5 >= max * 4 {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            CounterLevel::Normal => "#64748b",
            CounterLevel::Warning => "#f59e0b",
            CounterLevel::Limit => "#ef4444",
        }
    }
}

/// Persistence state shown in the form header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    New,
    Saved,
    Editing,
}

impl FormStatus {
    pub fn from_state(edit_mode: bool, id: Option<u32>) -> Self {
        match (edit_mode, id) {
            (true, Some(_)) => FormStatus::Editing,
            (false, Some(_)) => FormStatus::Saved,
            (_, None) => FormStatus::New,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormStatus::New => "Novo",
            FormStatus::Saved => "Salvo",
            FormStatus::Editing => "Editando",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            FormStatus::New => "#64748b",
            FormStatus::Saved => "#10b981",
            FormStatus::Editing => "#6366f1",
        }
    }
}

/// Share of the text fields that have content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub percent: u32,
}

impl Progress {
    pub fn from_fields(fields: &[&str]) -> Self {
        if fields.is_empty() {
            return Self { percent: 0 };
        }
        let filled = fields.iter().filter(|f| !f.trim().is_empty()).count();
        let percent = (filled as f64 / fields.len() as f64 * 100.0).round() as u32;
        Self { percent }
    }

    pub fn color(self) -> &'static str {
        match self.percent {
            100 => "#10b981",
            50..=99 => "#f59e0b",
            _ => "#64748b",
        }
    }
}

/// State of the last preview render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStatus {
    Empty,
    Updated,
    Error,
}

impl PreviewStatus {
    pub fn icon(self) -> &'static str {
        match self {
            PreviewStatus::Empty => "○",
            PreviewStatus::Updated => "✓",
            PreviewStatus::Error => "⚠",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PreviewStatus::Empty => "Vazio",
            PreviewStatus::Updated => "Atualizado",
            PreviewStatus::Error => "Erro",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PreviewStatus::Empty => "#94a3b8",
            PreviewStatus::Updated => "#10b981",
            PreviewStatus::Error => "#ef4444",
        }
    }
}

/// Short description of how much content the preview holds.
pub fn content_info(title: &str, subtitle: &str, body_text: &str) -> String {
    let body = body_text.trim();
    if !body.is_empty() {
        let words = body.split_whitespace().count();
        let suffix = if words == 1 { "" } else { "s" };
        format!("{} palavra{}", words, suffix)
    } else if !title.is_empty() && !subtitle.is_empty() {
        "Completo".to_string()
    } else if !title.is_empty() || !subtitle.is_empty() {
        "Parcial".to_string()
    } else {
        "Vazio".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_stats_count_trimmed_text() {
        let stats = BodyStats::from_text("  Informamos que   estamos\ncom impacto.  ");
        assert_eq!(stats.words, 5);
        assert_eq!(stats.chars, "Informamos que   estamos\ncom impacto.".chars().count());
        assert_eq!(stats.read_minutes, 1);
        assert_eq!(stats.read_time_label().as_deref(), Some("~1 min leitura"));
    }

    #[test]
    fn empty_body_hides_read_time() {
        let stats = BodyStats::from_text("   ");
        assert_eq!(stats, BodyStats::default());
        assert_eq!(stats.read_time_label(), None);
    }

    #[test]
    fn reading_time_rounds_up() {
        let text = vec!["palavra"; 201].join(" ");
        assert_eq!(BodyStats::from_text(&text).read_minutes, 2);
    }

    #[test]
    fn counts_use_brazilian_grouping() {
        assert_eq!(format_count(1234), "1.234");
        assert_eq!(format_count(12), "12");
    }

    #[test]
    fn counter_levels() {
        assert_eq!(CounterLevel::for_length(15, 20), CounterLevel::Normal);
        assert_eq!(CounterLevel::for_length(16, 20), CounterLevel::Warning);
        assert_eq!(CounterLevel::for_length(20, 20), CounterLevel::Limit);
    }

    #[test]
    fn form_status_from_state() {
        assert_eq!(FormStatus::from_state(false, None), FormStatus::New);
        assert_eq!(FormStatus::from_state(true, None), FormStatus::New);
        assert_eq!(FormStatus::from_state(false, Some(3)), FormStatus::Saved);
        assert_eq!(FormStatus::from_state(true, Some(3)), FormStatus::Editing);
    }

    #[test]
    fn progress_rounds_percentage() {
        assert_eq!(Progress::from_fields(&["a", "", " ", "b", "c"]).percent, 60);
        assert_eq!(Progress::from_fields(&["a", "b", "c"]).percent, 100);
        assert_eq!(Progress::from_fields(&["a", "", ""]).percent, 33);
        assert_eq!(Progress { percent: 50 }.color(), "#f59e0b");
    }

    #[test]
    fn content_info_prefers_body_words() {
        assert_eq!(content_info("T", "S", "uma"), "1 palavra");
        assert_eq!(content_info("", "", "duas palavras"), "2 palavras");
        assert_eq!(content_info("T", "S", ""), "Completo");
        assert_eq!(content_info("T", "", " "), "Parcial");
        assert_eq!(content_info("", "", ""), "Vazio");
    }
}
