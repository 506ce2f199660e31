//! Announcement types and the title they produce.
//!
//! Four known types each have their own background template (ids 1 to 4) and
//! a larger default title. Anything else is a custom title drawn on
//! template 5 with freely positioned text.

use crate::model::block::BlockLayout;

/// Template used when no type is selected.
pub const DEFAULT_TEMPLATE_ID: u32 = 1;

/// Template of announcements whose title is free text.
pub const CUSTOM_TEMPLATE_ID: u32 = 5;

/// Maximum length accepted for a custom title.
pub const CUSTOM_TITLE_MAX_CHARS: usize = 20;

/// Title layout shared by all known types.
pub const PRESET_TITLE_LAYOUT: BlockLayout = BlockLayout::new(60, 120, 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnouncementType {
    Unavailability,
    Instability,
    Degradation,
    Normalization,
}

impl AnnouncementType {
    pub const ALL: [AnnouncementType; 4] = [
        AnnouncementType::Unavailability,
        AnnouncementType::Instability,
        AnnouncementType::Degradation,
        AnnouncementType::Normalization,
    ];

    /// Title text stored on the record for this type.
    pub const fn title(self) -> &'static str {
        match self {
            AnnouncementType::Unavailability => "Indisponibilidade",
            AnnouncementType::Instability => "Instabilidade",
            AnnouncementType::Degradation => "Degradação",
            AnnouncementType::Normalization => "Normalização",
        }
    }

    pub const fn template_id(self) -> u32 {
        match self {
            AnnouncementType::Unavailability => 1,
            AnnouncementType::Instability => 2,
            AnnouncementType::Degradation => 3,
            AnnouncementType::Normalization => 4,
        }
    }

    pub const fn title_layout(self) -> BlockLayout {
        PRESET_TITLE_LAYOUT
    }

    /// CSS class applied to the type selector while this type is selected.
    pub const fn css_class(self) -> &'static str {
        match self {
            AnnouncementType::Unavailability => "alert-indisponibilidade",
            AnnouncementType::Instability => "alert-instabilidade",
            AnnouncementType::Degradation => "alert-degradacao",
            AnnouncementType::Normalization => "success-normalizacao",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            AnnouncementType::Unavailability => "🚨",
            AnnouncementType::Instability => "⚠️",
            AnnouncementType::Degradation => "⚡",
            AnnouncementType::Normalization => "✅",
        }
    }

    /// Exact match against the selector value.
    pub fn from_title(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.title() == value)
    }

    /// Finds the known type mentioned in a stored title, if any.
    ///
    /// Stored titles are matched by containment so that a record saved as a
    /// known type keeps its type when loaded back.
    pub fn classify(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| title.contains(t.title()))
    }
}

/// Where the title of the announcement comes from.
///
/// The selector and the custom text field are mutually exclusive: switching
/// from one to the other discards the previous value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleSource {
    Preset(Option<AnnouncementType>),
    Custom(String),
}

impl Default for TitleSource {
    fn default() -> Self {
        TitleSource::Preset(None)
    }
}

impl TitleSource {
    pub fn is_custom(&self) -> bool {
        matches!(self, TitleSource::Custom(_))
    }

    pub fn selected_type(&self) -> Option<AnnouncementType> {
        match self {
            TitleSource::Preset(selected) => *selected,
            TitleSource::Custom(_) => None,
        }
    }

    /// Title text sent to the backend.
    pub fn title(&self) -> &str {
        match self {
            TitleSource::Preset(Some(t)) => t.title(),
            TitleSource::Preset(None) => "",
            TitleSource::Custom(text) => text,
        }
    }

    /// Template matching the current title choice.
    pub fn template_id(&self) -> u32 {
        match self {
            TitleSource::Preset(Some(t)) => t.template_id(),
            TitleSource::Preset(None) => DEFAULT_TEMPLATE_ID,
            TitleSource::Custom(_) => CUSTOM_TEMPLATE_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_map_to_templates_one_to_four() {
        let ids: Vec<u32> = AnnouncementType::ALL
            .iter()
            .map(|t| t.template_id())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        for t in AnnouncementType::ALL {
            assert_eq!(t.title_layout(), BlockLayout::new(60, 120, 60));
        }
    }

    #[test]
    fn title_source_picks_template() {
        assert_eq!(TitleSource::default().template_id(), DEFAULT_TEMPLATE_ID);
        assert_eq!(
            TitleSource::Preset(Some(AnnouncementType::Degradation)).template_id(),
            3
        );
        assert_eq!(
            TitleSource::Custom("Manutenção".into()).template_id(),
            CUSTOM_TEMPLATE_ID
        );
    }

    #[test]
    fn classify_matches_by_containment() {
        assert_eq!(
            AnnouncementType::classify("Normalização"),
            Some(AnnouncementType::Normalization)
        );
        assert_eq!(
            AnnouncementType::classify("Instabilidade parcial"),
            Some(AnnouncementType::Instability)
        );
        assert_eq!(AnnouncementType::classify("Manutenção programada"), None);
        assert_eq!(AnnouncementType::from_title("Instabilidade parcial"), None);
    }

    #[test]
    fn custom_source_has_no_selected_type() {
        let source = TitleSource::Custom("Aviso".into());
        assert!(source.is_custom());
        assert_eq!(source.selected_type(), None);
        assert_eq!(source.title(), "Aviso");
    }
}
