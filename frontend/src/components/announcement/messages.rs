use common::form::LayoutPreset;
use common::model::announcement::{AnnouncementRecord, BodyAlignment};
use common::model::announcement_type::AnnouncementType;
use common::model::block::{Block, LayoutField};
use common::requests::SaveResponse;

/// Rich text commands offered by the body toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    BulletList,
    NumberedList,
}

impl FormatCommand {
    pub const ALL: [FormatCommand; 5] = [
        FormatCommand::Bold,
        FormatCommand::Italic,
        FormatCommand::Underline,
        FormatCommand::BulletList,
        FormatCommand::NumberedList,
    ];

    /// Name understood by `document.execCommand`.
    pub fn command(self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
            FormatCommand::BulletList => "insertUnorderedList",
            FormatCommand::NumberedList => "insertOrderedList",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FormatCommand::Bold => "format_bold",
            FormatCommand::Italic => "format_italic",
            FormatCommand::Underline => "format_underlined",
            FormatCommand::BulletList => "format_list_bulleted",
            FormatCommand::NumberedList => "format_list_numbered",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatCommand::Bold => "Negrito",
            FormatCommand::Italic => "Itálico",
            FormatCommand::Underline => "Sublinhado",
            FormatCommand::BulletList => "Lista",
            FormatCommand::NumberedList => "Lista numerada",
        }
    }
}

/// Collapsible sections of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Title,
    Content,
    Positions,
    Shortcuts,
}

#[derive(Clone)]
pub enum Msg {
    SelectType(Option<AnnouncementType>),
    ToggleCustomTitle(bool),
    SetCustomTitle(String),
    ResetCustomTitleLayout,
    SetSubtitle(String),
    CycleSubtitleCase,
    BodyInput,
    BodyTextSynced(String),
    PastePlainText(String),
    Format(FormatCommand),
    SetAlignment(BodyAlignment),
    SetFooter(String),
    SetAudience(String),
    SetLayoutField(Block, LayoutField, String),
    AdjustLayoutField(Block, LayoutField, i32),
    ResetBlock(Block),
    ApplyPreset(LayoutPreset),
    FillTestData,
    ClearForm,
    ToggleSection(Section),

    RefreshPreview,
    PreviewLoaded(String),
    PreviewFailed(String),
    CenterPreview,
    ZoomBy(f64),
    ZoomToFit,

    Loaded(Box<AnnouncementRecord>),
    LoadFailed(String),

    AutoSave,
    AutoSaved { fingerprint: String },
    AutoSaveFailed(String),
    HideIndicator,

    SaveDraft,
    DraftSaved { response: SaveResponse, fingerprint: String },
    DraftFailed(String),
    Submit,

    OpenAccessibility,
    CloseAccessibility,
    CopyAccessibility,
    Copied,
    ResetCopyLabel,
}
