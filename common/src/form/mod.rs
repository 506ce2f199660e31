//! Editor form state.
//!
//! `FormState` is the single source of truth for every field of the editor.
//! The view renders from it and input events write into it; collecting it
//! produces the `Announcement` payload sent to the backend.
//!
//! Besides plain field setters it implements the operations that touch
//! several fields at once: choosing a type (which also picks the template and
//! the title layout), switching to a custom title, layout presets, loading a
//! stored record and clearing the form.

pub mod accessibility;
pub mod stats;
pub mod text;

use crate::model::announcement::{Announcement, AnnouncementRecord, BodyAlignment};
use crate::model::announcement_type::{
    AnnouncementType, TitleSource, CUSTOM_TEMPLATE_ID, CUSTOM_TITLE_MAX_CHARS, PRESET_TITLE_LAYOUT,
};
use crate::model::block::{Block, BlockLayout, LayoutField};
use stats::{BodyStats, CounterLevel, FormStatus, Progress};
use text::{strip_html, CaseState};

/// Layout of every block, including both title variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layouts {
    pub title: BlockLayout,
    pub custom_title: BlockLayout,
    pub subtitle: BlockLayout,
    pub body: BlockLayout,
    pub footer: BlockLayout,
    pub audience: BlockLayout,
}

impl Default for Layouts {
    fn default() -> Self {
        Self {
            title: Block::Type.default_layout(),
            custom_title: Block::CustomType.default_layout(),
            subtitle: Block::Subtitle.default_layout(),
            body: Block::Body.default_layout(),
            footer: Block::Footer.default_layout(),
            audience: Block::Audience.default_layout(),
        }
    }
}

impl Layouts {
    pub fn get(&self, block: Block) -> BlockLayout {
        match block {
            Block::Type => self.title,
            Block::CustomType => self.custom_title,
            Block::Subtitle => self.subtitle,
            Block::Body => self.body,
            Block::Footer => self.footer,
            Block::Audience => self.audience,
        }
    }

    pub fn get_mut(&mut self, block: Block) -> &mut BlockLayout {
        match block {
            Block::Type => &mut self.title,
            Block::CustomType => &mut self.custom_title,
            Block::Subtitle => &mut self.subtitle,
            Block::Body => &mut self.body,
            Block::Footer => &mut self.footer,
            Block::Audience => &mut self.audience,
        }
    }
}

/// One-click arrangements of the blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPreset {
    /// Aligns every block on the left margin.
    Center,
    /// Restores every block to its default layout.
    Reset,
    /// Pulls the lower blocks up.
    Compact,
    /// Spreads the lower blocks apart.
    Spaced,
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 4] = [
        LayoutPreset::Center,
        LayoutPreset::Reset,
        LayoutPreset::Compact,
        LayoutPreset::Spaced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LayoutPreset::Center => "Centralizar",
            LayoutPreset::Reset => "Resetar",
            LayoutPreset::Compact => "Compacto",
            LayoutPreset::Spaced => "Espaçado",
        }
    }
}

const TEST_SUBTITLE: &str = "INDISPONIBILIDADE DO SCOUT";
const TEST_BODY: &str = "Informamos que estamos com um impacto global na AWS, impactando os serviços do Scout.<br><br>Os times estão acompanhando, e assim que normalizar informaremos.";
const TEST_AUDIENCE: &str = "Enviado para um público específico.";

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Id of the stored record, once one exists.
    pub id: Option<u32>,
    /// Code of the stored record (`COM-…`), shown in the page title.
    pub code: Option<String>,
    /// True when the page was opened to edit an existing record.
    pub edit_mode: bool,
    pub template_id: u32,
    pub title: TitleSource,
    pub subtitle: String,
    pub subtitle_case: CaseState,
    /// Body as HTML, the way the rich text editor holds it.
    pub body_html: String,
    /// Visible text of the body, used for statistics.
    pub body_text: String,
    pub footer: String,
    pub audience: String,
    pub layouts: Layouts,
    pub alignment: BodyAlignment,
}

impl FormState {
    pub fn new(default_footer: &str) -> Self {
        Self {
            id: None,
            code: None,
            edit_mode: false,
            template_id: TitleSource::default().template_id(),
            title: TitleSource::default(),
            subtitle: String::new(),
            subtitle_case: CaseState::Normal,
            body_html: String::new(),
            body_text: String::new(),
            footer: default_footer.to_string(),
            audience: String::new(),
            layouts: Layouts::default(),
            alignment: BodyAlignment::default(),
        }
    }

    /// Layout currently used for the title block.
    pub fn active_title_layout(&self) -> BlockLayout {
        if self.title.is_custom() {
            self.layouts.custom_title
        } else {
            self.layouts.title
        }
    }

    /// Gathers the form into a payload without a status.
    pub fn collect(&self) -> Announcement {
        let title = self.active_title_layout();
        let l = &self.layouts;
        Announcement {
            template_id: self.template_id,
            title: self.title.title().to_string(),
            subtitle: self.subtitle.clone(),
            body: self.body_html.clone(),
            footer: self.footer.clone(),
            audience: self.audience.clone(),
            title_pos_x: title.pos_x,
            title_pos_y: title.pos_y,
            title_size: title.size,
            subtitle_pos_x: l.subtitle.pos_x,
            subtitle_pos_y: l.subtitle.pos_y,
            subtitle_size: l.subtitle.size,
            body_pos_x: l.body.pos_x,
            body_pos_y: l.body.pos_y,
            body_size: l.body.size,
            body_alignment: self.alignment,
            footer_pos_x: l.footer.pos_x,
            footer_pos_y: l.footer.pos_y,
            footer_size: l.footer.size,
            audience_pos_x: l.audience.pos_x,
            audience_pos_y: l.audience.pos_y,
            audience_size: l.audience.size,
            status: None,
        }
    }

    /// Selects a known type, or none, from the type selector.
    ///
    /// Picks the matching template and the preset title layout. Ignored while
    /// a custom title is in use.
    pub fn select_type(&mut self, selected: Option<AnnouncementType>) {
        if self.title.is_custom() {
            return;
        }
        self.title = TitleSource::Preset(selected);
        self.template_id = self.title.template_id();
        self.layouts.title = selected
            .map(AnnouncementType::title_layout)
            .unwrap_or(PRESET_TITLE_LAYOUT);
    }

    /// Switches between the type selector and the custom title.
    pub fn set_custom_title_enabled(&mut self, enabled: bool) {
        match (enabled, self.title.is_custom()) {
            (true, false) => {
                self.title = TitleSource::Custom(String::new());
                self.template_id = CUSTOM_TEMPLATE_ID;
            }
            (false, true) => {
                self.title = TitleSource::Preset(None);
                self.select_type(None);
            }
            _ => {}
        }
    }

    /// Sets the custom title text, cut to the maximum length.
    pub fn set_custom_title(&mut self, text: &str) {
        if self.title.is_custom() {
            self.title = TitleSource::Custom(text.chars().take(CUSTOM_TITLE_MAX_CHARS).collect());
        }
    }

    /// Length and color level of the custom title counter.
    pub fn custom_title_counter(&self) -> (usize, CounterLevel) {
        let length = match &self.title {
            TitleSource::Custom(text) => text.chars().count(),
            TitleSource::Preset(_) => 0,
        };
        (length, CounterLevel::for_length(length, CUSTOM_TITLE_MAX_CHARS))
    }

    pub fn set_subtitle(&mut self, text: String) {
        self.subtitle = text;
        self.subtitle_case = CaseState::Normal;
    }

    /// Applies the next letter case to the subtitle; blank subtitles are left alone.
    pub fn cycle_subtitle_case(&mut self) {
        if self.subtitle.trim().is_empty() {
            return;
        }
        let next = self.subtitle_case.next();
        self.subtitle = next.apply(&self.subtitle);
        self.subtitle_case = next;
    }

    pub fn set_body(&mut self, html: String, text: String) {
        self.body_html = html;
        self.body_text = text;
    }

    /// Applies a typed value. Returns false, leaving the layout alone, while the
    /// input is empty or not a number.
    pub fn set_layout_field(&mut self, block: Block, field: LayoutField, raw: &str) -> bool {
        match field.bounds().parse(raw) {
            Some(value) => {
                self.layouts.get_mut(block).set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn adjust_layout_field(&mut self, block: Block, field: LayoutField, delta: i32) {
        self.layouts.get_mut(block).adjust(field, delta);
    }

    /// Puts `block` back to `layout`.
    ///
    /// The title block of a known type always returns to the preset title
    /// layout, whatever `layout` says.
    pub fn reset_block(&mut self, block: Block, layout: BlockLayout) {
        let layout = match (block, self.title.selected_type()) {
            (Block::Type, Some(t)) => t.title_layout(),
            _ => layout,
        };
        *self.layouts.get_mut(block) = layout;
    }

    pub fn reset_custom_title_layout(&mut self) {
        self.layouts.custom_title = Block::CustomType.default_layout();
    }

    pub fn apply_preset(&mut self, preset: LayoutPreset) {
        let l = &mut self.layouts;
        match preset {
            LayoutPreset::Center => {
                l.title.pos_x = 60;
                l.subtitle.pos_x = 0;
                l.body.pos_x = 60;
                l.footer.pos_x = 0;
                l.audience.pos_x = 60;
            }
            LayoutPreset::Reset => {
                for block in [
                    Block::Type,
                    Block::Subtitle,
                    Block::Body,
                    Block::Footer,
                    Block::Audience,
                ] {
                    self.reset_block(block, block.default_layout());
                }
            }
            LayoutPreset::Compact => {
                l.body.pos_y = 550;
                l.footer.pos_y = 900;
                l.audience.pos_y = 1120;
            }
            LayoutPreset::Spaced => {
                l.body.pos_y = 480;
                l.footer.pos_y = 1000;
                l.audience.pos_y = 1170;
            }
        }
    }

    /// Fills the form with a sample unavailability announcement.
    pub fn fill_test_data(&mut self) {
        self.set_custom_title_enabled(false);
        self.select_type(Some(AnnouncementType::Unavailability));
        self.set_subtitle(TEST_SUBTITLE.to_string());
        self.set_body(TEST_BODY.to_string(), strip_html(&TEST_BODY.replace("<br>", "\n")));
        self.audience = TEST_AUDIENCE.to_string();
    }

    /// Binds the form to the record a save created or updated.
    ///
    /// A saved draft is edited from then on, like a loaded one.
    pub fn mark_saved(&mut self, id: Option<u32>, code: Option<String>) {
        if id.is_some() {
            self.id = id;
        }
        if code.is_some() {
            self.code = code;
        }
        if self.id.is_some() {
            self.edit_mode = true;
        }
    }

    /// Back to an empty form that is no longer bound to a stored record.
    pub fn clear(&mut self, default_footer: &str) {
        *self = Self::new(default_footer);
    }

    /// Loads a stored record into the form.
    ///
    /// A title naming a known type selects that type; any other title becomes
    /// a custom title on the custom template. The stored template id wins over
    /// the type mapping for known types.
    pub fn apply_record(&mut self, record: &AnnouncementRecord, default_footer: &str) {
        self.id = Some(record.id);
        self.code = Some(record.code.clone());
        self.edit_mode = true;

        match AnnouncementType::classify(&record.title) {
            Some(t) => {
                self.set_custom_title_enabled(false);
                self.title = TitleSource::Preset(Some(t));
                match record.template_id {
                    Some(template_id) => self.template_id = template_id,
                    None => self.select_type(Some(t)),
                }
            }
            None => {
                self.set_custom_title_enabled(true);
                self.title = TitleSource::Custom(record.title.clone());
            }
        }

        self.set_subtitle(record.subtitle.clone().unwrap_or_default());
        let body = record.body.clone().unwrap_or_default();
        let body_text = strip_html(&body);
        self.set_body(body, body_text);
        self.footer = record
            .footer
            .clone()
            .unwrap_or_else(|| default_footer.to_string());
        self.audience = record.audience.clone().unwrap_or_default();

        let title_block = if self.title.is_custom() {
            Block::CustomType
        } else {
            Block::Type
        };
        for block in [
            title_block,
            Block::Subtitle,
            Block::Body,
            Block::Footer,
            Block::Audience,
        ] {
            let merged = record.layout_over(block, self.layouts.get(block));
            *self.layouts.get_mut(block) = merged;
        }
        self.alignment = record.alignment();
    }

    pub fn status(&self) -> FormStatus {
        FormStatus::from_state(self.edit_mode, self.id)
    }

    pub fn progress(&self) -> Progress {
        Progress::from_fields(&[
            self.title.title(),
            &self.subtitle,
            &self.body_text,
            &self.footer,
            &self.audience,
        ])
    }

    pub fn body_stats(&self) -> BodyStats {
        BodyStats::from_text(&self.body_text)
    }

    /// True when any field the preview shows has content.
    pub fn has_content(&self) -> bool {
        [
            self.title.title(),
            &self.subtitle,
            &self.body_text,
            &self.footer,
            &self.audience,
        ]
        .iter()
        .any(|f| !f.trim().is_empty())
    }

    /// Whether a background draft save is due.
    ///
    /// Only records that already exist are autosaved, and only when the form
    /// differs from what was last saved.
    pub fn needs_autosave(&self, last_saved: Option<&str>) -> bool {
        self.id.is_some() && last_saved != Some(self.collect().fingerprint().as_str())
    }

    /// Heading of the form panel.
    pub fn page_title(&self) -> String {
        match (&self.code, self.edit_mode) {
            (Some(code), true) => format!("Editando {}", code),
            _ => "Dados do Comunicado".to_string(),
        }
    }

    pub fn panel_subtitle(&self) -> String {
        match (&self.code, self.edit_mode) {
            (Some(code), true) => format!("Comunicado {}", code),
            _ => "Preencha os campos abaixo".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FOOTER;
    use crate::model::announcement::AnnouncementStatus;
    use serde_json::json;

    fn empty_form() -> FormState {
        FormState::new(DEFAULT_FOOTER)
    }

    #[test]
    fn new_form_is_empty_with_default_footer() {
        let form = empty_form();
        assert_eq!(form.template_id, 1);
        assert_eq!(form.footer, DEFAULT_FOOTER);
        assert_eq!(form.status(), FormStatus::New);
        assert_eq!(form.progress().percent, 20);
    }

    #[test]
    fn selecting_a_type_sets_template_and_title_layout() {
        let mut form = empty_form();
        form.select_type(Some(AnnouncementType::Normalization));
        assert_eq!(form.template_id, 4);
        assert_eq!(form.layouts.title, BlockLayout::new(60, 120, 60));
        assert_eq!(form.collect().title, "Normalização");

        form.select_type(None);
        assert_eq!(form.template_id, 1);
        assert_eq!(form.collect().title, "");
    }

    #[test]
    fn custom_title_and_type_are_exclusive() {
        let mut form = empty_form();
        form.select_type(Some(AnnouncementType::Instability));
        form.set_custom_title_enabled(true);
        assert_eq!(form.template_id, CUSTOM_TEMPLATE_ID);
        assert_eq!(form.title.selected_type(), None);

        form.select_type(Some(AnnouncementType::Degradation));
        assert!(form.title.is_custom());

        form.set_custom_title("Manutenção programada do portal");
        assert_eq!(form.collect().title, "Manutenção programad");
        assert_eq!(form.custom_title_counter(), (20, CounterLevel::Limit));

        form.set_custom_title_enabled(false);
        assert_eq!(form.title, TitleSource::Preset(None));
        assert_eq!(form.template_id, 1);
    }

    #[test]
    fn collect_uses_the_active_title_layout() {
        let mut form = empty_form();
        form.layouts.title = BlockLayout::new(1, 2, 3);
        form.layouts.custom_title = BlockLayout::new(4, 5, 6);

        let preset = form.collect();
        assert_eq!((preset.title_pos_x, preset.title_pos_y, preset.title_size), (1, 2, 3));

        form.set_custom_title_enabled(true);
        let custom = form.collect();
        assert_eq!((custom.title_pos_x, custom.title_pos_y, custom.title_size), (4, 5, 6));
    }

    #[test]
    fn collected_payload_uses_backend_field_names() {
        let mut form = empty_form();
        form.select_type(Some(AnnouncementType::Unavailability));
        form.set_subtitle("Sub".into());
        let value = serde_json::to_value(form.collect()).unwrap();
        assert_eq!(value["titulo"], json!("Indisponibilidade"));
        assert_eq!(value["subtitulo"], json!("Sub"));
        assert_eq!(value["tipo_tamanho"], json!(60));
        assert_eq!(value["corpo_alinhamento"], json!("justify"));
        assert_eq!(value["publico_alvo_pos_y"], json!(1120));
        assert!(value.get("status").is_none());

        let sent = serde_json::to_value(form.collect().with_status(AnnouncementStatus::Sent)).unwrap();
        assert_eq!(sent["status"], json!("enviado"));
    }

    #[test]
    fn reset_of_known_type_title_uses_preset_layout() {
        let mut form = empty_form();
        form.select_type(Some(AnnouncementType::Degradation));
        form.layouts.title = BlockLayout::new(0, 0, 10);
        form.reset_block(Block::Type, BlockLayout::new(60, 80, 42));
        assert_eq!(form.layouts.title, BlockLayout::new(60, 120, 60));

        let mut plain = empty_form();
        plain.reset_block(Block::Type, BlockLayout::new(60, 80, 42));
        assert_eq!(plain.layouts.title, BlockLayout::new(60, 80, 42));
    }

    #[test]
    fn presets_move_blocks() {
        let mut form = empty_form();
        form.apply_preset(LayoutPreset::Compact);
        assert_eq!(form.layouts.body.pos_y, 550);
        assert_eq!(form.layouts.footer.pos_y, 900);

        form.apply_preset(LayoutPreset::Spaced);
        assert_eq!(form.layouts.audience.pos_y, 1170);

        form.layouts.footer.pos_x = 300;
        form.apply_preset(LayoutPreset::Center);
        assert_eq!(form.layouts.footer.pos_x, 0);

        form.apply_preset(LayoutPreset::Reset);
        assert_eq!(form.layouts, Layouts::default());
    }

    #[test]
    fn layout_inputs_parse_and_step() {
        let mut form = empty_form();
        assert!(form.set_layout_field(Block::Body, LayoutField::Size, "30"));
        assert!(!form.set_layout_field(Block::Body, LayoutField::PosX, ""));
        assert_eq!(form.layouts.body, BlockLayout::new(60, 510, 30));

        form.adjust_layout_field(Block::Body, LayoutField::PosY, -2);
        assert_eq!(form.layouts.body.pos_y, 500);
    }

    #[test]
    fn subtitle_case_cycle_resets_on_typing() {
        let mut form = empty_form();
        form.cycle_subtitle_case();
        assert_eq!(form.subtitle_case, CaseState::Normal);

        form.set_subtitle("queda do portal".into());
        form.cycle_subtitle_case();
        assert_eq!(form.subtitle, "QUEDA DO PORTAL");
        form.cycle_subtitle_case();
        form.cycle_subtitle_case();
        assert_eq!(form.subtitle, "Queda Do Portal");
        assert_eq!(form.subtitle_case, CaseState::Capitalized);

        form.set_subtitle("novo".into());
        assert_eq!(form.subtitle_case, CaseState::Normal);
    }

    #[test]
    fn autosave_requires_id_and_changes() {
        let mut form = empty_form();
        assert!(!form.needs_autosave(None));

        form.id = Some(9);
        assert!(form.needs_autosave(None));

        let saved = form.collect().fingerprint();
        assert!(!form.needs_autosave(Some(&saved)));

        form.audience = "Todos".into();
        assert!(form.needs_autosave(Some(&saved)));
    }

    fn record(title: &str, template_id: Option<u32>) -> AnnouncementRecord {
        serde_json::from_value(json!({
            "id": 12,
            "codigo_unico": "COM-2511282",
            "titulo": title,
            "subtitulo": "Portal",
            "corpo": "<p>Texto &amp; mais</p>",
            "rodape": null,
            "publico_alvo": "Todos",
            "template_id": template_id,
            "tipo_pos_x": 70,
            "tipo_pos_y": 130,
            "subtitulo_pos_x": 0,
            "subtitulo_pos_y": 440,
            "corpo_pos_x": 60,
            "corpo_pos_y": 520,
            "corpo_alinhamento": "left",
            "rodape_pos_x": 60,
            "rodape_pos_y": 1010,
            "publico_alvo_pos_x": 60,
            "publico_alvo_pos_y": 1130
        }))
        .unwrap()
    }

    #[test]
    fn loading_a_known_type_record() {
        let mut form = empty_form();
        form.apply_record(&record("Instabilidade", Some(7)), DEFAULT_FOOTER);

        assert_eq!(form.id, Some(12));
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.page_title(), "Editando COM-2511282");
        assert_eq!(form.template_id, 7);
        assert_eq!(form.title.selected_type(), Some(AnnouncementType::Instability));
        assert_eq!(form.layouts.title, BlockLayout::new(70, 130, 42));
        assert_eq!(form.footer, DEFAULT_FOOTER);
        assert_eq!(form.body_text, "Texto & mais");
        assert_eq!(form.alignment, BodyAlignment::Left);
        assert_eq!(form.layouts.audience.pos_y, 1130);
    }

    #[test]
    fn loading_a_known_type_without_template_uses_mapping() {
        let mut form = empty_form();
        form.apply_record(&record("Degradação", None), DEFAULT_FOOTER);
        assert_eq!(form.template_id, 3);
        assert_eq!(form.layouts.title, BlockLayout::new(70, 130, 60));
    }

    #[test]
    fn loading_a_custom_title_record() {
        let mut form = empty_form();
        form.apply_record(&record("Janela de manutenção noturna", Some(1)), DEFAULT_FOOTER);
        assert_eq!(form.template_id, CUSTOM_TEMPLATE_ID);
        assert_eq!(
            form.title,
            TitleSource::Custom("Janela de manutenção noturna".into())
        );
        assert_eq!(form.layouts.custom_title, BlockLayout::new(70, 130, 56));
        assert_eq!(form.layouts.title, Block::Type.default_layout());
    }

    #[test]
    fn cleared_number_field_can_be_retyped() {
        let mut form = empty_form();
        assert!(!form.set_layout_field(Block::Body, LayoutField::Size, ""));
        assert_eq!(form.layouts.body.size, 24);
        assert!(form.set_layout_field(Block::Body, LayoutField::Size, "3"));
        assert!(form.set_layout_field(Block::Body, LayoutField::Size, "36"));
        assert_eq!(form.layouts.body.size, 36);
    }

    #[test]
    fn saved_draft_switches_to_edit_mode() {
        let mut form = empty_form();
        form.mark_saved(Some(31), Some("COM-2511283".into()));
        assert_eq!(form.id, Some(31));
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.page_title(), "Editando COM-2511283");

        form.mark_saved(None, None);
        assert_eq!(form.id, Some(31));
        assert_eq!(form.code.as_deref(), Some("COM-2511283"));

        let mut unsaved = empty_form();
        unsaved.mark_saved(None, None);
        assert_eq!(unsaved.status(), FormStatus::New);
    }

    #[test]
    fn stored_template_survives_leaving_custom_mode() {
        let mut form = empty_form();
        form.set_custom_title_enabled(true);
        form.apply_record(&record("Instabilidade", Some(7)), DEFAULT_FOOTER);
        assert_eq!(form.template_id, 7);
        assert_eq!(form.title.selected_type(), Some(AnnouncementType::Instability));
    }

    #[test]
    fn clear_leaves_edit_mode() {
        let mut form = empty_form();
        form.apply_record(&record("Instabilidade", Some(2)), DEFAULT_FOOTER);
        form.clear(DEFAULT_FOOTER);
        assert_eq!(form, FormState::new(DEFAULT_FOOTER));
        assert_eq!(form.page_title(), "Dados do Comunicado");
    }

    #[test]
    fn test_data_selects_unavailability() {
        let mut form = empty_form();
        form.set_custom_title_enabled(true);
        form.fill_test_data();
        assert_eq!(form.title.selected_type(), Some(AnnouncementType::Unavailability));
        assert_eq!(form.template_id, 1);
        assert_eq!(form.progress().percent, 100);
        assert!(form.body_text.contains("Os times"));
    }
}
