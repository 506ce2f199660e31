//! Runtime state of the announcement editor.
//!
//! The form itself lives in `FormState`; this struct adds what only exists in
//! the browser: pending timers, DOM references, the last preview and the
//! transient indicators.

use std::collections::HashSet;

use common::config::EditorConfig;
use common::form::accessibility::AccessibilityText;
use common::form::stats::PreviewStatus;
use common::form::FormState;
use common::preview::zoom::Zoom;
use common::requests::Endpoints;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::messages::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorKind {
    Saving,
    Success,
    Error,
}

/// Floating save indicator in the corner of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavingIndicator {
    pub kind: IndicatorKind,
    pub message: String,
}

pub struct AnnouncementEditor {
    pub config: EditorConfig,
    pub endpoints: Endpoints,
    pub form: FormState,

    /// HTML of the last successful preview render.
    pub preview_html: AttrValue,
    pub preview_status: PreviewStatus,
    pub preview_error: Option<String>,
    pub zoom: Zoom,

    pub indicator: Option<SavingIndicator>,

    /// Fingerprint of the form as last loaded or saved.
    pub last_saved: Option<String>,

    pub open_sections: HashSet<Section>,
    pub accessibility: Option<AccessibilityText>,
    pub copied: bool,

    /// Dropping a `Timeout` cancels it, so replacing one restarts the delay.
    pub preview_timer: Option<Timeout>,
    pub autosave_timer: Option<Timeout>,
    pub indicator_timer: Option<Timeout>,
    pub center_timer: Option<Timeout>,
    pub redirect_timer: Option<Timeout>,
    pub copy_timer: Option<Timeout>,

    pub body_ref: NodeRef,
    pub preview_container_ref: NodeRef,
    pub accessibility_dialog_ref: NodeRef,

    /// The body editor must be refilled from `form.body_html`; stays set until it was written.
    pub sync_body: bool,
    /// The preview text must be measured and re-centred after the next render.
    pub fit_pending: bool,
    /// Guard for the first-render initialization.
    pub loaded: bool,
}

impl AnnouncementEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            endpoints: config.endpoints(),
            form: FormState::new(&config.default_footer),
            config,
            preview_html: AttrValue::default(),
            preview_status: PreviewStatus::Empty,
            preview_error: None,
            zoom: Zoom::default(),
            indicator: None,
            last_saved: None,
            open_sections: HashSet::from([Section::Title, Section::Content]),
            accessibility: None,
            copied: false,
            preview_timer: None,
            autosave_timer: None,
            indicator_timer: None,
            center_timer: None,
            redirect_timer: None,
            copy_timer: None,
            body_ref: NodeRef::default(),
            preview_container_ref: NodeRef::default(),
            accessibility_dialog_ref: NodeRef::default(),
            sync_body: false,
            fit_pending: false,
            loaded: false,
        }
    }

    pub fn is_open(&self, section: Section) -> bool {
        self.open_sections.contains(&section)
    }

    /// Restarts the preview debounce.
    pub fn schedule_preview(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.preview_timer = Some(Timeout::new(self.config.preview_debounce_ms, move || {
            link.send_message(super::Msg::RefreshPreview)
        }));
    }

    /// Restarts the autosave debounce.
    pub fn schedule_autosave(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.autosave_timer = Some(Timeout::new(self.config.autosave_delay_ms, move || {
            link.send_message(super::Msg::AutoSave)
        }));
    }

    /// Marks the form as edited: the preview and the autosave both restart.
    pub fn touched(&mut self, ctx: &Context<Self>) -> bool {
        self.schedule_preview(ctx);
        self.schedule_autosave(ctx);
        true
    }

    /// Shows the indicator; success and error hide themselves after a while.
    pub fn show_indicator(&mut self, ctx: &Context<Self>, kind: IndicatorKind, message: String) {
        self.indicator = Some(SavingIndicator { kind, message });
        self.indicator_timer = match kind {
            IndicatorKind::Saving => None,
            IndicatorKind::Success | IndicatorKind::Error => {
                let link = ctx.link().clone();
                Some(Timeout::new(self.config.indicator_hide_ms, move || {
                    link.send_message(super::Msg::HideIndicator)
                }))
            }
        };
    }
}
