//! Update function of the announcement editor.
//!
//! Field edits mutate `FormState` and restart both the preview and the
//! autosave debounces. Network work is spawned and reports back through
//! messages, except for the final submission which leaves the page.

use common::form::accessibility::AccessibilityText;
use common::form::stats::PreviewStatus;
use common::model::announcement::AnnouncementStatus;
use common::preview::zoom::Zoom;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::api;
use super::helpers::{
    alert, center_preview, container_size, copy_to_clipboard, exec_command, focus, navigate,
    read_body, show_toast,
};
use super::messages::{Msg, Section};
use super::state::{AnnouncementEditor, IndicatorKind};

const PREVIEW_ERROR: &str = "Erro ao gerar prévia. Tente novamente.";
const CENTER_DELAY_MS: u32 = 100;
const COPY_LABEL_MS: u32 = 2_000;

pub fn update(
    component: &mut AnnouncementEditor,
    ctx: &Context<AnnouncementEditor>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SelectType(selected) => {
            component.form.select_type(selected);
            component.touched(ctx)
        }
        Msg::ToggleCustomTitle(enabled) => {
            component.form.set_custom_title_enabled(enabled);
            component.touched(ctx)
        }
        Msg::SetCustomTitle(text) => {
            component.form.set_custom_title(&text);
            component.touched(ctx)
        }
        Msg::ResetCustomTitleLayout => {
            component.form.reset_custom_title_layout();
            component.touched(ctx)
        }
        Msg::SetSubtitle(text) => {
            component.form.set_subtitle(text);
            component.touched(ctx)
        }
        Msg::CycleSubtitleCase => {
            component.form.cycle_subtitle_case();
            component.touched(ctx)
        }
        Msg::BodyInput => match read_body(&component.body_ref) {
            Some((html, text)) => {
                component.form.set_body(html, text);
                component.touched(ctx)
            }
            None => false,
        },
        Msg::BodyTextSynced(text) => {
            component.form.body_text = text;
            true
        }
        Msg::PastePlainText(text) => {
            exec_command("insertText", Some(&text));
            ctx.link().send_message(Msg::BodyInput);
            false
        }
        Msg::Format(command) => {
            exec_command(command.command(), None);
            focus(&component.body_ref);
            ctx.link().send_message(Msg::BodyInput);
            false
        }
        Msg::SetAlignment(alignment) => {
            component.form.alignment = alignment;
            component.touched(ctx)
        }
        Msg::SetFooter(text) => {
            component.form.footer = text;
            component.touched(ctx)
        }
        Msg::SetAudience(text) => {
            component.form.audience = text;
            component.touched(ctx)
        }
        Msg::SetLayoutField(block, field, raw) => {
            if component.form.set_layout_field(block, field, &raw) {
                component.touched(ctx)
            } else {
                false
            }
        }
        Msg::AdjustLayoutField(block, field, delta) => {
            component.form.adjust_layout_field(block, field, delta);
            component.touched(ctx)
        }
        Msg::ResetBlock(block) => {
            component.form.reset_block(block, block.default_layout());
            component.touched(ctx)
        }
        Msg::ApplyPreset(preset) => {
            component.form.apply_preset(preset);
            component.touched(ctx)
        }
        Msg::FillTestData => {
            component.form.fill_test_data();
            component.sync_body = true;
            component.touched(ctx)
        }
        Msg::ClearForm => {
            component.form.clear(&component.config.default_footer);
            component.last_saved = None;
            component.autosave_timer = None;
            component.sync_body = true;
            component.schedule_preview(ctx);
            true
        }
        Msg::ToggleSection(section) => {
            if !component.open_sections.remove(&section) {
                component.open_sections.insert(section);
                if section == Section::Content {
                    component.sync_body = true;
                }
            }
            true
        }

        Msg::RefreshPreview => {
            component.preview_timer = None;
            let payload = component.form.collect();
            let endpoints = component.endpoints.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::render_preview(&endpoints, &payload).await {
                    Ok(html) => link.send_message(Msg::PreviewLoaded(html)),
                    Err(err) => link.send_message(Msg::PreviewFailed(err.to_string())),
                }
            });
            false
        }
        Msg::PreviewLoaded(html) => {
            component.preview_html = AttrValue::from(html);
            component.preview_error = None;
            component.preview_status = if component.form.has_content() {
                PreviewStatus::Updated
            } else {
                PreviewStatus::Empty
            };
            component.fit_pending = true;
            true
        }
        Msg::PreviewFailed(err) => {
            gloo_console::error!("preview failed:", err);
            component.preview_error = Some(PREVIEW_ERROR.to_string());
            component.preview_status = PreviewStatus::Error;
            true
        }
        Msg::CenterPreview => {
            component.center_timer = None;
            center_preview(&component.preview_container_ref, &component.zoom);
            false
        }
        Msg::ZoomBy(delta) => {
            component.zoom.adjust(delta);
            schedule_center(component, ctx);
            true
        }
        Msg::ZoomToFit => {
            if let Some((width, height)) = container_size(&component.preview_container_ref) {
                component.zoom = Zoom::fit(width, height);
            }
            schedule_center(component, ctx);
            true
        }

        Msg::Loaded(record) => {
            component
                .form
                .apply_record(&record, &component.config.default_footer);
            component.last_saved = Some(component.form.collect().fingerprint());
            component.sync_body = true;
            component.schedule_preview(ctx);
            true
        }
        Msg::LoadFailed(err) => {
            gloo_console::error!("loading announcement failed:", err.clone());
            alert(&format!("Erro ao carregar comunicado: {}", err));
            component.schedule_preview(ctx);
            false
        }

        Msg::AutoSave => {
            component.autosave_timer = None;
            if !component.form.needs_autosave(component.last_saved.as_deref()) {
                return false;
            }
            let collected = component.form.collect();
            let fingerprint = collected.fingerprint();
            let payload = collected.with_status(AnnouncementStatus::Draft);
            let id = component.form.id;
            let endpoints = component.endpoints.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::save_announcement(&endpoints, id, &payload).await {
                    Ok(_) => link.send_message(Msg::AutoSaved { fingerprint }),
                    Err(err) => link.send_message(Msg::AutoSaveFailed(err.to_string())),
                }
            });
            component.show_indicator(
                ctx,
                IndicatorKind::Saving,
                "Salvando automaticamente...".to_string(),
            );
            true
        }
        Msg::AutoSaved { fingerprint } => {
            component.last_saved = Some(fingerprint);
            component.show_indicator(ctx, IndicatorKind::Success, "✓ Salvo".to_string());
            true
        }
        Msg::AutoSaveFailed(err) => {
            gloo_console::error!("autosave failed:", err);
            component.show_indicator(ctx, IndicatorKind::Error, "✗ Erro ao salvar".to_string());
            true
        }
        Msg::HideIndicator => {
            component.indicator_timer = None;
            component.indicator = None;
            true
        }

        Msg::SaveDraft => {
            let collected = component.form.collect();
            let fingerprint = collected.fingerprint();
            let payload = collected.with_status(AnnouncementStatus::Draft);
            let id = component.form.id;
            let endpoints = component.endpoints.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::save_announcement(&endpoints, id, &payload).await {
                    Ok(response) => link.send_message(Msg::DraftSaved {
                        response,
                        fingerprint,
                    }),
                    Err(err) => link.send_message(Msg::DraftFailed(err.to_string())),
                }
            });
            component.show_indicator(ctx, IndicatorKind::Saving, "Salvando rascunho...".to_string());
            true
        }
        Msg::DraftSaved {
            response,
            fingerprint,
        } => {
            component
                .form
                .mark_saved(response.id, response.codigo.clone());
            component.last_saved = Some(fingerprint);

            let code = response.codigo.unwrap_or_default();
            component.show_indicator(
                ctx,
                IndicatorKind::Success,
                format!("✓ Rascunho {} salvo!", code),
            );
            show_toast(
                &format!("✅ Rascunho {} salvo com sucesso!", code),
                component.config.redirect_delay_ms,
            );

            let history = component.endpoints.history();
            component.redirect_timer = Some(Timeout::new(
                component.config.redirect_delay_ms,
                move || navigate(&history),
            ));
            true
        }
        Msg::DraftFailed(err) => {
            gloo_console::error!("draft save failed:", err);
            component.show_indicator(ctx, IndicatorKind::Error, "✗ Erro ao salvar".to_string());
            true
        }
        Msg::Submit => {
            component.autosave_timer = None;
            let payload = component
                .form
                .collect()
                .with_status(AnnouncementStatus::Sent);
            let id = component.form.id;
            let endpoints = component.endpoints.clone();
            spawn_local(async move {
                match api::save_announcement(&endpoints, id, &payload).await {
                    Ok(saved) => match saved.id.or(id) {
                        Some(saved_id) => navigate(&endpoints.generate_image(saved_id)),
                        None => gloo_console::warn!("save answered without an id"),
                    },
                    Err(api::ApiError::Rejected) => {
                        gloo_console::warn!("submission rejected by the server");
                    }
                    Err(err) => {
                        gloo_console::error!("submission failed:", err.to_string());
                        alert("Erro ao salvar comunicado. Tente novamente.");
                    }
                }
            });
            false
        }

        Msg::OpenAccessibility => {
            let form = &component.form;
            match AccessibilityText::build(
                &form.subtitle,
                &form.body_text,
                &form.footer,
                &form.audience,
            ) {
                Some(text) => {
                    component.accessibility = Some(text);
                    component.copied = false;
                    open_top_sheet(&component.accessibility_dialog_ref);
                    true
                }
                None => {
                    alert("Preencha pelo menos um campo antes de gerar o texto de acessibilidade.");
                    false
                }
            }
        }
        Msg::CloseAccessibility => {
            close_top_sheet(&component.accessibility_dialog_ref);
            component.copy_timer = None;
            component.copied = false;
            true
        }
        Msg::CopyAccessibility => {
            let Some(text) = component.accessibility.as_ref().map(|a| a.plain.clone()) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                match copy_to_clipboard(&text).await {
                    Ok(()) => link.send_message(Msg::Copied),
                    Err(err) => {
                        gloo_console::error!("copy failed:", err);
                        alert(&format!(
                            "Erro ao copiar. Selecione o texto manualmente:\n\n{}",
                            text
                        ));
                    }
                }
            });
            false
        }
        Msg::Copied => {
            component.copied = true;
            let link = ctx.link().clone();
            component.copy_timer = Some(Timeout::new(COPY_LABEL_MS, move || {
                link.send_message(Msg::ResetCopyLabel)
            }));
            true
        }
        Msg::ResetCopyLabel => {
            component.copy_timer = None;
            component.copied = false;
            true
        }
    }
}

/// Re-centres the preview once the new zoom has been laid out.
pub fn schedule_center(component: &mut AnnouncementEditor, ctx: &Context<AnnouncementEditor>) {
    let link = ctx.link().clone();
    component.center_timer = Some(Timeout::new(CENTER_DELAY_MS, move || {
        link.send_message(Msg::CenterPreview)
    }));
}
