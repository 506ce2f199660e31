//! View rendering for the announcement editor.
//!
//! Two panes inside a `WorkspaceGrid`: the form on the left, grouped in
//! collapsible sections, and the scaled preview of the artboard on the right.
//! The body editor is a `contenteditable` element whose children Yew never
//! renders; its content is written from `rendered` when needed. Collapsed
//! sections stay mounted and are only hidden, so the editor keeps its content.

use common::form::stats::{content_info, CounterLevel};
use common::form::LayoutPreset;
use common::model::announcement::BodyAlignment;
use common::model::announcement_type::{AnnouncementType, CUSTOM_TITLE_MAX_CHARS};
use common::model::block::{Block, LayoutField};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::accessibility::accessibility_dialog;
use super::messages::{FormatCommand, Msg, Section};
use super::state::{AnnouncementEditor, IndicatorKind};
use crate::styles::EDITOR_CSS;
use crate::workspace_grid::WorkspaceGrid;

pub fn view(component: &AnnouncementEditor, ctx: &Context<AnnouncementEditor>) -> Html {
    let link = ctx.link();

    html! {
        <div class="announcement-editor">
            <style>{ EDITOR_CSS }</style>
            { saving_indicator(component) }
            <WorkspaceGrid>
                { form_panel(component, link) }
                { preview_panel(component, link) }
            </WorkspaceGrid>
            { accessibility_dialog(component, link) }
        </div>
    }
}

fn saving_indicator(component: &AnnouncementEditor) -> Html {
    let Some(indicator) = &component.indicator else {
        return html! {};
    };
    let kind = match indicator.kind {
        IndicatorKind::Saving => "saving",
        IndicatorKind::Success => "success",
        IndicatorKind::Error => "error",
    };
    html! {
        <div class={classes!("saving-indicator", "show", kind)}>
            if indicator.kind == IndicatorKind::Saving {
                <span class="spinner"></span>
            }
            <span>{ &indicator.message }</span>
        </div>
    }
}

fn form_panel(component: &AnnouncementEditor, link: &Scope<AnnouncementEditor>) -> Html {
    let form = &component.form;
    let status = form.status();
    let progress = form.progress();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="form-panel">
            <div class="panel-header">
                <div>
                    <h2>{ form.page_title() }</h2>
                    <p class="panel-subtitle">{ form.panel_subtitle() }</p>
                </div>
                <div class="panel-stats">
                    <span class="stat" style={format!("color: {}", status.color())}>
                        { status.label() }
                    </span>
                    <span class="stat" style={format!("color: {}", progress.color())}>
                        { format!("{}%", progress.percent) }
                    </span>
                </div>
            </div>
            <form {onsubmit}>
                { section(component, link, Section::Title, "title", "Tipo do comunicado", title_section(component, link)) }
                { section(component, link, Section::Content, "article", "Conteúdo", content_section(component, link)) }
                { section(component, link, Section::Positions, "open_with", "Posicionamento", positions_section(component, link)) }
                { section(component, link, Section::Shortcuts, "bolt", "Atalhos", shortcuts_section(link)) }
                { form_actions(link) }
            </form>
        </div>
    }
}

fn section(
    component: &AnnouncementEditor,
    link: &Scope<AnnouncementEditor>,
    section: Section,
    icon: &'static str,
    title: &'static str,
    content: Html,
) -> Html {
    let open = component.is_open(section);
    html! {
        <div class={classes!("form-section", open.then_some("open"))}>
            <button type="button" class="section-header" onclick={link.callback(move |_| Msg::ToggleSection(section))}>
                <span class="material-icons">{ icon }</span>
                <span class="section-title">{ title }</span>
                <span class="material-icons chevron">{ if open { "expand_less" } else { "expand_more" } }</span>
            </button>
            <div class="section-content">{ content }</div>
        </div>
    }
}

fn title_section(component: &AnnouncementEditor, link: &Scope<AnnouncementEditor>) -> Html {
    let form = &component.form;
    let custom = form.title.is_custom();
    let selected = form.title.selected_type();

    let onchange = link.callback(|e: Event| {
        let value = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .map(|s| s.value())
            .unwrap_or_default();
        Msg::SelectType(AnnouncementType::from_title(&value))
    });
    let ontoggle = link.callback(|e: Event| {
        let checked = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .map(|i| i.checked())
            .unwrap_or(false);
        Msg::ToggleCustomTitle(checked)
    });

    html! {
        <>
            <div class="field">
                <label for="tipo">{ "Tipo" }</label>
                <select id="tipo" disabled={custom}
                    class={classes!(selected.map(AnnouncementType::css_class))}
                    {onchange}>
                    <option value="" selected={selected.is_none()}>{ "Selecione o tipo" }</option>
                    { for AnnouncementType::ALL.iter().map(|t| html! {
                        <option value={t.title()} selected={selected == Some(*t)}>
                            { format!("{} {}", t.icon(), t.title()) }
                        </option>
                    }) }
                </select>
            </div>
            <label class="toggle">
                <input type="checkbox" checked={custom} onchange={ontoggle} />
                <span>{ "Usar título personalizado" }</span>
            </label>
            if custom {
                { custom_title_group(component, link) }
            }
        </>
    }
}

fn custom_title_group(component: &AnnouncementEditor, link: &Scope<AnnouncementEditor>) -> Html {
    let form = &component.form;
    let (length, level) = form.custom_title_counter();
    let counter_class = match level {
        CounterLevel::Normal => None,
        CounterLevel::Warning => Some("warning"),
        CounterLevel::Limit => Some("limit"),
    };

    html! {
        <div class="custom-title-group">
            <div class="field">
                <label for="tipo-personalizado">{ "Título personalizado" }</label>
                <input id="tipo-personalizado" type="text"
                    maxlength={CUSTOM_TITLE_MAX_CHARS.to_string()}
                    value={form.title.title().to_string()}
                    oninput={link.callback(|e: InputEvent| Msg::SetCustomTitle(input_value(&e)))} />
                <span class={classes!("char-counter", counter_class)} style={format!("color: {}", level.color())}>
                    { format!("{}/{}", length, CUSTOM_TITLE_MAX_CHARS) }
                </span>
            </div>
            <div class="position-card">
                { layout_controls(component, link, Block::CustomType) }
                <button type="button" class="btn-reset" onclick={link.callback(|_| Msg::ResetCustomTitleLayout)}>
                    <span class="material-icons">{ "restart_alt" }</span>
                    { "Resetar posição" }
                </button>
            </div>
        </div>
    }
}

fn content_section(component: &AnnouncementEditor, link: &Scope<AnnouncementEditor>) -> Html {
    let form = &component.form;
    let stats = form.body_stats();

    let onpaste = link.batch_callback(|e: Event| {
        let e: ClipboardEvent = e.unchecked_into();
        e.prevent_default();
        e.clipboard_data()
            .and_then(|data| data.get_data("text/plain").ok())
            .map(Msg::PastePlainText)
    });

    html! {
        <>
            <div class="field">
                <label for="subtitulo">{ "Subtítulo" }</label>
                <div class="input-with-action">
                    <input id="subtitulo" type="text" value={form.subtitle.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetSubtitle(input_value(&e)))} />
                    <button type="button" class="btn-case" title="Alternar maiúsculas e minúsculas"
                        onclick={link.callback(|_| Msg::CycleSubtitleCase)}>
                        { form.subtitle_case.label() }
                    </button>
                </div>
            </div>

            <div class="field">
                <label>{ "Corpo" }</label>
                <div class="editor-toolbar">
                    { for FormatCommand::ALL.iter().map(|command| {
                        let command = *command;
                        html! {
                            <button type="button" class="icon-button" title={command.label()}
                                onmousedown={Callback::from(|e: MouseEvent| e.prevent_default())}
                                onclick={link.callback(move |_| Msg::Format(command))}>
                                <span class="material-icons">{ command.icon() }</span>
                            </button>
                        }
                    }) }
                    <span class="toolbar-separator"></span>
                    { for BodyAlignment::ALL.iter().map(|alignment| {
                        let alignment = *alignment;
                        html! {
                            <button type="button"
                                class={classes!("icon-button", (form.alignment == alignment).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SetAlignment(alignment))}>
                                <span class="material-icons">{ alignment.icon() }</span>
                            </button>
                        }
                    }) }
                </div>
                <div id="corpo" class="rich-editor" contenteditable="true"
                    ref={component.body_ref.clone()}
                    style={format!("text-align: {}", form.alignment.as_str())}
                    oninput={link.callback(|_: InputEvent| Msg::BodyInput)}
                    onblur={link.callback(|_: FocusEvent| Msg::BodyInput)}
                    {onpaste}>
                </div>
                <div class="body-stats">
                    <span>{ stats.chars_label() }</span>
                    <span>{ stats.words_label() }</span>
                    if let Some(read_time) = stats.read_time_label() {
                        <span>{ read_time }</span>
                    }
                </div>
            </div>

            <div class="field">
                <label for="rodape">{ "Rodapé" }</label>
                <textarea id="rodape" rows="2" value={form.footer.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetFooter(textarea_value(&e)))} />
            </div>

            <div class="field">
                <label for="publico-alvo">{ "Público-alvo" }</label>
                <input id="publico-alvo" type="text" value={form.audience.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetAudience(input_value(&e)))} />
            </div>
        </>
    }
}

fn positions_section(component: &AnnouncementEditor, link: &Scope<AnnouncementEditor>) -> Html {
    let blocks = [Block::Type, Block::Subtitle, Block::Body, Block::Footer, Block::Audience];
    html! {
        <div class="position-cards">
            { for blocks.iter().filter(|b| !(component.form.title.is_custom() && **b == Block::Type)).map(|block| {
                let block = *block;
                html! {
                    <div class="position-card">
                        <div class="position-card-header">
                            <span>{ block.label() }</span>
                            <button type="button" class="icon-button" title="Resetar"
                                onclick={link.callback(move |_| Msg::ResetBlock(block))}>
                                <span class="material-icons">{ "restart_alt" }</span>
                            </button>
                        </div>
                        { layout_controls(component, link, block) }
                    </div>
                }
            }) }
        </div>
    }
}

fn layout_controls(component: &AnnouncementEditor, link: &Scope<AnnouncementEditor>, block: Block) -> Html {
    let layout = component.form.layouts.get(block);
    html! {
        <div class="layout-controls">
            { for [LayoutField::PosX, LayoutField::PosY, LayoutField::Size].iter().map(|field| {
                let field = *field;
                let bounds = field.bounds();
                html! {
                    <div class="layout-control">
                        <label>{ field.label() }</label>
                        <div class="stepper">
                            <button type="button" onclick={link.callback(move |_| Msg::AdjustLayoutField(block, field, -1))}>
                                { "−" }
                            </button>
                            <input type="number"
                                min={bounds.min.to_string()}
                                max={bounds.max.to_string()}
                                step={bounds.step.to_string()}
                                value={layout.get(field).to_string()}
                                oninput={link.callback(move |e: InputEvent| Msg::SetLayoutField(block, field, input_value(&e)))} />
                            <button type="button" onclick={link.callback(move |_| Msg::AdjustLayoutField(block, field, 1))}>
                                { "+" }
                            </button>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

fn shortcuts_section(link: &Scope<AnnouncementEditor>) -> Html {
    html! {
        <div class="shortcuts">
            <div class="preset-buttons">
                { for LayoutPreset::ALL.iter().map(|preset| {
                    let preset = *preset;
                    html! {
                        <button type="button" class="btn-preset" onclick={link.callback(move |_| Msg::ApplyPreset(preset))}>
                            { preset.label() }
                        </button>
                    }
                }) }
            </div>
            <button type="button" class="btn-secondary" onclick={link.callback(|_| Msg::FillTestData)}>
                <span class="material-icons">{ "science" }</span>
                { "Preencher dados de teste" }
            </button>
        </div>
    }
}

fn form_actions(link: &Scope<AnnouncementEditor>) -> Html {
    html! {
        <div class="form-actions">
            <button type="button" class="btn-secondary" onclick={link.callback(|_| Msg::ClearForm)}>
                <span class="material-icons">{ "delete_sweep" }</span>
                { "Limpar" }
            </button>
            <button type="button" class="btn-secondary" onclick={link.callback(|_| Msg::OpenAccessibility)}>
                <span class="material-icons">{ "accessibility_new" }</span>
                { "Acessibilidade" }
            </button>
            <button type="button" class="btn-secondary" onclick={link.callback(|_| Msg::SaveDraft)}>
                <span class="material-icons">{ "save" }</span>
                { "Salvar rascunho" }
            </button>
            <button type="submit" class="btn-primary">
                <span class="material-icons">{ "send" }</span>
                { "Gerar comunicado" }
            </button>
        </div>
    }
}

fn preview_panel(component: &AnnouncementEditor, link: &Scope<AnnouncementEditor>) -> Html {
    let form = &component.form;
    let status = component.preview_status;
    let zoom = component.zoom;
    let step = component.config.zoom_step;
    let wrapper_style = format!(
        "transform: {}; transform-origin: {};",
        zoom.transform(),
        zoom.transform_origin()
    );

    html! {
        <div class="preview-panel">
            <div class="panel-header">
                <div class="panel-stats">
                    <span class="stat" style={format!("color: {}", status.color())}>
                        { format!("{} {}", status.icon(), status.label()) }
                    </span>
                    <span class="stat">
                        { content_info(form.title.title(), &form.subtitle, &form.body_text) }
                    </span>
                </div>
                <div class="zoom-controls">
                    <button type="button" class="icon-button" title="Diminuir zoom"
                        onclick={link.callback(move |_| Msg::ZoomBy(-step))}>
                        <span class="material-icons">{ "zoom_out" }</span>
                    </button>
                    <span class="zoom-level">{ format!("{}%", zoom.percent()) }</span>
                    <button type="button" class="icon-button" title="Aumentar zoom"
                        onclick={link.callback(move |_| Msg::ZoomBy(step))}>
                        <span class="material-icons">{ "zoom_in" }</span>
                    </button>
                    <button type="button" class="icon-button" title="Ajustar à tela"
                        onclick={link.callback(|_| Msg::ZoomToFit)}>
                        <span class="material-icons">{ "fit_screen" }</span>
                    </button>
                </div>
            </div>
            if let Some(error) = &component.preview_error {
                <div class="preview-error">{ error }</div>
            }
            <div class="preview-container" ref={component.preview_container_ref.clone()}>
                <div class="preview-wrapper" style={wrapper_style}>
                    <div class="preview-content">
                        { Html::from_html_unchecked(component.preview_html.clone()) }
                    </div>
                </div>
            </div>
        </div>
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(e: &InputEvent) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|textarea| textarea.value())
        .unwrap_or_default()
}
