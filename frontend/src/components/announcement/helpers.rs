//! Browser utilities used by the editor.
//!
//! Everything that touches the DOM outside of the virtual tree lives here:
//! notifications, navigation, the rich text body, measuring preview text,
//! scrolling the preview and the clipboard.

use common::preview::fit::TextFit;
use common::preview::zoom::Zoom;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, HtmlDocument, HtmlElement, HtmlTextAreaElement, ScrollBehavior, ScrollToOptions,
};
use yew::NodeRef;

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast removes itself after `duration_ms`.
pub fn show_toast(message: &str, duration_ms: u32) {
    let Some(document) = document() else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", "#10b981").ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "12px 24px").ok();
        style.set_property("border-radius", "8px").ok();
        style.set_property("z-index", "10000").ok();
        style.set_property("font-family", "Arial, sans-serif").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

pub fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(url) {
            gloo_console::error!("navigation failed", err);
        }
    }
}

/// Current HTML and visible text of the rich text body.
pub fn read_body(body_ref: &NodeRef) -> Option<(String, String)> {
    let body = body_ref.cast::<HtmlElement>()?;
    Some((body.inner_html(), body.inner_text()))
}

/// Replaces the content of the body editor and returns its visible text.
pub fn write_body(body_ref: &NodeRef, html: &str) -> Option<String> {
    let body = body_ref.cast::<HtmlElement>()?;
    body.set_inner_html(html);
    Some(body.inner_text())
}

/// Runs a rich text command on the focused editable element.
pub fn exec_command(command: &str, value: Option<&str>) {
    let Some(document) = document().and_then(|d| d.dyn_into::<HtmlDocument>().ok()) else {
        return;
    };
    let result = match value {
        Some(value) => document.exec_command_with_show_ui_and_value(command, false, value),
        None => document.exec_command(command),
    };
    if let Err(err) = result {
        gloo_console::warn!(format!("execCommand {} failed", command), err);
    }
}

pub fn focus(node_ref: &NodeRef) {
    if let Some(element) = node_ref.cast::<HtmlElement>() {
        element.focus().ok();
    }
}

/// Applies `fit` to its preview element: fixed width, and no wrapping when the
/// text fits on one line.
pub fn fit_preview_text(fit: &TextFit) {
    let Some(document) = document() else {
        return;
    };
    let Some(element) = document
        .get_element_by_id(fit.element_id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let style = element.style();
    let width = fit.width_css();
    style.set_property("width", &width).ok();
    style.set_property("max-width", &width).ok();
    style.set_property("box-sizing", "border-box").ok();
    style.set_property("overflow-wrap", "break-word").ok();
    style.set_property("word-break", "break-word").ok();

    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return;
    }

    let font_size = style
        .get_property_value("font-size")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fit.default_font_size.to_string());

    if let Some(measured) = measure_text(&document, &text, &font_size, fit) {
        style
            .set_property("white-space", fit.wrap_mode(measured).white_space())
            .ok();
    }
}

/// Width of `text` rendered on a single line with the font of `fit`.
fn measure_text(document: &Document, text: &str, font_size: &str, fit: &TextFit) -> Option<f64> {
    let span: HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
    let style = span.style();
    style.set_property("position", "absolute").ok();
    style.set_property("visibility", "hidden").ok();
    style.set_property("white-space", "nowrap").ok();
    style.set_property("font-size", font_size).ok();
    style.set_property("font-family", fit.font_family).ok();
    style.set_property("font-weight", fit.font_weight).ok();
    if fit.uppercase {
        style.set_property("text-transform", "uppercase").ok();
    }
    span.set_text_content(Some(text));

    let body = document.body()?;
    body.append_child(&span).ok()?;
    let width = f64::from(span.offset_width());
    body.remove_child(&span).ok();
    Some(width)
}

/// Size of the visible area of the preview container.
pub fn container_size(container_ref: &NodeRef) -> Option<(f64, f64)> {
    let container = container_ref.cast::<HtmlElement>()?;
    Some((
        f64::from(container.client_width()),
        f64::from(container.client_height()),
    ))
}

/// Scrolls the preview container so the scaled artboard sits in its middle.
pub fn center_preview(container_ref: &NodeRef, zoom: &Zoom) {
    let Some(container) = container_ref.cast::<HtmlElement>() else {
        return;
    };
    let (left, top) = zoom.centered_scroll(
        f64::from(container.client_width()),
        f64::from(container.client_height()),
    );
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&options);
}

/// Copies `text` with the asynchronous clipboard API, falling back to a
/// hidden textarea and `execCommand("copy")` where it is unavailable.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "janela indisponível".to_string())?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null());

    if let Some(clipboard) = clipboard {
        let promise = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .and_then(|f| f.dyn_into::<Function>())
            .and_then(|write| write.call1(&clipboard, &JsValue::from_str(text)))
            .and_then(|p| p.dyn_into::<Promise>());
        match promise {
            Ok(promise) => match JsFuture::from(promise).await {
                Ok(_) => return Ok(()),
                Err(err) => gloo_console::warn!("clipboard write failed, using fallback", err),
            },
            Err(err) => gloo_console::warn!("clipboard API unavailable", err),
        }
    }

    fallback_copy(text)
}

fn fallback_copy(text: &str) -> Result<(), String> {
    let document = document().ok_or_else(|| "documento indisponível".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "documento sem body".to_string())?;
    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|e| format!("{:?}", e))?
        .unchecked_into();
    textarea.set_value(text);
    let style = textarea.style();
    style.set_property("position", "fixed").ok();
    style.set_property("opacity", "0").ok();

    body.append_child(&textarea).map_err(|e| format!("{:?}", e))?;
    textarea.select();
    let copied = document
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false);
    body.remove_child(&textarea).ok();

    if copied {
        Ok(())
    } else {
        Err("cópia recusada pelo navegador".to_string())
    }
}
