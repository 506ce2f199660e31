//! Announcement editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and helpers.
//!
//! On first render it either loads the record given by `edit_id` or asks for
//! the preview of the empty form. After later renders it keeps the parts of
//! the DOM that Yew does not own in sync: the rich text body and the
//! measured text of the preview.

use common::preview::fit::{FOOTER_FIT, SUBTITLE_FIT};
use yew::platform::spawn_local;
use yew::prelude::*;

mod api;
mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::{fit_preview_text, write_body};
pub use messages::Msg;
pub use props::AnnouncementEditorProps;
pub use state::AnnouncementEditor;

impl Component for AnnouncementEditor {
    type Message = Msg;
    type Properties = AnnouncementEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        AnnouncementEditor::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            match ctx.props().edit_id {
                Some(id) => {
                    let endpoints = self.endpoints.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::fetch_announcement(&endpoints, id).await {
                            Ok(record) => link.send_message(Msg::Loaded(Box::new(record))),
                            Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                        }
                    });
                }
                None => self.schedule_preview(ctx),
            }
        }

        if self.sync_body {
            if let Some(text) = write_body(&self.body_ref, &self.form.body_html) {
                self.sync_body = false;
                ctx.link().send_message(Msg::BodyTextSynced(text));
            }
        }

        if self.fit_pending {
            self.fit_pending = false;
            fit_preview_text(&FOOTER_FIT);
            fit_preview_text(&SUBTITLE_FIT);
            update::schedule_center(self, ctx);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use common::config::EditorConfig;
    use gloo_timers::future::TimeoutFuture;
    use js_sys::{Date, Function, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event, EventInit, HtmlElement};
    use yew::AppHandle;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Backend address that refuses connections.
    const UNREACHABLE_API: &str = "http://127.0.0.1:9";

    fn mount(
        root_id: &str,
        config: EditorConfig,
        edit_id: Option<u32>,
    ) -> (Element, AppHandle<AnnouncementEditor>) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id(root_id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let handle = yew::Renderer::<AnnouncementEditor>::with_root_and_props(
            root.clone(),
            AnnouncementEditorProps { config, edit_id },
        )
        .render();
        (root, handle)
    }

    async fn wait_for<T>(mut lookup: impl FnMut() -> Option<T>) -> T {
        let start = Date::now();
        loop {
            if let Some(found) = lookup() {
                return found;
            }
            if Date::now() - start > 5000.0 {
                panic!("nothing appeared after 5s");
            }
            TimeoutFuture::new(10).await;
        }
    }

    fn find(root: &Element, selector: &str) -> Option<HtmlElement> {
        root.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    fn dispatch_input(element: &HtmlElement) {
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).expect("input event");
        element.dispatch_event(&event).expect("dispatch input");
    }

    fn silence_alerts() {
        let window = web_sys::window().expect("window available");
        Reflect::set(
            &window,
            &JsValue::from_str("alert"),
            &Function::new_no_args(""),
        )
        .expect("replace alert");
    }

    #[wasm_bindgen_test(async)]
    async fn collapsing_content_section_keeps_body() {
        let config = EditorConfig {
            api_base: UNREACHABLE_API.to_string(),
            preview_debounce_ms: 60_000,
            autosave_delay_ms: 60_000,
            ..EditorConfig::default()
        };
        let (root, _handle) = mount("editor-collapse", config, None);

        let body = wait_for(|| find(&root, "#corpo")).await;
        body.set_inner_html("Informamos o impacto");
        dispatch_input(&body);
        TimeoutFuture::new(0).await;

        let header = find(&root, "form > div:nth-of-type(2) > .section-header")
            .expect("content section header");
        header.click();
        TimeoutFuture::new(0).await;
        header.click();
        TimeoutFuture::new(0).await;

        let body = find(&root, "#corpo").expect("body editor stays mounted");
        assert_eq!(body.inner_html(), "Informamos o impacto");

        dispatch_input(&body);
        TimeoutFuture::new(0).await;
        let stats = find(&root, ".body-stats").expect("body stats");
        assert!(stats.inner_text().contains("3 palavras"));
    }

    #[wasm_bindgen_test(async)]
    async fn failed_load_still_requests_preview() {
        silence_alerts();
        let config = EditorConfig {
            api_base: UNREACHABLE_API.to_string(),
            preview_debounce_ms: 10,
            autosave_delay_ms: 60_000,
            ..EditorConfig::default()
        };
        let (root, _handle) = mount("editor-load-failure", config, Some(404));

        let error = wait_for(|| find(&root, ".preview-error")).await;
        assert_eq!(error.inner_text(), "Erro ao gerar prévia. Tente novamente.");
    }
}
