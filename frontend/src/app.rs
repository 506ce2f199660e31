use crate::components::announcement::AnnouncementEditor;
use crate::config::{edit_id_from_location, load_editor_config};
use common::config::EditorConfig;
use yew::{html, Component, Context, Html};

pub struct App {
    config: EditorConfig,
    edit_id: Option<u32>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let edit_id = edit_id_from_location();
        if let Some(id) = edit_id {
            gloo_console::log!(format!("opening announcement {} for editing", id));
        }
        Self {
            config: load_editor_config(),
            edit_id,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <AnnouncementEditor config={self.config.clone()} edit_id={self.edit_id} />
        }
    }
}
