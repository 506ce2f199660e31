use gloo_timers::callback::Timeout;
use uuid::Uuid;
use web_sys::HtmlElement;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Dialog that slides down from the top of the page while it has the `show` class.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

/// Delay before toggling the class, so the transition runs after the sheet content renders.
const TOGGLE_DELAY_MS: u32 = 50;

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    toggle_shown(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    toggle_shown(top_sheet_ref, false);
}

fn toggle_shown(top_sheet_ref: &NodeRef, shown: bool) {
    let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() else {
        return;
    };
    Timeout::new(TOGGLE_DELAY_MS, move || {
        let classes = top_sheet.class_list();
        let result = if shown {
            classes.add_1("show")
        } else {
            classes.remove_1("show")
        };
        if let Err(err) = result {
            gloo_console::warn!(format!("top sheet {} could not toggle", top_sheet.id()), err);
        }
    })
    .forget();
}
