use yew::{html, AttrValue, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct WorkspaceGridProps {
    /// Width of the first column; the second takes the rest.
    #[prop_or(AttrValue::Static("minmax(420px, 40%)"))]
    pub form_width: AttrValue,
    pub children: Children,
}

/// Two-pane page layout: form on the left, preview on the right.
pub struct WorkspaceGrid;

impl Component for WorkspaceGrid {
    type Message = ();
    type Properties = WorkspaceGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WorkspaceGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: {} 1fr;
             gap: 24px;
             height: 100vh;
             padding: 24px;
             box-sizing: border-box;
             background: #f1f5f9;",
            props.form_width
        );

        html! {
            <div class="workspace-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
