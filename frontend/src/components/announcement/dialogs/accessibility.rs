//! "#ParaTodosVerem" dialog shown in a top sheet.

use yew::html::Scope;
use yew::prelude::*;

use crate::components::announcement::messages::Msg;
use crate::components::announcement::state::AnnouncementEditor;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn accessibility_dialog(component: &AnnouncementEditor, link: &Scope<AnnouncementEditor>) -> Html {
    let preview = component
        .accessibility
        .as_ref()
        .map(|text| Html::from_html_unchecked(AttrValue::from(text.html.clone())))
        .unwrap_or_default();

    let copy_label = if component.copied {
        "✓ Copiado!"
    } else {
        "Copiar texto"
    };

    html! {
        <YwMaterialTopSheet node_ref={component.accessibility_dialog_ref.clone()}>
            <div class="accessibility-dialog">
                <div class="dialog-header">
                    <span class="material-icons">{ "accessibility_new" }</span>
                    <h3>{ "Texto de acessibilidade" }</h3>
                    <button type="button" class="icon-button" title="Fechar"
                        onclick={link.callback(|_| Msg::CloseAccessibility)}>
                        <span class="material-icons">{ "close" }</span>
                    </button>
                </div>
                <div class="accessibility-preview">{ preview }</div>
                <div class="dialog-actions">
                    <button type="button"
                        class={classes!("btn-primary", component.copied.then_some("copied"))}
                        onclick={link.callback(|_| Msg::CopyAccessibility)}>
                        { copy_label }
                    </button>
                    <button type="button" class="btn-secondary"
                        onclick={link.callback(|_| Msg::CloseAccessibility)}>
                        { "Fechar" }
                    </button>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}
