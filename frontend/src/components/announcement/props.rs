//! Properties of the `AnnouncementEditor`.

use common::config::EditorConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AnnouncementEditorProps {
    /// Timings, backend base and default footer.
    #[prop_or_default]
    pub config: EditorConfig,

    /// Id of a stored announcement to open for editing.
    ///
    /// Read once, on the first render. `None` starts an empty form.
    #[prop_or_default]
    pub edit_id: Option<u32>,
}
