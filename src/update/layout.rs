//! Layout message handlers (tab selection)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::AppModel;

/// Handle tab selection
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    let selected = match msg {
        LayoutMsg::SelectTab(id) => model.registry.select(id).then_some(id),
        LayoutMsg::SelectTabIndex(index) => model.registry.select_index(index),
    };

    match selected {
        Some(id) => {
            let name = model
                .registry
                .get(id)
                .map(|tab| tab.document.display_name())
                .unwrap_or_default();
            model.ui.set_status(name);
            Some(Cmd::Redraw)
        }
        None => {
            model.ui.set_status("No such tab");
            None
        }
    }
}
