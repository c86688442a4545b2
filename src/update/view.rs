//! View message handlers (word wrap, font size)

use crate::commands::Cmd;
use crate::messages::ViewMsg;
use crate::model::AppModel;

use super::report_error;

/// Handle view messages for the active tab
pub fn update_view(model: &mut AppModel, msg: ViewMsg) -> Option<Cmd> {
    match msg {
        ViewMsg::ToggleWordWrap => {
            // The global flag only seeds tabs created later; open tabs other
            // than the active one keep their setting.
            model.word_wrap = !model.word_wrap;
            let wrap = model.word_wrap;
            if let Ok(tab) = model.registry.active_tab_mut() {
                tab.editor.word_wrap = wrap;
            }
            model
                .ui
                .set_status(if wrap { "Word wrap on" } else { "Word wrap off" });
            Some(Cmd::Redraw)
        }

        ViewMsg::ChangeFontSize(delta) => {
            let tab = match model.registry.active_tab_mut() {
                Ok(tab) => tab,
                Err(e) => return report_error(model, &e),
            };
            let size = tab.editor.change_font_size(delta);
            tracing::debug!(tab = %tab.id, size, "font size changed");
            model.ui.set_status(format!("Font size {}", size));
            Some(Cmd::Redraw)
        }
    }
}
