//! Document message handlers (content changes on the active tab)

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

use super::report_error;

/// Apply a content change to the active tab
///
/// Every change marks the document dirty and drops find highlights, whose
/// offsets no longer line up with the buffer.
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let tab = match model.registry.active_tab_mut() {
        Ok(tab) => tab,
        Err(e) => return report_error(model, &e),
    };

    match msg {
        DocumentMsg::Insert { offset, text } => tab.document.insert(offset, &text),
        DocumentMsg::Append(text) => {
            let end = tab.document.len_chars();
            tab.document.insert(end, &text);
        }
        DocumentMsg::Delete { start, end } => tab.document.delete(start, end),
        DocumentMsg::SetText(text) => tab.document.set_text(&text),
    }
    tab.editor.clear_highlights();

    Some(Cmd::Redraw)
}
