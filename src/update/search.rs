//! Find/replace message handlers

use crate::commands::Cmd;
use crate::messages::SearchMsg;
use crate::model::AppModel;
use crate::search::{find_all, replace_all};

use super::report_error;

/// Handle find/replace on the active tab
pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    let tab = match model.registry.active_tab_mut() {
        Ok(tab) => tab,
        Err(e) => return report_error(model, &e),
    };
    let text = tab.document.text();

    match msg {
        SearchMsg::Find(query) => {
            let hits: Vec<(usize, usize)> = match find_all(&text, &query) {
                Ok(matches) => matches.collect(),
                Err(e) => return report_error(model, &e),
            };
            let count = hits.len();
            tab.editor.highlights = hits;

            tracing::debug!(query = %query, count, "find");
            model.ui.set_status(match count {
                0 => format!("No matches for \"{}\"", query),
                1 => "1 match".to_string(),
                n => format!("{} matches", n),
            });
            Some(Cmd::Redraw)
        }

        SearchMsg::Replace { query, replacement } => {
            let replaced = match replace_all(&text, &query, &replacement) {
                Ok(replaced) => replaced,
                Err(e) => return report_error(model, &e),
            };
            let count = find_all(&text, &query).map_or(0, Iterator::count);

            tab.document.set_text(&replaced);
            tab.editor.clear_highlights();

            tracing::debug!(query = %query, count, "replace");
            model.ui.set_status(format!(
                "Replaced {} occurrence{}",
                count,
                if count == 1 { "" } else { "s" }
            ));
            Some(Cmd::Redraw)
        }
    }
}
