//! App message handlers (file operations, autosave, lifecycle)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::error::EditorError;
use crate::model::{resolve_path, AppModel, Document};

use super::report_error;

/// Handle app messages (file operations, autosave, lifecycle)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::NewFile => {
            let editor = model.new_editor_state();
            let id = model.registry.create_new(editor);
            tracing::info!(tab = %id, "new untitled document");
            model.ui.set_status("New file");
            Some(Cmd::Redraw)
        }

        AppMsg::OpenFile(path) => match model.registry.ensure_not_open(&path) {
            Ok(resolved) => {
                model.ui.set_status("Loading...");
                Some(Cmd::LoadFile { path: resolved })
            }
            Err(e) => report_error(model, &e),
        },

        AppMsg::OpenFileDialog => Some(Cmd::ShowOpenFileDialog),

        AppMsg::FileLoaded { path, result } => {
            let content = match result {
                Ok(content) => content,
                Err(e) => return report_error(model, &e),
            };
            let resolved = match model.registry.ensure_not_open(&path) {
                Ok(resolved) => resolved,
                Err(e) => return report_error(model, &e),
            };

            let editor = model.new_editor_state();
            let id = model
                .registry
                .add(Document::from_content(resolved.clone(), &content), editor);
            tracing::info!(tab = %id, path = %resolved.display(), "opened file");
            model.ui.set_status(format!("Loaded: {}", resolved.display()));
            model.recent_files.add(resolved);
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => save_active_document(model),

        AppMsg::SaveFileAs => match model.registry.active_tab_id() {
            Some(tab) => Some(Cmd::ShowSaveFileDialog {
                tab,
                start_dir: model.storage_dir(),
            }),
            None => report_error(model, &EditorError::NoActiveTab),
        },

        AppMsg::SaveAsTarget { tab, path } => {
            let path = resolve_path(&path);
            if let Some(other) = model.registry.find_open_file(&path) {
                if other != tab {
                    return report_error(model, &EditorError::AlreadyOpen(path));
                }
            }
            let content = match model.registry.get(tab) {
                Some(t) => t.document.text(),
                None => {
                    tracing::warn!(tab = %tab, "save-as target for a tab that no longer exists");
                    return None;
                }
            };
            model.ui.set_status("Saving...");
            Some(Cmd::SaveFile { tab, path, content })
        }

        AppMsg::SaveCompleted { tab, path, result } => match result {
            Ok(()) => {
                if let Some(t) = model.registry.get_mut(tab) {
                    t.document.mark_saved(path.clone());
                }
                tracing::info!(tab = %tab, path = %path.display(), "saved");
                model.ui.set_status(format!("Saved: {}", path.display()));
                Some(Cmd::Redraw)
            }
            Err(e) => report_error(model, &e),
        },

        AppMsg::AutosaveTick => autosave(model),

        AppMsg::About => Some(Cmd::info(about_text())),

        AppMsg::Quit => {
            let unsaved: Vec<String> = model
                .registry
                .dirty_tabs()
                .map(|tab| tab.document.display_name())
                .collect();
            if !unsaved.is_empty() {
                // No confirmation prompt on exit; unsaved work is dropped.
                tracing::warn!(tabs = ?unsaved, "quitting with unsaved changes");
            }
            Some(Cmd::Quit)
        }
    }
}

/// Save the active tab through the same path as a user-initiated save
///
/// Untitled documents go through the save-as picker; documents with a path
/// are written directly and marked clean once the write succeeds.
pub fn save_active_document(model: &mut AppModel) -> Option<Cmd> {
    let active = model
        .registry
        .active_tab()
        .map(|tab| (tab.id, tab.document.file_path.clone()));

    match active {
        Ok((tab, Some(path))) => {
            let content = model.registry.get(tab)?.document.text();
            model.ui.set_status("Saving...");
            Some(Cmd::SaveFile { tab, path, content })
        }
        Ok((tab, None)) => Some(Cmd::ShowSaveFileDialog {
            tab,
            start_dir: model.storage_dir(),
        }),
        Err(e) => report_error(model, &e),
    }
}

/// Save the active tab if it has unsaved changes
fn autosave(model: &mut AppModel) -> Option<Cmd> {
    let dirty = match model.registry.active_document() {
        Ok(doc) => doc.is_modified,
        Err(_) => {
            tracing::trace!("autosave: no open tab");
            return None;
        }
    };

    if !dirty {
        tracing::trace!("autosave: active document is clean");
        return None;
    }

    tracing::debug!("autosave: saving active document");
    save_active_document(model)
}

fn about_text() -> String {
    format!(
        "{} {}\nA minimal tabbed text editor",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
