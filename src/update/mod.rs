//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod layout;
mod search;
mod view;

use crate::commands::Cmd;
use crate::error::EditorError;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::{save_active_document, update_app};
pub use document::update_document;
pub use layout::update_layout;
pub use search::update_search;
pub use view::update_view;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::View(m) => view::update_view(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Surface an error on the status line and as a notification
fn report_error(model: &mut AppModel, err: &EditorError) -> Option<Cmd> {
    tracing::warn!(error = %err, "operation failed");
    let text = err.user_message();
    model.ui.set_status(text.clone());
    Some(Cmd::error(text))
}

/// Traced update wrapper (debug builds only)
///
/// Logs every message and the dirty/tab count it leaves behind.
/// Autosave ticks are noisy and only logged at trace level.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::AppMsg;

    let is_noisy = matches!(&msg, Msg::App(AppMsg::AutosaveTick));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if is_noisy {
        tracing::trace!(target: "message", msg = %msg_name, "processing");
    } else {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if !is_noisy {
        debug!(
            target: "message",
            tabs = model.registry.len(),
            dirty = model.registry.dirty_tabs().count(),
            "processed"
        );
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Document::Insert { offset: 0, text: "x" }`
/// - `App::SaveFile`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::View(m) => format!("View::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
        // File contents would flood the log
        Msg::App(crate::messages::AppMsg::FileLoaded { path, result }) => format!(
            "App::FileLoaded {{ path: {}, ok: {} }}",
            path.display(),
            result.is_ok()
        ),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
