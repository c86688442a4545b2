//! Command executor
//!
//! Owns the model together with the file gateway and the prompter. A message
//! is dispatched through `update`, the returned command is executed
//! synchronously, and any result is queued as a follow-up message until the
//! queue drains. Nothing here runs concurrently with `update`.

use std::collections::VecDeque;

use crate::commands::Cmd;
use crate::file_io::FileGateway;
use crate::messages::{AppMsg, Msg};
use crate::model::{resolve_path, AppModel};
use crate::update::update;

use super::prompt::Prompter;

/// Single-threaded editor runtime
#[derive(Debug)]
pub struct Runtime<G, P> {
    pub model: AppModel,
    gateway: G,
    prompter: P,
    quit_requested: bool,
}

impl<G: FileGateway, P: Prompter> Runtime<G, P> {
    pub fn new(model: AppModel, gateway: G, prompter: P) -> Self {
        Self {
            model,
            gateway,
            prompter,
            quit_requested: false,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Whether a `Quit` command has been executed
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Dispatch a message and every message its side effects produce
    ///
    /// Returns true if the model changed in a way that needs a redraw.
    /// Stops immediately once quit is requested; queued follow-ups are dropped.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let mut pending = VecDeque::from([msg]);
        let mut needs_redraw = false;

        while let Some(msg) = pending.pop_front() {
            if self.quit_requested {
                break;
            }
            if let Some(cmd) = update(&mut self.model, msg) {
                needs_redraw |= cmd.needs_redraw();
                self.process_cmd(cmd, &mut pending);
            }
        }

        needs_redraw
    }

    fn process_cmd(&mut self, cmd: Cmd, pending: &mut VecDeque<Msg>) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::LoadFile { path } => {
                let result = self.gateway.read(&path);
                pending.push_back(Msg::App(AppMsg::FileLoaded { path, result }));
            }
            Cmd::SaveFile { tab, path, content } => {
                let result = self.gateway.write(&path, &content);
                pending.push_back(Msg::App(AppMsg::SaveCompleted { tab, path, result }));
            }

            // =====================================================================
            // Prompts
            // =====================================================================
            Cmd::ShowOpenFileDialog => match self.prompter.pick_open_path() {
                Some(path) => pending.push_back(Msg::App(AppMsg::OpenFile(path))),
                None => tracing::debug!("open dialog cancelled"),
            },

            Cmd::ShowSaveFileDialog { tab, start_dir } => {
                let Some(path) = self.prompter.pick_save_path(&resolve_path(&start_dir)) else {
                    tracing::debug!(tab = %tab, "save dialog cancelled");
                    return;
                };
                if self.gateway.exists(&path) && !self.prompter.confirm_overwrite(&path) {
                    tracing::debug!(path = %path.display(), "overwrite declined");
                    return;
                }
                pending.push_back(Msg::App(AppMsg::SaveAsTarget { tab, path }));
            }

            Cmd::ShowMessage { level, text } => self.prompter.notify(level, &text),

            Cmd::Quit => {
                tracing::info!("quit requested");
                self.quit_requested = true;
            }
        }
    }
}
