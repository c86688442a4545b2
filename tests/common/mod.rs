//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use tabpad::commands::MessageLevel;
use tabpad::config::EditorConfig;
use tabpad::error::EditorError;
use tabpad::file_io::FileGateway;
use tabpad::messages::{AppMsg, Msg};
use tabpad::model::{resolve_path, AppModel};
use tabpad::runtime::{Prompter, Runtime};

/// In-memory file system that counts writes
#[derive(Debug, Default)]
pub struct MemoryGateway {
    files: RefCell<HashMap<PathBuf, String>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file; the path is resolved the same way the registry resolves it
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(resolve_path(path.as_ref()), content.to_string());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(&resolve_path(path.as_ref()))
            .cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Make every following write fail with a permission error
    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }
}

impl FileGateway for MemoryGateway {
    fn read(&self, path: &Path) -> Result<String, EditorError> {
        self.files
            .borrow()
            .get(&resolve_path(path))
            .cloned()
            .ok_or_else(|| {
                EditorError::io(path, &io::Error::new(io::ErrorKind::NotFound, "not found"))
            })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), EditorError> {
        if self.fail_writes.get() {
            return Err(EditorError::io(
                path,
                &io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.writes.set(self.writes.get() + 1);
        self.files
            .borrow_mut()
            .insert(resolve_path(path), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(&resolve_path(path))
    }
}

/// Prompter with canned answers that records what it was asked
#[derive(Debug)]
pub struct ScriptedPrompter {
    open_paths: RefCell<VecDeque<PathBuf>>,
    save_paths: RefCell<VecDeque<PathBuf>>,
    confirm: Cell<bool>,
    save_prompts: Cell<usize>,
    overwrite_prompts: Cell<usize>,
    notifications: RefCell<Vec<(MessageLevel, String)>>,
}

impl Default for ScriptedPrompter {
    fn default() -> Self {
        Self {
            open_paths: RefCell::default(),
            save_paths: RefCell::default(),
            confirm: Cell::new(true),
            save_prompts: Cell::new(0),
            overwrite_prompts: Cell::new(0),
            notifications: RefCell::default(),
        }
    }
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_open(&self, path: impl Into<PathBuf>) {
        self.open_paths.borrow_mut().push_back(path.into());
    }

    pub fn queue_save(&self, path: impl Into<PathBuf>) {
        self.save_paths.borrow_mut().push_back(path.into());
    }

    /// Answer for every overwrite confirmation (default: yes)
    pub fn set_confirm(&self, answer: bool) {
        self.confirm.set(answer);
    }

    pub fn save_prompts(&self) -> usize {
        self.save_prompts.get()
    }

    pub fn overwrite_prompts(&self) -> usize {
        self.overwrite_prompts.get()
    }

    pub fn notifications(&self) -> Vec<(MessageLevel, String)> {
        self.notifications.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notifications
            .borrow()
            .iter()
            .filter(|(level, _)| *level == MessageLevel::Error)
            .map(|(_, text)| text.clone())
            .collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn pick_open_path(&self) -> Option<PathBuf> {
        self.open_paths.borrow_mut().pop_front()
    }

    fn pick_save_path(&self, _start_dir: &Path) -> Option<PathBuf> {
        self.save_prompts.set(self.save_prompts.get() + 1);
        self.save_paths.borrow_mut().pop_front()
    }

    fn confirm_overwrite(&self, _path: &Path) -> bool {
        self.overwrite_prompts.set(self.overwrite_prompts.get() + 1);
        self.confirm.get()
    }

    fn notify(&self, level: MessageLevel, message: &str) {
        self.notifications
            .borrow_mut()
            .push((level, message.to_string()));
    }
}

pub type TestRuntime = Runtime<MemoryGateway, ScriptedPrompter>;

/// Runtime over the given in-memory files with default configuration
pub fn test_runtime(gateway: MemoryGateway) -> TestRuntime {
    Runtime::new(
        AppModel::new(EditorConfig::default()),
        gateway,
        ScriptedPrompter::new(),
    )
}

pub fn open(runtime: &mut TestRuntime, path: impl Into<PathBuf>) {
    runtime.dispatch(Msg::App(AppMsg::OpenFile(path.into())));
}

pub fn new_file(runtime: &mut TestRuntime) {
    runtime.dispatch(Msg::App(AppMsg::NewFile));
}

/// Text of the active document
pub fn active_text(runtime: &TestRuntime) -> String {
    runtime
        .model
        .registry
        .active_document()
        .map(|doc| doc.text())
        .unwrap_or_default()
}
