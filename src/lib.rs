//! tabpad - tabbed plain-text editor core
//!
//! Editor state changes only through `update::update`, following the Elm
//! Architecture. Side effects (file I/O, prompts, quitting) are described as
//! `Cmd` values and carried out by `runtime::Runtime`.

pub mod autosave;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod file_io;
pub mod messages;
pub mod model;
pub mod recent_files;
pub mod runtime;
pub mod search;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use error::EditorError;
pub use file_io::{DiskGateway, FileGateway};
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
