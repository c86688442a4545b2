//! Runtime module - executes side effects on the event thread
//!
//! This module contains the code that connects the pure update loop to the
//! outside world:
//! - `app` - the command executor (file I/O, prompts, quit)
//! - `prompt` - path pickers, overwrite confirmation and notifications
//! - `console` - line-oriented stdin front-end

pub mod app;
pub mod console;
pub mod prompt;

pub use app::Runtime;
pub use console::{parse_line, ConsoleInput, Query};
pub use prompt::{Prompter, RfdPrompter};
