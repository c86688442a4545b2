//! Command-line argument parsing for the editor
//!
//! Every positional path is opened in its own tab at startup. Repeated paths
//! are passed through as-is; the registry rejects the second open.

use clap::Parser;
use std::path::PathBuf;

/// A tabbed plain-text editor
#[derive(Parser, Debug)]
#[command(name = "tabpad", version, about = "A tabbed plain-text editor")]
pub struct CliArgs {
    /// Files to open, one tab each
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}
