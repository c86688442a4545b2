//! Line-oriented console front-end
//!
//! A reader thread turns stdin lines into [`ConsoleInput`] values and posts
//! them on the same channel the autosave scheduler ticks into. The main
//! thread drains that channel, so every edit, search and save runs on one
//! thread.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::file_io::FileGateway;
use crate::messages::{AppMsg, DocumentMsg, LayoutMsg, Msg, ViewMsg};
use crate::model::AppModel;

use super::app::Runtime;
use super::prompt::Prompter;

pub const HELP: &str = "\
commands:
  new                         open an untitled tab
  open [path]                 open a file (picker if no path)
  save | saveas               save the active tab
  find <text>                 highlight matches
  replace <text> => <with>    replace all matches
  insert <offset> <text>      insert text at a character offset
  append <text>               append a line
  delete <start> <end>        delete a character range
  wrap                        toggle word wrap
  font <delta>                change font size
  tab <n>                     select tab n (1-based)
  tabs | show                 list tabs / print the active document
  about | help | exit";

/// Read-only requests answered straight from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Tabs,
    Show,
    Help,
}

/// One unit of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Msg(Msg),
    Query(Query),
    /// A line that could not be parsed, with the reason
    Invalid(String),
}

impl From<Msg> for ConsoleInput {
    fn from(msg: Msg) -> Self {
        ConsoleInput::Msg(msg)
    }
}

/// Parse a console line; blank lines yield `None`
pub fn parse_line(line: &str) -> Option<ConsoleInput> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let (command, rest) = match trimmed.split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (trimmed, ""),
    };

    let input = match command {
        "new" => Msg::App(AppMsg::NewFile).into(),
        "open" if rest.trim().is_empty() => Msg::App(AppMsg::OpenFileDialog).into(),
        "open" => Msg::App(AppMsg::OpenFile(PathBuf::from(rest.trim()))).into(),
        "save" => Msg::App(AppMsg::SaveFile).into(),
        "saveas" => Msg::App(AppMsg::SaveFileAs).into(),
        "find" => Msg::find(rest).into(),
        "replace" => match rest.split_once(" => ") {
            Some((query, replacement)) => Msg::replace(query, replacement).into(),
            None => ConsoleInput::Invalid("usage: replace <text> => <with>".to_string()),
        },
        "insert" => match rest.split_once(' ').map(|(n, text)| (n.parse::<usize>(), text)) {
            Some((Ok(offset), text)) => Msg::insert(offset, text).into(),
            _ => ConsoleInput::Invalid("usage: insert <offset> <text>".to_string()),
        },
        "append" => Msg::Document(DocumentMsg::Append(format!("{}\n", rest))).into(),
        "delete" => {
            let mut parts = rest.split_whitespace().map(str::parse::<usize>);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(Ok(start)), Some(Ok(end)), None) => {
                    Msg::Document(DocumentMsg::Delete { start, end }).into()
                }
                _ => ConsoleInput::Invalid("usage: delete <start> <end>".to_string()),
            }
        }
        "wrap" => Msg::View(ViewMsg::ToggleWordWrap).into(),
        "font" => match rest.trim().parse::<i32>() {
            Ok(delta) => Msg::View(ViewMsg::ChangeFontSize(delta)).into(),
            Err(_) => ConsoleInput::Invalid("usage: font <delta>".to_string()),
        },
        "tab" => match rest.trim().parse::<usize>() {
            Ok(n) if n > 0 => Msg::Layout(LayoutMsg::SelectTabIndex(n - 1)).into(),
            _ => ConsoleInput::Invalid("usage: tab <n>".to_string()),
        },
        "tabs" => ConsoleInput::Query(Query::Tabs),
        "show" => ConsoleInput::Query(Query::Show),
        "help" => ConsoleInput::Query(Query::Help),
        "about" => Msg::App(AppMsg::About).into(),
        "exit" | "quit" => Msg::App(AppMsg::Quit).into(),
        other => ConsoleInput::Invalid(format!("unknown command: {} (try 'help')", other)),
    };
    Some(input)
}

/// Render the answer to a query
pub fn answer(model: &AppModel, query: Query) -> String {
    match query {
        Query::Help => HELP.to_string(),
        Query::Show => match model.registry.active_document() {
            Ok(doc) => doc.text(),
            Err(e) => e.user_message(),
        },
        Query::Tabs => {
            if model.registry.is_empty() {
                return "no tabs open".to_string();
            }
            let active = model.registry.active_tab_id();
            model
                .registry
                .tabs()
                .iter()
                .enumerate()
                .map(|(i, tab)| {
                    format!(
                        "{} {:>2} {}{} (font {}, wrap {})",
                        if Some(tab.id) == active { '*' } else { ' ' },
                        i + 1,
                        tab.document.display_name(),
                        if tab.document.is_modified { " [modified]" } else { "" },
                        tab.editor.font_size,
                        if tab.editor.word_wrap { "on" } else { "off" },
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Forward stdin lines to `tx` until EOF, then ask the editor to quit
pub fn spawn_stdin_reader(tx: Sender<ConsoleInput>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!("stdin read failed: {}", e);
                        break;
                    }
                };
                if let Some(input) = parse_line(&line) {
                    if tx.send(input).is_err() {
                        return;
                    }
                }
            }
            let _ = tx.send(Msg::App(AppMsg::Quit).into());
        })
}

/// Drain `rx` into the runtime, echoing status changes and query answers
pub fn run<G, P, W>(
    runtime: &mut Runtime<G, P>,
    rx: Receiver<ConsoleInput>,
    out: &mut W,
) -> io::Result<()>
where
    G: FileGateway,
    P: Prompter,
    W: Write,
{
    for input in rx {
        match input {
            ConsoleInput::Msg(msg) => {
                let before = runtime.model.ui.status_message.clone();
                runtime.dispatch(msg);
                let status = &runtime.model.ui.status_message;
                if *status != before && !status.is_empty() {
                    writeln!(out, "{}", status)?;
                }
            }
            ConsoleInput::Query(query) => writeln!(out, "{}", answer(&runtime.model, query))?,
            ConsoleInput::Invalid(reason) => writeln!(out, "{}", reason)?,
        }
        out.flush()?;

        if runtime.should_quit() {
            break;
        }
    }
    Ok(())
}
