//! End-to-end console sessions
//!
//! Lines are parsed exactly as the stdin reader parses them and fed through
//! `console::run` against in-memory files.

mod common;

use std::sync::mpsc;

use common::{test_runtime, MemoryGateway, TestRuntime};
use tabpad::runtime::console::{self, ConsoleInput};
use tabpad::runtime::parse_line;

/// Run a script to completion and return everything printed
fn run_script(rt: &mut TestRuntime, script: &str) -> String {
    let (tx, rx) = mpsc::channel::<ConsoleInput>();
    for input in script.lines().filter_map(parse_line) {
        tx.send(input).unwrap();
    }
    drop(tx);

    let mut out = Vec::new();
    console::run(rt, rx, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_edit_find_replace_save() {
    let mut rt = test_runtime(MemoryGateway::new().with_file("/todo.txt", "buy milk\n"));
    let output = run_script(
        &mut rt,
        "open /todo.txt
append buy more milk
find milk
replace milk => oat milk
save
show",
    );

    assert!(output.contains("Loaded: /todo.txt"));
    assert!(output.contains("2 matches"));
    assert!(output.contains("Replaced 2 occurrences"));
    assert!(output.contains("Saved: /todo.txt"));
    assert_eq!(
        rt.gateway().contents("/todo.txt").as_deref(),
        Some("buy oat milk\nbuy more oat milk\n")
    );
    assert!(output.ends_with("buy oat milk\nbuy more oat milk\n\n"));
}

#[test]
fn test_exit_stops_processing() {
    let mut rt = test_runtime(MemoryGateway::new());
    run_script(&mut rt, "new\nexit\nnew\nnew");

    assert!(rt.should_quit());
    assert_eq!(rt.model.registry.len(), 1);
}

#[test]
fn test_tabs_listing_follows_selection() {
    let gateway = MemoryGateway::new()
        .with_file("/a.txt", "a\n")
        .with_file("/b.txt", "b\n");
    let mut rt = test_runtime(gateway);
    let output = run_script(
        &mut rt,
        "open /a.txt
open /b.txt
tab 2
insert 0 x
font +4
wrap
tabs",
    );

    let listing: Vec<&str> = output.lines().rev().take(2).collect();
    assert_eq!(listing[1], "   1 a.txt (font 14, wrap off)");
    assert_eq!(listing[0], "*  2 b.txt [modified] (font 18, wrap on)");
}

#[test]
fn test_invalid_lines_are_reported_without_side_effects() {
    let mut rt = test_runtime(MemoryGateway::new());
    let output = run_script(&mut rt, "bogus\ndelete a b\ntab 9");

    assert!(output.contains("unknown command: bogus"));
    assert!(output.contains("usage: delete <start> <end>"));
    assert!(output.contains("No such tab"));
    assert!(rt.model.registry.is_empty());
}

#[test]
fn test_edits_without_tabs_report_error() {
    let mut rt = test_runtime(MemoryGateway::new());
    let output = run_script(&mut rt, "append hello\nfind x\nfont 2");

    // Status only prints when it changes
    assert_eq!(output.matches("No document is open").count(), 1);
    assert_eq!(rt.prompter().errors().len(), 3);
}
