//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the crate's `src/` tree (browser bindings included) for
//! antipatterns. Each has a budget. If you must add one, fix an existing one
//! first; the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics crash the page's wasm instance.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss: discards errors without inspecting.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

// `&window()?` as a listener target does not coerce to `&EventTarget`; bind it first.
const MAX_INLINE_LISTEN_TARGET: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    count_lines(files, |line| line.contains(pattern))
}

fn count_lines(files: &[SourceFile], matches: impl Fn(&str) -> bool) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| matches(line)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_budget(pattern: &str, label: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; run from the crate root");
    let hits = count_in_source(&files, pattern);
    let count = total(&hits);
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{}", format_hits(&hits));
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", ".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", ".expect()", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", "panic!()", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", "unreachable!()", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", "todo!()", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", "unimplemented!()", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", "let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", ".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", "#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

#[test]
fn inline_listen_target_budget() {
    let files = source_files();
    let hits = count_lines(&files, |line| line.contains("listen::<") && line.contains("()?"));
    let count = total(&hits);
    assert!(
        count <= MAX_INLINE_LISTEN_TARGET,
        "inline listener target budget exceeded: found {count}, max {MAX_INLINE_LISTEN_TARGET}.\n{}",
        format_hits(&hits)
    );
}
