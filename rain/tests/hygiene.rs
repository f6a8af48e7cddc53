//! Hygiene: the render loop must never take down the page.
//!
//! `Engine::tick` runs every 40 ms for the lifetime of the tab, so a single
//! panic kills the animation for good. These tests scan `rain/src/`
//! (excluding `*_test.rs`) for aborting calls and silently discarded
//! results. Budgets are zero and stay zero. Every crate the manifest
//! declares must also be referenced from `src/`.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Aborts.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

fn production_sources() -> Vec<(String, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn check(pattern: &str, max: usize) {
    let sources = production_sources();
    assert!(!sources.is_empty(), "no source files found; run from the crate root");
    let mut total = 0;
    let mut report = Vec::new();
    for (path, content) in &sources {
        let count = content.lines().filter(|line| line.contains(pattern)).count();
        if count > 0 {
            total += count;
            report.push(format!("  {path}: {count}"));
        }
    }
    assert!(
        total <= max,
        "`{pattern}` budget exceeded: found {total}, max {max}.\n{}",
        report.join("\n")
    );
}

#[test]
fn unwrap_budget() {
    check(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    check(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    check("panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    check("unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    check("todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    check("unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

/// Crate names (as Rust paths) declared in `[dependencies]`.
fn manifest_dependencies() -> Vec<String> {
    let Ok(manifest) = fs::read_to_string("Cargo.toml") else {
        return Vec::new();
    };
    let mut names = Vec::new();
    let mut in_deps = false;
    for line in manifest.lines().map(str::trim) {
        if let Some(header) = line.strip_prefix('[') {
            let header = header.trim_end_matches(']');
            in_deps = header == "dependencies";
            if let Some(name) = header.strip_prefix("dependencies.") {
                names.push(name.replace('-', "_"));
            }
            continue;
        }
        if !in_deps {
            continue;
        }
        if let Some((name, _)) = line.split_once('=') {
            names.push(name.trim().replace('-', "_"));
        }
    }
    names
}

#[test]
fn declared_dependencies_are_used() {
    let deps = manifest_dependencies();
    assert!(!deps.is_empty(), "no dependencies parsed; run from the crate root");
    let sources = production_sources();
    let unused = deps
        .iter()
        .filter(|dep| {
            let path = format!("{dep}::");
            !sources.iter().any(|(_, content)| content.contains(&path))
        })
        .collect::<Vec<_>>();
    assert!(unused.is_empty(), "declared but unused dependencies: {unused:?}");
}
