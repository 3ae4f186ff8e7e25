//! Integration tests for the `glyph-grid` binary: labels, stdout/stderr split
//! and exit statuses.
//!
//! Inputs are local HTML files in a temp directory. Stderr is a pipe here, so
//! the spinner and ANSI colours stay off.
//!
//! Run with:
//!   cargo test --test cli

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::{tempdir, TempDir};

fn grid_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_glyph-grid"))
}

fn run_grid(args: &[&str]) -> Output {
    Command::new(grid_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run glyph-grid binary")
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Write a page with one `<p>` per line of each `(x, glyph, y)` triple.
fn write_doc(dir: &TempDir, rows: &[(&str, &str, &str)]) -> PathBuf {
    let mut html = String::from("<html><body><p>x</p><p>glyph</p><p>y</p>");
    for (x, glyph, y) in rows {
        html.push_str(&format!("<p>{x}</p><p>{glyph}</p><p>{y}</p>"));
    }
    html.push_str("</body></html>");
    let path = dir.path().join("doc.html");
    std::fs::write(&path, html).expect("write input document");
    path
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

// ── Success ──────────────────────────────────────────────────────────────────

#[test]
fn prints_info_line_then_grid_on_stdout() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, &[("0", "a", "0"), ("1", "&#9608;", "1")]);

    let output = run_grid(&["--no-progress", path_arg(&doc)]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_text(&output));
    assert_eq!(
        stdout_text(&output),
        "[info] parsed 2 triples, 2 unique cells -> grid 2x2\na \n █\n"
    );
    assert!(stderr_text(&output).is_empty(), "stderr: {}", stderr_text(&output));
}

#[test]
fn quiet_prints_only_the_grid() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, &[("1", "★", "0")]);

    let output = run_grid(&["-q", "--blank", ".", path_arg(&doc)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_text(&output), ".★\n");
}

#[test]
fn json_output_carries_text_and_stats() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, &[("0", "x", "0"), ("0", "y", "0")]);

    let output = run_grid(&["--json", path_arg(&doc)]);

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_str(stdout_text(&output).trim()).expect("stdout is JSON");
    assert_eq!(json["text"], "y\n");
    assert_eq!(json["stats"]["triples"], 2);
    assert_eq!(json["stats"]["unique_cells"], 1);
}

#[test]
fn output_file_moves_messages_to_stderr() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, &[("0", "█", "0")]);
    let out_path = dir.path().join("grid.txt");

    let output = run_grid(&["--no-progress", "-o", path_arg(&out_path), path_arg(&doc)]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_text(&output).is_empty());
    assert!(stderr_text(&output).starts_with("[info] parsed 1 triples"));
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "█\n");
}

// ── Failures ─────────────────────────────────────────────────────────────────

#[test]
fn missing_input_exits_1_with_error_label() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.html");

    let output = run_grid(&["--no-progress", path_arg(&missing)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_text(&output).is_empty());
    let stderr = stderr_text(&output);
    assert!(
        stderr.starts_with("[error] failed to load input: File not found"),
        "stderr: {stderr}"
    );
}

#[test]
fn invalid_blank_exits_1() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, &[("0", "█", "0")]);

    let output = run_grid(&["--blank", "", path_arg(&doc)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).starts_with("[error] Invalid configuration"));
}

#[test]
fn no_triples_exits_2_with_warning() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("empty.html");
    std::fs::write(&doc, "<p>nothing</p><p>here</p>").unwrap();

    let output = run_grid(&["--no-progress", path_arg(&doc)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_text(&output).is_empty());
    let stderr = stderr_text(&output);
    assert!(stderr.starts_with("[warn] Parsed 0 triples"), "stderr: {stderr}");
}

#[test]
fn oversized_grid_exits_3_with_samples() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, &[("5", "▓", "5"), ("0", "█", "0")]);

    let output = run_grid(&["--no-progress", "--max-cells", "10", path_arg(&doc)]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout_text(&output).is_empty());
    let stderr = stderr_text(&output);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 3, "stderr: {stderr}");
    assert!(lines[0].starts_with("[warn] Suspicious grid 6x6 from 2 cells"));
    assert_eq!(lines[1], "  sample 1: ▓ 5 5  (cp=U+2593)");
    assert_eq!(lines[2], "  sample 2: █ 0 0  (cp=U+2588)");
}
