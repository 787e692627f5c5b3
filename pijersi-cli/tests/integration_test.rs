//! Integration tests for the PIJERSI drawing generator
//!
//! Tests the full stack: board layout, document builders, serializer and
//! the command line binary.

use std::path::Path;
use std::process::Command;

use pijersi_core::{BoardLayout, FACE_CATALOG};
use pijersi_draw::{artifacts, serialize, BoardBuilder, BoardConfig, GeneratorConfig};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn pijersi(output: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pijersi"))
        .arg("--output")
        .arg(output)
        .args(args)
        .output()
        .unwrap()
}

fn svg_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".svg"))
        .collect();
    names.sort();
    names
}

// ============================================================================
// LIBRARY STACK
// ============================================================================

#[test]
fn test_board_cells_match_layout() {
    let layout = BoardLayout::pijersi();
    let doc = BoardBuilder::new(BoardConfig::default().with_labels(pijersi_draw::LabelMode::All))
        .build(7, 7, 40.0)
        .unwrap();

    assert_eq!(doc.count("polygon"), layout.len());
    assert_eq!(doc.count("text"), layout.len());

    let text = serialize(&doc).unwrap();
    for cell in layout.cells() {
        assert!(text.contains(&format!(">{}</text>", cell.name)), "missing {}", cell.name);
    }
}

#[test]
fn test_standard_set_is_stable_across_runs() {
    let config = GeneratorConfig::default();
    let first = artifacts::standard_set(&config, 30.0).unwrap();
    let second = artifacts::standard_set(&config, 30.0).unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.file_name, b.file_name);
        assert_eq!(serialize(&a.document).unwrap(), serialize(&b.document).unwrap());
    }
}

// ============================================================================
// COMMAND LINE
// ============================================================================

#[test]
fn test_cli_all_writes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = pijersi(dir.path(), &["all", "--cell-size", "20"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let files = svg_files(dir.path());
    assert_eq!(files.len(), 10 + 3 + FACE_CATALOG.len());
    for variant in FACE_CATALOG.iter() {
        assert!(files.contains(&format!("{}.svg", variant.file_stem())));
    }
}

#[test]
fn test_cli_board_prints_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = pijersi(dir.path(), &["board", "--labels", "none"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.trim().ends_with("pijersi_board_without_labels.svg"));
    assert_eq!(svg_files(dir.path()), vec!["pijersi_board_without_labels.svg"]);
}

#[test]
fn test_cli_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"board": {"laser": true, "decoration": true}}"#).unwrap();
    let output = dir.path().join("pictures");

    let out = pijersi(&output, &["board", "--config", config.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        svg_files(&output),
        vec!["pijersi_laser_board_with_few_labels_with_decoration.svg"]
    );
}

#[test]
fn test_cli_unknown_face_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = pijersi(dir.path(), &["face", "rock", "green"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown piece variant"));
    assert!(svg_files(dir.path()).is_empty());
}

#[test]
fn test_cli_invalid_board_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = pijersi(dir.path(), &["board", "--rows", "0"]);

    assert!(!out.status.success());
    assert!(svg_files(dir.path()).is_empty());
}
