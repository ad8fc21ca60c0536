use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn chart_renders_png_to_default_path() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("journeydoc");
    Command::new(exe)
        .current_dir(tmp.path())
        .arg("chart")
        .assert()
        .success()
        .stdout(predicates::str::contains("fertility_ai_flowchart.png"));

    let bytes = fs::read(tmp.path().join("fertility_ai_flowchart.png")).expect("read png");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "output is not a PNG");

    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let reader = decoder.read_info().expect("decode png");
    let info = reader.info();
    assert_eq!((info.width, info.height), (1200, 800));
}

#[test]
fn chart_writes_svg_to_stdout() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("journeydoc");
    let output = Command::new(exe)
        .current_dir(tmp.path())
        .args(["chart", "--format", "svg"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let svg = String::from_utf8(output).expect("utf-8 svg");
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("FertilityAI User Flow"));
}

#[test]
fn samples_emits_all_files_and_summary() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("journeydoc");
    Command::new(exe)
        .current_dir(tmp.path())
        .args(["samples", "--out-dir", "."])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Advanced User Interaction Examples Created!",
        ))
        .stdout(predicates::str::contains("Basic Consultation: 6 interaction examples"))
        .stdout(predicates::str::contains("Text Chat: 100% usage rate"));

    for name in [
        "conversation_examples.json",
        "user_interaction_patterns.json",
        "advanced_capabilities.json",
        "assistant_profile.json",
        "session_types_analysis.csv",
        "feature_usage_metrics.csv",
        "user_journey_analysis.csv",
    ] {
        assert!(tmp.path().join(name).exists(), "missing output: {name}");
    }

    // Emitted JSON must parse and keep non-ASCII content as literal UTF-8.
    let text = fs::read_to_string(tmp.path().join("conversation_examples.json"))
        .expect("read conversations");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert!(value.get("multilingual_support").is_some());
    assert!(text.contains("¡Por supuesto!"));
}

#[test]
fn unknown_command_prints_usage() {
    let exe = assert_cmd::cargo_bin!("journeydoc");
    Command::new(exe)
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("USAGE:"));
}
