use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn expected_example(width: usize) -> String {
    let rule = format!("\n\n{}\n", "=".repeat(width));
    let modeline = format!("vim:tw={}:ts=8:ft=help:norl:", width);
    let body = [
        "example.txt\nAn _example_ file.",
        "CONTENTS\n  1 Usage",
        "  Usage\n  1) First\n\n  2) Second",
        modeline.as_str(),
    ]
    .join(&rule);
    format!("{}\n", body)
}

#[test]
fn renders_fixture_to_stdout() {
    let mut cmd = cargo_bin_cmd!("helpdoc");
    cmd.arg(fixture_path("example.json")).arg("--width").arg("40");

    cmd.assert().success().stdout(expected_example(40));
}

#[test]
fn reads_stdin() {
    let source = fs::read_to_string(fixture_path("example.json")).unwrap();
    let mut cmd = cargo_bin_cmd!("helpdoc");
    cmd.arg("-").write_stdin(source);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  1) First"))
        .stdout(predicate::str::ends_with("vim:tw=78:ts=8:ft=help:norl:\n"));
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("example.txt");

    let mut cmd = cargo_bin_cmd!("helpdoc");
    cmd.arg(fixture_path("example.json"))
        .arg("-w")
        .arg("40")
        .arg("-o")
        .arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(output).unwrap(), expected_example(40));
}

#[test]
fn applies_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("helpdoc.toml");
    fs::write(
        &config,
        "[publishing.document]\nemit_modeline = false\n\n[output]\ntrailing_newline = false\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("helpdoc");
    cmd.arg(fixture_path("example.json")).arg("-c").arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vim:").not())
        .stdout(predicate::str::ends_with("  2) Second"));
}

#[test]
fn rejects_invalid_source() {
    let mut cmd = cargo_bin_cmd!("helpdoc");
    cmd.arg("-").write_stdin("{ \"type\": \"poem\" }");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid source"));
}

#[test]
fn reports_structural_errors() {
    let source = r#"{
        "type": "definition_list",
        "list_type": "ordered",
        "definitions": [ { "descriptions": [] } ]
    }"#;
    let mut cmd = cargo_bin_cmd!("helpdoc");
    cmd.arg("-").write_stdin(source);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing term"));
}

#[test]
fn reports_missing_file() {
    let mut cmd = cargo_bin_cmd!("helpdoc");
    cmd.arg("does-not-exist.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read does-not-exist.json"));
}

#[test]
fn rejects_zero_width() {
    let mut cmd = cargo_bin_cmd!("helpdoc");
    cmd.arg(fixture_path("example.json")).arg("--width").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("display_width"));
}
