//! Integration tests for the emmet binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn expands_abbreviation_argument() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.arg("ul>li*2")
        .assert()
        .success()
        .stdout("<ul>\n\t<li></li>\n\t<li></li>\n</ul>\n");
}

#[test]
fn jumps_and_indent_flags() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.args(["div>p+span", "--jumps", "--indent", "  "])
        .assert()
        .success()
        .stdout("<div>\n  <p>$1</p>\n  <span>$2</span>\n</div>\n");
}

#[test]
fn stacked_flag_changes_numbering() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.args(["ul*2>li.i$*2", "--stacked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("class=\"i4\""));
}

#[test]
fn reads_abbreviation_from_stdin() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.write_stdin("p.note\n")
        .assert()
        .success()
        .stdout("<p class=\"note\"></p>\n");
}

#[test]
fn empty_input_prints_syntax_help() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.write_stdin("  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Syntax: http://docs.emmet.io/abbreviations/syntax/"));
}

#[test]
fn parse_error_shows_caret() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.arg("div>")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "error: operator '>' at offset 3 has no operand",
        ))
        .stderr(predicate::str::contains("  div>\n     ^"));
}

#[test]
fn treeviz_format() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.args(["ul>li*2", "--format", "treeviz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⧉ 3 nodes").and(predicate::str::contains("(2/2)")));
}

#[test]
fn json_format() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.args(["a#home", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"a\"").and(predicate::str::contains("\"home\"")));
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.args(["p", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("format 'yaml' not found"));
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.arg("--list-formats").assert().success().stdout(
        predicate::str::contains("json")
            .and(predicate::str::contains("tag"))
            .and(predicate::str::contains("treeviz")),
    );
}

#[test]
fn preview_renders_silent_then_counting() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.args(["p+p", "--preview"])
        .assert()
        .success()
        .stdout("<p></p>\n<p></p>\n---\n<p>$1</p>\n<p>$2</p>\n");
}

#[test]
fn preview_rejects_format() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.args(["p", "--preview", "--format", "json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_format_fails_before_reading_input() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.args(["--format", "yaml"])
        .write_stdin("div>")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("format 'yaml' not found"))
        .stderr(predicate::str::contains("has no operand").not());
}

#[test]
fn too_deep_nesting_is_reported() {
    let abbreviation = format!("{}a", "a>".repeat(5_000));
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.arg(abbreviation)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nesting deeper than 512 levels at offset 1025"));
}

#[test]
fn config_file_sets_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[render]\njumps = true\nindent_string = \" \"").expect("write config");

    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.arg("div>p")
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout("<div>\n <p>$1</p>\n</div>\n");
}

#[test]
fn project_config_is_picked_up_from_working_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join(".emmet.toml"), "[cli]\nformat = \"treeviz\"\n")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.current_dir(dir.path())
        .arg("ul>li")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ 2 nodes"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let mut cmd = cargo_bin_cmd!("emmet");
    cmd.args(["div>p", "--verbose"])
        .assert()
        .success()
        .stdout("<div>\n\t<p></p>\n</div>\n")
        .stderr(predicate::str::contains("applying operator"));
}
