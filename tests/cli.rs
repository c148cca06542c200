#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gcl-switcher"))
        .args(args)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(home)
        .output()
        .expect("run gcl-switcher")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read json")).expect("parse json")
}

#[test]
fn scenario_from_empty_home() {
    let home = tempfile::tempdir().unwrap();
    let settings = home.path().join(".claude").join("settings.json");
    let credentials = home.path().join(".gcl-switcher.json");

    let out = run(home.path(), &["set-key", "sk-abcdefgh12345678"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("sk-abcde...5678"));
    assert!(!stdout(&out).contains("sk-abcdefgh12345678"));
    assert_eq!(read_json(&credentials)["apiKey"], "sk-abcdefgh12345678");

    let out = run(home.path(), &["use", "glm"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Restart Claude Code"));
    let doc = read_json(&settings);
    assert_eq!(doc["env"]["ANTHROPIC_BASE_URL"], "https://api.z.ai/api/anthropic");
    assert_eq!(doc["env"]["ANTHROPIC_AUTH_TOKEN"], "sk-abcdefgh12345678");

    let out = run(home.path(), &["status"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("GLM (z.ai)"));
    assert!(text.contains("https://api.z.ai/api/anthropic"));

    let out = run(home.path(), &["use", "claude"]);
    assert!(out.status.success());
    let env = read_json(&settings)["env"].as_object().cloned().unwrap();
    assert!(env.keys().all(|k| !k.starts_with("ANTHROPIC_")));

    let out = run(home.path(), &["status"]);
    assert!(stdout(&out).contains("Claude (native)"));
    assert!(stdout(&out).contains("sk-abcde...5678"));
}

#[test]
fn use_glm_without_key_exits_1_and_writes_nothing() {
    let home = tempfile::tempdir().unwrap();
    let out = run(home.path(), &["use", "glm"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("set-key"));
    assert!(!home.path().join(".claude").exists());
}

#[test]
fn status_warns_when_glm_active_without_key() {
    let home = tempfile::tempdir().unwrap();
    let claude_dir = home.path().join(".claude");
    fs::create_dir_all(&claude_dir).unwrap();
    fs::write(
        claude_dir.join("settings.json"),
        r#"{"env": {"ANTHROPIC_BASE_URL": "https://api.z.ai/api/anthropic"}}"#,
    )
    .unwrap();

    let out = run(home.path(), &["status"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("GLM (z.ai)"));
    assert!(text.contains("WARNING  :"));
    assert!(text.contains("no API key saved"));
    assert!(text.contains("set-key"));
}

#[test]
fn status_native_without_key_has_no_warning() {
    let home = tempfile::tempdir().unwrap();
    let out = run(home.path(), &["status"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Claude (native)"));
    assert!(!stdout(&out).contains("WARNING"));
}

#[test]
fn use_claude_twice_reports_nothing_changed() {
    let home = tempfile::tempdir().unwrap();
    let out = run(home.path(), &["use", "claude"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Nothing changed"));
}

#[test]
fn bad_arguments_exit_1() {
    let home = tempfile::tempdir().unwrap();
    let cases: [&[&str]; 5] = [&["use"], &["use", "gpt"], &["set-key"], &["set-key", ""], &["bogus"]];
    for args in cases {
        let out = run(home.path(), args);
        assert_eq!(out.status.code(), Some(1), "args: {args:?}");
    }
    assert!(!home.path().join(".gcl-switcher.json").exists());
}

#[test]
fn help_forms_exit_0() {
    let home = tempfile::tempdir().unwrap();
    let cases: [&[&str]; 4] = [&[], &["help"], &["--help"], &["-h"]];
    for args in cases {
        let out = run(home.path(), args);
        assert_eq!(out.status.code(), Some(0), "args: {args:?}");
        assert!(stdout(&out).contains("set-key"));
    }
}
