//! Runs the `rms` binary against scratch directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rms-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("maps")).unwrap();
    fs::create_dir_all(dir.join("home")).unwrap();
    fs::write(dir.join("style.css"), "body {}").unwrap();
    dir
}

fn rms(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rms"))
        .args(["--log-format", "json"])
        .args(args)
        .env("HOME", dir.join("home"))
        .env("USERPROFILE", dir.join("home"))
        .env("RMS_MAPS_DIR", dir.join("maps"))
        .env("RMS_OUT_DIR", dir.join("out"))
        .env("RMS_STYLE", dir.join("style.css"))
        .env_remove("RMS_ENV")
        .env_remove("RMS_LOG")
        .output()
        .unwrap()
}

#[test]
fn html_renders_a_map() {
    let dir = scratch_dir("render");
    fs::write(dir.join("maps").join("a.rms"), "<PLAYER_SETUP>\n").unwrap();
    let output = rms(&dir, &["html", "a"]);
    assert!(output.status.success());
    assert!(dir.join("out").join("a.html").is_file());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn html_fails_when_a_map_cannot_be_written() {
    let dir = scratch_dir("unwritable");
    fs::write(dir.join("maps").join("a.rms"), "<PLAYER_SETUP>\n").unwrap();
    fs::create_dir_all(dir.join("out").join("a.html")).unwrap();
    let output = rms(&dir, &["html", "a"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 of 1 maps could not be rendered"), "{}", stderr);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn html_fails_when_some_maps_fail() {
    let dir = scratch_dir("partial");
    fs::write(dir.join("maps").join("a.rms"), "a").unwrap();
    fs::write(dir.join("maps").join("b.rms"), "b").unwrap();
    fs::create_dir_all(dir.join("out").join("b.html")).unwrap();
    let output = rms(&dir, &["html"]);
    assert!(!output.status.success());
    assert!(dir.join("out").join("a.html").is_file());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 of 2 maps could not be rendered"), "{}", stderr);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn broken_config_is_reported() {
    let dir = scratch_dir("config");
    let config_dir = dir.join("home").join(".rms").join("default");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), "{ broken").unwrap();
    let output = rms(&dir, &["config", "show"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring config file, using defaults"), "{}", stderr);
    assert!(stderr.contains("config.json"), "{}", stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("maps_dir"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_config_is_silent() {
    let dir = scratch_dir("noconfig");
    let output = rms(&dir, &["config", "show"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unterminated_comment_is_warned_once() {
    let dir = scratch_dir("unterminated");
    let script = dir.join("maps").join("open.rms");
    fs::write(&script, "<PLAYER_SETUP>\n/* never closed\n").unwrap();
    let output = rms(&dir, &["tokens", script.to_str().unwrap()]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Comment is never closed").count(), 1, "{}", stderr);
    assert_eq!(stderr.lines().count(), 1, "{}", stderr);
    fs::remove_dir_all(&dir).unwrap();
}
