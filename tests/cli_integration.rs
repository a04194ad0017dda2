//! CLI integration tests for sitesync
//!
//! Stdout of `sync` and `dump` must be nothing but the JSON store, whatever gets logged.

use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::TempDir;

fn sitesync_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sitesync"))
}

/// A site with one new markdown post and a config without a `[log]` section.
fn setup_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let base = dir.path();
    fs::create_dir_all(base.join("root")).unwrap();
    fs::write(base.join("root").join("first.md"), "---\ntitle: My First Post\n---\n\nHello.\n").unwrap();
    fs::create_dir_all(base.join("public")).unwrap();

    let config = format!(r#"[paths]
root_dir = "{root}"
public_dir = "{public}"
dist_dir = "{dist}"
snapshot_file = "{snapshot}"
"#,
        root = base.join("root").display(),
        public = base.join("public").display(),
        dist = base.join("dist").display(),
        snapshot = base.join("zdata").join("data.json.gz").display());
    fs::write(base.join("sitesync.toml"), config).unwrap();
    dir
}

fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).unwrap_or_else(|e| {
        panic!("stdout is not JSON ({}): {}", e, String::from_utf8_lossy(stdout))
    })
}

fn config_arg(dir: &Path) -> String {
    dir.join("sitesync.toml").display().to_string()
}

#[test]
fn test_sync_stdout_is_json() {
    let dir = setup_site();

    let output = sitesync_cmd()
        .args(["sync", "--config-path", &config_arg(dir.path())])
        .assert()
        .success()
        .stderr(predicate::str::contains("snapshot"))
        .get_output()
        .stdout
        .clone();

    let json = stdout_json(&output);
    let posts = json["posts"].as_object().unwrap();
    assert_eq!(posts.len(), 1);
    assert!(dir.path().join("zdata").join("data.json.gz").exists());
}

#[test]
fn test_dump_stdout_is_json() {
    let dir = setup_site();
    sitesync_cmd()
        .args(["sync", "--config-path", &config_arg(dir.path())])
        .assert()
        .success();

    let output = sitesync_cmd()
        .args(["dump", "--config-path", &config_arg(dir.path())])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded 1 posts"))
        .get_output()
        .stdout
        .clone();

    let json = stdout_json(&output);
    let post = json["posts"].as_object().unwrap().values().next().unwrap();
    assert_eq!(post["main"]["metadata"]["title"], "My First Post");
}

#[test]
fn test_dump_corrupt_snapshot_fails() {
    let dir = setup_site();
    let snapshot = dir.path().join("broken.json.gz");
    fs::write(&snapshot, b"not gzip").unwrap();

    sitesync_cmd()
        .args(["dump", "--config-path", &config_arg(dir.path())])
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
