use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphtrace that ignores any user configuration
pub fn graphtrace() -> Command {
    let mut cmd = cargo_bin_cmd!("graphtrace");
    cmd.env("GRAPHTRACE_CONFIG_DIR", "/nonexistent/graphtrace-tests")
        .env_remove("RUST_LOG")
        .env_remove("GRAPHTRACE_LOG")
        .env_remove("GRAPHTRACE_LOG_LEVEL");
    cmd
}

/// Run a command that must succeed and parse its stdout as JSON
#[allow(dead_code)]
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Write an input file into `dir`
#[allow(dead_code)]
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Kinds of every step in a `{result, steps}` document
#[allow(dead_code)]
pub fn step_kinds(run: &serde_json::Value) -> Vec<String> {
    run["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["kind"].as_str().unwrap().to_string())
        .collect()
}
