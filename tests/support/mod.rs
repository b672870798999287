#![allow(dead_code)]

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::net::TcpListener;
use tempfile::TempDir;

/// Get a Command for blogrec with environment overrides cleared
pub fn blogrec() -> Command {
    let mut cmd = cargo_bin_cmd!("blogrec");
    cmd.env_remove("BLOGREC_API_URL")
        .env_remove("BLOGREC_TIMEOUT")
        .env_remove("BLOGREC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a fixture file and return the directory holding it plus its path
pub fn fixture(json: serde_json::Value) -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, json.to_string()).unwrap();
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}

/// Parse the single JSON document printed on stdout
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout should be one JSON document")
}

/// Base URL of a local port with nothing listening on it
pub fn unreachable_api() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{}", port)
}

pub fn blogs_fixture() -> serde_json::Value {
    serde_json::json!({
        "blogs": [
            {
                "_id": "1",
                "title": "Go concurrency",
                "content": "goroutines channels",
                "image": "https://img.example/1.png",
                "categories": ["Programming"],
                "author": {"_id": "a1", "name": "Ada"},
                "createdAt": "2024-03-01T10:00:00.000Z"
            },
            {
                "_id": "2",
                "title": "Cooking pasta",
                "content": "tomato basil",
                "categories": ["food"],
                "createdAt": "2024-03-02T10:00:00.000Z"
            },
            {
                "_id": "3",
                "title": "Goroutines in depth",
                "content": "channels select scheduler goroutines",
                "categories": ["programming"],
                "author": {"_id": "a2"}
            }
        ]
    })
}
