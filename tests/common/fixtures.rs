//! Offline template sources and canned GitHub responses
//!
//! Two sources mirroring the real layout: source A lists `Node` and `Python`
//! at the repository root, source B lists `Node` (a duplicate) and `Go`
//! under `templates/`.

#![allow(dead_code)]

use cli_showcase::{MemoryClient, SourceSpec};

pub const SOURCE_A: SourceSpec = SourceSpec {
    repository: "acme/gitignore",
    directory: None,
    pattern: r".+\.gitignore$",
    recursive: true,
};

pub const SOURCE_B: SourceSpec = SourceSpec {
    repository: "other/gitignore",
    directory: Some("templates"),
    pattern: r".+\.gitignore$",
    recursive: false,
};

pub const SOURCES: [SourceSpec; 2] = [SOURCE_A, SOURCE_B];

pub const NODE_A: &str = "node_modules/\nnpm-debug.log*\n";
pub const NODE_B: &str = "# duplicate that must never be used\nnode_modules\n";
pub const PYTHON: &str = "__pycache__/\n*.py[cod]\n";
pub const GO: &str = "*.exe\n*.test\n";

/// Builds a tree listing body from paths
pub fn tree_body(paths: &[&str]) -> String {
    let entries: Vec<serde_json::Value> = paths
        .iter()
        .map(|path| serde_json::json!({ "path": path, "mode": "100644", "type": "blob" }))
        .collect();
    serde_json::json!({ "sha": "abc123", "tree": entries, "truncated": false }).to_string()
}

/// Client serving both tree listings and every raw template
pub fn github_client() -> MemoryClient {
    MemoryClient::new()
        .with_body(
            SOURCE_A.tree_url(),
            tree_body(&[
                ".github",
                "Global",
                "Node.gitignore",
                "Python.gitignore",
                "README.md",
            ]),
        )
        .with_body(
            SOURCE_B.tree_url(),
            tree_body(&[
                "templates",
                "templates/Node.gitignore",
                "templates/Go.gitignore",
                "templates/order.txt",
                "README.md",
            ]),
        )
        .with_body(SOURCE_A.raw_url("Node.gitignore"), NODE_A)
        .with_body(SOURCE_A.raw_url("Python.gitignore"), PYTHON)
        .with_body(SOURCE_B.raw_url("templates/Node.gitignore"), NODE_B)
        .with_body(SOURCE_B.raw_url("templates/Go.gitignore"), GO)
}

/// Same as [`github_client`] but the Go template answers HTTP 500
pub fn client_with_broken_go() -> MemoryClient {
    github_client().with_status(SOURCE_B.raw_url("templates/Go.gitignore"), 500)
}
