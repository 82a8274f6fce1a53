#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn daynotes_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daynotes").unwrap();
    cmd.env_remove("DAYNOTES_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a small export: one user, a `daynotes` channel with two days of messages
pub fn write_export(root: &Path) {
    fs::write(
        root.join("users.json"),
        r#"[{"id": "U1", "name": "josh", "real_name": "Josh Example"}]"#,
    )
    .unwrap();

    let channel = root.join("daynotes");
    fs::create_dir(&channel).unwrap();
    // 2019-10-24T12:00:00Z
    fs::write(
        channel.join("2019-10-24.json"),
        r#"[
            {"type": "message", "ts": "1571918400.000100", "user": "U1", "text": "plain thursday note"},
            {"type": "message", "ts": "1571918500.000200", "user": "U1", "text": "a reply", "thread_ts": "1571918400.000100"}
        ]"#,
    )
    .unwrap();
    // 2019-10-25T12:00:00Z
    fs::write(
        channel.join("2019-10-25.json"),
        r#"[
            {"type": "message", "subtype": "channel_join", "ts": "1572004700.000300", "user": "U2", "text": "joined"},
            {"type": "message", "ts": "1572004800.000400", "user": "U1", "text": "[thursday] late addition\nfriday work"}
        ]"#,
    )
    .unwrap();
}
