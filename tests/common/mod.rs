#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A fresh, empty directory under the cargo test scratch area.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    p.push(name);
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Writes an executable shell script standing in for as65.
///
/// The script is written by a child shell. A writable fd held by this
/// process would leak into whatever another test thread forks at the same
/// moment, and exec of the script would then fail with ETXTBSY.
pub fn fake_assembler(dir: &Path, body: &str) -> PathBuf {
    let script = dir.join("fake-as65");
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(r#"cat > "$1" && chmod 755 "$1""#)
        .arg("sh")
        .arg(&script)
        .stdin(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(format!("#!/bin/sh\n{}\n", body).as_bytes())
        .unwrap();
    assert!(child.wait().unwrap().success());
    script
}
