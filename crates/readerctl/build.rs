//! Stamps the binary with the package version plus the git commit it was
//! built from, when available.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let pkg_version = env!("CARGO_PKG_VERSION");
    let version = match git_commit() {
        Some(commit) => format!("{pkg_version} ({commit})"),
        None => pkg_version.to_string(),
    };

    println!("cargo:rustc-env=READERCTL_VERSION={version}");
}

/// Short hash of HEAD, suffixed with `-dirty` for uncommitted changes.
fn git_commit() -> Option<String> {
    let head = git(&["rev-parse", "--short", "HEAD"])?;
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
        .is_some_and(|status| !status.is_empty());

    Some(if dirty { format!("{head}-dirty") } else { head })
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}
