//! Stamps `acsum --version` with the short commit hash of the workspace.

use std::path::{Path, PathBuf};
use std::process::Command;

fn git(repo: &Path, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(repo).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn main() {
    let workspace = std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .and_then(|dir| dir.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(".."));

    let sha = git(&workspace, &["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=ACSUM_BUILD_SHA={sha}");

    // Rebuild when HEAD moves so the stamp stays current
    if let Some(head) = git(&workspace, &["rev-parse", "--git-path", "HEAD"]) {
        println!("cargo:rerun-if-changed={}", workspace.join(head).display());
    }
}
