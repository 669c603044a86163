// Build script to inject version information from git tags

use std::process::Command;

fn main() {
    let version = get_git_version().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=HOTDAILY_VERSION={}", version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}

/// `v0.2.0` → `0.2.0`, `v0.2.0-5-gabc123` → `0.2.0`, untagged → `<pkg>-<sha>`
fn get_git_version() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    if described.is_empty() {
        return None;
    }

    if let Some(tag) = described.strip_prefix('v') {
        let version = tag.split('-').next().unwrap_or(tag);
        return Some(version.to_string());
    }

    let base_version = env!("CARGO_PKG_VERSION");
    match described.strip_suffix("-dirty") {
        Some(sha) => Some(format!("{}-{}-dirty", base_version, sha)),
        None => Some(format!("{}-{}", base_version, described)),
    }
}
