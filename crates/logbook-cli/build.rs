use std::process::Command;

// Embeds the commit hash shown by `logbook --version`.
fn main() {
    println!("cargo::rerun-if-changed=../../.git/HEAD");
    println!("cargo::rerun-if-changed=../../.git/refs/heads/");
    println!("cargo::rerun-if-env-changed=LOGBOOK_GIT_HASH");

    let from_env = std::env::var("LOGBOOK_GIT_HASH")
        .ok()
        .filter(|hash| !hash.is_empty());

    let hash = from_env
        .or_else(short_head_hash)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo::rustc-env=GIT_COMMIT_HASH={}", hash);
}

fn short_head_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string())
}
