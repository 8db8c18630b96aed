//! bakes a startup banner into the binary, printed by `main`
//! - <https://doc.rust-lang.org/cargo/reference/environment-variables.html>
//! - <https://doc.rust-lang.org/cargo/reference/build-scripts.html>

use std::process::Command;
use std::time::SystemTime;
use std::{env, io};

fn main() {
    let git_commit_hash = match git_commit_hash() {
        Ok(hash) if !hash.trim().is_empty() => hash,
        Ok(_) => String::from("<unknown>"),
        Err(e) => {
            eprintln!("WARN: couldn't retrieve commit hash, is `git` installed? {e}");
            String::from("<unknown>")
        }
    };
    let var = |key: &str| env::var(key).unwrap_or_else(|_| String::from("?"));

    let banner_msg = format!(
        "
---------------- {} ----------------
{}
version: {} ({} build for {})
built on {} from commit {}
enabled features: [{}]
puzzle catalog: $ACRONYMLE_PUZZLES or data/puzzles.csv
----------------------------------------
",
        env!("CARGO_PKG_NAME").to_uppercase(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        var("PROFILE"),
        var("TARGET"),
        humantime::format_rfc3339_seconds(SystemTime::now()),
        git_commit_hash.trim(),
        var("CARGO_CFG_FEATURE"),
    );

    println!("cargo:rustc-env=BANNER={banner_msg:?}"); // escape newlines and quote it
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

/// short hash of `HEAD`
/// # Errors
/// if `git` can't be run
fn git_commit_hash() -> io::Result<String> {
    let git_output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()?;
    Ok(String::from_utf8_lossy(&git_output.stdout).to_string())
}
