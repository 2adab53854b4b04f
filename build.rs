//! Build script: embeds the version string as `SHELLRC_VERSION`.

use std::process::Command;

fn main() {
    // Prefer SHELLRC_VERSION env var if set (e.g., by CI release workflow),
    // otherwise fall back to git describe for local development builds.
    if let Ok(version) = std::env::var("SHELLRC_VERSION") {
        println!("cargo:rustc-env=SHELLRC_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !version.is_empty() {
            println!("cargo:rustc-env=SHELLRC_VERSION={version}");
        }
    }

    println!("cargo:rerun-if-env-changed=SHELLRC_VERSION");
}
