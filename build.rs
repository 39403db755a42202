use std::env;
use std::process::Command;

// Release builds are stamped with the commit they were built from and refuse
// to build from a dirty tree. Anything else is a development build.
fn main() {
    println!("cargo:rerun-if-env-changed=OPT_LEVEL");

    let opt_level = env::var("OPT_LEVEL").unwrap_or_else(|_| "0".to_string());
    let is_optimized = opt_level != "0";

    let version = if is_optimized {
        let output = Command::new("git")
            .arg("status")
            .arg("--porcelain")
            .output()
            .expect("Failed to execute git status --porcelain");

        if !output.stdout.is_empty() {
            panic!("Uncommitted files exist")
        }

        let git_commit_hash = Command::new("git")
            .arg("rev-parse")
            .arg("HEAD")
            .output()
            .expect("Failed to get git commit hash")
            .stdout;

        String::from_utf8(git_commit_hash).expect("Invalid UTF-8 data")
    } else {
        "Development build".into()
    };

    println!("cargo:rustc-env=RELEASE={}", version.trim());
}
