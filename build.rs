fn main() {
    // Re-run when HEAD moves (commits, checkouts, new tags)
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    println!("cargo:rustc-env=XIWA_DEV_BUILD={}", dev_build_id());
}

/// Short commit hash for untagged builds; empty on a release tag or
/// outside a git checkout.
fn dev_build_id() -> String {
    let git = |args: &[&str]| {
        std::process::Command::new("git")
            .args(args)
            .output()
            .ok()
            .filter(|o| o.status.success())
    };

    if git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some() {
        return String::new();
    }
    git(&["rev-parse", "--short", "HEAD"])
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default()
}
