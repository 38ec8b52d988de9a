// File: crates/idle-chart/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    // cfg(target_os) in a build script reports the host, so read the target from Cargo.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "windows" {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
