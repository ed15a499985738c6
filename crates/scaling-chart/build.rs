// File: crates/scaling-chart/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU text layout.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
