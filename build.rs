fn main() {
    // The toolchain version is only known to the build script, so repeat it
    // into the crate's build environment. Leaving it unset on failure makes
    // the banner show the "Unknown" placeholder.
    if let Ok(version) = rustc_version::version() {
        println!("cargo:rustc-env=COEXIST_RUSTC_VERSION={}", version);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
