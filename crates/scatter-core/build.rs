// File: crates/scatter-core/build.rs
// Summary: Links the Windows system libraries Skia's raster backend pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
