// build.rs

fn main() {
    // --- Link against libX11 ---
    // pkg-config first; fall back to plain linker flags when the .pc file
    // is missing. Xkb lives in libX11 itself, so nothing else is needed.
    if let Err(e) = pkg_config::probe_library("x11") {
        eprintln!(
            "pkg-config failed for library 'x11' ({}). Falling back to manual linking.",
            e
        );
        println!("cargo:rustc-link-lib=X11");
        println!("cargo:rustc-link-search=/usr/lib");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
