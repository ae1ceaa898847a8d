//! Build script for the cbridge native collaborators.
//!
//! Compiles both halves of the native surface with the host C compiler:
//! the precompiled-library half from `native/mylib.c`, and the inline half
//! from C source embedded below, written to OUT_DIR first. Both are linked
//! into the crate as static libraries.

use std::env;
use std::fs;
use std::path::PathBuf;

/// C source for the inline routine.
///
/// Kept in the build script rather than a checked-in source file so the
/// demonstration covers inline-C embedding as well as library linkage.
const INLINE_C: &str = r#"
#include <stdio.h>

void inline_greeting(void) {
    printf("Hello from inline C\n");
}
"#;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=native/mylib.c");
    println!("cargo:rerun-if-changed=native/mylib.h");

    // Precompiled-library half: an ordinary C translation unit.
    cc::Build::new()
        .file("native/mylib.c")
        .include("native")
        .compile("mylib");

    // Inline half: generated into OUT_DIR and compiled the same way.
    let inline_c = out_dir.join("inline.c");
    fs::write(&inline_c, INLINE_C).expect("Failed to write inline.c");

    cc::Build::new().file(&inline_c).compile("cbridge_inline");
}
