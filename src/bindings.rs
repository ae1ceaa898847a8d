//! Static link surface for the native routines.
//!
//! The routines are declared once with their exact C signatures, so a
//! call-site mistake is a build error rather than a run-time fault. Both
//! are compiled and linked by the build script: `mylib_print` from
//! `native/mylib.c`, `inline_greeting` from the inline C source embedded
//! in `build.rs`.

use std::os::raw::c_char;

use crate::error::InteropResult;
use crate::marshal::NativeString;

extern "C" {
    fn mylib_print(message: *const c_char);
    fn inline_greeting();
}

/// Print a marshaled message through the precompiled library.
///
/// The callee borrows the buffer for the duration of the call only.
pub fn print_message(message: &NativeString) {
    // Safety: the pointer is valid and null-terminated for the whole call
    // and the signature matches the definition in native/mylib.c.
    unsafe { mylib_print(message.as_ptr()) }
}

/// Invoke the inline routine: no arguments, output-only side effect.
pub fn print_inline_greeting() {
    // Safety: the signature matches the inline definition in build.rs.
    unsafe { inline_greeting() }
}

/// Marshal, print, and release in one scope.
///
/// The buffer is released on every exit path, including the marshal
/// failure path, where no native call is made.
pub fn print_str(message: &str) -> InteropResult<()> {
    let native = NativeString::new(message)?;
    print_message(&native);
    Ok(())
}

/// Flush output buffered on the native side of the boundary.
///
/// The managed and native halves buffer stdout independently; without a
/// flush at the handoff points, piped output can interleave out of call
/// order.
pub fn flush_native_output() {
    // Safety: fflush(NULL) flushes all open output streams.
    unsafe { libc::fflush(std::ptr::null_mut()) };
}
