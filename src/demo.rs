//! The demonstration call sequence.
//!
//! A single linear pass across the boundary: marshal the greeting, print
//! it through the precompiled library, release the buffer, invoke the
//! inline routine. Managed output goes through the supplied writer so
//! callers and tests can capture it; native output goes to the process
//! stdout.

use std::io::Write;

use crate::bindings;
use crate::error::InteropResult;

/// Separator line bracketing the native output.
pub const SEPARATOR: &str = "-------------------------------";

/// Message routed through the precompiled library.
pub const LIBRARY_GREETING: &str = "Hello from a C library function";

/// Message the inline routine prints on its own.
pub const INLINE_GREETING: &str = "Hello from inline C";

/// Run the demonstration sequence.
///
/// Output, in order: separator, library greeting, inline greeting,
/// separator. The marshaled buffer lives only for the span of the library
/// call and is released on every exit path.
pub fn run(out: &mut impl Write) -> InteropResult<()> {
    writeln!(out, "{}", SEPARATOR)?;
    // Managed buffering must drain before native code writes to stdout.
    out.flush()?;

    bindings::print_str(LIBRARY_GREETING)?;
    bindings::print_inline_greeting();
    bindings::flush_native_output();

    writeln!(out, "{}", SEPARATOR)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), 31);
        assert!(SEPARATOR.bytes().all(|b| b == b'-'));
    }

    #[test]
    fn test_run_writes_both_separators() {
        // Native prints bypass the writer; the managed half contributes
        // exactly the two separator lines.
        let mut captured = Vec::new();
        run(&mut captured).unwrap();

        let text = String::from_utf8(captured).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![SEPARATOR, SEPARATOR]);
    }

    #[test]
    fn test_greetings_are_nul_free() {
        // Both greetings must marshal cleanly.
        assert!(!LIBRARY_GREETING.bytes().any(|b| b == 0));
        assert!(!INLINE_GREETING.bytes().any(|b| b == 0));
    }
}
