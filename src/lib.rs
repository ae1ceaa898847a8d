//! Cbridge - Safe C Interop Demonstration
//!
//! Shows how a memory-safe caller talks to native C code across the
//! foreign-call boundary: a precompiled C library and an inline C routine,
//! both compiled by the build script, invoked through a typed surface with
//! scoped string marshaling.
//!
//! # Boundary contract
//!
//! - **Marshal**: a managed string becomes a null-terminated buffer in
//!   unmanaged memory ([`NativeString`]); allocation failure and interior
//!   NUL bytes are explicit errors, never invalid handles.
//! - **Invoke**: every native routine is declared with its exact signature
//!   ([`signature::library_api`]); callees borrow buffers for the span of
//!   a call and never retain them.
//! - **Release**: the buffer is freed exactly once when its owner goes out
//!   of scope, on every exit path.
//!
//! # Architecture
//!
//! ```text
//! Managed caller
//!       │
//!       ▼
//! Typed call surface (bindings / loader)
//!       │
//!       ▼
//! Scoped marshaling (NativeString)
//!       │
//!       ▼
//! Native routine (mylib.c / inline C)
//! ```
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> cbridge::InteropResult<()> {
//! cbridge::demo::run(&mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod bindings;
pub mod demo;
pub mod error;
pub mod loader;
pub mod marshal;
pub mod signature;

// Re-export commonly used types
pub use bindings::{flush_native_output, print_inline_greeting, print_message, print_str};
pub use demo::{INLINE_GREETING, LIBRARY_GREETING, SEPARATOR};
pub use error::{InteropError, InteropResult};
pub use loader::{library_filename, DynamicLibrary};
pub use marshal::NativeString;
pub use signature::{library_api, NativeType, Signature};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_static_surface_matches_api_table() {
        // Every routine the bindings link against appears in the table.
        let names: Vec<&str> = library_api().iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"mylib_print"));
        assert!(names.contains(&"inline_greeting"));
    }
}
