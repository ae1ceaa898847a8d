//! Dynamic library loading.
//!
//! The static bindings resolve their symbols at link time, so a missing
//! library or symbol there is a build failure. This module is the run-time
//! half of the same contract: loading a shared library and resolving typed
//! symbols, with explicit errors for both failure points.

use std::os::raw::c_char;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};

use crate::error::{InteropError, InteropResult};
use crate::marshal::NativeString;

/// `void f(const char *)` - the print shape.
type PrintFn = unsafe extern "C" fn(*const c_char);

/// `void f(void)` - the plain shape.
type PlainFn = unsafe extern "C" fn();

/// A dynamically loaded library.
pub struct DynamicLibrary {
    /// Path the library was loaded from.
    path: PathBuf,
    /// The loaded library handle.
    library: Library,
}

impl DynamicLibrary {
    /// Load a library from the given path.
    pub fn open(path: impl AsRef<Path>) -> InteropResult<Self> {
        let path = path.as_ref().to_path_buf();

        // Safety: loading a shared library runs its initializers. The
        // caller vouches for the library at this path.
        let library = unsafe {
            Library::new(&path).map_err(|e| InteropError::Load {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        };

        Ok(Self { path, library })
    }

    /// Path this library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Call a `void name(const char *)` routine with a marshaled message.
    ///
    /// The callee borrows the buffer for the duration of the call only.
    pub fn call_print(&self, name: &str, message: &NativeString) -> InteropResult<()> {
        // Safety: the symbol is resolved with this exact shape; a library
        // exporting a different signature under this name breaks the
        // contract on the native side.
        let f: Symbol<PrintFn> = unsafe { self.resolve(name)? };
        unsafe { f(message.as_ptr()) };
        Ok(())
    }

    /// Call a `void name(void)` routine.
    pub fn call_plain(&self, name: &str) -> InteropResult<()> {
        // Safety: as for call_print.
        let f: Symbol<PlainFn> = unsafe { self.resolve(name)? };
        unsafe { f() };
        Ok(())
    }

    /// Resolve a symbol, mapping resolution failure to [`InteropError::Symbol`].
    ///
    /// # Safety
    ///
    /// The caller must supply the type the native symbol actually has.
    unsafe fn resolve<T>(&self, name: &str) -> InteropResult<Symbol<'_, T>> {
        self.library
            .get(name.as_bytes())
            .map_err(|e| InteropError::Symbol {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Construct the platform-specific shared library filename.
pub fn library_filename(name: &str) -> String {
    #[cfg(target_os = "linux")]
    {
        if name.starts_with("lib") && name.ends_with(".so") {
            name.to_string()
        } else {
            format!("lib{}.so", name)
        }
    }

    #[cfg(target_os = "macos")]
    {
        if name.starts_with("lib") && name.ends_with(".dylib") {
            name.to_string()
        } else {
            format!("lib{}.dylib", name)
        }
    }

    #[cfg(target_os = "windows")]
    {
        if name.ends_with(".dll") {
            name.to_string()
        } else {
            format!("{}.dll", name)
        }
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        name.to_string()
    }
}
