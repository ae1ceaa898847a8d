//! String marshaling across the foreign-call boundary.
//!
//! A managed string crosses into native code as a null-terminated buffer
//! in unmanaged memory. [`NativeString`] owns that buffer for its whole
//! lifetime: allocate and copy on construction, release exactly once on
//! drop, on every exit path. Native callees only ever borrow the pointer
//! for the duration of a call; ownership never transfers.

use std::os::raw::c_char;
use std::slice;

use crate::error::{InteropError, InteropResult};

/// A null-terminated string buffer in unmanaged memory.
///
/// Holds a raw pointer, so the type is neither `Send` nor `Sync`; the
/// demonstration is single-threaded and the buffer is never shared.
pub struct NativeString {
    /// Pointer returned by `libc::malloc`; never null.
    ptr: *mut c_char,
    /// Byte length excluding the terminator.
    len: usize,
}

impl NativeString {
    /// Marshal a managed string into unmanaged memory.
    ///
    /// Allocates `s.len() + 1` bytes, copies the string's bytes, and
    /// appends the terminator. Fails with [`InteropError::NulByte`] if the
    /// input contains an interior NUL, and with [`InteropError::Allocation`]
    /// if the allocator returns null - an invalid handle is never handed
    /// out.
    pub fn new(s: &str) -> InteropResult<Self> {
        if let Some(position) = s.bytes().position(|b| b == 0) {
            return Err(InteropError::NulByte { position });
        }

        let len = s.len();
        let size = len + 1;

        // Safety: size is nonzero; the null return is checked before use.
        let ptr = unsafe { libc::malloc(size) as *mut c_char };
        if ptr.is_null() {
            return Err(InteropError::Allocation { size });
        }

        // Safety: source and destination do not overlap and the
        // destination has room for len + 1 bytes.
        unsafe {
            std::ptr::copy_nonoverlapping(s.as_ptr(), ptr as *mut u8, len);
            *ptr.add(len) = 0;
        }

        Ok(Self { ptr, len })
    }

    /// Borrow the buffer for the duration of a native call.
    ///
    /// The pointer is valid until this `NativeString` is dropped; the
    /// callee must not retain it past the call.
    pub fn as_ptr(&self) -> *const c_char {
        self.ptr
    }

    /// Byte length excluding the terminator.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the string is empty. The buffer still holds a terminator.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// View of the marshaled bytes, excluding the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: the buffer holds len initialized bytes before the
        // terminator.
        unsafe { slice::from_raw_parts(self.ptr as *const u8, self.len) }
    }

    /// View of the marshaled bytes, including the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        // Safety: the buffer holds len + 1 initialized bytes.
        unsafe { slice::from_raw_parts(self.ptr as *const u8, self.len + 1) }
    }
}

impl Drop for NativeString {
    fn drop(&mut self) {
        // Safety: ptr came from libc::malloc and is freed exactly once.
        unsafe { libc::free(self.ptr as *mut libc::c_void) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_appends_terminator() {
        let s = NativeString::new("hello").unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s.as_bytes(), b"hello");
        assert_eq!(s.as_bytes_with_nul(), b"hello\0");
        assert_eq!(s.as_bytes_with_nul().len(), 6);
    }

    #[test]
    fn test_marshal_empty_string() {
        let s = NativeString::new("").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_marshal_rejects_interior_nul() {
        match NativeString::new("ab\0cd") {
            Err(InteropError::NulByte { position }) => assert_eq!(position, 2),
            other => panic!("Expected NulByte error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_marshal_preserves_utf8_bytes() {
        let input = "héllo wörld";
        let s = NativeString::new(input).unwrap();
        assert_eq!(s.as_bytes(), input.as_bytes());
        assert_eq!(s.len(), input.len());
    }

    #[test]
    fn test_repeated_marshal_release_cycles() {
        // Simulates reuse: every cycle allocates, verifies, and releases.
        for _ in 0..1000 {
            let s = NativeString::new("cycle").unwrap();
            assert_eq!(s.as_bytes_with_nul(), b"cycle\0");
        }
    }

    #[test]
    fn test_pointer_stable_across_reads() {
        let s = NativeString::new("stable").unwrap();
        let p1 = s.as_ptr();
        let _ = s.as_bytes();
        let p2 = s.as_ptr();
        assert_eq!(p1, p2);
    }
}
