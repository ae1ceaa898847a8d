//! Typed description of the native call surface.
//!
//! Every callable routine is enumerated with its name, parameter types,
//! and return type, rather than looked up ad hoc. The static bindings fix
//! these shapes at build time; the dynamic loader resolves symbols against
//! the same two shapes.

use std::fmt;

use once_cell::sync::Lazy;

/// Value types crossing the boundary in this demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeType {
    /// No value.
    Void,
    /// Null-terminated C string (const char*).
    CStr,
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeType::Void => write!(f, "void"),
            NativeType::CStr => write!(f, "cstr"),
        }
    }
}

/// Signature of a native routine.
#[derive(Debug, Clone)]
pub struct Signature {
    /// Exported symbol name.
    pub name: String,
    /// Parameter types.
    pub params: Vec<NativeType>,
    /// Return type.
    pub return_type: NativeType,
}

impl Signature {
    /// Create a new routine signature.
    pub fn new(name: impl Into<String>, params: Vec<NativeType>, return_type: NativeType) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
        }
    }

    /// Validate argument count against the declared parameters.
    pub fn validate_args(&self, arg_count: usize) -> bool {
        arg_count == self.params.len()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")
    }
}

/// The routines the demonstration links against.
static LIBRARY_API: Lazy<Vec<Signature>> = Lazy::new(|| {
    vec![
        Signature::new("mylib_print", vec![NativeType::CStr], NativeType::Void),
        Signature::new("inline_greeting", vec![], NativeType::Void),
    ]
});

/// Enumerate the typed native call surface.
pub fn library_api() -> &'static [Signature] {
    &LIBRARY_API
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_display() {
        let sig = Signature::new("mylib_print", vec![NativeType::CStr], NativeType::Void);
        assert_eq!(sig.to_string(), "void mylib_print(cstr)");

        let sig = Signature::new("inline_greeting", vec![], NativeType::Void);
        assert_eq!(sig.to_string(), "void inline_greeting()");
    }

    #[test]
    fn test_signature_validation() {
        let sig = Signature::new("mylib_print", vec![NativeType::CStr], NativeType::Void);
        assert!(sig.validate_args(1));
        assert!(!sig.validate_args(0));
        assert!(!sig.validate_args(2));
    }

    #[test]
    fn test_library_api_contents() {
        let api = library_api();
        assert_eq!(api.len(), 2);

        let print = api.iter().find(|s| s.name == "mylib_print").unwrap();
        assert_eq!(print.params, vec![NativeType::CStr]);
        assert_eq!(print.return_type, NativeType::Void);

        let inline = api.iter().find(|s| s.name == "inline_greeting").unwrap();
        assert!(inline.params.is_empty());
        assert_eq!(inline.return_type, NativeType::Void);
    }
}
