// Wed Feb 11 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a resolved native type crosses the call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDisposition {
    /// Bit-pattern compatible with the native calling convention; passed by
    /// raw value with no wrapper.
    Unmanaged,
    /// Needs a generated wrapper holding a native handle.
    Wrapped,
}

/// What the registry knows about one canonical native type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperDescriptor {
    /// Canonical qualified native name (`ns::Name`).
    pub native_name: String,
    /// Name the generated wrapper type will carry.
    pub wrapper_name: String,
    pub disposition: TypeDisposition,
    /// Known only for document-described classes.
    pub byte_size: Option<usize>,
}

impl WrapperDescriptor {
    pub fn wrapped(native_name: &str, wrapper_name: &str, byte_size: usize) -> Self {
        Self {
            native_name: native_name.to_string(),
            wrapper_name: wrapper_name.to_string(),
            disposition: TypeDisposition::Wrapped,
            byte_size: Some(byte_size),
        }
    }

    pub fn unmanaged(native_name: &str) -> Self {
        Self {
            native_name: native_name.to_string(),
            wrapper_name: native_name.to_string(),
            disposition: TypeDisposition::Unmanaged,
            byte_size: None,
        }
    }

    pub fn is_unmanaged(&self) -> bool {
        self.disposition == TypeDisposition::Unmanaged
    }

    pub fn is_wrapped(&self) -> bool {
        self.disposition == TypeDisposition::Wrapped
    }
}

impl fmt::Display for WrapperDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dispo = match self.disposition {
            TypeDisposition::Unmanaged => "unmanaged",
            TypeDisposition::Wrapped => "wrapped",
        };
        write!(f, "{} -> {} ({})", self.native_name, self.wrapper_name, dispo)
    }
}
