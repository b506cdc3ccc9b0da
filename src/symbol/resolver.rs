// Fri Feb 13 2026 - Alex

use crate::memory::Address;
use crate::symbol::error::SymbolError;
use std::ffi::CString;

/// The one capability the planner needs from the symbol collaborator:
/// turn a link symbol into a native address.
pub trait AddressResolver: Send + Sync {
    fn resolve(&self, symbol: &str) -> Result<Address, SymbolError>;
}

/// Default collaborator: the platform dynamic-symbol resolver over the
/// process's own loaded images.
#[derive(Debug, Default)]
pub struct DlsymResolver;

impl DlsymResolver {
    pub fn new() -> Self {
        Self
    }
}

impl AddressResolver for DlsymResolver {
    fn resolve(&self, symbol: &str) -> Result<Address, SymbolError> {
        let name = CString::new(symbol)
            .map_err(|_| SymbolError::InvalidName(symbol.to_string()))?;
        let ptr = unsafe { libc::dlsym(libc::RTLD_DEFAULT, name.as_ptr()) };
        if ptr.is_null() {
            return Err(SymbolError::NotFound(symbol.to_string()));
        }
        Ok(Address::from_ptr(ptr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dlsym_resolves_libc_export() {
        // malloc is exported by every image this test can run against
        let resolver = DlsymResolver::new();
        let addr = resolver.resolve("malloc").unwrap();
        assert!(!addr.is_null());
    }

    #[test]
    fn test_dlsym_missing_symbol() {
        let resolver = DlsymResolver::new();
        let err = resolver.resolve("definitely_not_a_real_export_1337").unwrap_err();
        assert!(matches!(err, SymbolError::NotFound(_)));
    }

    #[test]
    fn test_embedded_nul_rejected() {
        let resolver = DlsymResolver::new();
        let err = resolver.resolve("bad\0name").unwrap_err();
        assert!(matches!(err, SymbolError::InvalidName(_)));
    }
}
