// Wed Feb 11 2026 - Alex

use crate::registry::descriptor::WrapperDescriptor;
use once_cell::sync::Lazy;

/// Statically declared native-name -> descriptor table, consulted before
/// pattern rules. These are spellings that are unmanaged-representable but
/// are not fundamental keywords, so the grammar parser sees them as class
/// identifiers.
static PREDEFINED_UNMANAGED: &[&str] = &[
    "int8_t",
    "uint8_t",
    "int16_t",
    "uint16_t",
    "int32_t",
    "uint32_t",
    "int64_t",
    "uint64_t",
    "size_t",
    "ssize_t",
    "ptrdiff_t",
    "intptr_t",
    "uintptr_t",
    "std::size_t",
    "std::ptrdiff_t",
    "std::nullptr_t",
];

static TABLE: Lazy<Vec<WrapperDescriptor>> = Lazy::new(|| {
    PREDEFINED_UNMANAGED
        .iter()
        .map(|name| WrapperDescriptor::unmanaged(name))
        .collect()
});

pub fn lookup(qualified_name: &str) -> Option<&'static WrapperDescriptor> {
    TABLE.iter().find(|d| d.native_name == qualified_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typedef_lookup() {
        assert!(lookup("uint32_t").unwrap().is_unmanaged());
        assert!(lookup("std::size_t").is_some());
        assert!(lookup("rbx::Instance").is_none());
    }
}
