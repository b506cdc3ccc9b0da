// Wed Feb 11 2026 - Alex

use crate::registry::descriptor::WrapperDescriptor;
use crate::registry::error::RegistryError;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Maps a native type's canonical qualified name to its wrapper descriptor.
///
/// Owned by one planning session, never a process global. Inserts go through
/// the write lock and are idempotent (insert-if-absent); entries already
/// stabilized behind an `Arc` can be read concurrently while another class
/// is being planned.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: RwLock<AHashMap<String, Arc<WrapperDescriptor>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an already-stabilized entry.
    pub fn lookup(&self, qualified_name: &str) -> Option<Arc<WrapperDescriptor>> {
        self.entries.read().get(qualified_name).cloned()
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.entries.read().contains_key(qualified_name)
    }

    /// Insert-if-absent. The winning descriptor (existing or newly made) is
    /// returned; a losing concurrent insert is discarded, which keeps
    /// repeated registration of the same identity idempotent.
    pub fn get_or_insert<F>(&self, qualified_name: &str, make: F) -> Arc<WrapperDescriptor>
    where
        F: FnOnce() -> WrapperDescriptor,
    {
        if let Some(existing) = self.lookup(qualified_name) {
            return existing;
        }
        let mut entries = self.entries.write();
        entries
            .entry(qualified_name.to_string())
            .or_insert_with(|| Arc::new(make()))
            .clone()
    }

    /// Strict registration: refuses an identity that is already present.
    /// Planning never takes this path (it uses [`get_or_insert`]); it exists
    /// for callers seeding a registry up front.
    pub fn register(&self, descriptor: WrapperDescriptor) -> Result<Arc<WrapperDescriptor>, RegistryError> {
        let mut entries = self.entries.write();
        if entries.contains_key(&descriptor.native_name) {
            return Err(RegistryError::DuplicateDefinition(descriptor.native_name));
        }
        let name = descriptor.native_name.clone();
        let arc = Arc::new(descriptor);
        entries.insert(name, arc.clone());
        Ok(arc)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of every registered qualified name, for diagnostics output.
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::descriptor::TypeDisposition;

    #[test]
    fn test_insert_if_absent_is_idempotent() {
        let registry = TypeRegistry::new();
        let first = registry.get_or_insert("Foo", || WrapperDescriptor::wrapped("Foo", "Foo", 16));
        let second =
            registry.get_or_insert("Foo", || WrapperDescriptor::wrapped("Foo", "Other", 32));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.wrapper_name, "Foo");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let registry = TypeRegistry::new();
        registry.register(WrapperDescriptor::unmanaged("size_t")).unwrap();
        let err = registry.register(WrapperDescriptor::unmanaged("size_t")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateDefinition("size_t".to_string()));
    }

    #[test]
    fn test_lookup_disposition() {
        let registry = TypeRegistry::new();
        registry.get_or_insert("Foo", || WrapperDescriptor::wrapped("Foo", "Foo", 8));
        let hit = registry.lookup("Foo").unwrap();
        assert_eq!(hit.disposition, TypeDisposition::Wrapped);
        assert!(registry.lookup("Bar").is_none());
    }
}
