// Fri Feb 13 2026 - Alex

use crate::descriptor::member::{MemberCategory, MemberItem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One class as described by the input snapshot: identity, inheritance
/// chain, vtable anchors, byte size, and six member buckets keyed by
/// access/storage. The ordered-virtual bucket's order is authoritative for
/// vtable layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    /// Base-to-derived inheritance chain.
    #[serde(default)]
    pub parents: Vec<String>,
    /// Offsets of vtable anchor points inside the object.
    #[serde(default)]
    pub vtable_anchors: Vec<u64>,
    /// Informational list of known derived types.
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub public_instance: Vec<MemberItem>,
    #[serde(default)]
    pub protected_instance: Vec<MemberItem>,
    #[serde(default)]
    pub private_static: Vec<MemberItem>,
    #[serde(default)]
    pub public_static: Vec<MemberItem>,
    #[serde(default)]
    pub ordered_virtual: Vec<MemberItem>,
    #[serde(default)]
    pub unordered_virtual: Vec<MemberItem>,
}

impl ClassDescriptor {
    pub fn new(name: &str, size: usize) -> Self {
        Self {
            name: name.to_string(),
            parents: Vec::new(),
            vtable_anchors: Vec::new(),
            children: Vec::new(),
            size,
            public_instance: Vec::new(),
            protected_instance: Vec::new(),
            private_static: Vec::new(),
            public_static: Vec::new(),
            ordered_virtual: Vec::new(),
            unordered_virtual: Vec::new(),
        }
    }

    pub fn with_parents(mut self, parents: Vec<&str>) -> Self {
        self.parents = parents.into_iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_vtable_anchor(mut self, anchor: u64) -> Self {
        self.vtable_anchors.push(anchor);
        self
    }

    pub fn add_member(mut self, category: MemberCategory, item: MemberItem) -> Self {
        self.bucket_mut(category).push(item);
        self
    }

    pub fn bucket(&self, category: MemberCategory) -> &[MemberItem] {
        match category {
            MemberCategory::PublicInstance => &self.public_instance,
            MemberCategory::ProtectedInstance => &self.protected_instance,
            MemberCategory::PrivateStatic => &self.private_static,
            MemberCategory::PublicStatic => &self.public_static,
            MemberCategory::OrderedVirtual => &self.ordered_virtual,
            MemberCategory::UnorderedVirtual => &self.unordered_virtual,
        }
    }

    fn bucket_mut(&mut self, category: MemberCategory) -> &mut Vec<MemberItem> {
        match category {
            MemberCategory::PublicInstance => &mut self.public_instance,
            MemberCategory::ProtectedInstance => &mut self.protected_instance,
            MemberCategory::PrivateStatic => &mut self.private_static,
            MemberCategory::PublicStatic => &mut self.public_static,
            MemberCategory::OrderedVirtual => &mut self.ordered_virtual,
            MemberCategory::UnorderedVirtual => &mut self.unordered_virtual,
        }
    }

    /// The non-virtual buckets in planning order.
    pub fn concrete_buckets(&self) -> impl Iterator<Item = (MemberCategory, &[MemberItem])> {
        [
            (MemberCategory::PublicInstance, self.public_instance.as_slice()),
            (MemberCategory::ProtectedInstance, self.protected_instance.as_slice()),
            (MemberCategory::PrivateStatic, self.private_static.as_slice()),
            (MemberCategory::PublicStatic, self.public_static.as_slice()),
        ]
        .into_iter()
    }

    pub fn member_count(&self) -> usize {
        self.public_instance.len()
            + self.protected_instance.len()
            + self.private_static.len()
            + self.public_static.len()
            + self.ordered_virtual.len()
            + self.unordered_virtual.len()
    }

    pub fn virtual_count(&self) -> usize {
        self.ordered_virtual.len() + self.unordered_virtual.len()
    }

    pub fn primary_anchor(&self) -> u64 {
        self.vtable_anchors.first().copied().unwrap_or(0)
    }

    pub fn has_vtable(&self) -> bool {
        !self.ordered_virtual.is_empty()
            || !self.unordered_virtual.is_empty()
            || !self.vtable_anchors.is_empty()
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "class {} ({} bytes, {} members, {} virtual)",
            self.name,
            self.size,
            self.member_count(),
            self.virtual_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::member::MemberClassification;

    #[test]
    fn test_bucket_routing() {
        let descriptor = ClassDescriptor::new("Foo", 16)
            .add_member(
                MemberCategory::PublicInstance,
                MemberItem::new("_ZN3Foo3barEv", "bar", MemberClassification::Function),
            )
            .add_member(
                MemberCategory::OrderedVirtual,
                MemberItem::new("_ZN3Foo3bazEv", "baz", MemberClassification::Function),
            );
        assert_eq!(descriptor.bucket(MemberCategory::PublicInstance).len(), 1);
        assert_eq!(descriptor.bucket(MemberCategory::OrderedVirtual).len(), 1);
        assert_eq!(descriptor.member_count(), 2);
        assert_eq!(descriptor.virtual_count(), 1);
    }

    #[test]
    fn test_primary_anchor_defaults_to_zero() {
        let descriptor = ClassDescriptor::new("Foo", 8);
        assert_eq!(descriptor.primary_anchor(), 0);
        let anchored = descriptor.with_vtable_anchor(0x10);
        assert_eq!(anchored.primary_anchor(), 0x10);
    }
}
