// Tue Feb 17 2026 - Alex

use crate::descriptor::MemberCategory;
use crate::ownership::TeardownStrategy;
use crate::planner::signature::{FunctionSignature, ReturnRepr};
use crate::vtable::VtableLayout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One constructor the emitter must expose: allocate the class's byte size,
/// call the constructor symbol over the fresh pointer, mark the instance
/// owning and non-temporary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorThunk {
    pub link_symbol: String,
    pub signature: FunctionSignature,
}

/// One concrete (non-virtual) member call through a resolved symbol address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodThunk {
    /// Generated wrapper-facing name.
    pub name: String,
    pub declared_name: String,
    pub link_symbol: String,
    pub signature: FunctionSignature,
    pub category: MemberCategory,
    pub relative_address: u64,
}

/// One virtual member call through vtable-slot indirection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualThunk {
    pub name: String,
    pub declared_name: String,
    pub slot: usize,
    pub signature: FunctionSignature,
}

/// An address-bound static field accessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticFieldThunk {
    pub name: String,
    pub declared_name: String,
    pub link_symbol: String,
    pub repr: ReturnRepr,
}

/// Two accessor thunks sharing one derived property name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPairing {
    pub name: String,
    /// Generated name of the getter thunk.
    pub getter: String,
    /// Generated name of the setter thunk.
    pub setter: String,
}

/// Everything the emitter backend needs to render one wrapper class.
/// Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassPlan {
    pub name: String,
    pub wrapper_name: String,
    pub byte_size: usize,
    pub parents: Vec<String>,
    pub teardown: TeardownStrategy,
    pub constructors: Vec<ConstructorThunk>,
    pub methods: Vec<MethodThunk>,
    pub static_fields: Vec<StaticFieldThunk>,
    pub virtuals: Vec<VirtualThunk>,
    pub vtable: VtableLayout,
    pub properties: Vec<PropertyPairing>,
}

impl ClassPlan {
    pub fn method(&self, name: &str) -> Option<&MethodThunk> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn virtual_method(&self, name: &str) -> Option<&VirtualThunk> {
        self.virtuals.iter().find(|v| v.name == name)
    }

    pub fn thunk_count(&self) -> usize {
        self.constructors.len() + self.methods.len() + self.static_fields.len() + self.virtuals.len()
    }

    pub fn has_vtable(&self) -> bool {
        self.vtable.slot_count() > 0
    }
}

impl fmt::Display for ClassPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bytes): {} ctors, {} methods, {} statics, {} virtuals, teardown {}",
            self.wrapper_name,
            self.byte_size,
            self.constructors.len(),
            self.methods.len(),
            self.static_fields.len(),
            self.virtuals.len(),
            self.teardown
        )
    }
}
