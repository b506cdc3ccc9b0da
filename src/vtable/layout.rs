// Tue Feb 17 2026 - Alex

use crate::memory::dispatch;
use crate::planner::signature::FunctionSignature;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What one vtable slot resolved to. A slot that failed signature
/// resolution still occupies its position as an untyped placeholder, since
/// downstream dispatch addresses slots purely by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotBinding {
    Typed { link_symbol: String, signature: FunctionSignature },
    Placeholder { reason: String },
}

/// One pointer-sized, offset-addressable vtable entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VtableSlot {
    pub index: usize,
    pub name: String,
    pub binding: SlotBinding,
}

impl VtableSlot {
    pub fn is_typed(&self) -> bool {
        matches!(self.binding, SlotBinding::Typed { .. })
    }

    pub fn signature(&self) -> Option<&FunctionSignature> {
        match &self.binding {
            SlotBinding::Typed { signature, .. } => Some(signature),
            SlotBinding::Placeholder { .. } => None,
        }
    }

    pub fn byte_offset(&self) -> usize {
        dispatch::slot_byte_offset(self.index)
    }
}

impl fmt::Display for VtableSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.binding {
            SlotBinding::Typed { signature, .. } => {
                write!(f, "[{}] {} {}", self.index, self.name, signature)
            }
            SlotBinding::Placeholder { reason } => {
                write!(f, "[{}] {} <placeholder: {}>", self.index, self.name, reason)
            }
        }
    }
}

/// A complete per-class virtual dispatch table layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VtableLayout {
    pub class_name: String,
    /// Byte offset of the vtable pointer inside the object.
    pub anchor: u64,
    pub slots: Vec<VtableSlot>,
}

impl VtableLayout {
    pub fn empty(class_name: &str) -> Self {
        Self { class_name: class_name.to_string(), anchor: 0, slots: Vec::new() }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&VtableSlot> {
        self.slots.get(index)
    }

    pub fn typed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_typed()).count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.slots.len() - self.typed_count()
    }

    pub fn byte_size(&self) -> usize {
        dispatch::slot_byte_offset(self.slots.len())
    }
}

impl fmt::Display for VtableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "vtable {} ({} slots, {} typed)",
            self.class_name,
            self.slot_count(),
            self.typed_count()
        )?;
        for slot in &self.slots {
            writeln!(f, "  {}", slot)?;
        }
        Ok(())
    }
}
