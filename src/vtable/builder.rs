// Tue Feb 17 2026 - Alex

use crate::planner::signature::FunctionSignature;
use crate::vtable::layout::{SlotBinding, VtableLayout, VtableSlot};

/// Accumulates slots in input order. The input order is authoritative:
/// nothing is reordered or deduplicated, and every pushed item lands in the
/// next slot whether or not its signature resolved.
pub struct VtableLayoutBuilder {
    class_name: String,
    anchor: u64,
    slots: Vec<VtableSlot>,
}

impl VtableLayoutBuilder {
    pub fn new(class_name: &str, anchor: u64) -> Self {
        Self { class_name: class_name.to_string(), anchor, slots: Vec::new() }
    }

    pub fn next_index(&self) -> usize {
        self.slots.len()
    }

    pub fn push_typed(
        &mut self,
        name: &str,
        link_symbol: &str,
        signature: FunctionSignature,
    ) -> usize {
        let index = self.slots.len();
        self.slots.push(VtableSlot {
            index,
            name: name.to_string(),
            binding: SlotBinding::Typed { link_symbol: link_symbol.to_string(), signature },
        });
        index
    }

    pub fn push_placeholder(&mut self, name: &str, reason: &str) -> usize {
        let index = self.slots.len();
        self.slots.push(VtableSlot {
            index,
            name: name.to_string(),
            binding: SlotBinding::Placeholder { reason: reason.to_string() },
        });
        index
    }

    pub fn build(self) -> VtableLayout {
        VtableLayout { class_name: self.class_name, anchor: self.anchor, slots: self.slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::signature::{CallingConvention, ParamRepr, ReturnRepr};
    use std::mem;

    fn signature() -> FunctionSignature {
        FunctionSignature::new(
            vec![ParamRepr::ThisPointer],
            ReturnRepr::Void,
            CallingConvention::Thiscall,
        )
    }

    #[test]
    fn test_slot_positions_survive_failures() {
        let mut builder = VtableLayoutBuilder::new("Foo", 0);
        builder.push_typed("first", "_ZN3Foo5firstEv", signature());
        builder.push_placeholder("second", "unresolved type: Mystery");
        builder.push_typed("third", "_ZN3Foo5thirdEv", signature());
        let layout = builder.build();

        assert_eq!(layout.slot_count(), 3);
        assert_eq!(layout.typed_count(), 2);
        assert_eq!(layout.placeholder_count(), 1);
        assert!(layout.slot(0).unwrap().is_typed());
        assert!(!layout.slot(1).unwrap().is_typed());
        assert!(layout.slot(2).unwrap().is_typed());
        assert_eq!(layout.slot(2).unwrap().byte_offset(), 2 * mem::size_of::<usize>());
    }

    #[test]
    fn test_indices_match_input_order() {
        let mut builder = VtableLayoutBuilder::new("Foo", 8);
        for n in 0..5 {
            let name = format!("virt{}", n);
            if n % 2 == 0 {
                builder.push_typed(&name, "sym", signature());
            } else {
                builder.push_placeholder(&name, "failed");
            }
        }
        let layout = builder.build();
        assert_eq!(layout.anchor, 8);
        for (expected, slot) in layout.slots.iter().enumerate() {
            assert_eq!(slot.index, expected);
        }
    }
}
