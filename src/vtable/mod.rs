// Tue Feb 17 2026 - Alex

pub mod builder;
pub mod layout;

pub use builder::VtableLayoutBuilder;
pub use layout::{SlotBinding, VtableLayout, VtableSlot};
