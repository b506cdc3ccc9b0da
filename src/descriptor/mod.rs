// Fri Feb 13 2026 - Alex

pub mod class;
pub mod document;
pub mod member;

pub use class::ClassDescriptor;
pub use document::BindingDocument;
pub use member::{MemberCategory, MemberClassification, MemberFlags, MemberItem};
