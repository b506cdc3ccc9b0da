// Wed Feb 11 2026 - Alex

pub mod descriptor;
pub mod error;
pub mod pattern;
pub mod predefined;
pub mod store;

pub use descriptor::{TypeDisposition, WrapperDescriptor};
pub use error::RegistryError;
pub use pattern::PatternRule;
pub use store::TypeRegistry;
