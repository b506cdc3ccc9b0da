// Fri Feb 13 2026 - Alex

pub mod cache;
pub mod error;
pub mod resolver;

pub use cache::CachedResolver;
pub use error::SymbolError;
pub use resolver::{AddressResolver, DlsymResolver};
