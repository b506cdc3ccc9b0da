// Wed Feb 11 2026 - Alex

pub mod address;
pub mod dispatch;

pub use address::Address;
