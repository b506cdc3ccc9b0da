// Tue Feb 17 2026 - Alex

pub mod instance;
pub mod strategy;

pub use instance::InstanceState;
pub use strategy::{TeardownInvoker, TeardownStrategy};
