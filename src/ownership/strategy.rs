// Tue Feb 17 2026 - Alex

use crate::memory::dispatch;
use crate::symbol::{AddressResolver, SymbolError};
use libc::c_void;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exactly one per class: how a native instance is torn down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeardownStrategy {
    /// Invoke one statically known destructor symbol.
    Normal { symbol: String },
    /// Read the destructor's function pointer out of the instance's vtable
    /// at a fixed slot, so a derived object destructs correctly through a
    /// base handle.
    Virtual { slot: usize },
    /// No native teardown action.
    Empty,
}

impl TeardownStrategy {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for TeardownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal { symbol } => write!(f, "normal({})", symbol),
            Self::Virtual { slot } => write!(f, "virtual(slot {})", slot),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// Executes a teardown strategy over a live instance. The only consumer of
/// destructor addresses; everything unsafe is delegated to the audited
/// dispatch module.
pub struct TeardownInvoker<'a> {
    resolver: &'a dyn AddressResolver,
}

impl<'a> TeardownInvoker<'a> {
    pub fn new(resolver: &'a dyn AddressResolver) -> Self {
        Self { resolver }
    }

    /// # Safety
    /// `instance` must point at a live, not-yet-destructed native object of
    /// the class the strategy was planned for.
    pub unsafe fn invoke(
        &self,
        strategy: &TeardownStrategy,
        instance: *mut c_void,
    ) -> Result<(), SymbolError> {
        match strategy {
            TeardownStrategy::Empty => Ok(()),
            TeardownStrategy::Normal { symbol } => {
                let address = self.resolver.resolve(symbol)?;
                dispatch::call_destructor(address, instance);
                Ok(())
            }
            TeardownStrategy::Virtual { slot } => {
                let address = dispatch::read_slot(instance, *slot);
                dispatch::call_destructor(address, instance);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_display() {
        assert_eq!(TeardownStrategy::Empty.to_string(), "empty");
        assert_eq!(
            TeardownStrategy::Normal { symbol: "_ZN3FooD1Ev".to_string() }.to_string(),
            "normal(_ZN3FooD1Ev)"
        );
        assert_eq!(TeardownStrategy::Virtual { slot: 0 }.to_string(), "virtual(slot 0)");
        assert!(TeardownStrategy::Empty.is_empty());
    }
}
