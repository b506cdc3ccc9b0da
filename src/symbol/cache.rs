// Fri Feb 13 2026 - Alex

use crate::memory::Address;
use crate::symbol::error::SymbolError;
use crate::symbol::resolver::AddressResolver;
use ahash::AHashMap;
use parking_lot::Mutex;

/// Wraps a resolver with a process-lifetime cache. The lock is held across
/// the underlying resolve so a symbol's first use is at most once even when
/// multiple planning threads race on it; later uses hit the cache.
pub struct CachedResolver<R: AddressResolver> {
    inner: R,
    cache: Mutex<AHashMap<String, Address>>,
}

impl<R: AddressResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, cache: Mutex::new(AHashMap::new()) }
    }

    pub fn cached_count(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_cached(&self, symbol: &str) -> bool {
        self.cache.lock().contains_key(symbol)
    }
}

impl<R: AddressResolver> AddressResolver for CachedResolver<R> {
    fn resolve(&self, symbol: &str) -> Result<Address, SymbolError> {
        let mut cache = self.cache.lock();
        if let Some(addr) = cache.get(symbol) {
            return Ok(*addr);
        }
        let addr = self.inner.resolve(symbol)?;
        cache.insert(symbol.to_string(), addr);
        Ok(addr)
    }
}
