// Wed Feb 11 2026 - Alex

use std::fmt;
use std::ops::{Add, Sub};

/// A resolved native address (function entry point or instance pointer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    value: u64,
}

impl Address {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn from_ptr(ptr: *const libc::c_void) -> Self {
        Self { value: ptr as u64 }
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    pub fn as_ptr(&self) -> *const libc::c_void {
        self.value as *const libc::c_void
    }

    pub fn as_mut_ptr(&self) -> *mut libc::c_void {
        self.value as *mut libc::c_void
    }

    pub fn is_null(&self) -> bool {
        self.value == 0
    }

    pub fn offset(&self, offset: i64) -> Self {
        Self { value: (self.value as i64 + offset) as u64 }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.value)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl Add<u64> for Address {
    type Output = Self;
    fn add(self, rhs: u64) -> Self::Output {
        Self { value: self.value + rhs }
    }
}

impl Sub<u64> for Address {
    type Output = Self;
    fn sub(self, rhs: u64) -> Self::Output {
        Self { value: self.value - rhs }
    }
}
