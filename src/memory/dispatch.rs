// Wed Feb 11 2026 - Alex
//
// The single audited home for raw pointer arithmetic. Virtual dispatch,
// native storage management, and address-to-function transmutes all live
// behind this narrow surface; everything above it works with typed call-site
// descriptors only.

use crate::memory::address::Address;
use libc::c_void;
use std::mem;

/// Byte offset of a vtable slot. Slots are pointer-sized and addressed as
/// `base + index * pointer_size`.
pub fn slot_byte_offset(index: usize) -> usize {
    index * mem::size_of::<usize>()
}

/// Read one function address out of an instance's vtable.
///
/// # Safety
/// `instance` must point at a live native object whose first pointer-sized
/// field is a vtable pointer, and `index` must be within that vtable.
pub unsafe fn read_slot(instance: *const c_void, index: usize) -> Address {
    let vtable = *(instance as *const *const usize);
    let entry = vtable.add(index);
    Address::new(*entry as u64)
}

/// Allocate uninitialized native storage for an instance of `size` bytes.
pub fn alloc_instance(size: usize) -> *mut c_void {
    unsafe { libc::malloc(size.max(1)) }
}

/// Release native storage previously obtained from [`alloc_instance`] or
/// handed over by the bound binary.
///
/// # Safety
/// `ptr` must be a heap allocation not released before, or null.
pub unsafe fn release_instance(ptr: *mut c_void) {
    if !ptr.is_null() {
        libc::free(ptr);
    }
}

/// Call a destructor thunk at `address` over `instance`.
///
/// # Safety
/// `address` must be the entry point of a native destructor compatible with
/// a single-pointer-argument call, and `instance` must be valid for it.
pub unsafe fn call_destructor(address: Address, instance: *mut c_void) {
    let thunk: unsafe extern "C" fn(*mut c_void) = mem::transmute(address.as_u64() as usize);
    thunk(instance);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_byte_offset() {
        assert_eq!(slot_byte_offset(0), 0);
        assert_eq!(slot_byte_offset(1), mem::size_of::<usize>());
        assert_eq!(slot_byte_offset(5), 5 * mem::size_of::<usize>());
    }

    #[test]
    fn test_read_slot_walks_vtable() {
        // fake object: first field points at a fake vtable
        let vtable: [usize; 3] = [0x1111, 0x2222, 0x3333];
        let object: [*const usize; 1] = [vtable.as_ptr()];
        let instance = object.as_ptr() as *const c_void;

        unsafe {
            assert_eq!(read_slot(instance, 0).as_u64(), 0x1111);
            assert_eq!(read_slot(instance, 2).as_u64(), 0x3333);
        }
    }

    #[test]
    fn test_alloc_release_round_trip() {
        let ptr = alloc_instance(16);
        assert!(!ptr.is_null());
        unsafe { release_instance(ptr) };
    }
}
