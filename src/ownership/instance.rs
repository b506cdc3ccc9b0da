// Tue Feb 17 2026 - Alex

use crate::memory::dispatch;
use libc::c_void;
use std::fmt;

/// Per-instance state every generated wrapper carries: the raw native
/// pointer, whether this wrapper owns the native object, and whether the
/// object is a temporary stack value whose storage must not be freed.
#[derive(Debug)]
pub struct InstanceState {
    pointer: *mut c_void,
    owns: bool,
    temporary: bool,
    disposed: bool,
}

impl InstanceState {
    pub fn new(pointer: *mut c_void, owns: bool, temporary: bool) -> Self {
        Self { pointer, owns, temporary, disposed: false }
    }

    /// A freshly constructed instance: owning, heap-backed.
    pub fn owned(pointer: *mut c_void) -> Self {
        Self::new(pointer, true, false)
    }

    /// A handle over native memory someone else owns.
    pub fn borrowed(pointer: *mut c_void) -> Self {
        Self::new(pointer, false, false)
    }

    /// An owning view of a temporary stack value: destructor runs, storage
    /// is not released.
    pub fn temporary(pointer: *mut c_void) -> Self {
        Self::new(pointer, true, true)
    }

    pub fn pointer(&self) -> *mut c_void {
        self.pointer
    }

    pub fn owns(&self) -> bool {
        self.owns
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The one-shot disposal protocol. Repeated calls after the first are
    /// no-ops. On first disposal: an owning instance runs `teardown`, and an
    /// owning non-temporary instance additionally releases the native heap
    /// allocation.
    pub fn dispose_with<F>(&mut self, teardown: F)
    where
        F: FnOnce(*mut c_void),
    {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if !self.owns {
            return;
        }
        teardown(self.pointer);
        if !self.temporary {
            unsafe { dispatch::release_instance(self.pointer) };
        }
    }

    /// The finalization path. Runs the same owning-teardown logic as
    /// [`dispose_with`], then `base_hook`; the hook is guarded so it still
    /// executes if teardown panics mid-unwind.
    pub fn finalize_with<F, H>(&mut self, teardown: F, base_hook: H)
    where
        F: FnOnce(*mut c_void),
        H: FnOnce(),
    {
        let guard = FinalizeGuard::new(base_hook);
        self.dispose_with(teardown);
        drop(guard);
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "instance {:p} (owns: {}, temporary: {}, disposed: {})",
            self.pointer, self.owns, self.temporary, self.disposed
        )
    }
}

/// Runs its hook on drop, which makes the hook unskippable: it fires on the
/// normal path and during unwind alike.
struct FinalizeGuard<H: FnOnce()> {
    hook: Option<H>,
}

impl<H: FnOnce()> FinalizeGuard<H> {
    fn new(hook: H) -> Self {
        Self { hook: Some(hook) }
    }
}

impl<H: FnOnce()> Drop for FinalizeGuard<H> {
    fn drop(&mut self) {
        if let Some(hook) = self.hook.take() {
            hook();
        }
    }
}
