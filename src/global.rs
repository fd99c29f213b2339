//! [`Tlsf`] as a `#[global_allocator]`, for callers who want the
//! convenience of a single default instance without writing the
//! synchronization wrapper themselves.
//!
//! This is deliberately thin: unlike some allocator crates, it never
//! acquires backing memory on its own. A pool (or several) must be
//! attached with [`GlobalTlsf::add_pool`] before any allocation is
//! attempted, exactly as with the bare [`Tlsf`].
use core::alloc::{GlobalAlloc, Layout};
use core::mem::MaybeUninit;
use core::ptr::{self, NonNull};
use std::sync::Mutex;

use crate::Tlsf;

/// [`Tlsf`] guarded by a [`std::sync::Mutex`].
///
/// # Examples
///
/// ```rust
/// use tlsf::GlobalTlsf;
/// use std::mem::MaybeUninit;
///
/// static mut POOL: [MaybeUninit<u8>; 1 << 16] = [MaybeUninit::uninit(); 1 << 16];
///
/// #[global_allocator]
/// static ALLOCATOR: GlobalTlsf = GlobalTlsf::new();
///
/// // Safety: called once, before any allocation happens.
/// unsafe {
///     ALLOCATOR.add_pool(&mut *ptr::addr_of_mut!(POOL));
/// }
/// # use std::ptr;
/// ```
pub struct GlobalTlsf {
    inner: Mutex<Tlsf<'static>>,
}

impl GlobalTlsf {
    /// A `GlobalTlsf` with no pool attached. `const` so it can initialize a
    /// `static`, as in the example above.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Tlsf::INIT),
        }
    }

    /// Attaches a pool that will live for the program's remaining
    /// lifetime. See [`Tlsf::add_pool`] for the preconditions on `pool`.
    pub fn add_pool(&self, pool: &'static mut [MaybeUninit<u8>]) -> bool {
        self.lock_inner().add_pool(pool)
    }

    #[inline]
    fn lock_inner(&self) -> std::sync::MutexGuard<'_, Tlsf<'static>> {
        // A poisoned lock still protects a structurally valid `Tlsf`; a
        // panic mid-allocation elsewhere in the program shouldn't brick
        // every future allocation.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for GlobalTlsf {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl GlobalAlloc for GlobalTlsf {
    #[inline]
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        self.lock_inner()
            .memalign(layout.align(), layout.size())
            .map(NonNull::as_ptr)
            .unwrap_or(ptr::null_mut())
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: *mut u8, _layout: Layout) {
        self.lock_inner().free(NonNull::new(ptr));
    }

    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, _layout: Layout, new_size: usize) -> *mut u8 {
        self.lock_inner()
            .realloc(NonNull::new(ptr), new_size)
            .map(NonNull::as_ptr)
            .unwrap_or(ptr::null_mut())
    }
}
