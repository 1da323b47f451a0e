// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! NetApiBuffer - Owning handle over a single Network Management buffer.
//!
//! State machine:
//!
//! ```text
//! Invalid --(allocate ok)--> Valid --(release)--> Closed
//! ```
//!
//! `Invalid` and `Closed` are terminal. Platform free runs at most once, and
//! only for a `Valid` handle that owns its allocation.

use core::ffi::c_void;
use core::ptr::{self, NonNull};

use crate::error::BufferError;
use crate::platform::{NetApiPlatform, SystemPlatform};
use crate::status::NetApiStatus;

/// Lifecycle state of a [`NetApiBuffer`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HandleState {
    /// Never held an allocation.
    Invalid,
    /// Holds a live allocation.
    Valid,
    /// Released.
    Closed,
}

/// What a call to [`NetApiBuffer::release`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReleaseOutcome {
    /// The handle went from `Valid` to `Closed`.
    Released,
    /// The handle is invalid; there was nothing to release.
    NothingToRelease,
    /// The handle had already been released.
    AlreadyClosed,
}

/// A buffer allocated from the Network Management API heap.
///
/// The buffer is released exactly once: by [`release`](Self::release),
/// [`close`](Self::close), or on drop. Errors raised while dropping are
/// discarded, so callers that need the free status should release explicitly.
pub struct NetApiBuffer<P: NetApiPlatform = SystemPlatform> {
    ptr: Option<NonNull<c_void>>,
    state: HandleState,
    owns_handle: bool,
    platform: P,
}

impl NetApiBuffer<SystemPlatform> {
    /// Allocates `byte_count` bytes from the system heap.
    ///
    /// # Errors
    ///
    /// [`BufferError::Allocation`] with the platform status if the allocator
    /// fails, or with `ERROR_INVALID_PARAMETER` if `byte_count` exceeds `u32::MAX`.
    pub fn allocate(byte_count: usize) -> Result<Self, BufferError> {
        Self::allocate_with(SystemPlatform, byte_count)
    }

    /// Creates a handle in the permanent `Invalid` state.
    pub fn invalid() -> Self {
        Self::invalid_with(SystemPlatform)
    }

    /// Wraps a buffer returned by a Network Management function.
    ///
    /// A null `ptr` yields an invalid handle. When `owns_handle` is false the
    /// buffer is only referenced and never freed by this handle.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must be a live buffer of the system heap. If
    /// `owns_handle` is true, nothing else may free it. If false, it must
    /// outlive every access made through this handle.
    pub unsafe fn from_raw(ptr: *mut c_void, owns_handle: bool) -> Self {
        unsafe { Self::from_raw_with(SystemPlatform, ptr, owns_handle) }
    }
}

impl<P: NetApiPlatform> NetApiBuffer<P> {
    /// Allocates `byte_count` bytes through `platform`.
    pub fn allocate_with(platform: P, byte_count: usize) -> Result<Self, BufferError> {
        let byte_count = u32::try_from(byte_count)
            .map_err(|_| BufferError::Allocation(NetApiStatus::INVALID_PARAMETER))?;

        // Dropped as Invalid if the allocator fails: nothing gets freed.
        let mut buffer = Self::invalid_with(platform);
        let ptr = buffer.platform.allocate(byte_count)?;

        buffer.ptr = Some(ptr);
        buffer.state = HandleState::Valid;

        Ok(buffer)
    }

    /// Creates a handle in the permanent `Invalid` state.
    pub fn invalid_with(platform: P) -> Self {
        Self {
            ptr: None,
            state: HandleState::Invalid,
            owns_handle: true,
            platform,
        }
    }

    /// Wraps a buffer of `platform`. See [`NetApiBuffer::from_raw`].
    ///
    /// # Safety
    ///
    /// Same contract as [`NetApiBuffer::from_raw`], for `platform`'s heap.
    pub unsafe fn from_raw_with(platform: P, ptr: *mut c_void, owns_handle: bool) -> Self {
        let ptr = NonNull::new(ptr);
        let state = match ptr {
            Some(_) => HandleState::Valid,
            None => HandleState::Invalid,
        };

        Self {
            ptr,
            state,
            owns_handle,
            platform,
        }
    }

    fn live_ptr(&self) -> Result<NonNull<c_void>, BufferError> {
        match (self.state, self.ptr) {
            (HandleState::Closed, _) => Err(BufferError::Disposed),
            (HandleState::Valid, Some(ptr)) => Ok(ptr),
            _ => Err(BufferError::InvalidHandle),
        }
    }

    /// Size in bytes of the allocation, as reported by the platform.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Disposed`] once released.
    /// - [`BufferError::InvalidHandle`] if the handle never held an allocation.
    /// - [`BufferError::Allocation`] if the native size query fails.
    pub fn size(&self) -> Result<usize, BufferError> {
        let ptr = self.live_ptr()?;
        let byte_count = unsafe { self.platform.size(ptr) }?;

        Ok(byte_count as usize)
    }

    /// Releases the allocation.
    ///
    /// Idempotent: only the first call on a valid handle reaches the platform.
    /// If the native free fails, the handle is closed anyway and the status is
    /// returned; it is never retried.
    pub fn release(&mut self) -> Result<ReleaseOutcome, BufferError> {
        match self.state {
            HandleState::Invalid => return Ok(ReleaseOutcome::NothingToRelease),
            HandleState::Closed => return Ok(ReleaseOutcome::AlreadyClosed),
            HandleState::Valid => {}
        }

        self.state = HandleState::Closed;
        let ptr = self.ptr.take();

        if let (true, Some(ptr)) = (self.owns_handle, ptr) {
            unsafe { self.platform.free(ptr) }?;
        }

        Ok(ReleaseOutcome::Released)
    }

    /// Releases the allocation and consumes the handle.
    pub fn close(mut self) -> Result<(), BufferError> {
        self.release().map(|_| ())
    }

    /// Gives up the allocation without releasing it.
    ///
    /// Returns null for invalid or closed handles. The caller becomes
    /// responsible for freeing the returned buffer.
    pub fn into_raw(mut self) -> *mut c_void {
        let ptr = match self.state {
            HandleState::Valid => self.ptr.take(),
            _ => None,
        };
        self.state = HandleState::Closed;

        ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Native address, or null when invalid or closed.
    pub fn as_ptr(&self) -> *mut c_void {
        self.live_ptr().map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Opens the buffer for read-only access, executing the provided closure.
    pub fn open(
        &self,
        f: &mut dyn FnMut(&[u8]) -> Result<(), BufferError>,
    ) -> Result<(), BufferError> {
        let len = self.size()?;
        let ptr = self.live_ptr()?;

        let slice = unsafe { core::slice::from_raw_parts(ptr.as_ptr().cast::<u8>(), len) };
        f(slice)
    }

    /// Opens the buffer for mutable access, executing the provided closure.
    pub fn open_mut(
        &mut self,
        f: &mut dyn FnMut(&mut [u8]) -> Result<(), BufferError>,
    ) -> Result<(), BufferError> {
        let len = self.size()?;
        let ptr = self.live_ptr()?;

        let slice = unsafe { core::slice::from_raw_parts_mut(ptr.as_ptr().cast::<u8>(), len) };
        f(slice)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HandleState {
        self.state
    }

    /// Returns true while the handle holds a live allocation.
    pub fn is_valid(&self) -> bool {
        self.state == HandleState::Valid
    }

    /// Returns true once the handle has been released.
    pub fn is_closed(&self) -> bool {
        self.state == HandleState::Closed
    }

    /// Returns true if releasing this handle frees the allocation.
    pub fn owns_handle(&self) -> bool {
        self.owns_handle
    }

    /// Platform the allocation belongs to.
    pub fn platform(&self) -> &P {
        &self.platform
    }
}

impl<P: NetApiPlatform> Drop for NetApiBuffer<P> {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

// Safety: the handle is the sole owner of its allocation (or a borrower that
// never frees it); mutation requires &mut.
unsafe impl<P: NetApiPlatform + Send> Send for NetApiBuffer<P> {}
unsafe impl<P: NetApiPlatform + Sync> Sync for NetApiBuffer<P> {}

impl<P: NetApiPlatform> core::fmt::Debug for NetApiBuffer<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NetApiBuffer")
            .field("state", &self.state)
            .field("owns_handle", &self.owns_handle)
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}
