// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The three native entry points a [`NetApiBuffer`](crate::NetApiBuffer) is built on.

use core::ffi::c_void;
use core::ptr::NonNull;

use crate::status::NetApiStatus;

#[cfg(windows)]
mod windows;

#[cfg(unix)]
mod heap;

#[cfg(any(test, feature = "test-utils"))]
mod faulty;

#[cfg(windows)]
pub use windows::SystemPlatform;

#[cfg(unix)]
pub use heap::SystemPlatform;

#[cfg(any(test, feature = "test-utils"))]
pub use faulty::{FaultyPlatform, FaultyPlatformBehaviour, PlatformProbe};

/// Native buffer allocator.
///
/// Implementations report failures as the raw platform status; the handle
/// wraps them into [`BufferError::Allocation`](crate::BufferError::Allocation).
pub trait NetApiPlatform: core::fmt::Debug {
    /// Allocates `byte_count` bytes.
    fn allocate(&self, byte_count: u32) -> Result<NonNull<c_void>, NetApiStatus>;

    /// Returns the size in bytes of a buffer obtained from [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `buffer` must be a live allocation of this platform.
    unsafe fn size(&self, buffer: NonNull<c_void>) -> Result<u32, NetApiStatus>;

    /// Frees a buffer obtained from [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `buffer` must be a live allocation of this platform. It is dangling
    /// after this call, whatever the returned status.
    unsafe fn free(&self, buffer: NonNull<c_void>) -> Result<(), NetApiStatus>;
}
