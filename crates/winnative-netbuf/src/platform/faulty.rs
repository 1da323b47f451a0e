// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Failure injection for the native entry points.
//!
//! [`FaultyPlatform`] forwards to [`SystemPlatform`] unless its behaviour
//! says otherwise, and counts every native call in a shared [`PlatformProbe`]
//! that outlives the handle owning the platform.

use alloc::sync::Arc;
use core::ffi::c_void;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::platform::{NetApiPlatform, SystemPlatform};
use crate::status::NetApiStatus;

/// Which native call fails, and with what status.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum FaultyPlatformBehaviour {
    /// Every call is forwarded.
    #[default]
    None,
    /// `allocate` reports the status without allocating.
    FailAtAllocate(NetApiStatus),
    /// `size` reports the status.
    FailAtSize(NetApiStatus),
    /// `free` releases the memory, then reports the status.
    FailAtFree(NetApiStatus),
}

const KIND_NONE: u64 = 0;
const KIND_ALLOCATE: u64 = 1;
const KIND_SIZE: u64 = 2;
const KIND_FREE: u64 = 3;

impl FaultyPlatformBehaviour {
    // Status in the high half, kind in the low half: one atomic load sees both.
    fn pack(self) -> u64 {
        let (kind, status) = match self {
            Self::None => (KIND_NONE, NetApiStatus::SUCCESS),
            Self::FailAtAllocate(status) => (KIND_ALLOCATE, status),
            Self::FailAtSize(status) => (KIND_SIZE, status),
            Self::FailAtFree(status) => (KIND_FREE, status),
        };

        (u64::from(status.code()) << 32) | kind
    }

    fn unpack(packed: u64) -> Self {
        let status = NetApiStatus::from_code((packed >> 32) as u32);

        match packed & u64::from(u32::MAX) {
            KIND_ALLOCATE => Self::FailAtAllocate(status),
            KIND_SIZE => Self::FailAtSize(status),
            KIND_FREE => Self::FailAtFree(status),
            _ => Self::None,
        }
    }
}

/// Shared call counters and current behaviour of a [`FaultyPlatform`].
#[derive(Debug, Default)]
pub struct PlatformProbe {
    behaviour: AtomicU64,
    allocate_calls: AtomicUsize,
    size_calls: AtomicUsize,
    free_calls: AtomicUsize,
}

impl PlatformProbe {
    /// Number of `allocate` calls, failed ones included.
    pub fn allocate_calls(&self) -> usize {
        self.allocate_calls.load(Ordering::Relaxed)
    }

    /// Number of `size` calls, failed ones included.
    pub fn size_calls(&self) -> usize {
        self.size_calls.load(Ordering::Relaxed)
    }

    /// Number of `free` calls, failed ones included.
    pub fn free_calls(&self) -> usize {
        self.free_calls.load(Ordering::Relaxed)
    }

    /// Current behaviour.
    pub fn behaviour(&self) -> FaultyPlatformBehaviour {
        FaultyPlatformBehaviour::unpack(self.behaviour.load(Ordering::Acquire))
    }

    fn set_behaviour(&self, behaviour: FaultyPlatformBehaviour) {
        self.behaviour.store(behaviour.pack(), Ordering::Release);
    }
}

/// [`SystemPlatform`] with injectable failures.
#[derive(Debug, Default)]
pub struct FaultyPlatform {
    inner: SystemPlatform,
    probe: Arc<PlatformProbe>,
}

impl FaultyPlatform {
    /// Creates a platform that forwards every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a platform with the given behaviour.
    pub fn with_behaviour(behaviour: FaultyPlatformBehaviour) -> Self {
        let platform = Self::new();
        platform.change_behaviour(behaviour);
        platform
    }

    /// Replaces the current behaviour.
    pub fn change_behaviour(&self, behaviour: FaultyPlatformBehaviour) {
        self.probe.set_behaviour(behaviour);
    }

    /// Shared handle to the call counters.
    pub fn probe(&self) -> Arc<PlatformProbe> {
        Arc::clone(&self.probe)
    }
}

impl NetApiPlatform for FaultyPlatform {
    fn allocate(&self, byte_count: u32) -> Result<NonNull<c_void>, NetApiStatus> {
        self.probe.allocate_calls.fetch_add(1, Ordering::Relaxed);

        if let FaultyPlatformBehaviour::FailAtAllocate(status) = self.probe.behaviour() {
            return Err(status);
        }

        self.inner.allocate(byte_count)
    }

    unsafe fn size(&self, buffer: NonNull<c_void>) -> Result<u32, NetApiStatus> {
        self.probe.size_calls.fetch_add(1, Ordering::Relaxed);

        if let FaultyPlatformBehaviour::FailAtSize(status) = self.probe.behaviour() {
            return Err(status);
        }

        unsafe { self.inner.size(buffer) }
    }

    unsafe fn free(&self, buffer: NonNull<c_void>) -> Result<(), NetApiStatus> {
        self.probe.free_calls.fetch_add(1, Ordering::Relaxed);

        // Release underneath regardless, so injected failures don't leak.
        let result = unsafe { self.inner.free(buffer) };

        if let FaultyPlatformBehaviour::FailAtFree(status) = self.probe.behaviour() {
            return Err(status);
        }

        result
    }
}
