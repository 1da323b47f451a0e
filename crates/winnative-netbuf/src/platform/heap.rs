// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! C heap stand-in for the Network Management API heap on Unix.
//!
//! Each allocation is prefixed by a header that records the requested byte
//! count, so [`NetApiPlatform::size`] reports exactly what was asked for.
//! The header keeps the returned address aligned like `malloc` memory.

use core::ffi::c_void;
use core::ptr::NonNull;

use crate::platform::NetApiPlatform;
use crate::status::NetApiStatus;

const HEADER_LEN: usize = 16;

/// `malloc`-backed buffer heap.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SystemPlatform;

impl SystemPlatform {
    #[inline(always)]
    unsafe fn header(buffer: NonNull<c_void>) -> *mut u32 {
        unsafe { buffer.as_ptr().cast::<u8>().sub(HEADER_LEN).cast::<u32>() }
    }
}

impl NetApiPlatform for SystemPlatform {
    fn allocate(&self, byte_count: u32) -> Result<NonNull<c_void>, NetApiStatus> {
        let total = (byte_count as usize)
            .checked_add(HEADER_LEN)
            .ok_or(NetApiStatus::NOT_ENOUGH_MEMORY)?;

        let base = unsafe { libc::malloc(total) };
        let base = NonNull::new(base.cast::<u8>()).ok_or(NetApiStatus::NOT_ENOUGH_MEMORY)?;

        unsafe {
            base.as_ptr().cast::<u32>().write(byte_count);
            Ok(base.add(HEADER_LEN).cast::<c_void>())
        }
    }

    unsafe fn size(&self, buffer: NonNull<c_void>) -> Result<u32, NetApiStatus> {
        Ok(unsafe { Self::header(buffer).read() })
    }

    unsafe fn free(&self, buffer: NonNull<c_void>) -> Result<(), NetApiStatus> {
        unsafe { libc::free(Self::header(buffer).cast::<c_void>()) };

        Ok(())
    }
}
