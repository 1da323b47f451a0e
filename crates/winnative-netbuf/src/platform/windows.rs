// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `NetApiBufferAllocate` / `NetApiBufferSize` / `NetApiBufferFree`.

use core::ffi::c_void;
use core::ptr::{self, NonNull};

use winapi::shared::minwindef::{DWORD, LPVOID};
use winapi::um::lmapibuf::{NetApiBufferAllocate, NetApiBufferFree, NetApiBufferSize};

use crate::platform::NetApiPlatform;
use crate::status::NetApiStatus;

/// The Network Management API heap.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SystemPlatform;

impl NetApiPlatform for SystemPlatform {
    fn allocate(&self, byte_count: u32) -> Result<NonNull<c_void>, NetApiStatus> {
        let mut buffer: LPVOID = ptr::null_mut();
        let status = unsafe { NetApiBufferAllocate(byte_count, &mut buffer) };

        NetApiStatus::from_code(status).into_result()?;

        NonNull::new(buffer.cast::<c_void>()).ok_or(NetApiStatus::NOT_ENOUGH_MEMORY)
    }

    unsafe fn size(&self, buffer: NonNull<c_void>) -> Result<u32, NetApiStatus> {
        let mut byte_count: DWORD = 0;
        let status = unsafe { NetApiBufferSize(buffer.as_ptr().cast(), &mut byte_count) };

        NetApiStatus::from_code(status).into_result()?;

        Ok(byte_count)
    }

    unsafe fn free(&self, buffer: NonNull<c_void>) -> Result<(), NetApiStatus> {
        let status = unsafe { NetApiBufferFree(buffer.as_ptr().cast()) };

        NetApiStatus::from_code(status).into_result()
    }
}
