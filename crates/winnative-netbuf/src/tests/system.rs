// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests against the real system heap.

use serial_test::serial;

use crate::error::BufferError;
use crate::handle::{NetApiBuffer, ReleaseOutcome};
use crate::platform::{NetApiPlatform, SystemPlatform};

#[test]
#[serial(netbuf)]
fn test_system_allocate_size_release() {
    let mut buffer = NetApiBuffer::allocate(1024).expect("Failed to allocate(..)");

    let size = buffer.size().expect("Failed to size()");
    assert!(size >= 1024);
    assert_eq!(buffer.size().expect("Failed to size()"), size);

    assert_eq!(
        buffer.release().expect("Failed to release()"),
        ReleaseOutcome::Released
    );
    assert!(matches!(buffer.size(), Err(BufferError::Disposed)));
}

#[test]
#[serial(netbuf)]
fn test_system_buffer_is_writable_across_its_size() {
    let mut buffer = NetApiBuffer::allocate(4096).expect("Failed to allocate(..)");

    buffer
        .open_mut(&mut |bytes: &mut [u8]| {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = i as u8;
            }
            Ok(())
        })
        .expect("Failed to open_mut(..)");

    buffer
        .open(&mut |bytes: &[u8]| {
            assert!(bytes.iter().enumerate().all(|(i, b)| *b == i as u8));
            Ok(())
        })
        .expect("Failed to open(..)");
}

#[test]
#[serial(netbuf)]
fn test_system_invalid_handle() {
    let mut buffer = NetApiBuffer::invalid();

    assert!(matches!(buffer.size(), Err(BufferError::InvalidHandle)));
    assert_eq!(
        buffer.release().expect("Failed to release()"),
        ReleaseOutcome::NothingToRelease
    );
}

#[test]
#[serial(netbuf)]
fn test_system_from_raw_adopts_platform_buffer() {
    let ptr = SystemPlatform
        .allocate(64)
        .expect("Failed to allocate(..)");

    let buffer = unsafe { NetApiBuffer::from_raw(ptr.as_ptr(), true) };

    assert!(buffer.is_valid());
    assert!(buffer.size().expect("Failed to size()") >= 64);
    buffer.close().expect("Failed to close()");
}

#[cfg(unix)]
#[test]
#[serial(netbuf)]
fn test_heap_reports_exact_size() {
    let ptr = SystemPlatform.allocate(777).expect("Failed to allocate(..)");

    assert_eq!(unsafe { SystemPlatform.size(ptr) }, Ok(777));
    assert_eq!(unsafe { SystemPlatform.free(ptr) }, Ok(()));
}

#[cfg(unix)]
#[test]
#[serial(netbuf)]
fn test_heap_buffers_are_malloc_aligned() {
    let ptr = SystemPlatform.allocate(3).expect("Failed to allocate(..)");

    assert_eq!(ptr.as_ptr() as usize % core::mem::align_of::<u64>(), 0);
    unsafe { SystemPlatform.free(ptr) }.expect("Failed to free(..)");
}
