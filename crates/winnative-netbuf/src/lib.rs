// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owning handles for Network Management API buffers.
//!
//! [`NetApiBuffer`] owns exactly one buffer obtained from the Network
//! Management heap, exposes its native size, and releases it exactly once.
//!
//! # Platforms
//!
//! ## Windows
//!
//! [`SystemPlatform`] calls `NetApiBufferAllocate`, `NetApiBufferSize` and
//! `NetApiBufferFree`. Buffers returned by other Network Management functions
//! can be adopted with [`NetApiBuffer::from_raw`].
//!
//! ## Unix
//!
//! [`SystemPlatform`] emulates the same heap on top of `malloc`/`free`, so code
//! built on [`NetApiBuffer`] runs and tests everywhere. Sizes are reported
//! exactly as requested.
//!
//! # Lifecycle
//!
//! - `allocate` either returns a valid handle or fails with the platform
//!   status. No half-built handle escapes.
//! - `size` fails with [`BufferError::Disposed`] once released and with
//!   [`BufferError::InvalidHandle`] on a handle that never held memory.
//! - `release` is idempotent. A failing native free is reported but still
//!   closes the handle.
//! - Drop releases whatever is still held.
//!
//! # Example
//!
//! ```rust
//! use winnative_netbuf::{BufferError, NetApiBuffer, ReleaseOutcome};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buffer = NetApiBuffer::allocate(1024)?;
//!     let size = buffer.size()?;
//!     assert!(size >= 1024);
//!
//!     buffer.open_mut(&mut |bytes: &mut [u8]| {
//!         bytes[0] = 42;
//!         Ok(())
//!     })?;
//!
//!     assert_eq!(buffer.release()?, ReleaseOutcome::Released);
//!     assert_eq!(buffer.release()?, ReleaseOutcome::AlreadyClosed);
//!     assert!(matches!(buffer.size(), Err(BufferError::Disposed)));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject native failures:
//!
//! ```toml
//! [dev-dependencies]
//! winnative-netbuf = { version = "*", features = ["test-utils"] }
//! ```
//!
//! ```rust,ignore
//! use winnative_netbuf::{
//!     BufferError, FaultyPlatform, FaultyPlatformBehaviour, NetApiBuffer, NetApiStatus,
//! };
//!
//! let platform = FaultyPlatform::with_behaviour(FaultyPlatformBehaviour::FailAtAllocate(
//!     NetApiStatus::ACCESS_DENIED,
//! ));
//! let probe = platform.probe();
//!
//! let result = NetApiBuffer::allocate_with(platform, 16);
//! assert!(matches!(result, Err(BufferError::Allocation(NetApiStatus::ACCESS_DENIED))));
//! assert_eq!(probe.free_calls(), 0);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(not(any(unix, windows)))]
compile_error!("winnative-netbuf requires a Windows or Unix target");

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod handle;
mod platform;
mod status;

pub use error::BufferError;
pub use handle::{HandleState, NetApiBuffer, ReleaseOutcome};
pub use platform::{NetApiPlatform, SystemPlatform};
pub use status::NetApiStatus;

#[cfg(any(test, feature = "test-utils"))]
pub use platform::{FaultyPlatform, FaultyPlatformBehaviour, PlatformProbe};
