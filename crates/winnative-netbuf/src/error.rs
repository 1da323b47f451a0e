// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for winnative-netbuf.
use alloc::boxed::Box;
use thiserror::Error;

use crate::status::NetApiStatus;

/// Errors that can occur when working with Network Management buffers.
#[derive(Debug, Error)]
pub enum BufferError {
    /// A native allocate, size or free call reported a non-success status.
    #[error("native buffer call failed: {0}")]
    Allocation(NetApiStatus),

    /// The handle has already been released.
    #[error("buffer handle has already been released")]
    Disposed,

    /// The handle never held a valid allocation.
    #[error("buffer handle is invalid")]
    InvalidHandle,

    /// An error occurred in a callback function.
    #[error("callback error: {0:?}")]
    CallbackError(Box<dyn core::fmt::Debug + Send + Sync + 'static>),
}

impl BufferError {
    /// Creates a CallbackError from any Debug + Send + Sync error.
    pub fn callback_error<E: core::fmt::Debug + Send + Sync + 'static>(e: E) -> Self {
        Self::CallbackError(Box::new(e))
    }

    /// Returns the native status carried by an `Allocation` error.
    pub fn status(&self) -> Option<NetApiStatus> {
        match self {
            Self::Allocation(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<NetApiStatus> for BufferError {
    fn from(status: NetApiStatus) -> Self {
        Self::Allocation(status)
    }
}
