// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for winnative-authz.
use thiserror::Error;

/// Errors that can occur when decoding native Authz values.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AuthzError {
    /// The value has bits outside the native flag table.
    #[error("unknown AUTHZ_EVALUATION_RESULT bits: {0:#x}")]
    UnknownBits(u32),
}
