// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Safe bindings for native Windows buffers and authorization constants.
//!
//! - [`netbuf`]: owning handle for Network Management API buffers.
//! - [`authz`]: Authz evaluation-result audit flags.
//!
//! # Quick Start
//!
//! ```rust
//! use winnative::authz::{AuthzAuditFlag, AuthzEvaluationResult};
//! use winnative::netbuf::{BufferError, NetApiBuffer};
//!
//! fn main() -> Result<(), BufferError> {
//!     let buffer = NetApiBuffer::allocate(256)?;
//!     assert!(buffer.size()? >= 256);
//!     buffer.close()?;
//!
//!     let audits = AuthzEvaluationResult::from(AuthzAuditFlag::GenerateFailureAudit);
//!     assert_eq!(audits.bits(), 0x2);
//!     Ok(())
//! }
//! ```

#![no_std]
#![warn(missing_docs)]

/// Network Management API buffers.
pub mod netbuf {
    pub use winnative_netbuf::*;
}

/// Authz audit flags.
pub mod authz {
    pub use winnative_authz::*;
}
