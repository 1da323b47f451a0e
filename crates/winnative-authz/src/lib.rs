// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Authz evaluation-result audit flags, bit-for-bit with the native values.
//!
//! # Example
//!
//! ```rust
//! use winnative_authz::{AuthzAuditFlag, AuthzEvaluationResult};
//!
//! let result = AuthzEvaluationResult::from_native(0x3).unwrap();
//!
//! assert!(result.has(AuthzAuditFlag::GenerateSuccessAudit));
//! assert!(result.has(AuthzAuditFlag::GenerateFailureAudit));
//! assert_eq!(result.bits(), 0x3);
//! assert!(AuthzEvaluationResult::from_native(0x4).is_err());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]


mod error;
mod evaluation_result;

pub use error::AuthzError;
pub use evaluation_result::{AuthzAuditFlag, AuthzEvaluationResult};
