// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `AUTHZ_EVALUATION_RESULT` audit flags.

use crate::error::AuthzError;

/// A single audit flag, with its native value as discriminant.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum AuthzAuditFlag {
    /// `AUTHZ_GENERATE_SUCCESS_AUDIT`: a success audit message was generated.
    GenerateSuccessAudit = 0x1,
    /// `AUTHZ_GENERATE_FAILURE_AUDIT`: a failure audit message was generated.
    GenerateFailureAudit = 0x2,
}

impl AuthzAuditFlag {
    /// Every flag, in ascending bit order.
    pub const ALL: [Self; 2] = [Self::GenerateSuccessAudit, Self::GenerateFailureAudit];

    /// Native bit value.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Native constant name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::GenerateSuccessAudit => "AUTHZ_GENERATE_SUCCESS_AUDIT",
            Self::GenerateFailureAudit => "AUTHZ_GENERATE_FAILURE_AUDIT",
        }
    }
}

bitflags::bitflags! {
    /// Set of audit flags an authorization evaluation generated.
    ///
    /// Layout-compatible with the native `AUTHZ_EVALUATION_RESULT` value.
    #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
    #[repr(transparent)]
    pub struct AuthzEvaluationResult: u32 {
        /// `AUTHZ_GENERATE_SUCCESS_AUDIT`
        const GENERATE_SUCCESS_AUDIT = AuthzAuditFlag::GenerateSuccessAudit as u32;
        /// `AUTHZ_GENERATE_FAILURE_AUDIT`
        const GENERATE_FAILURE_AUDIT = AuthzAuditFlag::GenerateFailureAudit as u32;
    }
}

impl AuthzEvaluationResult {
    /// Builds a set from a native value.
    ///
    /// # Errors
    ///
    /// [`AuthzError::UnknownBits`] if `bits` has bits outside the flag table.
    pub const fn from_native(bits: u32) -> Result<Self, AuthzError> {
        match Self::from_bits(bits) {
            Some(result) => Ok(result),
            None => Err(AuthzError::UnknownBits(bits & !Self::all().bits())),
        }
    }

    /// Returns true if `flag` is set.
    pub const fn has(self, flag: AuthzAuditFlag) -> bool {
        self.bits() & flag.bits() != 0
    }

    /// Iterates the set flags in ascending bit order.
    pub fn flags(self) -> impl Iterator<Item = AuthzAuditFlag> {
        AuthzAuditFlag::ALL
            .into_iter()
            .filter(move |flag| self.has(*flag))
    }
}

impl Default for AuthzEvaluationResult {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<AuthzAuditFlag> for AuthzEvaluationResult {
    fn from(flag: AuthzAuditFlag) -> Self {
        Self::from_bits_retain(flag.bits())
    }
}

impl TryFrom<u32> for AuthzEvaluationResult {
    type Error = AuthzError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_native(bits)
    }
}

impl From<AuthzEvaluationResult> for u32 {
    fn from(result: AuthzEvaluationResult) -> Self {
        result.bits()
    }
}

impl FromIterator<AuthzAuditFlag> for AuthzEvaluationResult {
    fn from_iter<I: IntoIterator<Item = AuthzAuditFlag>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, flag| acc | Self::from(flag))
    }
}

impl core::fmt::Display for AuthzEvaluationResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }

        for (i, flag) in self.flags().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(flag.name())?;
        }

        Ok(())
    }
}
