// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Native `NET_API_STATUS` values.

/// Status code returned by a Network Management API call.
///
/// `NERR_Success` (0) is the only success value. Every other value is a
/// platform-defined error code, carried verbatim.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NetApiStatus(u32);

impl NetApiStatus {
    /// `NERR_Success`
    pub const SUCCESS: Self = Self(0);
    /// `ERROR_ACCESS_DENIED`
    pub const ACCESS_DENIED: Self = Self(5);
    /// `ERROR_INVALID_HANDLE`
    pub const INVALID_HANDLE: Self = Self(6);
    /// `ERROR_NOT_ENOUGH_MEMORY`
    pub const NOT_ENOUGH_MEMORY: Self = Self(8);
    /// `ERROR_INVALID_PARAMETER`
    pub const INVALID_PARAMETER: Self = Self(87);

    /// Wraps a raw status code.
    pub const fn from_code(code: u32) -> Self {
        Self(code)
    }

    /// Returns the raw status code.
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Returns true for `NERR_Success`.
    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// `Ok(())` on success, `Err(self)` otherwise.
    pub const fn into_result(self) -> Result<(), Self> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Native constant name, when the code is one this crate knows.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("NERR_Success"),
            5 => Some("ERROR_ACCESS_DENIED"),
            6 => Some("ERROR_INVALID_HANDLE"),
            8 => Some("ERROR_NOT_ENOUGH_MEMORY"),
            87 => Some("ERROR_INVALID_PARAMETER"),
            _ => None,
        }
    }
}

impl From<u32> for NetApiStatus {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<NetApiStatus> for u32 {
    fn from(status: NetApiStatus) -> Self {
        status.0
    }
}

impl core::fmt::Display for NetApiStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "status {}", self.0),
        }
    }
}
