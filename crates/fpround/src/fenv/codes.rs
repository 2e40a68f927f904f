//! Native rounding-mode codes.
//!
//! The C `FE_*` rounding macros are bit patterns of each architecture's control register, so
//! their values differ per target. This module carries the table for the compiled target and
//! translates between it and [`RoundingMode`]:
//!
//! | Target                              | NEAREST | ZERO     | UP       | DOWN     |
//! |-------------------------------------|---------|----------|----------|----------|
//! | x86 / x86_64 (non-MSVC)             | 0x000   | 0xc00    | 0x800    | 0x400    |
//! | Windows MSVC                        | 0x000   | 0x300    | 0x200    | 0x100    |
//! | arm / aarch64 (non-MSVC)            | 0       | 0xc00000 | 0x400000 | 0x800000 |
//! | riscv32 / riscv64                   | 0       | 1        | 3        | 2        |
//! | powerpc / mips / s390x              | 0       | 1        | 2        | 3        |
//! | loongarch64                         | 0x000   | 0x100    | 0x200    | 0x300    |
//!
//! Targets outside the table have no usable rounding control and report
//! [`FenvError::UnsupportedPlatform`].

use libc::c_int;

use super::rounding_modes::RoundingMode;
use crate::common::error::FenvError;

/// Values of `FE_TONEAREST`, `FE_TOWARDZERO`, `FE_UPWARD` and `FE_DOWNWARD` on one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeTable {
    /// `FE_TONEAREST`.
    pub to_nearest: c_int,
    /// `FE_TOWARDZERO`.
    pub toward_zero: c_int,
    /// `FE_UPWARD`.
    pub upward: c_int,
    /// `FE_DOWNWARD`.
    pub downward: c_int,
}

impl NativeTable {
    /// Returns the code for `mode`.
    pub const fn encode(&self, mode: RoundingMode) -> c_int {
        match mode {
            RoundingMode::ToNearestTiesToEven => self.to_nearest,
            RoundingMode::TowardZero => self.toward_zero,
            RoundingMode::TowardPositiveInfinity => self.upward,
            RoundingMode::TowardNegativeInfinity => self.downward,
        }
    }

    /// Returns the mode for `code`, or `None` if the code is not in the table.
    pub fn decode(&self, code: c_int) -> Option<RoundingMode> {
        RoundingMode::ALL
            .into_iter()
            .find(|&mode| self.encode(mode) == code)
    }
}

/// Table for the compiled target, or `None` where rounding control is unavailable.
#[cfg(all(
    windows,
    target_env = "msvc",
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
pub const HOST: Option<NativeTable> = Some(NativeTable {
    to_nearest: 0x000,
    toward_zero: 0x300,
    upward: 0x200,
    downward: 0x100,
});

/// Table for the compiled target, or `None` where rounding control is unavailable.
#[cfg(all(
    any(unix, windows),
    not(target_env = "msvc"),
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub const HOST: Option<NativeTable> = Some(NativeTable {
    to_nearest: 0x000,
    toward_zero: 0xc00,
    upward: 0x800,
    downward: 0x400,
});

/// Table for the compiled target, or `None` where rounding control is unavailable.
#[cfg(all(
    any(unix, windows),
    not(target_env = "msvc"),
    any(target_arch = "arm", target_arch = "aarch64")
))]
pub const HOST: Option<NativeTable> = Some(NativeTable {
    to_nearest: 0x000000,
    toward_zero: 0xc00000,
    upward: 0x400000,
    downward: 0x800000,
});

/// Table for the compiled target, or `None` where rounding control is unavailable.
#[cfg(all(unix, any(target_arch = "riscv32", target_arch = "riscv64")))]
pub const HOST: Option<NativeTable> = Some(NativeTable {
    to_nearest: 0,
    toward_zero: 1,
    upward: 3,
    downward: 2,
});

/// Table for the compiled target, or `None` where rounding control is unavailable.
#[cfg(all(
    unix,
    any(
        target_arch = "powerpc",
        target_arch = "powerpc64",
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "s390x"
    )
))]
pub const HOST: Option<NativeTable> = Some(NativeTable {
    to_nearest: 0,
    toward_zero: 1,
    upward: 2,
    downward: 3,
});

/// Table for the compiled target, or `None` where rounding control is unavailable.
#[cfg(all(unix, target_arch = "loongarch64"))]
pub const HOST: Option<NativeTable> = Some(NativeTable {
    to_nearest: 0x000,
    toward_zero: 0x100,
    upward: 0x200,
    downward: 0x300,
});

/// Table for the compiled target, or `None` where rounding control is unavailable.
#[cfg(not(any(
    all(
        windows,
        target_env = "msvc",
        any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
    ),
    all(
        any(unix, windows),
        not(target_env = "msvc"),
        any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "arm",
            target_arch = "aarch64"
        )
    ),
    all(
        unix,
        any(
            target_arch = "riscv32",
            target_arch = "riscv64",
            target_arch = "powerpc",
            target_arch = "powerpc64",
            target_arch = "mips",
            target_arch = "mips64",
            target_arch = "s390x",
            target_arch = "loongarch64"
        )
    )
)))]
pub const HOST: Option<NativeTable> = None;

/// Encodes `mode` with the host table.
///
/// # Errors
///
/// [`FenvError::UnsupportedPlatform`] when the target has no table.
pub fn encode(mode: RoundingMode) -> Result<c_int, FenvError> {
    HOST.map(|table| table.encode(mode))
        .ok_or(FenvError::UnsupportedPlatform)
}

/// Decodes `code` with the host table.
///
/// # Errors
///
/// [`FenvError::UnsupportedPlatform`] when the target has no table,
/// [`FenvError::UnrecognizedMode`] when `code` is not one of its four entries.
pub fn decode(code: c_int) -> Result<RoundingMode, FenvError> {
    let table = HOST.ok_or(FenvError::UnsupportedPlatform)?;
    table
        .decode(code)
        .ok_or(FenvError::UnrecognizedMode { code })
}
