//! Floating-point rounding mode support.
//!
//! IEEE 754 defines four rounding-direction attributes that every conforming control register
//! can select:
//!
//! | Variant                  | C macro         | Description                        |
//! |--------------------------|-----------------|------------------------------------|
//! | `ToNearestTiesToEven`    | `FE_TONEAREST`  | Round to nearest, ties to even     |
//! | `TowardZero`             | `FE_TOWARDZERO` | Truncate towards zero              |
//! | `TowardPositiveInfinity` | `FE_UPWARD`     | Round up (towards +∞)              |
//! | `TowardNegativeInfinity` | `FE_DOWNWARD`   | Round down (towards −∞)            |
//!
//! The enumeration is closed: an invalid mode cannot be constructed, so the setter never has to
//! validate its argument. Raw platform codes enter only through [`RoundingMode::from_native`],
//! which rejects anything outside the table.

use std::fmt;
use std::str::FromStr;

use libc::c_int;
use serde::{Deserialize, Serialize};

use super::codes;
use crate::common::error::{FenvError, ParseRoundingModeError};

/// IEEE 754 rounding-direction attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to nearest, ties to even (the IEEE default).
    #[default]
    ToNearestTiesToEven = 0,
    /// Round towards zero.
    TowardZero = 1,
    /// Round towards +∞.
    TowardPositiveInfinity = 2,
    /// Round towards −∞.
    TowardNegativeInfinity = 3,
}

impl RoundingMode {
    /// All four modes, nearest first.
    pub const ALL: [Self; 4] = [
        Self::ToNearestTiesToEven,
        Self::TowardZero,
        Self::TowardPositiveInfinity,
        Self::TowardNegativeInfinity,
    ];

    /// Returns true for the three directed modes (everything except round-to-nearest).
    pub const fn is_directed(self) -> bool {
        !matches!(self, Self::ToNearestTiesToEven)
    }

    /// Returns the canonical snake_case name, as used by `Display` and serde.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToNearestTiesToEven => "to_nearest_ties_to_even",
            Self::TowardZero => "toward_zero",
            Self::TowardPositiveInfinity => "toward_positive_infinity",
            Self::TowardNegativeInfinity => "toward_negative_infinity",
        }
    }

    /// Decodes a host `FE_*` code.
    ///
    /// # Errors
    ///
    /// [`FenvError::UnrecognizedMode`] if `code` is not one of the host's four rounding codes,
    /// [`FenvError::UnsupportedPlatform`] if the host has no rounding control.
    pub fn from_native(code: c_int) -> Result<Self, FenvError> {
        codes::decode(code)
    }

    /// Returns the host `FE_*` code for this mode.
    ///
    /// # Errors
    ///
    /// [`FenvError::UnsupportedPlatform`] if the host has no rounding control.
    pub fn native_code(self) -> Result<c_int, FenvError> {
        codes::encode(self)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = ParseRoundingModeError;

    /// Parses canonical names and the common C / RISC-V abbreviations, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "to_nearest_ties_to_even" | "nearest" | "tonearest" | "rne" => {
                Ok(Self::ToNearestTiesToEven)
            }
            "toward_zero" | "towardzero" | "zero" | "rtz" => Ok(Self::TowardZero),
            "toward_positive_infinity" | "upward" | "up" | "rup" => {
                Ok(Self::TowardPositiveInfinity)
            }
            "toward_negative_infinity" | "downward" | "down" | "rdn" => {
                Ok(Self::TowardNegativeInfinity)
            }
            _ => Err(ParseRoundingModeError::new(s)),
        }
    }
}
