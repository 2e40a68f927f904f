//! Scoped control of the host floating-point rounding mode.
//!
//! This crate exposes the processor's IEEE 754 rounding-mode control register with:
//! 1. **Primitives:** [`get_rounding_mode`] and [`set_rounding_mode`], which read and write the
//!    calling thread's rounding mode through the C floating-point environment.
//! 2. **Scoped overrides:** [`RoundingGuard`], [`with_rounding_mode`] and
//!    [`try_with_rounding_mode`], which install a mode for a bounded region and restore the
//!    previous mode on every exit path (return, `?`, panic).
//! 3. **Feature detection:** [`is_supported`] reports whether the host exposes rounding control.
//!    Hosts without it fail with [`FenvError::UnsupportedPlatform`] instead of silently ignoring
//!    the request.
//!
//! # Thread affinity
//!
//! The rounding mode is per hardware thread. Setting it on one thread has no effect on any
//! other thread. [`RoundingGuard`] is therefore `!Send`: a guard cannot be moved to another
//! thread, and an `async` block holding one across an `.await` produces a `!Send` future that a
//! work-stealing executor refuses to spawn. Do not let a scoped override span a suspension point
//! that may resume on a different thread. Pin the task to one thread, or close the scope before
//! awaiting.
//!
//! # Examples
//!
//! ```
//! use fpround::{RoundingMode, with_rounding_mode};
//!
//! if fpround::is_supported() {
//!     let third = with_rounding_mode(RoundingMode::TowardPositiveInfinity, || {
//!         std::hint::black_box(1.0_f64) / std::hint::black_box(3.0_f64)
//!     })?;
//!     assert!(third > 0.333);
//!     assert_eq!(fpround::get_rounding_mode()?, RoundingMode::ToNearestTiesToEven);
//! }
//! # Ok::<(), fpround::FenvError>(())
//! ```

/// Error taxonomy shared by every rounding-mode operation.
pub mod common;
/// Rounding-control configuration.
pub mod config;
/// Floating-point environment access: modes, native codes, host backend, scoped guards.
pub mod fenv;

pub use crate::common::error::{FenvError, ParseRoundingModeError, ScopedError};
pub use crate::config::FenvConfig;
pub use crate::fenv::native::HostFenv;
pub use crate::fenv::rounding_modes::RoundingMode;
pub use crate::fenv::scope::{RoundingGuard, try_with_rounding_mode_in, with_rounding_mode_in};
pub use crate::fenv::{
    RoundingControl, get_rounding_mode, is_supported, set_rounding_mode, try_with_rounding_mode,
    with_rounding_mode,
};
