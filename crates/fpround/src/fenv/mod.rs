//! Floating-point environment access.
//!
//! This module is the rounding-mode control component. It is organised as:
//! - [`rounding_modes`]: the closed [`RoundingMode`] enumeration.
//! - [`codes`]: per-target `FE_*` code tables.
//! - [`native`]: the host environment backed by `fegetround`/`fesetround`.
//! - [`scope`]: scoped overrides that restore the prior mode on every exit path.
//!
//! The free functions below operate on the calling thread's host environment. Code that needs
//! a different backend (tests, simulators) goes through the [`RoundingControl`] trait and the
//! `*_in` variants in [`scope`].

/// Rounding mode definitions.
pub mod rounding_modes;

/// Native `FE_*` code tables.
pub mod codes;

/// Host environment backed by the C library.
pub mod native;

/// Scoped rounding-mode overrides.
pub mod scope;

use crate::common::error::{FenvError, ScopedError};

use self::native::HostFenv;
use self::rounding_modes::RoundingMode;

/// A floating-point environment whose rounding mode can be read and written.
///
/// Implementations operate on thread-local state: a mode written on one thread is observed only
/// by that thread.
pub trait RoundingControl {
    /// Returns whether this environment can control the rounding mode at all.
    fn is_supported(&self) -> bool;

    /// Returns the active rounding mode.
    ///
    /// # Errors
    ///
    /// [`FenvError::UnsupportedPlatform`] without rounding control,
    /// [`FenvError::UnrecognizedMode`] if the environment reports an unknown code.
    fn get_rounding_mode(&self) -> Result<RoundingMode, FenvError>;

    /// Installs `mode` as the active rounding mode.
    ///
    /// # Errors
    ///
    /// [`FenvError::UnsupportedPlatform`] without rounding control,
    /// [`FenvError::ModeRejected`] if the environment refuses the mode.
    fn set_rounding_mode(&self, mode: RoundingMode) -> Result<(), FenvError>;

    /// Whether scoped overrides on this environment log their transitions.
    fn trace_transitions(&self) -> bool {
        true
    }
}

/// Returns whether the host supports rounding-mode control.
///
/// Cheap after the first call; the probe result is cached for the process.
pub fn is_supported() -> bool {
    native::probe()
}

/// Returns the calling thread's rounding mode.
///
/// # Errors
///
/// [`FenvError::UnsupportedPlatform`] if the host has no rounding control,
/// [`FenvError::UnrecognizedMode`] if the host reports a code outside the four IEEE modes.
pub fn get_rounding_mode() -> Result<RoundingMode, FenvError> {
    HostFenv::new().get_rounding_mode()
}

/// Sets the calling thread's rounding mode.
///
/// Prefer [`with_rounding_mode`] or [`RoundingGuard`](scope::RoundingGuard), which restore the
/// previous mode automatically.
///
/// # Errors
///
/// [`FenvError::UnsupportedPlatform`] if the host has no rounding control,
/// [`FenvError::ModeRejected`] if the host refuses `mode` or the mode read back afterwards is
/// not `mode`.
pub fn set_rounding_mode(mode: RoundingMode) -> Result<(), FenvError> {
    HostFenv::new().set_rounding_mode(mode)
}

/// Runs `f` with the calling thread's rounding mode set to `mode`, then restores the prior mode.
///
/// The prior mode is restored even if `f` panics.
///
/// # Errors
///
/// The error from capturing or installing the mode (in which case `f` does not run), or
/// [`FenvError::RestoreFailed`] if the prior mode could not be reinstated. A restore failure
/// discards the value produced by `f`; use [`RoundingGuard`](scope::RoundingGuard) directly to
/// keep it.
pub fn with_rounding_mode<T, F>(mode: RoundingMode, f: F) -> Result<T, FenvError>
where
    F: FnOnce() -> T,
{
    scope::with_rounding_mode_in(&HostFenv::new(), mode, f)
}

/// Runs the fallible computation `f` with the calling thread's rounding mode set to `mode`, then
/// restores the prior mode.
///
/// # Errors
///
/// See [`ScopedError`]: entering the override, the computation itself, and restoration are
/// reported separately, and a restore failure carries the computation's error when both fail.
pub fn try_with_rounding_mode<T, E, F>(mode: RoundingMode, f: F) -> Result<T, ScopedError<E>>
where
    F: FnOnce() -> Result<T, E>,
{
    scope::try_with_rounding_mode_in(&HostFenv::new(), mode, f)
}
