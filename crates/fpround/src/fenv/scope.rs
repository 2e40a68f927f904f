//! Scoped rounding-mode overrides.
//!
//! Directed rounding is normally needed for a short region inside otherwise default-rounding
//! code. A mode left installed past that region silently changes every later floating-point
//! result on the thread, so overrides here are bound to a scope:
//! 1. **Enter:** capture the current mode, then install the requested one.
//! 2. **Run:** the caller's computation executes under the requested mode.
//! 3. **Restore:** the captured mode is reinstated on every exit path, including `?`
//!    propagation and panic unwinding.
//!
//! Overrides nest: each guard restores whatever mode the enclosing scope had installed.
//!
//! A [`RoundingGuard`] is tied to the thread that created it and cannot be sent elsewhere:
//!
//! ```compile_fail
//! use fpround::{HostFenv, RoundingGuard, RoundingMode};
//!
//! let env = HostFenv::new();
//! let guard = RoundingGuard::enter(&env, RoundingMode::TowardZero).unwrap();
//! std::thread::scope(|s| {
//!     s.spawn(move || drop(guard));
//! });
//! ```

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, error};

use super::RoundingControl;
use super::rounding_modes::RoundingMode;
use crate::common::error::{FenvError, ScopedError};

/// An active rounding-mode override.
///
/// Created by [`RoundingGuard::enter`]; reinstates the captured prior mode when consumed by
/// [`restore`](RoundingGuard::restore) or dropped.
///
/// If a drop-time restore fails the failure is never discarded: outside of unwinding the guard
/// panics with the [`FenvError::RestoreFailed`] message; during unwinding (where a second panic
/// would abort) it is logged at `error` level. Call [`restore`](RoundingGuard::restore) to
/// receive the error as a value instead.
#[must_use = "the override ends as soon as the guard is dropped"]
pub struct RoundingGuard<'env, C: RoundingControl + ?Sized> {
    env: &'env C,
    prior: RoundingMode,
    mode: RoundingMode,
    armed: bool,
    /// Pins the guard to the creating thread.
    _thread: PhantomData<*const ()>,
}

impl<'env, C: RoundingControl + ?Sized> RoundingGuard<'env, C> {
    /// Captures the current mode of `env` and installs `mode`.
    ///
    /// # Errors
    ///
    /// Any error from reading the current mode or installing `mode`; no guard is created.
    ///
    /// A failed install may still have touched the register (a write that reports success but
    /// does not read back), so the captured mode is written again before returning. If that
    /// write fails too the result is [`FenvError::RestoreFailed`].
    pub fn enter(env: &'env C, mode: RoundingMode) -> Result<Self, FenvError> {
        let prior = env.get_rounding_mode()?;
        if let Err(err) = env.set_rounding_mode(mode) {
            return match env.set_rounding_mode(prior) {
                Ok(()) => Err(err),
                Err(source) => {
                    let err = FenvError::restore_failed(prior, source);
                    error!(
                        target: "fpround::scope",
                        %prior,
                        %mode,
                        error = %err,
                        "rounding mode restore failed after rejected override"
                    );
                    Err(err)
                }
            };
        }
        if env.trace_transitions() {
            debug!(target: "fpround::scope", %prior, %mode, "entered rounding override");
        }
        Ok(Self {
            env,
            prior,
            mode,
            armed: true,
            _thread: PhantomData,
        })
    }

    /// Mode that was active before the override and will be restored.
    pub const fn prior(&self) -> RoundingMode {
        self.prior
    }

    /// Mode installed by the override.
    pub const fn mode(&self) -> RoundingMode {
        self.mode
    }

    /// Ends the override and reinstates the prior mode.
    ///
    /// # Errors
    ///
    /// [`FenvError::RestoreFailed`] wrapping the environment's error.
    pub fn restore(mut self) -> Result<(), FenvError> {
        self.armed = false;
        self.reinstate()
    }

    fn reinstate(&self) -> Result<(), FenvError> {
        match self.env.set_rounding_mode(self.prior) {
            Ok(()) => {
                if self.env.trace_transitions() {
                    debug!(
                        target: "fpround::scope",
                        prior = %self.prior,
                        mode = %self.mode,
                        "restored rounding mode"
                    );
                }
                Ok(())
            }
            Err(source) => {
                let err = FenvError::restore_failed(self.prior, source);
                error!(
                    target: "fpround::scope",
                    prior = %self.prior,
                    mode = %self.mode,
                    error = %err,
                    "rounding mode restore failed"
                );
                Err(err)
            }
        }
    }
}

impl<C: RoundingControl + ?Sized> Drop for RoundingGuard<'_, C> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        if let Err(err) = self.reinstate() {
            // Already logged by `reinstate`; panicking again while unwinding would abort.
            if !std::thread::panicking() {
                panic!("{err}");
            }
        }
    }
}

impl<C: RoundingControl + ?Sized> fmt::Debug for RoundingGuard<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundingGuard")
            .field("prior", &self.prior)
            .field("mode", &self.mode)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}

/// Runs `f` on `env` under `mode`, then restores the prior mode.
///
/// # Errors
///
/// The enter error (and `f` does not run), or [`FenvError::RestoreFailed`]. When the restore
/// fails the value produced by `f` is discarded; use [`RoundingGuard`] directly to keep it.
pub fn with_rounding_mode_in<C, T, F>(env: &C, mode: RoundingMode, f: F) -> Result<T, FenvError>
where
    C: RoundingControl + ?Sized,
    F: FnOnce() -> T,
{
    let guard = RoundingGuard::enter(env, mode)?;
    let value = f();
    guard.restore()?;
    Ok(value)
}

/// Runs the fallible `f` on `env` under `mode`, then restores the prior mode.
///
/// # Errors
///
/// [`ScopedError::Enter`] if the override could not be installed, [`ScopedError::Body`] if `f`
/// failed, [`ScopedError::Restore`] if the prior mode could not be reinstated (carrying `f`'s
/// error too when both failed).
pub fn try_with_rounding_mode_in<C, T, E, F>(
    env: &C,
    mode: RoundingMode,
    f: F,
) -> Result<T, ScopedError<E>>
where
    C: RoundingControl + ?Sized,
    F: FnOnce() -> Result<T, E>,
{
    let guard = RoundingGuard::enter(env, mode).map_err(ScopedError::Enter)?;
    let outcome = f();
    match (outcome, guard.restore()) {
        (Ok(value), Ok(())) => Ok(value),
        (Err(e), Ok(())) => Err(ScopedError::Body(e)),
        (outcome, Err(error)) => Err(ScopedError::Restore {
            error,
            body: outcome.err(),
        }),
    }
}
