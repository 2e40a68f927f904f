//! Rounding-mode control errors.
//!
//! Every failure in this crate is surfaced to the immediate caller; none is retried or replaced
//! by a default. The kinds are:
//! 1. **Capability:** the host has no rounding-mode control ([`FenvError::UnsupportedPlatform`]).
//! 2. **Decoding:** the host reported a code outside the four IEEE modes
//!    ([`FenvError::UnrecognizedMode`]).
//! 3. **Installation:** the host refused a requested mode ([`FenvError::ModeRejected`]).
//! 4. **Restoration:** a scoped override could not put the prior mode back
//!    ([`FenvError::RestoreFailed`]).

use std::fmt;

use libc::c_int;
use thiserror::Error;

use crate::fenv::rounding_modes::RoundingMode;

/// Errors reported by the rounding-mode primitives and scoped overrides.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FenvError {
    /// The host exposes no rounding-mode control register.
    ///
    /// Permanent for the life of the process; feature-detect once with
    /// [`is_supported`](crate::is_supported) and cache the answer.
    #[error("rounding-mode control is not supported on this platform")]
    UnsupportedPlatform,

    /// The host reported a native rounding code that matches none of the four IEEE modes.
    #[error("unrecognized native rounding mode code {code:#x}")]
    UnrecognizedMode {
        /// Raw value returned by the host.
        code: c_int,
    },

    /// The host refused to install the requested mode.
    #[error("platform rejected rounding mode {mode} (native code {code:#x})")]
    ModeRejected {
        /// Mode the caller asked for.
        mode: RoundingMode,
        /// Native code that was passed to the host.
        code: c_int,
    },

    /// Restoring the mode captured by a scoped override failed.
    ///
    /// The thread is left in a mode the caller did not ask for and must not trust.
    #[error("failed to restore rounding mode {prior} after scoped override")]
    RestoreFailed {
        /// Mode that should have been reinstated.
        prior: RoundingMode,
        /// Failure reported by the restoring write.
        #[source]
        source: Box<FenvError>,
    },
}

impl FenvError {
    /// Wraps `source` as a failure to restore `prior`.
    pub fn restore_failed(prior: RoundingMode, source: Self) -> Self {
        Self::RestoreFailed {
            prior,
            source: Box::new(source),
        }
    }

    /// Returns true for [`FenvError::RestoreFailed`].
    pub const fn is_restore_failure(&self) -> bool {
        matches!(self, Self::RestoreFailed { .. })
    }
}

/// Failure of a scoped override whose enclosed computation is itself fallible.
///
/// Keeps the computation's own error apart from environment errors so that neither masks the
/// other.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ScopedError<E> {
    /// Capturing the prior mode or installing the requested one failed.
    ///
    /// The enclosed computation did not run and the prior mode was written back. If that write
    /// failed too, the error is [`FenvError::RestoreFailed`].
    #[error("could not enter rounding-mode override")]
    Enter(#[source] FenvError),

    /// The enclosed computation failed; the prior mode was restored.
    #[error("computation under rounding-mode override failed")]
    Body(#[source] E),

    /// Restoring the prior mode failed.
    ///
    /// `body` carries the computation's own error when it failed too.
    #[error("{error}")]
    Restore {
        /// The [`FenvError::RestoreFailed`] describing the lost mode.
        #[source]
        error: FenvError,
        /// The computation's error, if it also failed.
        body: Option<E>,
    },
}

impl<E> ScopedError<E> {
    /// Returns the environment error, if any.
    pub const fn fenv_error(&self) -> Option<&FenvError> {
        match self {
            Self::Enter(error) | Self::Restore { error, .. } => Some(error),
            Self::Body(_) => None,
        }
    }

    /// Returns the enclosed computation's error, if it failed.
    pub const fn body_error(&self) -> Option<&E> {
        match self {
            Self::Body(e) | Self::Restore { body: Some(e), .. } => Some(e),
            Self::Enter(_) | Self::Restore { body: None, .. } => None,
        }
    }

    /// Consumes the error and returns the computation's error, if it failed.
    pub fn into_body_error(self) -> Option<E> {
        match self {
            Self::Body(e) | Self::Restore { body: Some(e), .. } => Some(e),
            Self::Enter(_) | Self::Restore { body: None, .. } => None,
        }
    }
}

/// Error returned when parsing an unknown rounding mode name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRoundingModeError {
    input: String,
}

impl ParseRoundingModeError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseRoundingModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rounding mode {:?}", self.input)
    }
}

impl std::error::Error for ParseRoundingModeError {}
