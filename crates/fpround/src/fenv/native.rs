//! Host floating-point environment.
//!
//! [`HostFenv`] reads and writes the calling thread's rounding mode through the C library's
//! `fegetround`/`fesetround`. Codes are translated with the target table in
//! [`codes`](super::codes); on targets without a table every operation fails with
//! [`FenvError::UnsupportedPlatform`] and the C functions are never called.

use std::sync::OnceLock;

use libc::c_int;
use tracing::warn;

use super::RoundingControl;
use super::codes;
use super::rounding_modes::RoundingMode;
use crate::common::error::FenvError;
use crate::config::FenvConfig;

#[cfg(any(unix, windows))]
mod ffi {
    use libc::c_int;

    #[cfg_attr(all(unix, not(target_vendor = "apple")), link(name = "m"))]
    unsafe extern "C" {
        pub fn fegetround() -> c_int;
        pub fn fesetround(round: c_int) -> c_int;
    }
}

/// Reads the raw rounding code of the calling thread.
#[cfg(any(unix, windows))]
fn raw_get() -> Result<c_int, FenvError> {
    // SAFETY: fegetround takes no arguments and only reads the calling thread's FP control
    // register; it has no preconditions.
    let code = unsafe { ffi::fegetround() };
    tracing::trace!(target: "fpround::fenv", code, "fegetround");
    if code < 0 {
        return Err(FenvError::UnsupportedPlatform);
    }
    Ok(code)
}

/// Writes the raw rounding code of the calling thread; returns the C status.
#[cfg(any(unix, windows))]
fn raw_set(code: c_int) -> c_int {
    // SAFETY: fesetround validates its argument and returns non-zero for codes it does not
    // accept; it only modifies the calling thread's FP control register.
    let status = unsafe { ffi::fesetround(code) };
    tracing::trace!(target: "fpround::fenv", code, status, "fesetround");
    status
}

#[cfg(not(any(unix, windows)))]
const fn raw_get() -> Result<c_int, FenvError> {
    Err(FenvError::UnsupportedPlatform)
}

#[cfg(not(any(unix, windows)))]
const fn raw_set(_code: c_int) -> c_int {
    -1
}

/// Raw access to the rounding code of the calling thread.
///
/// `HostFenv` goes through this seam so the status and readback handling can be driven without
/// touching the real register.
trait RawRounding {
    /// Current `FE_*` code.
    fn get(&self) -> Result<c_int, FenvError>;
    /// Installs `code`; returns the C status (zero on success).
    fn set(&self, code: c_int) -> c_int;
}

/// The C library's `fegetround`/`fesetround`.
struct CRuntime;

impl RawRounding for CRuntime {
    fn get(&self) -> Result<c_int, FenvError> {
        raw_get()
    }

    fn set(&self, code: c_int) -> c_int {
        raw_set(code)
    }
}

fn read_mode(raw: &impl RawRounding) -> Result<RoundingMode, FenvError> {
    if codes::HOST.is_none() {
        return Err(FenvError::UnsupportedPlatform);
    }
    codes::decode(raw.get()?)
}

fn write_mode(
    raw: &impl RawRounding,
    config: FenvConfig,
    mode: RoundingMode,
) -> Result<(), FenvError> {
    let code = codes::encode(mode)?;
    if raw.set(code) != 0 {
        warn!(target: "fpround::fenv", %mode, code, "host rejected rounding mode");
        return Err(FenvError::ModeRejected { mode, code });
    }
    if !config.verify_writes {
        return Ok(());
    }
    match read_mode(raw) {
        Ok(actual) if actual == mode => Ok(()),
        Ok(actual) => {
            warn!(target: "fpround::fenv", %mode, %actual, "rounding mode did not take effect");
            Err(FenvError::ModeRejected { mode, code })
        }
        Err(error) => {
            warn!(target: "fpround::fenv", %mode, %error, "rounding mode readback failed");
            Err(FenvError::ModeRejected { mode, code })
        }
    }
}

/// Result of the one-time capability probe.
static PROBE: OnceLock<bool> = OnceLock::new();

/// Returns whether the host supports rounding-mode control.
///
/// The first call checks that a code table exists for the target and that the host's current
/// mode decodes through it; the answer is cached for the rest of the process.
pub fn probe() -> bool {
    *PROBE.get_or_init(|| codes::HOST.is_some() && raw_get().and_then(codes::decode).is_ok())
}

/// The calling thread's floating-point environment.
///
/// Holds only configuration; the state it manipulates lives in the hardware thread, so any
/// number of `HostFenv` values observe the same mode on a given thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostFenv {
    config: FenvConfig,
}

impl HostFenv {
    /// Creates a host environment with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host environment with `config`.
    pub const fn with_config(config: FenvConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &FenvConfig {
        &self.config
    }
}

impl RoundingControl for HostFenv {
    fn is_supported(&self) -> bool {
        probe()
    }

    fn trace_transitions(&self) -> bool {
        self.config.trace_transitions
    }

    fn get_rounding_mode(&self) -> Result<RoundingMode, FenvError> {
        read_mode(&CRuntime)
    }

    fn set_rounding_mode(&self, mode: RoundingMode) -> Result<(), FenvError> {
        write_mode(&CRuntime, self.config, mode)
    }
}
