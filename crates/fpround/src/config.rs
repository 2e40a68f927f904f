//! Rounding-control configuration.
//!
//! Configuration is a plain serde structure so it can be embedded in a host application's own
//! configuration file. Every field has a default; an empty JSON object is a valid config.
//!
//! ```
//! use fpround::FenvConfig;
//!
//! let config: FenvConfig = serde_json::from_str(r#"{ "verify_writes": false }"#)?;
//! assert!(!config.verify_writes);
//! assert!(config.trace_transitions);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::Deserialize;

/// Behaviour switches for [`HostFenv`](crate::HostFenv).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FenvConfig {
    /// Read the mode back after every write and report a mismatch as
    /// [`FenvError::ModeRejected`](crate::FenvError::ModeRejected).
    ///
    /// Catches hosts whose `fesetround` reports success without changing the register.
    #[serde(default = "FenvConfig::default_verify_writes")]
    pub verify_writes: bool,

    /// Emit `debug` events when a scoped override enters and restores.
    #[serde(default = "FenvConfig::default_trace_transitions")]
    pub trace_transitions: bool,
}

impl FenvConfig {
    /// Write verification is on unless explicitly disabled.
    const fn default_verify_writes() -> bool {
        true
    }

    const fn default_trace_transitions() -> bool {
        true
    }
}

impl Default for FenvConfig {
    fn default() -> Self {
        Self {
            verify_writes: Self::default_verify_writes(),
            trace_transitions: Self::default_trace_transitions(),
        }
    }
}
