//! Common types shared across the crate.
//!
//! This module currently holds the error taxonomy:
//! 1. **Environment errors:** [`FenvError`] for capability absence, unknown native codes,
//!    rejected modes and failed restorations.
//! 2. **Scoped errors:** [`ScopedError`] for overrides wrapping a fallible computation.
//! 3. **Parse errors:** [`ParseRoundingModeError`] for textual mode names.

/// Error types for rounding-mode control.
pub mod error;

pub use error::{FenvError, ParseRoundingModeError, ScopedError};
