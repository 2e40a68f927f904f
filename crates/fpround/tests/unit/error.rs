//! # Error Tests
//!
//! Messages, source chains and accessors of the error taxonomy.

use std::error::Error as _;

use fpround::{FenvError, RoundingMode, ScopedError};
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("interval solver diverged")]
struct Diverged;

#[test]
fn messages_name_the_condition() {
    assert_eq!(
        FenvError::UnsupportedPlatform.to_string(),
        "rounding-mode control is not supported on this platform"
    );
    assert_eq!(
        FenvError::UnrecognizedMode { code: 0x1f }.to_string(),
        "unrecognized native rounding mode code 0x1f"
    );
    assert_eq!(
        FenvError::ModeRejected {
            mode: RoundingMode::TowardZero,
            code: 0xc00
        }
        .to_string(),
        "platform rejected rounding mode toward_zero (native code 0xc00)"
    );
}

#[test]
fn restore_failed_chains_the_write_error() {
    let inner = FenvError::ModeRejected {
        mode: RoundingMode::ToNearestTiesToEven,
        code: 0,
    };
    let err = FenvError::restore_failed(RoundingMode::ToNearestTiesToEven, inner.clone());

    assert!(err.is_restore_failure());
    assert!(!inner.is_restore_failure());
    assert_eq!(
        err.to_string(),
        "failed to restore rounding mode to_nearest_ties_to_even after scoped override"
    );
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), inner.to_string());
}

#[test]
fn scoped_error_accessors() {
    let enter: ScopedError<Diverged> = ScopedError::Enter(FenvError::UnsupportedPlatform);
    assert_eq!(enter.fenv_error(), Some(&FenvError::UnsupportedPlatform));
    assert_eq!(enter.body_error(), None);

    let body = ScopedError::Body(Diverged);
    assert_eq!(body.fenv_error(), None);
    assert_eq!(body.body_error(), Some(&Diverged));
    assert_eq!(body.source().unwrap().to_string(), "interval solver diverged");

    let restore_error =
        FenvError::restore_failed(RoundingMode::TowardZero, FenvError::UnsupportedPlatform);
    let both = ScopedError::Restore {
        error: restore_error.clone(),
        body: Some(Diverged),
    };
    assert_eq!(both.fenv_error(), Some(&restore_error));
    assert_eq!(both.body_error(), Some(&Diverged));
    assert_eq!(both.to_string(), restore_error.to_string());
    assert_eq!(both.into_body_error(), Some(Diverged));
}
