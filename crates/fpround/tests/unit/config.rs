//! # Configuration Tests
//!
//! Defaults and JSON deserialization of `FenvConfig`, and the effect of `trace_transitions` on
//! emitted events.

use fpround::{FenvConfig, HostFenv, RoundingControl, RoundingMode, with_rounding_mode_in};
use pretty_assertions::assert_eq;
use tracing_subscriber::layer::SubscriberExt;

use crate::common::harness::{TransitionCounter, host};
use crate::common::mocks::fenv::SimulatedFenv;

/// Runs one scoped override on `env` and returns how many transition events it emitted.
fn transitions_logged<C: RoundingControl>(env: &C) -> usize {
    let counter = TransitionCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    tracing::subscriber::with_default(subscriber, || {
        with_rounding_mode_in(env, RoundingMode::TowardZero, || ()).unwrap();
    });
    counter.count()
}

#[test]
fn test_config_default() {
    let config = FenvConfig::default();
    assert!(config.verify_writes);
    assert!(config.trace_transitions);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config: FenvConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, FenvConfig::default());
}

#[test]
fn test_json_deserialization_overrides() {
    let json = r#"{ "verify_writes": false, "trace_transitions": false }"#;
    let config: FenvConfig = serde_json::from_str(json).unwrap();
    assert!(!config.verify_writes);
    assert!(!config.trace_transitions);
}

#[test]
fn test_json_rejects_wrong_types() {
    assert!(serde_json::from_str::<FenvConfig>(r#"{ "verify_writes": "yes" }"#).is_err());
}

#[test]
fn test_host_fenv_carries_config() {
    let config = FenvConfig {
        verify_writes: false,
        trace_transitions: false,
    };
    let env = HostFenv::with_config(config);
    assert_eq!(env.config(), &config);
    assert!(!env.trace_transitions());
    assert_eq!(HostFenv::new().config(), &FenvConfig::default());
}

#[test]
fn test_transitions_logged_on_enter_and_restore() {
    assert_eq!(transitions_logged(&SimulatedFenv::new()), 2);
}

#[test]
fn test_quiet_env_logs_no_transitions() {
    assert_eq!(transitions_logged(&SimulatedFenv::new().quiet()), 0);
}

#[test]
fn test_host_trace_transitions_flag() {
    let Some(env) = host() else { return };
    let quiet = HostFenv::with_config(FenvConfig {
        trace_transitions: false,
        ..FenvConfig::default()
    });

    assert_eq!(transitions_logged(&env), 2);
    assert_eq!(transitions_logged(&quiet), 0);
}
