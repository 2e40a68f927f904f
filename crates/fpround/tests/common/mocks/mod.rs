//! Test doubles for the floating-point environment.
