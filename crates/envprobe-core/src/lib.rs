//! envprobe core: environment sources, expose rules, and the shared error type.
//!
//! This crate holds everything the responder needs that is independent of
//! HTTP: reading an environment mapping, selecting the entries a variant
//! exposes, and encoding them as JSON. It carries no transport or runtime
//! dependencies so embedders and tests can drive it directly.
//!
//! # Panic policy
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Unencodable environment values surface as `EnvProbeError` instead.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod env;
pub mod error;
pub mod expose;

/// Shared result type.
pub use error::{Result, EnvProbeError};
