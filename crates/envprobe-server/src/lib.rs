//! envprobe server library entry.
//!
//! Wires config, the environment source, and the single `/` responder into an
//! axum router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
