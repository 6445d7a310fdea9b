//! Top-level facade crate for envprobe.
//!
//! Re-exports core types and the server library so users can depend on a single crate.
//!
//! ```
//! use envprobe::core::{env::FixedEnv, expose::{expose, ExposeMode}};
//!
//! let env = FixedEnv::new([("PUBLIC_REGION", "us-east")]);
//! let out = expose(&ExposeMode::Public.rule(), &env);
//! assert_eq!(out.to_json().unwrap(), r#"{"region":"us-east"}"#);
//!
//! let cfg = envprobe::server::config::ServerConfig::default();
//! assert_eq!(cfg.probe.mode, ExposeMode::Pod);
//! ```

pub mod core {
    pub use envprobe_core::*;
}

pub mod server {
    pub use envprobe_server::*;
}
