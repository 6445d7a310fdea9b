//! Server config loader (strict parsing) and environment overrides.

pub mod schema;

use std::fs;

use envprobe_core::env::EnvSource;
use envprobe_core::error::{EnvProbeError, Result};

pub use schema::{ProbeSection, ServerConfig, ServerSection};

/// Path of an optional YAML config file.
pub const CONFIG_PATH_VAR: &str = "ENVPROBE_CONFIG";
/// Overrides `probe.mode`.
pub const MODE_VAR: &str = "ENVPROBE_MODE";
/// Overrides `server.listen`.
pub const LISTEN_VAR: &str = "ENVPROBE_LISTEN";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| EnvProbeError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| EnvProbeError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply `ENVPROBE_MODE` / `ENVPROBE_LISTEN` on top of `cfg`, then re-validate.
pub fn apply_env_overrides(cfg: &mut ServerConfig, env: &dyn EnvSource) -> Result<()> {
    if let Some(mode) = env.var(MODE_VAR) {
        cfg.probe.mode = mode.parse()?;
    }
    if let Some(listen) = env.var(LISTEN_VAR) {
        cfg.server.listen = listen;
    }
    cfg.validate()
}

/// Resolve the effective config: file named by `ENVPROBE_CONFIG` (defaults
/// when unset), then environment overrides.
pub fn load(env: &dyn EnvSource) -> Result<ServerConfig> {
    let mut cfg = match env.var(CONFIG_PATH_VAR) {
        Some(path) => load_from_file(&path)?,
        None => ServerConfig::default(),
    };
    apply_env_overrides(&mut cfg, env)?;
    Ok(cfg)
}
