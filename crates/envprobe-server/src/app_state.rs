//! Shared application state.
//!
//! Built once at startup and cloned per request; everything behind `Arc`.

use std::sync::Arc;

use envprobe_core::env::{EnvSource, ProcessEnv};
use envprobe_core::expose::ExposeRule;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    rule: ExposeRule,
    env: Arc<dyn EnvSource + Send + Sync>,
}

impl AppState {
    /// State reading the live process environment.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_env(cfg, Arc::new(ProcessEnv))
    }

    pub fn with_env(cfg: ServerConfig, env: Arc<dyn EnvSource + Send + Sync>) -> Self {
        let rule = cfg.probe.mode.rule();
        Self {
            inner: Arc::new(AppStateInner { cfg, rule, env }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn rule(&self) -> &ExposeRule {
        &self.inner.rule
    }

    pub fn env(&self) -> &(dyn EnvSource + Send + Sync) {
        self.inner.env.as_ref()
    }
}
