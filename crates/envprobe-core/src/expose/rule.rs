use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{EnvProbeError, Result};

/// Stock variants served by the responder.
///
/// Config and `ENVPROBE_MODE` both parse through [`FromStr`], so either
/// accepts `pod` / `public` in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ExposeMode {
    /// `POD_*` under original names.
    #[default]
    Pod,
    /// `PUBLIC_*`, marker removed and lowercased.
    Public,
}

impl ExposeMode {
    pub fn rule(self) -> ExposeRule {
        match self {
            ExposeMode::Pod => ExposeRule::new("POD_", KeyRewrite::Keep),
            ExposeMode::Public => ExposeRule::new("PUBLIC_", KeyRewrite::StripLowercase),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExposeMode::Pod => "pod",
            ExposeMode::Public => "public",
        }
    }
}

impl fmt::Display for ExposeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExposeMode {
    type Err = EnvProbeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pod" => Ok(ExposeMode::Pod),
            "public" => Ok(ExposeMode::Public),
            other => Err(EnvProbeError::BadRequest(format!(
                "unknown expose mode: {other} (expected pod or public)"
            ))),
        }
    }
}

impl TryFrom<String> for ExposeMode {
    type Error = EnvProbeError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// How a matched key is renamed before it is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRewrite {
    /// Emit the key unchanged.
    Keep,
    /// Remove every occurrence of the prefix (not just the leading one),
    /// then lowercase.
    StripLowercase,
}

/// Prefix filter plus key rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposeRule {
    prefix: String,
    rewrite: KeyRewrite,
}

impl ExposeRule {
    pub fn new(prefix: impl Into<String>, rewrite: KeyRewrite) -> Self {
        Self { prefix: prefix.into(), rewrite }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn rewrite(&self) -> KeyRewrite {
        self.rewrite
    }

    /// Returns the emitted key, or `None` when `key` is not exposed.
    pub fn expose_key(&self, key: &str) -> Option<String> {
        if !key.starts_with(&self.prefix) {
            return None;
        }
        match self.rewrite {
            KeyRewrite::Keep => Some(key.to_string()),
            // substring replace: PUBLIC_PUBLIC_X -> x
            KeyRewrite::StripLowercase => Some(key.replace(&self.prefix, "").to_lowercase()),
        }
    }
}
