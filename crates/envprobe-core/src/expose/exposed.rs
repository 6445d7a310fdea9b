use std::collections::BTreeMap;

use serde::Serialize;

use crate::env::EnvSource;
use crate::error::{EnvProbeError, Result};

use super::rule::ExposeRule;

/// Filtered (and possibly renamed) environment entries.
///
/// Keys are kept sorted so identical environments encode to identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExposedEnv(BTreeMap<String, String>);

impl ExposedEnv {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Compact JSON object text.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| EnvProbeError::Internal(format!("encode exposed env failed: {e}")))
    }
}

/// Apply `rule` to every entry of `source`, in source order.
///
/// Keys and values that are not valid unicode are decoded lossily (invalid
/// sequences become U+FFFD) rather than dropped. When two keys rewrite to the
/// same name, the later entry wins.
pub fn expose<E: EnvSource + ?Sized>(rule: &ExposeRule, source: &E) -> ExposedEnv {
    let mut out = BTreeMap::new();
    for (key, value) in source.entries() {
        let Some(name) = rule.expose_key(&key.to_string_lossy()) else {
            continue;
        };
        out.insert(name, value.to_string_lossy().into_owned());
    }
    tracing::trace!(prefix = rule.prefix(), exposed = out.len(), "env exposed");
    ExposedEnv(out)
}
