//! Environment sources.
//!
//! The responder never calls `std::env` directly; it reads through an
//! [`EnvSource`] so the same code path serves the live process and fixed
//! mappings in tests.

use std::ffi::OsString;

/// A read-only environment mapping, yielded in source order.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn share<E: EnvSource + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait EnvSource {
    /// Snapshot of every entry, keys and values as the OS hands them over.
    fn entries(&self) -> Vec<(OsString, OsString)>;

    /// Lookup a single variable as UTF-8. Non-unicode values read as absent.
    fn var(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .rev()
            .find(|(k, _)| k.to_str() == Some(key))
            .and_then(|(_, v)| v.into_string().ok())
    }
}

/// The live process environment, read fresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn entries(&self) -> Vec<(OsString, OsString)> {
        std::env::vars_os().collect()
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory, ordered environment mapping.
#[derive(Debug, Clone, Default)]
pub struct FixedEnv {
    entries: Vec<(OsString, OsString)>,
}

impl FixedEnv {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        entries.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FixedEnv
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EnvSource for FixedEnv {
    fn entries(&self) -> Vec<(OsString, OsString)> {
        self.entries.clone()
    }
}
