// basic-env: Basic Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! vars: Arc<BTreeMap<String, String>>
//! clone shares the Arc until Arc::make_mut() on first write
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::types::{EnvFlags, PATH_SEPARATOR};

/// A set of environment variables with copy-on-write semantics.
///
/// Cloning is cheap: copies share storage until one of them is modified.
/// Keys are compared exactly and iterate in sorted order.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: Arc<BTreeMap<String, String>>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: Arc::new(vars),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_with_flags(key, value, EnvFlags::Replace)
    }

    /// Sets an environment variable with specific flags.
    ///
    /// `Append` and `Prepend` concatenate with the existing value and behave
    /// like `Replace` when the variable is not set yet.
    pub fn set_with_flags(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        flags: EnvFlags,
    ) -> &mut Self {
        let key = key.into();
        let value = value.into();
        let vars = Arc::make_mut(&mut self.vars);

        match (flags, vars.get_mut(&key)) {
            (EnvFlags::Append, Some(existing)) => existing.push_str(&value),
            (EnvFlags::Prepend, Some(existing)) => existing.insert_str(0, &value),
            _ => {
                vars.insert(key, value);
            }
        }

        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.vars.contains_key(key) {
            Arc::make_mut(&mut self.vars).remove(key);
        }
        self
    }

    /// Keeps only the variables for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) -> &mut Self {
        if self.vars.iter().any(|(k, v)| !keep(k.as_str(), v.as_str())) {
            Arc::make_mut(&mut self.vars).retain(|k, v| keep(k.as_str(), v.as_str()));
        }
        self
    }

    /// Merges `other` into this environment; values from `other` win.
    pub fn extend(&mut self, other: &Self) -> &mut Self {
        if !other.is_empty() {
            let vars = Arc::make_mut(&mut self.vars);
            for (key, value) in other.iter() {
                vars.insert(key.to_owned(), value.to_owned());
            }
        }
        self
    }

    /// Prepends a path to the PATH environment variable.
    pub fn prepend_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path, EnvFlags::Prepend)
    }

    /// Appends a path to the PATH environment variable.
    pub fn append_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path, EnvFlags::Append)
    }

    fn modify_path(&mut self, path: impl AsRef<Path>, flags: EnvFlags) -> &mut Self {
        let path_str = path.as_ref().to_string_lossy();

        let new_path = match (flags, self.get("PATH")) {
            (EnvFlags::Prepend, Some(current)) if !current.is_empty() => {
                format!("{path_str}{PATH_SEPARATOR}{current}")
            }
            (EnvFlags::Append, Some(current)) if !current.is_empty() => {
                format!("{current}{PATH_SEPARATOR}{path_str}")
            }
            _ => path_str.into_owned(),
        };

        self.set("PATH", new_path)
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Returns all environment variables as an owned map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.as_ref().clone()
    }

    /// Returns an iterator over environment variables, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns an iterator over variable names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if both values share the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vars, &other.vars)
    }
}

impl From<BTreeMap<String, String>> for Env {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self::from_map(vars)
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(vars: HashMap<String, String>) -> Self {
        vars.into_iter().collect()
    }
}

impl From<Env> for BTreeMap<String, String> {
    fn from(env: Env) -> Self {
        Arc::unwrap_or_clone(env.vars)
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Env {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

/// Renders `KEY=VALUE` lines in key order.
impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl Serialize for Env {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.vars.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Env {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<String, String>::deserialize(deserializer).map(Self::from_map)
    }
}
