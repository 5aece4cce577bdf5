//! Immutable snapshot of the process environment.

use std::collections::BTreeMap;

/// Environment variables captured once at process start.
///
/// The snapshot never changes after construction and is passed explicitly
/// to the propagator, so resolution never re-reads the live environment.
/// Iteration is in lexicographic key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Look up a variable, treating an empty value as absent.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// Look up a variable, defaulting to the empty string.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Whether the variable is set to a non-empty value.
    pub fn is_set(&self, name: &str) -> bool {
        self.get_non_empty(name).is_some()
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_not_set() {
        let env: EnvSnapshot = [("A", ""), ("B", "x")].into_iter().collect();

        assert_eq!(env.get("A"), Some(""));
        assert!(!env.is_set("A"));
        assert!(env.is_set("B"));
        assert!(!env.is_set("C"));
    }

    #[test]
    fn test_get_or_empty_defaults() {
        let env: EnvSnapshot = [("FOO_USERNAME", "u")].into_iter().collect();

        assert_eq!(env.get_or_empty("FOO_USERNAME"), "u");
        assert_eq!(env.get_or_empty("FOO_PASSWORD"), "");
    }

    #[test]
    fn test_iteration_is_sorted() {
        let env: EnvSnapshot = [("B_AWS_USERNAME", "2"), ("A_AWS_USERNAME", "1")]
            .into_iter()
            .collect();

        let keys: Vec<&str> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A_AWS_USERNAME", "B_AWS_USERNAME"]);
    }

    #[test]
    fn test_capture_reads_process_environment() {
        temp_env::with_var("CREDBRIDGE_SNAPSHOT_PROBE", Some("present"), || {
            let env = EnvSnapshot::capture();
            assert_eq!(env.get("CREDBRIDGE_SNAPSHOT_PROBE"), Some("present"));
        });
    }
}
