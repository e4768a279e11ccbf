use std::env;
use std::path::PathBuf;

use anyhow::Context;

pub const LISTS_VAR: &str = "SYNONYM_QUIZ_LISTS";
pub const CLASS_FIRST_VAR: &str = "SYNONYM_QUIZ_CLASS_FIRST";
pub const CLASS_SECOND_VAR: &str = "SYNONYM_QUIZ_CLASS_SECOND";
pub const USER_DATA_VAR: &str = "SYNONYM_QUIZ_USER_DATA";
pub const SEED_VAR: &str = "SYNONYM_QUIZ_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Reference lists, overlaid in order.
    pub lists: Vec<PathBuf>,
    pub class_first: PathBuf,
    pub class_second: PathBuf,
    pub user_data: PathBuf,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lists: vec![PathBuf::from("synonyms.json")],
            class_first: PathBuf::from("class_first.json"),
            class_second: PathBuf::from("class_second.json"),
            user_data: PathBuf::from("user_synonyms.json"),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(lists) = lookup(LISTS_VAR) {
            config.lists = lists
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect();
        }
        if let Some(path) = lookup(CLASS_FIRST_VAR) {
            config.class_first = PathBuf::from(path);
        }
        if let Some(path) = lookup(CLASS_SECOND_VAR) {
            config.class_second = PathBuf::from(path);
        }
        if let Some(path) = lookup(USER_DATA_VAR) {
            config.user_data = PathBuf::from(path);
        }
        if let Some(seed) = lookup(SEED_VAR) {
            let seed = seed
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be an unsigned integer, got '{}'", SEED_VAR, seed))?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (LISTS_VAR, "a.json, b.json,"),
            (USER_DATA_VAR, "/tmp/mine.json"),
            (SEED_VAR, "42"),
        ]))
        .unwrap();
        assert_eq!(config.lists, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(config.user_data, PathBuf::from("/tmp/mine.json"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[(SEED_VAR, "abc")])).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));
    }
}
