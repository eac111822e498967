//! Runtime configuration read from the environment.
//!
//! The binary calls `dotenvy::dotenv()` first, so every key can also live
//! in a `.env` file:
//!
//! ```text
//! RESULTS_API_BASE_URL=http://194.238.23.60:5007
//! RESULTS_TOKEN_PATH=.results_viewer/token
//! RESULTS_SUBJECT_MAX_MARKS=10
//! RESULTS_HTTP_TIMEOUT_SECS=30
//! ```

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::normalize::SubjectMaxMarks;

pub const DEFAULT_BASE_URL: &str = "http://194.238.23.60:5007";
pub const DEFAULT_TOKEN_PATH: &str = ".results_viewer/token";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub token_path: PathBuf,
    pub subject_max_marks: SubjectMaxMarks,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
            subject_max_marks: SubjectMaxMarks::default(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or blank keys
    /// keep their defaults; malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("RESULTS_API_BASE_URL") {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(path) = get("RESULTS_TOKEN_PATH") {
            config.token_path = PathBuf::from(path);
        }
        if let Some(max) = get("RESULTS_SUBJECT_MAX_MARKS") {
            config.subject_max_marks = max
                .parse()
                .with_context(|| "RESULTS_SUBJECT_MAX_MARKS")?;
        }
        if let Some(secs) = get("RESULTS_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("RESULTS_HTTP_TIMEOUT_SECS must be an integer, got '{secs}'"))?;
            config.http_timeout = Duration::from_secs(secs.max(1));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.subject_max_marks, SubjectMaxMarks::Fixed(10.0));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RESULTS_API_BASE_URL", "https://results.example.edu/"),
            ("RESULTS_TOKEN_PATH", "/tmp/tok"),
            ("RESULTS_SUBJECT_MAX_MARKS", "exam-total"),
            ("RESULTS_HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://results.example.edu");
        assert_eq!(config.token_path, PathBuf::from("/tmp/tok"));
        assert_eq!(config.subject_max_marks, SubjectMaxMarks::ExamTotal);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("RESULTS_API_BASE_URL", "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_bad_values() {
        assert!(AppConfig::from_lookup(lookup(&[("RESULTS_HTTP_TIMEOUT_SECS", "soon")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("RESULTS_SUBJECT_MAX_MARKS", "-3")])).is_err());
    }
}
