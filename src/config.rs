// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "ENDLESS_NEWS_CONFIG_PATH";
pub const ENV_FEED_URL: &str = "ENDLESS_NEWS_FEED_URL";
pub const DEFAULT_CONFIG_PATH: &str = "config/endless-news.toml";

/// The feed the original reader shipped with.
pub const DEFAULT_FEED_URL: &str = "https://www.vesti.ru/vesti.rss";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub feed_url: String,
    /// Overall fetch timeout; on expiry the load fails, nothing partial.
    pub request_timeout_secs: u64,
    /// Category name stamped on parsed news before grouping.
    pub default_category: String,
    pub prefs_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            request_timeout_secs: 10,
            default_category: String::new(),
            prefs_path: PathBuf::from("config/prefs.json"),
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

/// Load from an explicit TOML path.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    let mut cfg: AppConfig = toml::from_str(&content)
        .with_context(|| format!("parsing config from {}", path.display()))?;
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

/// Load using env + fallbacks:
/// 1) $ENDLESS_NEWS_CONFIG_PATH
/// 2) config/endless-news.toml
/// 3) built-in defaults
pub fn load_default() -> Result<AppConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        return load_from(&pb)
            .with_context(|| format!("{ENV_CONFIG_PATH} points to an unusable config"));
    }
    let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
    if default_p.exists() {
        return load_from(&default_p);
    }
    let mut cfg = AppConfig::default();
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut AppConfig) {
    if let Ok(url) = std::env::var(ENV_FEED_URL) {
        if !url.trim().is_empty() {
            cfg.feed_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.feed_url, DEFAULT_FEED_URL);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert!(cfg.default_category.is_empty());
    }

    #[serial_test::serial]
    #[test]
    fn explicit_path_and_env_override_work() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("endless-news.toml");
        fs::write(
            &p,
            r#"
feed_url = "https://example.test/feed.rss"
request_timeout_secs = 3
default_category = "World"
"#,
        )
        .unwrap();

        env::remove_var(ENV_FEED_URL);
        let cfg = load_from(&p).unwrap();
        assert_eq!(cfg.feed_url, "https://example.test/feed.rss");
        assert_eq!(cfg.request_timeout_secs, 3);
        assert_eq!(cfg.default_category, "World");

        env::set_var(ENV_FEED_URL, "https://override.test/feed.rss");
        let cfg = load_from(&p).unwrap();
        assert_eq!(cfg.feed_url, "https://override.test/feed.rss");
        env::remove_var(ENV_FEED_URL);
    }

    #[serial_test::serial]
    #[test]
    fn default_falls_back_when_no_files_exist() {
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();

        env::remove_var(ENV_CONFIG_PATH);
        env::remove_var(ENV_FEED_URL);

        let cfg = load_default().unwrap();
        assert_eq!(cfg, AppConfig::default());

        env::set_current_dir(&old).unwrap();
    }
}
