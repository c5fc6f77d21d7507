use crate::views::{Locale, ResourceRoutes};
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_CONFIG: &str = "STUDENTVIEWS_CONFIG";
pub const ENV_LOCALE: &str = "STUDENTVIEWS_LOCALE";
pub const ENV_ROUTES_BASE: &str = "STUDENTVIEWS_ROUTES_BASE";
pub const ENV_TITLE: &str = "STUDENTVIEWS_TITLE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub locale: Locale,
    pub routes_base: String,
    pub title: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::Ar,
            routes_base: "/students".to_string(),
            title: None,
        }
    }
}

impl Config {
    /// Optional JSON file named by `STUDENTVIEWS_CONFIG`, then individual
    /// environment overrides on top.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut cfg = match lookup(ENV_CONFIG).filter(|p| !p.trim().is_empty()) {
            Some(path) => Self::load(Path::new(path.trim()))?,
            None => Self::default(),
        };

        if let Some(raw) = lookup(ENV_LOCALE) {
            match Locale::parse(&raw) {
                Some(locale) => cfg.locale = locale,
                None => tracing::warn!(value = %raw, "ignoring unknown {ENV_LOCALE}"),
            }
        }
        if let Some(base) = lookup(ENV_ROUTES_BASE) {
            cfg.routes_base = base.trim().to_string();
        }
        if let Some(title) = lookup(ENV_TITLE) {
            let t = title.trim();
            cfg.title = if t.is_empty() { None } else { Some(t.to_string()) };
        }
        Ok(cfg)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            return Err(anyhow!("config file not found: {}", path.to_string_lossy()));
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.to_string_lossy()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.to_string_lossy()))
    }

    pub fn routes(&self) -> ResourceRoutes {
        ResourceRoutes::new(&self.routes_base)
    }
}
