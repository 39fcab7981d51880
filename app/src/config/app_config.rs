//! Runtime configuration loaded from the environment, then CLI overrides.

use anyhow::{Context, anyhow};
use bitmap_engine::{BoundingBox, DEFAULT_THRESHOLD, PANEL_HEIGHT, PANEL_WIDTH};

use super::{KEY_MAX_HEIGHT, KEY_MAX_WIDTH, KEY_THRESHOLD, validate_setting};
use crate::cli::Cli;

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub threshold: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_width: PANEL_WIDTH,
            max_height: PANEL_HEIGHT,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load configuration from a key lookup. Missing or empty keys keep
    /// their defaults; present values must validate.
    pub fn load(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(v) = setting(&get, KEY_MAX_WIDTH)? {
            config.max_width = v.parse().context(KEY_MAX_WIDTH)?;
        }
        if let Some(v) = setting(&get, KEY_MAX_HEIGHT)? {
            config.max_height = v.parse().context(KEY_MAX_HEIGHT)?;
        }
        if let Some(v) = setting(&get, KEY_THRESHOLD)? {
            config.threshold = v.parse().context(KEY_THRESHOLD)?;
        }

        Ok(config)
    }

    /// Apply command-line flags on top of the loaded values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(w) = cli.max_width {
            self.max_width = w;
        }
        if let Some(h) = cli.max_height {
            self.max_height = h;
        }
        if let Some(t) = cli.threshold {
            self.threshold = t;
        }
        self
    }

    pub fn bounds(&self) -> anyhow::Result<BoundingBox> {
        Ok(BoundingBox::new(self.max_width, self.max_height)?)
    }
}

/// Fetch and validate a single setting, trimmed. Empty values count as unset.
fn setting(get: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<String>> {
    let Some(raw) = get(key) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    validate_setting(key, value).map_err(|e| anyhow!("invalid {key}={value:?}: {e}"))?;
    Ok(Some(value.to_string()))
}
