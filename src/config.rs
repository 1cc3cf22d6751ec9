use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::{OutputFormat, RenderOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format when `--output` is not given
    pub output: OutputFormat,

    /// Style terminal output
    pub color: bool,

    /// Heading element level for HTML output (1..=6)
    pub heading_level: u8,

    /// Glyph printed before terminal list items
    pub bullet: String,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderOptions::default();
        Config {
            output: OutputFormat::default(),
            color: render.color,
            heading_level: render.heading_level,
            bullet: render.bullet,
        }
    }
}

impl Config {
    /// `<config_dir>/antidoxx/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("antidoxx").join("config.toml"))
    }

    /// Load from the default location. Problems there are logged and the
    /// defaults are used instead.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::debug!("no config directory on this platform, using defaults");
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Load from an explicit path. Any problem is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.heading_level) {
            return Err(Error::Config(format!(
                "heading_level must be 1..=6, got {}",
                self.heading_level
            )));
        }
        if self.bullet.is_empty() {
            return Err(Error::Config("bullet must not be empty".to_string()));
        }
        Ok(())
    }

    /// Terminal styling only applies when output goes to a terminal.
    pub fn for_stream(mut self, is_terminal: bool) -> Self {
        if !is_terminal {
            self.color = false;
        }
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            heading_level: self.heading_level,
            bullet: self.bullet.clone(),
            color: self.color,
        }
    }
}
