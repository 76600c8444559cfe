use crate::cn;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Class strings for the parts of the board. A user value is merged over
/// the default, so `"text-emerald-400"` swaps the color and keeps `font-bold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub title: String,
    pub header: String,
    pub positive: String,
    pub negative: String,
    pub selected: String,
    pub muted: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: "text-cyan-400 font-bold".to_string(),
            header: "text-yellow-400 font-bold".to_string(),
            positive: "text-green-500 font-bold".to_string(),
            negative: "text-red-500 font-bold".to_string(),
            selected: "bg-slate-700 text-white".to_string(),
            muted: "text-gray-500".to_string(),
        }
    }
}

impl Theme {
    /// Every field merged over the built-in default.
    pub fn resolved(&self) -> Theme {
        let base = Theme::default();
        Theme {
            title: cn!(&base.title, &self.title),
            header: cn!(&base.header, &self.header),
            positive: cn!(&base.positive, &self.positive),
            negative: cn!(&base.negative, &self.negative),
            selected: cn!(&base.selected, &self.selected),
            muted: cn!(&base.muted, &self.muted),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    #[serde(default)]
    pub theme: Theme,
}

fn default_title() -> String {
    "Crypto Ranking".to_string()
}

fn default_refresh_interval() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            refresh_interval_secs: default_refresh_interval(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("coin-board");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Reads `path`, writing the defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "creating default config");
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        if config.refresh_interval_secs == 0 {
            tracing::warn!("refresh_interval_secs is 0, using default");
            config.refresh_interval_secs = default_refresh_interval();
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    #[doc(hidden)]
    pub fn test_config() -> Self {
        Self::default()
    }
}
