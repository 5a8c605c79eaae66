use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::marquee::{DEFAULT_DELAY, StartOptions};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Motion parameters used when the demo starts a marquee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Scroll speed in cells per second
    #[serde(default = "default_velocity")]
    pub velocity: f64,
    /// Seconds to rest before the first motion
    #[serde(default = "default_delay")]
    pub delay: f64,
    /// Blank cells between the end of one repetition and the start of the next
    #[serde(default = "default_spacing")]
    pub spacing: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            velocity: default_velocity(),
            delay: default_delay(),
            spacing: default_spacing(),
        }
    }
}

impl MarqueeConfig {
    pub fn start_options(&self) -> StartOptions {
        StartOptions {
            velocity: self.velocity,
            delay: self.delay,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while nothing moves
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a marquee is sliding
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Theme configuration, either a bare name or a table with color overrides
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ThemeSetting")]
pub struct ThemeConfig {
    /// Theme name ("default" or "mono")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

/// On-disk shapes accepted for `[ui] theme`
#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeSetting {
    Name(String),
    Table {
        #[serde(default = "default_theme_name")]
        name: String,
        #[serde(default)]
        colors: ThemeColorOverrides,
    },
}

impl From<ThemeSetting> for ThemeConfig {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Name(name) => Self {
                name,
                colors: ThemeColorOverrides::default(),
            },
            ThemeSetting::Table { name, colors } => Self { name, colors },
        }
    }
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Marquee text
    pub fg: Option<String>,
    /// Background
    pub bg: Option<String>,
    /// Selected row / highlights
    pub accent: Option<String>,
    /// Container borders
    pub border: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slidetext")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_velocity() -> f64 {
    10.0
}

fn default_delay() -> f64 {
    DEFAULT_DELAY
}

fn default_spacing() -> f64 {
    6.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "default".to_string()
}

/// Resolve a leading `~` component against the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            debug!(path = %config_path.display(), "loading config");
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/slidetext/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("slidetext")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("slidetext.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
