use crate::konst;
use crate::light::Light;

#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: konst::WINDOW_WIDTH,
            height: konst::WINDOW_HEIGHT,
            scale: konst::WINDOW_SCALE,
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    #[serde(with = "humantime_serde")]
    pub red: std::time::Duration,

    #[serde(with = "humantime_serde")]
    pub yellow: std::time::Duration,

    #[serde(with = "humantime_serde")]
    pub green: std::time::Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            red: konst::DWELL_RED,
            yellow: konst::DWELL_YELLOW,
            green: konst::DWELL_GREEN,
        }
    }
}

impl TimingConfig {
    /// How long the given light stays active before the cycle advances.
    pub fn dwell(&self, light: Light) -> std::time::Duration {
        match light {
            Light::Red => self.red,
            Light::Yellow => self.yellow,
            Light::Green => self.green,
        }
    }
}

impl Config {
    pub async fn load(path: &camino::Utf8Path) -> Result<Self, ConfigError> {
        let config_str =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::ReadingFile {
                    path: path.to_path_buf(),
                    source,
                })?;

        toml::from_str(&config_str).map_err(ConfigError::ParsingConfig)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file from path '{}'", .path)]
    ReadingFile {
        path: camino::Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    ParsingConfig(#[from] toml::de::Error),
}
