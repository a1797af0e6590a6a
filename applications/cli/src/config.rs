//! Study configuration
use flashdeck_importer::{reader::delimiter_byte, LoadOptions, DEFAULT_DELIMITER};
use flashdeck_playback::autoplay::{DEFAULT_FLIP_SECS, DEFAULT_SWITCH_SECS};
use flashdeck_playback::AutoplayTiming;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "flashdeck.toml";

/// Environment variable prefix (`FLASHDECK__AUTOPLAY__FLIPTIME=5`)
pub const ENV_PREFIX: &str = "FLASHDECK";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StudyConfig {
    #[serde(default)]
    pub deck: DeckSettings,

    #[serde(default)]
    pub autoplay: AutoplaySettings,

    #[serde(default)]
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeckSettings {
    /// Deck file; none means an empty deck
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub remove_duplicates: bool,

    /// Prefix for relative sound paths; defaults to the deck's directory
    #[serde(default)]
    pub sound_base: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AutoplaySettings {
    #[serde(default = "default_fliptime")]
    pub fliptime: f64,

    #[serde(default = "default_switchtime")]
    pub switchtime: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AudioSettings {
    /// Player executable; resolved from the system when unset
    #[serde(default)]
    pub player: Option<PathBuf>,
}

impl StudyConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `flashdeck.toml` is read
    /// when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, config::Environment::default())
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (FLASHDECK__SECTION__KEY)
        settings = settings.add_source(
            env.prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let delimiter = self.delimiter()?;
        delimiter_byte(delimiter).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if let Some(path) = &self.deck.path {
            if !path.is_file() {
                return Err(ConfigError::Invalid(format!(
                    "Deck file not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// The configured delimiter as a single character
    pub fn delimiter(&self) -> Result<char> {
        let mut chars = self.deck.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConfigError::Invalid(format!(
                "Delimiter must be a single character, got {:?}",
                self.deck.delimiter
            ))),
        }
    }

    pub fn load_options(&self) -> Result<LoadOptions> {
        Ok(LoadOptions {
            shuffle: self.deck.shuffle,
            remove_duplicates: self.deck.remove_duplicates,
            delimiter: self.delimiter()?,
        })
    }

    /// Autoplay intervals, floored at two seconds
    pub fn timing(&self) -> AutoplayTiming {
        AutoplayTiming::new(self.autoplay.fliptime, self.autoplay.switchtime)
    }
}

// Default values
impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: default_delimiter(),
            shuffle: false,
            remove_duplicates: false,
            sound_base: None,
        }
    }
}

impl Default for AutoplaySettings {
    fn default() -> Self {
        Self {
            fliptime: default_fliptime(),
            switchtime: default_switchtime(),
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_fliptime() -> f64 {
    DEFAULT_FLIP_SECS
}

fn default_switchtime() -> f64 {
    DEFAULT_SWITCH_SECS
}
