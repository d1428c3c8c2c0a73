use crate::error::Result;
use crate::import_export::{Importer, DEFAULT_EXPORT_TITLE};
use crate::palette::{Palette, RandomColors, DEFAULT_PALETTE};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Colors handed out to categories created from bookmark folders
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Fixed seed for category colors; random when unset
    #[serde(default)]
    pub color_seed: Option<u64>,

    /// Title written into exported Netscape files
    #[serde(default = "default_export_title")]
    pub export_title: String,

    /// `sort_order` of the first imported board
    #[serde(default)]
    pub first_board_order: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            color_seed: None,
            export_title: default_export_title(),
            first_board_order: 0,
        }
    }
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn default_export_title() -> String {
    DEFAULT_EXPORT_TITLE.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        // An empty or comment-only file deserializes to unit, not a map
        if contents.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/linkboard/config.yml)
    pub fn load() -> Self {
        Self::load_from_dir(&crate::utils::get_config_dir())
    }

    /// Load `config.yml` from `dir`.
    /// Falls back to default config if the file doesn't exist or is broken
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to load config from {:?}: {}; using defaults",
                        config_path, e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Validated palette from the configured colors
    pub fn palette(&self) -> Result<Palette> {
        Palette::new(self.palette.iter().cloned())
    }

    /// Importer honouring the configured palette and seed; `seed` overrides the file
    pub fn importer(&self, seed: Option<u64>) -> Result<Importer> {
        let palette = self.palette()?;
        Ok(match seed.or(self.color_seed) {
            Some(seed) => Importer::seeded(palette, seed),
            None => Importer::new(palette, Box::new(RandomColors)),
        })
    }
}
