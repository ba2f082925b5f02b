use crate::core::builder::{BuilderSettings, CropOnReplace, SlotLayout};
use crate::core::example::ExampleSource;
use crate::errors::{AppError, AppResult};
use crate::models::crop::DEFAULT_Y;
use crate::models::normalize::Defaults;
use crate::store::DEFAULT_NAMESPACE;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// `null` for an unbounded list of slots.
    #[serde(default = "default_max_slots")]
    pub max_slots: Option<usize>,
    #[serde(default = "default_crop_on_replace")]
    pub crop_on_replace: CropOnReplace,
    #[serde(default = "default_y")]
    pub default_y: f64,
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
    #[serde(default = "default_win_delay_ms")]
    pub win_delay_ms: u64,
    #[serde(default)]
    pub flip_sound: bool,
    #[serde(default)]
    pub example_board: Option<String>,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}
fn default_max_slots() -> Option<usize> {
    Some(20)
}
fn default_crop_on_replace() -> CropOnReplace {
    CropOnReplace::Reset
}
fn default_y() -> f64 {
    DEFAULT_Y
}
fn default_max_image_bytes() -> u64 {
    5 * 1024 * 1024
}
fn default_win_delay_ms() -> u64 {
    500
}
fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_store(Self::store_file().to_string_lossy().to_string())
    }
}

impl Config {
    fn with_store(store: String) -> Self {
        Self {
            store,
            namespace: default_namespace(),
            max_slots: default_max_slots(),
            crop_on_replace: default_crop_on_replace(),
            default_y: default_y(),
            max_image_bytes: default_max_image_bytes(),
            win_delay_ms: default_win_delay_ms(),
            flip_sound: false,
            example_board: None,
            export_dir: default_export_dir(),
            log_file: None,
        }
    }

    /// Return the standard configuration directory (`~/.guesswho`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".guesswho")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("guesswho.conf")
    }

    /// Return the default path of the board store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("boards.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Create the config directory, the config file (unless `is_test`)
    /// and an empty store. Returns the store path.
    pub fn init_all(custom_store: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let store_path = match custom_store {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() || is_test { p } else { dir.join(p) }
            }
            None => Self::store_file(),
        };

        if !is_test {
            Self::with_store(store_path.to_string_lossy().to_string()).write()?;
        }

        Ok(store_path)
    }

    /// Write this configuration to the config file, creating its directory.
    pub fn write(&self) -> AppResult<PathBuf> {
        let path = Self::config_file();
        fs::create_dir_all(Self::config_dir())?;
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    /// Audit log location: `log_file`, or next to the store.
    pub fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(p) => expand_tilde(p),
            None => self.store_path().with_extension("log"),
        }
    }

    pub fn export_path(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    pub fn defaults(&self) -> Defaults {
        Defaults { y: self.default_y }
    }

    pub fn builder_settings(&self) -> BuilderSettings {
        BuilderSettings {
            layout: match self.max_slots {
                Some(n) if n > 0 => SlotLayout::Fixed(n),
                _ => SlotLayout::Unbounded,
            },
            crop_on_replace: self.crop_on_replace,
            default_y: self.default_y,
        }
    }

    pub fn example_source(&self) -> ExampleSource {
        match &self.example_board {
            Some(p) => ExampleSource::File(expand_tilde(p)),
            None => ExampleSource::Bundled,
        }
    }
}
