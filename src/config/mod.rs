use crate::core::stats::DEFAULT_TOP_PRODUCTS;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Location of the damage log CSV. Relative paths are resolved against
    /// the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// How many products the "most damaged" ranking shows.
    #[serde(default = "default_top_products")]
    pub top_products: usize,
}

fn default_data_file() -> String {
    "data/damage_log.csv".to_string()
}

fn default_top_products() -> usize {
    DEFAULT_TOP_PRODUCTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            top_products: default_top_products(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("damagelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".damagelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("damagelog.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file is reported as a warning and replaced by defaults so
    /// the tool keeps working.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!("Ignoring malformed config file: {e}"));
                Self::default()
            }),
            Err(e) => {
                warning(format!("Cannot read config file: {e}"));
                Self::default()
            }
        }
    }

    /// Initialize the configuration file and an empty damage log store.
    pub fn init_all(custom_data_file: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            data_file: custom_data_file.unwrap_or_else(default_data_file),
            top_products: default_top_products(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {:?}", Self::config_file()));
        }

        // Create header-only store if not exists
        let store = RecordStore::new(expand_tilde(&config.data_file));
        store.ensure_initialized()?;
        success(format!("Damage log: {:?}", store.path()));

        Ok(())
    }
}
