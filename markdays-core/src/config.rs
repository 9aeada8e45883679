//! markdays configuration.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::constants::DATA_FILE_NAME;
use crate::error::{MarkdaysError, MarkdaysResult};

static FALLBACK_DATA_DIR: &str = "~/.markdays";

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("markdays"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

fn default_store_name() -> String {
    DATA_FILE_NAME.to_string()
}

/// Configuration at ~/.config/markdays/config.toml
///
/// Every field can be overridden with a `MARKDAYS_<FIELD>` environment variable.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarkdaysConfig {
    /// Directory holding the store file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File name of the store inside `data_dir`
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// IANA timezone deciding which day is "today" (local time if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Default for MarkdaysConfig {
    fn default() -> Self {
        MarkdaysConfig {
            data_dir: default_data_dir(),
            store_name: default_store_name(),
            timezone: None,
        }
    }
}

impl MarkdaysConfig {
    pub fn config_path() -> MarkdaysResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MarkdaysError::Config("Could not determine config directory".into()))?
            .join("markdays");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/markdays/config.toml, writing a commented default first
    /// if it doesn't exist yet.
    pub fn load() -> MarkdaysResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> MarkdaysResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`load_from`](Self::load_from), reading `MARKDAYS_*` overrides from
    /// `env` instead of the process environment when given.
    fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> MarkdaysResult<Self> {
        let config: MarkdaysConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("MARKDAYS").source(env))
            .build()
            .map_err(|e| MarkdaysError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| MarkdaysError::Config(e.to_string()))?;

        // Fail early rather than on the first "today" lookup
        config.reference_timezone()?;

        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> MarkdaysResult<()> {
        let contents = format!(
            "\
# markdays configuration

# Where marked days are stored:
# data_dir = \"{}\"

# Store file inside data_dir:
# store_name = \"{}\"

# Timezone used to decide which day is today (defaults to local time):
# timezone = \"Europe/Berlin\"
",
            default_data_dir().display(),
            DATA_FILE_NAME
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MarkdaysError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| MarkdaysError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_path().join(&self.store_name)
    }

    pub fn reference_timezone(&self) -> MarkdaysResult<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| MarkdaysError::InvalidTimezone(name.to_string()))
            })
            .transpose()
    }

    /// Today's date in the reference timezone.
    pub fn today(&self) -> MarkdaysResult<NaiveDate> {
        Ok(match self.reference_timezone()? {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        })
    }
}
