use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::cycle::{ClosingDayOverflow, RolloverPolicy, DEFAULT_DAYS_AFTER_CLOSING};
use crate::errors::BillingError;
use crate::format::{FormatType, DEFAULT_LOCALE};

const DEFAULT_DIR_NAME: &str = ".billing_core";
const HOME_ENV: &str = "BILLING_CORE_HOME";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "billing.json";
const TMP_SUFFIX: &str = "tmp";

/// Defaults applied when a card or caller does not say otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    pub default_policy: RolloverPolicy,
    pub days_after_closing: u32,
    pub locale: String,
    pub format_type: FormatType,
    pub overflow: ClosingDayOverflow,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            default_policy: RolloverPolicy::default(),
            days_after_closing: DEFAULT_DAYS_AFTER_CLOSING,
            locale: DEFAULT_LOCALE.into(),
            format_type: FormatType::default(),
            overflow: ClosingDayOverflow::default(),
        }
    }
}

/// Returns the application data directory, defaulting to `~/.billing_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves [`BillingConfig`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BillingError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BillingError> {
        let config_dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self {
            path: config_dir.join(CONFIG_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<BillingConfig, BillingError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no billing config; using defaults");
            return Ok(BillingConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &BillingConfig) -> Result<(), BillingError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "billing config saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), BillingError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
