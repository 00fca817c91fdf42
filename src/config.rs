// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::engine::{PeriodMode, StatusFilter};
use crate::error::{Error, Result};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.caixa", "Caixa", "caixa"));

pub const DATA_ENV: &str = "CAIXA_DATA";
pub const CONFIG_ENV: &str = "CAIXA_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Snapshot used when `--data` is not given.
    pub data_file: Option<PathBuf>,
    pub default_period: String,
    pub default_status: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            default_period: PeriodMode::Mes.to_string(),
            default_status: StatusFilter::All.to_string(),
        }
    }
}

impl Settings {
    pub fn period(&self) -> PeriodMode {
        PeriodMode::parse_lenient(&self.default_period)
    }

    pub fn status(&self) -> Result<StatusFilter> {
        self.default_status.parse()
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key.trim() {
            "data_file" => {
                self.data_file = Some(value).filter(|v| !v.is_empty()).map(PathBuf::from);
            }
            "default_period" => {
                let mode: PeriodMode = value.parse()?;
                self.default_period = mode.to_string();
            }
            "default_status" => {
                let status: StatusFilter = value.parse()?;
                self.default_status = status.to_string();
            }
            other => {
                return Err(Error::Config(format!(
                    "unknown key '{}' (use data_file|default_period|default_status)",
                    other
                )));
            }
        }
        Ok(())
    }

    /// Data file resolution order: explicit flag, `CAIXA_DATA`, settings.
    pub fn data_path(&self, flag: Option<&str>) -> Result<PathBuf> {
        flag.map(|s| PathBuf::from(s.trim()))
            .or_else(|| env::var_os(DATA_ENV).map(PathBuf::from))
            .or_else(|| self.data_file.clone())
            .ok_or_else(|| {
                Error::Config(format!(
                    "no snapshot given: pass --data, set {} or `caixa config set --key data_file`",
                    DATA_ENV
                ))
            })
    }
}

pub fn config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        Error::Config("could not determine platform-specific config dir".into())
    })?;
    Ok(proj.config_dir().join("settings.json"))
}

pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?).map_err(|e| Error::io(path, e))
}
